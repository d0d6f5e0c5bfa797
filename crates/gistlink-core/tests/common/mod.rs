pub mod gist_server;
