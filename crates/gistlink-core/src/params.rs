//! Query-string parameters and page location.
//!
//! A location is either a full URL (`https://host/page?gistid=abc`) or a bare
//! query string (`?gistid=abc` or `gistid=abc`).

use url::form_urlencoded;

/// Description value that suppresses the description block entirely.
pub const SUPPRESS_DESCRIPTION: &str = "0";

/// Path and query of the "page" being served; used for telemetry keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    /// Path component, `/` when the location was a bare query string.
    pub path: String,
    /// Query string including the leading `?`, or empty.
    pub search: String,
}

impl PageLocation {
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.contains("://") {
            if let Ok(parsed) = url::Url::parse(location) {
                let search = parsed
                    .query()
                    .map(|q| format!("?{q}"))
                    .unwrap_or_default();
                return Self {
                    path: parsed.path().to_string(),
                    search,
                };
            }
        }

        let query = location.trim_start_matches('?');
        Self {
            path: "/".to_string(),
            search: if query.is_empty() {
                String::new()
            } else {
                format!("?{query}")
            },
        }
    }

    /// Key recorded for a page view: path followed by the query string.
    pub fn page_key(&self) -> String {
        format!("{}{}", self.path, self.search)
    }

    pub fn params(&self) -> InputParameters {
        InputParameters::from_query(&self.search)
    }
}

/// Parameters read once from the query string.
///
/// A key given with an empty value counts as absent; when a key repeats,
/// the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputParameters {
    pub title: Option<String>,
    pub gist_id: Option<String>,
    pub revision_prefix: Option<String>,
    pub button_label: Option<String>,
    pub description: Option<String>,
}

impl InputParameters {
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let mut params = InputParameters::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "title" => &mut params.title,
                "gistid" => &mut params.gist_id,
                "rev" => &mut params.revision_prefix,
                "button" => &mut params.button_label,
                "descr" => &mut params.description,
                _ => continue,
            };
            if slot.is_none() && !value.is_empty() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }

    /// True when `descr=0` asked for the description to be hidden.
    pub fn description_suppressed(&self) -> bool {
        self.description.as_deref() == Some(SUPPRESS_DESCRIPTION)
    }
}
