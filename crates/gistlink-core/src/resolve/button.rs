//! Default label of the action button.

/// Label used for calendar files.
pub const CALENDAR_LABEL: &str = "Add to calendar";

/// Label used for everything else.
pub const DOWNLOAD_LABEL: &str = "Download";

/// Extension after the last '.', if the name has one.
pub fn file_extension(filename: &str) -> Option<&str> {
    filename.rsplit_once('.').map(|(_, ext)| ext)
}

/// Explicit `button` label wins; otherwise `.ics` files (any case) get the
/// calendar label and everything else gets "Download".
pub fn button_text(label: Option<&str>, filename: &str) -> String {
    if let Some(label) = label {
        return label.to_string();
    }
    match file_extension(filename) {
        Some(ext) if ext.eq_ignore_ascii_case("ics") => CALENDAR_LABEL.to_string(),
        _ => DOWNLOAD_LABEL.to_string(),
    }
}
