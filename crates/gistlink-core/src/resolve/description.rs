//! Description shown under the button.

use crate::params::SUPPRESS_DESCRIPTION;

/// `descr=0` hides the description, any other value replaces it, and no
/// value falls back to the Gist's own description.
pub fn description_text(param: Option<&str>, record_description: Option<&str>) -> String {
    match param {
        Some(SUPPRESS_DESCRIPTION) => String::new(),
        Some(text) => text.to_string(),
        None => record_description.unwrap_or_default().to_string(),
    }
}
