//! Required-field checks for request bodies.
//!
//! A field counts as missing when it is absent, an empty string, or a zero
//! id. Any other id is passed on to the existence checks or the insert.

/// Returns the text when it is present and non-empty
pub fn required_text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Returns the id when it is present and non-zero
pub fn required_id(value: Option<i64>) -> Option<i64> {
    value.filter(|id| *id != 0)
}

/// Parses an id taken from the request path
pub fn parse_path_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
