//! Helpers for naming backend endpoints
//!
//! The site has no backend yet; form intake uses these to say where a
//! payload would be posted.

/// Origin of the current page, e.g. `https://mobinengineers.com`.
///
/// Empty string if window is not available.
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path starting with `/api/`.
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/quote");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
