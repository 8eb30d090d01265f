//! Document-level helpers for the page chrome
//!
//! Every helper tolerates a missing `window`/`document`/`body` and does nothing
//! in that case.

use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// Smooth-scroll the viewport back to the top.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Lock or release page scrolling through `body.style.overflow`.
pub fn set_scroll_lock(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let style = body.style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// `data-page` of the clicked element or its nearest ancestor carrying one.
pub fn data_page_of(event: &web_sys::Event) -> Option<String> {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("[data-page]").ok().flatten())
        .and_then(|el| el.get_attribute("data-page"))
}

/// One log line for an uncaught script error.
pub fn describe_error(message: &str, filename: &str, line: u32, column: u32) -> String {
    if filename.is_empty() {
        format!("uncaught error: {message}")
    } else {
        format!("uncaught error: {message} ({filename}:{line}:{column})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_error_with_location() {
        assert_eq!(
            describe_error("x is undefined", "http://localhost:8080/app.js", 12, 7),
            "uncaught error: x is undefined (http://localhost:8080/app.js:12:7)"
        );
    }

    #[test]
    fn test_describe_error_without_location() {
        // cross-origin scripts report no file
        assert_eq!(describe_error("Script error.", "", 0, 0), "uncaught error: Script error.");
    }
}
