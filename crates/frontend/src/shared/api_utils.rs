//! API URL helpers.
//!
//! The data source lives behind an externally configured base URL: the
//! deployment injects a `BOOKING_API_URL` global onto `window` before the
//! wasm bundle starts. Without it requests stay same-origin relative.

use wasm_bindgen::JsValue;

/// Base URL for the booking API, without a trailing slash.
///
/// Empty string when the global is not set (or there is no window), which
/// keeps requests relative to the current origin.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    js_sys::Reflect::get(&window, &JsValue::from_str("BOOKING_API_URL"))
        .ok()
        .and_then(|value| value.as_string())
        .map(|base| base.trim_end_matches('/').to_string())
        .unwrap_or_default()
}

/// Build a full API URL from a path starting with `/api/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
