//! User Notifications

use wasm_bindgen::JsValue;

/// Show a modal browser alert. Blocks the page until dismissed.
pub fn show_blocking_error(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("[APP] No window to show alert: {}", message);
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        log::warn!("[APP] Alert failed: {}", js_error(err));
    }
}

/// Readable text for a JS exception value.
pub fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
