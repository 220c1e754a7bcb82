//! Toast broadcast channel
//!
//! Fire-and-forget: dispatch a `toast` CustomEvent on `window` carrying a
//! short message. The display surface listens for the event, shows the
//! message, and dismisses it after [`TOAST_DISMISS_MS`]. No delivery
//! confirmation, no queueing; at most one toast is expected on screen.

use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, CustomEventInit};

/// Event name the display surface listens for
pub const TOAST_EVENT: &str = "toast";

/// How long the display surface keeps a toast visible, in milliseconds
pub const TOAST_DISMISS_MS: u32 = 1600;

/// Expose the dismiss interval to the host page
#[wasm_bindgen]
pub fn toast_dismiss_ms() -> u32 {
    TOAST_DISMISS_MS
}

/// Broadcast a toast message; a no-op outside a window context
pub fn notify(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let init = CustomEventInit::new();
    init.set_detail(&JsValue::from_str(message));
    if let Ok(event) = CustomEvent::new_with_event_init_dict(TOAST_EVENT, &init) {
        let _ = window.dispatch_event(&event);
    }
}
