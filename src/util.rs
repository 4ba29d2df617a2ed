// DOM-facing helpers shared by the overlay components.

use wasm_bindgen::JsValue;
use web_sys::{KeyboardEvent, KeyboardEventInit};

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Dispatches a synthetic keydown/keyup on the document so the emulator's
/// keyboard listener reacts as if a physical key changed state.
///
/// `keyCode`/`which` mirror the first character of the key value. For
/// multi-character names ("Enter", "ArrowUp", "F1") that yields the code of
/// the first letter only; the downstream handler was built against exactly
/// these values, so the derivation must not be corrected here.
pub fn simulate_key(key: &str, pressed: bool) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_code(&format!("Key{}", key.to_uppercase()));
    let ordinal = key.chars().next().map(|c| c as u32).unwrap_or(0);
    init.set_key_code(ordinal);
    init.set_which(ordinal);
    init.set_bubbles(true);
    init.set_cancelable(true);

    let kind = if pressed { "keydown" } else { "keyup" };
    if let Ok(event) = KeyboardEvent::new_with_keyboard_event_init_dict(kind, &init) {
        let _ = document.dispatch_event(&event);
    }
}

/// `'ontouchstart' in window || navigator.maxTouchPoints > 0`
pub fn is_touch_device() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let has_ontouchstart =
        js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("ontouchstart"))
            .unwrap_or(false);
    has_ontouchstart || window.navigator().max_touch_points() > 0
}
