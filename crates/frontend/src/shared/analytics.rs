use contracts::domain::TrackedEvent;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

/// Log the event and forward it to `gtag` / `fbq` when the host page
/// loaded them. Missing hooks (adblockers, no consent) are ignored.
pub fn track_event(event: &TrackedEvent) {
    let payload = event.payload();
    log::info!("Event tracked: {} {}", event.name(), payload);

    let Some(window) = web_sys::window() else {
        return;
    };
    let js_payload =
        match payload.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("could not convert {} payload: {}", event.name(), err);
                return;
            }
        };

    forward(&window, "gtag", "event", event.name(), &js_payload);
    forward(&window, "fbq", "track", event.name(), &js_payload);
}

fn forward(window: &web_sys::Window, hook: &str, command: &str, name: &str, payload: &JsValue) {
    let Ok(value) = js_sys::Reflect::get(window, &JsValue::from_str(hook)) else {
        return;
    };
    if let Some(function) = value.dyn_ref::<js_sys::Function>() {
        if let Err(err) = function.call3(
            &JsValue::NULL,
            &JsValue::from_str(command),
            &JsValue::from_str(name),
            payload,
        ) {
            log::debug!("{} threw for {}: {:?}", hook, name, err);
        }
    }
}
