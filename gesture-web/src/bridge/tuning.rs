//! Runtime tuning from JS

use wasm_bindgen::prelude::*;

use super::frames::with_session;
use crate::classifier::GestureThresholds;

/// Change the debounce window (ms). Takes effect at the next transition.
#[wasm_bindgen]
pub fn set_debounce_window(window_ms: f64) -> Result<(), JsValue> {
    with_session(|s| s.set_window(window_ms))?;
    web_sys::console::log_1(&format!("⏱️ Debounce window set to {}ms", window_ms).into());
    Ok(())
}

/// Set the classifier tolerances (victory spread, fist reach, curl).
/// Invalid values leave the current thresholds untouched.
#[wasm_bindgen]
pub fn set_gesture_thresholds(victory_spread: f32, fist_reach: f32, curl: f32) -> Result<(), JsValue> {
    let thresholds = GestureThresholds { victory_spread, fist_reach, curl };
    with_session(|s| s.set_thresholds(thresholds))?;
    web_sys::console::log_1(
        &format!(
            "🎛️ Gesture thresholds: spread {:.2}, reach {:.2}, curl {:.2}",
            victory_spread, fist_reach, curl
        )
        .into(),
    );
    Ok(())
}
