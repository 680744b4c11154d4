//! Gesture Web - hand gesture recognition for the browser
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The page runs the hand pose estimator and pushes 21 keypoints per tick;
//! this crate classifies the pose and keeps the debounced gesture tally.

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

pub mod classifier;
pub mod stabilizer;
mod bridge;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    process_hand_landmarks, process_no_hand, classify_landmarks,
    get_current_gesture, get_gesture_counts, get_gesture_tally_json,
    get_gesture_info, get_gesture_ids, get_hand_skeleton,
    set_debounce_window, set_gesture_thresholds,
};

pub use classifier::{classify, classify_points, GestureLabel, KeypointSet, Point};
pub use stabilizer::{GestureTally, StabilizerSession};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Log readiness once the page has wired the estimator to this module
#[wasm_bindgen]
pub fn init() {
    console_log!(
        "✅ Gesture recognizer ready ({} gestures, {}ms debounce)",
        GestureLabel::COUNTED.len(),
        stabilizer::DEBOUNCE_WINDOW_MS
    );
}
