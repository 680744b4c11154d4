//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod errors;
mod frames;
mod display;
mod tuning;

pub use frames::{
    // WASM entry points
    process_hand_landmarks,
    process_no_hand,
    classify_landmarks,
};

pub use display::{
    get_current_gesture,
    get_gesture_counts,
    get_gesture_tally_json,
    get_gesture_info,
    get_gesture_ids,
    get_hand_skeleton,
};

pub use tuning::{set_debounce_window, set_gesture_thresholds};
