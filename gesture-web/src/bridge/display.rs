//! Read-only exports for the UI: current label, tallies, display copy,
//! skeleton connections for the debug overlay

use wasm_bindgen::prelude::*;

use super::frames::with_session;
use crate::classifier::{GestureLabel, HAND_SKELETON};

/// Currently displayed gesture id ("none" when nothing is shown)
#[wasm_bindgen]
pub fn get_current_gesture() -> String {
    with_session(|s| s.current().as_str().to_string())
}

/// Tallies in `get_gesture_ids` order
#[wasm_bindgen]
pub fn get_gesture_counts() -> Vec<u32> {
    with_session(|s| s.tally().as_array().to_vec())
}

/// `{"counts": {"thumbs_up": 2, ...}, "total": 5}`
#[wasm_bindgen]
pub fn get_gesture_tally_json() -> Result<String, JsValue> {
    let snapshot = with_session(|s| s.tally().snapshot());
    serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// `{"name": ..., "description": ..., "icon": ...}` for a gesture id
#[wasm_bindgen]
pub fn get_gesture_info(id: &str) -> Result<String, JsValue> {
    let label: GestureLabel = id.parse()?;
    info_json(label).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Countable gesture ids in display order
#[wasm_bindgen]
pub fn get_gesture_ids() -> js_sys::Array {
    GestureLabel::COUNTED
        .iter()
        .map(|label| JsValue::from_str(label.as_str()))
        .collect()
}

/// Flat (from, to) landmark index pairs for drawing the hand
#[wasm_bindgen]
pub fn get_hand_skeleton() -> Vec<u32> {
    skeleton_flat()
}

// ============================================================================
// INTERNAL
// ============================================================================

fn info_json(label: GestureLabel) -> Result<String, serde_json::Error> {
    serde_json::to_string(&label.info())
}

fn skeleton_flat() -> Vec<u32> {
    HAND_SKELETON
        .iter()
        .flat_map(|&(a, b)| [a as u32, b as u32])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_is_flat_pairs() {
        let flat = skeleton_flat();
        assert_eq!(flat.len(), HAND_SKELETON.len() * 2);
        assert_eq!(&flat[..2], &[1, 2]);
    }

    #[test]
    fn test_info_json() {
        let json: serde_json::Value =
            serde_json::from_str(&info_json(GestureLabel::Victory).unwrap()).unwrap();
        assert_eq!(json["name"], "Victory Sign");
        assert_eq!(json["icon"], "victory");
    }

    #[test]
    fn test_counts_follow_session() {
        with_session(|s| {
            s.observe(GestureLabel::ThumbsDown, 0.0);
        });
        assert_eq!(get_gesture_counts(), vec![0, 1, 0, 0, 0, 0, 0]);
        assert_eq!(get_current_gesture(), "thumbs_down");
    }
}
