//! Classifier module - geometric hand gesture rules
//!
//! Pure functions only. Nothing here logs, allocates state, or talks to JS.

mod geometry;
mod gesture;
mod landmarks;
mod rules;

pub use geometry::{angle, dist};
pub use gesture::{GestureInfo, GestureLabel, UnknownGesture};
pub use landmarks::{
    KeypointSet, LandmarkError, Point,
    HAND_SKELETON, LANDMARK_COUNT, FINGERS,
    WRIST, THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP,
    INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP,
    MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP,
    RING_MCP, RING_PIP, RING_DIP, RING_TIP,
    PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP,
};
pub use rules::{
    classify, classify_points, classify_with,
    ConfigError, GestureThresholds,
    VICTORY_SPREAD_RATIO, FIST_REACH_RATIO, CURL_RATIO,
};
