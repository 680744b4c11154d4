//! Rule-based gesture classification
//!
//! A first-match priority chain over the 21 hand keypoints. Rules only look
//! at relative positions (tip vs. MCP vs. wrist), so the result does not
//! depend on the frame resolution. Image y grows downward: `tip.y < mcp.y`
//! means the finger points up from its knuckle.

use thiserror::Error;

use super::geometry::dist;
use super::gesture::GestureLabel;
use super::landmarks::{
    KeypointSet, Point, FINGERS, INDEX_MCP, INDEX_TIP, MIDDLE_MCP, MIDDLE_TIP, PINKY_MCP,
    PINKY_TIP, RING_MCP, RING_TIP, THUMB_MCP, THUMB_TIP, WRIST,
};

// ============================================================================
// THRESHOLDS
// ============================================================================

/// Victory: tip-to-tip gap of index/middle must exceed this × their MCP gap
pub const VICTORY_SPREAD_RATIO: f32 = 1.3;

/// Closed fist: every tip-to-wrist distance must stay under this × MCP-to-wrist
pub const FIST_REACH_RATIO: f32 = 1.2;

/// Pointing/rock: a finger is folded when tip-to-MCP < this × MCP-to-wrist
pub const CURL_RATIO: f32 = 0.3;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    InvalidRatio { name: &'static str, value: f32 },
    #[error("debounce window must be a positive finite number of milliseconds, got {0}")]
    InvalidWindow(f64),
}

/// Tunable tolerances for the rule chain
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureThresholds {
    pub victory_spread: f32,
    pub fist_reach: f32,
    pub curl: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            victory_spread: VICTORY_SPREAD_RATIO,
            fist_reach: FIST_REACH_RATIO,
            curl: CURL_RATIO,
        }
    }
}

impl GestureThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ratios = [
            ("victory_spread", self.victory_spread),
            ("fist_reach", self.fist_reach),
            ("curl", self.curl),
        ];
        for (name, value) in ratios {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidRatio { name, value });
            }
        }
        Ok(())
    }
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Classify with the default thresholds
pub fn classify(hand: &KeypointSet) -> GestureLabel {
    classify_with(hand, &GestureThresholds::default())
}

/// Total entry point: absent or short input yields `GestureLabel::None`
pub fn classify_points(points: Option<&[Point]>) -> GestureLabel {
    points
        .and_then(|p| KeypointSet::from_points(p).ok())
        .map_or(GestureLabel::None, |hand| classify(&hand))
}

/// First matching rule wins; order matters
pub fn classify_with(hand: &KeypointSet, t: &GestureThresholds) -> GestureLabel {
    if is_thumbs_up(hand) {
        GestureLabel::ThumbsUp
    } else if is_thumbs_down(hand) {
        GestureLabel::ThumbsDown
    } else if is_victory(hand, t) {
        GestureLabel::Victory
    } else if is_open_palm(hand) {
        GestureLabel::OpenPalm
    } else if is_closed_fist(hand, t) {
        GestureLabel::ClosedFist
    } else if is_pointing(hand, t) {
        GestureLabel::Pointing
    } else if is_rock(hand, t) {
        GestureLabel::Rock
    } else {
        GestureLabel::None
    }
}

// ============================================================================
// FINGER PREDICATES
// ============================================================================

#[inline]
fn extended(hand: &KeypointSet, tip: usize, mcp: usize) -> bool {
    hand[tip].y < hand[mcp].y
}

#[inline]
fn hanging(hand: &KeypointSet, tip: usize, mcp: usize) -> bool {
    hand[tip].y > hand[mcp].y
}

/// Tip folded back onto its knuckle, relative to the knuckle's reach
#[inline]
fn folded(hand: &KeypointSet, tip: usize, mcp: usize, t: &GestureThresholds) -> bool {
    dist(hand[tip], hand[mcp]) < dist(hand[mcp], hand[WRIST]) * t.curl
}

// ============================================================================
// RULES
// ============================================================================

fn is_thumbs_up(hand: &KeypointSet) -> bool {
    let thumb = hand[THUMB_TIP];
    thumb.y < hand[WRIST].y && FINGERS.iter().all(|&(tip, _)| hand[tip].y > thumb.y)
}

fn is_thumbs_down(hand: &KeypointSet) -> bool {
    let thumb = hand[THUMB_TIP];
    thumb.y > hand[WRIST].y && FINGERS.iter().all(|&(tip, _)| thumb.y > hand[tip].y)
}

fn is_victory(hand: &KeypointSet, t: &GestureThresholds) -> bool {
    extended(hand, INDEX_TIP, INDEX_MCP)
        && extended(hand, MIDDLE_TIP, MIDDLE_MCP)
        && hanging(hand, RING_TIP, RING_MCP)
        && hanging(hand, PINKY_TIP, PINKY_MCP)
        && dist(hand[INDEX_TIP], hand[MIDDLE_TIP])
            > dist(hand[INDEX_MCP], hand[MIDDLE_MCP]) * t.victory_spread
}

fn is_open_palm(hand: &KeypointSet) -> bool {
    FINGERS.iter().all(|&(tip, mcp)| extended(hand, tip, mcp))
        && hand[THUMB_TIP].x < hand[THUMB_MCP].x
}

fn is_closed_fist(hand: &KeypointSet, t: &GestureThresholds) -> bool {
    let wrist = hand[WRIST];
    FINGERS
        .iter()
        .all(|&(tip, mcp)| dist(hand[tip], wrist) < dist(hand[mcp], wrist) * t.fist_reach)
}

// Pinky must be folded too, otherwise the rock rule below is unreachable
fn is_pointing(hand: &KeypointSet, t: &GestureThresholds) -> bool {
    extended(hand, INDEX_TIP, INDEX_MCP)
        && folded(hand, MIDDLE_TIP, MIDDLE_MCP, t)
        && folded(hand, RING_TIP, RING_MCP, t)
        && folded(hand, PINKY_TIP, PINKY_MCP, t)
}

fn is_rock(hand: &KeypointSet, t: &GestureThresholds) -> bool {
    extended(hand, INDEX_TIP, INDEX_MCP)
        && folded(hand, MIDDLE_TIP, MIDDLE_MCP, t)
        && folded(hand, RING_TIP, RING_MCP, t)
        && extended(hand, PINKY_TIP, PINKY_MCP)
}
