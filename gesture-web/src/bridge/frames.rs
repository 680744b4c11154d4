//! Per-frame entry points
//!
//! The page calls one of these on every sampling tick (~10 Hz): either with
//! the flat keypoints of the tracked hand, or `process_no_hand` when the
//! estimator found nothing. Frames must arrive in order; wasm is
//! single-threaded so the session needs no locking.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use std::cell::RefCell;

use crate::classifier::{classify, GestureLabel, KeypointSet};
use crate::stabilizer::{StabilizedFrame, StabilizerSession};

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<StabilizerSession> = RefCell::new(StabilizerSession::new());
}

/// Run `f` against the page's stabilizer session
pub(crate) fn with_session<R>(f: impl FnOnce(&mut StabilizerSession) -> R) -> R {
    SESSION.with(|cell| f(&mut cell.borrow_mut()))
}

/// Monotonic milliseconds. Workers have no `window` but still expose
/// `performance` on the global scope; wall clock is the last resort.
fn now_ms() -> f64 {
    first_reading(
        &[&window_performance_ms, &global_performance_ms],
        js_sys::Date::now,
    )
}

fn window_performance_ms() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
}

fn global_performance_ms() -> Option<f64> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("performance"))
        .ok()
        .and_then(|p| p.dyn_into::<web_sys::Performance>().ok())
        .map(|p| p.now())
}

/// First source that yields a reading, in order; `fallback` otherwise
fn first_reading(sources: &[&dyn Fn() -> Option<f64>], fallback: impl FnOnce() -> f64) -> f64 {
    sources
        .iter()
        .find_map(|source| source())
        .unwrap_or_else(fallback)
}

fn parse_hand(data: &[f32]) -> Option<KeypointSet> {
    match KeypointSet::from_flat(data) {
        Ok(hand) => Some(hand),
        Err(err) => {
            web_sys::console::warn_1(&JsValue::from(err));
            None
        }
    }
}

fn step(hand: Option<&KeypointSet>) -> String {
    let now = now_ms();
    let (frame, count) = with_session(|session| {
        let frame: StabilizedFrame = session.process_hand(hand, now);
        (frame, session.tally().get(frame.label))
    });

    if frame.counted {
        console_log!("✋ {} (#{})", frame.label.info().name, count);
    }

    frame.label.as_str().to_string()
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array of 42 values
/// (21 landmarks × x, y in video pixels). Returns the displayed gesture id.
#[wasm_bindgen]
pub fn process_hand_landmarks(data: &[f32]) -> String {
    let hand = parse_hand(data);
    step(hand.as_ref())
}

/// Called when the estimator reports no hand this tick
#[wasm_bindgen]
pub fn process_no_hand() -> String {
    step(None)
}

/// Stateless classification, no tally or debounce involved
#[wasm_bindgen]
pub fn classify_landmarks(data: &[f32]) -> String {
    KeypointSet::from_flat(data)
        .map_or(GestureLabel::None, |hand| classify(&hand))
        .as_str()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_landmarks_short_buffer() {
        assert_eq!(classify_landmarks(&[0.0; 10]), "none");
    }

    #[test]
    fn test_clock_prefers_first_available_source() {
        let missing = || None::<f64>;
        let worker = || Some(42.0);
        let window = || Some(7.0);

        assert_eq!(first_reading(&[&window, &worker], || 0.0), 7.0);
        assert_eq!(first_reading(&[&missing, &worker], || 0.0), 42.0);
        assert_eq!(first_reading(&[&missing, &missing], || -1.0), -1.0);
    }

    #[test]
    fn test_clock_skips_fallback_when_monotonic_source_exists() {
        let window = || Some(7.0);
        let reading = first_reading(&[&window], || panic!("wall clock should not be read"));
        assert_eq!(reading, 7.0);
    }

    #[test]
    fn test_with_session_shares_state() {
        with_session(|s| s.observe(GestureLabel::Rock, 0.0));
        let count = with_session(|s| s.tally().get(GestureLabel::Rock));
        assert_eq!(count, 1);
    }
}
