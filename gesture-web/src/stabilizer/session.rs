//! Gesture stabilization session
//!
//! Turns the noisy per-frame classification into a display label and a
//! tally that counts each gesture once per transition. The debounce timer is
//! an expiry timestamp checked on every frame: arming a new transition simply
//! overwrites it, so a stale expiry can never clear a newer gesture.
//!
//! Two pieces of state are tracked separately:
//! - `current`: what the UI shows right now (follows the raw label)
//! - `last_recognized`: the latch that suppresses re-counting until the
//!   window set at the last transition runs out

use crate::classifier::{
    classify_with, ConfigError, GestureLabel, GestureThresholds, KeypointSet, Point,
};

use super::tally::GestureTally;

/// How long a counted gesture stays latched (milliseconds)
pub const DEBOUNCE_WINDOW_MS: f64 = 2000.0;

/// Outcome of one frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StabilizedFrame {
    /// Label to display
    pub label: GestureLabel,
    /// Whether this frame incremented the tally
    pub counted: bool,
}

/// Per-session stabilizer state, owned by the caller
#[derive(Clone, Debug)]
pub struct StabilizerSession {
    window_ms: f64,
    thresholds: GestureThresholds,
    current: GestureLabel,
    last_recognized: GestureLabel,
    /// Monotonic ms at which `last_recognized` falls back to `None`
    expires_at: Option<f64>,
    tally: GestureTally,
}

impl Default for StabilizerSession {
    fn default() -> Self {
        Self::new()
    }
}

impl StabilizerSession {
    pub fn new() -> Self {
        Self {
            window_ms: DEBOUNCE_WINDOW_MS,
            thresholds: GestureThresholds::default(),
            current: GestureLabel::None,
            last_recognized: GestureLabel::None,
            expires_at: None,
            tally: GestureTally::new(),
        }
    }

    pub fn with_window(window_ms: f64) -> Result<Self, ConfigError> {
        let mut session = Self::new();
        session.set_window(window_ms)?;
        Ok(session)
    }

    /// Applies from the next transition on; a pending expiry keeps its time
    pub fn set_window(&mut self, window_ms: f64) -> Result<(), ConfigError> {
        if !window_ms.is_finite() || window_ms <= 0.0 {
            return Err(ConfigError::InvalidWindow(window_ms));
        }
        self.window_ms = window_ms;
        Ok(())
    }

    pub fn set_thresholds(&mut self, thresholds: GestureThresholds) -> Result<(), ConfigError> {
        thresholds.validate()?;
        self.thresholds = thresholds;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Frame processing
    // ------------------------------------------------------------------------

    /// Classify and stabilize one frame. `None` or a short slice means no hand.
    pub fn process_frame(&mut self, points: Option<&[Point]>, now_ms: f64) -> GestureLabel {
        self.process_frame_detailed(points, now_ms).label
    }

    pub fn process_frame_detailed(
        &mut self,
        points: Option<&[Point]>,
        now_ms: f64,
    ) -> StabilizedFrame {
        let hand = points.and_then(|p| KeypointSet::from_points(p).ok());
        self.process_hand(hand.as_ref(), now_ms)
    }

    /// Same as [`Self::process_frame_detailed`] for an already parsed hand
    pub fn process_hand(&mut self, hand: Option<&KeypointSet>, now_ms: f64) -> StabilizedFrame {
        match hand {
            Some(hand) => {
                let raw = classify_with(hand, &self.thresholds);
                self.observe_detailed(raw, now_ms)
            }
            None => self.observe_no_hand(now_ms),
        }
    }

    /// No hand this tick: blank the display, leave the latch to its expiry
    pub fn observe_no_hand(&mut self, now_ms: f64) -> StabilizedFrame {
        self.expire(now_ms);
        self.current = GestureLabel::None;
        StabilizedFrame { label: GestureLabel::None, counted: false }
    }

    /// Feed a label that was classified elsewhere
    pub fn observe(&mut self, raw: GestureLabel, now_ms: f64) -> GestureLabel {
        self.observe_detailed(raw, now_ms).label
    }

    pub fn observe_detailed(&mut self, raw: GestureLabel, now_ms: f64) -> StabilizedFrame {
        self.expire(now_ms);

        self.current = raw;

        if raw.is_none() {
            // Hand present but no pose matched: the next gesture starts fresh
            self.release();
            return StabilizedFrame { label: raw, counted: false };
        }

        if raw == self.last_recognized {
            // Held within the window. Repeats never re-arm the expiry, so a
            // hold longer than the window is counted again once it lapses.
            return StabilizedFrame { label: raw, counted: false };
        }

        let counted = self.tally.increment(raw);
        self.last_recognized = raw;
        self.expires_at = Some(now_ms + self.window_ms);

        StabilizedFrame { label: raw, counted }
    }

    fn expire(&mut self, now_ms: f64) {
        if matches!(self.expires_at, Some(deadline) if now_ms >= deadline) {
            self.release();
        }
    }

    fn release(&mut self) {
        self.last_recognized = GestureLabel::None;
        self.expires_at = None;
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Label currently on display
    pub fn current(&self) -> GestureLabel {
        self.current
    }

    /// Debounce latch. May still hold a label whose expiry has passed until
    /// the next frame arrives.
    pub fn last_recognized(&self) -> GestureLabel {
        self.last_recognized
    }

    pub fn expires_at(&self) -> Option<f64> {
        self.expires_at
    }

    pub fn tally(&self) -> &GestureTally {
        &self.tally
    }

    pub fn window_ms(&self) -> f64 {
        self.window_ms
    }

    pub fn thresholds(&self) -> &GestureThresholds {
        &self.thresholds
    }
}
