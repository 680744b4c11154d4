//! Stabilizer module - debounced gesture stream and per-gesture tallies
//!
//! Re-exports only. All logic in submodules.

mod session;
mod tally;

pub use session::{StabilizedFrame, StabilizerSession, DEBOUNCE_WINDOW_MS};
pub use tally::{GestureTally, TallySnapshot};
