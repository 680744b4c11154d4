//! Per-gesture occurrence counters

use serde::Serialize;
use std::collections::BTreeMap;

use crate::classifier::GestureLabel;

/// Occurrence count for every countable gesture.
///
/// Indexed by [`GestureLabel::tally_index`], so iteration follows
/// [`GestureLabel::COUNTED`]. Counts only ever go up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureTally {
    counts: [u32; GestureLabel::COUNTED.len()],
}

/// Serializable view keyed by gesture id, for handing to JS
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TallySnapshot {
    pub counts: BTreeMap<&'static str, u32>,
    pub total: u32,
}

impl GestureTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for `label`; always 0 for `GestureLabel::None`
    pub fn get(&self, label: GestureLabel) -> u32 {
        label.tally_index().map_or(0, |i| self.counts[i])
    }

    /// Returns false for `GestureLabel::None`, which is never counted
    pub(crate) fn increment(&mut self, label: GestureLabel) -> bool {
        match label.tally_index() {
            Some(i) => {
                self.counts[i] = self.counts[i].saturating_add(1);
                true
            }
            None => false,
        }
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().fold(0u32, |acc, c| acc.saturating_add(*c))
    }

    /// (label, count) pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (GestureLabel, u32)> + '_ {
        GestureLabel::COUNTED.iter().copied().zip(self.counts.iter().copied())
    }

    /// Counts in display order, as a flat array for the JS side
    pub fn as_array(&self) -> [u32; GestureLabel::COUNTED.len()] {
        self.counts
    }

    pub fn snapshot(&self) -> TallySnapshot {
        TallySnapshot {
            counts: self.iter().map(|(label, n)| (label.as_str(), n)).collect(),
            total: self.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let tally = GestureTally::new();
        assert_eq!(tally.total(), 0);
        assert!(tally.iter().all(|(_, n)| n == 0));
        assert_eq!(tally.iter().count(), 7);
    }

    #[test]
    fn test_none_is_never_counted() {
        let mut tally = GestureTally::new();
        assert!(!tally.increment(GestureLabel::None));
        assert_eq!(tally.get(GestureLabel::None), 0);
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn test_increment_single_label() {
        let mut tally = GestureTally::new();
        assert!(tally.increment(GestureLabel::Rock));
        assert!(tally.increment(GestureLabel::Rock));
        assert_eq!(tally.get(GestureLabel::Rock), 2);
        assert_eq!(tally.get(GestureLabel::Victory), 0);
        assert_eq!(tally.as_array(), [0, 0, 0, 0, 0, 0, 2]);
    }

    #[test]
    fn test_snapshot_json() {
        let mut tally = GestureTally::new();
        tally.increment(GestureLabel::ThumbsUp);
        let json = serde_json::to_value(tally.snapshot()).unwrap();
        assert_eq!(json["counts"]["thumbs_up"], 1);
        assert_eq!(json["counts"]["rock"], 0);
        assert_eq!(json["total"], 1);
        assert!(json["counts"].get("none").is_none());
    }
}
