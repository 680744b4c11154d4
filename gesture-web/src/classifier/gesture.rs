//! Gesture labels and their display copy

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of recognizable gestures. `None` doubles as "no hand" and
/// "nothing recognized".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureLabel {
    ThumbsUp,
    ThumbsDown,
    Victory,
    OpenPalm,
    ClosedFist,
    Pointing,
    Rock,
    #[default]
    None,
}

/// Human-readable copy for one gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GestureInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// Symbolic icon id for the UI (not a file path)
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gesture id: {0:?}")]
pub struct UnknownGesture(pub String);

impl GestureLabel {
    /// Every label, `None` last
    pub const ALL: [GestureLabel; 8] = [
        GestureLabel::ThumbsUp,
        GestureLabel::ThumbsDown,
        GestureLabel::Victory,
        GestureLabel::OpenPalm,
        GestureLabel::ClosedFist,
        GestureLabel::Pointing,
        GestureLabel::Rock,
        GestureLabel::None,
    ];

    /// Labels that carry a tally, in display order
    pub const COUNTED: [GestureLabel; 7] = [
        GestureLabel::ThumbsUp,
        GestureLabel::ThumbsDown,
        GestureLabel::Victory,
        GestureLabel::OpenPalm,
        GestureLabel::ClosedFist,
        GestureLabel::Pointing,
        GestureLabel::Rock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GestureLabel::ThumbsUp => "thumbs_up",
            GestureLabel::ThumbsDown => "thumbs_down",
            GestureLabel::Victory => "victory",
            GestureLabel::OpenPalm => "open_palm",
            GestureLabel::ClosedFist => "closed_fist",
            GestureLabel::Pointing => "pointing",
            GestureLabel::Rock => "rock",
            GestureLabel::None => "none",
        }
    }

    pub fn is_none(&self) -> bool {
        *self == GestureLabel::None
    }

    /// Position in [`GestureLabel::COUNTED`], `None` for the no-gesture label
    pub fn tally_index(&self) -> Option<usize> {
        match self {
            GestureLabel::ThumbsUp => Some(0),
            GestureLabel::ThumbsDown => Some(1),
            GestureLabel::Victory => Some(2),
            GestureLabel::OpenPalm => Some(3),
            GestureLabel::ClosedFist => Some(4),
            GestureLabel::Pointing => Some(5),
            GestureLabel::Rock => Some(6),
            GestureLabel::None => None,
        }
    }

    /// Display name, description and icon. Pure lookup.
    pub fn info(&self) -> GestureInfo {
        match self {
            GestureLabel::ThumbsUp => GestureInfo {
                name: "Thumbs Up",
                description: "A gesture used to approve or show you like something.",
                icon: "thumbs-up",
            },
            GestureLabel::ThumbsDown => GestureInfo {
                name: "Thumbs Down",
                description: "A gesture used to reject or show you dislike something.",
                icon: "thumbs-down",
            },
            GestureLabel::Victory => GestureInfo {
                name: "Victory Sign",
                description: "A gesture for victory, peace or the number two.",
                icon: "victory",
            },
            GestureLabel::OpenPalm => GestureInfo {
                name: "Open Palm",
                description: "A gesture for stopping, greeting or waving.",
                icon: "hand",
            },
            GestureLabel::ClosedFist => GestureInfo {
                name: "Closed Fist",
                description: "A gesture for solidarity, determination or resistance.",
                icon: "fist",
            },
            GestureLabel::Pointing => GestureInfo {
                name: "Pointing",
                description: "A gesture for showing a direction or drawing attention.",
                icon: "pointer",
            },
            GestureLabel::Rock => GestureInfo {
                name: "Rock Sign",
                description: "A gesture widely used in music culture.",
                icon: "hammer",
            },
            GestureLabel::None => GestureInfo {
                name: "Not Recognized",
                description: "No gesture was detected.",
                icon: "help-circle",
            },
        }
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GestureLabel {
    type Err = UnknownGesture;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GestureLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| UnknownGesture(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_parse_back() {
        for label in GestureLabel::ALL {
            assert_eq!(label.as_str().parse::<GestureLabel>(), Ok(label));
        }
        assert!("wave".parse::<GestureLabel>().is_err());
    }

    #[test]
    fn test_tally_index_matches_counted_order() {
        for (i, label) in GestureLabel::COUNTED.iter().enumerate() {
            assert_eq!(label.tally_index(), Some(i));
        }
        assert_eq!(GestureLabel::None.tally_index(), None);
    }

    #[test]
    fn test_serde_uses_snake_case_ids() {
        let json = serde_json::to_string(&GestureLabel::ClosedFist).unwrap();
        assert_eq!(json, "\"closed_fist\"");
        let back: GestureLabel = serde_json::from_str("\"open_palm\"").unwrap();
        assert_eq!(back, GestureLabel::OpenPalm);
    }

    #[test]
    fn test_every_label_has_copy() {
        for label in GestureLabel::ALL {
            let info = label.info();
            assert!(!info.name.is_empty());
            assert!(!info.description.is_empty());
        }
        assert_eq!(GestureLabel::None.info().name, "Not Recognized");
    }
}
