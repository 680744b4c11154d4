//! Hand keypoints - the 21-point landmark convention
//!
//! Points arrive in pixel space of the source video frame, in the fixed
//! MediaPipe Hands order. Y grows downward.

use thiserror::Error;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

/// Number of landmarks in one tracked hand
pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Hand skeleton for the debug overlay: three segments per finger chain,
/// then the palm outline closing back on the wrist.
pub const HAND_SKELETON: [(usize, usize); 21] = [
    (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
    // Palm
    (WRIST, THUMB_CMC), (THUMB_MCP, INDEX_MCP), (INDEX_MCP, MIDDLE_MCP),
    (MIDDLE_MCP, RING_MCP), (RING_MCP, PINKY_MCP), (PINKY_MCP, WRIST),
];

/// (tip, mcp) for the four non-thumb fingers, index first
pub const FINGERS: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_MCP),
    (MIDDLE_TIP, MIDDLE_MCP),
    (RING_TIP, RING_MCP),
    (PINKY_TIP, PINKY_MCP),
];

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A 2D keypoint in video-frame pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Reasons a keypoint buffer cannot become a [`KeypointSet`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LandmarkError {
    #[error("expected at least 21 landmarks, got {0}")]
    TooFewPoints(usize),
    #[error("flat landmark buffer has odd length {0}")]
    OddLength(usize),
    #[error("landmark {0} has a non-finite coordinate")]
    NonFiniteCoordinate(usize),
}

/// Exactly 21 points of one hand, in landmark order
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeypointSet {
    points: [Point; LANDMARK_COUNT],
}

impl KeypointSet {
    pub fn new(points: [Point; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Takes the first 21 points. Shorter input is rejected, never padded.
    pub fn from_points(points: &[Point]) -> Result<Self, LandmarkError> {
        if points.len() < LANDMARK_COUNT {
            return Err(LandmarkError::TooFewPoints(points.len()));
        }
        let mut set = [Point::default(); LANDMARK_COUNT];
        set.copy_from_slice(&points[..LANDMARK_COUNT]);
        Ok(Self { points: set })
    }

    /// Parse a flat `[x0, y0, x1, y1, ...]` buffer as sent from JS
    pub fn from_flat(data: &[f32]) -> Result<Self, LandmarkError> {
        if data.len() % 2 != 0 {
            return Err(LandmarkError::OddLength(data.len()));
        }
        if data.len() < LANDMARK_COUNT * 2 {
            return Err(LandmarkError::TooFewPoints(data.len() / 2));
        }

        let mut points = [Point::default(); LANDMARK_COUNT];
        for (i, point) in points.iter_mut().enumerate() {
            let x = data[i * 2];
            let y = data[i * 2 + 1];
            if !x.is_finite() || !y.is_finite() {
                return Err(LandmarkError::NonFiniteCoordinate(i));
            }
            *point = Point { x, y };
        }
        Ok(Self { points })
    }

    pub fn wrist(&self) -> Point {
        self.points[WRIST]
    }
}

impl std::ops::Index<usize> for KeypointSet {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_slice_rejected() {
        let points = vec![Point::new(1.0, 1.0); 20];
        assert_eq!(
            KeypointSet::from_points(&points),
            Err(LandmarkError::TooFewPoints(20))
        );
    }

    #[test]
    fn test_extra_points_ignored() {
        let mut points: Vec<Point> = (0..25).map(|i| Point::new(i as f32, 0.0)).collect();
        points[21] = Point::new(-1.0, -1.0);
        let set = KeypointSet::from_points(&points).unwrap();
        assert_eq!(set[PINKY_TIP], Point::new(20.0, 0.0));
    }

    #[test]
    fn test_flat_buffer_parsing() {
        let data: Vec<f32> = (0..42).map(|v| v as f32).collect();
        let set = KeypointSet::from_flat(&data).unwrap();
        assert_eq!(set.wrist(), Point::new(0.0, 1.0));
        assert_eq!(set[THUMB_TIP], Point::new(8.0, 9.0));
    }

    #[test]
    fn test_flat_buffer_errors() {
        assert_eq!(KeypointSet::from_flat(&[0.0; 41]), Err(LandmarkError::OddLength(41)));
        assert_eq!(KeypointSet::from_flat(&[0.0; 40]), Err(LandmarkError::TooFewPoints(20)));

        let mut data = [0.0; 42];
        data[7] = f32::NAN;
        assert_eq!(KeypointSet::from_flat(&data), Err(LandmarkError::NonFiniteCoordinate(3)));
    }

    #[test]
    fn test_skeleton_indices_in_range() {
        for (a, b) in HAND_SKELETON {
            assert!(a < LANDMARK_COUNT && b < LANDMARK_COUNT);
        }
    }
}
