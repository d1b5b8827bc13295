//! Single-frame fire detection mock for the drone feed.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core_types::units::round2;

/// Probability that a frame contains a detection.
const DETECTION_RATE: f64 = 0.7;

/// Result of running the detector over one drone video frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameAnalysis {
    pub detected: bool,
    /// Detector confidence, 0.0-1.0 at two decimal places.
    pub confidence: f64,
    /// Bounding box as `[x, y, w, h]` in frame pixels; empty when nothing
    /// was found.
    pub bbox: Vec<u32>,
    pub message: String,
}

/// Classify one simulated frame.
///
/// Every call is independent and keeps no state; detections land with
/// probability [`DETECTION_RATE`].
pub fn analyze_frame<R: Rng>(rng: &mut R) -> FrameAnalysis {
    if rng.random::<f64>() < DETECTION_RATE {
        FrameAnalysis {
            detected: true,
            confidence: round2(rng.random_range(0.75..0.99)),
            bbox: vec![
                rng.random_range(100..=300),
                rng.random_range(100..=300),
                rng.random_range(50..=150),
                rng.random_range(50..=150),
            ],
            message: "Fire confirmed by drone AI".to_string(),
        }
    } else {
        FrameAnalysis {
            detected: false,
            confidence: round2(rng.random_range(0.0..0.4)),
            bbox: Vec::new(),
            message: "No fire detected".to_string(),
        }
    }
}
