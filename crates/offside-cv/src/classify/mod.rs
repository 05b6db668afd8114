//! Pixel colour classification

pub mod classifier;

pub use classifier::{PixelClass, PixelClassifier};

use serde::{Deserialize, Serialize};

/// Thresholds for a colour whose channel must dominate the other two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DominantChannel {
    /// Dominant channel must be strictly above this
    pub min_dominant: u8,
    /// Each other channel must be strictly below this
    pub max_other: u8,
    /// Dominant minus each other channel must be strictly above this
    pub min_margin: u8,
}

impl Default for DominantChannel {
    fn default() -> Self {
        Self {
            min_dominant: 200,
            max_other: 100,
            min_margin: 100,
        }
    }
}

impl DominantChannel {
    pub fn matches(&self, dominant: u8, other_a: u8, other_b: u8) -> bool {
        let margin = i16::from(self.min_margin);
        dominant > self.min_dominant
            && other_a < self.max_other
            && other_b < self.max_other
            && i16::from(dominant) - i16::from(other_a) > margin
            && i16::from(dominant) - i16::from(other_b) > margin
    }
}

/// Classifier configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub red: DominantChannel,
    pub blue: DominantChannel,
    /// All three channels strictly below this count as ball
    pub ball_max: u8,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            red: DominantChannel::default(),
            blue: DominantChannel::default(),
            ball_max: 50,
        }
    }
}
