//! RGB threshold classifier

use super::ClassifierConfig;
use serde::{Deserialize, Serialize};

/// Category a single pixel falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PixelClass {
    RedTeam,
    BlueTeam,
    Ball,
    Unclassified,
}

/// Pure, total mapping from an RGB triple to a [`PixelClass`].
///
/// Predicates are tried red, then blue, then ball; the first match wins even
/// if retuned thresholds make them overlap.
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelClassifier {
    config: ClassifierConfig,
}

impl PixelClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn classify(&self, r: u8, g: u8, b: u8) -> PixelClass {
        if self.is_red(r, g, b) {
            PixelClass::RedTeam
        } else if self.is_blue(r, g, b) {
            PixelClass::BlueTeam
        } else if self.is_ball(r, g, b) {
            PixelClass::Ball
        } else {
            PixelClass::Unclassified
        }
    }

    pub fn classify_pixel(&self, pixel: &image::Rgb<u8>) -> PixelClass {
        let [r, g, b] = pixel.0;
        self.classify(r, g, b)
    }

    fn is_red(&self, r: u8, g: u8, b: u8) -> bool {
        self.config.red.matches(r, g, b)
    }

    fn is_blue(&self, r: u8, g: u8, b: u8) -> bool {
        self.config.blue.matches(b, r, g)
    }

    fn is_ball(&self, r: u8, g: u8, b: u8) -> bool {
        let max = self.config.ball_max;
        r < max && g < max && b < max
    }
}
