//! Marker detector: pixel scan, clustering and ball selection

use super::config::{BallStrategy, DetectionConfig};
use crate::classify::{PixelClass, PixelClassifier};
use crate::cluster::{Cluster, consolidate};
use crate::utils::ImageUtils;
use crate::Result;
use image::RgbImage;
use offside_core::{Point, Team};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Raw classified pixel coordinates in row-major scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePixels {
    pub red: Vec<Point>,
    pub blue: Vec<Point>,
    pub ball: Vec<Point>,
}

impl CandidatePixels {
    fn push(&mut self, class: PixelClass, point: Point) {
        match class {
            PixelClass::RedTeam => self.red.push(point),
            PixelClass::BlueTeam => self.blue.push(point),
            PixelClass::Ball => self.ball.push(point),
            PixelClass::Unclassified => {}
        }
    }

    #[cfg(feature = "parallel")]
    fn append(&mut self, mut other: CandidatePixels) {
        self.red.append(&mut other.red);
        self.blue.append(&mut other.blue);
        self.ball.append(&mut other.ball);
    }
}

/// Detection statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionStats {
    pub red_pixels: usize,
    pub blue_pixels: usize,
    pub ball_pixels: usize,
    pub processing_time_ms: u64,
}

/// Everything detected in one image. Always derived from a single scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub width: u32,
    pub height: u32,
    pub red_team: Vec<Point>,
    pub blue_team: Vec<Point>,
    pub ball: Option<Point>,
    pub stats: DetectionStats,
}

impl Detection {
    pub fn team(&self, team: Team) -> &[Point] {
        match team {
            Team::Red => &self.red_team,
            Team::Blue => &self.blue_team,
        }
    }
}

/// Detects team markers and the ball in decoded images
#[derive(Debug, Clone)]
pub struct MarkerDetector {
    config: DetectionConfig,
    classifier: PixelClassifier,
}

impl MarkerDetector {
    /// Create new detector
    pub fn new(config: DetectionConfig) -> Result<Self> {
        config.validate()?;
        let classifier = PixelClassifier::new(config.classifier);
        Ok(Self { config, classifier })
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Decode an image file and detect markers in it
    pub fn detect_from_file<P: AsRef<Path>>(&self, image_path: P) -> Result<Detection> {
        let image = ImageUtils::load_rgb(&image_path)?;
        Ok(self.detect_from_rgb_image(&image))
    }

    pub fn detect_from_rgb_image(&self, image: &RgbImage) -> Detection {
        let start_time = Instant::now();

        let candidates = self.scan(image);
        let clustering = &self.config.clustering;

        let red_team = consolidate(&candidates.red, clustering);
        let blue_team = consolidate(&candidates.blue, clustering);
        let ball = self.select_ball(&candidates.ball);

        debug!(
            red_pixels = candidates.red.len(),
            blue_pixels = candidates.blue.len(),
            ball_pixels = candidates.ball.len(),
            "classified pixels"
        );
        debug!("Red team count: {}", red_team.len());
        debug!("Blue team count: {}", blue_team.len());

        let stats = DetectionStats {
            red_pixels: candidates.red.len(),
            blue_pixels: candidates.blue.len(),
            ball_pixels: candidates.ball.len(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        Detection {
            width: image.width(),
            height: image.height(),
            red_team,
            blue_team,
            ball,
            stats,
        }
    }

    /// Classify every pixel, y outer and x inner.
    #[cfg(not(feature = "parallel"))]
    pub fn scan(&self, image: &RgbImage) -> CandidatePixels {
        let mut candidates = CandidatePixels::default();
        for (x, y, pixel) in image.enumerate_pixels() {
            let class = self.classifier.classify_pixel(pixel);
            candidates.push(class, Point::new(x as i32, y as i32));
        }
        candidates
    }

    /// Classify rows in parallel, then join them back in row order.
    #[cfg(feature = "parallel")]
    pub fn scan(&self, image: &RgbImage) -> CandidatePixels {
        use rayon::prelude::*;

        let width = image.width() as usize;
        if width == 0 || image.height() == 0 {
            return CandidatePixels::default();
        }

        let rows: Vec<CandidatePixels> = image
            .as_raw()
            .par_chunks(width * 3)
            .enumerate()
            .map(|(y, row)| {
                let mut candidates = CandidatePixels::default();
                for (x, rgb) in row.chunks_exact(3).enumerate() {
                    let class = self.classifier.classify(rgb[0], rgb[1], rgb[2]);
                    candidates.push(class, Point::new(x as i32, y as i32));
                }
                candidates
            })
            .collect();

        let mut candidates = CandidatePixels::default();
        for row in rows {
            candidates.append(row);
        }
        candidates
    }

    fn select_ball(&self, ball_pixels: &[Point]) -> Option<Point> {
        match self.config.ball {
            BallStrategy::LastPixel => ball_pixels.last().copied(),
            BallStrategy::Clustered => {
                let radius = self.config.clustering.radius;
                self.config
                    .clustering
                    .strategy
                    .find_clusters(ball_pixels, radius, 0)
                    .into_iter()
                    .fold(None, |best: Option<Cluster>, c| match best {
                        Some(b) if b.size >= c.size => Some(b),
                        _ => Some(c),
                    })
                    .map(|c| c.centroid)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    const GREEN: Rgb<u8> = Rgb([40, 160, 60]);

    fn pitch(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, GREEN)
    }

    fn fill(image: &mut RgbImage, x: u32, y: u32, size: u32, colour: Rgb<u8>) {
        for dy in 0..size {
            for dx in 0..size {
                image.put_pixel(x + dx, y + dy, colour);
            }
        }
    }

    #[test]
    fn test_detector_creation() -> Result<()> {
        let config = DetectionConfig::default();
        let _detector = MarkerDetector::new(config)?;
        Ok(())
    }

    #[test]
    fn test_empty_pitch() -> Result<()> {
        let detector = MarkerDetector::new(DetectionConfig::default())?;
        let detection = detector.detect_from_rgb_image(&pitch(100, 100));
        assert!(detection.red_team.is_empty());
        assert!(detection.blue_team.is_empty());
        assert_eq!(detection.ball, None);
        assert_eq!((detection.width, detection.height), (100, 100));
        Ok(())
    }

    #[test]
    fn test_scan_is_row_major() -> Result<()> {
        let detector = MarkerDetector::new(DetectionConfig::default())?;
        let mut image = pitch(4, 3);
        image.put_pixel(3, 0, Rgb([255, 0, 0]));
        image.put_pixel(0, 2, Rgb([255, 0, 0]));
        image.put_pixel(1, 1, Rgb([255, 0, 0]));

        let candidates = detector.scan(&image);
        assert_eq!(
            candidates.red,
            vec![Point::new(3, 0), Point::new(1, 1), Point::new(0, 2)]
        );
        Ok(())
    }

    #[test]
    fn test_detects_players_and_last_ball_pixel() -> Result<()> {
        let detector = MarkerDetector::new(DetectionConfig::default())?;
        let mut image = pitch(400, 200);
        fill(&mut image, 20, 20, 5, Rgb([255, 0, 0]));
        fill(&mut image, 300, 100, 5, Rgb([0, 0, 255]));
        fill(&mut image, 150, 150, 3, Rgb([0, 0, 0]));

        let detection = detector.detect_from_rgb_image(&image);
        assert_eq!(detection.red_team, vec![Point::new(22, 22)]);
        assert_eq!(detection.blue_team, vec![Point::new(302, 102)]);
        assert_eq!(detection.ball, Some(Point::new(152, 152)));
        assert_eq!(detection.stats.red_pixels, 25);
        assert_eq!(detection.stats.ball_pixels, 9);
        Ok(())
    }

    #[test]
    fn test_clustered_ball_uses_largest_blob() -> Result<()> {
        let config = DetectionConfig {
            ball: BallStrategy::Clustered,
            ..DetectionConfig::default()
        };
        let detector = MarkerDetector::new(config)?;
        let mut image = pitch(300, 300);
        fill(&mut image, 50, 50, 4, Rgb([0, 0, 0]));
        fill(&mut image, 250, 250, 2, Rgb([0, 0, 0]));

        let detection = detector.detect_from_rgb_image(&image);
        assert_eq!(detection.ball, Some(Point::new(51, 51)));
        Ok(())
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = DetectionConfig::default();
        config.clustering.radius = -1.0;
        assert!(MarkerDetector::new(config).is_err());
    }
}
