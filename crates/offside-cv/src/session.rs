//! Load/analyze session
//!
//! Holds the image currently under analysis, the markers detected in it and
//! the last analysis result. Every load replaces the image and detection
//! together and drops the previous result; a failed load leaves everything
//! as it was.

use crate::detection::{Detection, DetectionConfig, MarkerDetector};
use crate::error::{AnalysisError, Prerequisite};
use crate::offside::{self, AnalysisResult};
use crate::render::OverlayRenderer;
use crate::utils::ImageUtils;
use crate::Result;
use image::RgbImage;
use offside_core::Team;
use std::path::Path;
use tracing::{debug, info};

struct LoadedImage {
    image: RgbImage,
    detection: Detection,
}

pub struct AnalysisSession {
    detector: MarkerDetector,
    renderer: OverlayRenderer,
    loaded: Option<LoadedImage>,
    result: Option<AnalysisResult>,
}

impl AnalysisSession {
    pub fn new(config: DetectionConfig) -> Result<Self> {
        let renderer = OverlayRenderer::new(config.visualization.clone());
        let detector = MarkerDetector::new(config)?;
        Ok(Self {
            detector,
            renderer,
            loaded: None,
            result: None,
        })
    }

    pub fn load_image<P: AsRef<Path>>(&mut self, path: P) -> Result<&Detection> {
        let path = path.as_ref();
        let image = ImageUtils::load_rgb(path)?;
        info!(path = %path.display(), width = image.width(), height = image.height(), "image loaded");
        Ok(self.load_rgb_image(image))
    }

    pub fn load_rgb_image(&mut self, image: RgbImage) -> &Detection {
        let detection = self.detector.detect_from_rgb_image(&image);
        self.result = None;
        &self.loaded.insert(LoadedImage { image, detection }).detection
    }

    /// Analyze the loaded image with `possession` attacking.
    ///
    /// Any failure after the image check clears the stored result, so no
    /// stale line or offside set outlives a failed analysis.
    pub fn analyze(&mut self, possession: Team) -> Result<&AnalysisResult> {
        let loaded = self
            .loaded
            .as_ref()
            .ok_or(AnalysisError::MissingPrerequisite(Prerequisite::Image))?;

        self.result = None;
        let result = offside::analyze(&loaded.detection, possession)?;
        debug!(summary = %result.summary(), "analysis stored");
        let stored: &AnalysisResult = self.result.insert(result);
        Ok(stored)
    }

    pub fn detection(&self) -> Option<&Detection> {
        self.loaded.as_ref().map(|l| &l.detection)
    }

    pub fn image(&self) -> Option<&RgbImage> {
        self.loaded.as_ref().map(|l| &l.image)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Loaded image annotated with the last result, or unannotated if none.
    pub fn render_overlay(&self) -> Result<RgbImage> {
        let loaded = self
            .loaded
            .as_ref()
            .ok_or(AnalysisError::MissingPrerequisite(Prerequisite::Image))?;

        Ok(match &self.result {
            Some(result) => self.renderer.render(&loaded.image, result),
            None => loaded.image.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use offside_core::Point;

    const GRASS: Rgb<u8> = Rgb([40, 160, 60]);

    fn square(image: &mut RgbImage, cx: u32, cy: u32, colour: Rgb<u8>) {
        for y in cy - 2..=cy + 2 {
            for x in cx - 2..=cx + 2 {
                image.put_pixel(x, y, colour);
            }
        }
    }

    fn play(red: &[u32], blue: &[u32], ball_x: u32) -> RgbImage {
        let mut image = RgbImage::from_pixel(600, 200, GRASS);
        for (i, &x) in red.iter().enumerate() {
            square(&mut image, x, 30 + 60 * (i as u32 % 3), Rgb([230, 20, 20]));
        }
        for (i, &x) in blue.iter().enumerate() {
            square(&mut image, x, 60 + 60 * (i as u32 % 2), Rgb([20, 20, 230]));
        }
        square(&mut image, ball_x, 100, Rgb([0, 0, 0]));
        image
    }

    #[test]
    fn test_analyze_before_load() -> Result<()> {
        let mut session = AnalysisSession::new(DetectionConfig::default())?;
        assert!(matches!(
            session.analyze(Team::Red),
            Err(AnalysisError::MissingPrerequisite(Prerequisite::Image))
        ));
        assert!(session.render_overlay().is_err());
        Ok(())
    }

    #[test]
    fn test_full_cycle() -> Result<()> {
        let mut session = AnalysisSession::new(DetectionConfig::default())?;
        session.load_rgb_image(play(&[100, 250, 400], &[200, 300, 500], 320));

        let result = session.analyze(Team::Red)?;
        // blue sorted descending: 500, 300, 200 -> line 300
        assert_eq!(result.offside_line.x, 300);
        assert_eq!(result.offside_players.iter().map(|p| p.x).collect::<Vec<_>>(), vec![100, 250]);
        assert_eq!(session.result().map(|r| r.offside_count()), Some(2));
        Ok(())
    }

    #[test]
    fn test_new_image_clears_result() -> Result<()> {
        let mut session = AnalysisSession::new(DetectionConfig::default())?;
        session.load_rgb_image(play(&[100], &[200, 300], 320));
        session.analyze(Team::Red)?;
        assert!(session.result().is_some());

        session.load_rgb_image(play(&[150], &[250, 350], 50));
        assert!(session.result().is_none());
        assert_eq!(
            session.detection().map(|d| d.red_team.clone()),
            Some(vec![Point::new(150, 30)])
        );
        Ok(())
    }

    #[test]
    fn test_insufficient_defenders_clears_result() -> Result<()> {
        let mut session = AnalysisSession::new(DetectionConfig::default())?;
        // one red defender when blue attacks
        session.load_rgb_image(play(&[100], &[200, 300], 320));
        session.analyze(Team::Red)?;
        let err = session.analyze(Team::Blue).unwrap_err();
        assert!(matches!(err, AnalysisError::InsufficientDefenders { found: 1 }));
        assert!(session.result().is_none());
        Ok(())
    }

    #[test]
    fn test_failed_load_keeps_state() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let bad = dir.path().join("bad.jpg");
        std::fs::write(&bad, b"nope")?;

        let mut session = AnalysisSession::new(DetectionConfig::default())?;
        session.load_rgb_image(play(&[100], &[200, 300], 320));
        session.analyze(Team::Red)?;
        let before = session.result().cloned();

        assert!(matches!(
            session.load_image(&bad),
            Err(AnalysisError::ImageDecode { .. })
        ));
        assert_eq!(session.result().cloned(), before);
        assert!(session.detection().is_some());
        Ok(())
    }

    #[test]
    fn test_overlay_marks_offside_player() -> Result<()> {
        let mut session = AnalysisSession::new(DetectionConfig::default())?;
        session.load_rgb_image(play(&[100], &[200, 300], 320));
        assert_eq!(session.render_overlay()?.get_pixel(100, 30), &Rgb([230, 20, 20]));

        session.analyze(Team::Red)?;
        let overlay = session.render_overlay()?;
        assert_eq!(overlay.get_pixel(100, 30), &Rgb([255, 255, 0]));
        Ok(())
    }
}
