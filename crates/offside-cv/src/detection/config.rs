//! Detection configuration

use crate::classify::ClassifierConfig;
use crate::cluster::ClusteringConfig;
use crate::error::AnalysisError;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main detection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub classifier: ClassifierConfig,
    pub clustering: ClusteringConfig,
    pub ball: BallStrategy,
    pub visualization: VisualizationConfig,
}

/// How the ball position is chosen among black candidate pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BallStrategy {
    /// The last black pixel in row-major scan order
    #[default]
    LastPixel,
    /// Centroid of the largest cluster of black pixels
    Clustered,
}

/// Overlay drawing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationConfig {
    pub line_width: u32,
    /// Length of each drawn dash and of each gap
    pub dash_length: u32,
    /// Offside line opacity in [0, 1]
    pub line_alpha: f32,
    /// Half the arm length of the X drawn over offside players
    pub marker_half_size: i32,
    pub marker_thickness: u32,
    /// Also circle every detected player and dot the ball
    pub draw_players: bool,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            line_width: 2,
            dash_length: 9,
            line_alpha: 128.0 / 255.0,
            marker_half_size: 8,
            marker_thickness: 3,
            draw_players: false,
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            clustering: ClusteringConfig::default(),
            ball: BallStrategy::LastPixel,
            visualization: VisualizationConfig::default(),
        }
    }
}

impl DetectionConfig {
    /// Load a JSON configuration file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: DetectionConfig = serde_json::from_str(&text)
            .map_err(|e| AnalysisError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let radius = self.clustering.radius;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(AnalysisError::Config(format!(
                "cluster radius must be positive, got {radius}"
            )));
        }
        if self.clustering.max_players == 0 {
            return Err(AnalysisError::Config("max_players must be at least 1".into()));
        }
        let alpha = self.visualization.line_alpha;
        if !(0.0..=1.0).contains(&alpha) {
            return Err(AnalysisError::Config(format!(
                "line_alpha must lie in [0, 1], got {alpha}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::ClusterStrategy;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DetectionConfig::default();
        assert_eq!(config.clustering.radius, 50.0);
        assert_eq!(config.clustering.min_cluster_size, 5);
        assert_eq!(config.clustering.max_players, 11);
        assert_eq!(config.ball, BallStrategy::LastPixel);
        assert_eq!(config.classifier.ball_max, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_json() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"{{ "clustering": {{ "strategy": "grid", "radius": 30.0 }}, "ball": "clustered" }}"#
        )?;

        let config = DetectionConfig::load(file.path())?;
        assert_eq!(config.clustering.strategy, ClusterStrategy::Grid);
        assert_eq!(config.clustering.radius, 30.0);
        assert_eq!(config.clustering.max_players, 11);
        assert_eq!(config.ball, BallStrategy::Clustered);
        Ok(())
    }

    #[test]
    fn test_load_rejects_bad_radius() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{ "clustering": {{ "radius": 0.0 }} }}"#)?;

        let err = DetectionConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
        Ok(())
    }

    #[test]
    fn test_load_rejects_malformed_json() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, "not json")?;

        assert!(matches!(
            DetectionConfig::load(file.path()),
            Err(AnalysisError::Config(_))
        ));
        Ok(())
    }
}
