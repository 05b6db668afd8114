//! Analysis errors

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Something the analysis needs that the current session does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prerequisite {
    Image,
    RedTeam,
    BlueTeam,
    Ball,
}

impl fmt::Display for Prerequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            Prerequisite::Image => "no image loaded",
            Prerequisite::RedTeam => "no red players detected",
            Prerequisite::BlueTeam => "no blue players detected",
            Prerequisite::Ball => "no ball detected",
        };
        f.write_str(what)
    }
}

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("failed to decode image {path:?}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode image {path:?}")]
    ImageEncode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("not enough defenders detected to establish offside line (found {found})")]
    InsufficientDefenders { found: usize },

    #[error("cannot analyze: {0}")]
    MissingPrerequisite(Prerequisite),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Whether the user can simply retry the interaction.
    ///
    /// Analysis-level failures never invalidate the session. Environment
    /// failures (disk, encoding, bad config) need outside intervention.
    pub fn is_recoverable(&self) -> bool {
        match self {
            AnalysisError::ImageDecode { .. } => true,
            AnalysisError::InsufficientDefenders { .. } => true,
            AnalysisError::MissingPrerequisite(_) => true,
            AnalysisError::ImageEncode { .. } => false,
            AnalysisError::Config(_) => false,
            AnalysisError::Io(_) => false,
            AnalysisError::Serialization(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = AnalysisError::InsufficientDefenders { found: 1 };
        assert_eq!(
            err.to_string(),
            "not enough defenders detected to establish offside line (found 1)"
        );

        let err = AnalysisError::MissingPrerequisite(Prerequisite::Ball);
        assert_eq!(err.to_string(), "cannot analyze: no ball detected");
    }

    #[test]
    fn test_recoverable() {
        assert!(AnalysisError::InsufficientDefenders { found: 0 }.is_recoverable());
        assert!(AnalysisError::MissingPrerequisite(Prerequisite::Image).is_recoverable());
        assert!(!AnalysisError::Config("radius".into()).is_recoverable());
    }
}
