//! Error types shared across OpenFish crates.

use std::path::PathBuf;

/// Top-level error type for OpenFish operations.
#[derive(Debug, thiserror::Error)]
pub enum OpenfishError {
    #[error("Annotation error: {message}")]
    Annotation { message: String },

    #[error("Interpolation error: {message}")]
    Interpolation { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using OpenfishError.
pub type OpenfishResult<T> = Result<T, OpenfishError>;

impl OpenfishError {
    pub fn annotation(msg: impl Into<String>) -> Self {
        Self::Annotation {
            message: msg.into(),
        }
    }

    pub fn interpolation(msg: impl Into<String>) -> Self {
        Self::Interpolation {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = OpenfishError::interpolation("current time outside range of keypoints");
        assert_eq!(
            err.to_string(),
            "Interpolation error: current time outside range of keypoints"
        );

        let err = OpenfishError::FileNotFound {
            path: PathBuf::from("annotations.json"),
        };
        assert_eq!(err.to_string(), "File not found: annotations.json");
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: OpenfishError = json_err.into();
        assert!(matches!(err, OpenfishError::Json(_)));
    }
}
