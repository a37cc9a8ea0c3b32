//! Annotations and annotation files.
//!
//! An annotation ties an observation (species identification and other
//! key/value details) to a stretch of a video stream. Its position over
//! time is described by an ordered list of keypoints.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::keypoint::Keypoint;
use crate::timespan::TimeSpan;
use crate::videotime::VideoTime;

/// Observation key preferred when labelling an annotation.
pub const SPECIES_KEY: &str = "species";

/// An observation of something interesting in a video stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: u64,

    /// Stream the annotation belongs to.
    #[serde(default)]
    pub videostream_id: u64,

    /// Keypoints sorted by time.
    pub keypoints: Vec<Keypoint>,

    /// Who made the observation.
    #[serde(default)]
    pub observer: String,

    /// Free-form observation details, e.g. `species`, `count`.
    #[serde(default)]
    pub observation: BTreeMap<String, String>,
}

impl Annotation {
    pub fn new(id: u64, keypoints: Vec<Keypoint>) -> Self {
        Self {
            id,
            videostream_id: 0,
            keypoints,
            observer: String::new(),
            observation: BTreeMap::new(),
        }
    }

    /// Time of the first keypoint.
    pub fn start(&self) -> Option<f64> {
        self.keypoints.first().map(|k| k.time)
    }

    /// Time of the last keypoint.
    pub fn end(&self) -> Option<f64> {
        self.keypoints.last().map(|k| k.time)
    }

    /// Seconds between the first and last keypoint.
    pub fn duration(&self) -> Option<f64> {
        Some(self.end()? - self.start()?)
    }

    /// Start and end as a [`TimeSpan`], rounded to the millisecond.
    pub fn span(&self) -> Option<TimeSpan> {
        let start = VideoTime::from_secs_f64(self.start()?).ok()?;
        let end = VideoTime::from_secs_f64(self.end()?).ok()?;
        Some(TimeSpan::new(start, end))
    }

    /// Whether the annotation is on screen at `time` (both ends included).
    pub fn is_active_at(&self, time: f64) -> bool {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => start <= time && time <= end,
            _ => false,
        }
    }

    /// Short human label: the species if recorded, else any observation value.
    pub fn label(&self) -> Option<&str> {
        self.observation
            .get(SPECIES_KEY)
            .or_else(|| self.observation.values().next())
            .map(String::as_str)
    }

    /// Check the keypoint list against what the interpolation engine assumes.
    ///
    /// Returns one message per problem; an empty list means the annotation
    /// is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = vec![];

        if self.keypoints.is_empty() {
            issues.push(format!("Annotation {}: no keypoints", self.id));
            return issues;
        }

        for (i, kp) in self.keypoints.iter().enumerate() {
            if !kp.time.is_finite() || kp.time < 0.0 {
                issues.push(format!(
                    "Annotation {}: keypoint {i} has invalid time {}",
                    self.id, kp.time
                ));
            }
            if !kp.bbox.is_finite() {
                issues.push(format!(
                    "Annotation {}: keypoint {i} has non-finite box coordinates",
                    self.id
                ));
            }
        }

        for (i, pair) in self.keypoints.windows(2).enumerate() {
            if pair[1].time < pair[0].time {
                issues.push(format!(
                    "Annotation {}: keypoint {} ({}) is earlier than keypoint {i} ({})",
                    self.id,
                    i + 1,
                    pair[1].time,
                    pair[0].time
                ));
            }
        }

        issues
    }
}

/// Parse a JSON array of annotations.
pub fn parse_annotations(json: &str) -> Result<Vec<Annotation>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load a JSON array of annotations from a file.
pub fn load_annotations(path: impl AsRef<Path>) -> Result<Vec<Annotation>, AnnotationError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| AnnotationError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_annotations(&content).map_err(|e| AnnotationError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Errors that can occur when loading annotations.
#[derive(Debug, thiserror::Error)]
pub enum AnnotationError {
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Annotation {id} not found")]
    NotFound { id: u64 },
}

impl From<AnnotationError> for openfish_common::OpenfishError {
    fn from(err: AnnotationError) -> Self {
        openfish_common::OpenfishError::annotation(err.to_string())
    }
}

/// Find an annotation by id.
pub fn find_annotation(
    annotations: &[Annotation],
    id: u64,
) -> Result<&Annotation, AnnotationError> {
    annotations
        .iter()
        .find(|a| a.id == id)
        .ok_or(AnnotationError::NotFound { id })
}
