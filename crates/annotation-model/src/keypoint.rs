//! Keypoints: a bounding box pinned to a moment in the video.
//!
//! In memory the time is plain seconds so the interpolation engine can
//! compare and blend it directly. On the wire it is an `HH:MM:SS.mmm`
//! string:
//!
//! ```json
//! { "time": "00:02:03.456", "box": { "x1": 10, "y1": 25, "x2": 50, "y2": 75 } }
//! ```

use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;

/// A known position of the annotated subject at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    /// Seconds since the start of the video.
    #[serde(with = "video_seconds")]
    pub time: f64,

    #[serde(rename = "box")]
    pub bbox: BoundingBox,
}

impl Keypoint {
    pub fn new(time: f64, bbox: BoundingBox) -> Self {
        Self { time, bbox }
    }
}

/// Serde adapter: `f64` seconds <-> `HH:MM:SS.mmm`.
pub mod video_seconds {
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::videotime::VideoTime;

    pub fn serialize<S: Serializer>(secs: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        let vt = VideoTime::from_secs_f64(*secs).map_err(S::Error::custom)?;
        serializer.serialize_str(&vt.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let text = String::deserialize(deserializer)?;
        let vt: VideoTime = text.parse().map_err(D::Error::custom)?;
        Ok(vt.as_secs_f64())
    }
}
