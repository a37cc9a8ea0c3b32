//! OpenFish Annotation Model
//!
//! Defines the data contracts shared by the annotation tooling:
//! - **BoundingBox:** Rectangle in percent-of-frame coordinates
//! - **Keypoint:** A bounding box at a moment in the video
//! - **VideoTime / TimeSpan:** `HH:MM:SS.mmm` offsets and ranges
//! - **Annotation:** An observation owning a time-sorted keypoint list
//!
//! Coordinates are percentages `[0.0, 100.0]` of the rendered frame so they
//! survive resizing of the player; out-of-range values are kept as-is.

pub mod annotation;
pub mod bbox;
pub mod keypoint;
pub mod timespan;
pub mod videotime;

pub use annotation::*;
pub use bbox::*;
pub use keypoint::*;
pub use timespan::*;
pub use videotime::*;
