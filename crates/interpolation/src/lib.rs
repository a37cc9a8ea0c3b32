//! OpenFish Interpolation
//!
//! Turns sparse annotation keypoints into boxes for any playback time:
//! - **Keypoints:** Bracket lookup and linear box interpolation
//! - **Overlay:** Boxes for every annotation visible at a time
//! - **Heatmap:** Where annotations cluster along the video timeline
//!
//! This crate is pure computation: no I/O, no shared state. Every function
//! is safe to call from any thread.

pub mod heatmap;
pub mod keypoints;
pub mod overlay;

pub use keypoints::{
    box_at, find_closest_keypoint_pair, interpolate_keypoints, lerp, InterpolationError,
    KeypointPair,
};
pub use overlay::{current_annotation_index, overlay_boxes, OverlayBox};

impl From<InterpolationError> for openfish_common::OpenfishError {
    fn from(err: InterpolationError) -> Self {
        openfish_common::OpenfishError::interpolation(err.to_string())
    }
}
