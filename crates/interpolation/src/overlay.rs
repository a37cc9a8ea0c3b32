//! Per-tick annotation overlay.
//!
//! Given every annotation on a stream and the current playback time, work
//! out which boxes are on screen and where. Annotations whose span does not
//! include the time are skipped before interpolation, so the engine is only
//! ever asked about times it can answer.

use openfish_annotation_model::{Annotation, BoundingBox};
use serde::Serialize;

use crate::keypoints::box_at;

/// One box to draw over the video.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayBox {
    pub annotation_id: u64,
    #[serde(rename = "box")]
    pub bbox: BoundingBox,
    /// Text shown on the box, usually the species.
    pub label: Option<String>,
}

/// Boxes for all annotations visible at `time`, in input order.
pub fn overlay_boxes(annotations: &[Annotation], time: f64) -> Vec<OverlayBox> {
    annotations
        .iter()
        .filter(|annotation| annotation.is_active_at(time))
        .filter_map(|annotation| match box_at(&annotation.keypoints, time) {
            Ok(bbox) => Some(OverlayBox {
                annotation_id: annotation.id,
                bbox,
                label: annotation.label().map(str::to_string),
            }),
            Err(e) => {
                tracing::warn!(id = annotation.id, "skipping annotation: {e}");
                None
            }
        })
        .collect()
}

/// Index of the first annotation that has not yet ended at `time`.
///
/// Annotation lists are shown in start order with a marker on the current
/// entry; this picks that entry. Returns `None` once every annotation has
/// ended.
pub fn current_annotation_index(annotations: &[Annotation], time: f64) -> Option<usize> {
    annotations
        .iter()
        .position(|a| a.end().is_some_and(|end| time < end))
}
