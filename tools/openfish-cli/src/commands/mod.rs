pub mod info;
pub mod interpolate;
pub mod overlay;
pub mod track;
pub mod validate;

use std::path::Path;

use openfish_annotation_model::{load_annotations, Annotation};
use openfish_common::OpenfishError;

/// Load an annotation file, logging how many annotations it held.
pub(crate) fn load(path: &Path) -> anyhow::Result<Vec<Annotation>> {
    let annotations = load_annotations(path).map_err(OpenfishError::from)?;
    tracing::debug!(
        path = %path.display(),
        count = annotations.len(),
        "loaded annotations"
    );
    Ok(annotations)
}

/// Render a box the way it is drawn: left/top corner plus extent, in percent.
pub(crate) fn describe_box(bbox: &openfish_annotation_model::BoundingBox) -> String {
    format!(
        "x1={:.2} y1={:.2} x2={:.2} y2={:.2} (left {:.2}%, top {:.2}%, {:.2}% x {:.2}%)",
        bbox.x1,
        bbox.y1,
        bbox.x2,
        bbox.y2,
        bbox.xmin(),
        bbox.ymin(),
        bbox.width(),
        bbox.height()
    )
}
