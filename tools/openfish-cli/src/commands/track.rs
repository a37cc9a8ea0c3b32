//! Sample an annotation's box at every playback tick.

use std::path::PathBuf;

use openfish_annotation_model::{find_annotation, VideoTime};
use openfish_common::FrameTicker;
use openfish_interpolation::box_at;

use super::{describe_box, load};

pub fn run(path: PathBuf, id: u64, fps: u32, json: bool) -> anyhow::Result<()> {
    let annotations = load(&path)?;
    let annotation = find_annotation(&annotations, id)?;

    let (Some(start), Some(end)) = (annotation.start(), annotation.end()) else {
        anyhow::bail!("Annotation {id} has no keypoints");
    };

    let ticker = FrameTicker::new(start, end, fps);
    tracing::debug!(id, start, end, ticks = ticker.tick_count(), "sampling track");

    for t in ticker {
        let bbox = box_at(&annotation.keypoints, t)?;
        if json {
            let line = serde_json::json!({
                "time": t,
                "box": bbox,
            });
            println!("{line}");
        } else {
            let label = VideoTime::from_secs_f64(t)?;
            println!("{label}  {}", describe_box(&bbox));
        }
    }

    Ok(())
}
