//! Interpolate one annotation's box at a video time.

use std::path::PathBuf;

use openfish_annotation_model::{find_annotation, VideoTime};
use openfish_interpolation::{find_closest_keypoint_pair, interpolate_keypoints};

use super::{describe_box, load};

pub fn run(path: PathBuf, id: u64, at: VideoTime) -> anyhow::Result<()> {
    let annotations = load(&path)?;
    let annotation = find_annotation(&annotations, id)?;

    let time = at.as_secs_f64();
    let (a, b) = find_closest_keypoint_pair(&annotation.keypoints, time)?;
    let bbox = interpolate_keypoints((a, b), time);

    println!("Annotation {id} at {at}:");
    if std::ptr::eq(a, b) {
        println!("  Keypoint: {} (exact)", fmt_secs(a.time));
    } else {
        println!("  Between: {} and {}", fmt_secs(a.time), fmt_secs(b.time));
    }
    println!("  Box: {}", describe_box(&bbox));

    Ok(())
}

fn fmt_secs(secs: f64) -> String {
    VideoTime::from_secs_f64(secs)
        .map(|t| t.to_string())
        .unwrap_or_else(|_| format!("{secs}s"))
}
