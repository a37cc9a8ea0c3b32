//! List every box visible at a video time.

use std::path::PathBuf;

use openfish_annotation_model::VideoTime;
use openfish_interpolation::{current_annotation_index, overlay_boxes};

use super::{describe_box, load};

pub fn run(path: PathBuf, at: VideoTime, json: bool) -> anyhow::Result<()> {
    let annotations = load(&path)?;
    let time = at.as_secs_f64();
    let boxes = overlay_boxes(&annotations, time);

    if json {
        println!("{}", serde_json::to_string_pretty(&boxes)?);
        return Ok(());
    }

    println!("Visible at {at}: {} of {}", boxes.len(), annotations.len());
    for overlay in &boxes {
        println!(
            "  [{}] {}: {}",
            overlay.annotation_id,
            overlay.label.as_deref().unwrap_or("(unlabelled)"),
            describe_box(&overlay.bbox)
        );
    }

    match current_annotation_index(&annotations, time) {
        Some(i) => println!("Current list entry: {} (id {})", i, annotations[i].id),
        None => println!("All annotations have ended."),
    }

    Ok(())
}
