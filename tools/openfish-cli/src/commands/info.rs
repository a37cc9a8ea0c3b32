//! Show a summary of an annotation file.

use std::path::PathBuf;

use openfish_annotation_model::VideoTime;
use openfish_interpolation::heatmap::{timeline_marks, TimelineHeatmap};

use super::load;

const HEAT_LEVELS: [char; 5] = [' ', '.', ':', '*', '#'];

pub fn run(path: PathBuf, duration: Option<VideoTime>, bins: usize) -> anyhow::Result<()> {
    let annotations = load(&path)?;

    println!("Annotations: {}", annotations.len());
    for a in &annotations {
        let span = a
            .span()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "(no valid span)".to_string());
        println!(
            "  [{}] {} | {} | {} keypoint(s) | observer: {}",
            a.id,
            a.label().unwrap_or("(unlabelled)"),
            span,
            a.keypoints.len(),
            if a.observer.is_empty() { "-" } else { a.observer.as_str() }
        );
    }

    let Some(duration) = duration else {
        return Ok(());
    };
    let secs = duration.as_secs_f64();

    println!();
    println!("Timeline ({duration}):");
    for mark in timeline_marks(&annotations, secs) {
        println!(
            "  [{}] at {:.2}% width {:.2}%",
            mark.annotation_id, mark.x_pct, mark.width_pct
        );
    }

    let heatmap = TimelineHeatmap::from_annotations(&annotations, secs, bins);
    let row: String = (0..heatmap.bins.len())
        .map(|i| {
            let level = heatmap.normalized_bin(i).unwrap_or(0.0);
            let idx = (level * (HEAT_LEVELS.len() - 1) as f64).round() as usize;
            HEAT_LEVELS[idx.min(HEAT_LEVELS.len() - 1)]
        })
        .collect();
    println!("  |{row}|");
    println!(
        "  {} bins of {:.1}s, peak {} overlapping",
        heatmap.bins.len(),
        heatmap.bin_secs,
        heatmap.max_density
    );

    Ok(())
}
