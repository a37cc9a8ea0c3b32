use std::path::PathBuf;

use openfish_annotation_model::{find_annotation, load_annotations, Annotation, BoundingBox};
use openfish_common::FrameTicker;
use openfish_interpolation::heatmap::TimelineHeatmap;
use openfish_interpolation::{box_at, find_closest_keypoint_pair, overlay_boxes};

fn load_fixture_annotations() -> Vec<Annotation> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("sample-annotations.json");

    load_annotations(path).expect("fixture annotations should load")
}

#[test]
fn fixture_keypoints_are_valid() {
    for annotation in load_fixture_annotations() {
        assert!(
            annotation.validate().is_empty(),
            "annotation {} should be valid",
            annotation.id
        );
    }
}

#[test]
fn long_track_brackets_reference_times() {
    let annotations = load_fixture_annotations();
    let track = find_annotation(&annotations, 102).unwrap();

    for (t, expected) in [(3.0, (2.0, 5.0)), (3.1, (2.0, 5.0)), (200.0, (162.0, 600.0))] {
        let (a, b) = find_closest_keypoint_pair(&track.keypoints, t).unwrap();
        assert_eq!((a.time, b.time), expected, "t = {t}");
    }

    assert!(box_at(&track.keypoints, 621.001).is_err());
    assert!(box_at(&track.keypoints, 0.999).is_err());
}

#[test]
fn wire_times_interpolate_exactly() {
    let annotations = load_fixture_annotations();
    let groper = find_annotation(&annotations, 101).unwrap();

    assert_eq!(groper.start(), Some(1001.0));
    assert_eq!(groper.end(), Some(1003.0));
    assert_eq!(
        box_at(&groper.keypoints, 1002.0).unwrap(),
        BoundingBox::new(15.0, 5.0, 40.0, 85.0)
    );
}

#[test]
fn overlay_at_tick_shows_active_boxes() {
    let annotations = load_fixture_annotations();

    let boxes = overlay_boxes(&annotations, 3.25);
    let ids: Vec<u64> = boxes.iter().map(|b| b.annotation_id).collect();
    assert_eq!(ids, vec![102, 103]);
    assert_eq!(boxes[1].label.as_deref(), Some("burrowing"));
    assert_eq!(boxes[1].bbox.width(), 0.0);

    let boxes = overlay_boxes(&annotations, 1002.0);
    assert_eq!(boxes.len(), 1);
    assert_eq!(boxes[0].label.as_deref(), Some("Eastern blue groper"));
}

#[test]
fn playback_ticks_stay_within_keypoint_boxes() {
    let annotations = load_fixture_annotations();
    let groper = find_annotation(&annotations, 101).unwrap();
    let (start, end) = (groper.start().unwrap(), groper.end().unwrap());

    let mut ticks = 0;
    for t in FrameTicker::new(start, end, 30) {
        let bbox = box_at(&groper.keypoints, t).unwrap();
        assert!(bbox.is_finite());
        assert!((10.0..=20.0).contains(&bbox.x1), "x1 {} at {t}", bbox.x1);
        assert!((80.0..=90.0).contains(&bbox.y2), "y2 {} at {t}", bbox.y2);
        ticks += 1;
    }
    assert_eq!(ticks, 61);
}

#[test]
fn heatmap_over_fixture() {
    let annotations = load_fixture_annotations();
    let heatmap = TimelineHeatmap::from_annotations(&annotations, 1200.0, 12);

    // 102 spans bins 0..=6, 103 sits in bin 0, 101 sits in bin 10.
    assert_eq!(heatmap.bin(0), Some(2.0));
    assert_eq!(heatmap.bin(6), Some(1.0));
    assert_eq!(heatmap.bin(7), Some(0.0));
    assert_eq!(heatmap.bin(10), Some(1.0));
    assert_eq!(heatmap.max_density, 2.0);
}
