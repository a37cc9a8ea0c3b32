//! Timeline heatmap of annotation activity.
//!
//! Shows where in a video annotations cluster: as one mark per annotation
//! along the scrub bar, or as a binned coverage histogram.

use openfish_annotation_model::Annotation;

/// Narrowest mark drawn, in percent of the timeline, so very short
/// annotations stay visible.
pub const MIN_MARK_WIDTH_PCT: f64 = 0.25;

/// One annotation's footprint on the timeline, in percent of its width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineMark {
    pub annotation_id: u64,
    pub x_pct: f64,
    pub width_pct: f64,
}

/// Marks for every annotation with keypoints, given the video `duration`
/// in seconds. A non-positive duration yields no marks.
pub fn timeline_marks(annotations: &[Annotation], duration: f64) -> Vec<TimelineMark> {
    if duration.is_nan() || duration <= 0.0 {
        return vec![];
    }
    annotations
        .iter()
        .filter_map(|a| {
            let start = a.start()?;
            let length = a.duration()?;
            Some(TimelineMark {
                annotation_id: a.id,
                x_pct: start / duration * 100.0,
                width_pct: (length / duration * 100.0).max(MIN_MARK_WIDTH_PCT),
            })
        })
        .collect()
}

/// Coverage histogram over the video duration.
///
/// Bin `i` covers `[i * w, (i + 1) * w)` with `w = duration / bins` and
/// counts the annotations whose span overlaps it. The final bin also
/// includes the end of the video.
#[derive(Debug, Clone)]
pub struct TimelineHeatmap {
    pub bins: Vec<f64>,
    pub bin_secs: f64,
    pub max_density: f64,
}

impl TimelineHeatmap {
    pub fn from_annotations(annotations: &[Annotation], duration: f64, bins: usize) -> Self {
        let bin_count = bins.max(1);
        let mut cells = vec![0.0; bin_count];

        if duration.is_nan() || duration <= 0.0 {
            return Self {
                bins: cells,
                bin_secs: 0.0,
                max_density: 0.0,
            };
        }

        let bin_secs = duration / bin_count as f64;
        let last_bin = bin_count - 1;
        let bin_of = |t: f64| ((t / bin_secs).floor().max(0.0) as usize).min(last_bin);

        for annotation in annotations {
            let (Some(start), Some(end)) = (annotation.start(), annotation.end()) else {
                continue;
            };
            if start.is_nan() || end.is_nan() || end < start || end < 0.0 || start > duration {
                continue;
            }
            for cell in &mut cells[bin_of(start)..=bin_of(end)] {
                *cell += 1.0;
            }
        }

        let max_density = cells.iter().copied().fold(0.0_f64, f64::max);
        Self {
            bins: cells,
            bin_secs,
            max_density,
        }
    }

    pub fn bin(&self, index: usize) -> Option<f64> {
        self.bins.get(index).copied()
    }

    pub fn normalized_bin(&self, index: usize) -> Option<f64> {
        let value = self.bin(index)?;
        if self.max_density <= 0.0 {
            return Some(0.0);
        }
        Some(value / self.max_density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openfish_annotation_model::{BoundingBox, Keypoint};

    fn annotation(id: u64, times: &[f64]) -> Annotation {
        Annotation::new(
            id,
            times
                .iter()
                .map(|&t| Keypoint::new(t, BoundingBox::default()))
                .collect(),
        )
    }

    #[test]
    fn test_marks_scale_to_duration() {
        let marks = timeline_marks(&[annotation(1, &[50.0, 100.0])], 200.0);
        assert_eq!(
            marks,
            vec![TimelineMark {
                annotation_id: 1,
                x_pct: 25.0,
                width_pct: 25.0
            }]
        );
    }

    #[test]
    fn test_marks_have_minimum_width() {
        let marks = timeline_marks(&[annotation(1, &[10.0]), annotation(2, &[])], 100.0);
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].width_pct, MIN_MARK_WIDTH_PCT);
    }

    #[test]
    fn test_marks_empty_for_zero_duration() {
        assert!(timeline_marks(&[annotation(1, &[1.0, 2.0])], 0.0).is_empty());
    }

    #[test]
    fn test_heatmap_counts_overlaps() {
        let annotations = vec![
            annotation(1, &[0.0, 25.0]),
            annotation(2, &[10.0, 15.0]),
            annotation(3, &[90.0, 100.0]),
        ];
        let heatmap = TimelineHeatmap::from_annotations(&annotations, 100.0, 10);

        assert_eq!(heatmap.bin(0), Some(1.0));
        assert_eq!(heatmap.bin(1), Some(2.0));
        assert_eq!(heatmap.bin(2), Some(1.0));
        assert_eq!(heatmap.bin(5), Some(0.0));
        assert_eq!(heatmap.bin(9), Some(1.0));
        assert_eq!(heatmap.bin(10), None);
        assert_eq!(heatmap.max_density, 2.0);
        assert_eq!(heatmap.normalized_bin(1), Some(1.0));
        assert_eq!(heatmap.normalized_bin(0), Some(0.5));
    }

    #[test]
    fn test_heatmap_skips_nan_times() {
        let annotations = vec![
            annotation(9, &[500.0, f64::NAN]),
            annotation(10, &[f64::NAN, 100.0]),
            annotation(11, &[0.0, 150.0]),
        ];
        let heatmap = TimelineHeatmap::from_annotations(&annotations, 1200.0, 12);

        assert_eq!(heatmap.bin(0), Some(1.0));
        assert_eq!(heatmap.bin(1), Some(1.0));
        assert_eq!(heatmap.bin(5), Some(0.0));
        assert_eq!(heatmap.max_density, 1.0);
    }

    #[test]
    fn test_heatmap_empty_is_zeroed() {
        let heatmap = TimelineHeatmap::from_annotations(&[], 60.0, 0);
        assert_eq!(heatmap.bins.len(), 1);
        assert_eq!(heatmap.max_density, 0.0);
        assert_eq!(heatmap.normalized_bin(0), Some(0.0));
    }
}
