//! Keyframe lookup and bounding-box interpolation.
//!
//! During playback the overlay asks, once per tick, where an annotation's
//! box is at the current time. That is answered in two steps:
//!
//! 1. [`find_closest_keypoint_pair`] finds the keypoints on either side of
//!    the time (or the one keypoint sitting exactly on it).
//! 2. [`interpolate_keypoints`] blends the two boxes linearly.
//!
//! Keypoint slices must already be sorted by time. Nothing here sorts,
//! validates or allocates.

use openfish_annotation_model::{BoundingBox, Keypoint};

/// Two keypoints bracketing a query time. Both members are the same
/// keypoint when the time lands exactly on it.
pub type KeypointPair<'a> = (&'a Keypoint, &'a Keypoint);

/// Errors from keypoint lookup.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InterpolationError {
    #[error("current time {time} outside range of keypoints [{start}, {end}]")]
    OutOfRange { time: f64, start: f64, end: f64 },

    #[error("current time {time} outside range of keypoints: no keypoints")]
    NoKeypoints { time: f64 },
}

/// Find the keypoints bracketing `time`.
///
/// Pairs are scanned in order. For each pair the exact-match check runs
/// before the upper-bound check, so a time equal to a keypoint's time always
/// yields `(k, k)` rather than a pair starting at `k`.
///
/// Times equal to the last keypoint also yield `(last, last)`. Times before
/// the first keypoint, after the last one, or NaN are rejected; the result
/// is never clamped or extrapolated.
pub fn find_closest_keypoint_pair(
    keypoints: &[Keypoint],
    time: f64,
) -> Result<KeypointPair<'_>, InterpolationError> {
    let (Some(first), Some(last)) = (keypoints.first(), keypoints.last()) else {
        return Err(InterpolationError::NoKeypoints { time });
    };

    if time >= first.time {
        for pair in keypoints.windows(2) {
            let (kp, next) = (&pair[0], &pair[1]);
            if kp.time == time {
                return Ok((kp, kp));
            }
            if next.time > time {
                return Ok((kp, next));
            }
        }
        if last.time == time {
            return Ok((last, last));
        }
    }

    tracing::trace!(time, start = first.time, end = last.time, "time outside keypoints");
    Err(InterpolationError::OutOfRange {
        time,
        start: first.time,
        end: last.time,
    })
}

/// Linearly interpolate the value at `t` between `v0` at `t0` and `v1` at `t1`.
///
/// `t0` must differ from `t1`. Evaluated as
/// `(v0 * (t1 - t) + v1 * (t - t0)) / (t1 - t0)`, which returns `v0` and `v1`
/// at the endpoints.
#[inline]
pub fn lerp(t: f64, t0: f64, t1: f64, v0: f64, v1: f64) -> f64 {
    (v0 * (t1 - t) + v1 * (t - t0)) / (t1 - t0)
}

/// Interpolate the box for `time` between a bracketing pair.
///
/// A pair with equal times (the exact-match result of the lookup) returns
/// the first box unchanged instead of dividing by zero.
pub fn interpolate_keypoints((a, b): KeypointPair<'_>, time: f64) -> BoundingBox {
    let (t0, t1) = (a.time, b.time);
    if t0 == t1 {
        return a.bbox;
    }

    BoundingBox {
        x1: lerp(time, t0, t1, a.bbox.x1, b.bbox.x1),
        y1: lerp(time, t0, t1, a.bbox.y1, b.bbox.y1),
        x2: lerp(time, t0, t1, a.bbox.x2, b.bbox.x2),
        y2: lerp(time, t0, t1, a.bbox.y2, b.bbox.y2),
    }
}

/// Box for `time` along a sorted keypoint list.
pub fn box_at(keypoints: &[Keypoint], time: f64) -> Result<BoundingBox, InterpolationError> {
    let pair = find_closest_keypoint_pair(keypoints, time)?;
    Ok(interpolate_keypoints(pair, time))
}
