//! Time offsets within a video.
//!
//! A [`VideoTime`] is hours, minutes, seconds and milliseconds since the
//! start of a video stream. There is no date and no timezone. The textual
//! form is `HH:MM:SS.mmm`, which is also how it travels over the wire.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const MS_PER_SECOND: u64 = 1000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// A time within a video, at millisecond resolution.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct VideoTime {
    millis: u64,
}

/// Errors produced when building or parsing a [`VideoTime`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimeError {
    #[error("invalid format: {input:?}, expected HH:MM:SS or HH:MM:SS.mmm")]
    InvalidFormat { input: String },

    #[error("invalid value, {field} is not 0 ≤ {value} ≤ {max}")]
    FieldOutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },

    #[error("invalid seconds value: {0}")]
    InvalidSeconds(f64),
}

impl VideoTime {
    pub const ZERO: VideoTime = VideoTime { millis: 0 };

    /// Build a time from its components. Hours are unbounded.
    pub fn new(hours: u64, minutes: u64, seconds: u64, millis: u64) -> Result<Self, TimeError> {
        check_field("milliseconds", millis, 999)?;
        check_field("seconds", seconds, 59)?;
        check_field("minutes", minutes, 59)?;
        let max_hours = u64::MAX / MS_PER_HOUR - 1;
        check_field("hours", hours, max_hours)?;
        Ok(Self {
            millis: hours * MS_PER_HOUR
                + minutes * MS_PER_MINUTE
                + seconds * MS_PER_SECOND
                + millis,
        })
    }

    pub fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Convert fractional seconds, rounding to the nearest millisecond.
    pub fn from_secs_f64(secs: f64) -> Result<Self, TimeError> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(TimeError::InvalidSeconds(secs));
        }
        let millis = (secs * MS_PER_SECOND as f64).round();
        if millis >= u64::MAX as f64 {
            return Err(TimeError::InvalidSeconds(secs));
        }
        Ok(Self {
            millis: millis as u64,
        })
    }

    pub fn as_millis(&self) -> u64 {
        self.millis
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.millis as f64 / MS_PER_SECOND as f64
    }

    /// Split into `(hours, minutes, seconds, milliseconds)`.
    pub fn components(&self) -> (u64, u64, u64, u64) {
        let h = self.millis / MS_PER_HOUR;
        let m = (self.millis % MS_PER_HOUR) / MS_PER_MINUTE;
        let s = (self.millis % MS_PER_MINUTE) / MS_PER_SECOND;
        let ms = self.millis % MS_PER_SECOND;
        (h, m, s, ms)
    }

    /// Format as `HH:MM:SS.mmm`, or `HH:MM:SS` when `with_millis` is false.
    pub fn format(&self, with_millis: bool) -> String {
        let (h, m, s, ms) = self.components();
        if with_millis {
            format!("{h:02}:{m:02}:{s:02}.{ms:03}")
        } else {
            format!("{h:02}:{m:02}:{s:02}")
        }
    }
}

fn check_field(field: &'static str, value: u64, max: u64) -> Result<(), TimeError> {
    if value > max {
        return Err(TimeError::FieldOutOfRange { field, value, max });
    }
    Ok(())
}

fn parse_digits(part: &str, input: &str) -> Result<u64, TimeError> {
    let invalid = || TimeError::InvalidFormat {
        input: input.to_string(),
    };
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    part.parse().map_err(|_| invalid())
}

impl FromStr for VideoTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(':').collect();
        let [h, m, rest] = fields.as_slice() else {
            return Err(TimeError::InvalidFormat {
                input: s.to_string(),
            });
        };

        let (sec, ms) = match rest.split_once('.') {
            Some((sec, frac)) => {
                // Exactly three digits, so ".5" is not silently read as 5ms.
                if frac.len() != 3 {
                    return Err(TimeError::InvalidFormat {
                        input: s.to_string(),
                    });
                }
                (sec, parse_digits(frac, s)?)
            }
            None => (*rest, 0),
        };

        Self::new(
            parse_digits(h, s)?,
            parse_digits(m, s)?,
            parse_digits(sec, s)?,
            ms,
        )
    }
}

impl fmt::Display for VideoTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(true))
    }
}

impl TryFrom<String> for VideoTime {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VideoTime> for String {
    fn from(value: VideoTime) -> Self {
        value.to_string()
    }
}
