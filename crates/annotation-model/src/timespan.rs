//! Start/end pairs of video times.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::videotime::{TimeError, VideoTime};

/// A pair of video timestamps, formatted as `12:01:04.000-12:01:05.000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSpan {
    pub start: VideoTime,
    pub end: VideoTime,
}

impl TimeSpan {
    pub fn new(start: VideoTime, end: VideoTime) -> Self {
        Self { start, end }
    }

    /// A span is valid when it does not run backwards.
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// Whether `secs` falls within the span, both ends included.
    pub fn contains(&self, secs: f64) -> bool {
        self.start.as_secs_f64() <= secs && secs <= self.end.as_secs_f64()
    }

    /// Length in seconds. Negative for invalid spans.
    pub fn duration_secs(&self) -> f64 {
        self.end.as_secs_f64() - self.start.as_secs_f64()
    }
}

impl FromStr for TimeSpan {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        let [start, end] = parts.as_slice() else {
            return Err(TimeError::InvalidFormat {
                input: s.to_string(),
            });
        };
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl TryFrom<String> for TimeSpan {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSpan> for String {
    fn from(value: TimeSpan) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vt(h: u64, m: u64, s: u64, ms: u64) -> VideoTime {
        VideoTime::new(h, m, s, ms).unwrap()
    }

    #[test]
    fn test_parse_reads_both_halves() {
        let span: TimeSpan = "12:01:04.000-12:01:05.250".parse().unwrap();
        assert_eq!(span.start, vt(12, 1, 4, 0));
        assert_eq!(span.end, vt(12, 1, 5, 250));
        assert!(span.is_valid());
        assert!((span.duration_secs() - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        let span = TimeSpan::new(vt(0, 0, 1, 0), vt(0, 0, 2, 500));
        assert_eq!(span.to_string(), "00:00:01.000-00:00:02.500");
    }

    #[test]
    fn test_invalid_when_reversed() {
        let span = TimeSpan::new(vt(0, 0, 3, 0), vt(0, 0, 2, 0));
        assert!(!span.is_valid());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let span = TimeSpan::new(vt(0, 0, 1, 0), vt(0, 0, 3, 0));
        assert!(span.contains(1.0));
        assert!(span.contains(3.0));
        assert!(!span.contains(3.001));
        assert!(!span.contains(0.999));
    }

    #[test]
    fn test_parse_rejects_wrong_part_count() {
        assert!("00:00:01.000".parse::<TimeSpan>().is_err());
        assert!("00:00:01.000-00:00:02.000-00:00:03.000"
            .parse::<TimeSpan>()
            .is_err());
        assert!("00:00:01.000-garbage".parse::<TimeSpan>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let span = TimeSpan::new(vt(0, 0, 1, 0), vt(0, 0, 2, 0));
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, "\"00:00:01.000-00:00:02.000\"");
        assert_eq!(serde_json::from_str::<TimeSpan>(&json).unwrap(), span);
    }
}
