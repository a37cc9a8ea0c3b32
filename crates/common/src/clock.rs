//! Playback tick utilities.
//!
//! The overlay is recomputed once per playback tick. This module provides
//! the tick schedule used to drive that loop outside a browser.

/// Fixed-rate schedule of playback tick times over `[start, end]`.
///
/// Tick `i` lands at `start + i / rate_hz`, computed from the index rather
/// than by accumulation so long spans do not drift.
#[derive(Debug, Clone)]
pub struct FrameTicker {
    start: f64,
    end: f64,
    rate_hz: u32,
    index: u64,
}

impl FrameTicker {
    /// Create a ticker over `[start, end]` at `rate_hz` ticks per second.
    ///
    /// A zero rate is treated as 1 Hz.
    pub fn new(start: f64, end: f64, rate_hz: u32) -> Self {
        Self {
            start,
            end,
            rate_hz: rate_hz.max(1),
            index: 0,
        }
    }

    /// Interval between ticks in seconds.
    pub fn interval_secs(&self) -> f64 {
        1.0 / self.rate_hz as f64
    }

    /// Number of ticks the schedule yields in total.
    pub fn tick_count(&self) -> u64 {
        let span = self.end - self.start;
        if !span.is_finite() || span < 0.0 {
            return 0;
        }
        (span * self.rate_hz as f64).floor() as u64 + 1
    }
}

impl Iterator for FrameTicker {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.tick_count() {
            return None;
        }
        let t = self.start + self.index as f64 / self.rate_hz as f64;
        self.index += 1;
        Some(t.min(self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_includes_both_ends() {
        let ticks: Vec<f64> = FrameTicker::new(1.0, 2.0, 4).collect();
        assert_eq!(ticks, vec![1.0, 1.25, 1.5, 1.75, 2.0]);
    }

    #[test]
    fn test_ticker_stops_before_partial_interval() {
        let ticks: Vec<f64> = FrameTicker::new(0.0, 1.1, 2).collect();
        assert_eq!(ticks, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_ticker_single_point_span() {
        let ticks: Vec<f64> = FrameTicker::new(5.0, 5.0, 30).collect();
        assert_eq!(ticks, vec![5.0]);
    }

    #[test]
    fn test_ticker_inverted_span_is_empty() {
        assert_eq!(FrameTicker::new(2.0, 1.0, 30).count(), 0);
    }

    #[test]
    fn test_ticker_zero_rate_falls_back() {
        let ticker = FrameTicker::new(0.0, 2.0, 0);
        assert!((ticker.interval_secs() - 1.0).abs() < 1e-12);
        assert_eq!(ticker.count(), 3);
    }
}
