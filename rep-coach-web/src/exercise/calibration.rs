//! Dynamic range calibration - learns the user's extended reach
//!
//! While the user holds the extended posture, the shoulder-wrist distance
//! is sampled for a fixed wall-clock window. The mean becomes the max range
//! that later contraction thresholds are scaled by. Frame rate varies, so
//! the window is measured in milliseconds, not frames.

/// Hold duration before calibration completes
pub const CALIBRATION_HOLD_MS: f64 = 3000.0;

/// Result of feeding one sample
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CalibrationProgress {
    /// Still inside the hold window
    Collecting { elapsed_ms: f64 },
    /// Window finished; carries the learned max range
    Complete(f32),
}

impl CalibrationProgress {
    /// Whole seconds left in the hold window, for countdown feedback
    pub fn seconds_left(&self) -> u32 {
        match self {
            CalibrationProgress::Collecting { elapsed_ms } => {
                ((CALIBRATION_HOLD_MS - elapsed_ms).max(0.0) / 1000.0).ceil() as u32
            }
            CalibrationProgress::Complete(_) => 0,
        }
    }
}

/// Accumulates reach samples during the held extension
#[derive(Clone, Debug, Default)]
pub struct RangeCalibration {
    samples: Vec<f32>,
    started_at_ms: Option<f64>,
    max_range: Option<f32>,
}

impl RangeCalibration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sample taken while the posture is held
    ///
    /// The first sample after an interruption starts the timer.
    pub fn sample(&mut self, distance: f32, now_ms: f64) -> CalibrationProgress {
        let mut started = *self.started_at_ms.get_or_insert(now_ms);
        if now_ms < started {
            // Clock stepped backwards; the window cannot be trusted
            self.interrupt();
            self.started_at_ms = Some(now_ms);
            started = now_ms;
        }
        if distance.is_finite() {
            self.samples.push(distance);
        }

        let elapsed_ms = now_ms - started;
        if elapsed_ms < CALIBRATION_HOLD_MS || self.samples.is_empty() {
            return CalibrationProgress::Collecting { elapsed_ms };
        }

        let mean = self.samples.iter().sum::<f32>() / self.samples.len() as f32;
        if mean <= 0.0 {
            // A zero reach would make every frame look contracted
            self.interrupt();
            return CalibrationProgress::Collecting { elapsed_ms: 0.0 };
        }

        self.max_range = Some(mean);
        self.samples.clear();
        self.started_at_ms = None;
        CalibrationProgress::Complete(mean)
    }

    /// Posture broken: drop partial samples and restart the timer
    pub fn interrupt(&mut self) {
        self.samples.clear();
        self.started_at_ms = None;
    }

    pub fn max_range(&self) -> Option<f32> {
        self.max_range
    }

    pub fn is_calibrated(&self) -> bool {
        self.max_range.is_some()
    }

    /// Samples held in the current window (for debugging)
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_after_hold_window() {
        let mut cal = RangeCalibration::new();
        let mut t = 1000.0;
        let mut result = CalibrationProgress::Collecting { elapsed_ms: 0.0 };
        while t <= 1000.0 + CALIBRATION_HOLD_MS {
            result = cal.sample(0.30, t);
            t += 100.0;
        }
        match result {
            CalibrationProgress::Complete(range) => assert!((range - 0.30).abs() < 1e-5),
            other => panic!("expected completion, got {:?}", other),
        }
        assert!(cal.is_calibrated());
        assert_eq!(cal.sample_count(), 0);
    }

    #[test]
    fn test_max_range_is_mean_of_samples() {
        let mut cal = RangeCalibration::new();
        cal.sample(0.2, 0.0);
        cal.sample(0.4, 1500.0);
        let result = cal.sample(0.3, 3000.0);
        match result {
            CalibrationProgress::Complete(range) => assert!((range - 0.3).abs() < 1e-5),
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_interrupt_discards_samples_and_restarts_timer() {
        let mut cal = RangeCalibration::new();
        cal.sample(0.3, 0.0);
        cal.sample(0.3, 2500.0);
        cal.interrupt();
        assert_eq!(cal.sample_count(), 0);

        // 3s after the original start, but only 600ms into the new window
        let result = cal.sample(0.3, 3100.0);
        assert_eq!(result, CalibrationProgress::Collecting { elapsed_ms: 0.0 });
        let result = cal.sample(0.3, 3700.0);
        assert!(matches!(result, CalibrationProgress::Collecting { .. }));
        assert!(!cal.is_calibrated());
    }

    #[test]
    fn test_zero_reach_keeps_collecting() {
        let mut cal = RangeCalibration::new();
        cal.sample(0.0, 0.0);
        let result = cal.sample(0.0, 3500.0);
        assert!(matches!(result, CalibrationProgress::Collecting { .. }));
        assert!(cal.max_range().is_none());
    }

    #[test]
    fn test_clock_stepping_back_restarts_window() {
        let mut cal = RangeCalibration::new();
        cal.sample(0.3, 5000.0);
        cal.sample(0.3, 6000.0);

        let result = cal.sample(0.3, 1000.0);
        assert_eq!(result, CalibrationProgress::Collecting { elapsed_ms: 0.0 });
        assert_eq!(result.seconds_left(), 3);
        assert_eq!(cal.sample_count(), 1);

        assert!(matches!(cal.sample(0.3, 3500.0), CalibrationProgress::Collecting { .. }));
        assert!(matches!(cal.sample(0.3, 4000.0), CalibrationProgress::Complete(_)));
    }

    #[test]
    fn test_seconds_left() {
        assert_eq!(CalibrationProgress::Collecting { elapsed_ms: 0.0 }.seconds_left(), 3);
        assert_eq!(CalibrationProgress::Collecting { elapsed_ms: 2100.0 }.seconds_left(), 1);
        assert_eq!(CalibrationProgress::Complete(0.3).seconds_left(), 0);
    }
}
