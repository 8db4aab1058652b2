/// Converts display-synchronized timestamps into elapsed seconds.
///
/// The first timestamp after construction or `reset()` only establishes the
/// baseline and yields a zero delta, so a resumed loop never catches up on
/// the time it spent stopped.
pub struct FrameClock {
    /// Timestamp (ms) of the previous frame, if any.
    last_ms: Option<f64>,
    /// Optional upper bound on a single delta, in seconds.
    max_dt: Option<f32>,
}

impl FrameClock {
    pub fn new(max_dt: Option<f32>) -> Self {
        Self {
            last_ms: None,
            max_dt,
        }
    }

    /// Record a frame timestamp and return the seconds elapsed since the previous one.
    /// Non-monotonic timestamps yield 0.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => (((now_ms - last) / 1000.0) as f32).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        match self.max_dt {
            Some(max) => dt.min(max),
            None => dt,
        }
    }

    /// Discard the baseline. The next `advance` yields 0.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    pub fn has_baseline(&self) -> bool {
        self.last_ms.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_zero() {
        let mut clock = FrameClock::new(None);
        assert_eq!(clock.advance(1234.0), 0.0);
        let dt = clock.advance(1250.0);
        assert!((dt - 0.016).abs() < 1e-6, "dt was {}", dt);
    }

    #[test]
    fn reset_discards_baseline() {
        let mut clock = FrameClock::new(None);
        clock.advance(0.0);
        clock.advance(16.0);
        clock.reset();
        assert!(!clock.has_baseline());
        // A long pause between frames must not show up as a delta.
        assert_eq!(clock.advance(60_000.0), 0.0);
    }

    #[test]
    fn long_frames_keep_real_time() {
        let mut clock = FrameClock::new(None);
        clock.advance(0.0);
        assert_eq!(clock.advance(1000.0), 1.0);
        assert_eq!(clock.advance(4000.0), 3.0);
    }

    #[test]
    fn negative_deltas_are_zero() {
        let mut clock = FrameClock::new(None);
        clock.advance(5000.0);
        assert_eq!(clock.advance(4000.0), 0.0);
        // The earlier timestamp becomes the new baseline.
        assert_eq!(clock.advance(4500.0), 0.5);
    }

    #[test]
    fn optional_cap_limits_deltas() {
        let mut clock = FrameClock::new(Some(2.0));
        clock.advance(1000.0);
        assert_eq!(clock.advance(11_000.0), 2.0);
        assert_eq!(clock.advance(11_500.0), 0.5);
    }
}
