use web_time::{Duration, Instant};

/// Rate limiter between the joystick and the ring.
///
/// Non-zero velocities are accepted at most once per interval. Zero always
/// passes and does not open a new interval, so the ring never keeps spinning
/// on a stale velocity.
#[derive(Debug, Clone)]
pub struct UpdateThrottle {
    min_interval: Duration,
    last_accepted: Option<Instant>,
}

impl UpdateThrottle {
    /// Throttle with the given minimum spacing.
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: None,
        }
    }

    /// Decide whether `velocity` arriving at `now` should be forwarded.
    pub fn accept(&mut self, velocity: f32, now: Instant) -> bool {
        if velocity == 0.0 {
            return true;
        }
        let due = self.last_accepted.is_none_or(|last| {
            now.saturating_duration_since(last) > self.min_interval
        });
        if due {
            self.last_accepted = Some(now);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_updates_inside_interval() {
        let mut throttle = UpdateThrottle::new(Duration::from_millis(8));
        let t0 = Instant::now();
        assert!(throttle.accept(0.004, t0));
        assert!(!throttle.accept(0.005, t0 + Duration::from_millis(3)));
        assert!(!throttle.accept(0.005, t0 + Duration::from_millis(8)));
        assert!(throttle.accept(0.006, t0 + Duration::from_millis(9)));
    }

    #[test]
    fn zero_always_passes() {
        let mut throttle = UpdateThrottle::new(Duration::from_millis(8));
        let t0 = Instant::now();
        assert!(throttle.accept(0.004, t0));
        assert!(throttle.accept(0.0, t0 + Duration::from_millis(1)));
    }

    #[test]
    fn zero_does_not_hold_back_the_next_update() {
        let mut throttle = UpdateThrottle::new(Duration::from_millis(8));
        let t0 = Instant::now();
        assert!(throttle.accept(0.0, t0));
        assert!(throttle.accept(0.008, t0));
    }
}
