use web_time::{Duration, Instant};

use super::DeviceTier;
use crate::options::Breakpoints;

/// Collapses a burst of resize events into one tier re-evaluation.
///
/// Each [`resize`](Self::resize) restarts the quiet period; once it elapses,
/// [`poll`](Self::poll) classifies the latest width and reports the tier if it
/// differs from the committed one.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    quiet_period: Duration,
    breakpoints: Breakpoints,
    committed: DeviceTier,
    pending: Option<(f32, Instant)>,
}

impl ResizeDebouncer {
    /// Start with an already-classified tier.
    #[must_use]
    pub fn new(
        initial: DeviceTier,
        quiet_period: Duration,
        breakpoints: Breakpoints,
    ) -> Self {
        Self {
            quiet_period,
            breakpoints,
            committed: initial,
            pending: None,
        }
    }

    /// Tier currently in effect.
    #[must_use]
    pub fn tier(&self) -> DeviceTier {
        self.committed
    }

    /// Record a resize to `width` at `now`.
    pub fn resize(&mut self, width: f32, now: Instant) {
        self.pending = Some((width, now));
    }

    /// Commit the pending width if the quiet period has elapsed.
    ///
    /// Returns the new tier only when it changed.
    pub fn poll(&mut self, now: Instant) -> Option<DeviceTier> {
        let (width, at) = self.pending?;
        if now.saturating_duration_since(at) < self.quiet_period {
            return None;
        }
        self.pending = None;

        let tier = DeviceTier::from_width(width, &self.breakpoints);
        if tier == self.committed {
            return None;
        }
        log::debug!("device tier {:?} -> {:?} at {width}px", self.committed, tier);
        self.committed = tier;
        Some(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debouncer() -> ResizeDebouncer {
        ResizeDebouncer::new(
            DeviceTier::Desktop,
            Duration::from_millis(150),
            Breakpoints::default(),
        )
    }

    #[test]
    fn waits_for_quiet_period() {
        let mut d = debouncer();
        let t0 = Instant::now();
        d.resize(400.0, t0);
        assert_eq!(d.poll(t0 + Duration::from_millis(100)), None);
        assert_eq!(
            d.poll(t0 + Duration::from_millis(150)),
            Some(DeviceTier::Mobile)
        );
        assert_eq!(d.tier(), DeviceTier::Mobile);
        assert_eq!(d.poll(t0 + Duration::from_millis(500)), None);
    }

    #[test]
    fn burst_restarts_the_timer_and_uses_last_width() {
        let mut d = debouncer();
        let t0 = Instant::now();
        d.resize(400.0, t0);
        d.resize(800.0, t0 + Duration::from_millis(120));
        assert_eq!(d.poll(t0 + Duration::from_millis(200)), None);
        assert_eq!(
            d.poll(t0 + Duration::from_millis(270)),
            Some(DeviceTier::Tablet)
        );
    }

    #[test]
    fn same_tier_is_not_reported() {
        let mut d = debouncer();
        let t0 = Instant::now();
        d.resize(1600.0, t0);
        assert_eq!(d.poll(t0 + Duration::from_secs(1)), None);
        assert_eq!(d.tier(), DeviceTier::Desktop);
    }
}
