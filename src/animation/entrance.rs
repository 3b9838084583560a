//! Staggered card entrances and the tier cross-fade.

use super::easing::Easing;
use crate::layout::DeviceTier;

/// Visual state of one card at a point in its entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceSample {
    /// Opacity in [0, 1].
    pub opacity: f32,
    /// Scale multiplier (may briefly exceed 1 for spring entrances).
    pub scale: f32,
    /// Downward offset in CSS pixels still to be travelled.
    pub offset_y: f32,
}

impl EntranceSample {
    const HIDDEN: Self = Self {
        opacity: 0.0,
        scale: 0.0,
        offset_y: 0.0,
    };
}

/// How a card arrives on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntranceStyle {
    /// Fade in while scaling up from nothing on a spring curve.
    Grow,
    /// Fade in while rising by `distance` pixels.
    Rise {
        /// Starting downward offset in CSS pixels.
        distance: f32,
    },
}

/// Entrance timing for one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    /// Seconds before the card starts appearing.
    pub delay: f32,
    /// Seconds the entrance takes once started.
    pub duration: f32,
    /// Motion style.
    pub style: EntranceStyle,
}

impl Entrance {
    /// Entrance used by the card at `index` on the given tier.
    #[must_use]
    pub fn for_card(tier: DeviceTier, index: usize) -> Self {
        let i = index as f32;
        match tier {
            DeviceTier::Tablet => Self {
                delay: i * 0.03,
                duration: 0.3,
                style: EntranceStyle::Rise { distance: 20.0 },
            },
            DeviceTier::Mobile
            | DeviceTier::Laptop
            | DeviceTier::SmallDesktop
            | DeviceTier::Desktop => Self {
                delay: i * 0.05,
                duration: 0.4,
                style: EntranceStyle::Grow,
            },
        }
    }

    /// Sample the entrance `elapsed` seconds after the layout appeared.
    #[must_use]
    pub fn sample(&self, elapsed: f32) -> EntranceSample {
        let local = elapsed - self.delay;
        if local < 0.0 {
            return EntranceSample::HIDDEN;
        }
        let t = if self.duration > 0.0 {
            local / self.duration
        } else {
            1.0
        };
        match self.style {
            EntranceStyle::Grow => EntranceSample {
                opacity: Easing::DEFAULT.evaluate(t),
                scale: Easing::SPRING.evaluate(t),
                offset_y: 0.0,
            },
            EntranceStyle::Rise { distance } => {
                let eased = Easing::QuadraticOut.evaluate(t);
                EntranceSample {
                    opacity: eased,
                    scale: 1.0,
                    offset_y: distance * (1.0 - eased),
                }
            }
        }
    }

    /// Whether the entrance has fully played out at `elapsed`.
    #[must_use]
    pub fn is_settled(&self, elapsed: f32) -> bool {
        elapsed >= self.delay + self.duration
    }
}

/// Linear fade-in of a freshly mounted layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    duration: f32,
}

impl Fade {
    /// Fade lasting `duration` seconds.
    #[must_use]
    pub fn new(duration: f32) -> Self {
        Self { duration }
    }

    /// Opacity `elapsed` seconds into the fade.
    #[must_use]
    pub fn opacity(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        Easing::Linear.evaluate(elapsed / self.duration)
    }
}
