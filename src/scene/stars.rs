use std::f32::consts::TAU;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::options::StarFieldParams;

/// One background star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// World-space position.
    pub position: Vec3,
    /// Point size.
    pub size: f32,
}

/// Random shell of stars around the ring.
///
/// Stars are spread uniformly over directions; their radius walks inward from
/// `radius + depth` in small random steps, so the shell is denser near its
/// outer edge. The same seed always yields the same sky.
#[derive(Debug, Clone, PartialEq)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    /// Generate a field from shape parameters and a seed.
    #[must_use]
    pub fn generate(params: &StarFieldParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let count = params.count as usize;
        let step = if count > 0 {
            params.depth / count as f32
        } else {
            0.0
        };

        let mut r = params.radius + params.depth;
        let stars = (0..count)
            .map(|_| {
                r -= step * rng.random::<f32>();
                let polar = (1.0 - rng.random::<f32>() * 2.0).acos();
                let azimuth = rng.random::<f32>() * TAU;
                let position = Vec3::new(
                    r * polar.sin() * azimuth.sin(),
                    r * polar.cos(),
                    r * polar.sin() * azimuth.cos(),
                );
                Star {
                    position,
                    size: (0.5 + 0.5 * rng.random::<f32>()) * params.factor,
                }
            })
            .collect();
        Self { stars }
    }

    /// All stars.
    #[must_use]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Number of stars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Whether the field has no stars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
