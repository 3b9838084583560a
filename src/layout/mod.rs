//! Device tiers and skill-card placement.
//!
//! A viewport width picks one of five [`DeviceTier`]s. Phones and desktops
//! get a 3D ring of cards, tablets a flat grid. The ring is two stacked
//! layers of up to eight cards, each layer narrower and higher than the one
//! below, with a gentle vertical wave so the ring reads as 3D even edge-on.

mod debounce;

use std::f32::consts::TAU;

pub use debounce::ResizeDebouncer;
use glam::{Vec2, Vec3};

use crate::options::Breakpoints;

/// Cards per ring layer.
pub const CARDS_PER_LAYER: usize = 8;

/// Radius lost per stacked layer.
const LAYER_RADIUS_STEP: f32 = 2.0;

/// Height gained per stacked layer.
const LAYER_HEIGHT_STEP: f32 = 1.5;

/// Coarse screen-width class used to pick a layout variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceTier {
    /// Phones: compact ring steered by the joystick.
    Mobile,
    /// Tablets: flat grid, no 3D.
    Tablet,
    /// Laptops: tighter turntable ring.
    Laptop,
    /// Small desktops.
    SmallDesktop,
    /// Everything wider.
    Desktop,
}

impl DeviceTier {
    /// Classify a viewport width in CSS pixels.
    #[must_use]
    pub fn from_width(width: f32, breakpoints: &Breakpoints) -> Self {
        if width < breakpoints.mobile {
            Self::Mobile
        } else if width < breakpoints.tablet {
            Self::Tablet
        } else if width < breakpoints.laptop {
            Self::Laptop
        } else if width < breakpoints.small_desktop {
            Self::SmallDesktop
        } else {
            Self::Desktop
        }
    }

    /// How the ring turns on this tier.
    #[must_use]
    pub fn rotation_mode(self) -> RotationMode {
        match self {
            Self::Mobile => RotationMode::Manual,
            Self::Tablet => RotationMode::Static,
            Self::Laptop | Self::SmallDesktop | Self::Desktop => {
                RotationMode::Turntable
            }
        }
    }

    /// Whether this tier renders the 3D ring (as opposed to the flat grid).
    #[must_use]
    pub fn is_3d(self) -> bool {
        self != Self::Tablet
    }

    /// Whether the rotation joystick is shown.
    #[must_use]
    pub fn has_joystick(self) -> bool {
        self == Self::Mobile
    }

    /// Whether dragging the scene orbits the camera.
    #[must_use]
    pub fn has_orbit(self) -> bool {
        matches!(self, Self::Laptop | Self::SmallDesktop | Self::Desktop)
    }
}

/// Source of ring rotation for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationMode {
    /// Joystick velocity with momentum, idle auto-rotation otherwise.
    Manual,
    /// Constant-rate turntable driven by elapsed time.
    Turntable,
    /// No rotation.
    Static,
}

/// Geometry and camera framing for one tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierLayout {
    /// Outer ring radius in world units.
    pub radius: f32,
    /// Amplitude factor of the vertical wave.
    pub vertical_spread: f32,
    /// Scale applied to every card.
    pub orb_scale: f32,
    /// Camera distance along +Z.
    pub camera_distance: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Card footprint in CSS pixels at unit scale.
    pub card_size: Vec2,
    /// Html-overlay distance factor: cards are drawn at
    /// `distance_factor / depth` times their CSS size.
    pub distance_factor: f32,
}

impl TierLayout {
    /// Layout for the given tier.
    #[must_use]
    pub fn for_tier(tier: DeviceTier) -> Self {
        let desktop_card = Vec2::new(128.0, 144.0);
        match tier {
            DeviceTier::Mobile => Self {
                radius: 6.0,
                vertical_spread: 3.0,
                orb_scale: 0.85,
                camera_distance: 12.0,
                fovy: 70.0,
                card_size: desktop_card,
                distance_factor: 10.0,
            },
            DeviceTier::Tablet => Self {
                radius: 0.0,
                vertical_spread: 0.0,
                orb_scale: 1.0,
                camera_distance: 0.0,
                fovy: 0.0,
                card_size: Vec2::new(96.0, 104.0),
                distance_factor: 0.0,
            },
            DeviceTier::Laptop => Self {
                radius: 6.0,
                vertical_spread: 2.5,
                orb_scale: 0.8,
                camera_distance: 18.0,
                fovy: 60.0,
                card_size: desktop_card,
                distance_factor: 10.0,
            },
            DeviceTier::SmallDesktop => Self {
                radius: 7.0,
                vertical_spread: 3.0,
                orb_scale: 0.9,
                camera_distance: 16.0,
                fovy: 60.0,
                card_size: desktop_card,
                distance_factor: 10.0,
            },
            DeviceTier::Desktop => Self {
                radius: 8.0,
                vertical_spread: 4.0,
                orb_scale: 1.0,
                camera_distance: 14.0,
                fovy: 60.0,
                card_size: desktop_card,
                distance_factor: 10.0,
            },
        }
    }

    /// Unrotated ring positions for `count` cards.
    #[must_use]
    pub fn ring_positions(&self, count: usize) -> Vec<Vec3> {
        ring_positions(count, self.radius, self.vertical_spread)
    }
}

/// Place `count` cards around a stacked ring.
///
/// Card `i` sits at angle `2π·i/count` on layer `i / 8`. Each layer is two
/// units narrower and one and a half units higher than the one below.
#[must_use]
pub fn ring_positions(count: usize, radius: f32, spread: f32) -> Vec<Vec3> {
    (0..count)
        .map(|index| {
            let angle = index as f32 / count as f32 * TAU;
            let layer = (index / CARDS_PER_LAYER) as f32;
            let layer_radius = radius - layer * LAYER_RADIUS_STEP;
            Vec3::new(
                angle.cos() * layer_radius,
                (angle * 1.5).sin() * spread * 0.4 + layer * LAYER_HEIGHT_STEP,
                angle.sin() * layer_radius,
            )
        })
        .collect()
}

/// One cell of the flat tablet grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Zero-based row.
    pub row: u32,
    /// Zero-based column.
    pub column: u32,
}

/// Row-major grid cells for `count` cards in `columns` columns.
#[must_use]
pub fn grid_cells(count: usize, columns: u32) -> Vec<GridCell> {
    let columns = columns.max(1) as usize;
    (0..count)
        .map(|index| GridCell {
            row: (index / columns) as u32,
            column: (index % columns) as u32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_follow_breakpoints() {
        let bp = Breakpoints::default();
        assert_eq!(DeviceTier::from_width(375.0, &bp), DeviceTier::Mobile);
        assert_eq!(DeviceTier::from_width(639.0, &bp), DeviceTier::Mobile);
        assert_eq!(DeviceTier::from_width(640.0, &bp), DeviceTier::Tablet);
        assert_eq!(DeviceTier::from_width(1023.0, &bp), DeviceTier::Tablet);
        assert_eq!(DeviceTier::from_width(1024.0, &bp), DeviceTier::Laptop);
        assert_eq!(
            DeviceTier::from_width(1300.0, &bp),
            DeviceTier::SmallDesktop
        );
        assert_eq!(DeviceTier::from_width(1440.0, &bp), DeviceTier::Desktop);
        assert_eq!(DeviceTier::from_width(3840.0, &bp), DeviceTier::Desktop);
    }

    #[test]
    fn only_phones_get_the_joystick() {
        assert!(DeviceTier::Mobile.has_joystick());
        assert!(!DeviceTier::Desktop.has_joystick());
        assert!(DeviceTier::Laptop.has_orbit());
        assert!(DeviceTier::Desktop.has_orbit());
        assert!(!DeviceTier::Mobile.has_orbit());
        assert!(!DeviceTier::Tablet.has_orbit());
        assert_eq!(DeviceTier::Tablet.rotation_mode(), RotationMode::Static);
        assert_eq!(
            DeviceTier::Laptop.rotation_mode(),
            RotationMode::Turntable
        );
        assert!(!DeviceTier::Tablet.is_3d());
    }

    #[test]
    fn first_layer_sits_on_outer_radius() {
        let positions = ring_positions(14, 8.0, 4.0);
        assert_eq!(positions.len(), 14);
        for p in &positions[..CARDS_PER_LAYER] {
            let r = Vec2::new(p.x, p.z).length();
            assert!((r - 8.0).abs() < 1e-4);
        }
        assert!((positions[0] - Vec3::new(8.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn second_layer_is_narrower_and_higher() {
        let positions = ring_positions(14, 8.0, 0.0);
        for p in &positions[CARDS_PER_LAYER..] {
            let r = Vec2::new(p.x, p.z).length();
            assert!((r - 6.0).abs() < 1e-4);
            assert!((p.y - 1.5).abs() < 1e-5);
        }
    }

    #[test]
    fn wave_is_bounded_by_spread() {
        let positions = ring_positions(8, 6.0, 3.0);
        for p in positions {
            assert!(p.y.abs() <= 3.0 * 0.4 + 1e-5);
        }
    }

    #[test]
    fn empty_ring_is_empty() {
        assert!(ring_positions(0, 6.0, 3.0).is_empty());
    }

    #[test]
    fn grid_is_row_major() {
        let cells = grid_cells(7, 3);
        assert_eq!(cells[0], GridCell { row: 0, column: 0 });
        assert_eq!(cells[2], GridCell { row: 0, column: 2 });
        assert_eq!(cells[3], GridCell { row: 1, column: 0 });
        assert_eq!(cells[6], GridCell { row: 2, column: 0 });
        assert_eq!(grid_cells(2, 0)[1], GridCell { row: 1, column: 0 });
    }
}
