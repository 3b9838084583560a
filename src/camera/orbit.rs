use std::f32::consts::{PI, TAU};

use glam::{Quat, Vec2, Vec3};

use super::core::Camera;
use crate::options::OrbitOptions;

/// Keeps the camera off the poles, where the up vector degenerates.
const POLAR_MARGIN: f32 = 1e-3;

/// Drag-to-orbit camera around the ring centre.
///
/// The eye sits on a sphere of fixed `distance` around `target`, addressed by
/// an azimuth around +Y and a polar angle from +Y. At azimuth 0 and polar
/// π/2 the eye is on +Z, which is where [`Camera::for_layout`] puts it.
/// Zoom and pan are not offered.
#[derive(Debug, Clone)]
pub struct OrbitController {
    azimuth: f32,
    polar: f32,
    distance: f32,
    target: Vec3,
    rotate_speed: f32,
    auto_rotate_speed: f32,
    dragging: bool,
}

impl OrbitController {
    /// Orbit starting from `camera`'s current eye.
    #[must_use]
    pub fn from_camera(camera: &Camera, options: &OrbitOptions) -> Self {
        let offset = camera.eye - camera.target;
        let distance = offset.length();
        let (azimuth, polar) = if distance > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / distance).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, PI / 2.0)
        };
        Self {
            azimuth,
            polar,
            distance,
            target: camera.target,
            rotate_speed: options.rotate_speed,
            auto_rotate_speed: options.auto_rotate_speed,
            dragging: false,
        }
    }

    /// Angle around +Y in radians.
    #[must_use]
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Angle from +Y in radians.
    #[must_use]
    pub fn polar(&self) -> f32 {
        self.polar
    }

    /// Whether a drag is orbiting the camera.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Drag started; auto-orbit pauses until it ends.
    pub fn begin(&mut self) {
        self.dragging = true;
    }

    /// Drag ended.
    pub fn end(&mut self) {
        self.dragging = false;
    }

    /// Orbit by a pointer delta in CSS pixels.
    ///
    /// Both axes are scaled by the viewport height so the feel does not
    /// depend on aspect ratio. Dragging right swings the camera left around
    /// the ring; dragging down raises it.
    pub fn rotate(&mut self, delta: Vec2, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let scale = TAU * self.rotate_speed / viewport_height;
        self.azimuth -= delta.x * scale;
        self.polar = (self.polar - delta.y * scale)
            .clamp(POLAR_MARGIN, PI - POLAR_MARGIN);
    }

    /// Advance auto-orbit by `dt` seconds unless a drag holds the camera.
    pub fn tick(&mut self, dt: f32) {
        if !self.dragging {
            self.azimuth -= TAU / 60.0 * self.auto_rotate_speed * dt;
        }
    }

    /// Move `camera` to the current orbit position.
    pub fn apply(&self, camera: &mut Camera) {
        let orientation = Quat::from_rotation_y(self.azimuth)
            * Quat::from_rotation_x(self.polar - PI / 2.0);
        camera.eye = self.target + orientation * Vec3::Z * self.distance;
        camera.target = self.target;
        camera.up = Vec3::Y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{DeviceTier, TierLayout};

    fn orbit() -> (OrbitController, Camera) {
        let layout = TierLayout::for_tier(DeviceTier::Desktop);
        let camera = Camera::for_layout(&layout, Vec2::new(1600.0, 384.0));
        (
            OrbitController::from_camera(&camera, &OrbitOptions::default()),
            camera,
        )
    }

    #[test]
    fn starts_where_the_camera_is() {
        let (orbit, mut camera) = orbit();
        let before = camera.eye;
        orbit.apply(&mut camera);
        assert!((camera.eye - before).length() < 1e-4);
    }

    #[test]
    fn horizontal_drag_keeps_distance() {
        let (mut orbit, mut camera) = orbit();
        orbit.rotate(Vec2::new(96.0, 0.0), 384.0);
        orbit.apply(&mut camera);
        assert!((camera.eye.length() - 14.0).abs() < 1e-3);
        assert!(camera.eye.y.abs() < 1e-4);
        // A quarter viewport height at 0.4 speed is a tenth of a turn.
        assert!((orbit.azimuth() + 0.1 * TAU).abs() < 1e-4);
        assert!(camera.eye.x < 0.0);
    }

    #[test]
    fn vertical_drag_is_clamped_at_the_poles() {
        let (mut orbit, mut camera) = orbit();
        orbit.rotate(Vec2::new(0.0, 10_000.0), 384.0);
        assert!((orbit.polar() - POLAR_MARGIN).abs() < 1e-6);
        orbit.apply(&mut camera);
        assert!(camera.eye.y > 13.9);
        orbit.rotate(Vec2::new(0.0, -20_000.0), 384.0);
        assert!((orbit.polar() - (PI - POLAR_MARGIN)).abs() < 1e-6);
    }

    #[test]
    fn auto_orbit_pauses_while_dragging() {
        let (mut orbit, _) = orbit();
        orbit.tick(10.0);
        let turned = orbit.azimuth();
        assert!((turned + TAU / 60.0 * 0.3 * 10.0).abs() < 1e-4);

        orbit.begin();
        orbit.tick(10.0);
        assert_eq!(orbit.azimuth(), turned);
        orbit.end();
        orbit.tick(1.0);
        assert!(orbit.azimuth() < turned);
    }

    #[test]
    fn zero_height_viewport_ignores_drag() {
        let (mut orbit, _) = orbit();
        orbit.rotate(Vec2::new(50.0, 50.0), 0.0);
        assert_eq!(orbit.azimuth(), 0.0);
    }
}
