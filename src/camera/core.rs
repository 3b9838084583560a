use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};

use crate::layout::TierLayout;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

/// A world point mapped onto the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// Position in CSS pixels, origin top-left, y down.
    pub position: Vec2,
    /// Distance from the eye along the view direction.
    pub depth: f32,
}

impl Camera {
    /// Camera on the +Z axis looking at the origin, framed for `layout`.
    #[must_use]
    pub fn for_layout(layout: &TierLayout, viewport: Vec2) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, layout.camera_distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect_of(viewport),
            fovy: layout.fovy,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, viewport: Vec2) {
        self.aspect = aspect_of(viewport);
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Project a world point to viewport pixels.
    ///
    /// Returns `None` for points behind the eye or outside the depth range.
    #[must_use]
    pub fn project(&self, world: Vec3, viewport: Vec2) -> Option<ScreenPoint> {
        self.project_with(&self.build_matrix(), world, viewport)
    }

    /// [`project`](Self::project) with a precomputed view-projection matrix.
    #[must_use]
    pub fn project_with(
        &self,
        view_proj: &Mat4,
        world: Vec3,
        viewport: Vec2,
    ) -> Option<ScreenPoint> {
        let clip = *view_proj * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.xyz() / clip.w;
        if !(0.0..=1.0).contains(&ndc.z) {
            return None;
        }
        let position = Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.x,
            (1.0 - ndc.y) * 0.5 * viewport.y,
        );
        let forward = (self.target - self.eye).normalize_or_zero();
        Some(ScreenPoint {
            position,
            depth: (world - self.eye).dot(forward),
        })
    }
}

fn aspect_of(viewport: Vec2) -> f32 {
    if viewport.y > 0.0 {
        viewport.x / viewport.y
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::DeviceTier;

    fn desktop_camera() -> (Camera, Vec2) {
        let viewport = Vec2::new(1600.0, 900.0);
        let layout = TierLayout::for_tier(DeviceTier::Desktop);
        (Camera::for_layout(&layout, viewport), viewport)
    }

    #[test]
    fn origin_projects_to_viewport_centre() {
        let (camera, viewport) = desktop_camera();
        let p = camera.project(Vec3::ZERO, viewport).unwrap();
        assert!((p.position - viewport * 0.5).length() < 1e-3);
        assert!((p.depth - 14.0).abs() < 1e-4);
    }

    #[test]
    fn screen_axes_point_right_and_down() {
        let (camera, viewport) = desktop_camera();
        let right = camera.project(Vec3::X, viewport).unwrap();
        let up = camera.project(Vec3::Y, viewport).unwrap();
        assert!(right.position.x > viewport.x * 0.5);
        assert!(up.position.y < viewport.y * 0.5);
    }

    #[test]
    fn nearer_points_have_smaller_depth() {
        let (camera, viewport) = desktop_camera();
        let front = camera.project(Vec3::new(0.0, 0.0, 8.0), viewport).unwrap();
        let back = camera.project(Vec3::new(0.0, 0.0, -8.0), viewport).unwrap();
        assert!(front.depth < back.depth);
    }

    #[test]
    fn points_behind_eye_are_culled() {
        let (camera, viewport) = desktop_camera();
        assert!(camera.project(Vec3::new(0.0, 0.0, 20.0), viewport).is_none());
    }

    #[test]
    fn zero_height_viewport_does_not_divide_by_zero() {
        let layout = TierLayout::for_tier(DeviceTier::Mobile);
        let camera = Camera::for_layout(&layout, Vec2::new(300.0, 0.0));
        assert_eq!(camera.aspect, 1.0);
    }
}
