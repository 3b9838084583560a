use glam::Vec2;

use super::geometry::{constrain_to_circle, horizontal_deflection};
use crate::animation::frame::{FrameScheduler, FrameToken};
use crate::options::JoystickOptions;

/// Drag-to-spin joystick with momentum.
///
/// While dragged, the horizontal deflection of the knob maps linearly to an
/// angular velocity. On release the velocity coasts down geometrically while
/// the knob springs back to centre at its own, faster rate. The coast runs as
/// a self-rescheduling next-frame request on a [`FrameScheduler`]; the owner
/// routes due tokens back through [`on_frame`](Self::on_frame).
///
/// Invariants: the knob never leaves the travel radius, and
/// `|velocity| <= sensitivity`.
#[derive(Debug, Clone)]
pub struct JoystickController {
    options: JoystickOptions,
    velocity: f32,
    knob: Vec2,
    dragging: bool,
    decay_frame: Option<FrameToken>,
}

impl JoystickController {
    /// Create a centred, idle joystick.
    #[must_use]
    pub fn new(options: JoystickOptions) -> Self {
        Self {
            options,
            velocity: 0.0,
            knob: Vec2::ZERO,
            dragging: false,
            decay_frame: None,
        }
    }

    /// Current angular velocity.
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Knob offset from the control centre, in CSS pixels.
    #[must_use]
    pub fn knob(&self) -> Vec2 {
        self.knob
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether a post-release coast is still scheduled.
    #[must_use]
    pub fn is_coasting(&self) -> bool {
        self.decay_frame.is_some()
    }

    /// Largest velocity magnitude the joystick can produce.
    #[must_use]
    pub fn max_velocity(&self) -> f32 {
        self.options.sensitivity.abs()
    }

    /// Parameters in use.
    #[must_use]
    pub fn options(&self) -> &JoystickOptions {
        &self.options
    }

    /// Drag started: stop any coast and zero the velocity.
    pub fn begin(&mut self, frames: &mut FrameScheduler) {
        self.cancel_decay(frames);
        self.dragging = true;
        self.velocity = 0.0;
    }

    /// Drag moved to `offset` from the control centre.
    ///
    /// Returns the new velocity, to be forwarded to the rotation consumer
    /// right away, or `None` when no drag is active.
    pub fn update(&mut self, offset: Vec2) -> Option<f32> {
        if !self.dragging {
            return None;
        }
        let radius = self.options.radius;
        self.knob = constrain_to_circle(offset, radius);
        self.velocity =
            horizontal_deflection(self.knob, radius) * self.options.sensitivity;
        Some(self.velocity)
    }

    /// Drag ended: start coasting on the next frame.
    pub fn end(&mut self, frames: &mut FrameScheduler) {
        self.dragging = false;
        self.cancel_decay(frames);
        self.decay_frame = Some(frames.request());
    }

    /// Run one coast step if `token` is ours.
    ///
    /// Returns the velocity to emit for this frame, if any. The step that
    /// finishes the coast sets the velocity to exactly zero and emits it.
    pub fn on_frame(
        &mut self,
        token: FrameToken,
        frames: &mut FrameScheduler,
    ) -> Option<f32> {
        if self.decay_frame != Some(token) {
            return None;
        }
        self.decay_frame = None;

        self.velocity *= self.options.velocity_decay;
        self.knob *= self.options.knob_decay;

        let knob_limit = self.options.knob_threshold;
        let still_moving = self.velocity.abs() > self.options.velocity_threshold
            || self.knob.x.abs() > knob_limit
            || self.knob.y.abs() > knob_limit;

        if still_moving {
            self.decay_frame = Some(frames.request());
            return (self.velocity != 0.0).then_some(self.velocity);
        }

        self.velocity = 0.0;
        self.knob = Vec2::ZERO;
        log::debug!("joystick coast finished");
        Some(0.0)
    }

    /// Cancel any pending coast and return to rest: centred knob, zero
    /// velocity. Call before dropping the owner or hiding the control.
    pub fn teardown(&mut self, frames: &mut FrameScheduler) {
        self.cancel_decay(frames);
        self.dragging = false;
        self.velocity = 0.0;
        self.knob = Vec2::ZERO;
    }

    fn cancel_decay(&mut self, frames: &mut FrameScheduler) {
        if let Some(token) = self.decay_frame.take() {
            let _ = frames.cancel(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joystick() -> (JoystickController, FrameScheduler) {
        (
            JoystickController::new(JoystickOptions::default()),
            FrameScheduler::new(),
        )
    }

    /// Pump frames until the coast stops, collecting emitted velocities.
    fn run_coast(
        stick: &mut JoystickController,
        frames: &mut FrameScheduler,
    ) -> Vec<f32> {
        let mut emitted = Vec::new();
        for _ in 0..10_000 {
            let due = frames.begin_frame();
            if due.is_empty() {
                break;
            }
            for token in due {
                if let Some(v) = stick.on_frame(token, frames) {
                    emitted.push(v);
                }
            }
        }
        emitted
    }

    #[test]
    fn full_right_is_max_velocity() {
        let (mut stick, mut frames) = joystick();
        stick.begin(&mut frames);
        let v = stick.update(Vec2::new(40.0, 0.0)).unwrap();
        assert_eq!(stick.knob(), Vec2::new(28.0, 0.0));
        assert!((v - 0.008).abs() < 1e-9);
        assert_eq!(v, stick.max_velocity());
    }

    #[test]
    fn vertical_drag_does_not_rotate() {
        let (mut stick, mut frames) = joystick();
        stick.begin(&mut frames);
        let v = stick.update(Vec2::new(0.0, 40.0)).unwrap();
        assert_eq!(stick.knob(), Vec2::new(0.0, 28.0));
        assert_eq!(v, 0.0);
    }

    #[test]
    fn velocity_bounded_by_sensitivity() {
        let (mut stick, mut frames) = joystick();
        stick.begin(&mut frames);
        for offset in [
            Vec2::new(-500.0, 3.0),
            Vec2::new(27.9, -27.9),
            Vec2::new(1e6, 1e6),
        ] {
            let v = stick.update(offset).unwrap();
            assert!(v.abs() <= stick.max_velocity() + 1e-9);
            assert!(stick.knob().length() <= 28.0 + 1e-3);
        }
    }

    #[test]
    fn update_without_drag_is_ignored() {
        let (mut stick, _) = joystick();
        assert_eq!(stick.update(Vec2::new(10.0, 0.0)), None);
        assert_eq!(stick.knob(), Vec2::ZERO);
    }

    #[test]
    fn coast_decays_geometrically_and_ends_at_zero() {
        let (mut stick, mut frames) = joystick();
        stick.begin(&mut frames);
        let _ = stick.update(Vec2::new(40.0, 0.0));
        stick.end(&mut frames);

        let emitted = run_coast(&mut stick, &mut frames);
        let (last, coast) = emitted.split_last().unwrap();
        assert_eq!(*last, 0.0);
        assert!(!coast.is_empty());

        for (k, v) in coast.iter().enumerate() {
            let expected = 0.008 * 0.98f32.powi(k as i32 + 1);
            assert!(
                (v - expected).abs() <= expected * 1e-4,
                "step {k}: {v} vs {expected}"
            );
        }
        for pair in coast.windows(2) {
            assert!(pair[1].abs() < pair[0].abs());
            assert!(pair[1] > 0.0);
        }
        assert!(coast.last().unwrap() * 0.98 <= 0.0005 + 1e-9);
        assert_eq!(stick.velocity(), 0.0);
        assert_eq!(stick.knob(), Vec2::ZERO);
        assert!(!stick.is_coasting());
        assert_eq!(frames.pending_len(), 0);
    }

    #[test]
    fn leftward_coast_never_changes_sign() {
        let (mut stick, mut frames) = joystick();
        stick.begin(&mut frames);
        let _ = stick.update(Vec2::new(-14.0, 6.0));
        stick.end(&mut frames);

        let emitted = run_coast(&mut stick, &mut frames);
        let (last, coast) = emitted.split_last().unwrap();
        assert_eq!(*last, 0.0);
        assert!(coast.iter().all(|v| *v < 0.0));
    }

    #[test]
    fn knob_keeps_coast_alive_after_vertical_drag() {
        let (mut stick, mut frames) = joystick();
        stick.begin(&mut frames);
        let _ = stick.update(Vec2::new(0.0, 28.0));
        stick.end(&mut frames);

        let emitted = run_coast(&mut stick, &mut frames);
        // Zero velocity is only announced once, when the knob settles.
        assert_eq!(emitted, vec![0.0]);
        assert_eq!(stick.knob(), Vec2::ZERO);
    }

    #[test]
    fn begin_during_coast_resets_and_cancels() {
        let (mut stick, mut frames) = joystick();
        stick.begin(&mut frames);
        let _ = stick.update(Vec2::new(28.0, 0.0));
        stick.end(&mut frames);
        for token in frames.begin_frame() {
            let _ = stick.on_frame(token, &mut frames);
        }
        assert!(stick.is_coasting());

        stick.begin(&mut frames);
        assert_eq!(stick.velocity(), 0.0);
        assert!(!stick.is_coasting());
        assert_eq!(frames.pending_len(), 0);
        assert!(run_coast(&mut stick, &mut frames).is_empty());
    }

    #[test]
    fn stale_token_is_ignored() {
        let (mut stick, mut frames) = joystick();
        stick.begin(&mut frames);
        let _ = stick.update(Vec2::new(28.0, 0.0));
        stick.end(&mut frames);
        let stale = frames.begin_frame()[0];
        let _ = stick.on_frame(stale, &mut frames);
        let v = stick.velocity();

        assert_eq!(stick.on_frame(stale, &mut frames), None);
        assert_eq!(stick.velocity(), v);
    }

    #[test]
    fn double_end_runs_one_coast() {
        let (mut stick, mut frames) = joystick();
        stick.begin(&mut frames);
        let _ = stick.update(Vec2::new(28.0, 0.0));
        stick.end(&mut frames);
        stick.end(&mut frames);
        assert_eq!(frames.pending_len(), 1);
    }

    #[test]
    fn teardown_cancels_pending_coast() {
        let (mut stick, mut frames) = joystick();
        stick.begin(&mut frames);
        let _ = stick.update(Vec2::new(28.0, 0.0));
        stick.end(&mut frames);
        stick.teardown(&mut frames);
        assert_eq!(frames.pending_len(), 0);
        assert!(!stick.is_coasting());
    }

    #[test]
    fn teardown_mid_drag_returns_to_rest() {
        let (mut stick, mut frames) = joystick();
        stick.begin(&mut frames);
        let _ = stick.update(Vec2::new(40.0, 0.0));
        stick.teardown(&mut frames);
        assert!(!stick.is_dragging());
        assert_eq!(stick.velocity(), 0.0);
        assert_eq!(stick.knob(), Vec2::ZERO);
        assert_eq!(stick.update(Vec2::new(10.0, 0.0)), None);
    }
}
