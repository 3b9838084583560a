//! Consumer side of the joystick: turns velocity into a ring angle.
//!
//! On touch layouts the angle follows the joystick while its velocity is
//! non-negligible and otherwise drifts forward at a slow idle rate. The idle
//! accumulator shadows the manual angle the whole time manual input is
//! active, so the hand-off back to idle drift starts exactly where the user
//! left the ring. Desktop layouts ignore the joystick and run a turntable.

mod throttle;

pub use throttle::UpdateThrottle;

use crate::layout::RotationMode;
use crate::options::RotationOptions;

/// Rotation of the skill ring about its vertical axis.
#[derive(Debug, Clone)]
pub struct RingRotation {
    mode: RotationMode,
    options: RotationOptions,
    /// Angle applied to the scene, in radians. Unbounded.
    angle: f32,
    /// Idle drift accumulator, kept equal to `angle` during manual control.
    auto_angle: f32,
    /// Latest velocity received from the joystick.
    manual_velocity: f32,
    /// Seconds since the turntable started.
    elapsed: f32,
}

impl RingRotation {
    /// Create a rotation at angle zero.
    #[must_use]
    pub fn new(mode: RotationMode, options: RotationOptions) -> Self {
        Self {
            mode,
            options,
            angle: 0.0,
            auto_angle: 0.0,
            manual_velocity: 0.0,
            elapsed: 0.0,
        }
    }

    /// Current angle in radians.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Active mode.
    #[must_use]
    pub fn mode(&self) -> RotationMode {
        self.mode
    }

    /// Latest joystick velocity.
    #[must_use]
    pub fn manual_velocity(&self) -> f32 {
        self.manual_velocity
    }

    /// Whether the joystick currently drives the angle.
    #[must_use]
    pub fn is_manual(&self) -> bool {
        self.mode == RotationMode::Manual
            && self.manual_velocity.abs() > self.options.idle_threshold
    }

    /// Switch mode, keeping the current angle so nothing jumps.
    pub fn set_mode(&mut self, mode: RotationMode) {
        if mode == self.mode {
            return;
        }
        if mode == RotationMode::Turntable {
            let speed = self.options.turntable_speed;
            self.elapsed = if speed > 0.0 { self.angle / speed } else { 0.0 };
        }
        self.auto_angle = self.angle;
        self.manual_velocity = 0.0;
        self.mode = mode;
    }

    /// Receive a velocity emitted by the joystick.
    pub fn set_manual_velocity(&mut self, velocity: f32) {
        self.manual_velocity = velocity;
    }

    /// Advance one rendered frame of `dt` seconds and return the new angle.
    pub fn tick(&mut self, dt: f32) -> f32 {
        match self.mode {
            RotationMode::Manual => {
                if self.is_manual() {
                    self.angle +=
                        self.manual_velocity * self.options.manual_multiplier;
                    self.auto_angle = self.angle;
                } else {
                    self.auto_angle += dt * self.options.auto_rotate_speed;
                    self.angle = self.auto_angle;
                }
            }
            RotationMode::Turntable => {
                self.elapsed += dt;
                self.angle = self.elapsed * self.options.turntable_speed;
            }
            RotationMode::Static => {}
        }
        self.angle
    }
}
