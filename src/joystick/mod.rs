//! Bounded circular joystick that turns drags into angular velocity.
//!
//! The joystick owns the only mutable copy of the manual velocity. Consumers
//! receive it by value each time it changes, either from a drag update or from
//! a coast step after release.

/// Momentum-preserving drag controller.
pub mod controller;
/// Circular clamping and deflection helpers.
pub mod geometry;

pub use controller::JoystickController;
pub use geometry::constrain_to_circle;
