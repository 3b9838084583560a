//! Input handling: pointer event types and the processor that converts raw
//! host events into scene commands.

/// Platform-agnostic pointer events and the joystick hit box.
pub mod event;
/// Converts raw events into scene commands.
pub mod processor;

pub use event::{ControlRect, InputEvent};
pub use processor::{InputCommand, InputProcessor};
