//! Converts raw pointer events into scene commands.
//!
//! The `InputProcessor` owns all transient input state (which gesture is in
//! progress, where the joystick sits on screen). It is the only thing that
//! sits between raw host events and
//! [`SkillScene::apply`](crate::scene::SkillScene::apply).

use glam::Vec2;

use super::event::{ControlRect, InputEvent};

/// What a pointer event means for the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputCommand {
    /// A drag started on the joystick.
    BeginDrag,
    /// The joystick drag moved; `offset` is relative to the control centre.
    Drag {
        /// Unclamped centre-relative offset in CSS pixels.
        offset: Vec2,
    },
    /// The joystick drag ended.
    EndDrag,
    /// A drag started on the scene itself and will orbit the camera.
    BeginOrbit,
    /// The orbit drag moved.
    Orbit {
        /// Pointer movement since the previous event, in CSS pixels.
        delta: Vec2,
    },
    /// The orbit drag ended.
    EndOrbit,
    /// The pointer hovers the viewport outside any drag.
    Hover {
        /// Pointer position in CSS pixels.
        position: Vec2,
    },
    /// The pointer left the viewport.
    HoverExit,
}

/// Gesture the pointer is currently driving.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum Gesture {
    #[default]
    Idle,
    Joystick,
    Orbit {
        last: Vec2,
    },
}

/// Converts raw pointer events into [`InputCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the host event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     scene.apply(cmd);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Where the joystick is drawn; `None` when the layout has none.
    control: Option<ControlRect>,
    /// Whether presses outside the joystick orbit the camera.
    orbit: bool,
    gesture: Gesture,
}

impl InputProcessor {
    /// Create a processor with no joystick placed and orbiting off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place (or remove) the joystick.
    ///
    /// Removing it mid-drag ends the drag.
    pub fn set_control(
        &mut self,
        control: Option<ControlRect>,
    ) -> Option<InputCommand> {
        self.control = control;
        if self.control.is_none() && self.gesture == Gesture::Joystick {
            self.gesture = Gesture::Idle;
            return Some(InputCommand::EndDrag);
        }
        None
    }

    /// Turn drag-to-orbit on or off.
    ///
    /// Turning it off mid-orbit ends the orbit.
    pub fn set_orbit(&mut self, enabled: bool) -> Option<InputCommand> {
        self.orbit = enabled;
        if !enabled && self.is_orbiting() {
            self.gesture = Gesture::Idle;
            return Some(InputCommand::EndOrbit);
        }
        None
    }

    /// Current joystick rectangle.
    #[must_use]
    pub fn control(&self) -> Option<ControlRect> {
        self.control
    }

    /// Whether a joystick drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture == Gesture::Joystick
    }

    /// Whether an orbit drag is in progress.
    #[must_use]
    pub fn is_orbiting(&self) -> bool {
        matches!(self.gesture, Gesture::Orbit { .. })
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<InputCommand> {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.handle_pointer_down(Vec2::new(x, y))
            }
            InputEvent::PointerMoved { x, y } => {
                Some(self.handle_pointer_moved(Vec2::new(x, y)))
            }
            InputEvent::PointerUp => self.finish_gesture(),
            InputEvent::PointerLeave => {
                Some(self.finish_gesture().unwrap_or(InputCommand::HoverExit))
            }
        }
    }

    fn handle_pointer_down(&mut self, point: Vec2) -> Option<InputCommand> {
        if self.gesture != Gesture::Idle {
            return None;
        }
        if self.control.is_some_and(|control| control.contains(point)) {
            self.gesture = Gesture::Joystick;
            return Some(InputCommand::BeginDrag);
        }
        if self.orbit {
            self.gesture = Gesture::Orbit { last: point };
            return Some(InputCommand::BeginOrbit);
        }
        None
    }

    fn handle_pointer_moved(&mut self, point: Vec2) -> InputCommand {
        match (self.gesture, self.control) {
            (Gesture::Joystick, Some(control)) => InputCommand::Drag {
                offset: control.offset_of(point),
            },
            (Gesture::Orbit { last }, _) => {
                self.gesture = Gesture::Orbit { last: point };
                InputCommand::Orbit {
                    delta: point - last,
                }
            }
            _ => InputCommand::Hover { position: point },
        }
    }

    fn finish_gesture(&mut self) -> Option<InputCommand> {
        let command = match self.gesture {
            Gesture::Idle => return None,
            Gesture::Joystick => InputCommand::EndDrag,
            Gesture::Orbit { .. } => InputCommand::EndOrbit,
        };
        self.gesture = Gesture::Idle;
        Some(command)
    }
}
