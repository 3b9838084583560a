use glam::Vec2;

/// Platform-agnostic pointer events.
///
/// Mouse and touch collapse into the same stream: touch hosts report the
/// first touch point as the pointer position. These are fed into an
/// [`InputProcessor`](super::InputProcessor) which converts them into
/// [`InputCommand`](super::InputCommand) values.
///
/// # Example
///
/// ```ignore
/// let cmd = input_processor.handle_event(
///     InputEvent::PointerMoved { x: 100.0, y: 200.0 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed or a touch started.
    PointerDown {
        /// Horizontal position in CSS pixels.
        x: f32,
        /// Vertical position in CSS pixels.
        y: f32,
    },
    /// Pointer (or first touch) moved to an absolute position.
    PointerMoved {
        /// Horizontal position in CSS pixels.
        x: f32,
        /// Vertical position in CSS pixels.
        y: f32,
    },
    /// Primary button released or the touch ended.
    PointerUp,
    /// Pointer left the joystick element or the viewport.
    PointerLeave,
}

/// Bounding box of the joystick element, in the same space as pointer events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl ControlRect {
    /// Rectangle from its edges and size.
    #[must_use]
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Joystick pinned to the bottom-right corner of a viewport, the way the
    /// phone layout draws it.
    #[must_use]
    pub fn bottom_right(viewport: Vec2, size: f32, margin: f32) -> Self {
        Self::new(
            viewport.x - margin - size,
            viewport.y - margin - size,
            size,
            size,
        )
    }

    /// Centre point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }

    /// Whether `point` lies inside the rectangle (edges included).
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.left + self.width
            && point.y >= self.top
            && point.y <= self.top + self.height
    }

    /// Offset of `point` from the centre.
    #[must_use]
    pub fn offset_of(&self, point: Vec2) -> Vec2 {
        point - self.center()
    }
}
