use glam::Vec2;

use crate::layout::DeviceTier;

/// Scale applied to a hovered card.
pub const HOVER_SCALE: f32 = 1.1;

/// Upward nudge of a hovered card, in CSS pixels.
pub const HOVER_LIFT: f32 = 3.0;

/// One skill card as it should be drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSprite {
    /// Index into the skill catalogue.
    pub index: usize,
    /// Card centre in CSS pixels.
    pub center: Vec2,
    /// Drawn card size in CSS pixels.
    pub size: Vec2,
    /// View depth (0 on the flat grid).
    pub depth: f32,
    /// Final opacity.
    pub opacity: f32,
    /// Whether the pointer hovers this card.
    pub hovered: bool,
}

impl CardSprite {
    /// Whether `point` falls on the card.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        let half = self.size * 0.5;
        (point - self.center).abs().cmple(half).all()
    }
}

/// One projected background star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSprite {
    /// Screen position in CSS pixels.
    pub position: Vec2,
    /// Point size.
    pub size: f32,
}

/// Everything a host needs to paint one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    /// Tier the frame was laid out for.
    pub tier: DeviceTier,
    /// Ring angle in radians.
    pub angle: f32,
    /// Joystick velocity currently driving the ring.
    pub velocity: f32,
    /// Knob offset from the joystick centre, when the joystick is shown.
    pub knob: Option<Vec2>,
    /// Whether the joystick is being dragged.
    pub dragging: bool,
    /// Layout-wide opacity from the tier cross-fade.
    pub opacity: f32,
    /// Cards sorted back to front.
    pub cards: Vec<CardSprite>,
}

impl SceneFrame {
    /// Topmost card under `point`.
    #[must_use]
    pub fn card_at(&self, point: Vec2) -> Option<&CardSprite> {
        topmost_at(&self.cards, point).map(|index| &self.cards[index])
    }
}

/// Position in `cards` (drawn back to front) of the topmost card under
/// `point`.
pub(crate) fn topmost_at(cards: &[CardSprite], point: Vec2) -> Option<usize> {
    cards.iter().rposition(|card| card.contains(point))
}
