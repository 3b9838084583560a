//! Browser bindings.
//!
//! The page owns the DOM: it forwards pointer and resize events here, calls
//! [`WebSkillScene::frame`] from `requestAnimationFrame`, and paints the flat
//! buffer that comes back.

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::DomRect;

use crate::input::InputEvent;
use crate::options::Options;
use crate::scene::{SceneFrame, SkillScene};
use crate::util::frame_timing::FrameTiming;

/// Floats before the first card in a [`WebSkillScene::frame`] buffer.
pub const FRAME_HEADER_LEN: usize = 9;

/// Floats per card in a [`WebSkillScene::frame`] buffer.
pub const CARD_STRIDE: usize = 8;

/// Install the panic hook and console logger.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// [`SkillScene`] wrapped for JavaScript.
#[wasm_bindgen]
pub struct WebSkillScene {
    scene: SkillScene,
    timing: FrameTiming,
    /// Top-left of the scene container in client coordinates.
    origin: Vec2,
}

#[wasm_bindgen]
impl WebSkillScene {
    /// Create a scene for a container of `width` x `height` CSS pixels.
    ///
    /// `options_json` overrides the defaults; it may be partial.
    ///
    /// # Errors
    ///
    /// Returns the error message when the options are malformed or out of
    /// range, or the catalogue is empty.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: f32,
        height: f32,
        options_json: Option<String>,
    ) -> Result<WebSkillScene, JsValue> {
        let options = match options_json {
            Some(json) => Options::from_json_str(&json).map_err(to_js)?,
            None => Options::default(),
        };
        let scene = SkillScene::new(options, Vec2::new(width, height))
            .map_err(to_js)?;
        Ok(Self {
            scene,
            timing: FrameTiming::new(0),
            origin: Vec2::ZERO,
        })
    }

    /// Track the container's client rectangle after a resize or scroll.
    pub fn set_bounds(&mut self, rect: &DomRect) {
        self.origin = Vec2::new(rect.x() as f32, rect.y() as f32);
        self.scene
            .resize(Vec2::new(rect.width() as f32, rect.height() as f32));
    }

    /// Pointer pressed at client coordinates.
    pub fn pointer_down(&mut self, client_x: f32, client_y: f32) {
        let p = self.local(client_x, client_y);
        self.scene.handle_event(InputEvent::PointerDown { x: p.x, y: p.y });
    }

    /// Pointer moved to client coordinates.
    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        let p = self.local(client_x, client_y);
        self.scene
            .handle_event(InputEvent::PointerMoved { x: p.x, y: p.y });
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) {
        self.scene.handle_event(InputEvent::PointerUp);
    }

    /// Pointer left the container.
    pub fn pointer_leave(&mut self) {
        self.scene.handle_event(InputEvent::PointerLeave);
    }

    /// Advance one frame and return it flattened.
    ///
    /// Layout: `[tier, angle, velocity, has_knob, knob_x, knob_y, dragging,
    /// opacity, card_count]`, then per card `[index, center_x, center_y,
    /// width, height, depth, opacity, hovered]`, back to front.
    pub fn frame(&mut self) -> js_sys::Float32Array {
        let dt = self.timing.end_frame();
        let frame = self.scene.frame(dt);
        js_sys::Float32Array::from(flatten(&frame).as_slice())
    }

    /// Projected stars as `[x, y, size]` triples.
    pub fn stars(&self) -> js_sys::Float32Array {
        let flat: Vec<f32> = self
            .scene
            .star_sprites()
            .iter()
            .flat_map(|s| [s.position.x, s.position.y, s.size])
            .collect();
        js_sys::Float32Array::from(flat.as_slice())
    }

    /// Number of skills.
    pub fn skill_count(&self) -> usize {
        self.scene.skills().len()
    }

    /// Title of the skill at `index`.
    pub fn skill_title(&self, index: usize) -> Option<String> {
        self.scene.skills().get(index).map(|s| s.title.clone())
    }

    /// Image URL of the skill at `index`.
    pub fn skill_img(&self, index: usize) -> Option<String> {
        self.scene.skills().get(index).map(|s| s.img.clone())
    }

    /// Smoothed frame rate.
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    /// Cancel pending work before the page drops the scene.
    pub fn teardown(&mut self) {
        self.scene.teardown();
    }

    fn local(&self, client_x: f32, client_y: f32) -> Vec2 {
        Vec2::new(client_x, client_y) - self.origin
    }
}

fn to_js(err: crate::SkillorbError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn flag(value: bool) -> f32 {
    f32::from(u8::from(value))
}

fn flatten(frame: &SceneFrame) -> Vec<f32> {
    let knob = frame.knob.unwrap_or(Vec2::ZERO);
    let mut out =
        Vec::with_capacity(FRAME_HEADER_LEN + frame.cards.len() * CARD_STRIDE);
    out.extend_from_slice(&[
        f32::from(frame.tier as u8),
        frame.angle,
        frame.velocity,
        flag(frame.knob.is_some()),
        knob.x,
        knob.y,
        flag(frame.dragging),
        frame.opacity,
        frame.cards.len() as f32,
    ]);
    for card in &frame.cards {
        out.extend_from_slice(&[
            card.index as f32,
            card.center.x,
            card.center.y,
            card.size.x,
            card.size.y,
            card.depth,
            card.opacity,
            flag(card.hovered),
        ]);
    }
    out
}

#[cfg(all(test, feature = "web"))]
mod tests {
    use super::*;
    use crate::layout::DeviceTier;
    use crate::scene::CardSprite;

    fn card(index: usize, x: f32, hovered: bool) -> CardSprite {
        CardSprite {
            index,
            center: Vec2::new(x, 40.0),
            size: Vec2::new(30.0, 20.0),
            depth: 12.5,
            opacity: 0.75,
            hovered,
        }
    }

    #[test]
    fn flattened_frame_has_header_then_cards() {
        let frame = SceneFrame {
            tier: DeviceTier::Mobile,
            angle: 1.5,
            velocity: 0.004,
            knob: Some(Vec2::new(16.0, -3.0)),
            dragging: true,
            opacity: 0.5,
            cards: vec![card(3, 100.0, false), card(7, 180.0, true)],
        };
        let flat = flatten(&frame);
        assert_eq!(flat.len(), FRAME_HEADER_LEN + 2 * CARD_STRIDE);
        assert_eq!(
            flat[..FRAME_HEADER_LEN],
            [
                f32::from(DeviceTier::Mobile as u8),
                1.5,
                0.004,
                1.0,
                16.0,
                -3.0,
                1.0,
                0.5,
                2.0
            ]
        );
        let second = &flat[FRAME_HEADER_LEN + CARD_STRIDE..];
        assert_eq!(second, [7.0, 180.0, 40.0, 30.0, 20.0, 12.5, 0.75, 1.0]);
        assert_eq!(flat[FRAME_HEADER_LEN + CARD_STRIDE - 1], 0.0);
    }

    #[test]
    fn hidden_knob_flattens_to_zero_flag() {
        let frame = SceneFrame {
            tier: DeviceTier::Desktop,
            angle: 0.0,
            velocity: 0.0,
            knob: None,
            dragging: false,
            opacity: 1.0,
            cards: Vec::new(),
        };
        let flat = flatten(&frame);
        assert_eq!(flat.len(), FRAME_HEADER_LEN);
        assert_eq!(flat[3..7], [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(flat[FRAME_HEADER_LEN - 1], 0.0);
    }
}
