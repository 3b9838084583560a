//! The skill-orb scene: one owner for every piece of per-frame state.
//!
//! [`SkillScene`] wires pointer input to the joystick (or, on the desktop
//! tiers, to the camera orbit), the joystick to the ring rotation, and the
//! ring through the camera onto the viewport. All
//! mutation happens on the host's frame timeline:
//!
//! 1. pointer events arrive through [`SkillScene::handle_event`];
//! 2. [`SkillScene::frame`] commits debounced tier changes, runs due
//!    next-frame requests (the joystick coast), advances the rotation and
//!    the camera orbit, and lays out the cards.
//!
//! Dropping the scene cancels any pending coast.

/// Per-frame output handed to the host.
pub mod sprite;
/// Seeded background star field.
pub mod stars;

use glam::{Quat, Vec2, Vec3};
pub use sprite::{CardSprite, SceneFrame, StarSprite, HOVER_LIFT, HOVER_SCALE};
pub use stars::{Star, StarField};
use web_time::{Duration, Instant};

use crate::animation::entrance::{Entrance, Fade};
use crate::animation::frame::FrameScheduler;
use crate::camera::{Camera, OrbitController};
use crate::error::SkillorbError;
use crate::input::{ControlRect, InputCommand, InputEvent, InputProcessor};
use crate::joystick::JoystickController;
use crate::layout::{grid_cells, DeviceTier, ResizeDebouncer, TierLayout};
use crate::options::Options;
use crate::rotation::{RingRotation, UpdateThrottle};
use crate::skills::Skill;

/// Joystick element edge length in CSS pixels.
pub const JOYSTICK_SIZE: f32 = 56.0;

/// Gap between the joystick and the viewport corner.
pub const JOYSTICK_MARGIN: f32 = 12.0;

/// Widest the tablet grid gets, in CSS pixels.
const GRID_MAX_WIDTH: f32 = 768.0;
const GRID_GAP: f32 = 16.0;
const GRID_PADDING_TOP: f32 = 64.0;

/// Interactive skill ring.
pub struct SkillScene {
    options: Options,
    viewport: Vec2,
    layout: TierLayout,
    base_positions: Vec<Vec3>,
    camera: Camera,
    orbit: Option<OrbitController>,
    rotation: RingRotation,
    joystick: JoystickController,
    frames: FrameScheduler,
    throttle: UpdateThrottle,
    input: InputProcessor,
    debouncer: ResizeDebouncer,
    entrances: Vec<Entrance>,
    fade: Fade,
    /// Seconds since the current tier was mounted.
    shown_for: f32,
    stars: Option<StarField>,
    star_sprites: Vec<StarSprite>,
    hover: Option<Vec2>,
}

impl SkillScene {
    /// Build a scene for a viewport of `viewport` CSS pixels.
    ///
    /// # Errors
    ///
    /// Returns [`SkillorbError::EmptyCatalogue`] when there are no skills.
    pub fn new(options: Options, viewport: Vec2) -> Result<Self, SkillorbError> {
        if options.skills.is_empty() {
            return Err(SkillorbError::EmptyCatalogue);
        }
        let tier =
            DeviceTier::from_width(viewport.x, &options.layout.breakpoints);
        let layout = TierLayout::for_tier(tier);

        let mut scene = Self {
            viewport,
            layout,
            base_positions: Vec::new(),
            camera: Camera::for_layout(&layout, viewport),
            orbit: None,
            rotation: RingRotation::new(
                tier.rotation_mode(),
                options.rotation.clone(),
            ),
            joystick: JoystickController::new(options.joystick.clone()),
            frames: FrameScheduler::new(),
            throttle: UpdateThrottle::new(Duration::from_millis(
                options.rotation.throttle_ms,
            )),
            input: InputProcessor::new(),
            debouncer: ResizeDebouncer::new(
                tier,
                Duration::from_millis(options.layout.resize_debounce_ms),
                options.layout.breakpoints.clone(),
            ),
            entrances: Vec::new(),
            fade: Fade::new(options.layout.tier_fade_secs),
            shown_for: 0.0,
            stars: None,
            star_sprites: Vec::new(),
            hover: None,
            options,
        };
        scene.mount(tier);
        log::debug!(
            "skill scene ready: {} skills, {tier:?} at {}x{}",
            scene.skills().len(),
            viewport.x,
            viewport.y
        );
        Ok(scene)
    }

    /// Tier currently laid out.
    #[must_use]
    pub fn tier(&self) -> DeviceTier {
        self.debouncer.tier()
    }

    /// Skill catalogue in ring order.
    #[must_use]
    pub fn skills(&self) -> &[Skill] {
        &self.options.skills
    }

    /// Options the scene was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Ring rotation state.
    #[must_use]
    pub fn rotation(&self) -> &RingRotation {
        &self.rotation
    }

    /// Joystick state.
    #[must_use]
    pub fn joystick(&self) -> &JoystickController {
        &self.joystick
    }

    /// Where the joystick sits, when the tier shows one.
    #[must_use]
    pub fn joystick_rect(&self) -> Option<ControlRect> {
        self.input.control()
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Camera orbit, on the tiers that offer one.
    #[must_use]
    pub fn orbit(&self) -> Option<&OrbitController> {
        self.orbit.as_ref()
    }

    /// Background stars projected for the current viewport.
    #[must_use]
    pub fn star_sprites(&self) -> &[StarSprite] {
        &self.star_sprites
    }

    /// Feed a pointer event, timestamped now.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.handle_event_at(event, Instant::now());
    }

    /// Feed a pointer event that happened at `now`.
    pub fn handle_event_at(&mut self, event: InputEvent, now: Instant) {
        if let Some(command) = self.input.handle_event(event) {
            self.apply_at(command, now);
        }
    }

    /// Apply an already-interpreted command, timestamped now.
    pub fn apply(&mut self, command: InputCommand) {
        self.apply_at(command, Instant::now());
    }

    fn apply_at(&mut self, command: InputCommand, now: Instant) {
        match command {
            InputCommand::BeginDrag => {
                self.joystick.begin(&mut self.frames);
                self.forward_velocity(self.joystick.velocity(), now);
            }
            InputCommand::Drag { offset } => {
                if let Some(velocity) = self.joystick.update(offset) {
                    self.forward_velocity(velocity, now);
                }
            }
            InputCommand::EndDrag => self.joystick.end(&mut self.frames),
            InputCommand::BeginOrbit => {
                if let Some(orbit) = self.orbit.as_mut() {
                    orbit.begin();
                }
            }
            InputCommand::Orbit { delta } => {
                if let Some(orbit) = self.orbit.as_mut() {
                    orbit.rotate(delta, self.viewport.y);
                }
            }
            InputCommand::EndOrbit => {
                if let Some(orbit) = self.orbit.as_mut() {
                    orbit.end();
                }
            }
            InputCommand::Hover { position } => self.hover = Some(position),
            InputCommand::HoverExit => self.hover = None,
        }
    }

    /// Record a new viewport size in CSS pixels, timestamped now.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.resize(Vec2::new(width, height));
    }

    /// Record a viewport resize, timestamped now.
    pub fn resize(&mut self, viewport: Vec2) {
        self.resize_at(viewport, Instant::now());
    }

    /// Record a viewport resize that happened at `now`.
    ///
    /// Geometry follows immediately; a tier change waits for the debounce.
    pub fn resize_at(&mut self, viewport: Vec2, now: Instant) {
        self.viewport = viewport;
        self.camera.resize(viewport);
        if self.tier().has_joystick() {
            self.place_joystick();
        }
        self.project_stars();
        self.debouncer.resize(viewport.x, now);
    }

    /// Advance one frame of `dt` seconds, timestamped now.
    pub fn frame(&mut self, dt: f32) -> SceneFrame {
        self.frame_at(dt, Instant::now())
    }

    /// Advance one frame of `dt` seconds at `now`.
    pub fn frame_at(&mut self, dt: f32, now: Instant) -> SceneFrame {
        if let Some(tier) = self.debouncer.poll(now) {
            self.mount(tier);
        }

        for token in self.frames.begin_frame() {
            if let Some(velocity) = self.joystick.on_frame(token, &mut self.frames)
            {
                self.forward_velocity(velocity, now);
            }
        }

        let angle = self.rotation.tick(dt);
        if let Some(orbit) = self.orbit.as_mut() {
            orbit.tick(dt);
            orbit.apply(&mut self.camera);
            self.project_stars();
        }
        self.shown_for += dt;

        let tier = self.tier();
        let cards = if tier.is_3d() {
            self.ring_sprites(angle)
        } else {
            self.grid_sprites()
        };

        SceneFrame {
            tier,
            angle,
            velocity: self.rotation.manual_velocity(),
            knob: tier.has_joystick().then(|| self.joystick.knob()),
            dragging: self.joystick.is_dragging(),
            opacity: self.fade.opacity(self.shown_for),
            cards,
        }
    }

    /// Cancel pending next-frame work. Also runs on drop.
    pub fn teardown(&mut self) {
        let pending = self.frames.pending_len();
        if pending > 0 {
            log::debug!("teardown cancels {pending} frame request(s)");
        }
        self.joystick.teardown(&mut self.frames);
    }

    fn forward_velocity(&mut self, velocity: f32, now: Instant) {
        if self.throttle.accept(velocity, now) {
            self.rotation.set_manual_velocity(velocity);
        }
    }

    /// Lay out everything for `tier` and restart its entrance.
    fn mount(&mut self, tier: DeviceTier) {
        self.layout = TierLayout::for_tier(tier);
        self.base_positions = self.layout.ring_positions(self.skills().len());
        self.camera = Camera::for_layout(&self.layout, self.viewport);
        self.orbit = (tier.has_orbit() && self.options.orbit.enabled).then(|| {
            OrbitController::from_camera(&self.camera, &self.options.orbit)
        });
        let _ = self.input.set_orbit(self.orbit.is_some());
        self.rotation.set_mode(tier.rotation_mode());
        self.entrances = (0..self.skills().len())
            .map(|index| Entrance::for_card(tier, index))
            .collect();
        self.shown_for = 0.0;
        self.hover = None;

        if tier.has_joystick() {
            self.place_joystick();
        } else {
            self.joystick.teardown(&mut self.frames);
            let _ = self.input.set_control(None);
        }

        let star_options = &self.options.stars;
        self.stars = match tier {
            DeviceTier::Mobile => Some(&star_options.mobile),
            DeviceTier::Tablet => None,
            DeviceTier::Laptop
            | DeviceTier::SmallDesktop
            | DeviceTier::Desktop => Some(&star_options.desktop),
        }
        .map(|params| StarField::generate(params, star_options.seed));
        self.project_stars();
        log::debug!(
            "mounted {tier:?}: {} stars, orbit {}",
            self.stars.as_ref().map_or(0, StarField::len),
            self.orbit.is_some()
        );
    }

    fn place_joystick(&mut self) {
        let rect = ControlRect::bottom_right(
            self.viewport,
            JOYSTICK_SIZE,
            JOYSTICK_MARGIN,
        );
        let _ = self.input.set_control(Some(rect));
    }

    fn project_stars(&mut self) {
        let view_proj = self.camera.build_matrix();
        self.star_sprites = self
            .stars
            .iter()
            .flat_map(StarField::stars)
            .filter_map(|star| {
                self.camera
                    .project_with(&view_proj, star.position, self.viewport)
                    .map(|p| StarSprite {
                        position: p.position,
                        size: star.size,
                    })
            })
            .collect();
    }

    fn ring_sprites(&self, angle: f32) -> Vec<CardSprite> {
        let spin = Quat::from_rotation_y(angle);
        let view_proj = self.camera.build_matrix();
        let layout = &self.layout;

        let mut cards: Vec<CardSprite> = self
            .base_positions
            .iter()
            .zip(&self.entrances)
            .enumerate()
            .filter_map(|(index, (base, entrance))| {
                let projected = self.camera.project_with(
                    &view_proj,
                    spin * *base,
                    self.viewport,
                )?;
                let sample = entrance.sample(self.shown_for);
                let perspective =
                    layout.distance_factor / projected.depth.max(f32::EPSILON);
                Some(CardSprite {
                    index,
                    center: projected.position,
                    size: layout.card_size
                        * (layout.orb_scale * perspective * sample.scale),
                    depth: projected.depth,
                    opacity: sample.opacity,
                    hovered: false,
                })
            })
            .collect();
        cards.sort_by(|a, b| b.depth.total_cmp(&a.depth));

        let hovered = self
            .hover
            .and_then(|point| sprite::topmost_at(&cards, point));
        if let Some(card) = hovered.map(|index| &mut cards[index]) {
            card.hovered = true;
            card.size *= HOVER_SCALE;
            card.center.y -= HOVER_LIFT;
        }
        cards
    }

    fn grid_sprites(&self) -> Vec<CardSprite> {
        let columns = self.options.layout.grid_columns.max(1);
        let width = self.viewport.x.min(GRID_MAX_WIDTH);
        let left = (self.viewport.x - width) * 0.5;
        let cell_width =
            (width - GRID_GAP * (columns - 1) as f32) / columns as f32;
        let cell = Vec2::new(cell_width, self.layout.card_size.y);

        grid_cells(self.skills().len(), columns)
            .into_iter()
            .zip(&self.entrances)
            .enumerate()
            .map(|(index, (slot, entrance))| {
                let sample = entrance.sample(self.shown_for);
                let origin = Vec2::new(
                    left + slot.column as f32 * (cell.x + GRID_GAP),
                    GRID_PADDING_TOP + slot.row as f32 * (cell.y + GRID_GAP),
                );
                CardSprite {
                    index,
                    center: origin + cell * 0.5 + Vec2::Y * sample.offset_y,
                    size: cell,
                    depth: 0.0,
                    opacity: sample.opacity,
                    hovered: false,
                }
            })
            .collect()
    }
}

impl Drop for SkillScene {
    fn drop(&mut self) {
        self.teardown();
    }
}
