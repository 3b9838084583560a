//! Headless trace of the skill orb.
//!
//! Builds a phone-sized scene, drags the joystick hard right, lets go and logs
//! every frame until the ring is back to its idle drift. Run with
//! `RUST_LOG=info skillorb [preset.toml]`.

use std::path::Path;
use std::thread;

use glam::Vec2;
use skillorb::input::InputEvent;
use skillorb::util::frame_timing::FrameTiming;
use skillorb::{Options, SkillScene, SkillorbError};

const VIEWPORT: Vec2 = Vec2::new(375.0, 320.0);
const TARGET_FPS: u32 = 60;
const DRAG_FRAMES: usize = 30;
const MAX_COAST_FRAMES: usize = 600;

fn run(options: Options) -> Result<(), SkillorbError> {
    let mut scene = SkillScene::new(options, VIEWPORT)?;
    let Some(control) = scene.joystick_rect() else {
        log::warn!("{:?} layout has no joystick", scene.tier());
        return Ok(());
    };
    let center = control.center();
    let mut timing = FrameTiming::new(TARGET_FPS);

    scene.handle_event(InputEvent::PointerDown {
        x: center.x,
        y: center.y,
    });
    let mut frame_no = 0;
    for step in 0..DRAG_FRAMES {
        let x = center.x + step as f32 * 2.0;
        scene.handle_event(InputEvent::PointerMoved { x, y: center.y });
        frame_no += 1;
        trace(&mut scene, &mut timing, frame_no);
    }

    scene.handle_event(InputEvent::PointerUp);
    log::info!("released");
    for _ in 0..MAX_COAST_FRAMES {
        frame_no += 1;
        trace(&mut scene, &mut timing, frame_no);
        if !scene.joystick().is_coasting() {
            break;
        }
    }
    log::info!(
        "idle after {frame_no} frames at {:.1} fps",
        timing.fps()
    );
    scene.teardown();
    Ok(())
}

fn trace(scene: &mut SkillScene, timing: &mut FrameTiming, frame_no: usize) {
    thread::sleep(timing.until_next_frame());
    let dt = timing.end_frame();
    let frame = scene.frame(dt);
    let knob = frame.knob.unwrap_or(Vec2::ZERO);
    log::info!(
        "#{frame_no:<4} angle {:>8.4} velocity {:>9.6} knob ({:>6.2}, {:>6.2})",
        frame.angle,
        frame.velocity,
        knob.x,
        knob.y
    );
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = run(options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
