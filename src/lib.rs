// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive 3D skill orb driven by a virtual joystick.
//!
//! A ring of skill cards turns around the vertical axis. On phones a small
//! joystick in the corner spins it by hand and lets it coast to a stop when
//! released; wider screens turn it on their own, and tablets show a flat grid.
//!
//! # Key entry points
//!
//! - [`scene::SkillScene`] - owns all state and produces one [`SceneFrame`]
//!   per rendered frame
//! - [`joystick::JoystickController`] - drag, velocity and coast
//! - [`rotation::RingRotation`] - turns joystick velocity into a ring angle
//! - [`options::Options`] - tunables, loadable from TOML or JSON presets
//!
//! # Frame flow
//!
//! Hosts translate pointer input into [`input::InputEvent`]s and call
//! [`SkillScene::frame`](scene::SkillScene::frame) once per display frame.
//! Within a frame, pending tier changes commit first, then the joystick coast
//! runs, then the ring advances and the cards are laid out.

pub mod animation;
pub mod camera;
pub mod error;
pub mod input;
pub mod joystick;
pub mod layout;
pub mod options;
pub mod rotation;
pub mod scene;
pub mod skills;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use error::SkillorbError;
pub use layout::DeviceTier;
pub use options::Options;
pub use scene::{SceneFrame, SkillScene};
pub use skills::Skill;
