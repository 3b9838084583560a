//! Perspective camera used to place the 3D ring on screen.

/// Camera struct and world-to-screen projection.
pub mod core;
/// Drag-to-orbit control for the desktop layouts.
pub mod orbit;

pub use self::core::{Camera, ScreenPoint};
pub use self::orbit::OrbitController;
