//! Frame-driven animation: next-frame scheduling, easing curves and the
//! per-card entrance sequences.

pub mod easing;
pub mod entrance;
pub mod frame;

pub use easing::Easing;
pub use entrance::{Entrance, EntranceSample, EntranceStyle, Fade};
pub use frame::{FrameScheduler, FrameToken};
