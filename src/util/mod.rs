//! Shared utilities.

/// Frame pacing and dt measurement.
pub mod frame_timing;
