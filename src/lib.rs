//! Skyburst - interactive fireworks on a WebGPU canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (shells, sparks, trails)
//! - `renderer`: WebGPU stroke rendering with frame persistence

pub mod renderer;
pub mod sim;

/// Display tuning constants
///
/// The simulation is frame-locked: speeds are surface pixels per display
/// frame and the multiplicative factors apply once per frame.
pub mod consts {
    /// Initial shell speed (px/frame)
    pub const SHELL_LAUNCH_SPEED: f32 = 2.0;
    /// Multiplicative shell acceleration per frame
    pub const SHELL_ACCELERATION: f32 = 1.05;
    /// Positions retained in a shell's motion trail
    pub const SHELL_TRAIL_LEN: usize = 3;

    /// Sparks spawned per burst
    pub const BURST_SPARK_COUNT: usize = 30;

    /// Positions retained in a spark's motion trail
    pub const SPARK_TRAIL_LEN: usize = 5;
    /// Multiplicative spark speed decay per frame
    pub const SPARK_FRICTION: f32 = 0.95;
    /// Constant downward pull per frame (px)
    pub const SPARK_GRAVITY: f32 = 1.0;
    /// Initial spark speed range (px/frame)
    pub const SPARK_SPEED_MIN: f32 = 1.0;
    pub const SPARK_SPEED_MAX: f32 = 11.0;
    /// Per-frame opacity decay range
    pub const SPARK_DECAY_MIN: f32 = 0.01;
    pub const SPARK_DECAY_MAX: f32 = 0.04;

    /// HSL lightness range for shells and sparks (percent)
    pub const BRIGHTNESS_MIN: f32 = 50.0;
    pub const BRIGHTNESS_MAX: f32 = 100.0;

    /// Pulsing landing-marker radius (px) and per-frame growth
    pub const MARKER_RADIUS_MIN: f32 = 1.0;
    pub const MARKER_RADIUS_MAX: f32 = 8.0;
    pub const MARKER_RADIUS_STEP: f32 = 0.3;

    /// Global hue at startup and its advance per frame (degrees)
    pub const HUE_START: f32 = 120.0;
    pub const HUE_STEP: f32 = 0.5;

    /// Stroke width (CSS px)
    pub const LINE_WIDTH: f32 = 1.0;
    /// Tessellation segments for the landing-marker circle
    pub const CIRCLE_SEGMENTS: u32 = 32;
}
