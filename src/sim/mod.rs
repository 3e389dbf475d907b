//! Deterministic fireworks simulation
//!
//! All display logic lives here. This module must stay pure:
//! - One step per display frame (all constants are per-frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies; drawing goes through `Canvas`

pub mod canvas;
pub mod shell;
pub mod spark;
pub mod state;
pub mod tick;
pub mod trail;

pub use canvas::{Canvas, Hsla, NoopCanvas};
pub use shell::{Flight, Shell};
pub use spark::{Fade, Spark};
pub use state::SimState;
pub use tick::frame;
pub use trail::Trail;
