//! Live display state
//!
//! Owns the two ordered entity collections, the global hue counter, and the
//! seeded RNG. There is no other mutable state in the simulation.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::shell::Shell;
use super::spark::Spark;
use crate::consts::*;

/// Everything live on the display.
///
/// Entity order within each collection is append order; the frame loop
/// relies on removals preserving the relative order of survivors.
#[derive(Debug, Clone)]
pub struct SimState {
    /// Surface size in CSS px; only the launch origin depends on it
    pub surface_size: Vec2,
    /// Global hue in degrees, shared by all shells
    pub hue: f32,
    pub shells: Vec<Shell>,
    pub sparks: Vec<Spark>,
    pub rng: Pcg32,
}

impl SimState {
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        Self {
            surface_size: Vec2::new(width, height),
            hue: HUE_START,
            shells: Vec::new(),
            sparks: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Track the host surface; in-flight entities are left where they are.
    pub fn set_surface_size(&mut self, width: f32, height: f32) {
        self.surface_size = Vec2::new(width, height);
    }

    /// Launch origin: fixed bottom-center of the surface.
    pub fn launch_origin(&self) -> Vec2 {
        Vec2::new(self.surface_size.x / 2.0, self.surface_size.y)
    }

    /// Launch a shell toward `target`.
    ///
    /// Any coordinates are accepted, including points outside the surface;
    /// a target equal to the launch origin bursts on the first frame.
    pub fn launch(&mut self, target: Vec2) {
        let origin = self.launch_origin();
        log::debug!(
            "launch ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            origin.x,
            origin.y,
            target.x,
            target.y
        );
        self.shells.push(Shell::new(origin, target, &mut self.rng));
    }

    /// Append one full burst of sparks at `origin`.
    pub fn burst(&mut self, origin: Vec2) {
        for _ in 0..BURST_SPARK_COUNT {
            self.sparks.push(Spark::new(origin, &mut self.rng));
        }
        log::debug!(
            "burst of {} sparks at ({:.1}, {:.1})",
            BURST_SPARK_COUNT,
            origin.x,
            origin.y
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_origin_is_bottom_center() {
        let state = SimState::new(1, 800.0, 600.0);
        assert_eq!(state.launch_origin(), Vec2::new(400.0, 600.0));
    }

    #[test]
    fn test_launch_appends_one_shell() {
        let mut state = SimState::new(1, 800.0, 600.0);
        state.launch(Vec2::new(100.0, 100.0));
        state.launch(Vec2::new(-50.0, 900.0)); // off-surface targets are legal

        assert_eq!(state.shells.len(), 2);
        assert_eq!(state.shells[0].launch, Vec2::new(400.0, 600.0));
        assert_eq!(state.shells[0].target, Vec2::new(100.0, 100.0));
        assert_eq!(state.shells[1].target, Vec2::new(-50.0, 900.0));
    }

    #[test]
    fn test_burst_spawns_full_batch_at_origin() {
        let mut state = SimState::new(1, 800.0, 600.0);
        state.burst(Vec2::new(123.0, 45.0));

        assert_eq!(state.sparks.len(), BURST_SPARK_COUNT);
        assert!(
            state
                .sparks
                .iter()
                .all(|s| s.pos == Vec2::new(123.0, 45.0) && s.opacity == 1.0)
        );
    }

    #[test]
    fn test_same_seed_same_display() {
        let mut a = SimState::new(99, 800.0, 600.0);
        let mut b = SimState::new(99, 800.0, 600.0);
        a.launch(Vec2::new(10.0, 10.0));
        b.launch(Vec2::new(10.0, 10.0));
        a.burst(Vec2::ZERO);
        b.burst(Vec2::ZERO);

        assert_eq!(a.shells[0].brightness, b.shells[0].brightness);
        for (x, y) in a.sparks.iter().zip(&b.sparks) {
            assert_eq!(x.angle, y.angle);
            assert_eq!(x.speed, y.speed);
            assert_eq!(x.hue, y.hue);
            assert_eq!(x.decay, y.decay);
        }
    }
}
