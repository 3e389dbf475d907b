//! Explosion fragments

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::canvas::{Canvas, Hsla};
use super::trail::Trail;
use crate::consts::*;

/// Outcome of advancing a spark by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    /// Still visible.
    Glowing,
    /// Faded out this frame; the caller removes it.
    Expired,
}

/// A single burst fragment: fixed heading, decaying speed, constant
/// downward pull, fading opacity.
#[derive(Debug, Clone)]
pub struct Spark {
    pub pos: Vec2,
    pub trail: Trail<SPARK_TRAIL_LEN>,
    /// Travel direction, fixed at creation
    pub angle: f32,
    pub speed: f32,
    pub hue: f32,
    /// HSL lightness percentage
    pub brightness: f32,
    pub opacity: f32,
    /// Opacity lost per frame, drawn once at creation
    pub decay: f32,
}

impl Spark {
    pub fn new(origin: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            pos: origin,
            trail: Trail::filled(origin),
            angle: rng.random_range(0.0..TAU),
            speed: rng.random_range(SPARK_SPEED_MIN..SPARK_SPEED_MAX),
            hue: rng.random_range(0.0..360.0),
            brightness: rng.random_range(BRIGHTNESS_MIN..BRIGHTNESS_MAX),
            opacity: 1.0,
            decay: rng.random_range(SPARK_DECAY_MIN..SPARK_DECAY_MAX),
        }
    }

    /// Advance one frame: friction on the heading speed, gravity added to
    /// the vertical displacement only, opacity reduced by this spark's
    /// decay rate.
    pub fn advance(&mut self) -> Fade {
        self.trail.push(self.pos);
        self.speed *= SPARK_FRICTION;
        self.pos.x += self.angle.cos() * self.speed;
        self.pos.y += self.angle.sin() * self.speed + SPARK_GRAVITY;
        self.opacity -= self.decay;

        if self.expired() {
            Fade::Expired
        } else {
            Fade::Glowing
        }
    }

    /// A spark dies one frame early: when opacity has decayed down to its
    /// own per-frame decay rate, not when it reaches zero.
    pub fn expired(&self) -> bool {
        self.opacity <= self.decay
    }

    /// Stroke the motion streak in this spark's own color and opacity.
    pub fn render(&self, canvas: &mut impl Canvas) {
        canvas.stroke_segment(
            self.trail.oldest(),
            self.pos,
            Hsla::new(self.hue, self.brightness, self.opacity),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::canvas::RecordingCanvas;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn spark_at(origin: Vec2) -> Spark {
        Spark::new(origin, &mut Pcg32::seed_from_u64(7))
    }

    #[test]
    fn test_new_draws_parameters_in_range() {
        let spark = spark_at(Vec2::new(100.0, 100.0));
        assert!(spark.angle >= 0.0 && spark.angle < TAU);
        assert!(spark.speed >= SPARK_SPEED_MIN && spark.speed < SPARK_SPEED_MAX);
        assert!(spark.hue >= 0.0 && spark.hue < 360.0);
        assert!(spark.brightness >= BRIGHTNESS_MIN && spark.brightness < BRIGHTNESS_MAX);
        assert!(spark.decay >= SPARK_DECAY_MIN && spark.decay < SPARK_DECAY_MAX);
        assert_eq!(spark.opacity, 1.0);
        assert_eq!(spark.trail.oldest(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_advance_applies_friction_and_gravity() {
        let mut spark = spark_at(Vec2::ZERO);
        spark.angle = 0.0;
        spark.speed = 10.0;

        spark.advance();

        // Heading speed decayed before the move, gravity only on y.
        let moved_speed = 10.0 * SPARK_FRICTION;
        assert!((spark.speed - moved_speed).abs() < 1e-6);
        assert!((spark.pos.x - moved_speed).abs() < 1e-4);
        assert!((spark.pos.y - SPARK_GRAVITY).abs() < 1e-4);
    }

    #[test]
    fn test_gravity_is_not_decayed() {
        let mut spark = spark_at(Vec2::ZERO);
        spark.angle = 0.0;
        spark.speed = 0.0;
        spark.decay = 0.001;

        for _ in 0..10 {
            spark.advance();
        }
        // Pure gravity: one unit down per frame regardless of friction.
        assert!((spark.pos.y - 10.0 * SPARK_GRAVITY).abs() < 1e-4);
        assert_eq!(spark.pos.x, 0.0);
    }

    #[test]
    fn test_expiry_boundary_is_exact() {
        let mut spark = spark_at(Vec2::ZERO);
        spark.decay = 0.02;

        // Opacity exactly at the decay rate is expired.
        spark.opacity = 0.02;
        assert!(spark.expired());

        // A hair above it is not.
        spark.opacity = 0.02 + 1e-4;
        assert!(!spark.expired());
    }

    #[test]
    fn test_advance_expires_one_frame_early() {
        let mut spark = spark_at(Vec2::ZERO);
        spark.decay = 0.25;

        // 2 * decay - decay == decay exactly in f32, landing on the cutoff.
        spark.opacity = 0.5;
        assert_eq!(spark.advance(), Fade::Expired);
        assert!(spark.opacity > 0.0);

        let mut spark = spark_at(Vec2::ZERO);
        spark.decay = 0.25;
        spark.opacity = 0.5 + 0.01;
        assert_eq!(spark.advance(), Fade::Glowing);
    }

    #[test]
    fn test_render_uses_own_color_and_opacity() {
        let mut spark = spark_at(Vec2::new(50.0, 50.0));
        for _ in 0..3 {
            spark.advance();
        }

        let mut canvas = RecordingCanvas::default();
        spark.render(&mut canvas);

        assert_eq!(canvas.segments.len(), 1);
        assert!(canvas.circles.is_empty());

        let (from, to, color) = canvas.segments[0];
        assert_eq!(from, spark.trail.oldest());
        assert_eq!(to, spark.pos);
        assert_eq!(color.hue, spark.hue);
        assert_eq!(color.lightness, spark.brightness);
        assert_eq!(color.alpha, spark.opacity);
    }
}
