//! The rising firework shell

use glam::Vec2;
use rand::Rng;

use super::canvas::{Canvas, Hsla};
use super::trail::Trail;
use crate::consts::*;

/// Outcome of advancing a shell by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flight {
    /// Still climbing toward the target.
    Climbing,
    /// Reached the target this frame. The caller bursts sparks at the
    /// target point and removes the shell; its position was not moved.
    Arrived,
}

/// A shell traveling in a straight line from launch point to target,
/// accelerating exponentially until arrival.
#[derive(Debug, Clone)]
pub struct Shell {
    pub pos: Vec2,
    pub launch: Vec2,
    pub target: Vec2,
    pub distance_to_target: f32,
    pub distance_traveled: f32,
    pub trail: Trail<SHELL_TRAIL_LEN>,
    /// Travel direction, fixed at creation
    pub angle: f32,
    pub speed: f32,
    /// HSL lightness percentage, drawn once at creation
    pub brightness: f32,
    /// Radius of the pulsing landing marker at the target
    pub marker_radius: f32,
}

impl Shell {
    pub fn new(launch: Vec2, target: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            pos: launch,
            launch,
            target,
            distance_to_target: launch.distance(target),
            distance_traveled: 0.0,
            trail: Trail::filled(launch),
            angle: (target.y - launch.y).atan2(target.x - launch.x),
            speed: SHELL_LAUNCH_SPEED,
            brightness: rng.random_range(BRIGHTNESS_MIN..BRIGHTNESS_MAX),
            marker_radius: MARKER_RADIUS_MIN,
        }
    }

    /// Advance one frame.
    ///
    /// Arrival compares the straight-line distance from the launch point to
    /// the current position against the precomputed target distance. The
    /// distance is recomputed from positions every frame, never accumulated,
    /// so overshoot detection is exact. On the arrival frame the position is
    /// left untouched.
    pub fn advance(&mut self) -> Flight {
        self.trail.push(self.pos);

        if self.marker_radius < MARKER_RADIUS_MAX {
            self.marker_radius += MARKER_RADIUS_STEP;
        } else {
            self.marker_radius = MARKER_RADIUS_MIN;
        }

        self.speed *= SHELL_ACCELERATION;
        let vel = Vec2::from_angle(self.angle) * self.speed;
        self.distance_traveled = self.launch.distance(self.pos);

        if self.distance_traveled >= self.distance_to_target {
            Flight::Arrived
        } else {
            self.pos += vel;
            Flight::Climbing
        }
    }

    /// Stroke the motion streak and the landing marker.
    ///
    /// Shells share the global hue; only lightness varies per shell.
    pub fn render(&self, hue: f32, canvas: &mut impl Canvas) {
        let color = Hsla::opaque(hue, self.brightness);
        canvas.stroke_segment(self.trail.oldest(), self.pos, color);
        canvas.stroke_circle(self.target, self.marker_radius, color);
    }
}
