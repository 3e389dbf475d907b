//! Fixed-capacity position history for motion streaks

use glam::Vec2;

/// Ring buffer of the `N` most recent positions, most-recent-first.
///
/// Pushing evicts the oldest entry; the capacity never changes and no
/// allocation happens after construction. Rendering only ever needs the
/// oldest retained point (the far end of the streak).
#[derive(Debug, Clone, Copy)]
pub struct Trail<const N: usize> {
    points: [Vec2; N],
    /// Index of the most recent entry
    head: usize,
}

impl<const N: usize> Trail<N> {
    /// A trail with every slot holding `origin`, so the first strokes
    /// collapse to a point instead of streaking from (0, 0).
    pub fn filled(origin: Vec2) -> Self {
        Self {
            points: [origin; N],
            head: 0,
        }
    }

    /// Record `point` as the most recent position, evicting the oldest.
    pub fn push(&mut self, point: Vec2) {
        self.head = (self.head + N - 1) % N;
        self.points[self.head] = point;
    }

    /// The oldest retained position.
    pub fn oldest(&self) -> Vec2 {
        self.points[(self.head + N - 1) % N]
    }

    /// Number of retained positions (always `N`).
    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Positions from most recent to oldest.
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..N).map(move |i| self.points[(self.head + i) % N])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_holds_origin_everywhere() {
        let trail: Trail<3> = Trail::filled(Vec2::new(4.0, 2.0));
        assert_eq!(trail.len(), 3);
        assert!(trail.iter().all(|p| p == Vec2::new(4.0, 2.0)));
        assert_eq!(trail.oldest(), Vec2::new(4.0, 2.0));
    }

    #[test]
    fn test_push_keeps_most_recent_first() {
        let mut trail: Trail<3> = Trail::filled(Vec2::ZERO);
        for i in 1..=5 {
            trail.push(Vec2::new(i as f32, 0.0));
        }

        let points: Vec<Vec2> = trail.iter().collect();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], Vec2::new(5.0, 0.0));
        assert_eq!(points[1], Vec2::new(4.0, 0.0));
        assert_eq!(points[2], Vec2::new(3.0, 0.0));
        assert_eq!(trail.oldest(), Vec2::new(3.0, 0.0));
    }

    #[test]
    fn test_capacity_constant_through_pushes() {
        let mut trail: Trail<5> = Trail::filled(Vec2::ZERO);
        for i in 0..100 {
            trail.push(Vec2::new(i as f32, i as f32));
            assert_eq!(trail.len(), 5);
        }
        assert_eq!(trail.oldest(), Vec2::new(95.0, 95.0));
    }
}
