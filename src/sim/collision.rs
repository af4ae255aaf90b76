//! Collision detection and sliding movement
//!
//! Everything is an axis-aligned square. Touching edges do not overlap, so a
//! player can stand flush against a wall.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::consts::SCREEN_SIZE;

/// Axis-aligned square box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    pub size: f32,
}

impl Aabb {
    pub fn new(min: Vec2, size: f32) -> Self {
        Self { min, size }
    }

    /// Box for an entity on the integer pixel grid
    pub fn from_tile(pos: IVec2, size: i32) -> Self {
        Self::new(pos.as_vec2(), size as f32)
    }

    /// Strict overlap test (shared edges are not a hit)
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x + self.size > other.min.x
            && self.min.x < other.min.x + other.size
            && self.min.y + self.size > other.min.y
            && self.min.y < other.min.y + other.size
    }

    /// Whether the box lies entirely on screen
    #[inline]
    pub fn in_bounds(&self) -> bool {
        let max = SCREEN_SIZE as f32 - self.size;
        self.min.x >= 0.0 && self.min.x <= max && self.min.y >= 0.0 && self.min.y <= max
    }

    pub fn overlaps_any<'a>(&self, others: impl IntoIterator<Item = &'a Aabb>) -> bool {
        others.into_iter().any(|other| self.overlaps(other))
    }
}

/// Whether an entity of `size` may stand at `pos`
fn is_free(pos: IVec2, size: i32, obstacles: &[Aabb]) -> bool {
    let bounds = Aabb::from_tile(pos, size);
    bounds.in_bounds() && !bounds.overlaps_any(obstacles)
}

/// Resolve a one-tick move with axis-priority sliding
///
/// Tries the full diagonal step, then the x component alone, then the y
/// component alone. Returns `None` if every candidate is blocked.
pub fn try_slide(pos: IVec2, size: i32, delta: IVec2, obstacles: &[Aabb]) -> Option<IVec2> {
    if delta == IVec2::ZERO {
        return Some(pos);
    }
    let candidates = [
        pos + delta,
        IVec2::new(pos.x + delta.x, pos.y),
        IVec2::new(pos.x, pos.y + delta.y),
    ];
    candidates
        .into_iter()
        .filter(|&candidate| candidate != pos)
        .find(|&candidate| is_free(candidate, size, obstacles))
}

/// Like [`try_slide`], but stays in place when fully blocked
pub fn resolve_slide(pos: IVec2, size: i32, delta: IVec2, obstacles: &[Aabb]) -> IVec2 {
    try_slide(pos, size, delta, obstacles).unwrap_or(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(x: i32, y: i32) -> Aabb {
        Aabb::from_tile(IVec2::new(x, y), 20)
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = wall(0, 0);
        let b = wall(20, 0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        let c = wall(19, 0);
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_overlap_partial_and_contained() {
        let big = wall(0, 0);
        let small = Aabb::new(Vec2::new(5.0, 5.0), 5.0);
        assert!(big.overlaps(&small));
        assert!(small.overlaps(&big));
        let diagonal = wall(19, 19);
        assert!(big.overlaps(&diagonal));
        let apart = wall(20, 20);
        assert!(!big.overlaps(&apart));
    }

    #[test]
    fn test_in_bounds_edges() {
        assert!(wall(0, 0).in_bounds());
        assert!(wall(SCREEN_SIZE - 20, SCREEN_SIZE - 20).in_bounds());
        assert!(!wall(-1, 0).in_bounds());
        assert!(!wall(0, SCREEN_SIZE - 19).in_bounds());
    }

    #[test]
    fn test_slide_prefers_diagonal() {
        let pos = resolve_slide(IVec2::new(40, 40), 20, IVec2::new(1, 1), &[]);
        assert_eq!(pos, IVec2::new(41, 41));
    }

    #[test]
    fn test_slide_falls_back_to_y_only() {
        // Wall directly to the left: up+left slides up
        let obstacles = [wall(20, 30)];
        let pos = resolve_slide(IVec2::new(40, 30), 20, IVec2::new(-1, -1), &obstacles);
        assert_eq!(pos, IVec2::new(40, 29));
    }

    #[test]
    fn test_slide_falls_back_to_x_only() {
        // Wall directly above: up+right slides right
        let obstacles = [wall(40, 10)];
        let pos = resolve_slide(IVec2::new(40, 30), 20, IVec2::new(1, -1), &obstacles);
        assert_eq!(pos, IVec2::new(41, 30));
    }

    #[test]
    fn test_slide_blocked_in_corner() {
        let obstacles = [wall(20, 30), wall(40, 10), wall(20, 10)];
        let start = IVec2::new(40, 30);
        assert_eq!(try_slide(start, 20, IVec2::new(-1, -1), &obstacles), None);
        assert_eq!(resolve_slide(start, 20, IVec2::new(-1, -1), &obstacles), start);
    }

    #[test]
    fn test_slide_respects_screen_edge() {
        let pos = resolve_slide(IVec2::new(0, 50), 20, IVec2::new(-1, 1), &[]);
        assert_eq!(pos, IVec2::new(0, 51));
        let pos = resolve_slide(IVec2::new(0, 0), 20, IVec2::new(-1, -1), &[]);
        assert_eq!(pos, IVec2::ZERO);
    }
}
