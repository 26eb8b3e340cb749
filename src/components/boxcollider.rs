use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size, anchored at the entity position.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    /// Collider of the given size centered on the entity position.
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(width, height).with_offset(Vector2::new(-width * 0.5, -height * 0.5))
    }

    /// Modify BoxCollider with given size and offset
    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// Shrink the box by `inset` on every side, keeping its center.
    ///
    /// A box thinner than twice the inset collapses to zero size.
    pub fn inset(&self, inset: f32) -> Self {
        let w = (self.size.x - 2.0 * inset).max(0.0);
        let h = (self.size.y - 2.0 * inset).max(0.0);
        let dx = (self.size.x - w) * 0.5;
        let dy = (self.size.y - h) * 0.5;
        Self {
            size: Vector2::new(w, h),
            offset: Vector2::new(self.offset.x + dx, self.offset.y + dy),
        }
    }

    /// Scale both size and offset around the entity position.
    pub fn scaled(&self, scale: Vector2) -> Self {
        Self {
            size: Vector2::new(self.size.x * scale.x, self.size.y * scale.y),
            offset: Vector2::new(self.offset.x * scale.x, self.offset.y * scale.y),
        }
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    pub fn get_aabb(&self, position: Vector2) -> (f32, f32, f32, f32) {
        let (min, max) = self.aabb(position);
        (min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// True when the box has no area.
    pub fn is_empty(&self) -> bool {
        self.size.x == 0.0 || self.size.y == 0.0
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    ///
    /// Edges touching is not an overlap, and an empty box overlaps nothing.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_centered_aabb() {
        let c = BoxCollider::centered(10.0, 20.0);
        let (min, max) = c.aabb(Vector2::new(100.0, 100.0));
        assert!(approx_eq(min.x, 95.0) && approx_eq(min.y, 90.0));
        assert!(approx_eq(max.x, 105.0) && approx_eq(max.y, 110.0));
    }

    #[test]
    fn test_inset_keeps_center() {
        let c = BoxCollider::centered(100.0, 60.0).inset(20.0);
        let (min, max) = c.aabb(Vector2::zero());
        assert!(approx_eq(min.x, -30.0) && approx_eq(max.x, 30.0));
        assert!(approx_eq(min.y, -10.0) && approx_eq(max.y, 10.0));
    }

    #[test]
    fn test_inset_collapses_thin_box() {
        let c = BoxCollider::centered(30.0, 30.0).inset(20.0);
        assert!(approx_eq(c.size.x, 0.0) && approx_eq(c.size.y, 0.0));
        let (min, max) = c.aabb(Vector2::new(5.0, 5.0));
        assert!(approx_eq(min.x, 5.0) && approx_eq(max.x, 5.0));
    }

    #[test]
    fn test_scaled_centered_stays_centered() {
        let c = BoxCollider::centered(10.0, 10.0).scaled(Vector2::new(2.0, 0.5));
        let (min, max) = c.aabb(Vector2::zero());
        assert!(approx_eq(min.x, -10.0) && approx_eq(max.x, 10.0));
        assert!(approx_eq(min.y, -2.5) && approx_eq(max.y, 2.5));
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(10.0, 10.0);
        assert!(a.overlaps(Vector2::zero(), &b, Vector2::new(9.0, 0.0)));
        assert!(!a.overlaps(Vector2::zero(), &b, Vector2::new(10.0, 0.0)));
    }

    #[test]
    fn test_empty_box_never_overlaps() {
        let a = BoxCollider::centered(10.0, 10.0);
        let shrunk = BoxCollider::centered(10.0, 10.0).scaled(Vector2::zero());
        assert!(!a.overlaps(Vector2::zero(), &shrunk, Vector2::zero()));
        assert!(!a.overlaps(Vector2::zero(), &a.inset(5.0), Vector2::zero()));
    }
}
