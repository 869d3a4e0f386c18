//! Axis-aligned bounding-box overlap testing
//!
//! A pure geometric test over stored position/size - no layout measurement,
//! no rendering engine involved.

/// Axis-aligned bounding box in viewport coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// True iff the two boxes intersect.
///
/// The negation uses strict comparisons, so exactly-touching edges count as
/// an overlap; only strict separation is a miss. Symmetric, no side effects.
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    !(a.right < b.left || a.left > b.right || a.bottom < b.top || a.top > b.bottom)
}
