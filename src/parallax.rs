//! Pointer-driven vignette offset.

use crate::geometry::{Size, Vec2};

/// Offset for a pointer at `pointer` in a viewport of `viewport`.
///
/// Zero at the center, `±strength / 2` at the edges.
pub fn offset(pointer: Vec2, viewport: Size, strength: f64) -> Vec2 {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (pointer.x / viewport.width - 0.5) * strength,
        (pointer.y / viewport.height - 0.5) * strength,
    )
}

/// CSS transform value for an offset.
pub fn transform(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}
