//! Focal point the fog orbits, derived from page layout every frame.

use crate::geometry::{Rect, Size, Vec2};

const CONTENT_ANCHOR: f64 = 0.30;
const VIEWPORT_ANCHOR: f64 = 0.38;
const OUTER_FACTOR: f64 = 1.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocalPoint {
    pub center: Vec2,
    pub outer_radius: f64,
}

impl FocalPoint {
    /// `top_bar_bottom` is 0 when there is no top bar.
    pub fn compute(viewport: Size, content: Rect, top_bar_bottom: f64, margin: f64) -> Self {
        let preferred =
            (content.y + content.height * CONTENT_ANCHOR).min(viewport.height * VIEWPORT_ANCHOR);
        let y = (top_bar_bottom + margin).max(preferred);
        Self {
            center: Vec2::new(viewport.center().x, y),
            outer_radius: viewport.max_side() * OUTER_FACTOR,
        }
    }
}
