//! The 2D drawing surface the fog paints onto.
//!
//! All coordinates are logical; implementations map them to the backing
//! buffer through the scale installed by [`Surface::configure`].

use crate::color::RadialGradient;
use crate::geometry::{Rect, Size, Vec2};
use crate::noise::NoiseTile;

/// Compositing modes the fog needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Composite {
    SourceOver,
    Screen,
    DestinationIn,
    SoftLight,
}

impl Composite {
    /// Name as accepted by `globalCompositeOperation`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Composite::SourceOver => "source-over",
            Composite::Screen => "screen",
            Composite::DestinationIn => "destination-in",
            Composite::SoftLight => "soft-light",
        }
    }
}

pub trait Surface {
    type Error;
    /// A repeating fill built from a [`NoiseTile`].
    type Pattern;

    /// Allocate `floor(logical * scale)` physical pixels and install a
    /// uniform `scale` transform with high quality smoothing.
    fn configure(&mut self, logical: Size, scale: f64) -> Result<(), Self::Error>;

    fn clear_rect(&mut self, rect: Rect) -> Result<(), Self::Error>;

    fn save(&mut self) -> Result<(), Self::Error>;

    fn restore(&mut self) -> Result<(), Self::Error>;

    /// Intersect the clip region with `rect` until the matching `restore`.
    fn clip_rect(&mut self, rect: Rect) -> Result<(), Self::Error>;

    fn set_composite(&mut self, op: Composite) -> Result<(), Self::Error>;

    fn set_global_alpha(&mut self, alpha: f64) -> Result<(), Self::Error>;

    fn fill_rect(&mut self, rect: Rect, gradient: &RadialGradient) -> Result<(), Self::Error>;

    fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f64,
        gradient: &RadialGradient,
    ) -> Result<(), Self::Error>;

    /// `None` when the host cannot build a pattern; the overlay is then skipped.
    fn create_pattern(&mut self, tile: &NoiseTile)
        -> Result<Option<Self::Pattern>, Self::Error>;

    fn fill_rect_pattern(&mut self, rect: Rect, pattern: &Self::Pattern)
        -> Result<(), Self::Error>;
}
