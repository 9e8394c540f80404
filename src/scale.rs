//! Render-scale selection and the resulting buffer dimensions.

use crate::geometry::Size;

/// Viewport as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub size: Size,
    pub device_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_ratio: f64) -> Self {
        // A missing or bogus devicePixelRatio behaves like 1.
        let device_ratio = if device_ratio.is_finite() && device_ratio > 0.0 {
            device_ratio
        } else {
            1.0
        };
        Self {
            size: Size::new(width, height),
            device_ratio,
        }
    }
}

/// Scale chosen for the current viewport.
///
/// Supersampling is requested as `device_ratio * supersample`, then limited by
/// the pixel budget. The device ratio is a floor: the surface never renders
/// below native resolution, even when that alone overflows the budget.
pub fn render_scale(viewport: &Viewport, supersample: f64, max_pixels: f64) -> f64 {
    let desired = viewport.device_ratio * supersample;
    let by_budget = (max_pixels / viewport.size.area()).sqrt();
    viewport.device_ratio.max(desired.min(by_budget))
}

/// Per-resize rendering state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderState {
    pub viewport: Viewport,
    pub scale: f64,
}

impl RenderState {
    pub fn new(viewport: Viewport, supersample: f64, max_pixels: f64) -> Self {
        Self {
            viewport,
            scale: render_scale(&viewport, supersample, max_pixels),
        }
    }

    #[inline]
    pub fn logical(&self) -> Size {
        self.viewport.size
    }

    /// Backing buffer dimensions in physical pixels.
    pub fn buffer_size(&self) -> (u32, u32) {
        let Size { width, height } = self.viewport.size;
        (
            (width * self.scale).floor() as u32,
            (height * self.scale).floor() as u32,
        )
    }
}
