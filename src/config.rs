//! Tunables for the fog background.

/// Cap on physical pixels so very large displays don't allocate huge buffers.
pub const MAX_RENDER_PIXELS: f64 = 3840.0 * 2160.0 * 2.0;

const MAX_SUPERSAMPLE: f64 = 4.0;

#[derive(Clone, Debug, PartialEq)]
pub struct FogConfig {
    /// 1 = native resolution, 2 = high quality.
    pub supersample: f64,
    pub max_render_pixels: f64,
    /// Global time advance per frame, drives the radial pulsation.
    pub time_step: f64,
    /// Parallax multiplier applied to the normalized pointer offset.
    pub parallax_strength: f64,
    /// Minimum gap between the top bar and the focal point.
    pub top_bar_margin: f64,
    /// Seed for blob and noise generation; `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            supersample: 2.0,
            max_render_pixels: MAX_RENDER_PIXELS,
            time_step: 0.0045,
            parallax_strength: 4.0,
            top_bar_margin: 20.0,
            seed: None,
        }
    }
}

impl FogConfig {
    /// Apply string overrides, typically read from `data-*` attributes.
    /// Malformed or non-positive values are ignored.
    pub fn with_overrides(
        mut self,
        supersample: Option<&str>,
        max_pixels: Option<&str>,
        seed: Option<&str>,
    ) -> Self {
        if let Some(raw) = supersample {
            match parse_positive(raw) {
                Some(v) => self.supersample = v.clamp(1.0, MAX_SUPERSAMPLE),
                None => log::warn!("ignoring invalid supersample {raw:?}"),
            }
        }
        if let Some(raw) = max_pixels {
            match parse_positive(raw) {
                Some(v) => self.max_render_pixels = v,
                None => log::warn!("ignoring invalid max pixel budget {raw:?}"),
            }
        }
        if let Some(raw) = seed {
            match raw.trim().parse::<u64>() {
                Ok(v) => self.seed = Some(v),
                Err(_) => log::warn!("ignoring invalid seed {raw:?}"),
            }
        }
        self
    }
}

fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}
