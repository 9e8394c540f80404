//! The fog animation: state, resize handling and the per-frame pipeline.

use rand::RngCore;

use crate::blob::FogLayer;
use crate::color::{Color, RadialGradient};
use crate::config::FogConfig;
use crate::focal::FocalPoint;
use crate::geometry::Rect;
use crate::noise::NoiseTile;
use crate::scale::{RenderState, Viewport};
use crate::surface::{Composite, Surface};

const BACKGROUND_INNER: f64 = 0.02;
const MASK_INNER: f64 = 0.18;
const NOISE_ALPHA: f64 = 0.06;

/// Layout geometry sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageLayout {
    /// Bounding box of the content element.
    pub content: Rect,
    /// Bottom edge of the top bar, if the page has one.
    pub top_bar_bottom: Option<f64>,
}

impl PageLayout {
    #[inline]
    fn top(&self) -> f64 {
        self.top_bar_bottom.unwrap_or(0.0)
    }
}

pub struct FogRenderer<S: Surface, R: RngCore> {
    surface: S,
    rng: R,
    config: FogConfig,
    state: RenderState,
    blue: FogLayer,
    green: FogLayer,
    noise: Option<S::Pattern>,
    noise_edge: u32,
    time: f64,
}

impl<S: Surface, R: RngCore> FogRenderer<S, R> {
    /// Build both blob populations and size the surface for `viewport`.
    pub fn new(
        surface: S,
        viewport: Viewport,
        config: FogConfig,
        mut rng: R,
    ) -> Result<Self, S::Error> {
        let blue = FogLayer::blue(&mut rng);
        let green = FogLayer::green(&mut rng);
        let state = RenderState::new(viewport, config.supersample, config.max_render_pixels);
        let mut renderer = Self {
            surface,
            rng,
            config,
            state,
            blue,
            green,
            noise: None,
            noise_edge: 0,
            time: 0.0,
        };
        renderer.on_resize(viewport)?;
        Ok(renderer)
    }

    /// Recompute the render scale, reallocate the surface and rebuild the
    /// dither tile, whose size follows the scale.
    pub fn on_resize(&mut self, viewport: Viewport) -> Result<(), S::Error> {
        self.state = RenderState::new(
            viewport,
            self.config.supersample,
            self.config.max_render_pixels,
        );
        self.surface.configure(self.state.logical(), self.state.scale)?;

        let tile = NoiseTile::generate(self.state.scale, &mut self.rng);
        self.noise_edge = tile.edge();
        self.noise = self.surface.create_pattern(&tile)?;

        let (bw, bh) = self.state.buffer_size();
        log::debug!(
            "fog resized to {}x{} @ {:.3} ({bw}x{bh}), noise tile {}",
            viewport.size.width,
            viewport.size.height,
            self.state.scale,
            self.noise_edge
        );
        Ok(())
    }

    /// Paint one frame and advance the animation.
    pub fn render_frame(&mut self, layout: &PageLayout) -> Result<(), S::Error> {
        let size = self.state.logical();
        let full = Rect::from_size(size);
        self.surface.clear_rect(full)?;

        let focal = FocalPoint::compute(
            size,
            layout.content,
            layout.top(),
            self.config.top_bar_margin,
        );
        let below_bar = Rect::below(size, layout.top());

        self.surface.save()?;
        self.surface.clip_rect(below_bar)?;

        let base = RadialGradient::concentric(
            focal.center,
            focal.outer_radius * BACKGROUND_INNER,
            size.max_side(),
        )
        .stop(0.0, Color::rgba(0, 0, 0, 0.62))
        .stop(1.0, Color::rgba(0, 0, 0, 1.0));
        self.surface.set_composite(Composite::SourceOver)?;
        self.surface.fill_rect(full, &base)?;

        self.surface.set_composite(Composite::Screen)?;
        paint_layer(&mut self.surface, &mut self.blue, &focal, self.time)?;
        paint_layer(&mut self.surface, &mut self.green, &focal, self.time)?;

        self.surface.save()?;
        self.surface.set_composite(Composite::DestinationIn)?;
        let mask = RadialGradient::concentric(
            focal.center,
            focal.outer_radius * MASK_INNER,
            focal.outer_radius,
        )
        .stop(0.0, Color::rgba(255, 255, 255, 1.0))
        .stop(1.0, Color::rgba(255, 255, 255, 0.0));
        self.surface.fill_rect(full, &mask)?;
        self.surface.restore()?;

        if let Some(pattern) = &self.noise {
            self.surface.save()?;
            self.surface.set_composite(Composite::SoftLight)?;
            self.surface.set_global_alpha(NOISE_ALPHA)?;
            self.surface.fill_rect_pattern(below_bar, pattern)?;
            self.surface.restore()?;
        }

        self.surface.restore()?;
        self.time += self.config.time_step;
        Ok(())
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn blue(&self) -> &FogLayer {
        &self.blue
    }

    pub fn green(&self) -> &FogLayer {
        &self.green
    }

    /// Edge of the current dither tile in pixels.
    pub fn noise_edge(&self) -> u32 {
        self.noise_edge
    }

    /// Global animation time.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

fn paint_layer<S: Surface>(
    surface: &mut S,
    layer: &mut FogLayer,
    focal: &FocalPoint,
    t: f64,
) -> Result<(), S::Error> {
    let style = layer.style;
    surface.save()?;
    surface.set_global_alpha(style.alpha)?;
    for blob in layer.blobs_mut() {
        blob.advance();
        let at = blob.position(focal.center, t);
        let gradient = style.gradient(blob, at);
        surface.fill_circle(at, blob.visible_radius, &gradient)?;
    }
    surface.restore()
}
