//! [`Surface`] over a 2D canvas context.

use std::f64::consts::TAU;

use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{
    CanvasGradient, CanvasPattern, CanvasRenderingContext2d, Document, HtmlCanvasElement,
    ImageData,
};

use crate::color::RadialGradient;
use crate::geometry::{Rect, Size, Vec2};
use crate::noise::NoiseTile;
use crate::surface::{Composite, Surface};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    document: Document,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, document: Document) -> Result<Self, JsValue> {
        let ctx = context_2d(&canvas)?;
        Ok(Self { canvas, ctx, document })
    }

    fn gradient(&self, g: &RadialGradient) -> Result<CanvasGradient, JsValue> {
        let out = self.ctx.create_radial_gradient(
            g.inner_center.x,
            g.inner_center.y,
            g.inner_radius,
            g.outer_center.x,
            g.outer_center.y,
            g.outer_radius,
        )?;
        for stop in &g.stops {
            out.add_color_stop(stop.offset as f32, &stop.color.to_string())?;
        }
        Ok(out)
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    Ok(canvas
        .get_context("2d")?
        .ok_or("2D canvas not supported")?
        .dyn_into()?)
}

impl Surface for CanvasSurface {
    type Error = JsValue;
    type Pattern = CanvasPattern;

    fn configure(&mut self, logical: Size, scale: f64) -> Result<(), JsValue> {
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", logical.width))?;
        style.set_property("height", &format!("{}px", logical.height))?;

        self.canvas.set_width((logical.width * scale).floor() as u32);
        self.canvas.set_height((logical.height * scale).floor() as u32);
        // Resizing the canvas resets its state, so the transform goes on after.
        self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0)?;
        self.ctx.set_image_smoothing_enabled(true);
        js_sys::Reflect::set(
            &self.ctx,
            &JsValue::from_str("imageSmoothingQuality"),
            &JsValue::from_str("high"),
        )?;
        Ok(())
    }

    fn clear_rect(&mut self, r: Rect) -> Result<(), JsValue> {
        self.ctx.clear_rect(r.x, r.y, r.width, r.height);
        Ok(())
    }

    fn save(&mut self) -> Result<(), JsValue> {
        self.ctx.save();
        Ok(())
    }

    fn restore(&mut self) -> Result<(), JsValue> {
        self.ctx.restore();
        Ok(())
    }

    fn clip_rect(&mut self, r: Rect) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.rect(r.x, r.y, r.width, r.height);
        self.ctx.clip();
        Ok(())
    }

    fn set_composite(&mut self, op: Composite) -> Result<(), JsValue> {
        self.ctx.set_global_composite_operation(op.as_str())
    }

    fn set_global_alpha(&mut self, alpha: f64) -> Result<(), JsValue> {
        self.ctx.set_global_alpha(alpha);
        Ok(())
    }

    fn fill_rect(&mut self, r: Rect, gradient: &RadialGradient) -> Result<(), JsValue> {
        let g = self.gradient(gradient)?;
        self.ctx.set_fill_style_canvas_gradient(&g);
        self.ctx.fill_rect(r.x, r.y, r.width, r.height);
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f64,
        gradient: &RadialGradient,
    ) -> Result<(), JsValue> {
        let g = self.gradient(gradient)?;
        self.ctx.set_fill_style_canvas_gradient(&g);
        self.ctx.begin_path();
        self.ctx.arc(center.x, center.y, radius, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }

    fn create_pattern(&mut self, tile: &NoiseTile) -> Result<Option<CanvasPattern>, JsValue> {
        let offscreen: HtmlCanvasElement = self.document.create_element("canvas")?.dyn_into()?;
        offscreen.set_width(tile.edge());
        offscreen.set_height(tile.edge());
        let image = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(tile.rgba()),
            tile.edge(),
            tile.edge(),
        )?;
        context_2d(&offscreen)?.put_image_data(&image, 0.0, 0.0)?;
        self.ctx.create_pattern_with_html_canvas_element(&offscreen, "repeat")
    }

    fn fill_rect_pattern(&mut self, r: Rect, pattern: &CanvasPattern) -> Result<(), JsValue> {
        self.ctx.set_fill_style_canvas_pattern(pattern);
        self.ctx.fill_rect(r.x, r.y, r.width, r.height);
        Ok(())
    }
}
