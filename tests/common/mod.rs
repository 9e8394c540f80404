#![allow(dead_code)]

use fog_wasm::color::RadialGradient;
use fog_wasm::noise::NoiseTile;
use fog_wasm::{Composite, FogConfig, FogRenderer, Rect, Size, Surface, Vec2, Viewport};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Configure(Size, f64),
    Clear(Rect),
    Save,
    Restore,
    Clip(Rect),
    Composite(Composite),
    Alpha(f64),
    FillRect(Rect, RadialGradient),
    FillCircle(Vec2, f64, RadialGradient),
    FillPattern(Rect, u32),
}

/// Surface double that records every call.
#[derive(Debug, Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
    pub buffer: (u32, u32),
    pub patterns_built: usize,
    pub without_patterns: bool,
    pub fail_on_circle: bool,
}

impl Surface for Recorder {
    type Error = String;
    /// Edge of the tile the pattern was built from.
    type Pattern = u32;

    fn configure(&mut self, logical: Size, scale: f64) -> Result<(), String> {
        self.buffer = (
            (logical.width * scale).floor() as u32,
            (logical.height * scale).floor() as u32,
        );
        self.ops.push(Op::Configure(logical, scale));
        Ok(())
    }

    fn clear_rect(&mut self, rect: Rect) -> Result<(), String> {
        self.ops.push(Op::Clear(rect));
        Ok(())
    }

    fn save(&mut self) -> Result<(), String> {
        self.ops.push(Op::Save);
        Ok(())
    }

    fn restore(&mut self) -> Result<(), String> {
        self.ops.push(Op::Restore);
        Ok(())
    }

    fn clip_rect(&mut self, rect: Rect) -> Result<(), String> {
        self.ops.push(Op::Clip(rect));
        Ok(())
    }

    fn set_composite(&mut self, op: Composite) -> Result<(), String> {
        self.ops.push(Op::Composite(op));
        Ok(())
    }

    fn set_global_alpha(&mut self, alpha: f64) -> Result<(), String> {
        self.ops.push(Op::Alpha(alpha));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, gradient: &RadialGradient) -> Result<(), String> {
        self.ops.push(Op::FillRect(rect, gradient.clone()));
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, gradient: &RadialGradient) -> Result<(), String> {
        if self.fail_on_circle {
            return Err("circle rejected".into());
        }
        self.ops.push(Op::FillCircle(center, radius, gradient.clone()));
        Ok(())
    }

    fn create_pattern(&mut self, tile: &NoiseTile) -> Result<Option<u32>, String> {
        if self.without_patterns {
            return Ok(None);
        }
        self.patterns_built += 1;
        Ok(Some(tile.edge()))
    }

    fn fill_rect_pattern(&mut self, rect: Rect, pattern: &u32) -> Result<(), String> {
        self.ops.push(Op::FillPattern(rect, *pattern));
        Ok(())
    }
}

pub fn rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

pub fn renderer(
    surface: Recorder,
    viewport: Viewport,
    seed: u64,
) -> FogRenderer<Recorder, Xoshiro256PlusPlus> {
    FogRenderer::new(surface, viewport, FogConfig::default(), rng(seed)).unwrap()
}

pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}
