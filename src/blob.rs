//! Orbiting fog particles and the two fog layers built from them.

use std::f64::consts::TAU;
use std::ops::Range;

use rand::Rng;

use crate::color::{Color, RadialGradient};
use crate::geometry::Vec2;

pub const BLUE_BLOBS: usize = 160;
pub const GREEN_BLOBS: usize = 57;

/// Scales every angular velocity; larger is faster.
pub const SPEED_MULTIPLIER: f64 = 2.2;

const BASE_OMEGA: f64 = 0.00315;
const MID_STOP: f64 = 0.55;

/// A soft circular gradient orbiting the focal point.
#[derive(Clone, Debug, PartialEq)]
pub struct Blob {
    /// Orbital angle in radians. Never normalized; trig wraps it.
    pub theta: f64,
    pub base_radius: f64,
    pub noise_amp: f64,
    pub noise_phase: f64,
    /// Radians per frame, signed.
    pub omega: f64,
    /// Radius of the painted disc.
    pub visible_radius: f64,
    pub hue: f64,
}

/// Ranges blobs of one layer are drawn from.
#[derive(Clone, Debug, PartialEq)]
pub struct BlobSpec {
    pub base_radius: Range<f64>,
    pub noise_amp: Range<f64>,
    /// Extra speed on top of the shared base angular velocity.
    pub omega_jitter: f64,
    pub visible_radius: Range<f64>,
    pub hue: Range<f64>,
}

fn lerp(range: &Range<f64>, u: f64) -> f64 {
    range.start + u * (range.end - range.start)
}

impl Blob {
    pub fn random<R: Rng + ?Sized>(spec: &BlobSpec, rng: &mut R) -> Self {
        let theta = rng.random::<f64>() * TAU;
        let base_radius = lerp(&spec.base_radius, rng.random());
        let noise_amp = lerp(&spec.noise_amp, rng.random());
        let noise_phase = rng.random::<f64>() * TAU;
        let speed = BASE_OMEGA + rng.random::<f64>() * spec.omega_jitter;
        let sign = if rng.random_bool(0.5) { -1.0 } else { 1.0 };
        let visible_radius = lerp(&spec.visible_radius, rng.random());
        let hue = lerp(&spec.hue, rng.random());
        Self {
            theta,
            base_radius,
            noise_amp,
            noise_phase,
            omega: speed * sign * SPEED_MULTIPLIER,
            visible_radius,
            hue,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.theta += self.omega;
    }

    /// Orbit radius at global time `t`.
    #[inline]
    pub fn radius_at(&self, t: f64) -> f64 {
        self.base_radius + (t + self.noise_phase).sin() * self.noise_amp
    }

    pub fn position(&self, focal: Vec2, t: f64) -> Vec2 {
        let r = self.radius_at(t);
        Vec2::new(focal.x + self.theta.cos() * r, focal.y + self.theta.sin() * r)
    }
}

/// Gradient stops of a layer, expressed around each blob's hue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerStyle {
    /// Global alpha the whole layer is composited with.
    pub alpha: f64,
    /// (lightness %, alpha) at the core.
    pub core: (f64, f64),
    /// (lightness %, alpha) at the mid stop.
    pub mid: (f64, f64),
    pub edge: Color,
}

impl LayerStyle {
    pub fn gradient(&self, blob: &Blob, at: Vec2) -> RadialGradient {
        RadialGradient::concentric(at, 0.0, blob.visible_radius)
            .stop(0.0, Color::hsla(blob.hue, 100.0, self.core.0, self.core.1))
            .stop(MID_STOP, Color::hsla(blob.hue, 100.0, self.mid.0, self.mid.1))
            .stop(1.0, self.edge)
    }
}

/// A fixed-size population of blobs painted with one style.
#[derive(Clone, Debug)]
pub struct FogLayer {
    pub style: LayerStyle,
    blobs: Vec<Blob>,
}

impl FogLayer {
    pub fn generate<R: Rng + ?Sized>(
        count: usize,
        spec: &BlobSpec,
        style: LayerStyle,
        rng: &mut R,
    ) -> Self {
        let blobs = (0..count).map(|_| Blob::random(spec, rng)).collect();
        Self { style, blobs }
    }

    pub fn blue<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let spec = BlobSpec {
            base_radius: 250.0..560.0,
            noise_amp: 12.0..46.0,
            omega_jitter: 0.0005,
            visible_radius: 160.0..380.0,
            hue: 205.0..225.0,
        };
        let style = LayerStyle {
            alpha: 0.05,
            core: (60.0, 0.7),
            mid: (52.0, 0.12),
            edge: Color::rgba(0, 0, 0, 0.0),
        };
        Self::generate(BLUE_BLOBS, &spec, style, rng)
    }

    pub fn green<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let spec = BlobSpec {
            base_radius: 200.0..460.0,
            noise_amp: 14.0..50.0,
            omega_jitter: 0.001,
            visible_radius: 160.0..380.0,
            hue: 150.0..158.0,
        };
        let style = LayerStyle {
            alpha: 0.1,
            core: (60.0, 0.30),
            mid: (48.0, 0.10),
            edge: Color::rgba(34, 148, 123, 0.0),
        };
        Self::generate(GREEN_BLOBS, &spec, style, rng)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub(crate) fn blobs_mut(&mut self) -> &mut [Blob] {
        &mut self.blobs
    }
}
