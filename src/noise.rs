//! Tileable grayscale dither texture.

use rand::RngCore;

const MIN_TILE: u32 = 64;
const TILE_PER_SCALE: f64 = 128.0;

/// Square RGBA tile of uniform random gray values, fully opaque.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseTile {
    edge: u32,
    rgba: Vec<u8>,
}

/// Edge length for a given render scale.
pub fn tile_edge(scale: f64) -> u32 {
    MIN_TILE.max((TILE_PER_SCALE * scale).floor() as u32)
}

impl NoiseTile {
    pub fn generate<R: RngCore + ?Sized>(scale: f64, rng: &mut R) -> Self {
        let edge = tile_edge(scale);
        let mut rgba = vec![0u8; (edge * edge * 4) as usize];
        for px in rgba.chunks_exact_mut(4) {
            let v = (rng.next_u32() >> 24) as u8;
            px[..3].fill(v);
            px[3] = 255;
        }
        Self { edge, rgba }
    }

    #[inline]
    pub fn edge(&self) -> u32 {
        self.edge
    }

    /// Pixel data in row-major RGBA order.
    #[inline]
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}
