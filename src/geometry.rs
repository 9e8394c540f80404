//! Small value types for logical (CSS pixel) coordinates.

/// A 2D point or offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height in logical units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Pixel area, never less than one so it can safely divide.
    #[inline]
    pub fn area(&self) -> f64 {
        (self.width * self.height).max(1.0)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn max_side(&self) -> f64 {
        self.width.max(self.height)
    }
}

/// Axis-aligned rectangle, origin at top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// The part of the viewport below a horizontal line at `top`.
    pub fn below(size: Size, top: f64) -> Self {
        Self::new(0.0, top, size.width, (size.height - top).max(0.0))
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}
