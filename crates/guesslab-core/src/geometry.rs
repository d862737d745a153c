// File: crates/guesslab-core/src/geometry.rs
// Summary: Plot-area pixel math shared by every chart kind.

use crate::types::Insets;

/// A point in surface pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SeriesPoint {
    pub x: f32,
    pub y: f32,
}

impl SeriesPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Axis-aligned rectangle, left/top origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }
}

/// The region inside the paddings where series are plotted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl PlotArea {
    /// Plot area for a `width` x `height` surface; negative extents clamp to zero.
    pub fn new(width: f32, height: f32, insets: &Insets) -> Self {
        Self {
            left: insets.left as f32,
            top: insets.top as f32,
            width: (width - insets.hsum() as f32).max(0.0),
            height: (height - insets.vsum() as f32).max(0.0),
        }
    }

    pub fn right(&self) -> f32 { self.left + self.width }
    pub fn bottom(&self) -> f32 { self.top + self.height }

    /// X for index `i` of `n` evenly spaced points.
    #[inline]
    pub fn x_at(&self, i: usize, n: usize) -> f32 {
        let denom = n.saturating_sub(1).max(1) as f32;
        self.left + (i as f32 / denom) * self.width
    }

    /// Y for a fraction of the plot height measured from the bottom.
    #[inline]
    pub fn y_at_fraction(&self, frac: f64) -> f32 {
        self.top + self.height - (frac as f32) * self.height
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
