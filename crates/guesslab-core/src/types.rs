// File: crates/guesslab-core/src/types.rs
// Summary: Shared types and constants (surface size, chart paddings).

/// Default surface width in pixels.
pub const WIDTH: i32 = 640;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 300;

/// Padding between the surface edge and the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Single-axis percentage chart: room for "100%" on the left only.
    pub const fn percent_chart() -> Self {
        Self::new(55, 15, 26, 40)
    }
    /// Dual-axis chart: tick labels on both sides.
    pub const fn dual_axis_chart() -> Self {
        Self::new(55, 55, 26, 40)
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::percent_chart()
    }
}
