// File: crates/guesslab-core/src/axis.rs
// Summary: Vertical axis model: which side, which scale, how ticks are labelled.

use crate::scale::YScale;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Right,
}

/// Horizontal offset of left-axis tick labels from the surface edge.
pub const LEFT_LABEL_X: f32 = 10.0;
/// Right edge of right-axis tick labels, measured from the plot's right edge.
pub const RIGHT_LABEL_INSET: f32 = 45.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub side: AxisSide,
    pub scale: YScale,
}

impl Axis {
    pub fn new(side: AxisSide, scale: YScale) -> Self {
        Self { side, scale }
    }

    pub fn percent() -> Self {
        Self::new(AxisSide::Left, YScale::Percent)
    }

    /// Text drawn next to tick `i`.
    pub fn tick_label(&self, i: u32) -> String {
        let v = self.scale.tick_value(i).round();
        match self.scale {
            YScale::Percent => format!("{v}%"),
            YScale::LinearAuto { .. } | YScale::Nice { .. } => format!("{v}"),
        }
    }

    pub fn tick_labels(&self) -> Vec<String> {
        (0..=self.scale.tick_count()).map(|i| self.tick_label(i)).collect()
    }
}
