// File: crates/guesslab-core/src/scale.rs
// Summary: Vertical value scales (fixed percentage, linear auto, "nice" auto).

use crate::geometry::PlotArea;

/// Tick intervals used by the percentage and nice scales.
pub const FIXED_TICKS: u32 = 4;
/// Smallest maximum of a linear auto scale.
pub const LINEAR_MIN_MAX: f64 = 4.0;
/// Most tick intervals a linear auto scale draws; up to this max every unit gets a tick.
pub const LINEAR_MAX_TICKS: u32 = 10;

/// Round `max` up to `{1, 2, 5, 10} x 10^k`, never below 1.
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 1.0 {
        return 1.0;
    }
    let pow = 10f64.powi(max.log10().floor() as i32);
    let n = max / pow;
    let nice = if n <= 1.0 {
        1.0
    } else if n <= 2.0 {
        2.0
    } else if n <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * pow
}

/// Ceiling of `max`, floored at [`LINEAR_MIN_MAX`]. Past [`LINEAR_MAX_TICKS`]
/// the result is rounded up to a whole number of [`linear_step`]s.
pub fn linear_auto_max(max: f64) -> f64 {
    if !max.is_finite() {
        return LINEAR_MIN_MAX;
    }
    let max = max.ceil().max(LINEAR_MIN_MAX);
    let step = linear_step(max);
    let snapped = (max / step).ceil() * step;
    if snapped.is_finite() { snapped } else { max }
}

/// Tick spacing of a linear auto axis: 1 for small maxima, else a 1/2/5 step
/// keeping the interval count at or under [`LINEAR_MAX_TICKS`].
pub fn linear_step(max: f64) -> f64 {
    let limit = LINEAR_MAX_TICKS as f64;
    if !max.is_finite() || max <= limit {
        1.0
    } else {
        nice_max(max / limit)
    }
}

/// Largest value in `values`, but never below zero.
pub fn observed_max(values: &[f64]) -> f64 {
    values.iter().copied().filter(|v| v.is_finite()).fold(0.0, f64::max)
}

/// Vertical scale policy of one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum YScale {
    /// Fixed 0..100 domain with ticks every 25.
    Percent,
    /// Integer ceiling of the data; one tick per unit while small, 1/2/5 steps beyond.
    LinearAuto { max: f64 },
    /// Data max rounded up to a 1/2/5 step, four ticks.
    Nice { max: f64 },
}

impl YScale {
    pub fn linear_auto(values: &[f64]) -> Self {
        YScale::LinearAuto { max: linear_auto_max(observed_max(values)) }
    }

    pub fn nice(values: &[f64]) -> Self {
        YScale::Nice { max: nice_max(observed_max(values).max(1.0)) }
    }

    pub fn max(&self) -> f64 {
        match *self {
            YScale::Percent => 100.0,
            YScale::LinearAuto { max } | YScale::Nice { max } => max,
        }
    }

    /// Number of tick intervals; ticks are drawn at `0..=tick_count()`.
    pub fn tick_count(&self) -> u32 {
        match *self {
            YScale::Percent | YScale::Nice { .. } => FIXED_TICKS,
            YScale::LinearAuto { max } => {
                (max / linear_step(max)).ceil().clamp(1.0, LINEAR_MAX_TICKS as f64) as u32
            }
        }
    }

    /// Data value at tick `i`.
    pub fn tick_value(&self, i: u32) -> f64 {
        self.max() / self.tick_count().max(1) as f64 * i as f64
    }

    /// Map a data value to a y pixel inside `plot`.
    #[inline]
    pub fn to_px(&self, v: f64, plot: &PlotArea) -> f32 {
        plot.y_at_fraction(v / self.max())
    }
}
