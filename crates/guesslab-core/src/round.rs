// File: crates/guesslab-core/src/round.rs
// Summary: Decimal rounding used for every displayed statistic.

/// Round `value` to `decimals` places, half away from zero.
///
/// The value is scaled by `10^decimals` and passed through [`f64::round`],
/// so `0.25` at one decimal becomes `0.3` and `-0.25` becomes `-0.3`.
/// Non-finite input is returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// One-decimal rounding, the precision of every percentage and average.
#[inline]
pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}
