// File: crates/guesslab-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Maximum number of x labels drawn before thinning kicks in.
pub const MAX_X_LABELS: usize = 6;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Stride between labelled x positions for `n` points.
#[inline]
pub fn label_step(n: usize) -> usize {
    (n / MAX_X_LABELS).max(1)
}

/// Indices of the points that get an x label.
pub fn label_indices(n: usize) -> impl Iterator<Item = usize> {
    (0..n).step_by(label_step(n))
}
