// File: crates/guesslab-core/src/smooth.rs
// Summary: Midpoint quadratic smoothing and partial reveal of a point series.

use crate::geometry::{clamp, SeriesPoint};

/// One segment of a stroked path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(SeriesPoint),
    QuadTo { ctrl: SeriesPoint, to: SeriesPoint },
    LineTo(SeriesPoint),
}

/// Build a single smoothed stroke through `points`.
///
/// Every interior point becomes the control of a quadratic curve ending at
/// the midpoint to its successor; the first and last points are hit exactly.
/// Fewer than two points produce no path.
pub fn smooth_path(points: &[SeriesPoint]) -> Vec<PathCmd> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    let mut cmds = Vec::with_capacity(n);
    cmds.push(PathCmd::MoveTo(points[0]));
    for w in points[1..].windows(2) {
        cmds.push(PathCmd::QuadTo { ctrl: w[0], to: w[0].midpoint(w[1]) });
    }
    cmds.push(PathCmd::LineTo(points[n - 1]));
    cmds
}

/// Leading points visible at eased progress `t`: `max(2, floor(n * t))`, at most `n`.
pub fn reveal_count(n: usize, t: f64) -> usize {
    let t = clamp(t, 0.0, 1.0);
    ((n as f64 * t).floor() as usize).max(2).min(n)
}

/// Smoothed stroke of the first [`reveal_count`] points.
pub fn partial_path(points: &[SeriesPoint], t: f64) -> Vec<PathCmd> {
    if points.len() < 2 {
        return Vec::new();
    }
    smooth_path(&points[..reveal_count(points.len(), t)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> SeriesPoint { SeriesPoint::new(x, y) }

    #[test]
    fn two_points_is_a_straight_line() {
        let cmds = smooth_path(&[p(0.0, 0.0), p(10.0, 10.0)]);
        assert_eq!(cmds, vec![PathCmd::MoveTo(p(0.0, 0.0)), PathCmd::LineTo(p(10.0, 10.0))]);
    }

    #[test]
    fn interior_points_become_controls() {
        let pts = [p(0.0, 0.0), p(10.0, 20.0), p(20.0, 0.0), p(30.0, 10.0)];
        let cmds = smooth_path(&pts);
        assert_eq!(cmds.len(), 4);
        assert_eq!(cmds[1], PathCmd::QuadTo { ctrl: p(10.0, 20.0), to: p(15.0, 10.0) });
        assert_eq!(cmds[2], PathCmd::QuadTo { ctrl: p(20.0, 0.0), to: p(25.0, 5.0) });
        assert_eq!(cmds[3], PathCmd::LineTo(p(30.0, 10.0)));
    }

    #[test]
    fn below_two_points_draws_nothing() {
        assert!(smooth_path(&[]).is_empty());
        assert!(smooth_path(&[p(1.0, 1.0)]).is_empty());
        assert!(partial_path(&[p(1.0, 1.0)], 1.0).is_empty());
    }

    #[test]
    fn reveal_never_below_two() {
        assert_eq!(reveal_count(10, 0.0), 2);
        assert_eq!(reveal_count(10, 0.55), 5);
        assert_eq!(reveal_count(10, 1.0), 10);
        assert_eq!(reveal_count(2, 0.1), 2);
    }
}
