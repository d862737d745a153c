// File: crates/guesslab-core/tests/render_frames.rs
// Purpose: Chart chrome and partial-series frames, observed through a recording surface.

use guesslab_core::surface::DrawOp;
use guesslab_core::{
    build_series, GameRecord, LineChart, PathCmd, RecordingSurface, RenderOptions, SeriesSpec, Surface, Theme,
};

fn sample_history(n: usize) -> Vec<GameRecord> {
    (0..n)
        .map(|i| GameRecord::new(Some(i % 2 == 0), Some(10.0 + i as f64), format!("2025-03-01 10:{:02}:00", i)))
        .collect()
}

fn percent_chart(n: usize) -> LineChart {
    let b = build_series(&sample_history(n));
    let theme = Theme::dark();
    LineChart::percent(
        RenderOptions::percent_chart(),
        b.labels.clone(),
        SeriesSpec::win_pct(&b, &theme),
        SeriesSpec::lose_pct(&b, &theme),
    )
}

fn dual_chart(n: usize) -> LineChart {
    let b = build_series(&sample_history(n));
    let theme = Theme::dark();
    LineChart::dual_axis(
        RenderOptions::dual_axis_chart(),
        b.labels.clone(),
        SeriesSpec::total_games(&b, &theme),
        SeriesSpec::avg_time(&b, &theme),
    )
}

#[test]
fn origin_only_bundle_draws_chrome_without_lines() {
    let b = build_series(&[]);
    let theme = Theme::dark();
    let charts = [
        LineChart::percent(
            RenderOptions::percent_chart(),
            b.labels.clone(),
            SeriesSpec::win_pct(&b, &theme),
            SeriesSpec::lose_pct(&b, &theme),
        ),
        LineChart::dual_axis(
            RenderOptions::dual_axis_chart(),
            b.labels.clone(),
            SeriesSpec::total_games(&b, &theme),
            SeriesSpec::avg_time(&b, &theme),
        ),
    ];
    for chart in &charts {
        let mut s = RecordingSurface::new(640.0, 300.0);
        chart.draw_frame(&mut s, 1.0);
        assert_eq!(s.paths().count(), 0);
        assert!(s.lines().count() >= 2, "axes still drawn");
        assert!(s.texts().any(|t| t == "0"), "origin label drawn");
    }
}

#[test]
fn percent_chrome_layout() {
    let chart = percent_chart(4);
    let mut s = RecordingSurface::new(640.0, 300.0);
    chart.draw_chrome(&mut s);

    assert!(matches!(s.ops()[0], DrawOp::Clear(_)));
    let texts: Vec<&str> = s.texts().collect();
    for tick in ["0%", "25%", "50%", "75%", "100%"] {
        assert!(texts.contains(&tick), "missing tick {tick}");
    }
    assert!(texts.contains(&"Win %"));
    assert!(texts.contains(&"Lose %"));
    assert!(texts.contains(&"10:00"));
    // 2 axis lines + 5 gridlines
    assert_eq!(s.lines().count(), 7);
    assert_eq!(s.paths().count(), 0);
}

#[test]
fn dual_axis_chrome_has_both_scales() {
    let chart = dual_chart(3);
    // totals reach 3 -> linear floor of 4; avg time reaches 11 -> nice 20
    assert_eq!(chart.left_axis().scale.max(), 4.0);
    assert_eq!(chart.right_axis().map(|a| a.scale.max()), Some(20.0));

    let mut s = RecordingSurface::new(640.0, 300.0);
    chart.draw_chrome(&mut s);
    // 3 axis lines + 5 left gridlines
    assert_eq!(s.lines().count(), 8);

    let texts: Vec<&str> = s.texts().collect();
    for tick in ["0", "5", "10", "15", "20"] {
        assert!(texts.contains(&tick), "missing right tick {tick}");
    }
    assert!(texts.contains(&"Total Games"));
    assert!(texts.contains(&"Avg Time (s)"));
}

#[test]
fn right_tick_labels_are_right_aligned() {
    let chart = dual_chart(3);
    let mut s = RecordingSurface::new(640.0, 300.0);
    chart.draw_chrome(&mut s);

    let anchor = chart.plot().right() + 45.0;
    let mut found = 0;
    for op in s.ops() {
        if let DrawOp::Text { text, x, size, .. } = op {
            if *x > chart.plot().right() {
                let w = s.measure_text(text, *size);
                assert!((x + w - anchor).abs() < 1e-3, "{text} ends at {}", x + w);
                found += 1;
            }
        }
    }
    assert_eq!(found, 5);
}

#[test]
fn frame_reveals_leading_points_only() {
    let chart = percent_chart(9); // 10 points
    let mut s = RecordingSurface::new(640.0, 300.0);

    chart.draw_frame(&mut s, 0.0);
    let (cmds, _) = s.paths().next().expect("win path");
    // two points: move + line
    assert_eq!(cmds.len(), 2);

    chart.draw_frame(&mut s, 0.5);
    let (cmds, _) = s.paths().next().expect("win path");
    assert_eq!(cmds.len(), 5);
    assert_eq!(cmds[4], PathCmd::LineTo(chart.points(0)[4]));

    chart.draw_frame(&mut s, 1.0);
    let paths: Vec<_> = s.paths().collect();
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].0.len(), 10);
    assert_eq!(paths[0].0[0], PathCmd::MoveTo(chart.points(0)[0]));
    assert_eq!(paths[0].0[9], PathCmd::LineTo(chart.points(0)[9]));
    assert_eq!(paths[0].1, Theme::dark().win);
    assert_eq!(paths[1].1, Theme::dark().lose);
}

#[test]
fn every_frame_starts_from_a_clear() {
    let chart = dual_chart(5);
    let mut s = RecordingSurface::new(640.0, 300.0);
    for t in [0.0, 0.3, 0.7, 1.0] {
        chart.draw_frame(&mut s, t);
        assert!(matches!(s.ops()[0], DrawOp::Clear(_)));
    }
    assert_eq!(s.frames(), 4);
}

#[test]
fn labels_off_keeps_swatches_only() {
    let b = build_series(&sample_history(3));
    let theme = Theme::dark();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::percent_chart() };
    let chart = LineChart::percent(opts, b.labels.clone(), SeriesSpec::win_pct(&b, &theme), SeriesSpec::lose_pct(&b, &theme));
    let mut s = RecordingSurface::new(640.0, 300.0);
    chart.draw_frame(&mut s, 1.0);
    assert_eq!(s.texts().count(), 0);
    let swatches = s.ops().iter().filter(|op| matches!(op, DrawOp::Rect { .. })).count();
    assert_eq!(swatches, 2);
}

#[test]
fn many_points_thin_the_x_labels() {
    let chart = percent_chart(30); // 31 points, step 5
    let mut s = RecordingSurface::new(640.0, 300.0);
    chart.draw_chrome(&mut s);
    let bottom = chart.plot().bottom() + 26.0;
    let x_labels = s
        .ops()
        .iter()
        .filter(|op| matches!(op, DrawOp::Text { y, .. } if (*y - bottom).abs() < 1e-3))
        .count();
    assert_eq!(x_labels, 7);
}

#[test]
fn theme_lookup_falls_back_to_dark() {
    let names: Vec<_> = guesslab_core::theme::presets().iter().map(|t| t.name).collect();
    assert_eq!(names, ["dark", "light"]);
    assert_eq!(guesslab_core::theme::find("LIGHT").name, "light");
    assert_eq!(guesslab_core::theme::find("neon").name, "dark");
}

#[test]
fn huge_counts_keep_the_left_grid_small() {
    let theme = Theme::dark();
    let labels: Vec<String> = (0..3).map(|i| i.to_string()).collect();
    let chart = LineChart::dual_axis(
        RenderOptions::dual_axis_chart(),
        labels,
        SeriesSpec::new("Total Games", theme.total_games, vec![0.0, 5e11, 1e12]),
        SeriesSpec::new("Avg Time (s)", theme.avg_time, vec![0.0, 3.0, 4.0]),
    );
    let mut s = RecordingSurface::new(640.0, 300.0);
    chart.draw_frame(&mut s, 1.0);

    // 11 left gridlines plus the three axis lines
    assert_eq!(s.lines().count(), 14);
    assert!(s.texts().any(|t| t == "1000000000000"));
}

#[test]
fn right_axis_line_only_on_dual_charts() {
    let dual = dual_chart(3);
    assert_eq!(dual.left_axis().side, guesslab_core::AxisSide::Left);
    assert_eq!(dual.right_axis().map(|a| a.side), Some(guesslab_core::AxisSide::Right));

    let vertical = |chart: &LineChart| {
        let mut s = RecordingSurface::new(640.0, 300.0);
        chart.draw_chrome(&mut s);
        s.lines().filter(|(a, b, _)| a.x == b.x).count()
    };
    assert_eq!(vertical(&percent_chart(3)), 1);
    assert_eq!(vertical(&dual), 2);
}
