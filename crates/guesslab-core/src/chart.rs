// File: crates/guesslab-core/src/chart.rs
// Summary: Percentage and dual-axis line charts: layout, chrome, partial series frames.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::axis::{Axis, AxisSide, LEFT_LABEL_X, RIGHT_LABEL_INSET};
use crate::geometry::{PlotArea, Rect, SeriesPoint};
use crate::grid::{label_indices, linspace};
use crate::history::TimeSeriesBundle;
use crate::scale::YScale;
use crate::smooth::partial_path;
use crate::surface::{SkiaSurface, Surface};
use crate::text::LABEL_SIZE;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

const AXIS_WIDTH: f32 = 1.0;
const SERIES_WIDTH: f32 = 2.0;
const SWATCH: f32 = 10.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Skip all text; keeps pixel snapshots independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn percent_chart() -> Self {
        Self { insets: Insets::percent_chart(), ..Self::default() }
    }

    pub fn dual_axis_chart() -> Self {
        Self { insets: Insets::dual_axis_chart(), ..Self::default() }
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// A named, coloured sequence of values to plot.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSpec {
    pub name: String,
    pub color: skia::Color,
    pub values: Vec<f64>,
}

impl SeriesSpec {
    pub fn new(name: impl Into<String>, color: skia::Color, values: Vec<f64>) -> Self {
        Self { name: name.into(), color, values }
    }

    pub fn win_pct(bundle: &TimeSeriesBundle, theme: &Theme) -> Self {
        Self::new("Win %", theme.win, bundle.win_pct.clone())
    }

    pub fn lose_pct(bundle: &TimeSeriesBundle, theme: &Theme) -> Self {
        Self::new("Lose %", theme.lose, bundle.lose_pct.clone())
    }

    pub fn total_games(bundle: &TimeSeriesBundle, theme: &Theme) -> Self {
        Self::new("Total Games", theme.total_games, bundle.total_games.clone())
    }

    pub fn avg_time(bundle: &TimeSeriesBundle, theme: &Theme) -> Self {
        Self::new("Avg Time (s)", theme.avg_time, bundle.avg_time.clone())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    /// Two series on one fixed 0..100 axis.
    Percent,
    /// Two independently scaled axes sharing the x axis.
    DualAxis,
}

impl ChartKind {
    /// Horizontal distance between legend entries.
    fn legend_gap(self) -> f32 {
        match self {
            ChartKind::Percent => 90.0,
            ChartKind::DualAxis => 130.0,
        }
    }
}

#[derive(Clone, Debug)]
struct PlottedSeries {
    spec: SeriesSpec,
    points: Vec<SeriesPoint>,
}

/// A chart with its pixel layout resolved, ready to draw at any reveal progress.
#[derive(Clone, Debug)]
pub struct LineChart {
    kind: ChartKind,
    opts: RenderOptions,
    plot: PlotArea,
    labels: Vec<String>,
    left_axis: Axis,
    right_axis: Option<Axis>,
    series: Vec<PlottedSeries>,
}

impl LineChart {
    /// Win/lose percentages on a shared 0..100 axis.
    pub fn percent(opts: RenderOptions, labels: Vec<String>, win: SeriesSpec, lose: SeriesSpec) -> Self {
        let plot = Self::plot_area(&opts);
        let axis = Axis::percent();
        let n = labels.len();
        let series = vec![
            Self::plot_series(win, &axis.scale, &plot, n),
            Self::plot_series(lose, &axis.scale, &plot, n),
        ];
        Self { kind: ChartKind::Percent, opts, plot, labels, left_axis: axis, right_axis: None, series }
    }

    /// A count-like series on a linear left axis and a measurement on a nice right axis.
    pub fn dual_axis(opts: RenderOptions, labels: Vec<String>, left: SeriesSpec, right: SeriesSpec) -> Self {
        let plot = Self::plot_area(&opts);
        let left_axis = Axis::new(AxisSide::Left, YScale::linear_auto(&left.values));
        let right_axis = Axis::new(AxisSide::Right, YScale::nice(&right.values));
        let n = labels.len();
        let series = vec![
            Self::plot_series(left, &left_axis.scale, &plot, n),
            Self::plot_series(right, &right_axis.scale, &plot, n),
        ];
        Self { kind: ChartKind::DualAxis, opts, plot, labels, left_axis, right_axis: Some(right_axis), series }
    }

    fn plot_area(opts: &RenderOptions) -> PlotArea {
        PlotArea::new(opts.width as f32, opts.height as f32, &opts.insets)
    }

    fn plot_series(spec: SeriesSpec, scale: &YScale, plot: &PlotArea, n: usize) -> PlottedSeries {
        let points = spec
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| SeriesPoint::new(plot.x_at(i, n), scale.to_px(v, plot)))
            .collect();
        PlottedSeries { spec, points }
    }

    pub fn kind(&self) -> ChartKind { self.kind }
    pub fn options(&self) -> &RenderOptions { &self.opts }
    pub fn plot(&self) -> &PlotArea { &self.plot }
    pub fn left_axis(&self) -> &Axis { &self.left_axis }
    pub fn right_axis(&self) -> Option<&Axis> { self.right_axis.as_ref() }

    /// Pixel points of series `idx` (0 = first/left, 1 = second/right).
    pub fn points(&self, idx: usize) -> &[SeriesPoint] {
        self.series.get(idx).map(|s| s.points.as_slice()).unwrap_or(&[])
    }

    /// Clear and draw axes, gridlines, tick labels, x labels and legend.
    pub fn draw_chrome(&self, s: &mut dyn Surface) {
        let theme = &self.opts.theme;
        let p = &self.plot;
        s.clear(theme.background);

        // axis lines
        let bottom_left = SeriesPoint::new(p.left, p.bottom());
        s.stroke_line(SeriesPoint::new(p.left, p.top), bottom_left, theme.axis_line, AXIS_WIDTH);
        s.stroke_line(bottom_left, SeriesPoint::new(p.right(), p.bottom()), theme.axis_line, AXIS_WIDTH);
        if self.axes().any(|a| a.side == AxisSide::Right) {
            s.stroke_line(
                SeriesPoint::new(p.right(), p.top),
                SeriesPoint::new(p.right(), p.bottom()),
                theme.axis_line,
                AXIS_WIDTH,
            );
        }

        // gridlines follow the left axis only
        let ticks = self.left_axis.scale.tick_count().max(1);
        for frac in linspace(0.0, 1.0, ticks as usize + 1) {
            let y = p.y_at_fraction(frac);
            s.stroke_line(SeriesPoint::new(p.left, y), SeriesPoint::new(p.right(), y), theme.grid, AXIS_WIDTH);
        }

        if !self.opts.draw_labels {
            self.draw_legend_swatches(s);
            return;
        }

        for axis in self.axes() {
            self.draw_tick_labels(s, axis);
        }

        // thinned x labels
        let n = self.labels.len();
        for i in label_indices(n) {
            let x = p.x_at(i, n);
            s.fill_text(&self.labels[i], x - 10.0, p.bottom() + 26.0, LABEL_SIZE, theme.x_label);
        }

        self.draw_legend_swatches(s);
        for (k, series) in self.series.iter().enumerate() {
            let x = p.left + k as f32 * self.kind.legend_gap();
            s.fill_text(&series.spec.name, x + SWATCH + 4.0, p.top - 5.0, LABEL_SIZE, theme.legend_text);
        }
    }

    fn axes(&self) -> impl Iterator<Item = &Axis> {
        std::iter::once(&self.left_axis).chain(self.right_axis.as_ref())
    }

    /// Left labels start at a fixed x; right labels end a fixed distance past the plot.
    fn draw_tick_labels(&self, s: &mut dyn Surface, axis: &Axis) {
        let p = &self.plot;
        let ticks = axis.scale.tick_count().max(1);
        for (i, frac) in linspace(0.0, 1.0, ticks as usize + 1).into_iter().enumerate() {
            let y = p.y_at_fraction(frac) + 4.0;
            let text = axis.tick_label(i as u32);
            let x = match axis.side {
                AxisSide::Left => LEFT_LABEL_X,
                AxisSide::Right => p.right() + RIGHT_LABEL_INSET - s.measure_text(&text, LABEL_SIZE),
            };
            s.fill_text(&text, x, y, LABEL_SIZE, self.opts.theme.tick_label);
        }
    }

    fn draw_legend_swatches(&self, s: &mut dyn Surface) {
        let p = &self.plot;
        for (k, series) in self.series.iter().enumerate() {
            let x = p.left + k as f32 * self.kind.legend_gap();
            s.fill_rect(Rect::from_ltwh(x, p.top - 14.0, SWATCH, SWATCH), series.spec.color);
        }
    }

    /// Full frame at eased progress `t`: chrome, then each series cut to its revealed prefix.
    pub fn draw_frame(&self, s: &mut dyn Surface, t: f64) {
        self.draw_chrome(s);
        for series in &self.series {
            let cmds = partial_path(&series.points, t);
            if !cmds.is_empty() {
                s.stroke_path(&cmds, series.spec.color, SERIES_WIDTH);
            }
        }
    }

    /// Render the completed chart to PNG bytes on a CPU raster surface.
    pub fn render_png_bytes(&self) -> Result<Vec<u8>> {
        let mut surface = SkiaSurface::new(self.opts.width, self.opts.height)?;
        self.draw_frame(&mut surface, 1.0);
        Ok(surface.png_bytes()?)
    }

    /// Render the completed chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let mut surface = SkiaSurface::new(self.opts.width, self.opts.height)?;
        self.draw_frame(&mut surface, 1.0);
        surface
            .save_png(path)
            .with_context(|| format!("failed to write chart PNG '{}'", path.display()))
    }
}
