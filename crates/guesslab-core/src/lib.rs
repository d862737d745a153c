// File: crates/guesslab-core/src/lib.rs
// Summary: Core library entry point; series derivation and animated chart rendering.

pub mod animation;
pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod history;
pub mod renderer;
pub mod round;
pub mod scale;
pub mod smooth;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use animation::{ease_out_cubic, Animator, AnimationState, Frame, RenderToken, REVEAL_DURATION_MS};
pub use axis::{Axis, AxisSide};
pub use chart::{ChartKind, LineChart, RenderOptions, SeriesSpec};
pub use error::ChartError;
pub use geometry::{PlotArea, SeriesPoint};
pub use history::{build_series, summarize, GameRecord, ProfileSummary, TimeSeriesBundle};
pub use renderer::{render_dual_axis_chart, render_percent_chart, ChartPair, ChartRenderer};
pub use round::{round1, round_to};
pub use scale::{linear_auto_max, linear_step, nice_max, YScale};
pub use smooth::{smooth_path, PathCmd};
pub use surface::{DrawOp, RecordingSurface, SkiaSurface, Surface};
pub use text::TextShaper;
pub use theme::Theme;
pub use types::Insets;
