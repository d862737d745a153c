// File: crates/guesslab-core/src/renderer.rs
// Summary: Drives animated chart renders on a surface, one reveal animation at a time.
// Notes:
// - A renderer without a surface accepts every call and draws nothing.
// - `render` only schedules; frames are drawn by `tick`, which the host calls
//   once per display refresh until it returns false.

use crate::animation::{Animator, RenderToken};
use crate::chart::{LineChart, RenderOptions, SeriesSpec};
use crate::history::TimeSeriesBundle;
use crate::surface::Surface;
use crate::theme::Theme;
use crate::types::Insets;

struct ActiveRender {
    token: RenderToken,
    chart: LineChart,
}

pub struct ChartRenderer<S: Surface> {
    surface: Option<S>,
    theme: Theme,
    draw_labels: bool,
    animator: Animator,
    active: Option<ActiveRender>,
}

impl<S: Surface> ChartRenderer<S> {
    pub fn new(surface: Option<S>) -> Self {
        Self { surface, theme: Theme::dark(), draw_labels: true, animator: Animator::default(), active: None }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_labels(mut self, draw_labels: bool) -> Self {
        self.draw_labels = draw_labels;
        self
    }

    pub fn with_animator(mut self, animator: Animator) -> Self {
        self.animator = animator;
        self
    }

    pub fn theme(&self) -> &Theme { &self.theme }
    pub fn surface(&self) -> Option<&S> { self.surface.as_ref() }
    pub fn surface_mut(&mut self) -> Option<&mut S> { self.surface.as_mut() }
    pub fn into_surface(self) -> Option<S> { self.surface }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// The chart currently (or most recently) being drawn.
    pub fn active_chart(&self) -> Option<&LineChart> {
        self.active.as_ref().map(|a| &a.chart)
    }

    /// Options sized to the surface with the given paddings; `None` without a surface.
    pub fn options(&self, insets: Insets) -> Option<RenderOptions> {
        let (w, h) = self.surface.as_ref()?.size();
        Some(RenderOptions {
            width: w as i32,
            height: h as i32,
            insets,
            theme: self.theme,
            draw_labels: self.draw_labels,
        })
    }

    /// Start revealing `chart` at `now_ms`, superseding any animation in flight.
    pub fn render(&mut self, chart: LineChart, now_ms: f64) -> Option<RenderToken> {
        self.surface.as_ref()?;
        let token = self.animator.start(now_ms);
        tracing::debug!(generation = token.generation(), kind = ?chart.kind(), "chart render scheduled");
        self.active = Some(ActiveRender { token, chart });
        Some(token)
    }

    /// Draw the frame for `now_ms`. Returns true while more frames are wanted.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.active.as_ref().map(|a| a.token) {
            Some(token) => self.tick_token(token, now_ms),
            None => false,
        }
    }

    /// Like [`tick`](Self::tick), for hosts that keep the token of the render
    /// that scheduled the callback. A stale token draws nothing.
    pub fn tick_token(&mut self, token: RenderToken, now_ms: f64) -> bool {
        let Self { surface, animator, active, .. } = self;
        let (Some(surface), Some(active)) = (surface.as_mut(), active.as_ref()) else {
            return false;
        };
        if active.token != token {
            return false;
        }
        match animator.frame(token, now_ms) {
            Some(frame) => {
                active.chart.draw_frame(surface, frame.eased);
                !frame.last
            }
            None => false,
        }
    }

    /// Blank the surface and stop any animation.
    pub fn clear(&mut self) {
        self.animator.cancel();
        self.active = None;
        if let Some(surface) = self.surface.as_mut() {
            surface.clear(self.theme.background);
        }
    }
}

/// Animate win/lose percentages on the renderer's surface.
pub fn render_percent_chart<S: Surface>(
    renderer: &mut ChartRenderer<S>,
    labels: &[String],
    win: SeriesSpec,
    lose: SeriesSpec,
    now_ms: f64,
) -> Option<RenderToken> {
    let opts = renderer.options(Insets::percent_chart())?;
    let chart = LineChart::percent(opts, labels.to_vec(), win, lose);
    renderer.render(chart, now_ms)
}

/// Animate two independently scaled series on the renderer's surface.
pub fn render_dual_axis_chart<S: Surface>(
    renderer: &mut ChartRenderer<S>,
    labels: &[String],
    left: SeriesSpec,
    right: SeriesSpec,
    now_ms: f64,
) -> Option<RenderToken> {
    let opts = renderer.options(Insets::dual_axis_chart())?;
    let chart = LineChart::dual_axis(opts, labels.to_vec(), left, right);
    renderer.render(chart, now_ms)
}

/// The two charts of a profile panel: win/lose percentage and games vs. average time.
pub struct ChartPair<S: Surface> {
    pub percent: ChartRenderer<S>,
    pub dual: ChartRenderer<S>,
}

impl<S: Surface> ChartPair<S> {
    pub fn new(percent: ChartRenderer<S>, dual: ChartRenderer<S>) -> Self {
        Self { percent, dual }
    }

    /// Render both charts from `bundle`; a bundle without games clears both instead.
    pub fn show(&mut self, bundle: &TimeSeriesBundle, now_ms: f64) {
        if bundle.game_count() == 0 {
            tracing::debug!("no games in history, clearing charts");
            self.clear();
            return;
        }
        let theme = *self.percent.theme();
        render_percent_chart(
            &mut self.percent,
            &bundle.labels,
            SeriesSpec::win_pct(bundle, &theme),
            SeriesSpec::lose_pct(bundle, &theme),
            now_ms,
        );
        let theme = *self.dual.theme();
        render_dual_axis_chart(
            &mut self.dual,
            &bundle.labels,
            SeriesSpec::total_games(bundle, &theme),
            SeriesSpec::avg_time(bundle, &theme),
            now_ms,
        );
    }

    /// Advance both charts; true while either still animates.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let a = self.percent.tick(now_ms);
        let b = self.dual.tick(now_ms);
        a || b
    }

    pub fn clear(&mut self) {
        self.percent.clear();
        self.dual.clear();
    }
}
