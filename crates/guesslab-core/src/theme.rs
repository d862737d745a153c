// File: crates/guesslab-core/src/theme.rs
// Summary: Palettes for chart chrome and the four performance series.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub grid: skia::Color,
    pub tick_label: skia::Color,
    pub x_label: skia::Color,
    pub legend_text: skia::Color,
    pub win: skia::Color,
    pub lose: skia::Color,
    pub total_games: skia::Color,
    pub avg_time: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 0x0f, 0x17, 0x2a),
            axis_line: skia::Color::from_argb(255, 0x33, 0x41, 0x55),
            grid: skia::Color::from_argb(255, 0x1f, 0x29, 0x37),
            tick_label: skia::Color::from_argb(255, 0xcb, 0xd5, 0xe1),
            x_label: skia::Color::from_argb(255, 0x94, 0xa3, 0xb8),
            legend_text: skia::Color::from_argb(255, 0xe5, 0xe7, 0xeb),
            win: skia::Color::from_argb(255, 0x22, 0xc5, 0x5e),
            lose: skia::Color::from_argb(255, 0xef, 0x44, 0x44),
            total_games: skia::Color::from_argb(255, 0x3b, 0x82, 0xf6),
            avg_time: skia::Color::from_argb(255, 0xf5, 0x9e, 0x0b),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            tick_label: skia::Color::from_argb(255, 40, 40, 50),
            x_label: skia::Color::from_argb(255, 100, 100, 110),
            legend_text: skia::Color::from_argb(255, 20, 20, 30),
            win: skia::Color::from_argb(255, 0x16, 0xa3, 0x4a),
            lose: skia::Color::from_argb(255, 0xdc, 0x26, 0x26),
            total_games: skia::Color::from_argb(255, 0x25, 0x63, 0xeb),
            avg_time: skia::Color::from_argb(255, 0xd9, 0x77, 0x06),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
