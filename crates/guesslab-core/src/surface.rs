// File: crates/guesslab-core/src/surface.rs
// Summary: Drawing-surface abstraction with a Skia raster backend and a recording backend.

use std::path::Path;

use skia_safe as skia;

use crate::error::ChartError;
use crate::geometry::{Rect, SeriesPoint};
use crate::smooth::PathCmd;
use crate::text::TextShaper;

/// The 2D operations a chart needs from whatever it draws on.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (f32, f32);
    /// Wipe the whole surface.
    fn clear(&mut self, color: skia::Color);
    fn stroke_line(&mut self, from: SeriesPoint, to: SeriesPoint, color: skia::Color, width: f32);
    fn stroke_path(&mut self, path: &[PathCmd], color: skia::Color, width: f32);
    fn fill_rect(&mut self, rect: Rect, color: skia::Color);
    /// Draw `text` with `(x, y)` as the left end of its baseline.
    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: skia::Color);
    fn measure_text(&self, text: &str, size: f32) -> f32;
}

// ---- Skia ------------------------------------------------------------------

/// CPU raster surface backed by Skia.
pub struct SkiaSurface {
    surface: skia::Surface,
    text: TextShaper,
    width: i32,
    height: i32,
}

impl SkiaSurface {
    pub fn new(width: i32, height: i32) -> Result<Self, ChartError> {
        let surface = skia::surfaces::raster_n32_premul((width.max(1), height.max(1)))
            .ok_or(ChartError::Surface { width, height })?;
        Ok(Self { surface, text: TextShaper::new(), width: width.max(1), height: height.max(1) })
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    /// Encode the current pixels as PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>, ChartError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn save_png(&mut self, path: impl AsRef<Path>) -> Result<(), ChartError> {
        let path = path.as_ref();
        let bytes = self.png_bytes()?;
        let io = |source| ChartError::Io { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io)?;
        }
        std::fs::write(path, bytes).map_err(io)
    }

    /// Unpremultiplied RGBA8 pixels, row-major, `width * 4` bytes per row.
    pub fn rgba8(&mut self) -> Result<Vec<u8>, ChartError> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::Readback);
        }
        Ok(pixels)
    }

    fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width);
        paint.set_color(color);
        paint
    }
}

impl Surface for SkiaSurface {
    fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    fn clear(&mut self, color: skia::Color) {
        self.surface.canvas().clear(color);
    }

    fn stroke_line(&mut self, from: SeriesPoint, to: SeriesPoint, color: skia::Color, width: f32) {
        let paint = Self::stroke_paint(color, width);
        self.surface.canvas().draw_line((from.x, from.y), (to.x, to.y), &paint);
    }

    fn stroke_path(&mut self, cmds: &[PathCmd], color: skia::Color, width: f32) {
        if cmds.is_empty() {
            return;
        }
        let mut path = skia::Path::new();
        for cmd in cmds {
            match *cmd {
                PathCmd::MoveTo(p) => { path.move_to((p.x, p.y)); }
                PathCmd::QuadTo { ctrl, to } => { path.quad_to((ctrl.x, ctrl.y), (to.x, to.y)); }
                PathCmd::LineTo(p) => { path.line_to((p.x, p.y)); }
            }
        }
        let paint = Self::stroke_paint(color, width);
        self.surface.canvas().draw_path(&path, &paint);
    }

    fn fill_rect(&mut self, rect: Rect, color: skia::Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color);
        let r = skia::Rect::from_xywh(rect.left, rect.top, rect.width, rect.height);
        self.surface.canvas().draw_rect(r, &paint);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let canvas = self.surface.canvas();
        self.text.draw_left(canvas, text, x, y, size, color);
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        self.text.measure_width(text, size)
    }
}

// ---- Recording ---------------------------------------------------------------

/// A drawing call captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(skia::Color),
    Line { from: SeriesPoint, to: SeriesPoint, color: skia::Color, width: f32 },
    Path { cmds: Vec<PathCmd>, color: skia::Color, width: f32 },
    Rect { rect: Rect, color: skia::Color },
    Text { text: String, x: f32, y: f32, size: f32, color: skia::Color },
}

/// Surface that keeps the draw calls of the current frame instead of pixels.
///
/// `clear` starts a new frame, so `ops()` always describes what is visible.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    ops: Vec<DrawOp>,
    frames: usize,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, ops: Vec::new(), frames: 0 }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of times the surface was cleared.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Stroked series paths of the current frame.
    pub fn paths(&self) -> impl Iterator<Item = (&[PathCmd], skia::Color)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Path { cmds, color, .. } => Some((cmds.as_slice(), *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (SeriesPoint, SeriesPoint, skia::Color)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line { from, to, color, .. } => Some((*from, *to, *color)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: skia::Color) {
        self.ops.clear();
        self.frames += 1;
        self.ops.push(DrawOp::Clear(color));
    }

    fn stroke_line(&mut self, from: SeriesPoint, to: SeriesPoint, color: skia::Color, width: f32) {
        self.ops.push(DrawOp::Line { from, to, color, width });
    }

    fn stroke_path(&mut self, cmds: &[PathCmd], color: skia::Color, width: f32) {
        self.ops.push(DrawOp::Path { cmds: cmds.to_vec(), color, width });
    }

    fn fill_rect(&mut self, rect: Rect, color: skia::Color) {
        self.ops.push(DrawOp::Rect { rect, color });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        self.ops.push(DrawOp::Text { text: text.to_string(), x, y, size, color });
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        0.6 * size * text.chars().count() as f32
    }
}
