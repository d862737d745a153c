// File: crates/guesslab-window/src/main.rs
// Summary: Windowed viewer; both performance charts stacked, animated in real time via RGBA blit.

use std::num::NonZeroU32;
use std::path::Path;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use guesslab_core::types::{HEIGHT, WIDTH};
use guesslab_core::{build_series, ChartPair, ChartRenderer, GameRecord, SkiaSurface};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// A saved `/api/profile` body; only the history matters here.
#[derive(Deserialize)]
#[serde(untagged)]
enum SavedHistory {
    Profile { history: Vec<GameRecord> },
    Records(Vec<GameRecord>),
}

fn load_history(path: &Path) -> Result<Vec<GameRecord>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let saved: SavedHistory =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(match saved {
        SavedHistory::Profile { history } | SavedHistory::Records(history) => history,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let raw = std::env::args().nth(1).unwrap_or_else(|| "data/sample_history.json".to_string());
    let history = load_history(Path::new(&raw))?;
    let bundle = build_series(&history);
    tracing::info!(games = bundle.game_count(), path = %raw, "history loaded");

    let theme = match std::env::args().nth(2) {
        Some(name) => guesslab_core::theme::find(&name),
        None => Default::default(),
    };
    let mut pair = ChartPair::new(
        ChartRenderer::new(Some(SkiaSurface::new(WIDTH, HEIGHT)?)).with_theme(theme),
        ChartRenderer::new(Some(SkiaSurface::new(WIDTH, HEIGHT)?)).with_theme(theme),
    );

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Guess Lab Performance")
        .with_inner_size(winit::dpi::PhysicalSize::new(WIDTH as u32, (HEIGHT * 2) as u32))
        .with_resizable(false)
        .build(&event_loop)
        .map_err(|e| anyhow!("window: {e}"))?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let start = Instant::now();
    let now_ms = move || start.elapsed().as_secs_f64() * 1000.0;
    pair.show(&bundle, now_ms());

    event_loop.run(move |event, _, cf| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode, .. },
                    ..
                } => match virtual_keycode {
                    Some(VirtualKeyCode::Escape) => *cf = ControlFlow::Exit,
                    // replay; a reveal still running is superseded
                    _ => {
                        pair.show(&bundle, now_ms());
                        window.request_redraw();
                    }
                },
                _ => {}
            },
            Event::MainEventsCleared => {
                if pair.percent.is_animating() || pair.dual.is_animating() {
                    window.request_redraw();
                    *cf = ControlFlow::Poll;
                } else {
                    *cf = ControlFlow::Wait;
                }
            }
            Event::RedrawRequested(_) => {
                pair.tick(now_ms());
                if let Err(e) = present(&mut surface, &mut pair) {
                    tracing::error!("present failed: {e:#}");
                    *cf = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    })
}

/// Blit both charts, percent on top, into the window buffer as 0RGB.
fn present(surface: &mut softbuffer::Surface, pair: &mut ChartPair<SkiaSurface>) -> Result<()> {
    let (w, h) = (WIDTH as u32, (HEIGHT * 2) as u32);
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else { return Ok(()) };
    surface.resize(nw, nh).map_err(|e| anyhow!("resize: {e}"))?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("buffer: {e}"))?;
    let chart_px = (WIDTH * HEIGHT) as usize;
    for (slot, renderer) in [&mut pair.percent, &mut pair.dual].into_iter().enumerate() {
        let Some(sk) = renderer.surface_mut() else { continue };
        let rgba = sk.rgba8()?;
        let dst = &mut frame[slot * chart_px..(slot + 1) * chart_px];
        for (d, px) in dst.iter_mut().zip(rgba.chunks_exact(4)) {
            *d = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
        }
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
