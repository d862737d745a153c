// File: crates/guesslab-demo/src/main.rs
// Summary: Load a game history (file or live server), animate both charts headlessly and write PNG frames.

mod history_io;

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use guesslab_client::{update, ApiClient, AppState, ClientConfig, Effect, Event, ProfileResponse};
use guesslab_core::types::{HEIGHT, WIDTH};
use guesslab_core::{summarize, ChartPair, ChartRenderer, SkiaSurface, REVEAL_DURATION_MS};
use tracing_subscriber::EnvFilter;

/// Simulated display refresh.
const FRAME_MS: f64 = 1000.0 / 60.0;

struct Args {
    source: Source,
    out_dir: PathBuf,
    frame_every: usize,
    theme: String,
}

enum Source {
    File(PathBuf),
    Live(String),
}

fn parse_args() -> Result<Args> {
    let mut source = None;
    let mut out_dir = PathBuf::from("target/out");
    let mut frame_every = 0usize;
    let mut theme = "dark".to_string();

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--user" => source = Some(Source::Live(it.next().context("--user needs a name")?)),
            "--out" => out_dir = PathBuf::from(it.next().context("--out needs a directory")?),
            "--frame-every" => {
                frame_every = it.next().context("--frame-every needs a number")?.parse()?;
            }
            "--theme" => theme = it.next().context("--theme needs a name")?,
            other => source = Some(Source::File(PathBuf::from(other))),
        }
    }
    let source = source.unwrap_or_else(|| Source::File(PathBuf::from("data/sample_history.json")));
    Ok(Args { source, out_dir, frame_every, theme })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args()?;
    std::fs::create_dir_all(&args.out_dir).with_context(|| format!("creating {}", args.out_dir.display()))?;

    let theme = guesslab_core::theme::find(&args.theme);
    let mut pair = ChartPair::new(
        ChartRenderer::new(Some(SkiaSurface::new(WIDTH, HEIGHT)?)).with_theme(theme),
        ChartRenderer::new(Some(SkiaSurface::new(WIDTH, HEIGHT)?)).with_theme(theme),
    );

    let (username, api) = match &args.source {
        Source::File(path) => (user_from_path(path), None),
        Source::Live(user) => (user.clone(), Some(ApiClient::new(ClientConfig::load()?)?)),
    };

    // the server only answers profile lookups for a logged-in session
    let mut queue = VecDeque::new();
    match &api {
        Some(api) => match api.login(&username).await {
            Ok(res) => {
                queue.push_back(Event::LoggedIn(res.username));
                queue.push_back(Event::ProfileRequested(username));
            }
            Err(e) => queue.push_back(Event::ProfileFailed(e.user_message())),
        },
        None => queue.push_back(Event::ProfileRequested(username)),
    }

    let mut state = AppState::default();
    let mut drew = false;

    while let Some(event) = queue.pop_front() {
        let (next, effects) = update(state, event);
        state = next;
        for effect in effects {
            match effect {
                Effect::FetchProfile(user) => {
                    let loaded = match (&api, &args.source) {
                        (Some(api), _) => api.fetch_profile(&user).await.map_err(|e| e.user_message()),
                        (None, Source::File(path)) => profile_from_file(path, &user).map_err(|e| format!("{e:#}")),
                        (None, Source::Live(_)) => Err(guesslab_client::error::FALLBACK_MESSAGE.to_string()),
                    };
                    queue.push_back(match loaded {
                        Ok(profile) => Event::ProfileLoaded(profile),
                        Err(msg) => Event::ProfileFailed(msg),
                    });
                }
                Effect::RenderCharts(bundle) => {
                    println!("{}: {} games", state.perf_title, bundle.game_count());
                    pair.show(&bundle, 0.0);
                    drew = true;
                }
                Effect::ClearCharts => {
                    println!("{}: no games yet", state.perf_title);
                    pair.clear();
                }
                Effect::SetStatus(msg) => eprintln!("status: {msg}"),
            }
        }
    }

    if let Some(summary) = &state.summary {
        println!(
            "Games {}  Wins {}  Losses {}  Win {}%  Lose {}%  Avg time {}s",
            summary.total_games, summary.wins, summary.losses, summary.win_pct, summary.lose_pct, summary.avg_time,
        );
    }
    if !drew {
        return Ok(());
    }

    // Drive the reveal the way a display loop would, one tick per refresh.
    let mut frame = 0usize;
    let mut now = 0.0;
    loop {
        let running = pair.tick(now);
        if args.frame_every > 0 && frame % args.frame_every == 0 {
            save_pair(&mut pair, &args.out_dir, &format!("_{frame:03}"))?;
        }
        if !running {
            break;
        }
        frame += 1;
        now += FRAME_MS;
    }
    tracing::info!(frames = frame + 1, duration_ms = REVEAL_DURATION_MS, "reveal finished");

    save_pair(&mut pair, &args.out_dir, "")?;
    Ok(())
}

fn profile_from_file(path: &Path, user: &str) -> Result<ProfileResponse> {
    let history = history_io::load_history(path)
        .with_context(|| format!("failed to load history '{}'", path.display()))?;
    println!("Loaded {} games from {}", history.len(), path.display());
    Ok(ProfileResponse {
        ok: true,
        username: user.to_string(),
        summary: summarize(&history),
        history,
        recent: Vec::new(),
    })
}

fn user_from_path(path: &Path) -> String {
    path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| "player".into())
}

fn save_pair(pair: &mut ChartPair<SkiaSurface>, dir: &Path, suffix: &str) -> Result<()> {
    for (name, renderer) in [("percent", &mut pair.percent), ("games_time", &mut pair.dual)] {
        let Some(surface) = renderer.surface_mut() else { continue };
        let out = dir.join(format!("{name}{suffix}.png"));
        surface.save_png(&out)?;
        if suffix.is_empty() {
            println!("Wrote {}", out.display());
        }
    }
    Ok(())
}
