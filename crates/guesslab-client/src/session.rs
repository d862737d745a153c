// File: crates/guesslab-client/src/session.rs
// Summary: Application state as a value; every UI event is a pure transition.
// Notes:
// - `update` performs no I/O. It returns the effects the host must carry out
//   (fetch, draw, clear, show a message) in order.

use guesslab_core::{build_series, ProfileSummary, TimeSeriesBundle};

use crate::api::ProfileResponse;

pub const OWN_PROFILE_TITLE: &str = "My Performance";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub current_user: Option<String>,
    /// Whose performance is on the charts.
    pub selected_profile: Option<String>,
    pub active_game: bool,
    /// Text of the status area.
    pub status: String,
    pub perf_title: String,
    pub summary: Option<ProfileSummary>,
    /// Series behind the charts currently shown.
    pub bundle: Option<TimeSeriesBundle>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    LoggedIn(String),
    LoggedOut,
    ProfileRequested(String),
    ProfileLoaded(ProfileResponse),
    ProfileFailed(String),
    GameStarted,
    GameFinished,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    FetchProfile(String),
    RenderCharts(TimeSeriesBundle),
    ClearCharts,
    SetStatus(String),
}

/// Title above the charts for `username`'s profile.
pub fn perf_title(username: &str, current_user: Option<&str>) -> String {
    if current_user == Some(username) {
        OWN_PROFILE_TITLE.to_string()
    } else {
        format!("{username} Performance")
    }
}

pub fn update(mut state: AppState, event: Event) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();
    match event {
        Event::LoggedIn(user) => {
            state.current_user = Some(user.clone());
            state.selected_profile = Some(user);
            state.active_game = false;
            state.status = "Logged in. Choose an option.".to_string();
            effects.push(Effect::SetStatus(state.status.clone()));
        }
        Event::LoggedOut => {
            state = AppState {
                status: "Exited game. Please login or create an account.".to_string(),
                ..AppState::default()
            };
            effects.push(Effect::ClearCharts);
            effects.push(Effect::SetStatus(state.status.clone()));
        }
        Event::ProfileRequested(user) => {
            let user = user.trim().to_string();
            if !user.is_empty() {
                state.selected_profile = Some(user.clone());
                effects.push(Effect::FetchProfile(user));
            }
        }
        Event::ProfileLoaded(profile) => {
            let username = if profile.username.is_empty() {
                state.selected_profile.clone().unwrap_or_default()
            } else {
                profile.username.clone()
            };
            state.perf_title = perf_title(&username, state.current_user.as_deref());
            state.summary = Some(profile.summary);

            if profile.history.is_empty() {
                state.bundle = None;
                effects.push(Effect::ClearCharts);
            } else {
                let bundle = build_series(&profile.history);
                state.bundle = Some(bundle.clone());
                effects.push(Effect::RenderCharts(bundle));
            }
        }
        Event::ProfileFailed(message) => {
            // charts keep showing the last successful load
            state.status = message;
            effects.push(Effect::SetStatus(state.status.clone()));
        }
        Event::GameStarted => {
            state.active_game = true;
            state.status = "Game started. Make a guess.".to_string();
            effects.push(Effect::SetStatus(state.status.clone()));
        }
        Event::GameFinished => {
            state.active_game = false;
        }
    }
    (state, effects)
}
