// File: crates/guesslab-core/src/history.rs
// Summary: Game history records and the derivation of cumulative chart series.
// Notes:
// - `build_series` is pure and total: any history, including an empty one,
//   yields a bundle whose sequences are index-aligned with `labels`.
// - Index 0 of every sequence is a synthetic origin point labelled "0".

use serde::{Deserialize, Deserializer, Serialize};

use crate::round::round1;

/// One completed or forfeited round as reported by the profile endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// `Some(true)` only for a win; absent/unknown outcomes count as played, not won.
    #[serde(default)]
    pub won: Option<bool>,
    /// Seconds taken, when the server recorded it.
    #[serde(default)]
    pub time_taken: Option<f64>,
    /// Server timestamp, `"YYYY-MM-DD HH:MM:SS"`; may be empty.
    #[serde(rename = "ts", default, deserialize_with = "null_as_empty")]
    pub timestamp: String,
}

impl GameRecord {
    pub fn new(won: Option<bool>, time_taken: Option<f64>, timestamp: impl Into<String>) -> Self {
        Self { won, time_taken, timestamp: timestamp.into() }
    }

    pub fn win(time_taken: f64) -> Self {
        Self::new(Some(true), Some(time_taken), "")
    }

    pub fn loss(time_taken: Option<f64>) -> Self {
        Self::new(Some(false), time_taken, "")
    }

    /// Whether this record counts towards the win total.
    #[inline]
    pub fn is_win(&self) -> bool {
        self.won == Some(true)
    }

    /// Time taken, if it is a usable number.
    #[inline]
    pub fn seconds(&self) -> Option<f64> {
        self.time_taken.filter(|t| t.is_finite())
    }

    /// Axis label for this record at 0-based position `index`.
    ///
    /// A timestamp with a space yields the first five characters after it
    /// (`HH:MM`); anything else falls back to the 1-based position.
    pub fn label(&self, index: usize) -> String {
        match self.timestamp.split(' ').nth(1) {
            Some(time) => time.chars().take(5).collect(),
            None => (index + 1).to_string(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Cumulative statistics aligned by index with `labels`.
///
/// Contract: all five sequences have the same length, `history.len() + 1`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TimeSeriesBundle {
    pub labels: Vec<String>,
    pub win_pct: Vec<f64>,
    pub lose_pct: Vec<f64>,
    pub total_games: Vec<f64>,
    pub avg_time: Vec<f64>,
}

impl TimeSeriesBundle {
    fn with_origin(capacity: usize) -> Self {
        let mut b = Self {
            labels: Vec::with_capacity(capacity),
            win_pct: Vec::with_capacity(capacity),
            lose_pct: Vec::with_capacity(capacity),
            total_games: Vec::with_capacity(capacity),
            avg_time: Vec::with_capacity(capacity),
        };
        b.push("0".to_string(), 0.0, 0.0, 0.0, 0.0);
        b
    }

    fn push(&mut self, label: String, win: f64, lose: f64, games: f64, avg: f64) {
        self.labels.push(label);
        self.win_pct.push(win);
        self.lose_pct.push(lose);
        self.total_games.push(games);
        self.avg_time.push(avg);
    }

    /// Number of points, origin included.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True only for a default-constructed bundle; built bundles carry the origin.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of games the bundle was built from.
    pub fn game_count(&self) -> usize {
        self.len().saturating_sub(1)
    }
}

/// Derive the four cumulative series from a chronological history.
pub fn build_series(history: &[GameRecord]) -> TimeSeriesBundle {
    let mut out = TimeSeriesBundle::with_origin(history.len() + 1);

    let mut games = 0u32;
    let mut wins = 0u32;
    let mut time_sum = 0.0f64;
    let mut time_count = 0u32;

    for (i, rec) in history.iter().enumerate() {
        games += 1;
        if rec.is_win() {
            wins += 1;
        }
        if let Some(t) = rec.seconds() {
            time_sum += t;
            time_count += 1;
        }

        // lose is the complement of the rounded win so the pair sums to 100
        let win = round1(100.0 * wins as f64 / games as f64);
        let lose = round1(100.0 - win);
        let avg = if time_count > 0 { round1(time_sum / time_count as f64) } else { 0.0 };

        out.push(rec.label(i), win, lose, games as f64, avg);
    }

    tracing::debug!(games, wins, timed = time_count, "built time series bundle");
    out
}

/// Headline numbers shown next to the charts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    #[serde(default)]
    pub total_games: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub win_pct: f64,
    #[serde(default)]
    pub lose_pct: f64,
    #[serde(default)]
    pub avg_time: f64,
    #[serde(default)]
    pub total_score: Option<i64>,
}

/// Summary over a whole history, computed the way the profile endpoint does.
///
/// Unlike the series, win and lose percentages are each rounded from the raw
/// counts, so they may not sum to exactly 100.
pub fn summarize(history: &[GameRecord]) -> ProfileSummary {
    let total = history.len() as u32;
    let wins = history.iter().filter(|r| r.is_win()).count() as u32;
    let losses = total - wins;

    let pct = |k: u32| if total > 0 { round1(k as f64 / total as f64 * 100.0) } else { 0.0 };

    let times: Vec<f64> = history.iter().filter_map(GameRecord::seconds).collect();
    let avg_time = if times.is_empty() {
        0.0
    } else {
        round1(times.iter().sum::<f64>() / times.len() as f64)
    };

    ProfileSummary {
        total_games: total,
        wins,
        losses,
        win_pct: pct(wins),
        lose_pct: pct(losses),
        avg_time,
        total_score: None,
    }
}
