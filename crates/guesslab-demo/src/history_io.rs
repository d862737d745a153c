// File: crates/guesslab-demo/src/history_io.rs
// Summary: Load a game history from a saved profile JSON body or a CSV export.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime};
use guesslab_client::ProfileResponse;
use guesslab_core::GameRecord;

/// Timestamp layout used by the game server.
pub const SERVER_TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn load_history(path: &Path) -> Result<Vec<GameRecord>> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "csv" => load_csv(path),
        _ => load_json(path),
    }
}

/// Either a full `/api/profile` body or a bare array of records.
fn load_json(path: &Path) -> Result<Vec<GameRecord>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    if raw.trim_start().starts_with('[') {
        return serde_json::from_str(&raw).with_context(|| format!("parsing records in {}", path.display()));
    }
    let profile: ProfileResponse =
        serde_json::from_str(&raw).with_context(|| format!("parsing profile in {}", path.display()))?;
    Ok(profile.history)
}

fn load_csv(path: &Path) -> Result<Vec<GameRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };
    let i_ts = idx(&["ts", "timestamp", "time", "date", "datetime"]);
    let i_won = idx(&["won", "win", "result", "outcome"]);
    let i_time = idx(&["time_taken", "seconds", "duration"]);

    if i_won.is_none() {
        tracing::warn!("no won/result column; every game counts as not won");
    }

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let field = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).map(str::trim).filter(|s| !s.is_empty());

        let won = field(i_won).and_then(parse_outcome);
        let time_taken = field(i_time).and_then(|s| s.parse::<f64>().ok());
        let timestamp = field(i_ts).map(normalize_timestamp).unwrap_or_default();
        out.push(GameRecord::new(won, time_taken, timestamp));
    }
    Ok(out)
}

fn parse_outcome(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "win" | "won" => Some(true),
        "false" | "0" | "no" | "lose" | "loss" | "lost" | "forfeit" => Some(false),
        _ => None,
    }
}

/// Rewrite RFC 3339 or epoch-second stamps into the server layout; pass others through.
pub fn normalize_timestamp(s: &str) -> String {
    if NaiveDateTime::parse_from_str(s, SERVER_TS_FORMAT).is_ok() {
        return s.to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.naive_local().format(SERVER_TS_FORMAT).to_string();
    }
    if let Ok(secs) = s.parse::<i64>() {
        // epoch ms -> sec
        let secs = if secs > 10_i64.pow(12) { secs / 1000 } else { secs };
        if let Some(dt) = DateTime::from_timestamp(secs, 0) {
            return dt.naive_utc().format(SERVER_TS_FORMAT).to_string();
        }
    }
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use guesslab_core::build_series;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("guesslab-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).expect("write temp file");
        path
    }

    #[test]
    fn csv_headers_match_by_alias() {
        let path = temp_file(
            "alias.csv",
            "Timestamp, Result ,Seconds\n2025-03-01T10:05:00Z,win,12.5\n2025-03-01 10:09:00,forfeit,\n,loss,7\n",
        );
        let games = load_history(&path).expect("load");
        std::fs::remove_file(&path).ok();

        assert_eq!(games.len(), 3);
        assert_eq!(games[0], GameRecord::new(Some(true), Some(12.5), "2025-03-01 10:05:00"));
        assert_eq!(games[1], GameRecord::new(Some(false), None, "2025-03-01 10:09:00"));
        assert_eq!(games[2], GameRecord::new(Some(false), Some(7.0), ""));
        assert_eq!(build_series(&games).labels, vec!["0", "10:05", "10:09", "3"]);
    }

    #[test]
    fn csv_without_outcome_column_counts_no_wins() {
        let path = temp_file("no-won.csv", "ts,time_taken\n2025-03-01 10:00:00,4\n2025-03-01 10:01:00,6\n");
        let games = load_history(&path).expect("load");
        std::fs::remove_file(&path).ok();

        assert_eq!(games.len(), 2);
        assert!(games.iter().all(|g| g.won.is_none()));
        let b = build_series(&games);
        assert_eq!(b.win_pct, vec![0.0, 0.0, 0.0]);
        assert_eq!(b.lose_pct, vec![0.0, 100.0, 100.0]);
        assert_eq!(b.avg_time, vec![0.0, 4.0, 5.0]);
    }

    #[test]
    fn json_as_records_or_profile_body() {
        let records = r#"[{"ts": "2025-03-01 10:00:00", "won": true, "time_taken": 3.0}, {"ts": null, "won": false}]"#;
        let path = temp_file("records.json", records);
        let bare = load_history(&path).expect("load records");
        std::fs::remove_file(&path).ok();
        assert_eq!(bare.len(), 2);
        assert_eq!(bare[1].timestamp, "");

        let profile = format!(r#"{{"ok": true, "username": "ana", "summary": {{}}, "history": {records}}}"#);
        let path = temp_file("profile.json", &profile);
        let wrapped = load_history(&path).expect("load profile");
        std::fs::remove_file(&path).ok();
        assert_eq!(wrapped, bare);
    }

    #[test]
    fn unreadable_files_carry_the_path() {
        let err = load_history(Path::new("/nonexistent/guesslab.json")).expect_err("missing file");
        assert!(format!("{err:#}").contains("/nonexistent/guesslab.json"));
    }

    #[test]
    fn bundled_sample_csv_loads_with_clock_labels() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/sample_history.csv");
        let games = load_history(&path).expect("load sample");
        assert_eq!(games.len(), 12);
        let labels = build_series(&games).labels;
        assert_eq!(labels[0], "0");
        assert_eq!(labels[1], "09:00");
        assert!(labels[1..].iter().all(|l| l.len() == 5 && l.as_bytes()[2] == b':'), "{labels:?}");
    }

    #[test]
    fn timestamps_are_normalized() {
        assert_eq!(normalize_timestamp("2025-03-01 10:09:00"), "2025-03-01 10:09:00");
        assert_eq!(normalize_timestamp("2025-03-01T10:09:00+02:00"), "2025-03-01 10:09:00");
        assert_eq!(normalize_timestamp("0"), "1970-01-01 00:00:00");
        assert_eq!(normalize_timestamp("game 4"), "game 4");
    }

    #[test]
    fn outcomes() {
        assert_eq!(parse_outcome("WIN"), Some(true));
        assert_eq!(parse_outcome("forfeit"), Some(false));
        assert_eq!(parse_outcome("?"), None);
    }
}
