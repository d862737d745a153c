// File: crates/guesslab-client/tests/api.rs
// Purpose: Wire shapes of the profile endpoint.

use guesslab_client::api::api_error;
use guesslab_client::{ClientError, ProfileRequest, ProfileResponse};

#[test]
fn decodes_profile_body() {
    let body = r#"{
        "ok": true,
        "username": "ana",
        "summary": {
            "total_score": 340, "total_games": 3, "wins": 2, "losses": 1,
            "win_pct": 66.7, "lose_pct": 33.3, "avg_time": 10.0,
            "date_created": "2025-01-02 08:00:00", "last_played": "2025-03-01 10:09:00"
        },
        "history": [
            {"ts": "2025-03-01 10:00:00", "won": true, "score": 170, "time_taken": 5.0, "difficulty": "easy"},
            {"ts": "2025-03-01 10:05:00", "won": false, "score": 0, "time_taken": null, "difficulty": "hard"},
            {"ts": "2025-03-01 10:09:00", "won": true, "score": 170, "time_taken": 15.0, "difficulty": "easy"}
        ],
        "recent": []
    }"#;
    let p: ProfileResponse = serde_json::from_str(body).expect("decode");
    assert!(p.ok);
    assert_eq!(p.summary.total_games, 3);
    assert_eq!(p.summary.total_score, Some(340));
    assert_eq!(p.history.len(), 3);
    assert_eq!(p.history[1].time_taken, None);
    assert_eq!(p.history[2].label(2), "10:09");
}

#[test]
fn missing_history_defaults_to_empty() {
    let p: ProfileResponse = serde_json::from_str(r#"{"ok": true, "summary": {}}"#).expect("decode");
    assert!(p.history.is_empty());
}

#[test]
fn request_body_shape() {
    let req = ProfileRequest { client_id: "c1".into(), username: "ana".into() };
    let v = serde_json::to_value(&req).expect("encode");
    assert_eq!(v, serde_json::json!({"client_id": "c1", "username": "ana"}));
}

#[test]
fn error_bodies_become_messages() {
    match api_error(404, r#"{"ok": false, "error": "User not found."}"#) {
        ClientError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "User not found.");
        }
        other => panic!("unexpected {other:?}"),
    }
    let err = api_error(500, "<html>oops</html>");
    assert_eq!(err.user_message(), "Request failed");
}

#[test]
fn login_wire_shapes() {
    let req = guesslab_client::LoginRequest { client_id: "c1".into(), username: "ana".into() };
    let v = serde_json::to_value(&req).expect("encode");
    assert_eq!(v, serde_json::json!({"client_id": "c1", "username": "ana"}));

    let body = r#"{"ok": true, "username": "ana", "profile": {"total_score": 0, "history": []}}"#;
    let res: guesslab_client::LoginResponse = serde_json::from_str(body).expect("decode");
    assert!(res.ok);
    assert_eq!(res.username, "ana");
}
