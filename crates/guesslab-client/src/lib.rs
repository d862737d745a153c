// File: crates/guesslab-client/src/lib.rs
// Summary: Client side of the profile endpoint plus the explicit UI state machine.

pub mod api;
pub mod config;
pub mod error;
pub mod session;

pub use api::{ApiClient, LoginRequest, LoginResponse, ProfileRequest, ProfileResponse};
pub use config::ClientConfig;
pub use error::ClientError;
pub use session::{update, AppState, Effect, Event};
