// File: crates/guesslab-client/src/config.rs
// Summary: Client settings from an optional guesslab.toml and GUESSLAB_* environment variables.

use serde::Deserialize;

use crate::error::ClientError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Session identifier sent with every request; generated when unset.
    #[serde(default)]
    pub client_id: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), client_id: None, timeout_secs: DEFAULT_TIMEOUT_SECS }
    }
}

impl ClientConfig {
    /// Load `guesslab.toml` (if present) from the working directory, then the environment.
    pub fn load() -> Result<Self, ClientError> {
        Self::load_from("guesslab")
    }

    /// Like [`load`](Self::load) with an explicit file stem (no extension).
    pub fn load_from(file_stem: &str) -> Result<Self, ClientError> {
        let settings = config::Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .add_source(config::File::with_name(file_stem).required(false))
            .add_source(config::Environment::with_prefix("GUESSLAB").try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Configured client id, or a fresh random one for this session.
    pub fn resolve_client_id(&self) -> String {
        self.client_id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let cfg = ClientConfig { base_url: "http://host:8000/".into(), ..ClientConfig::default() };
        assert_eq!(cfg.endpoint("/api/profile"), "http://host:8000/api/profile");
        assert_eq!(cfg.endpoint("api/profile"), "http://host:8000/api/profile");
    }

    #[test]
    fn client_id_is_kept_or_generated() {
        let fixed = ClientConfig { client_id: Some("abc".into()), ..ClientConfig::default() };
        assert_eq!(fixed.resolve_client_id(), "abc");

        let blank = ClientConfig { client_id: Some("  ".into()), ..ClientConfig::default() };
        let a = blank.resolve_client_id();
        let b = blank.resolve_client_id();
        assert_eq!(a.len(), 36);
        assert_ne!(a, b);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = ClientConfig::load_from("does-not-exist-guesslab").expect("defaults");
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(!cfg.base_url.is_empty());
    }
}
