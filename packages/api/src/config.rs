use serde::{Deserialize, Serialize};

/// Base URL used when nothing is configured: the backend's versioned mount point.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_MODE").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("local") {
            AppMode::Local
        } else {
            // Anything unrecognised is treated as production.
            AppMode::Production
        }
    }
}

/// Where the remote activation service lives.
///
/// Built once by the server and handed to the browser through
/// [`crate::public_config`]; the UI never reads globals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Trailing `/` on `base_url` are dropped, so `http://x/` and `http://x`
    /// both produce `http://x/users/activate/{token}`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Runtime `API_URL`, then the value baked in at compile time, then
    /// [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        Self::resolve(std::env::var("API_URL").ok(), option_env!("API_URL"))
    }

    fn resolve(runtime: Option<String>, baked: Option<&str>) -> Self {
        let url = runtime
            .filter(|v| !v.trim().is_empty())
            .or_else(|| baked.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(url.trim())
    }

    pub fn points_at_localhost(&self) -> bool {
        self.base_url.contains("localhost") || self.base_url.contains("127.0.0.1")
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Load `.env` if one is present. Missing files are fine.
#[cfg(feature = "server")]
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("config: loaded {}", path.display());
    }
}
