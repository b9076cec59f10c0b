use std::env;

/// Base URL used when neither the environment nor the CLI overrides it.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Where the remote CRUD API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config for the given base URL. A trailing slash is dropped so
    /// endpoint paths can be appended uniformly.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read `PLANNER_API_URL`, falling back to the local default.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("PLANNER_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());
        Self::new(base_url)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
