//! Remote Store Configuration

/// Store used when no override is compiled in
pub const DEFAULT_BASE_URL: &str = "https://todo-server-2-pz5c.onrender.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    base_url: String,
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Base URL baked in at build time (`TODO_API_BASE_URL`), else the default store
    pub fn from_build_env() -> Self {
        Self::new(option_env!("TODO_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base>/<path>`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
