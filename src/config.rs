//! Build-time client configuration.
//!
//! A WebAssembly bundle has no process environment at runtime, so settings are
//! baked in when the bundle is compiled.

/// Base URL used when `FAIRCV_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "/api";

/// Local storage key remembering whether a wallet was connected on a previous visit.
pub const WALLET_CONNECTED_KEY: &str = "faircv.metamask-connected";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_url: String,
}

impl Config {
    /// Reads `FAIRCV_API_URL` from the environment of the build.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("FAIRCV_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn new(api_url: &str) -> Self {
        let trimmed = api_url.trim().trim_end_matches('/');

        Self {
            api_url: trimmed.to_string(),
        }
    }

    /// Joins an API path onto the configured base URL.
    ///
    /// # Arguments
    /// - `path` - Endpoint path, with or without a leading `/`
    ///
    /// # Example
    /// ```ignore
    /// let config = Config::new("https://faircv.example/api/");
    /// assert_eq!(config.endpoint("users/current"), "https://faircv.example/api/users/current");
    /// ```
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_build_env()
    }
}
