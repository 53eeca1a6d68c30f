//! Thin client for the FairCV HTTP API.
//!
//! [`ApiClient`] is provided once at the root of the app through context and
//! cloned into components. Every request carries the session cookie.

pub mod aaa;
pub mod faircv;
mod request;

use crate::config::Config;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    config: Config,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(Config::from_build_env())
    }
}
