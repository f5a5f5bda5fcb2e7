//! Client configuration.

use anyhow::Context;

/// Where the remote item store lives.
///
/// Plain value, passed explicitly — no global configuration state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the store API, without a trailing slash
    /// (e.g. `https://example.com/api`).
    pub api_url: String,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        let mut api_url = api_url.into();
        while api_url.ends_with('/') {
            api_url.pop();
        }
        Self { api_url }
    }

    /// Read the API base URL from the `MOVINV_API_URL` environment variable.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_url = std::env::var("MOVINV_API_URL")
            .context("MOVINV_API_URL is not set - point it at the item store API")?;
        Ok(Self::new(api_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = ClientConfig::new("http://localhost:4000/api/");
        assert_eq!(config.api_url, "http://localhost:4000/api");
    }
}
