use crate::fetch::DEFAULT_BASE_URL;

pub mod vendor;

pub use vendor::{request_limit, AccountTier, DataVendor};

pub const API_KEY_ENV: &str = "FINNHUB_API_KEY";
pub const BASE_URL_ENV: &str = "FINNHUB_BASE_URL";

/// Connection settings shared by every request the CLI prepares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl ClientConfig {
    pub fn builtin() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }

    /// Builtin defaults overlaid with `FINNHUB_BASE_URL` and `FINNHUB_API_KEY`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::builtin();
        if let Some(base) = lookup(BASE_URL_ENV).filter(|value| !value.trim().is_empty()) {
            config.base_url = base.trim_end_matches('/').to_string();
        }
        config.api_key = lookup(API_KEY_ENV).filter(|value| !value.trim().is_empty());
        config
    }

    /// An explicit key wins over the environment.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if api_key.is_some() {
            self.api_key = api_key;
        }
        self
    }
}
