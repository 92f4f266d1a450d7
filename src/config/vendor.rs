use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::{AppError, Result};

pub const FINNHUB_HOST: &str = "finnhub.io";
pub const FINNHUB_API_PATH: &str = "api/v1";

/// Subscription level of the API account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AccountTier {
    /// free
    #[value(name = "f")]
    Free,
    /// basic
    #[value(name = "b")]
    Basic,
    /// standard
    #[value(name = "s")]
    Standard,
    /// professional
    #[value(name = "p")]
    Professional,
    /// ultimate
    #[value(name = "u")]
    Ultimate,
}

impl AccountTier {
    pub fn code(self) -> &'static str {
        match self {
            AccountTier::Free => "f",
            AccountTier::Basic => "b",
            AccountTier::Standard => "s",
            AccountTier::Professional => "p",
            AccountTier::Ultimate => "u",
        }
    }

    /// Nominal requests per minute. Informational only, nothing throttles on it.
    pub fn request_limit(self) -> u32 {
        match self {
            AccountTier::Free => 30,
            AccountTier::Basic => 150,
            AccountTier::Standard => 300,
            AccountTier::Professional => 700,
            AccountTier::Ultimate => 900,
        }
    }
}

impl FromStr for AccountTier {
    type Err = AppError;

    fn from_str(code: &str) -> Result<Self> {
        match code {
            "f" => Ok(AccountTier::Free),
            "b" => Ok(AccountTier::Basic),
            "s" => Ok(AccountTier::Standard),
            "p" => Ok(AccountTier::Professional),
            "u" => Ok(AccountTier::Ultimate),
            other => Err(AppError::configuration(format!(
                "unknown account tier `{other}`, expected one of f/b/s/p/u"
            ))),
        }
    }
}

impl fmt::Display for AccountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Per-minute ceiling for a tier code, `None` for unknown codes.
pub fn request_limit(code: &str) -> Option<u32> {
    code.parse::<AccountTier>()
        .ok()
        .map(AccountTier::request_limit)
}

/// Where a data vendor lives and how much it nominally allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataVendor {
    url: String,
    request_limit: Option<u32>,
}

impl DataVendor {
    /// `https://` followed by every segment, each terminated by `/`. No limit is assumed.
    pub fn new<S: AsRef<str>>(segments: &[S]) -> Result<Self> {
        if segments.is_empty() {
            log::error!("Data vendor declared without a base URL");
            return Err(AppError::configuration("base URL segments are required"));
        }

        let mut url = String::from("https://");
        for segment in segments {
            url.push_str(segment.as_ref());
            url.push('/');
        }

        Ok(Self {
            url,
            request_limit: None,
        })
    }

    pub fn finnhub(tier: AccountTier) -> Self {
        Self {
            url: format!("https://{FINNHUB_HOST}/{FINNHUB_API_PATH}/"),
            request_limit: Some(tier.request_limit()),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The vendor URL without its trailing `/`, suitable as a request base.
    pub fn api_base(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn request_limit(&self) -> Option<u32> {
        self.request_limit
    }
}
