use crate::error::{AppError, Result};
use crate::utils::date_to_unix;

pub const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";

const TOKEN_KEY: &str = "token=";

/// Insertion-ordered query parameters. Re-inserting a key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn uppercase_value(&mut self, key: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| existing == key) {
            entry.1 = entry.1.to_uppercase();
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Caller-supplied inputs for a single API call.
#[derive(Debug, Clone, Default)]
pub struct RequestArgs {
    pub api_key: String,
    /// Asset class segment, e.g. `stock`.
    pub asset: String,
    /// Endpoint category segment, e.g. `candles`.
    pub category: String,
    pub date_ranged: bool,
    /// `YYYY-MM-DD`; only consulted when `date_ranged` is set.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Accepted but not used for timezone resolution.
    pub exchange: Option<String>,
    /// Overrides [`DEFAULT_BASE_URL`].
    pub base: Option<String>,
    pub params: QueryParams,
}

/// Request window as UTC Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: i64,
    pub to: i64,
}

impl DateRange {
    pub fn from_dates(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            from: date_to_unix(start)?,
            to: date_to_unix(end)?,
        })
    }
}

/// One fully validated API call. The URL is assembled once, at construction.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    api_key: String,
    asset: String,
    category: String,
    base: String,
    exchange: Option<String>,
    params: QueryParams,
    dates: Option<DateRange>,
    url: String,
}

impl RequestDescriptor {
    pub fn new(args: RequestArgs) -> Result<Self> {
        let RequestArgs {
            api_key,
            asset,
            category,
            date_ranged,
            start_date,
            end_date,
            exchange,
            base,
            mut params,
        } = args;

        params.uppercase_value("symbol");

        let dates = if date_ranged {
            match (non_blank(&start_date), non_blank(&end_date)) {
                (Some(start), Some(end)) => Some(DateRange::from_dates(start, end)?),
                _ => {
                    log::error!("`{}` request needs both a start and an end date", category);
                    return Err(AppError::configuration("missing required date range"));
                }
            }
        } else {
            None
        };

        let mut descriptor = Self {
            api_key,
            asset,
            category,
            base: base.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            exchange,
            params,
            dates,
            url: String::new(),
        };

        let url = descriptor.generate_url().map_err(|err| {
            log::error!("Incomplete arguments for `{}` request: {}", descriptor.category, err);
            AppError::configuration("incomplete arguments")
        })?;
        descriptor.url = url;
        log::debug!("Prepared request {}", descriptor.redacted_url());

        Ok(descriptor)
    }

    /// Assemble `base/asset/category?k=v&...[from=..&to=..&]token=key`.
    ///
    /// Parameter values are written verbatim, without percent-encoding.
    pub fn generate_url(&self) -> Result<String> {
        for (field, value) in [
            ("base", &self.base),
            ("asset", &self.asset),
            ("category", &self.category),
            ("api_key", &self.api_key),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::configuration(format!("`{field}` is empty")));
            }
        }

        let mut url = format!("{}/{}/{}?", self.base, self.asset, self.category);

        for (key, value) in self.params.iter() {
            url.push_str(key);
            url.push('=');
            url.push_str(value);
            url.push('&');
        }

        if let Some(range) = self.dates {
            url.push_str(&format!("from={}&to={}&", range.from, range.to));
        }

        url.push_str(TOKEN_KEY);
        url.push_str(&self.api_key);

        Ok(url)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The URL with the credential masked, for diagnostics.
    pub fn redacted_url(&self) -> String {
        // The key is always the final component of the URL.
        match self.url.strip_suffix(self.api_key.as_str()) {
            Some(prefix) => format!("{prefix}***"),
            None => format!("{}***", self.url.split(TOKEN_KEY).next().unwrap_or_default()),
        }
    }

    pub fn asset(&self) -> &str {
        &self.asset
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub fn date_range(&self) -> Option<DateRange> {
        self.dates
    }

    pub fn is_date_ranged(&self) -> bool {
        self.dates.is_some()
    }

    pub fn exchange(&self) -> Option<&str> {
        self.exchange.as_deref()
    }

    /// Geographic/timezone context of the listing exchange.
    pub fn resolve_exchange(&self) -> Result<String> {
        Err(AppError::NotSupported("exchange resolution"))
    }
}

/// Blank dates count as missing.
fn non_blank(date: &Option<String>) -> Option<&str> {
    date.as_deref().filter(|value| !value.trim().is_empty())
}
