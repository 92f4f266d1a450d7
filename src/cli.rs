use std::fmt;

use clap::Parser;

use crate::config::AccountTier;
use crate::utils::parse_calendar_date;

/// Multi-letter flags historically spelled with a single dash.
const LEGACY_LONG_FLAGS: &[&str] = &["key", "tzn", "exchanges", "candles", "financials"];

#[derive(Debug, Parser)]
#[command(name = "finnhub-cli")]
#[command(about = "Interface for streaming data using the Finnhub API")]
#[command(version)]
pub struct Cli {
    /// Account plan type
    #[arg(short = 'p', value_enum)]
    pub plan: Option<AccountTier>,

    /// User generated API key (falls back to FINNHUB_API_KEY)
    #[arg(long = "key")]
    pub api_key: Option<String>,

    /// Start date: YYYY-MM-DD
    #[arg(short = 's', value_parser = parse_date_arg)]
    pub start: Option<String>,

    /// Final date: YYYY-MM-DD
    #[arg(short = 'f', value_parser = parse_date_arg)]
    pub finish: Option<String>,

    /// Exchange code; run with --exchanges to view options
    #[arg(short = 'x')]
    pub exchange: Option<String>,

    /// Timezone
    #[arg(long = "tzn")]
    pub timezone: Option<String>,

    /// Exchange options
    #[arg(long)]
    pub exchanges: bool,

    /// Candle price data
    #[arg(long)]
    pub candles: bool,

    /// Financial statement data
    #[arg(long)]
    pub financials: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Exchanges,
    Candles,
    Financials,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Exchanges => "exchanges",
            Action::Candles => "candles",
            Action::Financials => "financials",
        };
        f.write_str(name)
    }
}

impl Cli {
    /// Selected action switches, in declaration order.
    pub fn requested_actions(&self) -> Vec<Action> {
        [
            (self.exchanges, Action::Exchanges),
            (self.candles, Action::Candles),
            (self.financials, Action::Financials),
        ]
        .into_iter()
        .filter_map(|(selected, action)| selected.then_some(action))
        .collect()
    }
}

/// Options whose next argument is their value.
const VALUE_FLAGS: &[&str] = &["-p", "-s", "-f", "-x", "--key", "--tzn"];

/// Rewrite `-key`, `-tzn`, `-exchanges`, ... into the `--long` form clap expects.
/// Values that follow a value-taking option are left untouched.
pub fn normalize_legacy_flags<I>(args: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut normalized: Vec<String> = Vec::new();
    let mut expects_value = false;

    for arg in args {
        let arg: String = arg.into();
        if expects_value {
            expects_value = false;
            normalized.push(arg);
            continue;
        }

        let arg = if is_legacy_flag(&arg) {
            format!("-{arg}")
        } else {
            arg
        };
        expects_value = VALUE_FLAGS.contains(&arg.as_str());
        normalized.push(arg);
    }

    normalized
}

fn is_legacy_flag(arg: &str) -> bool {
    match arg.strip_prefix('-') {
        Some(rest) if !rest.starts_with('-') => {
            let name = rest.split('=').next().unwrap_or(rest);
            LEGACY_LONG_FLAGS.contains(&name)
        }
        _ => false,
    }
}

fn parse_date_arg(value: &str) -> Result<String, String> {
    parse_calendar_date(value)
        .map(|_| value.to_string())
        .map_err(|err| err.to_string())
}
