use crate::cli::Cli;
use crate::config::{ClientConfig, DataVendor};
use crate::error::Result;

/// Entry point used by `main`: resolve configuration and report what was requested.
///
/// Action switches are parsed but not dispatched to any request yet.
pub fn run(cli: &Cli) -> Result<()> {
    let config = ClientConfig::from_env().with_api_key(cli.api_key.clone());
    log::debug!("Using API base {}", config.base_url);

    if let Some(tier) = cli.plan {
        let vendor = DataVendor::finnhub(tier);
        log::info!(
            "Plan `{}` allows {} requests per minute against {}",
            tier,
            tier.request_limit(),
            vendor.url()
        );
    }

    if config.api_key.is_none() {
        log::warn!("No API key supplied; pass --key or set FINNHUB_API_KEY");
    }

    let actions = cli.requested_actions();
    if actions.is_empty() {
        log::info!("No action selected");
    }
    for action in actions {
        log::warn!("`{}` action is not dispatched yet", action);
    }

    Ok(())
}
