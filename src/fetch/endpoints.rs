//! Presets that pin the endpoint category (and sometimes asset class or date
//! requirement) before handing off to [`RequestDescriptor::new`].

use crate::error::Result;

use super::request::{QueryParams, RequestArgs, RequestDescriptor};

pub const CANDLES_CATEGORY: &str = "candles";
pub const EXCHANGE_CATEGORY: &str = "exchange";
pub const PROFILE_CATEGORY: &str = "profile";
pub const PROFILE_ASSET: &str = "stock";

/// Price candles for `params` (symbol, resolution, adjusted, ...) between two `YYYY-MM-DD` dates.
pub fn candles(
    api_key: &str,
    asset: &str,
    start_date: &str,
    end_date: &str,
    params: QueryParams,
) -> Result<RequestDescriptor> {
    RequestDescriptor::new(RequestArgs {
        api_key: api_key.to_string(),
        asset: asset.to_string(),
        category: CANDLES_CATEGORY.to_string(),
        date_ranged: true,
        start_date: Some(start_date.to_string()),
        end_date: Some(end_date.to_string()),
        params,
        ..RequestArgs::default()
    })
}

/// Exchange listing for an asset class.
pub fn exchanges(api_key: &str, asset: &str, params: QueryParams) -> Result<RequestDescriptor> {
    RequestDescriptor::new(RequestArgs {
        api_key: api_key.to_string(),
        asset: asset.to_string(),
        category: EXCHANGE_CATEGORY.to_string(),
        params,
        ..RequestArgs::default()
    })
}

/// Company profile, date-ranged like candles. Both dates are required and are
/// sent as `from`/`to` even though the endpoint ignores them; see
/// [`profile_undated`] for the variant without the window.
pub fn profile(
    api_key: &str,
    start_date: Option<&str>,
    end_date: Option<&str>,
    params: QueryParams,
) -> Result<RequestDescriptor> {
    RequestDescriptor::new(RequestArgs {
        api_key: api_key.to_string(),
        asset: PROFILE_ASSET.to_string(),
        category: PROFILE_CATEGORY.to_string(),
        date_ranged: true,
        start_date: start_date.map(str::to_string),
        end_date: end_date.map(str::to_string),
        params,
        ..RequestArgs::default()
    })
}

/// Company profile without a date window.
pub fn profile_undated(api_key: &str, params: QueryParams) -> Result<RequestDescriptor> {
    RequestDescriptor::new(RequestArgs {
        api_key: api_key.to_string(),
        asset: PROFILE_ASSET.to_string(),
        category: PROFILE_CATEGORY.to_string(),
        params,
        ..RequestArgs::default()
    })
}
