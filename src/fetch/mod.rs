pub mod decode;
pub mod endpoints;
pub mod execute;
pub mod request;

pub use endpoints::{candles, exchanges, profile, profile_undated};
pub use request::{DateRange, QueryParams, RequestArgs, RequestDescriptor, DEFAULT_BASE_URL};
