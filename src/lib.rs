pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod records;
pub mod utils;

pub use error::{AppError, Result};
pub use fetch::{QueryParams, RequestArgs, RequestDescriptor};
pub use records::Table;
