pub mod time;

pub use time::{date_to_unix, parse_calendar_date};
