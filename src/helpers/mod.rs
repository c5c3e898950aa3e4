//! Helper functions shared by the content tools

pub mod date;

pub use date::{format_date, month_year_to_date, parse_date};
