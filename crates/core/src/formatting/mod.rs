//! Formatting module - display strings for amounts and fiat values.

mod amount_format;

pub use amount_format::{format_amount, format_usd_value, AmountFormat};
