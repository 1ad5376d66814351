use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_FRACTION_DIGITS, DEFAULT_MIN_FRACTION_DIGITS, FIAT_DISPLAY_PRECISION,
    MAX_DECIMAL_SCALE, UNAVAILABLE_LABEL,
};
use crate::pipeline::UsdValue;

/// Decimal policy for rendering token amounts.
///
/// The default (0 to 6 fraction digits, grouped integer part) is shared by
/// every amount shown in the application, so that balances and conversion
/// results look alike.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AmountFormat {
    pub min_fraction_digits: u32,
    pub max_fraction_digits: u32,
    pub use_grouping: bool,
}

impl AmountFormat {
    /// Fixed two-digit policy used for fiat values.
    pub fn fiat() -> Self {
        Self {
            min_fraction_digits: FIAT_DISPLAY_PRECISION,
            max_fraction_digits: FIAT_DISPLAY_PRECISION,
            use_grouping: true,
        }
    }
}

impl Default for AmountFormat {
    fn default() -> Self {
        Self {
            min_fraction_digits: DEFAULT_MIN_FRACTION_DIGITS,
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
            use_grouping: true,
        }
    }
}

/// Renders `amount` as `1,234.5678`.
///
/// Rounds half away from zero to `max_fraction_digits`, drops trailing zeros
/// down to `min_fraction_digits`, and never renders a negative zero.
pub fn format_amount(amount: Decimal, format: &AmountFormat) -> String {
    let max_digits = format.max_fraction_digits.min(MAX_DECIMAL_SCALE);
    let min_digits = format.min_fraction_digits.min(max_digits);

    let rounded =
        amount.round_dp_with_strategy(max_digits, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = rounded.abs().to_string();

    let (integer_digits, fraction_digits) =
        plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let mut fraction = fraction_digits.trim_end_matches('0').to_string();
    while (fraction.len() as u32) < min_digits {
        fraction.push('0');
    }

    let integer = if format.use_grouping {
        group_thousands(integer_digits)
    } else {
        integer_digits.to_string()
    };

    let mut formatted = String::with_capacity(integer.len() + fraction.len() + 2);
    if negative {
        formatted.push('-');
    }
    formatted.push_str(&integer);
    if !fraction.is_empty() {
        formatted.push('.');
        formatted.push_str(&fraction);
    }
    formatted
}

/// Renders a fiat value with two fraction digits, or `N/A` when no price
/// was available.
pub fn format_usd_value(value: &UsdValue) -> String {
    match value {
        UsdValue::Known(amount) => format_amount(*amount, &AmountFormat::fiat()),
        UsdValue::Unavailable => UNAVAILABLE_LABEL.to_string(),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
