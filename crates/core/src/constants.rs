/// Priority assigned to any blockchain missing from the priority table.
pub const UNRANKED_PRIORITY: i32 = -99;

/// Fraction digits bounds for formatted token amounts
pub const DEFAULT_MIN_FRACTION_DIGITS: u32 = 0;
pub const DEFAULT_MAX_FRACTION_DIGITS: u32 = 6;

/// Fraction digits for fiat values shown next to a row
pub const FIAT_DISPLAY_PRECISION: u32 = 2;

/// Largest scale `rust_decimal` can represent
pub const MAX_DECIMAL_SCALE: u32 = 28;

/// Separator used when building a row key from blockchain and currency
pub const ROW_KEY_SEPARATOR: &str = "-";

/// Rendered in place of a fiat value when no price is known
pub const UNAVAILABLE_LABEL: &str = "N/A";
