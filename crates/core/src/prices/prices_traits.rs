use super::prices_model::PriceTable;
use crate::errors::Result;

/// Pull interface to the source of currency prices.
///
/// Implementations must hand back a table that already holds at most one
/// price per currency.
pub trait PriceSupplierTrait: Send + Sync {
    fn get_prices(&self) -> Result<PriceTable>;
}
