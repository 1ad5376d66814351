//! Prices module - price table, feed entries, and suppliers.

mod prices_model;
mod prices_supplier;
mod prices_traits;

#[cfg(test)]
mod prices_model_tests;

pub use prices_model::{PriceEntry, PriceTable};
pub use prices_supplier::{InMemoryPriceSupplier, JsonFilePriceSupplier};
pub use prices_traits::PriceSupplierTrait;
