//! Balances module - input records, validation, and suppliers.

mod balances_model;
mod balances_supplier;
mod balances_traits;


pub use balances_model::{parse_amount, Balance, BalanceKey, RawBalance};
pub use balances_supplier::{InMemoryBalanceSupplier, JsonFileBalanceSupplier};
pub use balances_traits::BalanceSupplierTrait;
