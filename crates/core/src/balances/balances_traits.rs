use super::balances_model::RawBalance;
use crate::errors::Result;

/// Pull interface to whatever owns the wallet's current balances.
///
/// Each call returns the latest snapshot. Refresh cadence and caching are the
/// supplier's business.
pub trait BalanceSupplierTrait: Send + Sync {
    fn get_balances(&self) -> Result<Vec<RawBalance>>;
}
