use log::{debug, warn};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::balances_model::RawBalance;
use super::balances_traits::BalanceSupplierTrait;
use crate::errors::{Error, Result};

/// Balance supplier backed by a snapshot held in memory.
///
/// The host replaces the snapshot whenever its own source changes; every
/// pull returns a copy of whatever is current.
#[derive(Debug, Default)]
pub struct InMemoryBalanceSupplier {
    snapshot: RwLock<Vec<RawBalance>>,
}

impl InMemoryBalanceSupplier {
    pub fn new(balances: Vec<RawBalance>) -> Self {
        Self {
            snapshot: RwLock::new(balances),
        }
    }

    /// Replaces the current snapshot.
    pub fn replace(&self, balances: Vec<RawBalance>) -> Result<()> {
        let mut snapshot = self
            .snapshot
            .write()
            .map_err(|e| Error::Supplier(format!("Balance snapshot lock poisoned: {}", e)))?;
        *snapshot = balances;
        Ok(())
    }
}

impl BalanceSupplierTrait for InMemoryBalanceSupplier {
    fn get_balances(&self) -> Result<Vec<RawBalance>> {
        let snapshot = self
            .snapshot
            .read()
            .map_err(|e| Error::Supplier(format!("Balance snapshot lock poisoned: {}", e)))?;
        Ok(snapshot.clone())
    }
}

/// Balance supplier reading a JSON array of balance records from disk.
///
/// The file is re-read on every pull. Only a file that is unreadable or not a
/// JSON array fails the pull; an element that is not a record object is
/// passed on as an empty `RawBalance` so the pipeline reports it as malformed.
#[derive(Debug, Clone)]
pub struct JsonFileBalanceSupplier {
    path: PathBuf,
}

impl JsonFileBalanceSupplier {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BalanceSupplierTrait for JsonFileBalanceSupplier {
    fn get_balances(&self) -> Result<Vec<RawBalance>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            Error::Supplier(format!(
                "Failed to read balances from {}: {}",
                self.path.display(),
                e
            ))
        })?;
        let elements: Vec<Value> = serde_json::from_str(&content).map_err(|e| {
            Error::Supplier(format!(
                "Failed to parse balances from {}: {}",
                self.path.display(),
                e
            ))
        })?;
        let balances: Vec<RawBalance> = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| {
                serde_json::from_value(element).unwrap_or_else(|e| {
                    warn!(
                        "Balance record #{} in {} is not an object: {}",
                        index,
                        self.path.display(),
                        e
                    );
                    RawBalance::default()
                })
            })
            .collect();
        debug!(
            "Loaded {} balance records from {}",
            balances.len(),
            self.path.display()
        );
        Ok(balances)
    }
}
