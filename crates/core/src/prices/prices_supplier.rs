use log::{debug, warn};
use rust_decimal::Decimal;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::prices_model::{PriceEntry, PriceTable};
use super::prices_traits::PriceSupplierTrait;
use crate::errors::{Error, Result};

/// Price supplier holding a table in memory.
#[derive(Debug, Default)]
pub struct InMemoryPriceSupplier {
    table: RwLock<PriceTable>,
}

impl InMemoryPriceSupplier {
    pub fn new(table: PriceTable) -> Self {
        Self {
            table: RwLock::new(table),
        }
    }

    /// Replaces the table with one built from a raw feed, applying the
    /// last-seen-wins dedup rule.
    pub fn replace_entries(&self, entries: Vec<PriceEntry>) -> Result<()> {
        let mut table = self
            .table
            .write()
            .map_err(|e| Error::Supplier(format!("Price table lock poisoned: {}", e)))?;
        *table = PriceTable::from_entries(entries);
        Ok(())
    }
}

impl PriceSupplierTrait for InMemoryPriceSupplier {
    fn get_prices(&self) -> Result<PriceTable> {
        let table = self
            .table
            .read()
            .map_err(|e| Error::Supplier(format!("Price table lock poisoned: {}", e)))?;
        Ok(table.clone())
    }
}

/// Price supplier reading a JSON price feed (array of `PriceEntry`) from disk.
///
/// Entries that do not parse, or carry a negative price, are dropped with a
/// warning; the rest of the feed is still used.
#[derive(Debug, Clone)]
pub struct JsonFilePriceSupplier {
    path: PathBuf,
}

impl JsonFilePriceSupplier {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PriceSupplierTrait for JsonFilePriceSupplier {
    fn get_prices(&self) -> Result<PriceTable> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            Error::Supplier(format!(
                "Failed to read prices from {}: {}",
                self.path.display(),
                e
            ))
        })?;
        let elements: Vec<Value> = serde_json::from_str(&content).map_err(|e| {
            Error::Supplier(format!(
                "Failed to parse prices from {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let total = elements.len();
        let entries: Vec<PriceEntry> = elements
            .into_iter()
            .enumerate()
            .filter_map(|(index, element)| {
                let entry: PriceEntry = match serde_json::from_value(element) {
                    Ok(entry) => entry,
                    Err(e) => {
                        warn!(
                            "Dropping unreadable price entry #{} from {}: {}",
                            index,
                            self.path.display(),
                            e
                        );
                        return None;
                    }
                };
                if entry.price < Decimal::ZERO {
                    warn!(
                        "Dropping negative price {} for {} from {}",
                        entry.price,
                        entry.currency,
                        self.path.display()
                    );
                    return None;
                }
                Some(entry)
            })
            .collect();

        let table = PriceTable::from_entries(entries);
        debug!(
            "Loaded {} prices ({} feed entries) from {}",
            table.len(),
            total,
            self.path.display()
        );
        Ok(table)
    }
}
