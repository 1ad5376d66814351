//! Stage and output models for the balance display pipeline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::balances::Balance;
use crate::errors::ValidationError;
use crate::utils::decimal_serde::decimal_serde;

/// Secondary ordering applied between balances of equal priority.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum TieBreak {
    /// Keep the order in which the supplier returned the balances.
    #[default]
    InputOrder,
    /// Order by currency code, ascending. Equal currencies keep input order.
    Currency,
}

/// A balance that passed the filter, with the priority it was ranked by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilteredBalance<'a> {
    pub balance: &'a Balance,
    pub priority: i32,
}

/// A filtered balance placed at its final display position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedBalance<'a> {
    pub balance: &'a Balance,
    pub priority: i32,
    pub position: usize,
}

/// Fiat value of a row.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum UsdValue {
    Known(#[serde(with = "decimal_serde")] Decimal),
    /// No price for the currency, or the product is not representable.
    Unavailable,
}

impl UsdValue {
    pub fn known(&self) -> Option<Decimal> {
        match self {
            UsdValue::Known(value) => Some(*value),
            UsdValue::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, UsdValue::Unavailable)
    }
}

/// A render-ready row.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub currency: String,
    pub blockchain: String,
    #[serde(with = "decimal_serde")]
    pub amount: Decimal,
    pub formatted_amount: String,
    pub usd_value: UsdValue,
    /// `"{blockchain}-{currency}"`, the renderer's identity for the row.
    pub key: String,
}

/// A balance record that could not be validated and was left out.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedRecord {
    /// Position of the record in the supplier's snapshot.
    pub index: usize,
    pub error: ValidationError,
}

/// What the pipeline dropped or degraded while rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderDiagnostics {
    pub malformed_records: Vec<MalformedRecord>,
    /// Keys of rendered rows whose currency had no price.
    pub missing_prices: Vec<String>,
    /// Keys that appear on more than one rendered row.
    pub duplicate_keys: Vec<String>,
    /// Keys of rendered rows whose fiat value overflowed.
    pub valuation_overflows: Vec<String>,
    pub excluded_unranked: usize,
    pub excluded_non_positive: usize,
}

impl RenderDiagnostics {
    pub fn is_clean(&self) -> bool {
        self.malformed_records.is_empty()
            && self.missing_prices.is_empty()
            && self.duplicate_keys.is_empty()
            && self.valuation_overflows.is_empty()
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOutput {
    pub rows: Vec<DisplayRow>,
    pub diagnostics: RenderDiagnostics,
}

impl RenderOutput {
    /// Sum of all known fiat values. Rows without a price contribute nothing.
    pub fn total_usd_value(&self) -> Decimal {
        sum_known(self.rows.iter())
    }

    /// Sum of known fiat values over `rows_by_key`, so a key shared by
    /// several rows is counted once, with its last row.
    pub fn keyed_total_usd_value(&self) -> Decimal {
        sum_known(self.last_rows_per_key())
    }

    pub fn has_unavailable_values(&self) -> bool {
        self.rows.iter().any(|row| row.usd_value.is_unavailable())
    }

    /// Like `has_unavailable_values`, restricted to the last row per key.
    pub fn has_unavailable_keyed_values(&self) -> bool {
        self.last_rows_per_key().any(|row| row.usd_value.is_unavailable())
    }

    /// Rows that win their key under last-write-wins, in row order.
    fn last_rows_per_key(&self) -> impl Iterator<Item = &DisplayRow> {
        let by_key = self.rows_by_key();
        self.rows.iter().filter(move |row| {
            by_key
                .get(row.key.as_str())
                .is_some_and(|winner| std::ptr::eq(*winner, *row))
        })
    }

    /// Rows indexed by key. When keys collide, the last row wins, which is
    /// how a keyed renderer resolves duplicate identities.
    pub fn rows_by_key(&self) -> HashMap<&str, &DisplayRow> {
        let mut by_key = HashMap::with_capacity(self.rows.len());
        for row in &self.rows {
            by_key.insert(row.key.as_str(), row);
        }
        by_key
    }
}

fn sum_known<'a>(rows: impl Iterator<Item = &'a DisplayRow>) -> Decimal {
    rows.filter_map(|row| row.usd_value.known())
        .fold(Decimal::ZERO, |total, value| total.saturating_add(value))
}
