use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One quote from a token price feed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntry {
    pub currency: String,
    pub price: Decimal,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl PriceEntry {
    pub fn new(currency: &str, price: Decimal) -> Self {
        Self {
            currency: currency.to_string(),
            price,
            date: None,
        }
    }
}

/// Fiat (USD) price per currency, at most one price per currency.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceTable {
    prices: HashMap<String, Decimal>,
    as_of: Option<DateTime<Utc>>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a raw feed.
    ///
    /// When several entries share a currency, the one seen last wins,
    /// regardless of its `date`. `as_of` is the latest date among the
    /// entries that were kept.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = PriceEntry>,
    {
        let mut latest: HashMap<String, PriceEntry> = HashMap::new();
        for entry in entries {
            latest.insert(entry.currency.clone(), entry);
        }

        let as_of = latest.values().filter_map(|entry| entry.date).max();
        let prices = latest
            .into_iter()
            .map(|(currency, entry)| (currency, entry.price))
            .collect();

        Self { prices, as_of }
    }

    pub fn get(&self, currency: &str) -> Option<Decimal> {
        self.prices.get(currency).copied()
    }

    /// Sets the price for `currency`, returning the price it replaced.
    pub fn insert(&mut self, currency: impl Into<String>, price: Decimal) -> Option<Decimal> {
        self.prices.insert(currency.into(), price)
    }

    pub fn with_price(mut self, currency: &str, price: Decimal) -> Self {
        self.insert(currency, price);
        self
    }

    pub fn contains(&self, currency: &str) -> bool {
        self.prices.contains_key(currency)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Currencies with a known price, sorted.
    pub fn currencies(&self) -> Vec<&str> {
        let mut currencies: Vec<&str> = self.prices.keys().map(String::as_str).collect();
        currencies.sort_unstable();
        currencies
    }

    pub fn as_of(&self) -> Option<DateTime<Utc>> {
        self.as_of
    }
}

impl FromIterator<(String, Decimal)> for PriceTable {
    fn from_iter<T: IntoIterator<Item = (String, Decimal)>>(iter: T) -> Self {
        Self {
            prices: iter.into_iter().collect(),
            as_of: None,
        }
    }
}
