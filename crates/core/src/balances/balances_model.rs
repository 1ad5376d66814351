//! Balance domain models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::ROW_KEY_SEPARATOR;
use crate::errors::ValidationError;

/// A balance record as handed over by a balance supplier.
///
/// Every field is kept as loose JSON so that one bad record never prevents
/// the rest of a snapshot from being read. Use `Balance::try_from` to
/// validate it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawBalance {
    #[serde(default)]
    pub currency: Option<Value>,
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub blockchain: Option<Value>,
}

impl RawBalance {
    pub fn new(currency: &str, amount: Decimal, blockchain: &str) -> Self {
        Self {
            currency: Some(Value::String(currency.to_string())),
            amount: Some(Value::String(amount.to_string())),
            blockchain: Some(Value::String(blockchain.to_string())),
        }
    }
}

impl From<&Balance> for RawBalance {
    fn from(balance: &Balance) -> Self {
        RawBalance::new(&balance.currency, balance.amount, &balance.blockchain)
    }
}

/// A validated holding of `currency` on `blockchain`.
///
/// `amount` is a raw token quantity, not a fiat value. It may be zero or
/// negative; the display pipeline decides whether such balances are shown.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub currency: String,
    pub amount: Decimal,
    pub blockchain: String,
}

impl Balance {
    pub fn new(
        currency: impl Into<String>,
        amount: Decimal,
        blockchain: impl Into<String>,
    ) -> Self {
        Self {
            currency: currency.into(),
            amount,
            blockchain: blockchain.into(),
        }
    }

    /// Composite identity of this balance.
    pub fn key(&self) -> BalanceKey {
        BalanceKey::new(&self.blockchain, &self.currency)
    }
}

impl TryFrom<&RawBalance> for Balance {
    type Error = ValidationError;

    fn try_from(raw: &RawBalance) -> Result<Self, Self::Error> {
        let currency = required_text(raw.currency.as_ref(), "currency")?;
        let blockchain = required_text(raw.blockchain.as_ref(), "blockchain")?;
        let amount = match raw.amount.as_ref() {
            Some(value) => parse_amount(value)?,
            None => return Err(ValidationError::MissingField("amount".to_string())),
        };

        Ok(Balance {
            currency,
            amount,
            blockchain,
        })
    }
}

/// `(blockchain, currency)` pair identifying a balance row.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub struct BalanceKey {
    pub blockchain: String,
    pub currency: String,
}

impl BalanceKey {
    pub fn new(blockchain: &str, currency: &str) -> Self {
        Self {
            blockchain: blockchain.to_string(),
            currency: currency.to_string(),
        }
    }
}

impl fmt::Display for BalanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.blockchain, ROW_KEY_SEPARATOR, self.currency)
    }
}

fn required_text(value: Option<&Value>, field: &str) -> Result<String, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field.to_string())),
        Some(Value::String(text)) if text.trim().is_empty() => {
            Err(ValidationError::EmptyField(field.to_string()))
        }
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(ValidationError::InvalidInput(format!(
            "field '{}' must be a string, got {}",
            field, other
        ))),
    }
}

/// Parses a token amount from a JSON number or a numeric string.
///
/// Scientific notation (`1e-7`) is accepted. Values outside the range of
/// `Decimal` are rejected rather than clamped.
pub fn parse_amount(value: &Value) -> Result<Decimal, ValidationError> {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.trim().to_string(),
        Value::Null => return Err(ValidationError::MissingField("amount".to_string())),
        other => return Err(ValidationError::InvalidAmount(other.to_string())),
    };

    if text.is_empty() {
        return Err(ValidationError::InvalidAmount("empty string".to_string()));
    }

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| ValidationError::InvalidAmount(text))
}
