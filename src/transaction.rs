//! Transaction records.
//!
//! With the `json` feature these types deserialize from the bank export
//! format:
//!
//! ```json
//! {
//!   "id": 441945886,
//!   "state": "EXECUTED",
//!   "date": "2019-08-26T10:50:58.294041",
//!   "operationAmount": {
//!     "amount": "31957.58",
//!     "currency": { "name": "руб.", "code": "RUB" }
//!   },
//!   "description": "Перевод организации",
//!   "from": "Maestro 1596837868705199",
//!   "to": "Счет 64686473678894779589"
//! }
//! ```
//!
//! Missing fields fall back to empty values, so partially filled records
//! (or `{}`) still load.

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

/// State value of a completed operation.
pub const STATE_EXECUTED: &str = "EXECUTED";

/// State value of a canceled operation.
pub const STATE_CANCELED: &str = "CANCELED";

/// A single bank operation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "json", serde(default, rename_all = "camelCase"))]
pub struct Transaction {
    /// Operation identifier.
    pub id: u64,
    /// Operation state, e.g. `EXECUTED` or `CANCELED`.
    pub state: String,
    /// ISO-8601 timestamp of the operation.
    pub date: String,
    /// Amount and currency.
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub operation_amount: Option<OperationAmount>,
    /// Free-form description.
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    /// Source, e.g. `"Visa Classic 6831982476737658"` or `"Счет 38976430693692818358"`.
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub from: Option<String>,
    /// Destination, same shape as `from`.
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub to: Option<String>,
}

impl Transaction {
    /// Creates a transaction with the given id, state and date.
    pub fn new(id: u64, state: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id,
            state: state.into(),
            date: date.into(),
            ..Self::default()
        }
    }

    /// Sets the amount.
    pub fn amount(mut self, amount: impl Into<String>, currency: Currency) -> Self {
        self.operation_amount = Some(OperationAmount {
            amount: amount.into(),
            currency,
        });
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the source.
    pub fn from_party(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Sets the destination.
    pub fn to_party(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Returns the currency code of the amount, if any.
    #[inline]
    pub fn currency_code(&self) -> Option<&str> {
        self.operation_amount
            .as_ref()
            .map(|amount| amount.currency.code.as_str())
    }
}

/// Amount of an operation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct OperationAmount {
    /// Decimal amount as written in the export (`"31957.58"`).
    #[cfg_attr(feature = "json", serde(deserialize_with = "string_or_number"))]
    pub amount: String,
    /// Currency of the amount.
    pub currency: Currency,
}

/// A currency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct Currency {
    /// Display name, e.g. `"руб."`.
    pub name: String,
    /// ISO 4217 code, e.g. `"RUB"`.
    pub code: String,
}

impl Currency {
    /// Creates a currency.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    /// Russian ruble.
    pub fn rub() -> Self {
        Self::new("руб.", "RUB")
    }

    /// US dollar.
    pub fn usd() -> Self {
        Self::new("USD", "USD")
    }

    /// Euro.
    pub fn eur() -> Self {
        Self::new("EUR", "EUR")
    }
}

/// Accepts `"31957.58"` as well as `31957.58`.
#[cfg(feature = "json")]
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Amount::deserialize(deserializer)? {
        Amount::Text(s) => s,
        Amount::Number(n) => n.to_string(),
    })
}
