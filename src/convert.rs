//! Conversion of transaction amounts to rubles.
//!
//! [`convert_to_rubles`] works against any [`RateProvider`]. With the
//! `convert` feature, [`ApiLayerClient`] provides rates from the
//! exchangerates API over HTTP.
//!
//! # Example
//!
//! ```
//! use bank_widget::convert::{convert_to_rubles, ConvertError, RateProvider};
//! use bank_widget::{Currency, Transaction};
//!
//! struct FixedRate(f64);
//!
//! impl RateProvider for FixedRate {
//!     fn convert(&self, _from: &str, _to: &str, amount: f64) -> Result<f64, ConvertError> {
//!         Ok(amount * self.0)
//!     }
//! }
//!
//! let tx = Transaction::new(1, "EXECUTED", "2019-07-03T18:35:29.512364")
//!     .amount("10", Currency::usd());
//! assert_eq!(convert_to_rubles(&tx, &FixedRate(90.0)).unwrap(), 900.0);
//! ```

use crate::transaction::Transaction;
use std::fmt;

/// Currency all amounts are converted to.
pub const TARGET_CURRENCY: &str = "RUB";

/// Currencies that can be converted through a [`RateProvider`].
pub const CONVERTIBLE_CURRENCIES: [&str; 2] = ["USD", "EUR"];

/// Errors that can occur during conversion.
#[derive(Debug)]
pub enum ConvertError {
    /// A required field is missing from the transaction.
    MissingField(&'static str),
    /// The amount is not a decimal number.
    InvalidAmount(String),
    /// The currency is neither the target nor a convertible currency.
    UnsupportedCurrency(String),
    /// No API key is configured.
    MissingApiKey,
    /// The rate API response has no numeric `result`.
    MissingResult,
    /// The HTTP request failed or returned a non-success status.
    #[cfg(feature = "convert")]
    Http(reqwest::Error),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "transaction has no '{}' field", field),
            Self::InvalidAmount(amount) => {
                write!(f, "amount '{}' is not a number", amount.escape_default())
            }
            Self::UnsupportedCurrency(code) => write!(
                f,
                "unsupported currency '{}': only {}, {} are supported",
                code.escape_default(),
                TARGET_CURRENCY,
                CONVERTIBLE_CURRENCIES.join(", ")
            ),
            Self::MissingApiKey => write!(f, "API_KEY_CURRENCY is not set"),
            Self::MissingResult => write!(f, "rate API response has no 'result' field"),
            #[cfg(feature = "convert")]
            Self::Http(e) => write!(f, "currency API request failed: {}", e),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "convert")]
            Self::Http(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "convert")]
impl From<reqwest::Error> for ConvertError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

/// A source of currency conversions.
pub trait RateProvider {
    /// Converts `amount` from currency `from` to currency `to`.
    fn convert(&self, from: &str, to: &str, amount: f64) -> Result<f64, ConvertError>;
}

impl<P: RateProvider + ?Sized> RateProvider for &P {
    fn convert(&self, from: &str, to: &str, amount: f64) -> Result<f64, ConvertError> {
        (**self).convert(from, to, amount)
    }
}

/// Returns the transaction amount in rubles.
///
/// Ruble amounts are returned as is without consulting `provider`; USD and
/// EUR amounts are converted through it.
///
/// # Errors
///
/// - [`ConvertError::MissingField`] if the transaction has no amount or
///   no currency code.
/// - [`ConvertError::InvalidAmount`] if the amount does not parse.
/// - [`ConvertError::UnsupportedCurrency`] for any other currency.
/// - Any error returned by `provider`.
pub fn convert_to_rubles<P: RateProvider>(transaction: &Transaction, provider: P) -> Result<f64, ConvertError> {
    let operation_amount = transaction
        .operation_amount
        .as_ref()
        .ok_or(ConvertError::MissingField("operationAmount"))?;

    let code = operation_amount.currency.code.as_str();
    if code.is_empty() {
        return Err(ConvertError::MissingField("operationAmount.currency.code"));
    }

    let amount: f64 = operation_amount
        .amount
        .trim()
        .parse()
        .map_err(|_| ConvertError::InvalidAmount(operation_amount.amount.clone()))?;

    if code == TARGET_CURRENCY {
        return Ok(amount);
    }

    if !CONVERTIBLE_CURRENCIES.contains(&code) {
        return Err(ConvertError::UnsupportedCurrency(code.to_string()));
    }

    tracing::debug!(id = transaction.id, from = code, amount, "converting amount");
    provider.convert(code, TARGET_CURRENCY, amount)
}

#[cfg(feature = "convert")]
pub use client::{ApiLayerClient, ConverterConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT};

#[cfg(feature = "convert")]
mod client {
    use super::{ConvertError, RateProvider};
    use std::env;
    use std::fmt;
    use std::time::Duration;

    /// Default rate API endpoint.
    pub const DEFAULT_API_URL: &str = "https://api.apilayer.com/exchangerates_data/convert";

    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Settings for [`ApiLayerClient`].
    #[derive(Clone)]
    pub struct ConverterConfig {
        api_key: String,
        base_url: String,
        timeout: Duration,
    }

    impl ConverterConfig {
        /// Creates a config with the default endpoint and timeout.
        pub fn new(api_key: impl Into<String>) -> Self {
            Self {
                api_key: api_key.into(),
                base_url: DEFAULT_API_URL.to_string(),
                timeout: DEFAULT_TIMEOUT,
            }
        }

        /// Reads the config from the environment, loading `.env` first if present.
        ///
        /// - `API_KEY_CURRENCY` (required)
        /// - `CURRENCY_API_URL` (optional)
        /// - `CURRENCY_API_TIMEOUT_SECS` (optional, whole seconds)
        pub fn from_env() -> Result<Self, ConvertError> {
            let _ = dotenvy::dotenv();

            let api_key = env::var("API_KEY_CURRENCY")
                .ok()
                .filter(|key| !key.is_empty())
                .ok_or(ConvertError::MissingApiKey)?;
            let mut config = Self::new(api_key);

            if let Ok(url) = env::var("CURRENCY_API_URL") {
                config = config.base_url(url);
            }

            if let Ok(secs) = env::var("CURRENCY_API_TIMEOUT_SECS") {
                match secs.parse::<u64>() {
                    Ok(secs) => config = config.timeout(Duration::from_secs(secs)),
                    Err(_) => tracing::warn!(value = %secs, "ignoring invalid CURRENCY_API_TIMEOUT_SECS"),
                }
            }

            Ok(config)
        }

        /// Sets the endpoint URL.
        pub fn base_url(mut self, url: impl Into<String>) -> Self {
            self.base_url = url.into();
            self
        }

        /// Sets the request timeout.
        pub fn timeout(mut self, timeout: Duration) -> Self {
            self.timeout = timeout;
            self
        }

        /// Returns the endpoint URL.
        pub fn url(&self) -> &str {
            &self.base_url
        }

        /// Returns the request timeout.
        pub fn request_timeout(&self) -> Duration {
            self.timeout
        }
    }

    impl fmt::Debug for ConverterConfig {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("ConverterConfig")
                .field("api_key", &"<redacted>")
                .field("base_url", &self.base_url)
                .field("timeout", &self.timeout)
                .finish()
        }
    }

    /// Blocking client for the exchangerates `convert` endpoint.
    #[derive(Debug, Clone)]
    pub struct ApiLayerClient {
        http: reqwest::blocking::Client,
        config: ConverterConfig,
    }

    impl ApiLayerClient {
        /// Creates a client from the given config.
        pub fn new(config: ConverterConfig) -> Result<Self, ConvertError> {
            let http = reqwest::blocking::Client::builder()
                .timeout(config.timeout)
                .build()?;
            Ok(Self { http, config })
        }

        /// Creates a client configured from the environment.
        pub fn from_env() -> Result<Self, ConvertError> {
            Self::new(ConverterConfig::from_env()?)
        }
    }

    impl RateProvider for ApiLayerClient {
        fn convert(&self, from: &str, to: &str, amount: f64) -> Result<f64, ConvertError> {
            let amount = amount.to_string();
            let response = self
                .http
                .get(&self.config.base_url)
                .query(&[("from", from), ("to", to), ("amount", amount.as_str())])
                .header("apikey", &self.config.api_key)
                .send()?
                .error_for_status()?;

            let body: serde_json::Value = response.json()?;
            body.get("result")
                .and_then(|result| {
                    result
                        .as_f64()
                        .or_else(|| result.as_str().and_then(|s| s.parse().ok()))
                })
                .ok_or(ConvertError::MissingResult)
        }
    }

}
