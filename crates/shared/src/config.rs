//! Rate table configuration loading.
//!
//! Sources, later ones override earlier ones:
//! - `config/rates.toml` (optional)
//! - `CONVERTER__*` environment variables, after `.env` has been read
//!
//! Rates are a list of tables rather than a map so that currency codes keep
//! their case; environment keys are lowercased by the loader.
//!
//! ```toml
//! base_currency = "EUR"
//!
//! [[rates]]
//! currency = "USD"
//! rate = 1.11
//! ```

use serde::{Deserialize, Serialize};

use crate::error::MoneyResult;
use crate::types::CurrencyCode;

/// Default path of the rates file, without extension.
pub const DEFAULT_RATES_FILE: &str = "config/rates";

/// Prefix of environment variables read by [`RatesConfig::load`].
pub const ENV_PREFIX: &str = "CONVERTER";

/// Rate table as read from configuration sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatesConfig {
    /// Currency all rates are expressed against.
    pub base_currency: CurrencyCode,
    /// Rates relative to the base currency.
    #[serde(default)]
    pub rates: Vec<RateEntry>,
}

/// One configured exchange rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    /// Quoted currency.
    pub currency: CurrencyCode,
    /// Units of `currency` per one unit of the base currency.
    pub rate: f64,
}

impl RatesConfig {
    /// Loads the rate table from the default file and the environment.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Config` if no base currency is configured or a
    /// source cannot be parsed.
    pub fn load() -> MoneyResult<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(DEFAULT_RATES_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Parses a rate table from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Config` if the text is not a valid rate table.
    pub fn from_toml(source: &str) -> MoneyResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Iterates over `(currency, rate)` pairs.
    pub fn rate_pairs(&self) -> impl Iterator<Item = (&CurrencyCode, f64)> {
        self.rates.iter().map(|entry| (&entry.currency, entry.rate))
    }
}
