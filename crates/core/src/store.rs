//! Process-wide rate table.
//!
//! `configure` swaps in a new immutable snapshot; readers clone the `Arc`.
//! Money values keep the snapshot they were built with, so reconfiguring never
//! changes or re-validates existing values.

use std::ops::Deref;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;
use tracing::info;

use converter_shared::{CurrencyCode, MoneyResult, RatesConfig};

use crate::configuration::Configuration;
use crate::money::Money;

static CONFIGURATION: Lazy<RwLock<Option<Arc<Configuration>>>> = Lazy::new(|| RwLock::new(None));

/// Handle returned by the configure calls, for chaining.
///
/// ```
/// let money = converter_core::configure("EUR", [("USD", 1.11)])
///     .unwrap()
///     .money(50, "EUR")
///     .unwrap();
/// assert_eq!(money.to_string(), "50.00 EUR");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigurationHandle(Arc<Configuration>);

impl ConfigurationHandle {
    /// Returns the installed configuration.
    #[must_use]
    pub fn configuration(&self) -> &Arc<Configuration> {
        &self.0
    }

    /// Creates money validated against this configuration.
    pub fn money(
        &self,
        amount: impl Into<f64>,
        currency: impl Into<CurrencyCode>,
    ) -> MoneyResult<Money> {
        Money::with_configuration(Arc::clone(&self.0), amount, currency)
    }
}

impl Deref for ConfigurationHandle {
    type Target = Configuration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Replaces the global configuration.
///
/// # Errors
///
/// Returns `InvalidArgument` if the base currency is empty. The previous
/// configuration stays in place in that case.
pub fn configure<B, I, K, V>(base_currency: B, rates: I) -> MoneyResult<ConfigurationHandle>
where
    B: Into<CurrencyCode>,
    I: IntoIterator<Item = (K, V)>,
    K: Into<CurrencyCode>,
    V: Into<f64>,
{
    Ok(install(Configuration::new(base_currency, rates)?))
}

/// Replaces the global configuration with one that only knows the base.
pub fn configure_base(base_currency: impl Into<CurrencyCode>) -> MoneyResult<ConfigurationHandle> {
    Ok(install(Configuration::base_only(base_currency)?))
}

/// Replaces the global configuration with a loaded rate table.
pub fn configure_from_settings(settings: &RatesConfig) -> MoneyResult<ConfigurationHandle> {
    Ok(install(Configuration::try_from(settings)?))
}

/// Returns the current configuration, or `None` before the first configure call.
#[must_use]
pub fn configuration() -> Option<Arc<Configuration>> {
    CONFIGURATION
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

fn install(configuration: Configuration) -> ConfigurationHandle {
    let configuration = Arc::new(configuration);
    info!(
        base_currency = %configuration.base_currency(),
        rates = configuration.rates().len(),
        "Configured conversion rates"
    );

    *CONFIGURATION
        .write()
        .unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&configuration));

    ConfigurationHandle(configuration)
}
