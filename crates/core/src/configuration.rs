//! Rate table: a base currency and rates expressed against it.

use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

use converter_shared::{CurrencyCode, MoneyError, MoneyResult, RatesConfig};

/// Conversion rates relative to a base currency.
///
/// The base currency always has an implicit rate of 1.0, even if the rate map
/// also lists it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configuration {
    base_currency: CurrencyCode,
    rates: HashMap<CurrencyCode, f64>,
}

impl Configuration {
    /// Builds a rate table.
    ///
    /// Keys are normalized to [`CurrencyCode`] and values to `f64`. Rates are
    /// not validated here; a bad rate fails the conversion that needs it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the base currency is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use converter_core::Configuration;
    ///
    /// let config = Configuration::new("EUR", [("USD", 1.11), ("Bitcoin", 0.0047)]).unwrap();
    /// assert_eq!(config.base_currency().as_str(), "EUR");
    /// ```
    pub fn new<B, I, K, V>(base_currency: B, rates: I) -> MoneyResult<Self>
    where
        B: Into<CurrencyCode>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<CurrencyCode>,
        V: Into<f64>,
    {
        let base_currency = base_currency.into();
        if base_currency.is_empty() {
            return Err(MoneyError::InvalidArgument(
                "Should provide base currency".to_string(),
            ));
        }

        let rates = rates
            .into_iter()
            .map(|(currency, rate)| (currency.into(), rate.into()))
            .collect();

        Ok(Self {
            base_currency,
            rates,
        })
    }

    /// Builds a rate table that only knows the base currency.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the base currency is empty.
    pub fn base_only(base_currency: impl Into<CurrencyCode>) -> MoneyResult<Self> {
        Self::new(base_currency, std::iter::empty::<(CurrencyCode, f64)>())
    }

    /// Returns the base currency.
    #[must_use]
    pub fn base_currency(&self) -> &CurrencyCode {
        &self.base_currency
    }

    /// Returns the configured rates, keyed by currency.
    #[must_use]
    pub fn rates(&self) -> &HashMap<CurrencyCode, f64> {
        &self.rates
    }

    /// Returns true if the currency is the base or has a configured rate.
    #[must_use]
    pub fn is_known(&self, currency: &CurrencyCode) -> bool {
        *currency == self.base_currency || self.rates.contains_key(currency)
    }

    /// Fails with `UnknownCurrency` unless the currency is known.
    pub fn ensure_known(&self, currency: &CurrencyCode) -> MoneyResult<()> {
        if self.is_known(currency) {
            Ok(())
        } else {
            Err(MoneyError::UnknownCurrency(currency.clone()))
        }
    }

    /// Returns the usable rate of a currency against the base.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRate` if the rate is missing, zero, negative, or not
    /// finite.
    pub fn rate(&self, currency: &CurrencyCode) -> MoneyResult<f64> {
        if *currency == self.base_currency {
            return Ok(1.0);
        }

        match self.rates.get(currency).copied() {
            Some(rate) if rate.is_finite() && rate > 0.0 => Ok(rate),
            rate => {
                warn!(currency = %currency, ?rate, "Rejected conversion rate");
                Err(MoneyError::InvalidRate {
                    currency: currency.clone(),
                    rate,
                })
            }
        }
    }

    /// Converts an amount between two currencies without rounding.
    ///
    /// Goes through the base currency when neither side is the base.
    pub fn convert_amount(
        &self,
        amount: f64,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> MoneyResult<f64> {
        if from == to {
            return Ok(amount);
        }

        let converted = if *from == self.base_currency {
            amount * self.rate(to)?
        } else if *to == self.base_currency {
            amount / self.rate(from)?
        } else {
            amount / self.rate(from)? * self.rate(to)?
        };

        Ok(converted)
    }
}

impl TryFrom<&RatesConfig> for Configuration {
    type Error = MoneyError;

    fn try_from(settings: &RatesConfig) -> Result<Self, Self::Error> {
        Self::new(
            settings.base_currency.clone(),
            settings
                .rate_pairs()
                .map(|(currency, rate)| (currency.clone(), rate)),
        )
    }
}

impl TryFrom<RatesConfig> for Configuration {
    type Error = MoneyError;

    fn try_from(settings: RatesConfig) -> Result<Self, Self::Error> {
        Self::try_from(&settings)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config() -> Configuration {
        Configuration::new("EUR", [("USD", 1.11), ("Bitcoin", 0.0047)]).unwrap()
    }

    fn code(value: &str) -> CurrencyCode {
        CurrencyCode::from(value)
    }

    #[test]
    fn test_new_keeps_base_and_rates() {
        let config = config();
        assert_eq!(config.base_currency(), &code("EUR"));
        assert_eq!(config.rates().len(), 2);
        assert_eq!(config.rates().get("USD"), Some(&1.11));
        assert_eq!(config.rates().get("Bitcoin"), Some(&0.0047));
    }

    #[test]
    fn test_new_converts_rates_to_float() {
        let config = Configuration::new("EUR", [("usd", 12)]).unwrap();
        assert_eq!(config.rates().get("usd"), Some(&12.0));
    }

    #[test]
    fn test_new_keeps_case_of_codes() {
        let config = Configuration::base_only("EuR").unwrap();
        assert_eq!(config.base_currency().as_str(), "EuR");
        assert!(config.rates().is_empty());
    }

    #[test]
    fn test_new_requires_base_currency() {
        let result = Configuration::new("", [("USD", 1.11)]);
        assert!(matches!(result, Err(MoneyError::InvalidArgument(_))));
    }

    #[rstest]
    #[case("EUR", true)]
    #[case("USD", true)]
    #[case("Bitcoin", true)]
    #[case("QWE", false)]
    #[case("usd", false)]
    fn test_is_known(#[case] currency: &str, #[case] known: bool) {
        assert_eq!(config().is_known(&code(currency)), known);
    }

    #[test]
    fn test_ensure_known_reports_currency() {
        let err = config().ensure_known(&code("QWE")).unwrap_err();
        assert_eq!(err, MoneyError::UnknownCurrency(code("QWE")));
    }

    #[test]
    fn test_rate_of_base_is_one() {
        let config = Configuration::new("EUR", [("EUR", 3.0)]).unwrap();
        assert_eq!(config.rate(&code("EUR")).unwrap(), 1.0);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.5)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_rate_rejects_unusable_values(#[case] rate: f64) {
        let config = Configuration::new("EUR", [("USD", rate)]).unwrap();
        assert!(matches!(
            config.rate(&code("USD")),
            Err(MoneyError::InvalidRate { .. })
        ));
    }

    #[test]
    fn test_rate_missing() {
        let err = config().rate(&code("QWE")).unwrap_err();
        assert_eq!(
            err,
            MoneyError::InvalidRate {
                currency: code("QWE"),
                rate: None,
            }
        );
    }

    #[test]
    fn test_convert_amount_from_base() {
        let converted = config()
            .convert_amount(50.0, &code("EUR"), &code("USD"))
            .unwrap();
        assert_eq!(converted, 50.0 * 1.11);
    }

    #[test]
    fn test_convert_amount_to_base() {
        let converted = config()
            .convert_amount(55.5, &code("USD"), &code("EUR"))
            .unwrap();
        assert_eq!(converted, 55.5 / 1.11);
    }

    #[test]
    fn test_convert_amount_through_base() {
        let converted = config()
            .convert_amount(55.5, &code("USD"), &code("Bitcoin"))
            .unwrap();
        assert_eq!(converted, 55.5 / 1.11 * 0.0047);
    }

    #[test]
    fn test_convert_amount_same_currency_is_identity() {
        let converted = config()
            .convert_amount(1.234, &code("USD"), &code("USD"))
            .unwrap();
        assert_eq!(converted, 1.234);
    }

    #[test]
    fn test_convert_amount_zero_rate_fails() {
        let config = Configuration::new("EUR", [("USD", 0.0), ("GBP", 0.85)]).unwrap();
        assert!(matches!(
            config.convert_amount(10.0, &code("USD"), &code("GBP")),
            Err(MoneyError::InvalidRate { .. })
        ));
    }

    #[test]
    fn test_try_from_rates_config() {
        let settings = RatesConfig::from_toml(
            r#"
            base_currency = "EUR"

            [[rates]]
            currency = "USD"
            rate = 1.11
            "#,
        )
        .unwrap();
        let config = Configuration::try_from(settings).unwrap();
        assert_eq!(config.base_currency(), &code("EUR"));
        assert_eq!(config.rate(&code("USD")).unwrap(), 1.11);
    }
}
