//! [`Price`] definitions.

use std::str::FromStr as _;

use common::{money::Currency, Money};
use derive_more::{AsRef, Display, Error, Into};
use rust_decimal::Decimal;
use serde::Serialize;

#[cfg(doc)]
use crate::domain::Order;

/// Strictly positive amount of [`Money`] offered for an [`Order`].
#[derive(AsRef, Clone, Copy, Debug, Display, Eq, Into, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Price(Money);

impl Price {
    /// Creates a new [`Price`] if the provided [`Money`] is strictly
    /// positive.
    #[must_use]
    pub fn new(money: Money) -> Option<Self> {
        money.is_positive().then_some(Self(money))
    }

    /// Parses a [`Price`] out of a raw user `input` in the provided
    /// [`Currency`].
    ///
    /// Thousands separators (`,` and `_`) and surrounding whitespace are
    /// ignored.
    ///
    /// # Errors
    ///
    /// - [`PriceError::Malformed`] if the `input` is not a number.
    /// - [`PriceError::NonPositive`] if the number is not greater than `0`.
    pub fn parse(input: &str, currency: Currency) -> Result<Self, PriceError> {
        let digits = input
            .trim()
            .chars()
            .filter(|c| !matches!(c, ',' | '_'))
            .collect::<String>();
        let amount =
            Decimal::from_str(&digits).map_err(|_| PriceError::Malformed)?;
        Self::new(Money::new(amount, currency)).ok_or(PriceError::NonPositive)
    }

    /// Returns the [`Money`] of this [`Price`].
    #[must_use]
    pub const fn money(self) -> Money {
        self.0
    }

    /// Returns the amount of this [`Price`].
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0.amount
    }

    /// Returns the [`Currency`] of this [`Price`].
    #[must_use]
    pub const fn currency(self) -> Currency {
        self.0.currency
    }
}

/// Error of parsing a [`Price`] from a user input.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum PriceError {
    /// Input is not a number.
    #[display("price is not a number")]
    Malformed,

    /// Number is zero or negative.
    #[display("price must be greater than zero")]
    NonPositive,
}

#[cfg(test)]
mod spec {
    use common::{money::Currency, Money};
    use rust_decimal::Decimal;

    use super::{Price, PriceError};

    #[test]
    fn requires_positive_amount() {
        let hkd = |n: i64| Money::new(Decimal::from(n), Currency::Hkd);

        assert!(Price::new(hkd(1)).is_some());
        assert!(Price::new(hkd(0)).is_none());
        assert!(Price::new(hkd(-100)).is_none());
    }

    #[test]
    fn parses_user_input() {
        let price = Price::parse(" 250,000 ", Currency::Hkd).unwrap();
        assert_eq!(price.amount(), Decimal::from(250_000));
        assert_eq!(price.currency(), Currency::Hkd);

        assert_eq!(
            Price::parse("abc", Currency::Hkd),
            Err(PriceError::Malformed),
        );
        assert_eq!(Price::parse("", Currency::Hkd), Err(PriceError::Malformed));
        assert_eq!(
            Price::parse("0", Currency::Hkd),
            Err(PriceError::NonPositive),
        );
        assert_eq!(
            Price::parse("-5", Currency::Hkd),
            Err(PriceError::NonPositive),
        );
    }

    #[test]
    fn parses_range_limits() {
        let max = Price::parse("79228162514264337593543950335", Currency::Hkd)
            .unwrap();
        assert_eq!(max.amount(), Decimal::MAX);

        assert_eq!(
            Price::parse("79228162514264337593543950336", Currency::Hkd),
            Err(PriceError::Malformed),
        );
        assert!(Price::parse("0.0000000000000000000000000001", Currency::Hkd)
            .is_ok());
    }
}
