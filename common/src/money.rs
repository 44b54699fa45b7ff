//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::{prelude::ToPrimitive as _, Decimal};
use serde::{Deserialize, Serialize};

use crate::{define_kind, Percent};

/// Amount of money in some [`Currency`].
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize,
)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new [`Money`] of the provided `amount` in the provided
    /// [`Currency`].
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero [`Money`] in the provided [`Currency`].
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Indicates whether the amount of this [`Money`] is strictly greater than
    /// zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Returns the provided [`Percent`] of this [`Money`].
    #[must_use]
    pub fn percent(self, percent: Percent) -> Self {
        Self {
            amount: percent.of(self.amount),
            currency: self.currency,
        }
    }

    /// Restricts the amount of this [`Money`] to the `[min, max]` interval.
    ///
    /// `min` wins over `max` if they are inverted, so the result never falls
    /// below `min`.
    #[must_use]
    pub fn clamp(self, min: Decimal, max: Decimal) -> Self {
        Self {
            amount: self.amount.min(max).max(min),
            currency: self.currency,
        }
    }

    /// Adds the `other` [`Money`] to this one.
    ///
    /// [`None`] is returned if currencies differ or the amount overflows.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        (self.currency == other.currency).then_some(())?;
        Some(Self {
            amount: self.amount.checked_add(other.amount)?,
            currency: self.currency,
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        match amount.is_integer().then(|| amount.to_i128()).flatten() {
            Some(int) => write!(f, "{int}{currency}"),
            None => write!(f, "{}{currency}", amount.normalize()),
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 {
            return Err("too short");
        }
        if !s.is_char_boundary(s.len() - 3) {
            return Err("invalid currency");
        }

        let (amount, currency) = s.split_at(s.len() - 3);
        let amount = Decimal::from_str(amount).map_err(|_| "invalid amount")?;
        let currency =
            Currency::from_str(currency).map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "Hong Kong Dollar."]
        Hkd = 1,

        #[doc = "US Dollar."]
        Usd = 2,

        #[doc = "Euro."]
        Eur = 3,
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use crate::Percent;

    use super::{Currency, Money};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn hkd(s: &str) -> Money {
        Money::new(decimal(s), Currency::Hkd)
    }

    #[test]
    fn from_str() {
        assert_eq!(Money::from_str("123.45HKD").unwrap(), hkd("123.45"));
        assert_eq!(
            Money::from_str("123.45EUR").unwrap(),
            Money::new(decimal("123.45"), Currency::Eur),
        );
        assert_eq!(
            Money::from_str("250000USD").unwrap(),
            Money::new(decimal("250000"), Currency::Usd),
        );

        assert!(Money::from_str("123.45").is_err());
        assert!(Money::from_str("123.45Hk").is_err());
        assert!(Money::from_str("123.45Hkdollar").is_err());
        assert!(Money::from_str("12€").is_err());

        assert!(Money::from_str("123.00HKD").is_ok());
        assert!(Money::from_str("123HKD").is_ok());
    }

    #[test]
    fn to_string() {
        assert_eq!(hkd("123.45").to_string(), "123.45HKD");
        assert_eq!(hkd("123.00").to_string(), "123HKD");
        assert_eq!(hkd("1500").to_string(), "1500HKD");
        assert_eq!(hkd("2500.50").to_string(), "2500.5HKD");
    }

    #[test]
    fn percent_of_amount() {
        let two = Percent::new(Decimal::TWO).unwrap();

        assert_eq!(hkd("100000").percent(two), hkd("2000"));
        assert_eq!(hkd("0").percent(two), hkd("0"));
        assert_eq!(hkd("12345").percent(two), hkd("246.9"));
    }

    #[test]
    fn clamps_amount() {
        let (min, max) = (decimal("1500"), decimal("5000"));

        assert_eq!(hkd("1000").clamp(min, max), hkd("1500"));
        assert_eq!(hkd("2000").clamp(min, max), hkd("2000"));
        assert_eq!(hkd("7000").clamp(min, max), hkd("5000"));
    }

    #[test]
    fn adds_only_same_currency() {
        assert_eq!(hkd("1500").checked_add(hkd("2500")), Some(hkd("4000")));
        assert_eq!(
            hkd("1500").checked_add(Money::new(decimal("1"), Currency::Usd)),
            None,
        );
    }
}
