//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Floating-point percentage.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a new [`Percent`] by checking the provided values is not less
    /// than `0` and not greater than `100`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < Decimal::ZERO || val > Decimal::ONE_HUNDRED {
            None
        } else {
            Some(Self(val))
        }
    }

    /// Returns the value of this [`Percent`] in the `[0, 100]` range.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Applies this [`Percent`] to the provided `amount`.
    ///
    /// Never overflows: the result doesn't exceed the `amount` by magnitude.
    /// Amounts too large to be multiplied exactly are divided first, losing
    /// the least significant digits.
    #[must_use]
    pub fn of(self, amount: Decimal) -> Decimal {
        amount.checked_mul(self.0).map_or_else(
            || amount / Decimal::ONE_HUNDRED * self.0,
            |scaled| scaled / Decimal::ONE_HUNDRED,
        )
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

impl TryFrom<Decimal> for Percent {
    type Error = &'static str;

    fn try_from(val: Decimal) -> Result<Self, Self::Error> {
        Self::new(val).ok_or("percent must be within `[0, 100]`")
    }
}

impl From<Percent> for Decimal {
    fn from(p: Percent) -> Self {
        p.0
    }
}
