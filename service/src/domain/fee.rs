//! Platform fees charged on an [`Order`].

use common::{Money, Percent};
use rust_decimal::Decimal;
use serde::Serialize;

use super::order::ServiceMode;
#[cfg(doc)]
use super::Order;

/// Rules of decomposing a price into platform fees.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeeSchedule {
    /// [`Percent`] of a price charged as the service fee.
    service_fee: Percent,

    /// Lower bound of the service fee.
    min_service_fee: Decimal,

    /// Upper bound of the service fee.
    max_service_fee: Decimal,

    /// [`Percent`] of a price held as a refundable deposit.
    deposit: Percent,
}

impl FeeSchedule {
    /// Creates a new [`FeeSchedule`] if `min_service_fee` is not negative and
    /// doesn't exceed `max_service_fee`.
    #[must_use]
    pub fn new(
        service_fee: Percent,
        min_service_fee: Decimal,
        max_service_fee: Decimal,
        deposit: Percent,
    ) -> Option<Self> {
        (Decimal::ZERO <= min_service_fee
            && min_service_fee <= max_service_fee)
            .then_some(Self {
                service_fee,
                min_service_fee,
                max_service_fee,
                deposit,
            })
    }

    /// Returns the [`Percent`] of a price charged as the service fee.
    #[must_use]
    pub fn service_fee(&self) -> Percent {
        self.service_fee
    }

    /// Returns the lower bound of the service fee.
    #[must_use]
    pub fn min_service_fee(&self) -> Decimal {
        self.min_service_fee
    }

    /// Returns the upper bound of the service fee.
    #[must_use]
    pub fn max_service_fee(&self) -> Decimal {
        self.max_service_fee
    }

    /// Returns the [`Percent`] of a price held as a deposit.
    #[must_use]
    pub fn deposit(&self) -> Percent {
        self.deposit
    }

    /// Decomposes the provided `price` into [`Fees`].
    ///
    /// The service fee is clamped to the schedule bounds, so a zero `price`
    /// still costs the minimal fee. The deposit is never capped.
    #[must_use]
    pub fn calculate(&self, price: impl Into<Money>) -> Fees {
        let price = price.into();
        Fees {
            fee: price
                .percent(self.service_fee)
                .clamp(self.min_service_fee, self.max_service_fee),
            deposit: price.percent(self.deposit),
        }
    }
}

impl Default for FeeSchedule {
    /// 2% service fee within `[1500, 5000]` and 1% deposit.
    fn default() -> Self {
        let percent = |n: u8| Percent::new(n.into()).expect("valid `Percent`");
        Self::new(
            percent(2),
            Decimal::from(1500),
            Decimal::from(5000),
            percent(1),
        )
        .expect("valid default `FeeSchedule`")
    }
}

/// Service fee and deposit of a price.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Fees {
    /// Authentication service fee.
    pub fee: Money,

    /// Refundable good-faith deposit.
    pub deposit: Money,
}

impl Fees {
    /// Returns the sum of the fee and the deposit, saturating at the maximal
    /// representable amount.
    #[must_use]
    pub fn total(&self) -> Money {
        Money {
            amount: self.fee.amount.saturating_add(self.deposit.amount),
            currency: self.fee.currency,
        }
    }
}

/// Decomposes the provided `price` into [`Fees`] by the default
/// [`FeeSchedule`].
#[must_use]
pub fn calculate_fees(price: impl Into<Money>) -> Fees {
    FeeSchedule::default().calculate(price)
}

/// What the buyer pays and when.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct PaymentPlan {
    /// Platform [`Fees`], if the [`ServiceMode`] charges them.
    pub fees: Option<Fees>,

    /// Amount due once the offer is accepted.
    pub on_acceptance: Money,

    /// Amount due at the handover.
    pub on_handover: Money,
}

impl PaymentPlan {
    /// Creates a new [`PaymentPlan`] of the provided `price` in the provided
    /// [`ServiceMode`].
    #[must_use]
    pub fn new(
        schedule: &FeeSchedule,
        price: impl Into<Money>,
        mode: ServiceMode,
    ) -> Self {
        let price = price.into();
        let fees = mode.charges_fees().then(|| schedule.calculate(price));
        Self {
            fees,
            on_acceptance: fees
                .map_or(Money::zero(price.currency), |f| f.total()),
            on_handover: price,
        }
    }
}

#[cfg(test)]
mod spec {
    use common::{money::Currency, Money, Percent};
    use rust_decimal::Decimal;

    use crate::domain::{order::ServiceMode, Price};

    use super::{calculate_fees, FeeSchedule, PaymentPlan};

    fn hkd(n: i64) -> Money {
        Money::new(Decimal::from(n), Currency::Hkd)
    }

    #[test]
    fn example_price() {
        let fees = calculate_fees(hkd(100_000));

        assert_eq!(fees.fee, hkd(2000));
        assert_eq!(fees.deposit, hkd(1000));
        assert_eq!(fees.total(), hkd(3000));
    }

    #[test]
    fn zero_price_costs_minimal_fee() {
        let fees = calculate_fees(hkd(0));

        assert_eq!(fees.fee, hkd(1500));
        assert_eq!(fees.deposit, hkd(0));
    }

    #[test]
    fn fee_floors_up_to_75k() {
        for p in (0..=75_000).step_by(2_500) {
            assert_eq!(calculate_fees(hkd(p)).fee, hkd(1500), "price {p}");
        }
    }

    #[test]
    fn fee_caps_from_250k() {
        for p in (250_000..=2_000_000).step_by(50_000) {
            assert_eq!(calculate_fees(hkd(p)).fee, hkd(5000), "price {p}");
        }
    }

    #[test]
    fn deposit_is_monotonic_and_fee_clamped() {
        let mut prev = calculate_fees(hkd(0));
        for p in (0..=1_000_000).step_by(1_250) {
            let fees = calculate_fees(hkd(p));

            assert!(fees.deposit.amount >= prev.deposit.amount, "price {p}");
            assert!(fees.fee.amount >= prev.fee.amount, "price {p}");
            assert!(fees.fee.amount >= Decimal::from(1500), "price {p}");
            assert!(fees.fee.amount <= Decimal::from(5000), "price {p}");

            prev = fees;
        }
    }

    #[test]
    fn total_at_range_limits() {
        let max = Money::new(Decimal::MAX, Currency::Hkd);

        let fees = calculate_fees(max);
        assert_eq!(fees.fee, hkd(5000));
        assert_eq!(fees.deposit.amount, Decimal::MAX / Decimal::ONE_HUNDRED);
        assert!(fees.total().amount > fees.deposit.amount);

        let parsed = Price::parse(
            "79,228,162,514,264,337,593,543,950,335",
            Currency::Hkd,
        )
        .unwrap();
        assert_eq!(calculate_fees(parsed), fees);

        let whole = Percent::new(Decimal::ONE_HUNDRED).unwrap();
        let greedy =
            FeeSchedule::new(whole, Decimal::ZERO, Decimal::MAX, whole)
                .unwrap();
        let fees = greedy.calculate(max);
        assert_eq!(fees.fee, max);
        assert_eq!(fees.deposit, max);
        assert_eq!(fees.total(), max);

        let plan = PaymentPlan::new(&greedy, max, ServiceMode::Wm);
        assert_eq!(plan.on_acceptance, max);
    }

    #[test]
    fn keeps_price_currency() {
        let fees = calculate_fees(Money::new(Decimal::from(10), Currency::Eur));

        assert_eq!(fees.fee.currency, Currency::Eur);
        assert_eq!(fees.deposit.currency, Currency::Eur);
    }

    #[test]
    fn rejects_inverted_bounds() {
        let percent = Percent::new(Decimal::ONE).unwrap();

        assert!(FeeSchedule::new(
            percent,
            Decimal::from(10),
            Decimal::from(5),
            percent,
        )
        .is_none());
        assert!(FeeSchedule::new(
            percent,
            Decimal::NEGATIVE_ONE,
            Decimal::from(5),
            percent,
        )
        .is_none());
    }

    #[test]
    fn direct_mode_has_no_fees() {
        let schedule = FeeSchedule::default();

        let wm = PaymentPlan::new(&schedule, hkd(250_000), ServiceMode::Wm);
        assert_eq!(wm.on_acceptance, hkd(7500));
        assert_eq!(wm.on_handover, hkd(250_000));

        let direct =
            PaymentPlan::new(&schedule, hkd(250_000), ServiceMode::Direct);
        assert_eq!(direct.fees, None);
        assert_eq!(direct.on_acceptance, hkd(0));
        assert_eq!(direct.on_handover, hkd(250_000));
    }
}
