//! Service contains the order transaction lifecycle: fees, the status
//! workflow and its visual derivation.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;

use common::{money::Currency, Money};
use rust_decimal::Decimal;
use smart_default::SmartDefault;

use self::domain::{
    order::{HandoverMethod, ServiceMode},
    FeeSchedule, Fees, Order, PaymentPlan, Price, Status, Stepper,
    VisualStep,
};

pub use self::command::Command;

/// [`Session`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// [`Price`] of the listing a new [`Order`] starts drafting from.
    #[default(default_listing_price())]
    pub listing_price: Price,

    /// [`FeeSchedule`] of the platform.
    pub fees: FeeSchedule,
}

/// Returns the default listing [`Price`] of `250000HKD`.
fn default_listing_price() -> Price {
    Price::new(Money::new(Decimal::from(250_000), Currency::Hkd))
        .expect("positive `Price`")
}

/// Single-order negotiation session.
///
/// Owns the only mutable [`Order`]. Every state change goes through a
/// [`Command`], executed to completion before the next one.
#[derive(Clone, Debug)]
pub struct Session {
    /// Configuration of this [`Session`].
    config: Config,

    /// [`Order`] negotiated in this [`Session`].
    order: Order,
}

impl Session {
    /// Creates a new [`Session`] with a fresh draft [`Order`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        let order = Order::new(config.listing_price);
        Self { config, order }
    }

    /// Returns [`Config`] of this [`Session`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the [`Order`] of this [`Session`].
    #[must_use]
    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Returns the mutable [`Order`] of this [`Session`].
    pub(crate) fn order_mut(&mut self) -> &mut Order {
        &mut self.order
    }

    /// Returns the current [`Status`] of the [`Order`].
    #[must_use]
    pub fn current_status(&self) -> Status {
        self.order.status()
    }

    /// Returns the standing offer [`Price`] of the [`Order`].
    #[must_use]
    pub fn offer_price(&self) -> Price {
        self.order.offer_price()
    }

    /// Returns the [`ServiceMode`] of the [`Order`].
    #[must_use]
    pub fn service_mode(&self) -> ServiceMode {
        self.order.service_mode()
    }

    /// Returns the [`HandoverMethod`] of the [`Order`].
    #[must_use]
    pub fn handover_method(&self) -> HandoverMethod {
        self.order.handover_method()
    }

    /// Decomposes the provided `price` into [`Fees`] by the configured
    /// [`FeeSchedule`].
    #[must_use]
    pub fn calculate_fees(&self, price: impl Into<Money>) -> Fees {
        self.config.fees.calculate(price)
    }

    /// Returns the [`PaymentPlan`] of the standing offer.
    #[must_use]
    pub fn payment_plan(&self) -> PaymentPlan {
        PaymentPlan::new(
            &self.config.fees,
            self.order.offer_price(),
            self.order.service_mode(),
        )
    }

    /// Returns the [`VisualStep`] of the current [`Status`].
    #[must_use]
    pub fn visual_step(&self) -> VisualStep {
        VisualStep::of(self.order.status())
    }

    /// Returns the [`Stepper`] of the current [`Status`].
    #[must_use]
    pub fn stepper(&self) -> Stepper {
        Stepper::of(self.order.status())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
