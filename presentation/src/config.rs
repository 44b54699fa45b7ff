//! [`Config`]-related definitions.

use std::time;

use common::{money::Currency, Money, Percent};
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::{Display, Error};
use rust_decimal::Decimal;
use serde::Deserialize;
use service::domain::{FeeSchedule, Price};
use smart_default::SmartDefault;

use crate::Settings;

/// Application configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Order configuration.
    pub order: Order,

    /// Presentation configuration.
    pub presentation: Presentation,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Order configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Order {
    /// [`Currency`] the listing is priced in.
    #[default(Currency::Hkd)]
    pub currency: Currency,

    /// Price of the listing.
    #[default(Decimal::from(250_000))]
    pub listing_price: Decimal,

    /// Fees configuration.
    pub fees: Fees,
}

impl TryFrom<Order> for service::Config {
    type Error = ValidationError;

    fn try_from(value: Order) -> Result<Self, Self::Error> {
        let Order {
            currency,
            listing_price,
            fees,
        } = value;

        let listing_price = Price::new(Money::new(listing_price, currency))
            .ok_or(ValidationError::NonPositiveListingPrice(listing_price))?;

        Ok(Self {
            listing_price,
            fees: fees.try_into()?,
        })
    }
}

/// Fees configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Fees {
    /// Percent of a price charged as the service fee.
    #[default(Decimal::from(2))]
    pub service_fee_percent: Decimal,

    /// Lower bound of the service fee.
    #[default(Decimal::from(1500))]
    pub min_service_fee: Decimal,

    /// Upper bound of the service fee.
    #[default(Decimal::from(5000))]
    pub max_service_fee: Decimal,

    /// Percent of a price held as a deposit.
    #[default(Decimal::ONE)]
    pub deposit_percent: Decimal,
}

impl TryFrom<Fees> for FeeSchedule {
    type Error = ValidationError;

    fn try_from(value: Fees) -> Result<Self, Self::Error> {
        let Fees {
            service_fee_percent,
            min_service_fee,
            max_service_fee,
            deposit_percent,
        } = value;

        Self::new(
            percent("order.fees.service_fee_percent", service_fee_percent)?,
            min_service_fee,
            max_service_fee,
            percent("order.fees.deposit_percent", deposit_percent)?,
        )
        .ok_or(ValidationError::ServiceFeeBounds {
            min: min_service_fee,
            max: max_service_fee,
        })
    }
}

/// Presentation configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Presentation {
    /// Time the seller has to respond to a submitted offer.
    #[default(time::Duration::from_secs(60 * 60 * 24))]
    #[serde(with = "humantime_serde")]
    pub offer_response_window: time::Duration,

    /// Time the buyer has to pay for an accepted offer.
    #[default(time::Duration::from_secs(60 * 60 * 4))]
    #[serde(with = "humantime_serde")]
    pub payment_window: time::Duration,

    /// Percent of the listing price below which an offer is warned as low.
    #[default(Decimal::from(70))]
    pub low_offer_percent: Decimal,
}

impl TryFrom<Presentation> for Settings {
    type Error = ValidationError;

    fn try_from(value: Presentation) -> Result<Self, Self::Error> {
        let Presentation {
            offer_response_window,
            payment_window,
            low_offer_percent,
        } = value;

        Ok(Self {
            offer_response_window,
            payment_window,
            low_offer: percent(
                "presentation.low_offer_percent",
                low_offer_percent,
            )?,
        })
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

/// Error of converting a [`Config`] section into its runtime counterpart.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum ValidationError {
    /// Percent value is out of the `[0, 100]` range.
    #[display("`{field}` must be within `[0, 100]`, got `{value}`")]
    PercentOutOfRange {
        /// Name of the misconfigured field.
        field: &'static str,

        /// Configured value.
        value: Decimal,
    },

    /// Minimal service fee is negative or exceeds the maximal one.
    #[display("service fee bounds `[{min}, {max}]` are invalid")]
    ServiceFeeBounds {
        /// Configured minimal service fee.
        min: Decimal,

        /// Configured maximal service fee.
        max: Decimal,
    },

    /// Listing price is not greater than zero.
    #[display("`order.listing_price` must be positive, got `{_0}`")]
    NonPositiveListingPrice(#[error(not(source))] Decimal),
}

/// Converts the provided configured `value` of the `field` into a [`Percent`].
fn percent(
    field: &'static str,
    value: Decimal,
) -> Result<Percent, ValidationError> {
    Percent::new(value)
        .ok_or(ValidationError::PercentOutOfRange { field, value })
}
