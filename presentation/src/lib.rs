//! Presentation derives role- and status-specific views of an order
//! [`Session`] and hosts it: configuration, logging and gestures.

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

pub mod actions;
pub mod args;
pub mod config;
pub mod gesture;
pub mod logging;
pub mod reject_reason;
pub mod status_card;
pub mod stepper;
pub mod summary;
pub mod timeline;

use std::time::Duration;

use common::{DateTime, Percent};
use rust_decimal::Decimal;
use service::{domain::Role, Session};
use smart_default::SmartDefault;

pub use self::{
    actions::ActionBar,
    args::Args,
    config::Config,
    gesture::Gesture,
    status_card::StatusCard,
    stepper::StepperView,
    summary::{DraftBreakdown, ModifyPreview, OfferSummary},
    timeline::Timeline,
};

/// Presentation settings.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Settings {
    /// Time the seller has to respond to a submitted offer.
    #[default(Duration::from_secs(60 * 60 * 24))]
    pub offer_response_window: Duration,

    /// Time the buyer has to pay for an accepted offer, while the stock is
    /// locked.
    #[default(Duration::from_secs(60 * 60 * 4))]
    pub payment_window: Duration,

    /// [`Percent`] of the listing price below which an offer is warned as
    /// low.
    #[default(default_low_offer())]
    pub low_offer: Percent,
}

/// Returns the default [`Settings::low_offer`] of `70%`.
fn default_low_offer() -> Percent {
    Percent::new(Decimal::from(70)).expect("valid `Percent`")
}

/// Order [`Session`] as seen by some [`Role`] at some moment.
#[derive(Clone, Copy, Debug)]
pub struct View<'s> {
    /// Viewed [`Session`].
    session: &'s Session,

    /// [`Role`] viewing the [`Session`].
    role: Role,

    /// [`Settings`] of this [`View`].
    settings: &'s Settings,

    /// Moment the [`View`] is rendered at.
    now: DateTime,
}

impl<'s> View<'s> {
    /// Creates a new [`View`] of the provided [`Session`].
    #[must_use]
    pub fn new(
        session: &'s Session,
        role: Role,
        settings: &'s Settings,
        now: DateTime,
    ) -> Self {
        Self {
            session,
            role,
            settings,
            now,
        }
    }

    /// Returns the viewed [`Session`].
    #[must_use]
    pub fn session(&self) -> &'s Session {
        self.session
    }

    /// Returns the [`Role`] viewing the [`Session`].
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the [`StatusCard`] heading this [`View`].
    #[must_use]
    pub fn status_card(&self) -> StatusCard {
        StatusCard::of(self.session.order(), self.role, self.settings, self.now)
    }

    /// Returns the [`StepperView`] of the current status.
    #[must_use]
    pub fn stepper(&self) -> StepperView {
        StepperView::of(self.session.current_status())
    }

    /// Returns the [`ActionBar`] of gestures available to the [`Role`].
    #[must_use]
    pub fn actions(&self) -> ActionBar {
        ActionBar::of(self.session.order(), self.role)
    }

    /// Returns the [`Timeline`] of the order, unless it's still a draft.
    #[must_use]
    pub fn timeline(&self) -> Option<Timeline> {
        Timeline::of(self.session.order())
    }

    /// Returns the [`OfferSummary`], if the offer is awaiting the seller or
    /// cancelled.
    #[must_use]
    pub fn offer_summary(&self) -> Option<OfferSummary> {
        OfferSummary::of(self.session, self.role)
    }

    /// Returns the [`DraftBreakdown`], if the offer is still a draft.
    #[must_use]
    pub fn draft_breakdown(&self) -> Option<DraftBreakdown> {
        DraftBreakdown::of(self.session, self.settings.low_offer)
    }
}
