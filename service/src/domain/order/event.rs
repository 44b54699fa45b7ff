//! [`Event`]s recorded in an [`Order`] history.

use common::{datetime, DateTimeOf};
use serde::Serialize;

#[cfg(doc)]
use crate::domain::Order;

use super::{Cancellation, Price, Status};

/// Something that happened to an [`Order`].
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Event {
    /// [`EventKind`] of this [`Event`].
    pub kind: EventKind,

    /// [`Status`] the [`Order`] ended up in.
    pub status: Status,

    /// [`DateTime`] when this [`Event`] happened.
    ///
    /// [`DateTime`]: common::DateTime
    #[serde(with = "datetime::serde::unix_timestamp")]
    pub at: DateTime,
}

/// Kind of an [`Event`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum EventKind {
    /// Buyer submitted an offer.
    OfferSubmitted {
        /// Offered [`Price`].
        price: Price,
    },

    /// Buyer raised the submitted offer.
    OfferModified {
        /// Raised [`Price`].
        price: Price,
    },

    /// Seller accepted the offer.
    OfferAccepted {
        /// Accepted [`Price`].
        price: Price,
    },

    /// Seller countered the offer.
    OfferCountered {
        /// Counter [`Price`].
        price: Price,
    },

    /// Negotiation was cancelled.
    Cancelled {
        /// How the negotiation was cancelled.
        cancellation: Cancellation,
    },

    /// Buyer started a new negotiation cycle.
    ReOffered,

    /// Collaborating system advanced the [`Order`].
    Advanced,
}

/// Marker type indicating an [`Event`] occurrence.
#[derive(Clone, Copy, Debug)]
pub struct Occurrence;

/// [`DateTime`] when an [`Event`] happened.
///
/// [`DateTime`]: common::DateTime
pub type DateTime = DateTimeOf<(Event, Occurrence)>;
