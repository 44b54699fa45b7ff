//! [`Status`] of an [`Order`] and its transition graph.
//!
//! ```text
//! draft_offer -> offer_submitted -> payment_pending -> to_ship -> in_transit
//!     -> warehouse_received -> authenticating -> auth_passed | auth_failed
//!
//! offer_submitted -> offer_countered | cancelled
//! offer_countered -> cancelled -> draft_offer
//! payment_pending -> cancelled
//! auth_passed -> auth_passed_dispute
//! auth_passed | auth_passed_dispute -> handover_wm | handover_self
//! auth_passed_dispute | auth_failed -> refunded
//! handover_self -> handover_seller_retrieved
//! handover_wm | handover_seller_retrieved -> completed
//! ```

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[cfg(doc)]
use crate::domain::Order;

/// Position of an [`Order`] in its negotiation-to-handover workflow.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    PartialEq,
    Serialize,
)]
#[repr(u8)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Status {
    /// Buyer is composing an offer.
    #[default]
    DraftOffer = 1,

    /// Offer is sent and awaits the seller's response.
    OfferSubmitted = 2,

    /// Seller proposed another price.
    OfferCountered = 3,

    /// Offer is accepted and the stock is locked until the buyer pays.
    PaymentPending = 4,

    /// Payment is captured and the seller has to ship the item.
    ToShip = 5,

    /// Item travels to the authentication center.
    InTransit = 6,

    /// Authentication center received the item.
    WarehouseReceived = 7,

    /// Experts are authenticating the item.
    Authenticating = 8,

    /// Item is genuine.
    AuthPassed = 9,

    /// Item is genuine but the buyer disputes the report.
    AuthPassedDispute = 10,

    /// Item failed the authentication.
    AuthFailed = 11,

    /// Handover is booked at a platform center.
    HandoverWm = 12,

    /// Parties arrange the handover themselves.
    HandoverSelf = 13,

    /// Seller retrieved the item to hand it over in person.
    HandoverSellerRetrieved = 14,

    /// Transaction is done.
    Completed = 15,

    /// Transaction is cancelled.
    Cancelled = 16,

    /// Deposit is returned to the buyer and the transaction is closed.
    Refunded = 17,
}

impl Status {
    /// Converts this into its [`u8`] representation.
    #[must_use]
    pub const fn u8(self) -> u8 {
        self as u8
    }

    /// Indicates whether this [`Status`] ends the workflow.
    ///
    /// [`Status::Cancelled`] is terminal, yet still allows a re-offer.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::Refunded)
    }

    /// Indicates whether this [`Status`] is advanced by collaborating systems
    /// (payment, logistics, authentication, handover) rather than by buyer
    /// or seller gestures.
    #[must_use]
    pub const fn is_advanced_externally(self) -> bool {
        !matches!(
            self,
            Self::DraftOffer | Self::OfferSubmitted | Self::OfferCountered,
        ) && !self.is_terminal()
    }

    /// Indicates whether an [`Order`] may move from this [`Status`] to the
    /// `target` one.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        self.can_be_moved_by_party_to(target)
            || self.can_be_advanced_to(target)
    }

    /// Indicates whether a buyer or seller gesture may move an [`Order`] from
    /// this [`Status`] to the `target` one.
    #[must_use]
    pub const fn can_be_moved_by_party_to(self, target: Self) -> bool {
        use Status as S;

        matches!(
            (self, target),
            (S::DraftOffer, S::OfferSubmitted)
                | (S::OfferSubmitted, S::PaymentPending)
                | (S::OfferSubmitted, S::OfferCountered)
                | (S::OfferSubmitted, S::Cancelled)
                | (S::OfferCountered, S::Cancelled)
                | (S::Cancelled, S::DraftOffer)
        )
    }

    /// Indicates whether a collaborating system may advance an [`Order`] from
    /// this [`Status`] to the `target` one.
    #[must_use]
    pub const fn can_be_advanced_to(self, target: Self) -> bool {
        use Status as S;

        matches!(
            (self, target),
            (S::PaymentPending, S::ToShip)
                | (S::PaymentPending, S::Cancelled)
                | (S::ToShip, S::InTransit)
                | (S::InTransit, S::WarehouseReceived)
                | (S::WarehouseReceived, S::Authenticating)
                | (S::Authenticating, S::AuthPassed)
                | (S::Authenticating, S::AuthFailed)
                | (S::AuthPassed, S::AuthPassedDispute)
                | (S::AuthPassed | S::AuthPassedDispute, S::HandoverWm)
                | (S::AuthPassed | S::AuthPassedDispute, S::HandoverSelf)
                | (S::AuthPassedDispute | S::AuthFailed, S::Refunded)
                | (S::HandoverSelf, S::HandoverSellerRetrieved)
                | (S::HandoverWm | S::HandoverSellerRetrieved, S::Completed)
        )
    }
}
