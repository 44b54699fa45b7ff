//! [`Timeline`] of an order history.

use service::domain::{
    order::{Cancellation, Event, EventKind},
    Order, Status,
};

/// Single [`Timeline`] line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    /// What happened.
    pub title: String,

    /// When it happened, formatted as `YYYY/MM/DD hh:mm`.
    pub at: String,

    /// Whether this is the latest [`Entry`].
    pub is_latest: bool,

    /// Whether this [`Entry`] is the cancellation that ended the transaction.
    pub is_highlighted: bool,
}

/// History of an [`Order`], newest first.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Timeline(Vec<Entry>);

impl Timeline {
    /// Derives the [`Timeline`] of the provided [`Order`].
    ///
    /// [`None`] is returned while the [`Order`] is a draft.
    #[must_use]
    pub fn of(order: &Order) -> Option<Self> {
        if order.status() == Status::DraftOffer {
            return None;
        }

        let is_cancelled = order.status() == Status::Cancelled;
        Some(Self(
            order
                .history()
                .iter()
                .rev()
                .enumerate()
                .map(|(i, event)| {
                    let is_latest = i == 0;
                    let is_cancellation =
                        matches!(event.kind, EventKind::Cancelled { .. });
                    Entry {
                        title: title(event),
                        at: event.at.to_minutes_string(),
                        is_latest,
                        is_highlighted: is_latest
                            && is_cancelled
                            && is_cancellation,
                    }
                })
                .collect(),
        ))
    }

    /// Returns the [`Entry`]s, newest first.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.0
    }
}

/// Describes the provided [`Event`].
fn title(event: &Event) -> String {
    use Cancellation as C;
    use EventKind as K;

    match event.kind {
        K::OfferSubmitted { price } => format!("Buyer offered {price}"),
        K::OfferModified { price } => {
            format!("Buyer raised the offer to {price}")
        }
        K::OfferAccepted { .. } => {
            "Seller accepted the offer, waiting for the payment".into()
        }
        K::OfferCountered { price } => format!("Seller countered with {price}"),
        K::Cancelled { cancellation } => match cancellation {
            C::BuyerCancelled => "Buyer cancelled the offer",
            C::SellerRejected => "Seller rejected the offer",
            C::CounterRetracted => "Seller retracted the counter offer",
            C::PaymentLapsed => "Payment window lapsed",
        }
        .into(),
        K::ReOffered => "Buyer started a new offer".into(),
        K::Advanced => advanced(event.status).into(),
    }
}

/// Describes the advancement into the provided [`Status`].
const fn advanced(status: Status) -> &'static str {
    use Status as S;

    match status {
        S::ToShip => "Payment received",
        S::InTransit => "Item shipped to the authentication center",
        S::WarehouseReceived => "Item stocked in",
        S::Authenticating => "Authentication started",
        S::AuthPassed => "Authentication passed",
        S::AuthPassedDispute => "Buyer disputed the authentication report",
        S::AuthFailed => "Authentication failed",
        S::HandoverWm => "Handover booked at a WM location",
        S::HandoverSelf => "Self-arranged handover chosen",
        S::HandoverSellerRetrieved => "Seller retrieved the item",
        S::Completed => "Trade completed",
        S::Refunded => "Deposit refunded",
        S::DraftOffer
        | S::OfferSubmitted
        | S::OfferCountered
        | S::PaymentPending
        | S::Cancelled => "Order updated",
    }
}
