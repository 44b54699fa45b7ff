//! [`StatusCard`] heading an order page.

use std::{fmt, time::Duration};

use common::{unit, DateTime, DateTimeOf};
use service::domain::{
    order::{Cancellation, EventKind},
    Order, Role, Status,
};

use crate::Settings;

/// Card describing the current [`Status`] of an [`Order`] to some [`Role`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StatusCard {
    /// Headline.
    pub title: &'static str,

    /// Explanation of what happens next.
    pub subtitle: &'static str,

    /// [`Icon`] of the card.
    pub icon: Icon,

    /// Color [`Tone`] of the card.
    pub tone: Tone,

    /// Whether the [`Icon`] pulses, drawing attention to a pending action.
    pub pulse: bool,

    /// [`Countdown`] of the current [`Status`], if it's time-limited.
    pub countdown: Option<Countdown>,
}

impl StatusCard {
    /// Derives the [`StatusCard`] of the provided [`Order`] for the provided
    /// [`Role`] at the `now` moment.
    #[must_use]
    pub fn of(
        order: &Order,
        role: Role,
        settings: &Settings,
        now: DateTime,
    ) -> Self {
        use Icon as I;
        use Role as R;
        use Status as S;
        use Tone as T;

        let card = |title, subtitle, icon, tone| Self {
            title,
            subtitle,
            icon,
            tone,
            pulse: false,
            countdown: None,
        };

        match (order.status(), role) {
            (S::DraftOffer, R::Buyer | R::Seller) => card(
                "Compose your offer",
                "Enter the offer amount and choose how to trade.",
                I::Document,
                T::Neutral,
            ),
            (S::OfferSubmitted, R::Buyer) => Self {
                countdown: Countdown::since(
                    order,
                    |k| matches!(k, EventKind::OfferSubmitted { .. }),
                    CountdownKind::OfferValidity,
                    settings.offer_response_window,
                    now,
                ),
                ..card(
                    "Waiting for the seller",
                    "Your offer is sent, please wait for the response.",
                    I::Clock,
                    T::Warning,
                )
            },
            (S::OfferSubmitted, R::Seller) => Self {
                countdown: Countdown::since(
                    order,
                    |k| matches!(k, EventKind::OfferSubmitted { .. }),
                    CountdownKind::ResponseTime,
                    settings.offer_response_window,
                    now,
                ),
                ..card(
                    "New offer received",
                    "Accept, reject or counter the offer.",
                    I::Alert,
                    T::Warning,
                )
            },
            (S::OfferCountered, R::Buyer) => card(
                "Seller countered",
                "The seller proposed a new price, please review it.",
                I::Alert,
                T::Success,
            ),
            (S::OfferCountered, R::Seller) => card(
                "Waiting for the buyer",
                "Your counter offer is sent and awaits the buyer.",
                I::Clock,
                T::Warning,
            ),
            (S::PaymentPending, R::Buyer) => Self {
                pulse: true,
                countdown: Countdown::since(
                    order,
                    |k| matches!(k, EventKind::OfferAccepted { .. }),
                    CountdownKind::StockLock,
                    settings.payment_window,
                    now,
                ),
                ..card(
                    "Order placed, please pay",
                    "The stock is locked for you until the payment window \
                     ends.",
                    I::Card,
                    T::Success,
                )
            },
            (S::PaymentPending, R::Seller) => card(
                "Waiting for the payment",
                "The order is placed and awaits the buyer's payment.",
                I::Clock,
                T::Warning,
            ),
            (S::ToShip, R::Buyer) => card(
                "Waiting for the seller to ship",
                "Payment succeeded, the seller is notified to ship.",
                I::Clock,
                T::Warning,
            ),
            (S::ToShip, R::Seller) => card(
                "Ship to the authentication center",
                "The buyer has paid, please fill in the shipping form.",
                I::Truck,
                T::Success,
            ),
            (S::InTransit, R::Buyer) => card(
                "Item in transit",
                "The item is on its way to the authentication center.",
                I::Truck,
                T::Warning,
            ),
            (S::InTransit, R::Seller) => card(
                "Shipping form received",
                "Send the parcel or deliver the watch to the designated \
                 place.",
                I::CheckCircle,
                T::Warning,
            ),
            (S::WarehouseReceived, R::Buyer | R::Seller) => card(
                "Stocked in",
                "The center staff checked the watch into the inventory.",
                I::Warehouse,
                T::Info,
            ),
            (S::Authenticating, R::Buyer | R::Seller) => Self {
                pulse: true,
                ..card(
                    "Being authenticated",
                    "Experts are verifying the authenticity.",
                    I::Shield,
                    T::Warning,
                )
            },
            (S::AuthPassed, R::Buyer) => card(
                "Authenticated, book the handover",
                "Choose a WM secure location or arrange the handover \
                 yourselves.",
                I::CheckCircle,
                T::Success,
            ),
            (S::AuthPassed, R::Seller) => card(
                "Authenticated, waiting for the buyer",
                "The item is genuine, the buyer is choosing the handover.",
                I::Clock,
                T::Warning,
            ),
            (S::AuthPassedDispute, R::Buyer) => card(
                "Negotiating (waiting for the seller)",
                "The report shows the item passed, but the order is locked \
                 until the seller answers the issues you raised.",
                I::Message,
                T::Info,
            ),
            (S::AuthPassedDispute, R::Seller) => card(
                "Negotiating (please answer the buyer)",
                "Your item passed the authentication, but the buyer disputes \
                 the report. Retrieval is locked until you agree.",
                I::Warning,
                T::Info,
            ),
            (S::AuthFailed, R::Buyer) => card(
                "Authentication failed",
                "The item failed the authentication, see the report.",
                I::Cross,
                T::Danger,
            ),
            (S::AuthFailed, R::Seller) => card(
                "Authentication failed",
                "The item failed the authentication, contact support for \
                 the return.",
                I::Cross,
                T::Danger,
            ),
            (S::HandoverWm, R::Buyer) => card(
                "Handover booked at a WM location",
                "Bring the full payment to the WM office at the booked time. \
                 The deposit is returned once the trade completes.",
                I::Handshake,
                T::Success,
            ),
            (S::HandoverWm, R::Seller) => card(
                "Buyer booked a WM location handover",
                "Please attend at the booked time. Your watch is escorted to \
                 the WM office for safekeeping.",
                I::Handshake,
                T::Success,
            ),
            (S::HandoverSelf, R::Buyer) => card(
                "You chose a self-arranged handover",
                "Contact the seller to agree on the time and place.",
                I::Handshake,
                T::Success,
            ),
            (S::HandoverSelf, R::Seller) => card(
                "Buyer chose a self-arranged handover",
                "Retrieve the watch from the authentication center first.",
                I::Package,
                T::Success,
            ),
            (S::HandoverSellerRetrieved, R::Buyer) => card(
                "Awaiting handover (seller has the item)",
                "The seller retrieved the item, contact them to agree on the \
                 time and place.",
                I::Clock,
                T::Success,
            ),
            (S::HandoverSellerRetrieved, R::Seller) => card(
                "Awaiting handover (contact the buyer)",
                "You retrieved the item, agree on the meeting with the buyer \
                 soon.",
                I::Message,
                T::Success,
            ),
            (S::Completed, R::Buyer) => card(
                "Trade completed",
                "Thanks for using the WM authentication service, the deposit \
                 is refunded within 3 days.",
                I::Check,
                T::Success,
            ),
            (S::Completed, R::Seller) => card(
                "Trade completed",
                "Congratulations, your item is sold.",
                I::Check,
                T::Success,
            ),
            (S::Cancelled, role) => card(
                "Transaction cancelled",
                cancelled_subtitle(order.cancellation(), role),
                I::Cross,
                T::Danger,
            ),
            (S::Refunded, R::Buyer) => card(
                "Closed (deposit refunded)",
                "The money is returned to the original payment account.",
                I::Refund,
                T::Success,
            ),
            (S::Refunded, R::Seller) => card(
                "Closed (deposit refunded)",
                "The deposit is returned to the buyer and the order is closed.",
                I::Refund,
                T::Success,
            ),
        }
    }
}

/// Explains how the transaction was cancelled to the provided [`Role`].
const fn cancelled_subtitle(
    cancellation: Option<Cancellation>,
    role: Role,
) -> &'static str {
    use Cancellation as C;
    use Role as R;

    match (cancellation, role) {
        (Some(C::BuyerCancelled), R::Buyer) => {
            "You cancelled your offer, the transaction is closed."
        }
        (Some(C::BuyerCancelled), R::Seller) => {
            "The buyer cancelled the offer, the transaction is closed."
        }
        (Some(C::SellerRejected), R::Buyer) => {
            "The seller rejected your offer, the transaction is cancelled."
        }
        (Some(C::SellerRejected), R::Seller) => {
            "You rejected this offer, the transaction is cancelled."
        }
        (Some(C::CounterRetracted), R::Buyer) => {
            "The seller retracted the counter offer, the transaction is \
             cancelled."
        }
        (Some(C::CounterRetracted), R::Seller) => {
            "You retracted your counter offer, the transaction is cancelled."
        }
        (Some(C::PaymentLapsed), R::Buyer | R::Seller) => {
            "The payment window lapsed and the stock is released."
        }
        (None, R::Buyer | R::Seller) => "The transaction is cancelled.",
    }
}

/// Icon of a [`StatusCard`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Icon {
    /// Payment card.
    Card,

    /// Check mark.
    Check,

    /// Check mark in a circle.
    CheckCircle,

    /// Clock.
    Clock,

    /// Cross in a circle.
    Cross,

    /// Exclamation mark in a circle.
    Alert,

    /// Form to fill in.
    Document,

    /// Handshake.
    Handshake,

    /// Speech bubble.
    Message,

    /// Parcel.
    Package,

    /// Circular arrow.
    Refund,

    /// Shield with a check mark.
    Shield,

    /// Delivery truck.
    Truck,

    /// Warehouse.
    Warehouse,

    /// Exclamation mark in a triangle.
    Warning,
}

/// Color tone of a [`StatusCard`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Tone {
    /// Nothing happened yet.
    Neutral,

    /// Waiting on someone.
    Warning,

    /// Things go well, or it's the viewer's turn.
    Success,

    /// Informational.
    Info,

    /// Something went wrong.
    Danger,
}

/// What a [`Countdown`] counts down to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CountdownKind {
    /// Validity of the buyer's offer.
    OfferValidity,

    /// Time left for the seller to respond.
    ResponseTime,

    /// Time the stock stays locked for the buyer's payment.
    StockLock,
}

impl CountdownKind {
    /// Returns the label the remaining time is prefixed with.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OfferValidity => "Offer valid for",
            Self::ResponseTime => "Time left to respond",
            Self::StockLock => "Stock locked for",
        }
    }
}

/// Time left until a [`Status`] lapses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Countdown {
    /// [`CountdownKind`] of this [`Countdown`].
    pub kind: CountdownKind,

    /// Moment the [`Status`] lapses at.
    pub deadline: DeadlineDateTime,

    /// [`Duration`] left until the [`Countdown::deadline`].
    pub remaining: Duration,
}

impl Countdown {
    /// Creates a [`Countdown`] of the `window` started by the last [`Order`]
    /// event matching the `started` predicate.
    ///
    /// [`None`] is returned if no such event happened.
    fn since(
        order: &Order,
        started: fn(&EventKind) -> bool,
        kind: CountdownKind,
        window: Duration,
        now: DateTime,
    ) -> Option<Self> {
        let deadline: DeadlineDateTime =
            order.last_event(started)?.at.coerce().saturating_add(window);
        Some(Self {
            kind,
            deadline,
            remaining: now.until(deadline),
        })
    }
}

impl fmt::Display for Countdown {
    /// Formats as `<label> HH:MM:SS`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.remaining.as_secs();
        write!(
            f,
            "{} {:02}:{:02}:{:02}",
            self.kind.label(),
            secs / 3600,
            secs / 60 % 60,
            secs % 60,
        )
    }
}

/// [`DateTime`] when a [`Countdown`] ends.
pub type DeadlineDateTime = DateTimeOf<(Countdown, unit::Deadline)>;

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::DateTime;
    use service::domain::{Role, Status};
    use strum::IntoEnumIterator as _;

    use crate::{fixture, Settings};

    use super::{CountdownKind, StatusCard, Tone};

    fn card(session: &service::Session, role: Role) -> StatusCard {
        StatusCard::of(
            session.order(),
            role,
            &Settings::default(),
            DateTime::now(),
        )
    }

    #[test]
    fn covers_every_status_and_role() {
        for status in Status::iter() {
            for role in Role::iter() {
                let session = fixture::at(status);
                let card = card(&session, role);

                assert!(!card.title.is_empty(), "{status} {role}");
                assert!(!card.subtitle.is_empty(), "{status} {role}");
                assert_eq!(
                    card.countdown.is_some(),
                    status == Status::OfferSubmitted
                        || (status == Status::PaymentPending
                            && role == Role::Buyer),
                    "{status} {role}",
                );
            }
        }
    }

    #[test]
    fn failures_are_dangerous() {
        for status in Status::iter() {
            let card = card(&fixture::at(status), Role::Buyer);

            assert_eq!(
                card.tone == Tone::Danger,
                matches!(status, Status::AuthFailed | Status::Cancelled),
                "{status}",
            );
        }
    }

    #[test]
    fn counts_down_offer_response() {
        let session = fixture::at(Status::OfferSubmitted);
        let submitted_at = session.order().history()[0].at;
        let now: DateTime =
            submitted_at.coerce().saturating_add(Duration::from_secs(60 * 60));

        let countdown = StatusCard::of(
            session.order(),
            Role::Seller,
            &Settings::default(),
            now,
        )
        .countdown
        .unwrap();

        assert_eq!(countdown.kind, CountdownKind::ResponseTime);
        assert_eq!(countdown.remaining, Duration::from_secs(23 * 60 * 60));
        assert_eq!(countdown.to_string(), "Time left to respond 23:00:00");
    }

    #[test]
    fn stock_lock_saturates() {
        let session = fixture::at(Status::PaymentPending);
        let accepted_at = session.order().history()[1].at;
        let now: DateTime =
            accepted_at
            .coerce()
            .saturating_add(Duration::from_secs(5 * 60 * 60));

        let card = StatusCard::of(
            session.order(),
            Role::Buyer,
            &Settings::default(),
            now,
        );

        assert!(card.pulse);
        let countdown = card.countdown.unwrap();
        assert_eq!(countdown.kind, CountdownKind::StockLock);
        assert_eq!(countdown.remaining, Duration::ZERO);
        assert_eq!(countdown.to_string(), "Stock locked for 00:00:00");
    }

    #[test]
    fn explains_cancellation() {
        let rejected = fixture::rejected();
        let cancelled = fixture::cancelled_by_buyer();

        assert_eq!(
            card(&rejected, Role::Seller).subtitle,
            "You rejected this offer, the transaction is cancelled.",
        );
        assert_eq!(
            card(&cancelled, Role::Seller).subtitle,
            "The buyer cancelled the offer, the transaction is closed.",
        );
        assert_ne!(
            card(&rejected, Role::Buyer).subtitle,
            card(&cancelled, Role::Buyer).subtitle,
        );
        assert_eq!(card(&rejected, Role::Buyer).title, "Transaction cancelled");
    }
}
