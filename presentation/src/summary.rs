//! Offer and payment summaries.

use common::{Money, Percent};
use service::{
    domain::{
        order::{HandoverMethod, ServiceMode},
        Fees, PaymentPlan, Price, Role, Status,
    },
    Session,
};

/// Summary of a submitted or cancelled offer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OfferSummary {
    /// Header of the summary.
    pub header: &'static str,

    /// Badge next to the header, if any.
    pub badge: Option<&'static str>,

    /// Offered [`Price`].
    pub price: Price,

    /// [`ServiceMode`] of the offer.
    pub service_mode: ServiceMode,

    /// [`HandoverMethod`] of the offer.
    pub handover_method: HandoverMethod,

    /// Title of the fee breakdown.
    pub fees_title: &'static str,

    /// [`PaymentPlan`] of the offer.
    pub plan: PaymentPlan,

    /// Whether the offer is cancelled, so displayed as void.
    pub is_cancelled: bool,

    /// Note about the terms the buyer agreed to.
    pub footnote: &'static str,
}

impl OfferSummary {
    /// Derives the [`OfferSummary`] of the provided [`Session`] for the
    /// provided [`Role`].
    ///
    /// [`None`] is returned unless the offer is submitted or cancelled.
    #[must_use]
    pub fn of(session: &Session, role: Role) -> Option<Self> {
        let status = session.current_status();
        if !matches!(status, Status::OfferSubmitted | Status::Cancelled) {
            return None;
        }
        let is_cancelled = status == Status::Cancelled;
        let is_seller = role == Role::Seller;

        Some(Self {
            header: if is_cancelled {
                "Offer history (cancelled)"
            } else if is_seller {
                "Offer received"
            } else {
                "Offer details"
            },
            badge: if is_cancelled {
                Some("Void")
            } else if is_seller {
                Some("Respond")
            } else {
                None
            },
            price: session.offer_price(),
            service_mode: session.service_mode(),
            handover_method: session.handover_method(),
            fees_title: if is_seller {
                "Fees paid by the buyer"
            } else {
                "Fees and breakdown"
            },
            plan: session.payment_plan(),
            is_cancelled,
            footnote: if is_seller {
                "The buyer bears the transaction fees and accepted the \
                 platform terms."
            } else {
                "The buyer agreed to the platform terms and the buyer notice."
            },
        })
    }
}

/// Payment breakdown of a drafted offer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DraftBreakdown {
    /// [`PaymentPlan`] of the drafted offer.
    pub plan: PaymentPlan,

    /// Whether the offer is low enough to likely be rejected.
    pub is_low_offer: bool,
}

impl DraftBreakdown {
    /// Derives the [`DraftBreakdown`] of the provided [`Session`], warning
    /// about offers below the `low_offer` [`Percent`] of the listing price.
    ///
    /// [`None`] is returned unless the offer is a draft.
    #[must_use]
    pub fn of(session: &Session, low_offer: Percent) -> Option<Self> {
        if session.current_status() != Status::DraftOffer {
            return None;
        }

        let listing = session.order().listing_price();
        Some(Self {
            plan: session.payment_plan(),
            is_low_offer: session.offer_price().amount()
                < low_offer.of(listing.amount()),
        })
    }
}

/// Preview of raising a submitted offer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ModifyPreview {
    /// Current offer [`Price`].
    pub current: Price,

    /// Proposed offer [`Price`].
    pub proposed: Price,

    /// [`Fees`] of the current offer.
    pub current_fees: Fees,

    /// [`Fees`] of the proposed offer.
    pub proposed_fees: Fees,

    /// Whether the proposed offer exceeds the current one.
    pub is_valid: bool,
}

impl ModifyPreview {
    /// Previews raising the offer of the provided [`Session`] to the
    /// `proposed` [`Price`].
    #[must_use]
    pub fn new(session: &Session, proposed: Price) -> Self {
        let current = session.offer_price();
        Self {
            current,
            proposed,
            current_fees: session.calculate_fees(current),
            proposed_fees: session.calculate_fees(proposed),
            is_valid: proposed.currency() == current.currency()
                && proposed.amount() > current.amount(),
        }
    }

    /// Returns how much more the proposed offer costs in fees.
    #[must_use]
    pub fn fees_delta(&self) -> Money {
        Money {
            amount: self.proposed_fees.total().amount
                - self.current_fees.total().amount,
            currency: self.proposed.currency(),
        }
    }
}
