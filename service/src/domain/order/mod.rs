//! [`Order`] definitions.

mod event;
mod price;
mod status;

use common::{define_kind, money::Currency, unit, DateTime, DateTimeOf};
use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use tracing as log;
use uuid::Uuid;

pub use self::{
    event::{Event, EventKind},
    price::{Price, PriceError},
    status::Status,
};

/// Order negotiated between a buyer and a seller within one session.
///
/// [`Status`] is the single source of truth for the workflow position. The
/// viewing [`Role`] is never stored here.
///
/// [`Role`]: crate::domain::Role
#[derive(Clone, Debug)]
pub struct Order {
    /// ID of this [`Order`].
    id: Id,

    /// Current [`Status`] of this [`Order`].
    status: Status,

    /// Price of the listing, which a new draft starts from.
    listing_price: Price,

    /// Currently standing [`Price`].
    ///
    /// Holds the buyer's offer, and the seller's counter once countered.
    offer_price: Price,

    /// [`ServiceMode`] of this [`Order`].
    service_mode: ServiceMode,

    /// [`HandoverMethod`] of this [`Order`].
    handover_method: HandoverMethod,

    /// [`Agreements`] accepted by the buyer in the draft.
    agreements: Agreements,

    /// [`RejectReason`] selected by the seller, if rejected.
    reject_reason: Option<RejectReason>,

    /// [`Price`] countered by the seller, while being negotiated.
    counter_price: Option<Price>,

    /// How this [`Order`] was cancelled, if it was.
    cancellation: Option<Cancellation>,

    /// [`Event`]s happened to this [`Order`], oldest first.
    history: Vec<Event>,

    /// [`DateTime`] when this [`Order`] was created.
    created_at: CreationDateTime,
}

impl Order {
    /// Creates a new [`Order`] drafting an offer of the `listing_price`.
    #[must_use]
    pub fn new(listing_price: Price) -> Self {
        Self {
            id: Id::new(),
            status: Status::DraftOffer,
            listing_price,
            offer_price: listing_price,
            service_mode: ServiceMode::default(),
            handover_method: HandoverMethod::default(),
            agreements: Agreements::default(),
            reject_reason: None,
            counter_price: None,
            cancellation: None,
            history: Vec::new(),
            created_at: DateTime::now().coerce(),
        }
    }

    /// Returns ID of this [`Order`].
    #[must_use]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the current [`Status`] of this [`Order`].
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the [`Currency`] all prices of this [`Order`] are in.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.listing_price.currency()
    }

    /// Returns the listing [`Price`] this [`Order`] is negotiated for.
    #[must_use]
    pub fn listing_price(&self) -> Price {
        self.listing_price
    }

    /// Returns the currently standing offer [`Price`].
    ///
    /// Once the seller counters, this is the counter [`Price`].
    #[must_use]
    pub fn offer_price(&self) -> Price {
        self.offer_price
    }

    /// Returns the [`ServiceMode`] of this [`Order`].
    #[must_use]
    pub fn service_mode(&self) -> ServiceMode {
        self.service_mode
    }

    /// Returns the [`HandoverMethod`] of this [`Order`].
    #[must_use]
    pub fn handover_method(&self) -> HandoverMethod {
        self.handover_method
    }

    /// Returns the [`Agreements`] accepted in the draft.
    #[must_use]
    pub fn agreements(&self) -> Agreements {
        self.agreements
    }

    /// Returns the [`RejectReason`], if the seller rejected the offer.
    #[must_use]
    pub fn reject_reason(&self) -> Option<RejectReason> {
        self.reject_reason
    }

    /// Returns the counter [`Price`], while the seller's counter is being
    /// negotiated.
    #[must_use]
    pub fn counter_price(&self) -> Option<Price> {
        self.counter_price
    }

    /// Returns how this [`Order`] was cancelled, if it was.
    #[must_use]
    pub fn cancellation(&self) -> Option<Cancellation> {
        self.cancellation
    }

    /// Returns [`Event`]s happened to this [`Order`], oldest first.
    #[must_use]
    pub fn history(&self) -> &[Event] {
        &self.history
    }

    /// Returns [`DateTime`] when this [`Order`] was created.
    #[must_use]
    pub fn created_at(&self) -> CreationDateTime {
        self.created_at
    }

    /// Returns the last [`Event`] of the provided `kind`.
    #[must_use]
    pub fn last_event(&self, kind: fn(&EventKind) -> bool) -> Option<&Event> {
        self.history.iter().rev().find(|e| kind(&e.kind))
    }

    /// Indicates whether the draft of this [`Order`] can be submitted.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.status == Status::DraftOffer && self.agreements.all_accepted()
    }

    /// Moves this [`Order`] to the provided [`Status`] recording the `kind`
    /// of [`Event`] caused it.
    ///
    /// Callers must check the transition is allowed.
    pub(crate) fn transit(&mut self, to: Status, kind: EventKind) {
        let from = self.status;
        debug_assert!(from.can_transition_to(to), "{from} -> {to}");

        self.status = to;
        if !matches!(to, Status::OfferCountered) {
            self.counter_price = None;
        }
        self.record(kind);

        log::info!(order.id = %self.id, %from, %to, "`Order` status changed");
    }

    /// Records an [`Event`] of the provided `kind` at the current [`Status`].
    pub(crate) fn record(&mut self, kind: EventKind) {
        self.history.push(Event {
            kind,
            status: self.status,
            at: DateTime::now().coerce(),
        });
    }

    /// Replaces the standing offer [`Price`].
    pub(crate) fn set_offer_price(&mut self, price: Price) {
        log::debug!(
            order.id = %self.id,
            from = %self.offer_price,
            to = %price,
            "`Order` offer price changed",
        );
        self.offer_price = price;
    }

    /// Records the counter [`Price`] into both the counter and the standing
    /// offer slots.
    pub(crate) fn set_counter_price(&mut self, price: Price) {
        self.set_offer_price(price);
        self.counter_price = Some(price);
    }

    /// Sets the [`ServiceMode`] keeping the [`HandoverMethod`] consistent
    /// with it.
    pub(crate) fn set_service_mode(&mut self, mode: ServiceMode) {
        self.service_mode = mode;
        self.handover_method = mode.default_handover_method();
        log::debug!(
            order.id = %self.id,
            service_mode = %self.service_mode,
            handover_method = %self.handover_method,
            "`Order` service mode changed",
        );
    }

    /// Sets the [`HandoverMethod`].
    ///
    /// Callers must check it's [`ServiceMode::allows()`] it.
    pub(crate) fn set_handover_method(&mut self, method: HandoverMethod) {
        debug_assert!(self.service_mode.allows(method), "{method}");

        self.handover_method = method;
        log::debug!(
            order.id = %self.id,
            handover_method = %method,
            "`Order` handover method changed",
        );
    }

    /// Returns mutable [`Agreements`] of the draft.
    pub(crate) fn agreements_mut(&mut self) -> &mut Agreements {
        &mut self.agreements
    }

    /// Records the [`RejectReason`] selected by the seller.
    pub(crate) fn set_reject_reason(&mut self, reason: RejectReason) {
        self.reject_reason = Some(reason);
    }

    /// Records how this [`Order`] is being cancelled.
    pub(crate) fn set_cancellation(&mut self, cancellation: Cancellation) {
        self.cancellation = Some(cancellation);
    }

    /// Resets the draft form fields for a new negotiation cycle.
    ///
    /// [`Order::history()`] is kept.
    pub(crate) fn reset_draft(&mut self) {
        self.offer_price = self.listing_price;
        self.service_mode = ServiceMode::default();
        self.handover_method = HandoverMethod::default();
        self.agreements = Agreements::default();
        self.reject_reason = None;
        self.counter_price = None;
        self.cancellation = None;
    }
}

/// ID of an [`Order`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

define_kind! {
    #[doc = "Whether platform authentication and fees apply to an [`Order`]."]
    enum ServiceMode {
        #[doc = "Platform authenticates the item, fees apply."]
        Wm = 1,

        #[doc = "Parties deal directly, no authentication and no fees."]
        Direct = 2,
    }
}

impl Default for ServiceMode {
    fn default() -> Self {
        Self::Wm
    }
}

impl ServiceMode {
    /// Returns the [`HandoverMethod`] an [`Order`] switches to along with
    /// this [`ServiceMode`].
    #[must_use]
    pub const fn default_handover_method(self) -> HandoverMethod {
        match self {
            Self::Wm => HandoverMethod::PlatformCenter,
            Self::Direct => HandoverMethod::SelfArranged,
        }
    }

    /// Indicates whether the provided [`HandoverMethod`] may be used under
    /// this [`ServiceMode`].
    #[must_use]
    pub const fn allows(self, method: HandoverMethod) -> bool {
        match self {
            Self::Wm => true,
            Self::Direct => matches!(method, HandoverMethod::SelfArranged),
        }
    }

    /// Indicates whether platform fees apply under this [`ServiceMode`].
    #[must_use]
    pub const fn charges_fees(self) -> bool {
        matches!(self, Self::Wm)
    }
}

define_kind! {
    #[doc = "Where the item of an [`Order`] is handed over."]
    enum HandoverMethod {
        #[doc = "At a platform-operated center."]
        PlatformCenter = 1,

        #[doc = "Wherever the parties agree."]
        SelfArranged = 2,
    }
}

impl Default for HandoverMethod {
    fn default() -> Self {
        ServiceMode::default().default_handover_method()
    }
}

define_kind! {
    #[doc = "Agreement the buyer must accept before submitting an offer."]
    enum Agreement {
        #[doc = "Terms and conditions."]
        Terms = 1,

        #[doc = "Shipping and handover policy."]
        Shipping = 2,
    }
}

/// [`Agreement`]s accepted by the buyer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Agreements {
    /// Whether [`Agreement::Terms`] are accepted.
    pub terms: bool,

    /// Whether [`Agreement::Shipping`] is accepted.
    pub shipping: bool,
}

impl Agreements {
    /// Returns whether the provided [`Agreement`] is accepted.
    #[must_use]
    pub const fn is_accepted(self, agreement: Agreement) -> bool {
        match agreement {
            Agreement::Terms => self.terms,
            Agreement::Shipping => self.shipping,
        }
    }

    /// Marks the provided [`Agreement`] as `accepted` or not.
    pub fn set(&mut self, agreement: Agreement, accepted: bool) {
        match agreement {
            Agreement::Terms => self.terms = accepted,
            Agreement::Shipping => self.shipping = accepted,
        }
    }

    /// Indicates whether every [`Agreement`] is accepted.
    #[must_use]
    pub const fn all_accepted(self) -> bool {
        self.terms && self.shipping
    }
}

define_kind! {
    #[doc = "Reason the seller rejects an offer with."]
    enum RejectReason {
        #[doc = "Offered price is too low."]
        PriceTooLow = 1,

        #[doc = "Item is already sold or reserved."]
        SoldOrReserved = 2,

        #[doc = "Seller doesn't want to sell for now."]
        NotSelling = 3,

        #[doc = "Any other reason."]
        Other = 4,
    }
}

define_kind! {
    #[doc = "How an [`Order`] reached [`Status::Cancelled`]."]
    enum Cancellation {
        #[doc = "Buyer cancelled the offer."]
        BuyerCancelled = 1,

        #[doc = "Seller rejected the offer."]
        SellerRejected = 2,

        #[doc = "Seller retracted the counter."]
        CounterRetracted = 3,

        #[doc = "Buyer didn't pay in time."]
        PaymentLapsed = 4,
    }
}

/// [`DateTime`] when an [`Order`] was created.
pub type CreationDateTime = DateTimeOf<(Order, unit::Creation)>;

#[cfg(test)]
mod spec {
    use common::{money::Currency, Money};
    use rust_decimal::Decimal;
    use strum::IntoEnumIterator as _;

    use super::{
        Agreement, Agreements, HandoverMethod, Order, Price, ServiceMode,
        Status,
    };

    fn order() -> Order {
        Order::new(
            Price::new(Money::new(Decimal::from(250_000), Currency::Hkd))
                .unwrap(),
        )
    }

    #[test]
    fn starts_as_draft_of_listing_price() {
        let order = order();

        assert_eq!(order.status(), Status::DraftOffer);
        assert_eq!(order.offer_price(), order.listing_price());
        assert_eq!(order.service_mode(), ServiceMode::Wm);
        assert_eq!(order.handover_method(), HandoverMethod::PlatformCenter);
        assert_eq!(order.agreements(), Agreements::default());
        assert!(order.history().is_empty());
        assert!(!order.is_submittable());
    }

    #[test]
    fn direct_mode_allows_only_self_arranged_handover() {
        for method in HandoverMethod::iter() {
            assert!(ServiceMode::Wm.allows(method));
        }
        assert!(ServiceMode::Direct.allows(HandoverMethod::SelfArranged));
        assert!(!ServiceMode::Direct.allows(HandoverMethod::PlatformCenter));

        for mode in ServiceMode::iter() {
            assert!(mode.allows(mode.default_handover_method()));
        }
    }

    #[test]
    fn service_mode_change_realigns_handover() {
        let mut order = order();

        order.set_service_mode(ServiceMode::Direct);
        assert_eq!(order.handover_method(), HandoverMethod::SelfArranged);

        order.set_service_mode(ServiceMode::Wm);
        assert_eq!(order.handover_method(), HandoverMethod::PlatformCenter);
    }

    #[test]
    fn agreements_require_both() {
        let mut agreements = Agreements::default();

        agreements.set(Agreement::Terms, true);
        assert!(agreements.is_accepted(Agreement::Terms));
        assert!(!agreements.all_accepted());

        agreements.set(Agreement::Shipping, true);
        assert!(agreements.all_accepted());

        agreements.set(Agreement::Terms, false);
        assert!(!agreements.all_accepted());
    }
}
