//! [`Gesture`]s made on an order page.

use std::str::FromStr;

use derive_more::{Display, Error, From};
use service::{
    command::{
        self, AcceptOffer, Advance, CancelOffer, ChangeHandoverMethod,
        ChangeOfferPrice, ChangeServiceMode, CounterOffer, ModifyOffer,
        ReOffer, RejectOffer, RetractCounter, SetAgreement, SubmitOffer,
    },
    domain::{
        order::{
            Agreement, HandoverMethod, PriceError, RejectReason, ServiceMode,
        },
        Price, Role, Status,
    },
    Command as _, Session,
};
use tracerr::Traced;

/// Gesture made by a buyer, a seller or a collaborating system.
///
/// Parsed from `<name>` or `<name>=<value>`, e.g. `agree`, `price=180000`,
/// `reject=price_too_low` or `advance=to_ship`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Gesture {
    /// Buyer accepts every draft [`Agreement`].
    Agree,

    /// Buyer sets the draft offer price.
    Price(Price),

    /// Buyer switches the [`ServiceMode`].
    Mode(ServiceMode),

    /// Buyer chooses the [`HandoverMethod`].
    Handover(HandoverMethod),

    /// Buyer submits the offer.
    Submit,

    /// Buyer raises the offer.
    Modify(Price),

    /// Buyer cancels the offer.
    Cancel,

    /// Seller accepts the offer.
    Accept,

    /// Seller counters the offer.
    Counter(Price),

    /// Seller rejects the offer.
    Reject(Option<RejectReason>),

    /// Seller retracts the counter.
    Retract,

    /// Buyer drafts a new offer.
    ReOffer,

    /// Collaborating system advances the order.
    Advance(Status),
}

impl Gesture {
    /// Parses a [`Gesture`] out of the provided `input`, reading prices in
    /// the [`Currency`] of the provided [`Session`].
    ///
    /// # Errors
    ///
    /// If the `input` names no [`Gesture`] or its value is malformed.
    ///
    /// [`Currency`]: common::money::Currency
    pub fn parse(input: &str, session: &Session) -> Result<Self, ParseError> {
        use ParseError as E;

        let currency = session.order().currency();
        let price = |v: &str| Price::parse(v, currency).map_err(E::from);
        let (name, value) = match input.split_once('=') {
            Some((n, v)) => (n.trim(), Some(v.trim())),
            None => (input.trim(), None),
        };

        Ok(match (name, value) {
            ("agree", None) => Self::Agree,
            ("price", Some(v)) => Self::Price(price(v)?),
            ("mode", Some(v)) => Self::Mode(kind(v)?),
            ("handover", Some(v)) => Self::Handover(kind(v)?),
            ("submit", None) => Self::Submit,
            ("modify", Some(v)) => Self::Modify(price(v)?),
            ("cancel", None) => Self::Cancel,
            ("accept", None) => Self::Accept,
            ("counter", Some(v)) => Self::Counter(price(v)?),
            ("reject", None) => Self::Reject(None),
            ("reject", Some(v)) => Self::Reject(Some(kind(v)?)),
            ("retract", None) => Self::Retract,
            ("reoffer", None) => Self::ReOffer,
            ("advance", Some(v)) => Self::Advance(
                Status::from_str(v).map_err(|_| E::Value(v.to_owned()))?,
            ),
            _ => return Err(E::Unknown(input.to_owned())),
        })
    }

    /// Makes this [`Gesture`] on the provided [`Session`] on behalf of the
    /// provided [`Role`], returning the resulting [`Status`].
    ///
    /// [`Gesture::Advance`] is made by collaborating systems, so ignores the
    /// `role`.
    ///
    /// # Errors
    ///
    /// If the [`Session`] rejects the [`Gesture`], including when the `role`
    /// may not make it.
    pub fn apply(
        self,
        session: &mut Session,
        role: Role,
    ) -> Result<Status, Rejection> {
        match self {
            Self::Agree => {
                for agreement in [Agreement::Terms, Agreement::Shipping] {
                    _ = session.execute(SetAgreement {
                        role,
                        agreement,
                        accepted: true,
                    })?;
                }
            }
            Self::Price(price) => {
                _ = session.execute(ChangeOfferPrice { role, price })?;
            }
            Self::Mode(mode) => {
                _ = session.execute(ChangeServiceMode { role, mode })?;
            }
            Self::Handover(method) => {
                _ = session.execute(ChangeHandoverMethod { role, method })?;
            }
            Self::Submit => {
                _ = session.execute(SubmitOffer { role })?;
            }
            Self::Modify(price) => {
                _ = session.execute(ModifyOffer { role, price })?;
            }
            Self::Cancel => {
                _ = session.execute(CancelOffer { role })?;
            }
            Self::Accept => {
                _ = session.execute(AcceptOffer { role })?;
            }
            Self::Counter(price) => {
                _ = session.execute(CounterOffer { role, price })?;
            }
            Self::Reject(reason) => {
                _ = session.execute(RejectOffer { role, reason })?;
            }
            Self::Retract => {
                _ = session.execute(RetractCounter { role })?;
            }
            Self::ReOffer => {
                _ = session.execute(ReOffer { role })?;
            }
            Self::Advance(to) => {
                _ = session.execute(Advance { to })?;
            }
        }
        Ok(session.current_status())
    }
}

/// Parses a `snake_case` kind value.
fn kind<T: FromStr>(value: &str) -> Result<T, ParseError> {
    T::from_str(&value.to_uppercase())
        .map_err(|_| ParseError::Value(value.to_owned()))
}

/// Error of parsing a [`Gesture`].
#[derive(Clone, Debug, Display, Error, From, Eq, PartialEq)]
pub enum ParseError {
    /// Input names no [`Gesture`].
    #[display("unknown gesture `{_0}`")]
    #[from(ignore)]
    Unknown(#[error(not(source))] String),

    /// Price value is malformed.
    #[display("invalid price: {_0}")]
    Price(PriceError),

    /// Value is not one of the allowed ones.
    #[display("invalid value `{_0}`")]
    #[from(ignore)]
    Value(#[error(not(source))] String),
}

/// [`Gesture`] rejected by the [`Session`].
#[derive(Debug, Display, Error, From)]
pub enum Rejection {
    /// [`AcceptOffer`] is rejected.
    #[display("{_0}")]
    Accept(Traced<command::accept_offer::ExecutionError>),

    /// [`Advance`] is rejected.
    #[display("{_0}")]
    Advance(Traced<command::advance::ExecutionError>),

    /// [`SetAgreement`] is rejected.
    #[display("{_0}")]
    Agreement(Traced<command::set_agreement::ExecutionError>),

    /// [`CancelOffer`] is rejected.
    #[display("{_0}")]
    Cancel(Traced<command::cancel_offer::ExecutionError>),

    /// [`CounterOffer`] is rejected.
    #[display("{_0}")]
    Counter(Traced<command::counter_offer::ExecutionError>),

    /// [`ChangeHandoverMethod`] is rejected.
    #[display("{_0}")]
    Handover(Traced<command::change_handover_method::ExecutionError>),

    /// [`ChangeServiceMode`] is rejected.
    #[display("{_0}")]
    Mode(Traced<command::change_service_mode::ExecutionError>),

    /// [`ModifyOffer`] is rejected.
    #[display("{_0}")]
    Modify(Traced<command::modify_offer::ExecutionError>),

    /// [`ChangeOfferPrice`] is rejected.
    #[display("{_0}")]
    Price(Traced<command::change_offer_price::ExecutionError>),

    /// [`ReOffer`] is rejected.
    #[display("{_0}")]
    ReOffer(Traced<command::re_offer::ExecutionError>),

    /// [`RejectOffer`] is rejected.
    #[display("{_0}")]
    Reject(Traced<command::reject_offer::ExecutionError>),

    /// [`RetractCounter`] is rejected.
    #[display("{_0}")]
    Retract(Traced<command::retract_counter::ExecutionError>),

    /// [`SubmitOffer`] is rejected.
    #[display("{_0}")]
    Submit(Traced<command::submit_offer::ExecutionError>),
}
