//! [`Command`] definition.

pub mod accept_offer;
pub mod advance;
pub mod cancel_offer;
pub mod change_handover_method;
pub mod change_offer_price;
pub mod change_service_mode;
pub mod counter_offer;
pub mod modify_offer;
pub mod re_offer;
pub mod reject_offer;
pub mod retract_counter;
pub mod set_agreement;
pub mod submit_offer;

use std::{any, fmt};

use common::money::Currency;
use derive_more::{Display, Error};
use tracerr::Traced;
use tracing as log;

use crate::domain::{Price, Role, Status};

/// [`Command`] of the [`Session`].
///
/// [`Session`]: crate::Session
pub use common::Handler as Command;

pub use self::{
    accept_offer::AcceptOffer, advance::Advance, cancel_offer::CancelOffer,
    change_handover_method::ChangeHandoverMethod,
    change_offer_price::ChangeOfferPrice,
    change_service_mode::ChangeServiceMode, counter_offer::CounterOffer,
    modify_offer::ModifyOffer, re_offer::ReOffer, reject_offer::RejectOffer,
    retract_counter::RetractCounter, set_agreement::SetAgreement,
    submit_offer::SubmitOffer,
};

/// [`Command`] issued by a [`Role`] not allowed to issue it.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
#[display("only `{expected}` may do this, not `{actual}`")]
pub struct RoleMismatch {
    /// [`Role`] allowed to issue the [`Command`].
    pub expected: Role,

    /// [`Role`] issued the [`Command`].
    pub actual: Role,
}

impl RoleMismatch {
    /// Checks the `actual` [`Role`] is the `expected` one.
    pub(crate) fn check(expected: Role, actual: Role) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self { expected, actual })
        }
    }
}

/// [`Command`] issued while the [`Order`] is in a [`Status`] not allowing it.
///
/// [`Order`]: crate::domain::Order
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
#[display("not allowed while `Order` is `{actual}`")]
pub struct StatusMismatch {
    /// [`Status`]es allowing the [`Command`].
    pub expected: &'static [Status],

    /// Current [`Status`] of the [`Order`].
    ///
    /// [`Order`]: crate::domain::Order
    pub actual: Status,
}

impl StatusMismatch {
    /// Checks the `actual` [`Status`] is one of the `expected` ones.
    pub(crate) fn check(
        expected: &'static [Status],
        actual: Status,
    ) -> Result<(), Self> {
        if expected.contains(&actual) {
            Ok(())
        } else {
            Err(Self { expected, actual })
        }
    }
}

/// [`Price`] given in a [`Currency`] other than the [`Order`]'s one.
///
/// [`Order`]: crate::domain::Order
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
#[display("`Order` is priced in `{expected}`, not in `{actual}`")]
pub struct CurrencyMismatch {
    /// [`Currency`] of the [`Order`].
    ///
    /// [`Order`]: crate::domain::Order
    pub expected: Currency,

    /// [`Currency`] of the given [`Price`].
    pub actual: Currency,
}

impl CurrencyMismatch {
    /// Checks the provided [`Price`] is in the `expected` [`Currency`].
    pub(crate) fn check(expected: Currency, price: Price) -> Result<(), Self> {
        let actual = price.currency();
        if expected == actual {
            Ok(())
        } else {
            Err(Self { expected, actual })
        }
    }
}

/// Logs the rejected [`Command`] at `DEBUG` level.
pub(crate) fn log_rejection<E: fmt::Display>(err: &Traced<E>) {
    log::debug!(
        error = %err.as_ref(),
        kind = any::type_name::<E>(),
        "`Command` rejected",
    );
}
