//! [`Command`] for editing the drafted offer price.

use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{Price, Role, Status},
    Session,
};
#[cfg(doc)]
use crate::domain::Order;

use super::{
    log_rejection, Command, CurrencyMismatch, RoleMismatch, StatusMismatch,
};

/// [`Command`] for the buyer setting the offer [`Price`] of a draft
/// [`Order`].
#[derive(Clone, Copy, Debug)]
pub struct ChangeOfferPrice {
    /// [`Role`] editing the draft.
    pub role: Role,

    /// New offer [`Price`].
    pub price: Price,
}

impl Command<ChangeOfferPrice> for Session {
    type Ok = Price;
    type Err = Traced<ExecutionError>;

    fn execute(
        &mut self,
        cmd: ChangeOfferPrice,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ChangeOfferPrice { role, price } = cmd;
        let order = self.order();

        RoleMismatch::check(Role::Buyer, role)
            .map_err(E::from)
            .and_then(|()| {
                StatusMismatch::check(&[Status::DraftOffer], order.status())
                    .map_err(E::from)
            })
            .and_then(|()| {
                CurrencyMismatch::check(order.currency(), price)
                    .map_err(E::from)
            })
            .map_err(tracerr::wrap!())
            .inspect_err(log_rejection)?;

        self.order_mut().set_offer_price(price);

        Ok(price)
    }
}

/// Error of [`ChangeOfferPrice`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Price`] is given in a wrong currency.
    #[display("{_0}")]
    #[from]
    Currency(CurrencyMismatch),

    /// [`ChangeOfferPrice`] is issued by a [`Role`] other than the buyer.
    #[display("{_0}")]
    #[from]
    Role(RoleMismatch),

    /// [`Order`] is not a draft.
    #[display("{_0}")]
    #[from]
    Status(StatusMismatch),
}
