//! [`Command`] for raising a submitted offer.

use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{order::EventKind, Price, Role, Status},
    Session,
};
#[cfg(doc)]
use crate::domain::Order;

use super::{
    log_rejection, Command, CurrencyMismatch, RoleMismatch, StatusMismatch,
};

/// [`Command`] for raising the submitted offer of an [`Order`].
#[derive(Clone, Copy, Debug)]
pub struct ModifyOffer {
    /// [`Role`] modifying the offer.
    pub role: Role,

    /// New offer [`Price`], which must exceed the current one.
    pub price: Price,
}

impl Command<ModifyOffer> for Session {
    type Ok = Price;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: ModifyOffer) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ModifyOffer { role, price } = cmd;
        let order = self.order();

        RoleMismatch::check(Role::Buyer, role)
            .map_err(E::from)
            .and_then(|()| {
                StatusMismatch::check(&[Status::OfferSubmitted], order.status())
                    .map_err(E::from)
            })
            .and_then(|()| {
                CurrencyMismatch::check(order.currency(), price)
                    .map_err(E::from)
            })
            .and_then(|()| {
                if price.amount() > order.offer_price().amount() {
                    Ok(())
                } else {
                    Err(E::PriceNotRaised {
                        current: order.offer_price(),
                        proposed: price,
                    })
                }
            })
            .map_err(tracerr::wrap!())
            .inspect_err(log_rejection)?;

        let order = self.order_mut();
        order.set_offer_price(price);
        order.record(EventKind::OfferModified { price });

        Ok(price)
    }
}

/// Error of [`ModifyOffer`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Price`] is given in a wrong currency.
    #[display("{_0}")]
    #[from]
    Currency(CurrencyMismatch),

    /// Proposed [`Price`] doesn't exceed the current one.
    #[display("offer `{proposed}` doesn't exceed the current `{current}`")]
    PriceNotRaised {
        /// Current offer [`Price`].
        current: Price,

        /// Proposed offer [`Price`].
        proposed: Price,
    },

    /// [`ModifyOffer`] is issued by a [`Role`] other than the buyer.
    #[display("{_0}")]
    #[from]
    Role(RoleMismatch),

    /// [`Order`] is not awaiting the seller's response.
    #[display("{_0}")]
    #[from]
    Status(StatusMismatch),
}
