//! [`Command`] for accepting a submitted offer.

use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{order::EventKind, Role, Status},
    Session,
};
#[cfg(doc)]
use crate::domain::Order;

use super::{log_rejection, Command, RoleMismatch, StatusMismatch};

/// [`Command`] for the seller accepting the submitted offer of an [`Order`].
///
/// Locks the stock until the buyer pays.
#[derive(Clone, Copy, Debug)]
pub struct AcceptOffer {
    /// [`Role`] accepting the offer.
    pub role: Role,
}

impl Command<AcceptOffer> for Session {
    type Ok = Status;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: AcceptOffer) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AcceptOffer { role } = cmd;

        RoleMismatch::check(Role::Seller, role)
            .map_err(E::from)
            .and_then(|()| {
                StatusMismatch::check(
                    &[Status::OfferSubmitted],
                    self.current_status(),
                )
                .map_err(E::from)
            })
            .map_err(tracerr::wrap!())
            .inspect_err(log_rejection)?;

        let price = self.offer_price();
        self.order_mut().transit(
            Status::PaymentPending,
            EventKind::OfferAccepted { price },
        );

        Ok(Status::PaymentPending)
    }
}

/// Error of [`AcceptOffer`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`AcceptOffer`] is issued by a [`Role`] other than the seller.
    #[display("{_0}")]
    #[from]
    Role(RoleMismatch),

    /// [`Order`] is not awaiting the seller's response.
    #[display("{_0}")]
    #[from]
    Status(StatusMismatch),
}
