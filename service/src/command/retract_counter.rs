//! [`Command`] for retracting a counter offer.

use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        order::{Cancellation, EventKind},
        Role, Status,
    },
    Session,
};
#[cfg(doc)]
use crate::domain::Order;

use super::{log_rejection, Command, RoleMismatch, StatusMismatch};

/// [`Command`] for the seller retracting the counter offer of an [`Order`],
/// which cancels the negotiation.
#[derive(Clone, Copy, Debug)]
pub struct RetractCounter {
    /// [`Role`] retracting the counter.
    pub role: Role,
}

impl Command<RetractCounter> for Session {
    type Ok = Status;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: RetractCounter) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let RetractCounter { role } = cmd;

        RoleMismatch::check(Role::Seller, role)
            .map_err(E::from)
            .and_then(|()| {
                StatusMismatch::check(
                    &[Status::OfferCountered],
                    self.current_status(),
                )
                .map_err(E::from)
            })
            .map_err(tracerr::wrap!())
            .inspect_err(log_rejection)?;

        let order = self.order_mut();
        let cancellation = Cancellation::CounterRetracted;
        order.set_cancellation(cancellation);
        order.transit(Status::Cancelled, EventKind::Cancelled { cancellation });

        Ok(Status::Cancelled)
    }
}

/// Error of [`RetractCounter`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`RetractCounter`] is issued by a [`Role`] other than the seller.
    #[display("{_0}")]
    #[from]
    Role(RoleMismatch),

    /// [`Order`] is not countered.
    #[display("{_0}")]
    #[from]
    Status(StatusMismatch),
}
