//! [`Command`] for starting a new negotiation cycle.

use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{order::EventKind, Role, Status},
    Session,
};
#[cfg(doc)]
use crate::domain::Order;

use super::{log_rejection, Command, RoleMismatch, StatusMismatch};

/// [`Command`] for the buyer drafting a new offer for a cancelled [`Order`].
///
/// The draft form is reset to its initial values, while the
/// [`Order::history()`] is kept.
#[derive(Clone, Copy, Debug)]
pub struct ReOffer {
    /// [`Role`] re-offering.
    pub role: Role,
}

impl Command<ReOffer> for Session {
    type Ok = Status;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: ReOffer) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ReOffer { role } = cmd;

        RoleMismatch::check(Role::Buyer, role)
            .map_err(E::from)
            .and_then(|()| {
                StatusMismatch::check(
                    &[Status::Cancelled],
                    self.current_status(),
                )
                .map_err(E::from)
            })
            .map_err(tracerr::wrap!())
            .inspect_err(log_rejection)?;

        let order = self.order_mut();
        order.reset_draft();
        order.transit(Status::DraftOffer, EventKind::ReOffered);

        Ok(Status::DraftOffer)
    }
}

/// Error of [`ReOffer`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`ReOffer`] is issued by a [`Role`] other than the buyer.
    #[display("{_0}")]
    #[from]
    Role(RoleMismatch),

    /// [`Order`] is not cancelled.
    #[display("{_0}")]
    #[from]
    Status(StatusMismatch),
}
