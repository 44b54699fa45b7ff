//! [`Command`] for submitting a drafted offer.

use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{order::EventKind, Role, Status},
    Session,
};
#[cfg(doc)]
use crate::domain::{order::Agreements, Order};

use super::{log_rejection, Command, RoleMismatch, StatusMismatch};

/// [`Command`] for submitting the drafted offer of an [`Order`].
#[derive(Clone, Copy, Debug)]
pub struct SubmitOffer {
    /// [`Role`] submitting the offer.
    pub role: Role,
}

impl Command<SubmitOffer> for Session {
    type Ok = Status;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: SubmitOffer) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SubmitOffer { role } = cmd;
        let order = self.order();

        RoleMismatch::check(Role::Buyer, role)
            .map_err(E::from)
            .and_then(|()| {
                StatusMismatch::check(&[Status::DraftOffer], order.status())
                    .map_err(E::from)
            })
            .and_then(|()| {
                if order.agreements().all_accepted() {
                    Ok(())
                } else {
                    Err(E::AgreementsNotAccepted)
                }
            })
            .map_err(tracerr::wrap!())
            .inspect_err(log_rejection)?;

        let price = order.offer_price();
        self.order_mut().transit(
            Status::OfferSubmitted,
            EventKind::OfferSubmitted { price },
        );

        Ok(Status::OfferSubmitted)
    }
}

/// Error of [`SubmitOffer`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Not every [`Agreements`] item is accepted.
    #[display("not every agreement is accepted")]
    AgreementsNotAccepted,

    /// [`SubmitOffer`] is issued by a [`Role`] other than the buyer.
    #[display("{_0}")]
    #[from]
    Role(RoleMismatch),

    /// [`Order`] is not a draft.
    #[display("{_0}")]
    #[from]
    Status(StatusMismatch),
}
