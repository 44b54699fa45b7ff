//! [`Command`] for cancelling an offer under negotiation.

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

/// [`Command`] for the buyer cancelling an offer of an [`Order`] under
/// negotiation.
#[derive(Clone, Copy, Debug)]
pub struct CancelOffer {
    /// [`Role`] cancelling the offer.
    pub role: Role,
}

impl Command<CancelOffer> for Session {
    type Ok = Status;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: CancelOffer) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CancelOffer { role } = cmd;

        RoleMismatch::check(Role::Buyer, role)
            .map_err(E::from)
            .and_then(|()| {
                StatusMismatch::check(
                    &[Status::OfferSubmitted, Status::OfferCountered],
                    self.current_status(),
                )
                .map_err(E::from)
            })
            .map_err(tracerr::wrap!())
            .inspect_err(log_rejection)?;

        let order = self.order_mut();
        let cancellation = Cancellation::BuyerCancelled;
        order.set_cancellation(cancellation);
        order.transit(Status::Cancelled, EventKind::Cancelled { cancellation });

        Ok(Status::Cancelled)
    }
}

/// Error of [`CancelOffer`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`CancelOffer`] is issued by a [`Role`] other than the buyer.
    #[display("{_0}")]
    #[from]
    Role(RoleMismatch),

    /// [`Order`] is not under negotiation.
    #[display("{_0}")]
    #[from]
    Status(StatusMismatch),
}

#[cfg(test)]
mod spec {
    use crate::{
        command::Command as _,
        domain::{order::Cancellation, Role, Status},
        fixture,
    };

    use super::{CancelOffer, ExecutionError};

    #[test]
    fn cancels_submitted_offer() {
        let mut session = fixture::submitted();

        let status =
            session.execute(CancelOffer { role: Role::Buyer }).unwrap();

        assert_eq!(status, Status::Cancelled);
        assert_eq!(
            session.order().cancellation(),
            Some(Cancellation::BuyerCancelled),
        );
        assert_eq!(session.order().reject_reason(), None);
    }

    #[test]
    fn cancels_countered_offer() {
        let mut session = fixture::countered(260_000);

        _ = session.execute(CancelOffer { role: Role::Buyer }).unwrap();

        assert_eq!(session.current_status(), Status::Cancelled);
        assert_eq!(session.order().counter_price(), None);
    }

    #[test]
    fn rejects_seller() {
        let mut session = fixture::submitted();

        let err = session
            .execute(CancelOffer { role: Role::Seller })
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Role(_)));
        assert_eq!(session.current_status(), Status::OfferSubmitted);
    }

    #[test]
    fn rejects_outside_negotiation() {
        for mut session in [
            fixture::agreed(),
            fixture::advanced(&[]),
            fixture::advanced(&[Status::ToShip]),
        ] {
            let before = session.current_status();

            let err = session
                .execute(CancelOffer { role: Role::Buyer })
                .unwrap_err();

            assert!(matches!(err.as_ref(), ExecutionError::Status(_)));
            assert_eq!(session.current_status(), before);
        }
    }
}
