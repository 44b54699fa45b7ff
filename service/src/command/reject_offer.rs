//! [`Command`] for rejecting a submitted offer.

use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        order::{Cancellation, EventKind, RejectReason},
        Role, Status,
    },
    Session,
};
#[cfg(doc)]
use crate::domain::Order;

use super::{log_rejection, Command, RoleMismatch, StatusMismatch};

/// [`Command`] for the seller rejecting the submitted offer of an [`Order`].
#[derive(Clone, Copy, Debug)]
pub struct RejectOffer {
    /// [`Role`] rejecting the offer.
    pub role: Role,

    /// Selected [`RejectReason`], if any.
    pub reason: Option<RejectReason>,
}

impl Command<RejectOffer> for Session {
    type Ok = RejectReason;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: RejectOffer) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let RejectOffer { role, reason } = cmd;

        let reason = RoleMismatch::check(Role::Seller, role)
            .map_err(E::from)
            .and_then(|()| {
                StatusMismatch::check(
                    &[Status::OfferSubmitted],
                    self.current_status(),
                )
                .map_err(E::from)
            })
            .and_then(|()| reason.ok_or(E::ReasonNotSelected))
            .map_err(tracerr::wrap!())
            .inspect_err(log_rejection)?;

        let order = self.order_mut();
        let cancellation = Cancellation::SellerRejected;
        order.set_reject_reason(reason);
        order.set_cancellation(cancellation);
        order.transit(Status::Cancelled, EventKind::Cancelled { cancellation });

        Ok(reason)
    }
}

/// Error of [`RejectOffer`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// No [`RejectReason`] is selected.
    #[display("no reason is selected")]
    ReasonNotSelected,

    /// [`RejectOffer`] is issued by a [`Role`] other than the seller.
    #[display("{_0}")]
    #[from]
    Role(RoleMismatch),

    /// [`Order`] is not awaiting the seller's response.
    #[display("{_0}")]
    #[from]
    Status(StatusMismatch),
}

#[cfg(test)]
mod spec {
    use strum::IntoEnumIterator as _;

    use crate::{
        command::Command as _,
        domain::{
            order::{Cancellation, RejectReason},
            Role, Status,
        },
        fixture,
    };

    use super::{ExecutionError, RejectOffer};

    #[test]
    fn rejects_with_any_reason() {
        for reason in RejectReason::iter() {
            let mut session = fixture::submitted();

            let rejected = session
                .execute(RejectOffer {
                    role: Role::Seller,
                    reason: Some(reason),
                })
                .unwrap();

            assert_eq!(rejected, reason);
            assert_eq!(session.current_status(), Status::Cancelled);
            assert_eq!(session.order().reject_reason(), Some(reason));
            assert_eq!(
                session.order().cancellation(),
                Some(Cancellation::SellerRejected),
            );
        }
    }

    #[test]
    fn requires_reason() {
        let mut session = fixture::submitted();

        let err = session
            .execute(RejectOffer {
                role: Role::Seller,
                reason: None,
            })
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::ReasonNotSelected));
        assert_eq!(session.current_status(), Status::OfferSubmitted);
        assert_eq!(session.order().reject_reason(), None);
    }

    #[test]
    fn rejects_buyer_and_countered_offer() {
        let mut session = fixture::submitted();
        let err = session
            .execute(RejectOffer {
                role: Role::Buyer,
                reason: Some(RejectReason::Other),
            })
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::Role(_)));

        let mut session = fixture::countered(240_000);
        let err = session
            .execute(RejectOffer {
                role: Role::Seller,
                reason: Some(RejectReason::PriceTooLow),
            })
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::Status(_)));
        assert_eq!(session.current_status(), Status::OfferCountered);
    }
}
