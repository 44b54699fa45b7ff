//! [`Command`] for advancing an [`Order`] on behalf of collaborating systems.

use derive_more::{Display, Error};
use tracerr::Traced;

use crate::{
    domain::{
        order::{Cancellation, EventKind},
        Status,
    },
    Session,
};
#[cfg(doc)]
use crate::domain::Order;

use super::{log_rejection, Command};

/// [`Command`] for advancing an [`Order`] past the negotiation.
///
/// Issued by payment capture, logistics, the authentication lab and handover
/// scheduling rather than by a buyer or a seller, so carries no [`Role`].
///
/// [`Role`]: crate::domain::Role
#[derive(Clone, Copy, Debug)]
pub struct Advance {
    /// [`Status`] to advance the [`Order`] to.
    pub to: Status,
}

impl Command<Advance> for Session {
    type Ok = Status;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: Advance) -> Result<Self::Ok, Self::Err> {
        let Advance { to } = cmd;
        let from = self.current_status();

        if !from.can_be_advanced_to(to) {
            let err = tracerr::new!(ExecutionError::TransitionNotAllowed {
                from,
                to,
            });
            log_rejection(&err);
            return Err(err);
        }

        let order = self.order_mut();
        if to == Status::Cancelled {
            let cancellation = Cancellation::PaymentLapsed;
            order.set_cancellation(cancellation);
            order.transit(to, EventKind::Cancelled { cancellation });
        } else {
            order.transit(to, EventKind::Advanced);
        }

        Ok(to)
    }
}

/// Error of [`Advance`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// Collaborating systems may not move the [`Order`] this way.
    #[display("`Order` can't be advanced from `{from}` to `{to}`")]
    TransitionNotAllowed {
        /// Current [`Status`].
        from: Status,

        /// Requested [`Status`].
        to: Status,
    },
}

#[cfg(test)]
mod spec {
    use strum::IntoEnumIterator as _;

    use crate::{
        domain::{order::Cancellation, Status},
        fixture, Command as _, Session,
    };

    use super::{Advance, ExecutionError};

    #[test]
    fn walks_happy_path() {
        use Status as S;

        let mut session = fixture::advanced(&[]);
        for to in [
            S::ToShip,
            S::InTransit,
            S::WarehouseReceived,
            S::Authenticating,
            S::AuthPassed,
            S::HandoverSelf,
            S::HandoverSellerRetrieved,
            S::Completed,
        ] {
            assert_eq!(session.execute(Advance { to }).unwrap(), to);
            assert_eq!(session.current_status(), to);
        }
        assert!(session.current_status().is_terminal());
    }

    #[test]
    fn refunds_failed_authentication() {
        let mut session = fixture::advanced(&[
            Status::ToShip,
            Status::InTransit,
            Status::WarehouseReceived,
            Status::Authenticating,
            Status::AuthFailed,
        ]);

        _ = session.execute(Advance { to: Status::Refunded }).unwrap();

        assert_eq!(session.current_status(), Status::Refunded);
    }

    #[test]
    fn lapsed_payment_cancels() {
        let mut session = fixture::advanced(&[]);

        _ = session
            .execute(Advance {
                to: Status::Cancelled,
            })
            .unwrap();

        assert_eq!(session.current_status(), Status::Cancelled);
        assert_eq!(
            session.order().cancellation(),
            Some(Cancellation::PaymentLapsed),
        );
    }

    #[test]
    fn never_moves_negotiation() {
        for mut session in [
            Session::default(),
            fixture::submitted(),
            fixture::countered(240_000),
        ] {
            let before = session.current_status();
            for to in Status::iter() {
                let err = session.execute(Advance { to }).unwrap_err();

                assert!(matches!(
                    err.as_ref(),
                    ExecutionError::TransitionNotAllowed { .. },
                ));
                assert_eq!(session.current_status(), before);
            }
        }
    }

    #[test]
    fn rejects_skipping_stages() {
        let mut session = fixture::advanced(&[]);

        let err = session
            .execute(Advance {
                to: Status::InTransit,
            })
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::TransitionNotAllowed {
                from: Status::PaymentPending,
                to: Status::InTransit,
            },
        ));
        assert_eq!(session.current_status(), Status::PaymentPending);
    }
}
