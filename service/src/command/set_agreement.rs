//! [`Command`] for accepting or revoking a draft [`Agreement`].

use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        order::{Agreement, Agreements},
        Role, Status,
    },
    Session,
};
#[cfg(doc)]
use crate::domain::Order;

use super::{log_rejection, Command, RoleMismatch, StatusMismatch};

/// [`Command`] for the buyer accepting or revoking an [`Agreement`] of a
/// draft [`Order`].
#[derive(Clone, Copy, Debug)]
pub struct SetAgreement {
    /// [`Role`] editing the draft.
    pub role: Role,

    /// [`Agreement`] to set.
    pub agreement: Agreement,

    /// Whether the [`Agreement`] is accepted.
    pub accepted: bool,
}

impl Command<SetAgreement> for Session {
    type Ok = Agreements;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: SetAgreement) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SetAgreement {
            role,
            agreement,
            accepted,
        } = cmd;

        RoleMismatch::check(Role::Buyer, role)
            .map_err(E::from)
            .and_then(|()| {
                StatusMismatch::check(
                    &[Status::DraftOffer],
                    self.current_status(),
                )
                .map_err(E::from)
            })
            .map_err(tracerr::wrap!())
            .inspect_err(log_rejection)?;

        let id = self.order().id();
        let agreements = self.order_mut().agreements_mut();
        agreements.set(agreement, accepted);
        log::debug!(order.id = %id, %agreement, accepted, "`Agreement` set");

        Ok(*agreements)
    }
}

/// Error of [`SetAgreement`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`SetAgreement`] is issued by a [`Role`] other than the buyer.
    #[display("{_0}")]
    #[from]
    Role(RoleMismatch),

    /// [`Order`] is not a draft.
    #[display("{_0}")]
    #[from]
    Status(StatusMismatch),
}

#[cfg(test)]
mod spec {
    use crate::{
        command::Command as _,
        domain::{
            order::{Agreement, Agreements},
            Role,
        },
        fixture, Session,
    };

    use super::{ExecutionError, SetAgreement};

    #[test]
    fn toggles_agreements() {
        let mut session = Session::default();

        let agreements = session
            .execute(SetAgreement {
                role: Role::Buyer,
                agreement: Agreement::Shipping,
                accepted: true,
            })
            .unwrap();
        assert_eq!(
            agreements,
            Agreements {
                terms: false,
                shipping: true,
            },
        );
        assert!(!session.order().is_submittable());

        let agreements = session
            .execute(SetAgreement {
                role: Role::Buyer,
                agreement: Agreement::Terms,
                accepted: true,
            })
            .unwrap();
        assert!(agreements.all_accepted());
        assert!(session.order().is_submittable());
    }

    #[test]
    fn rejects_seller_and_submitted() {
        let mut session = Session::default();
        let err = session
            .execute(SetAgreement {
                role: Role::Seller,
                agreement: Agreement::Terms,
                accepted: true,
            })
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::Role(_)));
        assert_eq!(session.order().agreements(), Agreements::default());

        let mut session = fixture::submitted();
        let err = session
            .execute(SetAgreement {
                role: Role::Buyer,
                agreement: Agreement::Terms,
                accepted: false,
            })
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::Status(_)));
        assert!(session.order().agreements().all_accepted());
    }
}
