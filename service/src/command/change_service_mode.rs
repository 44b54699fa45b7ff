//! [`Command`] for switching the drafted [`ServiceMode`].

use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{order::ServiceMode, Role, Status},
    Session,
};
#[cfg(doc)]
use crate::domain::{order::HandoverMethod, Order};

use super::{log_rejection, Command, RoleMismatch, StatusMismatch};

/// [`Command`] for the buyer switching the [`ServiceMode`] of a draft
/// [`Order`].
///
/// The [`HandoverMethod`] is switched to the [`ServiceMode`]'s default one.
#[derive(Clone, Copy, Debug)]
pub struct ChangeServiceMode {
    /// [`Role`] editing the draft.
    pub role: Role,

    /// New [`ServiceMode`].
    pub mode: ServiceMode,
}

impl Command<ChangeServiceMode> for Session {
    type Ok = ServiceMode;
    type Err = Traced<ExecutionError>;

    fn execute(
        &mut self,
        cmd: ChangeServiceMode,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ChangeServiceMode { role, mode } = cmd;

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

        self.order_mut().set_service_mode(mode);

        Ok(mode)
    }
}

/// Error of [`ChangeServiceMode`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`ChangeServiceMode`] is issued by a [`Role`] other than the buyer.
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
            order::{HandoverMethod, ServiceMode},
            Role,
        },
        fixture, Session,
    };

    use super::{ChangeServiceMode, ExecutionError};

    #[test]
    fn direct_mode_forces_self_arranged_handover() {
        let mut session = Session::default();
        assert_eq!(session.handover_method(), HandoverMethod::PlatformCenter);

        _ = session
            .execute(ChangeServiceMode {
                role: Role::Buyer,
                mode: ServiceMode::Direct,
            })
            .unwrap();

        assert_eq!(session.service_mode(), ServiceMode::Direct);
        assert_eq!(session.handover_method(), HandoverMethod::SelfArranged);
        assert_eq!(session.payment_plan().fees, None);
    }

    #[test]
    fn wm_mode_resets_to_platform_center() {
        let mut session = Session::default();
        for mode in [ServiceMode::Direct, ServiceMode::Wm] {
            _ = session
                .execute(ChangeServiceMode {
                    role: Role::Buyer,
                    mode,
                })
                .unwrap();
        }

        assert_eq!(session.service_mode(), ServiceMode::Wm);
        assert_eq!(session.handover_method(), HandoverMethod::PlatformCenter);
    }

    #[test]
    fn rejects_outside_draft() {
        let mut session = fixture::submitted();

        let err = session
            .execute(ChangeServiceMode {
                role: Role::Buyer,
                mode: ServiceMode::Direct,
            })
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Status(_)));
        assert_eq!(session.service_mode(), ServiceMode::Wm);
    }
}
