//! [`Command`] for choosing the drafted [`HandoverMethod`].

use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        order::{HandoverMethod, ServiceMode},
        Role, Status,
    },
    Session,
};
#[cfg(doc)]
use crate::domain::Order;

use super::{log_rejection, Command, RoleMismatch, StatusMismatch};

/// [`Command`] for the buyer choosing the [`HandoverMethod`] of a draft
/// [`Order`].
#[derive(Clone, Copy, Debug)]
pub struct ChangeHandoverMethod {
    /// [`Role`] editing the draft.
    pub role: Role,

    /// New [`HandoverMethod`].
    pub method: HandoverMethod,
}

impl Command<ChangeHandoverMethod> for Session {
    type Ok = HandoverMethod;
    type Err = Traced<ExecutionError>;

    fn execute(
        &mut self,
        cmd: ChangeHandoverMethod,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ChangeHandoverMethod { role, method } = cmd;
        let order = self.order();

        RoleMismatch::check(Role::Buyer, role)
            .map_err(E::from)
            .and_then(|()| {
                StatusMismatch::check(&[Status::DraftOffer], order.status())
                    .map_err(E::from)
            })
            .and_then(|()| {
                let mode = order.service_mode();
                if mode.allows(method) {
                    Ok(())
                } else {
                    Err(E::HandoverNotAllowed { mode, method })
                }
            })
            .map_err(tracerr::wrap!())
            .inspect_err(log_rejection)?;

        self.order_mut().set_handover_method(method);

        Ok(method)
    }
}

/// Error of [`ChangeHandoverMethod`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`HandoverMethod`] is not available in the current [`ServiceMode`].
    #[display("`{method}` handover is not available in `{mode}` mode")]
    HandoverNotAllowed {
        /// Current [`ServiceMode`].
        mode: ServiceMode,

        /// Requested [`HandoverMethod`].
        method: HandoverMethod,
    },

    /// [`ChangeHandoverMethod`] is issued by a [`Role`] other than the buyer.
    #[display("{_0}")]
    #[from]
    Role(RoleMismatch),

    /// [`Order`] is not a draft.
    #[display("{_0}")]
    #[from]
    Status(StatusMismatch),
}
