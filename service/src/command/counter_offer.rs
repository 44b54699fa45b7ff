//! [`Command`] for countering a submitted offer.

use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{order::EventKind, Price, Role, Status},
    Session,
};
#[cfg(doc)]
use crate::domain::Order;

use super::{
    log_rejection, Command, CurrencyMismatch, RoleMismatch, StatusMismatch,
};

/// [`Command`] for the seller proposing another [`Price`] for the submitted
/// offer of an [`Order`].
///
/// The counter [`Price`] replaces the standing offer [`Price`], so the
/// buyer's original amount survives only in the [`Order::history()`].
#[derive(Clone, Copy, Debug)]
pub struct CounterOffer {
    /// [`Role`] countering the offer.
    pub role: Role,

    /// Counter [`Price`].
    pub price: Price,
}

impl Command<CounterOffer> for Session {
    type Ok = Price;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: CounterOffer) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CounterOffer { role, price } = cmd;
        let order = self.order();

        RoleMismatch::check(Role::Seller, role)
            .map_err(E::from)
            .and_then(|()| {
                StatusMismatch::check(&[Status::OfferSubmitted], order.status())
                    .map_err(E::from)
            })
            .and_then(|()| {
                CurrencyMismatch::check(order.currency(), price)
                    .map_err(E::from)
            })
            .map_err(tracerr::wrap!())
            .inspect_err(log_rejection)?;

        let order = self.order_mut();
        order.set_counter_price(price);
        order.transit(
            Status::OfferCountered,
            EventKind::OfferCountered { price },
        );

        Ok(price)
    }
}

/// Error of [`CounterOffer`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Price`] is given in a wrong currency.
    #[display("{_0}")]
    #[from]
    Currency(CurrencyMismatch),

    /// [`CounterOffer`] is issued by a [`Role`] other than the seller.
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
    use common::{money::Currency, Money};
    use rust_decimal::Decimal;

    use crate::{
        command::Command as _,
        domain::{order::EventKind, Price, Role, Status},
        fixture::{self, hkd},
    };

    use super::{CounterOffer, ExecutionError};

    #[test]
    fn counters_submitted_offer() {
        let mut session = fixture::submitted();

        let price = session
            .execute(CounterOffer {
                role: Role::Seller,
                price: hkd(260_000),
            })
            .unwrap();

        assert_eq!(price, hkd(260_000));
        assert_eq!(session.current_status(), Status::OfferCountered);
        assert_eq!(session.order().counter_price(), Some(hkd(260_000)));
    }

    #[test]
    fn counter_overwrites_standing_offer() {
        let session = fixture::countered(240_000);

        // Standing offer and counter share the same slot.
        assert_eq!(session.offer_price(), hkd(240_000));
        assert_eq!(
            session.order().counter_price(),
            Some(session.offer_price()),
        );

        let submitted = session
            .order()
            .last_event(|k| matches!(k, EventKind::OfferSubmitted { .. }))
            .unwrap();
        assert_eq!(
            submitted.kind,
            EventKind::OfferSubmitted {
                price: hkd(250_000),
            },
        );
    }

    #[test]
    fn rejects_buyer() {
        let mut session = fixture::submitted();

        let err = session
            .execute(CounterOffer {
                role: Role::Buyer,
                price: hkd(260_000),
            })
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Role(_)));
        assert_eq!(session.current_status(), Status::OfferSubmitted);
        assert_eq!(session.order().counter_price(), None);
    }

    #[test]
    fn rejects_second_counter() {
        let mut session = fixture::countered(240_000);

        let err = session
            .execute(CounterOffer {
                role: Role::Seller,
                price: hkd(230_000),
            })
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Status(_)));
        assert_eq!(session.offer_price(), hkd(240_000));
    }

    #[test]
    fn rejects_other_currency() {
        let mut session = fixture::submitted();
        let eur = Price::new(Money::new(Decimal::from(30_000), Currency::Eur))
            .unwrap();

        let err = session
            .execute(CounterOffer {
                role: Role::Seller,
                price: eur,
            })
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Currency(_)));
        assert_eq!(session.current_status(), Status::OfferSubmitted);
    }
}
