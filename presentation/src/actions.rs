//! [`ActionBar`] of gestures available on an order page.

use service::domain::{Order, Role, Status};

/// Gesture a [`Role`] may make.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Action {
    /// Submit the drafted offer.
    Submit,

    /// Raise the submitted offer.
    ModifyOffer,

    /// Cancel the offer.
    CancelOffer,

    /// Reject the offer.
    Reject,

    /// Counter the offer.
    Counter,

    /// Accept the offer.
    Accept,

    /// Retract the counter.
    RetractCounter,

    /// Draft a new offer.
    ReOffer,
}

impl Action {
    /// Returns the label of the button making this [`Action`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Submit => "Send offer",
            Self::ModifyOffer => "Modify offer",
            Self::CancelOffer => "Cancel offer",
            Self::Reject => "Reject",
            Self::Counter => "Counter",
            Self::Accept => "Accept offer",
            Self::RetractCounter => "Retract counter",
            Self::ReOffer => "Make a new offer",
        }
    }
}

/// Button making an [`Action`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Button {
    /// [`Action`] made by this [`Button`].
    pub action: Action,

    /// Whether this [`Button`] may be pressed.
    pub is_enabled: bool,
}

/// [`Button`]s available to some [`Role`] for some [`Status`].
///
/// Empty means the [`Role`] waits for an update.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ActionBar(Vec<Button>);

impl ActionBar {
    /// Derives the [`ActionBar`] of the provided [`Order`] for the provided
    /// [`Role`].
    #[must_use]
    pub fn of(order: &Order, role: Role) -> Self {
        use Action as A;
        use Role as R;
        use Status as S;

        let enabled = |action| Button {
            action,
            is_enabled: true,
        };

        Self(match (order.status(), role) {
            (S::DraftOffer, R::Buyer) => vec![Button {
                action: A::Submit,
                is_enabled: order.is_submittable(),
            }],
            (S::OfferSubmitted, R::Buyer) => {
                vec![enabled(A::ModifyOffer), enabled(A::CancelOffer)]
            }
            (S::OfferCountered, R::Buyer) => vec![enabled(A::CancelOffer)],
            (S::OfferSubmitted, R::Seller) => vec![
                enabled(A::Reject),
                enabled(A::Counter),
                enabled(A::Accept),
            ],
            (S::OfferCountered, R::Seller) => vec![enabled(A::RetractCounter)],
            (S::Cancelled, R::Buyer) => vec![enabled(A::ReOffer)],
            _ => vec![],
        })
    }

    /// Returns the [`Button`]s of this [`ActionBar`].
    #[must_use]
    pub fn buttons(&self) -> &[Button] {
        &self.0
    }

    /// Indicates whether there is nothing to do but wait for an update.
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.0.is_empty()
    }

    /// Indicates whether the provided [`Action`] may be made.
    #[must_use]
    pub fn allows(&self, action: Action) -> bool {
        self.0.iter().any(|b| b.action == action && b.is_enabled)
    }
}
