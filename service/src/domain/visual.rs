//! Coarse pipeline [`Step`]s an [`Order`] [`Status`] is displayed as.

use std::str::FromStr as _;

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use super::Status;
#[cfg(doc)]
use super::Order;

/// Stage of the seven-stage order pipeline.
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Step {
    /// Offer negotiation.
    Offer = 0,

    /// Payment.
    Payment = 1,

    /// Shipping to the authentication center.
    Shipping = 2,

    /// Stocking in the warehouse.
    Warehouse = 3,

    /// Authentication.
    Authenticating = 4,

    /// Handover.
    Handover = 5,

    /// Completion.
    Completed = 6,
}

impl Step {
    /// All the [`Step`]s in the pipeline order.
    pub const ALL: [Self; 7] = [
        Self::Offer,
        Self::Payment,
        Self::Shipping,
        Self::Warehouse,
        Self::Authenticating,
        Self::Handover,
        Self::Completed,
    ];

    /// Returns the position of this [`Step`] in the pipeline.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// [`Step`] a [`Status`] is displayed at.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct VisualStep {
    /// Current [`Step`].
    pub step: Step,

    /// Whether the current [`Step`] failed.
    pub is_failed: bool,
}

impl VisualStep {
    /// Maps the provided [`Status`] to its [`VisualStep`].
    #[must_use]
    pub const fn of(status: Status) -> Self {
        use Status as S;

        let (step, is_failed) = match status {
            S::DraftOffer | S::OfferSubmitted | S::OfferCountered => {
                (Step::Offer, false)
            }
            S::PaymentPending => (Step::Payment, false),
            S::ToShip | S::InTransit => (Step::Shipping, false),
            S::WarehouseReceived => (Step::Warehouse, false),
            S::Authenticating | S::AuthPassed | S::AuthPassedDispute => {
                (Step::Authenticating, false)
            }
            S::AuthFailed => (Step::Authenticating, true),
            S::HandoverWm | S::HandoverSelf | S::HandoverSellerRetrieved => {
                (Step::Handover, false)
            }
            S::Completed | S::Refunded => (Step::Completed, false),
            S::Cancelled => (Step::Completed, true),
        };
        Self { step, is_failed }
    }

    /// Maps the provided raw `status` to its [`VisualStep`].
    ///
    /// Unrecognized statuses are displayed at a non-failed [`Step::Offer`].
    #[must_use]
    pub fn of_raw(status: &str) -> Self {
        Status::from_str(status).map_or(
            Self {
                step: Step::Offer,
                is_failed: false,
            },
            Self::of,
        )
    }

    /// Returns the [`StepState`] of the provided [`Step`] `index` relative to
    /// this [`VisualStep`].
    #[must_use]
    pub fn state_of(self, index: usize) -> StepState {
        use std::cmp::Ordering as O;

        match index.cmp(&self.step.index()) {
            O::Less => StepState::Completed,
            O::Equal if self.is_failed => StepState::Failed,
            O::Equal => StepState::Active,
            O::Greater => StepState::Pending,
        }
    }
}

impl From<Status> for VisualStep {
    fn from(status: Status) -> Self {
        Self::of(status)
    }
}

/// Display state of a single [`Step`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StepState {
    /// [`Step`] is passed.
    Completed,

    /// [`Step`] is the current one.
    Active,

    /// [`Step`] is the current one and it failed.
    Failed,

    /// [`Step`] is not reached yet.
    Pending,
}

impl StepState {
    /// Indicates whether the [`Step`] is reached.
    #[must_use]
    pub const fn is_reached(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Returns the [`StepState`] of the [`Step`] at the provided `index` for the
/// provided [`Status`].
///
/// The `step` itself doesn't affect the result, only its `index` does.
#[must_use]
pub fn step_state_of(_step: Step, index: usize, status: Status) -> StepState {
    VisualStep::of(status).state_of(index)
}

/// States of every pipeline [`Step`] for some [`Status`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Stepper([(Step, StepState); 7]);

impl Stepper {
    /// Derives the [`Stepper`] of the provided [`Status`].
    #[must_use]
    pub fn of(status: Status) -> Self {
        let current = VisualStep::of(status);
        Self(Step::ALL.map(|step| (step, current.state_of(step.index()))))
    }

    /// Returns the [`Step`]s along with their [`StepState`]s.
    #[must_use]
    pub fn steps(&self) -> &[(Step, StepState); 7] {
        &self.0
    }

    /// Returns the [`StepState`] of the provided [`Step`].
    #[must_use]
    pub fn state(&self, step: Step) -> StepState {
        self.0[step.index()].1
    }

    /// Indicates whether the connector following the provided [`Step`] is lit,
    /// meaning the next [`Step`] is reached.
    ///
    /// The last [`Step`] has no connector.
    #[must_use]
    pub fn is_connector_lit(&self, step: Step) -> bool {
        self.0
            .get(step.index() + 1)
            .is_some_and(|(_, state)| state.is_reached())
    }
}

#[cfg(test)]
mod spec {
    use strum::IntoEnumIterator as _;

    use crate::domain::Status;

    use super::{step_state_of, Step, StepState, Stepper, VisualStep};

    #[test]
    fn maps_statuses() {
        use Status as S;

        let expected = [
            (S::DraftOffer, Step::Offer, false),
            (S::OfferSubmitted, Step::Offer, false),
            (S::OfferCountered, Step::Offer, false),
            (S::PaymentPending, Step::Payment, false),
            (S::ToShip, Step::Shipping, false),
            (S::InTransit, Step::Shipping, false),
            (S::WarehouseReceived, Step::Warehouse, false),
            (S::Authenticating, Step::Authenticating, false),
            (S::AuthPassed, Step::Authenticating, false),
            (S::AuthPassedDispute, Step::Authenticating, false),
            (S::AuthFailed, Step::Authenticating, true),
            (S::HandoverWm, Step::Handover, false),
            (S::HandoverSelf, Step::Handover, false),
            (S::HandoverSellerRetrieved, Step::Handover, false),
            (S::Completed, Step::Completed, false),
            (S::Refunded, Step::Completed, false),
            (S::Cancelled, Step::Completed, true),
        ];
        assert_eq!(expected.len(), Status::iter().count());

        for (status, step, is_failed) in expected {
            assert_eq!(
                VisualStep::of(status),
                VisualStep { step, is_failed },
                "{status}",
            );
        }
    }

    #[test]
    fn fails_only_on_auth_failure_and_cancellation() {
        for status in Status::iter() {
            assert_eq!(
                VisualStep::of(status).is_failed,
                matches!(status, Status::AuthFailed | Status::Cancelled),
                "{status}",
            );
            assert!(Step::ALL.contains(&VisualStep::of(status).step));
        }
    }

    #[test]
    fn unrecognized_raw_status_is_offer() {
        assert_eq!(
            VisualStep::of_raw("lost_in_mail"),
            VisualStep {
                step: Step::Offer,
                is_failed: false,
            },
        );
        assert_eq!(
            VisualStep::of_raw("auth_failed"),
            VisualStep::of(Status::AuthFailed),
        );
    }

    #[test]
    fn stepper_has_single_current_step() {
        for status in Status::iter() {
            let stepper = Stepper::of(status);
            let current = stepper
                .steps()
                .iter()
                .position(|(_, s)| {
                    matches!(s, StepState::Active | StepState::Failed)
                })
                .unwrap();

            for (i, (step, state)) in stepper.steps().iter().enumerate() {
                assert_eq!(step.index(), i);
                assert_eq!(*state, step_state_of(*step, i, status));
                match i.cmp(&current) {
                    std::cmp::Ordering::Less => {
                        assert_eq!(*state, StepState::Completed, "{status}");
                    }
                    std::cmp::Ordering::Equal => {}
                    std::cmp::Ordering::Greater => {
                        assert_eq!(*state, StepState::Pending, "{status}");
                    }
                }
            }
        }
    }

    #[test]
    fn cancelled_fails_last_step() {
        let stepper = Stepper::of(Status::Cancelled);

        assert_eq!(stepper.state(Step::Completed), StepState::Failed);
        assert_eq!(stepper.state(Step::Handover), StepState::Completed);
        assert!(stepper.is_connector_lit(Step::Handover));
        assert!(!stepper.is_connector_lit(Step::Completed));
    }

    #[test]
    fn connectors_light_up_to_current_step() {
        let stepper = Stepper::of(Status::InTransit);

        assert!(stepper.is_connector_lit(Step::Offer));
        assert!(stepper.is_connector_lit(Step::Payment));
        assert!(!stepper.is_connector_lit(Step::Shipping));
        assert!(!stepper.is_connector_lit(Step::Handover));
    }

    #[test]
    fn steps_are_ordered() {
        assert!(Step::iter().eq(Step::ALL));
        assert!(Step::Offer < Step::Completed);
    }
}
