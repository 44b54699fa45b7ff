//! [`StepperView`] of the seven-stage order pipeline.

use service::domain::{Status, Step, StepState, Stepper};

/// Single pipeline stage as displayed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StepItem {
    /// Displayed [`Step`].
    pub step: Step,

    /// Label of the [`Step`].
    pub label: &'static str,

    /// [`StepState`] of the [`Step`].
    pub state: StepState,

    /// Whether the connector towards the next [`Step`] is highlighted.
    pub is_connector_lit: bool,
}

/// Pipeline stages of some [`Status`] as displayed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StepperView([StepItem; 7]);

impl StepperView {
    /// Derives the [`StepperView`] of the provided [`Status`].
    #[must_use]
    pub fn of(status: Status) -> Self {
        let stepper = Stepper::of(status);
        Self(Step::ALL.map(|step| StepItem {
            step,
            label: label(step),
            state: stepper.state(step),
            is_connector_lit: stepper.is_connector_lit(step),
        }))
    }

    /// Returns the displayed [`StepItem`]s in the pipeline order.
    #[must_use]
    pub fn items(&self) -> &[StepItem; 7] {
        &self.0
    }
}

/// Returns the label of the provided [`Step`].
#[must_use]
pub const fn label(step: Step) -> &'static str {
    match step {
        Step::Offer => "Offer",
        Step::Payment => "Payment",
        Step::Shipping => "Ship",
        Step::Warehouse => "Stock In",
        Step::Authenticating => "Auth",
        Step::Handover => "Trade",
        Step::Completed => "Complete",
    }
}
