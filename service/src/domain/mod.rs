//! Domain definitions.

pub mod fee;
pub mod order;
mod role;
pub mod visual;

pub use self::{
    fee::{calculate_fees, FeeSchedule, Fees, PaymentPlan},
    order::{Order, Price, Status},
    role::Role,
    visual::{Step, StepState, Stepper, VisualStep},
};
