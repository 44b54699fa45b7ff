//! Selectable [`RejectReason`]s.

use service::domain::order::RejectReason;
use strum::IntoEnumIterator as _;

/// Returns the label of the provided [`RejectReason`].
#[must_use]
pub const fn label(reason: RejectReason) -> &'static str {
    match reason {
        RejectReason::PriceTooLow => "Price too low",
        RejectReason::SoldOrReserved => "Item sold or reserved",
        RejectReason::NotSelling => "Not selling for now",
        RejectReason::Other => "Other reason",
    }
}

/// Returns every [`RejectReason`] the seller may select, along with its
/// label.
pub fn options() -> impl Iterator<Item = (RejectReason, &'static str)> {
    RejectReason::iter().map(|r| (r, label(r)))
}

#[cfg(test)]
mod spec {
    use service::domain::order::RejectReason;

    use super::options;

    #[test]
    fn lists_every_reason_in_order() {
        let options = options().collect::<Vec<_>>();

        assert_eq!(options.len(), 4);
        assert_eq!(options[0], (RejectReason::PriceTooLow, "Price too low"));
        assert_eq!(options[3], (RejectReason::Other, "Other reason"));
    }
}
