//! [`Role`] definitions.

use common::define_kind;

#[cfg(doc)]
use crate::domain::Order;

define_kind! {
    #[doc = "Party viewing or acting upon an [`Order`].\n\n\
             Supplied per session from the outside, never stored in an \
             [`Order`]."]
    enum Role {
        #[doc = "Party making offers."]
        Buyer = 1,

        #[doc = "Party owning the listed item."]
        Seller = 2,
    }
}
