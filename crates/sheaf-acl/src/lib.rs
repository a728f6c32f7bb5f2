//! Pure audience evaluation (no IO).
//!
//! Input: facets and viewer contexts constructed elsewhere.
//! Output: visibility sets, default-facet choices, subset proofs, and
//! forward/quote decisions.
//!
//! Every function here is synchronous and side-effect-free given its
//! inputs. The only live state it ever touches comes in through the
//! caller-supplied [`model::ListMembership`] and [`model::AudienceEnv`]
//! capabilities, which the engine never caches across calls.

#![forbid(unsafe_code)]

pub mod freeze;
pub mod model;
pub mod quote;

mod forward;
mod rank;
mod subset;
mod visibility;

pub use forward::can_forward;
pub use quote::resolve_quote;
pub use rank::priority_rank;
pub use subset::audience_subset_of;
pub use visibility::{default_facet, facet_visible_to, visible_facets};

#[cfg(test)]
pub(crate) mod test_support;
