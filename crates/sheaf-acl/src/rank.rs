use crate::model::{AudienceSelector, ListScope};
use sheaf_types::AudienceMode;

/// Specificity rank of an audience selector, used only to pick the
/// default facet when several are visible at once. Least to most
/// specific: everyone < role < list < explicit users; within lists and
/// user sets, a pinned snapshot outranks a drifting dynamic set.
///
/// Total and pure; has no bearing on whether a facet is visible.
pub fn priority_rank(audience: &AudienceSelector) -> i32 {
    match audience {
        AudienceSelector::Everyone => 0,
        AudienceSelector::Role { .. } => 10,
        AudienceSelector::List {
            scope: ListScope::Dynamic,
            ..
        } => 20,
        AudienceSelector::List {
            scope: ListScope::Snapshot { .. },
            ..
        } => 25,
        AudienceSelector::Users {
            mode: AudienceMode::Dynamic,
            ..
        } => 30,
        AudienceSelector::Users {
            mode: AudienceMode::Snapshot,
            ..
        } => 35,
    }
}
