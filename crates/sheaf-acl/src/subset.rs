use crate::model::{AudienceEnv, AudienceSelector, ListScope};
use sheaf_types::{SubsetProof, ViewerId};
use std::borrow::Cow;
use std::collections::BTreeSet;

/// Member sets that are readable straight off the selector: explicit user
/// sets (either mode, taken at face value) and frozen list snapshots.
fn face_value_members(selector: &AudienceSelector) -> Option<&BTreeSet<ViewerId>> {
    match selector {
        AudienceSelector::Users { ids, .. } => Some(ids),
        AudienceSelector::List {
            scope: ListScope::Snapshot { members, .. },
            ..
        } => Some(members),
        _ => None,
    }
}

/// Resolve a selector to a concrete member set, consulting the
/// environment for anything live. `None` means a required resolution was
/// unavailable.
fn resolved_members<'s>(
    selector: &'s AudienceSelector,
    env: &dyn AudienceEnv,
) -> Option<Cow<'s, BTreeSet<ViewerId>>> {
    match selector {
        AudienceSelector::Users { ids, .. } => Some(Cow::Borrowed(ids)),
        AudienceSelector::List {
            scope: ListScope::Snapshot { members, .. },
            ..
        } => Some(Cow::Borrowed(members)),
        AudienceSelector::List {
            list_id,
            scope: ListScope::Dynamic,
        } => env.resolve_list_members(list_id).map(Cow::Owned),
        AudienceSelector::Role { role } => env.resolve_role_members(role).map(Cow::Owned),
        // Everyone has no finite enumeration; both rules involving it are
        // decided before resolution is attempted.
        AudienceSelector::Everyone => None,
    }
}

/// Prove that every viewer who could see `target` could already see
/// `original`, the precondition for re-sharing `original` content to
/// `target`.
///
/// The proof is decided without the environment wherever possible; live
/// selectors (roles, dynamic lists) are resolved through `env`, and any
/// unavailable resolution yields `Indeterminate` rather than a guess.
/// Answers for dynamic selectors may legitimately change over time as the
/// backing membership changes.
pub fn audience_subset_of(
    target: &AudienceSelector,
    original: &AudienceSelector,
    env: &dyn AudienceEnv,
) -> SubsetProof {
    // Nothing is broader than everyone.
    if matches!(original, AudienceSelector::Everyone) {
        return SubsetProof::Yes;
    }
    // Re-addressing to everyone necessarily broadens exposure.
    if matches!(target, AudienceSelector::Everyone) {
        return SubsetProof::No;
    }

    // Face-value sets on both sides: decide without touching the env.
    if let (Some(target_ids), Some(original_ids)) =
        (face_value_members(target), face_value_members(original))
    {
        return containment(target_ids, original_ids);
    }

    let Some(target_ids) = resolved_members(target, env) else {
        return SubsetProof::Indeterminate;
    };
    let Some(original_ids) = resolved_members(original, env) else {
        return SubsetProof::Indeterminate;
    };
    containment(&target_ids, &original_ids)
}

fn containment(target: &BTreeSet<ViewerId>, original: &BTreeSet<ViewerId>) -> SubsetProof {
    if target.is_subset(original) {
        SubsetProof::Yes
    } else {
        SubsetProof::No
    }
}
