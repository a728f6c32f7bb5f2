use crate::model::{AudienceEnv, AudienceSelector, Facet};
use crate::subset::audience_subset_of;
use sheaf_types::{ForwardDecision, SharePolicy, SubsetProof};

/// Decide whether a facet's content may be re-addressed to `target`.
///
/// The share policy is the author's cap and is consulted first:
/// - `Forbid` is an absolute veto, regardless of how narrow `target` is.
/// - `Redact` never allows verbatim re-export, even to a provably
///   identical audience, so the subset proof is not computed.
/// - `Allow` permits verbatim forwarding only on a proven containment;
///   both a disproven and an unprovable containment fall back to a
///   provenance-only redacted shell.
pub fn can_forward(
    facet: &Facet,
    target: &AudienceSelector,
    env: &dyn AudienceEnv,
) -> ForwardDecision {
    match facet.share_policy {
        SharePolicy::Forbid => ForwardDecision::Forbid,
        SharePolicy::Redact => ForwardDecision::Redact,
        SharePolicy::Allow => match audience_subset_of(target, &facet.audience, env) {
            SubsetProof::Yes => ForwardDecision::Allow,
            SubsetProof::No | SubsetProof::Indeterminate => ForwardDecision::Redact,
        },
    }
}
