//! Materialized quote/forward outcomes.
//!
//! [`can_forward`](crate::can_forward) is the decision; this module turns
//! it into the value a caller actually embeds in the new message: the
//! verbatim content, a provenance-only shell, or nothing.

use crate::forward::can_forward;
use crate::model::{AudienceEnv, AudienceSelector, Facet};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sheaf_types::{AttachmentRef, FacetId, ForwardDecision, MessageId};

/// What a re-shared facet looks like to the new audience.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum QuoteView {
    /// Containment was proven and the policy allows it: quote the content
    /// as written.
    Verbatim {
        body: JsonValue,
        attachments: Vec<AttachmentRef>,
    },
    /// Safety could not be established (or the author opted out of
    /// verbatim re-export): a shell carrying provenance only, with no
    /// body and no attachments.
    Shell {
        message_id: MessageId,
        facet_id: FacetId,
    },
    /// The author forbade re-sharing outright.
    Blocked,
}

/// Resolve a quote of `facet` for a new `target` audience.
pub fn resolve_quote(
    facet: &Facet,
    target: &AudienceSelector,
    env: &dyn AudienceEnv,
) -> QuoteView {
    match can_forward(facet, target, env) {
        ForwardDecision::Allow => QuoteView::Verbatim {
            body: facet.body.clone(),
            attachments: facet.attachments.clone(),
        },
        ForwardDecision::Redact => QuoteView::Shell {
            message_id: facet.message_id.clone(),
            facet_id: facet.id.clone(),
        },
        ForwardDecision::Forbid => QuoteView::Blocked,
    }
}
