//! Audience freezing at facet construction.
//!
//! Clients address a facet with an [`AudienceRequest`]: the identifying
//! key plus a mode, never a member set for lists. Sealing converts that
//! request into an [`AudienceSelector`], capturing the list's current
//! members and version when a snapshot is requested. The capture is
//! permanent: a frozen audience answers "who could see this when it was
//! sent" for the rest of its life, while dynamic audiences keep answering
//! "who can see this right now".

use crate::model::{AudienceSelector, Facet, ListScope};
use crate::rank::priority_rank;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sheaf_types::{
    AttachmentRef, AudienceMode, FacetId, ListId, MessageId, SharePolicy, ViewerId,
};
use std::collections::BTreeSet;
use thiserror::Error;
use time::OffsetDateTime;

/// A client-requested audience, as it arrives on the write path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum AudienceRequest {
    Everyone,
    /// Roles are always dynamic; a request cannot ask to snapshot one.
    Role { role: String },
    List { list_id: ListId, mode: AudienceMode },
    Users {
        mode: AudienceMode,
        #[serde(rename = "userIds")]
        ids: BTreeSet<ViewerId>,
    },
}

/// A list's current state, as read by the sealing caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListSnapshot {
    pub members: BTreeSet<ViewerId>,
    pub version: u64,
}

/// Read access to the current list tables, injected by the caller.
pub trait ListDirectory {
    /// Current members and version of a list, or `None` if no such list
    /// exists.
    fn snapshot(&self, list: &ListId) -> Option<ListSnapshot>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FreezeError {
    /// A snapshot was requested of a list the directory does not know.
    /// Freezing an empty set here would permanently record the wrong
    /// audience, so this is refused instead.
    #[error("cannot snapshot unknown list '{}'", .0.as_str())]
    UnknownList(ListId),
}

/// Convert a requested audience into a sealed selector, capturing list
/// membership now if a snapshot was asked for. Dynamic audiences store
/// only their identifying key.
pub fn freeze_audience(
    request: AudienceRequest,
    lists: &dyn ListDirectory,
) -> Result<AudienceSelector, FreezeError> {
    match request {
        AudienceRequest::Everyone => Ok(AudienceSelector::Everyone),
        AudienceRequest::Role { role } => Ok(AudienceSelector::Role { role }),
        AudienceRequest::List {
            list_id,
            mode: AudienceMode::Dynamic,
        } => Ok(AudienceSelector::List {
            list_id,
            scope: ListScope::Dynamic,
        }),
        AudienceRequest::List {
            list_id,
            mode: AudienceMode::Snapshot,
        } => {
            let snap = lists
                .snapshot(&list_id)
                .ok_or_else(|| FreezeError::UnknownList(list_id.clone()))?;
            Ok(AudienceSelector::List {
                list_id,
                scope: ListScope::Snapshot {
                    members: snap.members,
                    list_version: snap.version,
                },
            })
        }
        AudienceRequest::Users { mode, ids } => Ok(AudienceSelector::Users { mode, ids }),
    }
}

/// Everything a facet needs except its rank. [`FacetDraft::seal`] stamps
/// `priority_rank` from the audience exactly once; the sealed facet never
/// recomputes it.
#[derive(Clone, Debug)]
pub struct FacetDraft {
    pub id: FacetId,
    pub message_id: MessageId,
    pub audience: AudienceSelector,
    pub share_policy: SharePolicy,
    pub expires_at: Option<OffsetDateTime>,
    pub body: JsonValue,
    pub attachments: Vec<AttachmentRef>,
    pub created_at: OffsetDateTime,
}

impl FacetDraft {
    pub fn seal(self) -> Facet {
        let priority_rank = priority_rank(&self.audience);
        Facet {
            id: self.id,
            message_id: self.message_id,
            audience: self.audience,
            share_policy: self.share_policy,
            expires_at: self.expires_at,
            body: self.body,
            attachments: self.attachments,
            created_at: self.created_at,
            priority_rank,
        }
    }
}
