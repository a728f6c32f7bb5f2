//! Persisted row shapes, exactly as the storage layer keeps them.
//!
//! A facet row is flat and stringly-typed on purpose: it is what the
//! database hands back, not what the engine evaluates. `sheaf-record`
//! owns the strict mapping from these rows into engine values; unknown
//! kinds/modes/policies are rejected there, never widened.

use crate::ids::{FacetId, ListId, MessageId, ViewerId};
use crate::policy::AttachmentRef;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

// Audience kinds as stored.
pub const KIND_EVERYONE: &str = "EVERYONE";
pub const KIND_ROLE: &str = "ROLE";
pub const KIND_LIST: &str = "LIST";
pub const KIND_USERS: &str = "USERS";

/// One facet row. Snapshot member sets are stored denormalized on the row
/// (`snapshot_member_ids`) so a frozen audience can be reconstructed
/// without ever consulting the live list tables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacetRecord {
    pub id: FacetId,
    pub message_id: MessageId,

    pub audience_kind: String,
    pub audience_mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience_list_id: Option<ListId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub snapshot_member_ids: Vec<ViewerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_version_at_send: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audience_user_ids: Vec<ViewerId>,

    pub share_policy: String,

    #[schemars(with = "Option<String>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(with = "time::serde::rfc3339::option")]
    pub expires_at: Option<OffsetDateTime>,

    /// Opaque rendered content. The engine never inspects it.
    pub body: JsonValue,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<AttachmentRef>,

    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,

    /// Specificity rank stamped at creation from the audience; stored so
    /// default-selection never recomputes from live state.
    pub priority_rank: i32,
}

/// One audience list row: the named member set plus a monotonically
/// bumped version used for snapshot provenance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AudienceListRecord {
    pub id: ListId,
    #[serde(default)]
    pub member_ids: Vec<ViewerId>,
    #[serde(default)]
    pub version: u64,
}
