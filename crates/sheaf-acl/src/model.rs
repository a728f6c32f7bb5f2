//! Engine-side data model: selectors, facets, messages, and the two
//! caller-supplied capabilities (live list membership, member resolution).

use serde_json::Value as JsonValue;
use sheaf_types::{
    AttachmentRef, AudienceMode, FacetId, ListId, MessageId, SharePolicy, ThreadId, ViewerId,
};
use std::collections::BTreeSet;
use time::OffsetDateTime;

/// Who a facet is addressed to. A closed sum: every function that branches
/// on this matches exhaustively, so a new kind cannot silently fall
/// through an authorization path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AudienceSelector {
    /// Matches every viewer.
    Everyone,
    /// Matches any viewer whose live role set contains `role`. Roles are
    /// always resolved live; there is no snapshot form.
    Role { role: String },
    /// Matches members of a named list, either live or as frozen at send
    /// time (see [`ListScope`]).
    List { list_id: ListId, scope: ListScope },
    /// An explicit id set, taken at face value. `mode` records whether the
    /// set was frozen from some other source; both modes match the same
    /// way and differ only in specificity rank.
    Users {
        mode: AudienceMode,
        ids: BTreeSet<ViewerId>,
    },
}

/// How a list audience resolves. A snapshot structurally carries its
/// frozen member set, so "snapshot without members" cannot be
/// represented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListScope {
    /// Membership is re-resolved on every evaluation.
    Dynamic,
    /// Membership as captured once, at facet creation. `list_version` is
    /// provenance metadata, never an access input.
    Snapshot {
        members: BTreeSet<ViewerId>,
        list_version: u64,
    },
}

/// One audience-scoped content variant of a message. Immutable once
/// sealed; `priority_rank` is stamped from the audience at creation and
/// never recomputed from live state.
#[derive(Clone, Debug, PartialEq)]
pub struct Facet {
    pub id: FacetId,
    pub message_id: MessageId,
    pub audience: AudienceSelector,
    pub share_policy: SharePolicy,
    pub expires_at: Option<OffsetDateTime>,
    /// Opaque rendered content; the engine never inspects it.
    pub body: JsonValue,
    pub attachments: Vec<AttachmentRef>,
    pub created_at: OffsetDateTime,
    pub priority_rank: i32,
}

impl Facet {
    /// A facet expiring exactly at `now` is already gone.
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// A logical message and its facets. Invariant: `facets` is non-empty and
/// facet ids are unique within the message; both are the storage layer's
/// responsibility.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub thread_id: ThreadId,
    pub author_id: ViewerId,
    pub created_at: OffsetDateTime,
    pub reply_to: Option<MessageId>,
    pub facets: Vec<Facet>,
    /// The author's explicit default choice, if any. Wins over automatic
    /// ranking whenever it is visible to the viewer.
    pub author_default_facet_id: Option<FacetId>,
}

impl Message {
    pub fn visible_facets<'m>(&'m self, ctx: &ViewerContext<'_>, now: OffsetDateTime) -> Vec<&'m Facet> {
        crate::visible_facets(ctx, now, &self.facets)
    }

    pub fn default_facet<'m>(
        &'m self,
        ctx: &ViewerContext<'_>,
        now: OffsetDateTime,
    ) -> Option<&'m Facet> {
        crate::default_facet(ctx, now, &self.facets, self.author_default_facet_id.as_ref())
    }
}

/// Live list-membership lookup, supplied by the caller and backed by
/// whatever membership store it uses. The engine never caches answers.
pub trait ListMembership {
    fn in_list(&self, viewer: &ViewerId, list: &ListId) -> bool;
}

impl<F> ListMembership for F
where
    F: Fn(&ViewerId, &ListId) -> bool,
{
    fn in_list(&self, viewer: &ViewerId, list: &ListId) -> bool {
        self(viewer, list)
    }
}

/// One viewer's evaluation context: identity, live roles, and the
/// membership capability.
pub struct ViewerContext<'a> {
    pub id: ViewerId,
    pub roles: BTreeSet<String>,
    lists: &'a dyn ListMembership,
}

impl<'a> ViewerContext<'a> {
    pub fn new(id: ViewerId, roles: BTreeSet<String>, lists: &'a dyn ListMembership) -> Self {
        Self { id, roles, lists }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn in_list(&self, list: &ListId) -> bool {
        self.lists.in_list(&self.id, list)
    }
}

/// Full member enumeration for the subset prover. `None` is the
/// distinguished "unresolved" outcome: a lookup that failed, timed out,
/// or is simply not loadable right now. The prover treats it as
/// indeterminate rather than guessing.
pub trait AudienceEnv {
    fn resolve_list_members(&self, list: &ListId) -> Option<BTreeSet<ViewerId>>;
    fn resolve_role_members(&self, role: &str) -> Option<BTreeSet<ViewerId>>;
}
