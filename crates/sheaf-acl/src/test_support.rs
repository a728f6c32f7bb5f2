//! Builders shared by the unit and property tests in this crate.

use crate::freeze::{FacetDraft, ListDirectory, ListSnapshot};
use crate::model::{AudienceEnv, AudienceSelector, Facet, ListMembership, ListScope, ViewerContext};
use sheaf_types::{AudienceMode, FacetId, ListId, MessageId, SharePolicy, ViewerId};
use std::collections::{BTreeMap, BTreeSet};
use time::macros::datetime;
use time::OffsetDateTime;

pub const NOW: OffsetDateTime = datetime!(2025-03-01 12:00 UTC);

pub fn ids<'a>(names: impl IntoIterator<Item = &'a str>) -> BTreeSet<ViewerId> {
    names.into_iter().map(ViewerId::new).collect()
}

pub fn role(role: &str) -> AudienceSelector {
    AudienceSelector::Role {
        role: role.to_string(),
    }
}

pub fn dynamic_list(list_id: &str) -> AudienceSelector {
    AudienceSelector::List {
        list_id: ListId::new(list_id),
        scope: ListScope::Dynamic,
    }
}

pub fn snapshot_list<'a>(
    list_id: &str,
    version: u64,
    members: impl IntoIterator<Item = &'a str>,
) -> AudienceSelector {
    AudienceSelector::List {
        list_id: ListId::new(list_id),
        scope: ListScope::Snapshot {
            members: ids(members),
            list_version: version,
        },
    }
}

pub fn users<'a>(mode: AudienceMode, members: impl IntoIterator<Item = &'a str>) -> AudienceSelector {
    AudienceSelector::Users {
        mode,
        ids: ids(members),
    }
}

pub fn facet(id: &str, audience: AudienceSelector) -> Facet {
    facet_at(id, audience, NOW)
}

pub fn facet_at(id: &str, audience: AudienceSelector, created_at: OffsetDateTime) -> Facet {
    let priority_rank = crate::priority_rank(&audience);
    Facet {
        id: FacetId::new(id),
        message_id: MessageId::new("m1"),
        audience,
        share_policy: SharePolicy::Allow,
        expires_at: None,
        body: serde_json::Value::Null,
        attachments: Vec::new(),
        created_at,
        priority_rank,
    }
}

pub fn facet_with_policy(id: &str, audience: AudienceSelector, policy: SharePolicy) -> Facet {
    let mut f = facet(id, audience);
    f.share_policy = policy;
    f
}

pub fn draft(id: &str, audience: AudienceSelector) -> FacetDraft {
    FacetDraft {
        id: FacetId::new(id),
        message_id: MessageId::new("m1"),
        audience,
        share_policy: SharePolicy::Allow,
        expires_at: None,
        body: serde_json::Value::Null,
        attachments: Vec::new(),
        created_at: NOW,
    }
}

/// Membership lookup that knows no lists at all.
pub fn no_lists() -> impl ListMembership {
    |_: &ViewerId, _: &ListId| false
}

/// Membership lookup for a single list with fixed members.
pub fn member_of<'a>(
    list_id: &str,
    members: impl IntoIterator<Item = &'a str>,
) -> impl ListMembership {
    let list_id = ListId::new(list_id);
    let members = ids(members);
    move |viewer: &ViewerId, list: &ListId| *list == list_id && members.contains(viewer)
}

pub fn viewer<'a>(id: &str, lists: &'a dyn ListMembership) -> ViewerContext<'a> {
    ViewerContext::new(ViewerId::new(id), BTreeSet::new(), lists)
}

pub fn viewer_with_roles<'a, 'r>(
    id: &str,
    roles: impl IntoIterator<Item = &'r str>,
    lists: &'a dyn ListMembership,
) -> ViewerContext<'a> {
    ViewerContext::new(
        ViewerId::new(id),
        roles.into_iter().map(str::to_string).collect(),
        lists,
    )
}

/// Table-backed environment for the prover: anything absent from the
/// tables is unresolved.
#[derive(Clone, Debug, Default)]
pub struct FixedEnv {
    lists: BTreeMap<ListId, BTreeSet<ViewerId>>,
    roles: BTreeMap<String, BTreeSet<ViewerId>>,
}

impl FixedEnv {
    pub fn with_list<'a>(
        mut self,
        list_id: &str,
        members: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        self.lists.insert(ListId::new(list_id), ids(members));
        self
    }

    pub fn with_role<'a>(
        mut self,
        role: &str,
        members: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        self.roles.insert(role.to_string(), ids(members));
        self
    }
}

impl AudienceEnv for FixedEnv {
    fn resolve_list_members(&self, list: &ListId) -> Option<BTreeSet<ViewerId>> {
        self.lists.get(list).cloned()
    }

    fn resolve_role_members(&self, role: &str) -> Option<BTreeSet<ViewerId>> {
        self.roles.get(role).cloned()
    }
}

pub fn env() -> FixedEnv {
    FixedEnv::default()
}

/// Environment in which every resolution fails.
pub fn unresolved_env() -> FixedEnv {
    FixedEnv::default()
}

/// Directory with a single known list.
pub fn lists_with<'a>(
    list_id: &str,
    version: u64,
    members: impl IntoIterator<Item = &'a str>,
) -> impl ListDirectory {
    let mut table = BTreeMap::new();
    table.insert(
        ListId::new(list_id),
        ListSnapshot {
            members: ids(members),
            version,
        },
    );
    FixedDirectory(table)
}

struct FixedDirectory(BTreeMap<ListId, ListSnapshot>);

impl ListDirectory for FixedDirectory {
    fn snapshot(&self, list: &ListId) -> Option<ListSnapshot> {
        self.0.get(list).cloned()
    }
}
