use sheaf_acl::model::AudienceEnv;
use sheaf_types::{AudienceListRecord, ListId, ViewerId};
use std::collections::{BTreeMap, BTreeSet};

/// Membership tables backing the subset prover for one re-share check.
///
/// Anything absent from the tables is unresolved; the prover turns that
/// into `Indeterminate`, never a guess. Build a fresh env per check from
/// just-loaded rows; caching one across requests would let a stale
/// membership view prove a containment that no longer holds.
#[derive(Clone, Debug, Default)]
pub struct DirectoryEnv {
    lists: BTreeMap<ListId, BTreeSet<ViewerId>>,
    roles: BTreeMap<String, BTreeSet<ViewerId>>,
}

impl DirectoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lists(rows: impl IntoIterator<Item = AudienceListRecord>) -> Self {
        let mut env = Self::default();
        for row in rows {
            env.add_list(row);
        }
        env
    }

    pub fn add_list(&mut self, row: AudienceListRecord) {
        self.lists
            .insert(row.id, row.member_ids.into_iter().collect());
    }

    pub fn add_role(
        &mut self,
        role: impl Into<String>,
        members: impl IntoIterator<Item = ViewerId>,
    ) {
        self.roles
            .insert(role.into(), members.into_iter().collect());
    }
}

impl AudienceEnv for DirectoryEnv {
    fn resolve_list_members(&self, list: &ListId) -> Option<BTreeSet<ViewerId>> {
        self.lists.get(list).cloned()
    }

    fn resolve_role_members(&self, role: &str) -> Option<BTreeSet<ViewerId>> {
        self.roles.get(role).cloned()
    }
}
