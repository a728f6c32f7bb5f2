use sheaf_acl::freeze::{ListDirectory, ListSnapshot};
use sheaf_acl::model::{ListMembership, ViewerContext};
use sheaf_types::{AudienceListRecord, ListId, ViewerId};
use std::collections::{BTreeMap, BTreeSet};

/// Audience list rows, preloaded by the caller for one request.
///
/// Doubles as the live membership lookup for visibility evaluation and as
/// the list directory for snapshot freezing: both views of "the list
/// tables as loaded right now".
#[derive(Clone, Debug, Default)]
pub struct LoadedLists {
    lists: BTreeMap<ListId, ListEntry>,
}

#[derive(Clone, Debug)]
struct ListEntry {
    members: BTreeSet<ViewerId>,
    version: u64,
}

impl LoadedLists {
    pub fn new(rows: impl IntoIterator<Item = AudienceListRecord>) -> Self {
        let lists = rows
            .into_iter()
            .map(|row| {
                (
                    row.id,
                    ListEntry {
                        members: row.member_ids.into_iter().collect(),
                        version: row.version,
                    },
                )
            })
            .collect();
        Self { lists }
    }

    pub fn contains(&self, list: &ListId, viewer: &ViewerId) -> bool {
        self.lists
            .get(list)
            .is_some_and(|entry| entry.members.contains(viewer))
    }
}

impl ListMembership for LoadedLists {
    fn in_list(&self, viewer: &ViewerId, list: &ListId) -> bool {
        self.contains(list, viewer)
    }
}

impl ListDirectory for LoadedLists {
    fn snapshot(&self, list: &ListId) -> Option<ListSnapshot> {
        self.lists.get(list).map(|entry| ListSnapshot {
            members: entry.members.clone(),
            version: entry.version,
        })
    }
}

/// Build one viewer's evaluation context from their id, role assignments,
/// and the preloaded lists.
pub fn viewer_context<'a>(
    viewer: ViewerId,
    roles: impl IntoIterator<Item = String>,
    lists: &'a LoadedLists,
) -> ViewerContext<'a> {
    ViewerContext::new(viewer, roles.into_iter().collect(), lists)
}
