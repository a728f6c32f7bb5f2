//! Shared test fixtures for the sheaf workspace.
//!
//! This crate exists because the integration tests of several crates
//! build the same storage rows; a `#[cfg(test)]` module inside one crate
//! would not be visible to the others. Fixture ranks match the ladder the
//! engine stamps at creation (0/10/20/25/30/35), exactly as a database
//! dump would carry them.

#![forbid(unsafe_code)]

use sheaf_types::record::{KIND_EVERYONE, KIND_LIST, KIND_ROLE, KIND_USERS};
use sheaf_types::{AudienceListRecord, AudienceMode, FacetRecord, ListId, ViewerId};
use std::collections::BTreeSet;
use time::macros::datetime;
use time::OffsetDateTime;

/// Fixed evaluation instant used across fixtures.
pub const NOW: OffsetDateTime = datetime!(2025-03-01 12:00 UTC);

/// Sorted, deduplicated member vector, matching how the write path
/// flattens a frozen set into a row.
pub fn member_vec<'a>(members: impl IntoIterator<Item = &'a str>) -> Vec<ViewerId> {
    members
        .into_iter()
        .map(ViewerId::new)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn list_row<'a>(
    id: &str,
    version: u64,
    members: impl IntoIterator<Item = &'a str>,
) -> AudienceListRecord {
    AudienceListRecord {
        id: ListId::new(id),
        member_ids: member_vec(members),
        version,
    }
}

fn base_record(id: &str, message_id: &str, kind: &str, priority_rank: i32) -> FacetRecord {
    FacetRecord {
        id: id.into(),
        message_id: message_id.into(),
        audience_kind: kind.to_string(),
        audience_mode: AudienceMode::Dynamic.as_wire().to_string(),
        audience_role: None,
        audience_list_id: None,
        snapshot_member_ids: Vec::new(),
        list_version_at_send: None,
        audience_user_ids: Vec::new(),
        share_policy: "ALLOW".to_string(),
        expires_at: None,
        body: serde_json::Value::Null,
        attachments: Vec::new(),
        created_at: NOW,
        priority_rank,
    }
}

pub fn everyone_record(id: &str, message_id: &str) -> FacetRecord {
    base_record(id, message_id, KIND_EVERYONE, 0)
}

pub fn role_record(id: &str, message_id: &str, role: &str) -> FacetRecord {
    let mut rec = base_record(id, message_id, KIND_ROLE, 10);
    rec.audience_role = Some(role.to_string());
    rec
}

pub fn dynamic_list_record(id: &str, message_id: &str, list_id: &str) -> FacetRecord {
    let mut rec = base_record(id, message_id, KIND_LIST, 20);
    rec.audience_list_id = Some(ListId::new(list_id));
    rec
}

pub fn snapshot_list_record<'a>(
    id: &str,
    message_id: &str,
    list_id: &str,
    version: u64,
    members: impl IntoIterator<Item = &'a str>,
) -> FacetRecord {
    let mut rec = base_record(id, message_id, KIND_LIST, 25);
    rec.audience_mode = AudienceMode::Snapshot.as_wire().to_string();
    rec.audience_list_id = Some(ListId::new(list_id));
    rec.snapshot_member_ids = member_vec(members);
    rec.list_version_at_send = Some(version);
    rec
}

pub fn users_record<'a>(
    id: &str,
    message_id: &str,
    mode: AudienceMode,
    members: impl IntoIterator<Item = &'a str>,
) -> FacetRecord {
    let rank = match mode {
        AudienceMode::Dynamic => 30,
        AudienceMode::Snapshot => 35,
    };
    let mut rec = base_record(id, message_id, KIND_USERS, rank);
    rec.audience_mode = mode.as_wire().to_string();
    match mode {
        AudienceMode::Snapshot => rec.snapshot_member_ids = member_vec(members),
        AudienceMode::Dynamic => rec.audience_user_ids = member_vec(members),
    }
    rec
}
