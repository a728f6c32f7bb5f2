use sheaf_acl::model::{AudienceSelector, Facet, ListScope};
use sheaf_types::record::{KIND_EVERYONE, KIND_LIST, KIND_ROLE, KIND_USERS};
use sheaf_types::{AudienceMode, FacetId, FacetRecord, SharePolicy};
use thiserror::Error;

/// A row that cannot be mapped to a well-formed audience. Decoding is
/// strict: widening a malformed row to `Everyone` would be an
/// authorization bug, so every unrecognized shape is refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("facet '{}': unknown audience kind '{kind}'", .facet.as_str())]
    UnknownAudienceKind { facet: FacetId, kind: String },

    #[error("facet '{}': unknown audience mode '{mode}'", .facet.as_str())]
    UnknownAudienceMode { facet: FacetId, mode: String },

    #[error("facet '{}': unknown share policy '{policy}'", .facet.as_str())]
    UnknownSharePolicy { facet: FacetId, policy: String },

    #[error("facet '{}': role audience without a role", .facet.as_str())]
    MissingRole { facet: FacetId },

    #[error("facet '{}': list audience without a list id", .facet.as_str())]
    MissingListId { facet: FacetId },

    #[error("facet '{}': role audiences are never snapshotted", .facet.as_str())]
    SnapshotRole { facet: FacetId },
}

/// Rebuild an engine facet from its stored row.
///
/// Frozen member sets come straight off the row; live list state is never
/// consulted. The stored `priority_rank` is carried over as-is; it was
/// stamped at creation and must not be re-derived.
pub fn decode_facet(rec: &FacetRecord) -> Result<Facet, DecodeError> {
    let mode = AudienceMode::from_wire(&rec.audience_mode).ok_or_else(|| {
        DecodeError::UnknownAudienceMode {
            facet: rec.id.clone(),
            mode: rec.audience_mode.clone(),
        }
    })?;

    let audience = match rec.audience_kind.as_str() {
        KIND_EVERYONE => AudienceSelector::Everyone,
        KIND_ROLE => {
            if mode == AudienceMode::Snapshot {
                return Err(DecodeError::SnapshotRole {
                    facet: rec.id.clone(),
                });
            }
            let role = rec
                .audience_role
                .clone()
                .ok_or_else(|| DecodeError::MissingRole {
                    facet: rec.id.clone(),
                })?;
            AudienceSelector::Role { role }
        }
        KIND_LIST => {
            let list_id =
                rec.audience_list_id
                    .clone()
                    .ok_or_else(|| DecodeError::MissingListId {
                        facet: rec.id.clone(),
                    })?;
            let scope = match mode {
                AudienceMode::Dynamic => ListScope::Dynamic,
                AudienceMode::Snapshot => ListScope::Snapshot {
                    members: rec.snapshot_member_ids.iter().cloned().collect(),
                    // Older rows predate version stamping.
                    list_version: rec.list_version_at_send.unwrap_or(0),
                },
            };
            AudienceSelector::List { list_id, scope }
        }
        KIND_USERS => {
            let ids = match mode {
                AudienceMode::Snapshot => rec.snapshot_member_ids.iter().cloned().collect(),
                AudienceMode::Dynamic => rec.audience_user_ids.iter().cloned().collect(),
            };
            AudienceSelector::Users { mode, ids }
        }
        other => {
            return Err(DecodeError::UnknownAudienceKind {
                facet: rec.id.clone(),
                kind: other.to_string(),
            });
        }
    };

    let share_policy = SharePolicy::from_wire(&rec.share_policy).ok_or_else(|| {
        DecodeError::UnknownSharePolicy {
            facet: rec.id.clone(),
            policy: rec.share_policy.clone(),
        }
    })?;

    Ok(Facet {
        id: rec.id.clone(),
        message_id: rec.message_id.clone(),
        audience,
        share_policy,
        expires_at: rec.expires_at,
        body: rec.body.clone(),
        attachments: rec.attachments.clone(),
        created_at: rec.created_at,
        priority_rank: rec.priority_rank,
    })
}

/// Decode a batch, failing on the first malformed row.
pub fn decode_facets(recs: &[FacetRecord]) -> Result<Vec<Facet>, DecodeError> {
    recs.iter().map(decode_facet).collect()
}

/// The write-path inverse of [`decode_facet`]: flatten a sealed facet
/// into its storage row. Snapshot sets land in `snapshot_member_ids`,
/// dynamic user sets in `audience_user_ids`, as the tables expect.
pub fn encode_facet(facet: &Facet) -> FacetRecord {
    let mut rec = FacetRecord {
        id: facet.id.clone(),
        message_id: facet.message_id.clone(),
        audience_kind: KIND_EVERYONE.to_string(),
        audience_mode: AudienceMode::Dynamic.as_wire().to_string(),
        audience_role: None,
        audience_list_id: None,
        snapshot_member_ids: Vec::new(),
        list_version_at_send: None,
        audience_user_ids: Vec::new(),
        share_policy: facet.share_policy.as_wire().to_string(),
        expires_at: facet.expires_at,
        body: facet.body.clone(),
        attachments: facet.attachments.clone(),
        created_at: facet.created_at,
        priority_rank: facet.priority_rank,
    };

    match &facet.audience {
        AudienceSelector::Everyone => {}
        AudienceSelector::Role { role } => {
            rec.audience_kind = KIND_ROLE.to_string();
            rec.audience_role = Some(role.clone());
        }
        AudienceSelector::List { list_id, scope } => {
            rec.audience_kind = KIND_LIST.to_string();
            rec.audience_list_id = Some(list_id.clone());
            if let ListScope::Snapshot {
                members,
                list_version,
            } = scope
            {
                rec.audience_mode = AudienceMode::Snapshot.as_wire().to_string();
                rec.snapshot_member_ids = members.iter().cloned().collect();
                rec.list_version_at_send = Some(*list_version);
            }
        }
        AudienceSelector::Users { mode, ids } => {
            rec.audience_kind = KIND_USERS.to_string();
            rec.audience_mode = mode.as_wire().to_string();
            match mode {
                AudienceMode::Snapshot => {
                    rec.snapshot_member_ids = ids.iter().cloned().collect();
                }
                AudienceMode::Dynamic => {
                    rec.audience_user_ids = ids.iter().cloned().collect();
                }
            }
        }
    }

    rec
}
