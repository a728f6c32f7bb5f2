//! Wire-stable enums for audience evaluation outcomes and share policies.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Whether an audience's membership was frozen at send time or is
/// re-resolved live on every evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudienceMode {
    Dynamic,
    Snapshot,
}

impl AudienceMode {
    pub fn as_wire(self) -> &'static str {
        match self {
            AudienceMode::Dynamic => "DYNAMIC",
            AudienceMode::Snapshot => "SNAPSHOT",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "DYNAMIC" => Some(AudienceMode::Dynamic),
            "SNAPSHOT" => Some(AudienceMode::Snapshot),
            _ => None,
        }
    }
}

/// Per-facet cap on whether its content may ever be re-addressed outside
/// its original audience. `Forbid` is an absolute veto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SharePolicy {
    Allow,
    Redact,
    Forbid,
}

impl SharePolicy {
    pub fn as_wire(self) -> &'static str {
        match self {
            SharePolicy::Allow => "ALLOW",
            SharePolicy::Redact => "REDACT",
            SharePolicy::Forbid => "FORBID",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "ALLOW" => Some(SharePolicy::Allow),
            "REDACT" => Some(SharePolicy::Redact),
            "FORBID" => Some(SharePolicy::Forbid),
            _ => None,
        }
    }
}

/// Tri-state judgment that a target audience cannot see more than an
/// original audience could. `Indeterminate` means a required membership
/// resolution was unavailable; the prover never guesses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubsetProof {
    Yes,
    No,
    Indeterminate,
}

/// Outcome of a forward/quote policy check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ForwardDecision {
    Allow,
    Redact,
    Forbid,
}

/// Reference to an attachment blob. Digests arrive precomputed from the
/// blob store; this crate never hashes anything.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentRef {
    pub id: String,
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub sha256: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}
