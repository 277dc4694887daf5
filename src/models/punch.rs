use super::punch_type::{PunchSource, PunchType};
use crate::utils::ids::make_id;
use serde::{Deserialize, Serialize};

/// Append-only audit record of a single clock event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Punch {
    pub id: String,
    pub shift_id: String,
    #[serde(rename = "type")]
    pub kind: PunchType,
    pub at: i64,
    pub source: PunchSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Punch {
    /// Punch emitted by the state machine.
    pub fn auto(shift_id: &str, kind: PunchType, at: i64) -> Self {
        Self {
            id: make_id(at),
            shift_id: shift_id.to_string(),
            kind,
            at,
            source: PunchSource::Auto,
            comment: None,
        }
    }

    /// `EDIT` punch recorded for a manual correction.
    pub fn manual_edit(shift_id: &str, at: i64, comment: &str) -> Self {
        Self {
            id: make_id(at),
            shift_id: shift_id.to_string(),
            kind: PunchType::Edit,
            at,
            source: PunchSource::Manual,
            comment: Some(comment.to_string()),
        }
    }

    /// Comment if present and not blank.
    pub fn note(&self) -> Option<&str> {
        self.comment.as_deref().filter(|c| !c.is_empty())
    }
}
