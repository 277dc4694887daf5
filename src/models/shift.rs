use crate::utils::time::floor_seconds_between;
use serde::{Deserialize, Serialize};

/// A completed work interval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    pub start_at: i64, // ms since epoch
    pub end_at: i64,
    #[serde(default)]
    pub break_seconds: u64,
}

impl Shift {
    /// Net worked seconds: `max(0, floor((end - start) / 1000) - break)`.
    pub fn duration_seconds(&self) -> u64 {
        let gross = floor_seconds_between(self.start_at, self.end_at);
        let net = gross - i64::try_from(self.break_seconds).unwrap_or(i64::MAX);
        net.max(0) as u64
    }
}
