use super::shift::Shift;
use crate::utils::time::{MS_PER_SECOND, floor_seconds_between};
use serde::{Deserialize, Serialize};

/// The in-progress work interval. At most one exists at a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSession {
    pub shift_id: String,
    pub start_at: i64,
    /// Completed breaks only; a running break is added on close.
    pub break_seconds: u64,
    pub break_started_at: Option<i64>,
}

impl ActiveSession {
    pub fn new(shift_id: String, start_at: i64) -> Self {
        Self {
            shift_id,
            start_at,
            break_seconds: 0,
            break_started_at: None,
        }
    }

    pub fn is_on_break(&self) -> bool {
        self.break_started_at.is_some()
    }

    /// `break_started_at`, when set, never precedes `start_at`.
    pub fn is_consistent(&self) -> bool {
        self.break_started_at.is_none_or(|b| b >= self.start_at)
    }

    /// Fold the running break (if any) into `break_seconds`.
    /// Returns false when no break was running.
    pub fn close_break(&mut self, now: i64) -> bool {
        match self.break_started_at.take() {
            Some(started) => {
                let extra = floor_seconds_between(started, now).max(0) as u64;
                self.break_seconds += extra;
                true
            }
            None => false,
        }
    }

    /// Fractional net seconds worked so far.
    pub fn elapsed_seconds(&self, now: i64) -> f64 {
        let ms = MS_PER_SECOND as f64;
        let base = (now - self.start_at) as f64 / ms;
        let running_break = self
            .break_started_at
            .map(|b| (now - b) as f64 / ms)
            .unwrap_or(0.0);
        base - self.break_seconds as f64 - running_break
    }

    pub fn into_shift(self, end_at: i64) -> Shift {
        Shift {
            id: self.shift_id,
            start_at: self.start_at,
            end_at,
            break_seconds: self.break_seconds,
        }
    }
}
