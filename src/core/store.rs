//! Shift store: the completed-shift collection and the punch audit log,
//! persisted as whole JSON snapshots in a key-value substrate.

use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::{ActiveSession, DaySummary, Punch, Shift};
use crate::utils::time::{MS_PER_DAY, with_time_on_same_day};
use chrono::NaiveTime;
use serde::de::DeserializeOwned;

pub const ACTIVE_SESSION_KEY: &str = "timeclock.activeSession.v1";
pub const SHIFTS_KEY: &str = "timeclock.shifts.v1";
pub const PUNCHES_KEY: &str = "timeclock.punches.v1";

/// Decode a stored value; absent or malformed data yields `None`.
fn decode<T: DeserializeOwned>(raw: Option<String>) -> Option<T> {
    raw.and_then(|s| serde_json::from_str(&s).ok())
}

pub struct ShiftStore<S> {
    kv: S,
    shifts: Vec<Shift>, // most recent first
    punches: Vec<Punch>, // most recent first
}

impl<S: KeyValueStore> ShiftStore<S> {
    /// Load both collections. Missing or corrupt snapshots start empty.
    pub fn load(kv: S) -> AppResult<Self> {
        let shifts = decode(kv.get(SHIFTS_KEY)?).unwrap_or_default();
        let punches = decode(kv.get(PUNCHES_KEY)?).unwrap_or_default();
        Ok(Self { kv, shifts, punches })
    }

    /// Stored in-progress session, if any and well-formed.
    pub fn load_active_session(&self) -> AppResult<Option<ActiveSession>> {
        let session: Option<ActiveSession> = decode(self.kv.get(ACTIVE_SESSION_KEY)?);
        Ok(session.filter(ActiveSession::is_consistent))
    }

    pub fn save_active_session(&mut self, session: Option<&ActiveSession>) -> AppResult<()> {
        match session {
            Some(s) => self.kv.set(ACTIVE_SESSION_KEY, &serde_json::to_string(s)?),
            None => self.kv.delete(ACTIVE_SESSION_KEY),
        }
    }

    // The in-memory collections change only after the snapshot is written.
    fn commit_shifts(&mut self, shifts: Vec<Shift>) -> AppResult<()> {
        self.kv.set(SHIFTS_KEY, &serde_json::to_string(&shifts)?)?;
        self.shifts = shifts;
        Ok(())
    }

    fn commit_punches(&mut self, punches: Vec<Punch>) -> AppResult<()> {
        self.kv.set(PUNCHES_KEY, &serde_json::to_string(&punches)?)?;
        self.punches = punches;
        Ok(())
    }

    pub fn list_shifts(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn find_shift(&self, id: &str) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.id == id)
    }

    /// Resolve a full id or an unambiguous id prefix to a stored shift id.
    pub fn resolve_shift_id(&self, id_or_prefix: &str) -> AppResult<String> {
        if self.find_shift(id_or_prefix).is_some() {
            return Ok(id_or_prefix.to_string());
        }

        let mut matches = self
            .shifts
            .iter()
            .filter(|s| !id_or_prefix.is_empty() && s.id.starts_with(id_or_prefix));

        match (matches.next(), matches.next()) {
            (Some(s), None) => Ok(s.id.clone()),
            (Some(_), Some(_)) => Err(AppError::ShiftNotFound(format!(
                "{id_or_prefix} (ambiguous prefix)"
            ))),
            _ => Err(AppError::ShiftNotFound(id_or_prefix.to_string())),
        }
    }

    /// Replace the shift with the same id in place, or prepend a new one.
    pub fn upsert_shift(&mut self, shift: Shift) -> AppResult<()> {
        let mut shifts = self.shifts.clone();
        match shifts.iter_mut().find(|s| s.id == shift.id) {
            Some(existing) => *existing = shift,
            None => shifts.insert(0, shift),
        }
        self.commit_shifts(shifts)
    }

    /// Remove a shift. Its punches stay in the audit log.
    /// Returns false when no shift had that id.
    pub fn delete_shift(&mut self, id: &str) -> AppResult<bool> {
        if self.find_shift(id).is_none() {
            return Ok(false);
        }
        let shifts = self.shifts.iter().filter(|s| s.id != id).cloned().collect();
        self.commit_shifts(shifts)?;
        Ok(true)
    }

    pub fn append_punch(&mut self, punch: Punch) -> AppResult<()> {
        let mut punches = Vec::with_capacity(self.punches.len() + 1);
        punches.push(punch);
        punches.extend(self.punches.iter().cloned());
        self.commit_punches(punches)
    }

    pub fn punches(&self) -> &[Punch] {
        &self.punches
    }

    pub fn punches_for<'a>(&'a self, shift_id: &'a str) -> impl Iterator<Item = &'a Punch> + 'a {
        self.punches.iter().filter(move |p| p.shift_id == shift_id)
    }

    /// Manual correction of a shift's wall-clock start and end.
    ///
    /// Both times are placed on the local calendar day the shift started on;
    /// an end earlier than the start is moved to the next day. Break time is
    /// left as is. A non-blank comment is mandatory and is recorded with a
    /// `MANUAL` `EDIT` punch.
    pub fn edit_shift(
        &mut self,
        id: &str,
        new_start: NaiveTime,
        new_end: NaiveTime,
        comment: &str,
        now: i64,
    ) -> AppResult<Shift> {
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(AppError::MissingEditComment);
        }

        let day_ts = self
            .find_shift(id)
            .ok_or_else(|| AppError::ShiftNotFound(id.to_string()))?
            .start_at;

        let start_at = with_time_on_same_day(day_ts, new_start)?;
        let mut end_at = with_time_on_same_day(day_ts, new_end)?;
        if end_at < start_at {
            end_at += MS_PER_DAY;
        }

        let mut updated = self
            .find_shift(id)
            .cloned()
            .ok_or_else(|| AppError::ShiftNotFound(id.to_string()))?;
        updated.start_at = start_at;
        updated.end_at = end_at;

        self.upsert_shift(updated.clone())?;
        self.append_punch(Punch::manual_edit(id, now, comment))?;

        Ok(updated)
    }

    /// Shifts started on the same local day as `now`.
    pub fn today(&self, now: i64) -> DaySummary {
        super::today::today_summary(&self.shifts, &self.punches, now)
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    pub fn into_kv(self) -> S {
        self.kv
    }
}
