use crate::models::{DayEntry, DaySummary, Punch, Shift};
use crate::utils::time::is_same_local_day;

/// Aggregate the shifts that started on the local calendar day of `now`.
///
/// `punches` must be most-recent-first (store order): the edit note is the
/// first commented `EDIT` punch found for each shift.
pub fn today_summary(shifts: &[Shift], punches: &[Punch], now: i64) -> DaySummary {
    let entries: Vec<DayEntry> = shifts
        .iter()
        .filter(|s| is_same_local_day(s.start_at, now))
        .map(|s| {
            let mut own = punches.iter().filter(|p| p.shift_id == s.id);
            let has_manual = own.clone().any(|p| p.source.is_manual());
            let edit_note = own
                .find(|p| p.kind.is_edit() && p.note().is_some())
                .and_then(|p| p.note().map(str::to_string));

            DayEntry {
                shift: s.clone(),
                duration_seconds: s.duration_seconds(),
                has_manual,
                edit_note,
            }
        })
        .collect();

    let total_seconds = entries.iter().map(|e| e.duration_seconds).sum();

    DaySummary {
        entries,
        total_seconds,
    }
}
