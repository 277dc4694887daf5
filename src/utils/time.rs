//! Time utilities: epoch-millisecond timestamps ⇔ local wall-clock, HH:MM
//! parsing, duration formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Local, LocalResult, NaiveTime, TimeZone};

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * MS_PER_SECOND;

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    Local::now().timestamp_millis()
}

/// Whole seconds between two timestamps, floored.
pub fn floor_seconds_between(from_ms: i64, to_ms: i64) -> i64 {
    (to_ms - from_ms).div_euclid(MS_PER_SECOND)
}

pub fn to_local(ts_ms: i64) -> AppResult<DateTime<Local>> {
    match Local.timestamp_millis_opt(ts_ms) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(AppError::InvalidTime(format!(
            "timestamp out of range: {ts_ms}"
        ))),
    }
}

pub fn is_same_local_day(a_ms: i64, b_ms: i64) -> bool {
    match (to_local(a_ms), to_local(b_ms)) {
        (Ok(a), Ok(b)) => a.year() == b.year() && a.month() == b.month() && a.day() == b.day(),
        _ => false,
    }
}

pub fn parse_hhmm(t: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").map_err(|_| AppError::InvalidTime(t.to_string()))
}

pub fn to_hhmm(ts_ms: i64) -> AppResult<String> {
    Ok(to_local(ts_ms)?.format("%H:%M").to_string())
}

/// Place `time` (seconds and below zeroed) on the local calendar day of
/// `day_ts_ms`. Times skipped by a DST jump are rejected.
pub fn with_time_on_same_day(day_ts_ms: i64, time: NaiveTime) -> AppResult<i64> {
    let day = to_local(day_ts_ms)?.date_naive();
    let naive = day.and_time(time);
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| {
            AppError::InvalidTime(format!("{} does not exist on {}", time.format("%H:%M"), day))
        })
}

/// Format a local timestamp with a chrono pattern (e.g. `%H:%M:%S`).
pub fn format_local(ts_ms: i64, pattern: &str) -> String {
    to_local(ts_ms)
        .map(|dt| dt.format(pattern).to_string())
        .unwrap_or_else(|_| "--:--".to_string())
}

/// `HH:MM:SS`, floored and clamped at zero; hours are not capped at 99.
pub fn format_duration(total_seconds: f64) -> String {
    let s = if total_seconds.is_finite() {
        total_seconds.floor().max(0.0) as u64
    } else {
        0
    };
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}
