use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::format_duration;
use crate::utils::time::{format_local, now_ms, parse_hhmm, to_hhmm};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Edit {
        id,
        start,
        end,
        comment,
    } = cmd
    else {
        return Ok(());
    };

    // checked before anything else so a bad edit never touches the store
    if comment.trim().is_empty() {
        return Err(AppError::MissingEditComment);
    }

    let mut tracker = open_tracker(cfg)?;
    let store = tracker.store_mut();

    let shift_id = store.resolve_shift_id(id)?;
    let current = store
        .find_shift(&shift_id)
        .ok_or_else(|| AppError::ShiftNotFound(shift_id.clone()))?;

    let start_hhmm = match start {
        Some(s) => s.clone(),
        None => to_hhmm(current.start_at)?,
    };
    let end_hhmm = match end {
        Some(e) => e.clone(),
        None => to_hhmm(current.end_at)?,
    };

    let updated = store.edit_shift(
        &shift_id,
        parse_hhmm(&start_hhmm)?,
        parse_hhmm(&end_hhmm)?,
        comment,
        now_ms(),
    )?;

    let range = format!(
        "{} – {}",
        format_local(updated.start_at, "%Y-%m-%d %H:%M"),
        format_local(updated.end_at, "%Y-%m-%d %H:%M")
    );
    ttlog_or_warn(
        store.kv().conn(),
        "edit",
        &shift_id,
        &format!("{range}: {}", comment.trim()),
    );

    success(format!(
        "✏️ Shift {} updated: {} • {}",
        shift_id,
        range,
        format_duration(updated.duration_seconds() as f64)
    ));

    Ok(())
}
