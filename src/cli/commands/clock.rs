//! `in`, `out`, `break-start`, `break-end`.
//! A command that does not apply to the current state changes nothing and
//! still exits successfully.

use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::format_duration;
use crate::utils::time::{format_local, now_ms};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut tracker = open_tracker(cfg)?;
    let now = now_ms();
    let at = format_local(now, &cfg.time_format);

    match cmd {
        Commands::In => match tracker.clock_in(now)? {
            Some(punch) => {
                ttlog_or_warn(
                    tracker.store().kv().conn(),
                    "clock_in",
                    &punch.shift_id,
                    &format!("Clocked in at {at}"),
                );
                success(format!("Clocked in at {} (shift {}).", at, punch.shift_id));
            }
            None => info("Already clocked in: nothing to do."),
        },

        Commands::Out => match tracker.clock_out(now)? {
            Some(shift) => {
                let worked = format_duration(shift.duration_seconds() as f64);
                ttlog_or_warn(
                    tracker.store().kv().conn(),
                    "clock_out",
                    &shift.id,
                    &format!("Clocked out at {at}, worked {worked}"),
                );
                success(format!(
                    "Clocked out at {}. Worked {} (breaks {}).",
                    at,
                    worked,
                    format_duration(shift.break_seconds as f64)
                ));
            }
            None => info("Not clocked in: nothing to do."),
        },

        Commands::BreakStart => match tracker.start_break(now)? {
            Some(punch) => {
                ttlog_or_warn(
                    tracker.store().kv().conn(),
                    "break_start",
                    &punch.shift_id,
                    &format!("Break started at {at}"),
                );
                success(format!("Break started at {at}."));
            }
            None => info("Not clocked in or already on break: nothing to do."),
        },

        Commands::BreakEnd => match tracker.end_break(now)? {
            Some(punch) => {
                let total = tracker.active().map(|s| s.break_seconds).unwrap_or(0);
                ttlog_or_warn(
                    tracker.store().kv().conn(),
                    "break_end",
                    &punch.shift_id,
                    &format!("Break ended at {at}"),
                );
                success(format!(
                    "Break ended at {}. Breaks so far: {}.",
                    at,
                    format_duration(total as f64)
                ));
            }
            None => info("Not on break: nothing to do."),
        },

        _ => {}
    }

    Ok(())
}
