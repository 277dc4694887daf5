use super::open_tracker;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::format_duration;
use crate::utils::table::Table;
use crate::utils::time::format_local;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let tracker = open_tracker(cfg)?;
    let store = tracker.store();
    let shifts = store.list_shifts();

    header("Shifts");

    if shifts.is_empty() {
        info("No shifts stored.");
        return Ok(());
    }

    let mut table = Table::new(["ID", "DATE", "START", "END", "BREAK", "WORKED", ""]);
    for s in shifts {
        let manual = store.punches_for(&s.id).any(|p| p.source.is_manual());
        table.add_row(vec![
            s.id.clone(),
            format_local(s.start_at, "%Y-%m-%d"),
            format_local(s.start_at, &cfg.time_format),
            format_local(s.end_at, &cfg.time_format),
            format_duration(s.break_seconds as f64),
            format_duration(s.duration_seconds() as f64),
            if manual { "MANUAL" } else { "" }.to_string(),
        ]);
    }
    print!("{}", table.render());

    Ok(())
}
