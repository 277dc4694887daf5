use super::open_tracker;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::DaySummary;
use crate::ui::messages::{header, info};
use crate::utils::format_duration;
use crate::utils::table::Table;
use crate::utils::time::{format_local, now_ms};

const NOTE_WIDTH: usize = 60;

pub fn render(summary: &DaySummary, time_format: &str) -> String {
    let mut table = Table::new(["ID", "START", "END", "BREAK", "WORKED", ""]);

    for entry in &summary.entries {
        let s = &entry.shift;
        table.add_row(vec![
            s.id.clone(),
            format_local(s.start_at, time_format),
            format_local(s.end_at, time_format),
            format_duration(s.break_seconds as f64),
            format_duration(entry.duration_seconds as f64),
            if entry.has_manual { "MANUAL" } else { "" }.to_string(),
        ]);
    }

    let mut out = table.render();

    let notes: Vec<_> = summary
        .entries
        .iter()
        .filter_map(|e| e.edit_note.as_deref().map(|n| (&e.shift.id, n)))
        .collect();
    if !notes.is_empty() {
        out.push('\n');
        for (id, note) in notes {
            out.push_str(&format!("📝 {id}:\n"));
            for line in textwrap::wrap(note, NOTE_WIDTH) {
                out.push_str(&format!("   {line}\n"));
            }
        }
    }

    out
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let tracker = open_tracker(cfg)?;
    let now = now_ms();
    let summary = tracker.store().today(now);

    header("Today");

    if summary.is_empty() {
        info("No shifts yet.");
    } else {
        print!("{}", render(&summary, &cfg.time_format));
    }

    println!("\nTotal: {}", format_duration(summary.total_seconds as f64));

    if tracker.active().is_some() {
        println!(
            "Running session: {} (not included until clock-out)",
            format_duration(tracker.elapsed_seconds(now))
        );
    }

    Ok(())
}
