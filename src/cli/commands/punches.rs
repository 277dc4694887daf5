use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Punch;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;
use crate::utils::time::format_local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Punches { shift } = cmd else {
        return Ok(());
    };

    let tracker = open_tracker(cfg)?;
    let store = tracker.store();

    // A deleted shift keeps its punches, so an unknown full id is still a
    // valid filter; only prefixes need resolving.
    let filter = shift.as_ref().map(|s| {
        store
            .resolve_shift_id(s)
            .unwrap_or_else(|_| s.clone())
    });

    let punches: Vec<&Punch> = match &filter {
        Some(id) => store.punches_for(id).collect(),
        None => store.punches().iter().collect(),
    };

    header("Punches");

    if punches.is_empty() {
        info("No punches recorded.");
        return Ok(());
    }

    let mut table = Table::new(["AT", "SHIFT", "TYPE", "SOURCE", "COMMENT"]);
    for p in punches {
        table.add_row(vec![
            format_local(p.at, "%Y-%m-%d %H:%M:%S"),
            p.shift_id.clone(),
            p.kind.as_str().to_string(),
            p.source.as_str().to_string(),
            p.comment.clone().unwrap_or_default(),
        ]);
    }
    print!("{}", table.render());

    Ok(())
}
