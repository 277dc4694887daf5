use super::{ask_confirmation, open_tracker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Del { id, force } = cmd else {
        return Ok(());
    };

    let mut tracker = open_tracker(cfg)?;
    let store = tracker.store_mut();
    let shift_id = store.resolve_shift_id(id)?;

    let prompt = format!(
        "Delete shift {}? Its punches stay in the audit log.",
        shift_id
    );
    if !*force && !ask_confirmation(&prompt) {
        info("Operation cancelled.");
        return Ok(());
    }

    if !store.delete_shift(&shift_id)? {
        return Err(AppError::ShiftNotFound(shift_id));
    }

    ttlog_or_warn(store.kv().conn(), "del", &shift_id, "Shift deleted");
    success(format!("Shift {} has been deleted.", shift_id));

    Ok(())
}
