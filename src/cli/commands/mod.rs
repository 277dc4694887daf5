pub mod backup;
pub mod clock;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
pub mod punches;
pub mod status;
pub mod today;

use crate::config::Config;
use crate::core::SessionTracker;
use crate::db::SqliteKv;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Open the configured database and restore the tracker state from it.
pub(crate) fn open_tracker(cfg: &Config) -> AppResult<SessionTracker<SqliteKv>> {
    SessionTracker::load(SqliteKv::open(&cfg.database)?)
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
