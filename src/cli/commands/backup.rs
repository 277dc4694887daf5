use super::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::{BackupLogic, Compression};
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    else {
        return Ok(());
    };

    let compression = if *compress {
        Compression::platform_default()
    } else {
        Compression::None
    };

    let dest = expand_tilde(file);
    let target = BackupLogic::target_path(&dest, compression);
    if target.exists()
        && !*force
        && !ask_confirmation(&format!(
            "The file '{}' already exists. Overwrite it?",
            target.display()
        ))
    {
        info("Backup cancelled.");
        return Ok(());
    }

    let db_path = Path::new(&cfg.database);
    let produced = BackupLogic::backup(db_path, &dest, compression)?;
    success(format!("Backup created: {}", produced.display()));

    if let Ok(pool) = DbPool::open(&cfg.database) {
        ttlog_or_warn(
            &pool.conn,
            "backup",
            &produced.to_string_lossy(),
            if *compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );
    }

    Ok(())
}
