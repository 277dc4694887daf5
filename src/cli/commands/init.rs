use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped with `--test`)
///  - the SQLite database with all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing timeclock…");
    println!("🗄️  Database   : {}", db);

    let pool = DbPool::open(&db)?;
    for migration in &pool.migrations {
        success(format!("Migration applied: {}", migration));
    }
    ttlog_or_warn(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db),
    );

    println!("🎉 timeclock initialization completed!");
    Ok(())
}
