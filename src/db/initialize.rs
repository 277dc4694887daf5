use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// All schema creation goes through the migration engine, which is
/// idempotent and runs on every open. Returns the migrations applied now.
pub fn init_db(conn: &Connection) -> AppResult<Vec<String>> {
    Ok(run_pending_migrations(conn)?)
}
