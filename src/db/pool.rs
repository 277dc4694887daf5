//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
    /// Migrations applied while opening; empty for an up-to-date database.
    pub migrations: Vec<String>,
}

impl DbPool {
    /// Open the database and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        let migrations = init_db(&conn)?;
        Ok(Self { conn, migrations })
    }
}
