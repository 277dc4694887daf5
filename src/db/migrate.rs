use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let exists: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(exists.is_some())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let hit = conn
        .query_row(
            "SELECT 1 FROM log
             WHERE operation = 'migration_applied' AND target = ?1
             LIMIT 1",
            [version],
            |_| Ok(()),
        )
        .optional()?;
    Ok(hit.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Key-value table backing the three persisted records
/// (active session, shifts, punches). One row per key, whole JSON snapshot.
fn migrate_create_kv_table(conn: &Connection, applied: &mut Vec<String>) -> Result<()> {
    let version = "20261018_0001_create_kv";

    if migration_applied(conn, version)? && table_exists(conn, "kv")? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;

    if !migration_applied(conn, version)? {
        mark_applied(conn, version, "Created key-value store table")?;
        applied.push(format!("{} → created 'kv' table", version));
    }

    Ok(())
}

/// Public entry point: run all pending migrations.
/// Returns a description of each migration applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<String>> {
    let mut applied = Vec::new();
    ensure_log_table(conn)?;
    migrate_create_kv_table(conn, &mut applied)?;
    Ok(applied)
}
