//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! Invalid state-machine calls (clock-out while idle, double break start...)
//! are not errors: they are ignored by the tracker and never reach this type.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Validation / logic errors
    // ---------------------------
    #[error("Please add a comment for manual edits.")]
    MissingEditComment,

    #[error("Shift not found: {0}")]
    ShiftNotFound(String),

    #[error("Refusing to back up the database onto itself: {0}")]
    BackupOverwritesDatabase(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
