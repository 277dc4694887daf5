//! Path helpers for the config file, the database and backup targets.

use std::path::{Path, PathBuf};

/// Expand a leading `~` (alone or followed by a separator) to the home dir.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\"))
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

const ARCHIVE_SUFFIXES: [&str; 3] = [".tar.gz", ".tgz", ".zip"];

/// Give `path` the archive extension `ext`.
/// A known archive suffix is replaced whole, any other extension is dropped:
/// `backup.sqlite` → `backup.tar.gz`, `backup.tar.gz` → `backup.tar.gz`,
/// `backup.zip` + `tar.gz` → `backup.tar.gz`.
pub fn with_archive_extension(path: &Path, ext: &str) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let base = ARCHIVE_SUFFIXES
        .iter()
        .find_map(|suffix| {
            name.strip_suffix(suffix)
                .filter(|rest| !rest.is_empty())
                .map(str::to_string)
        })
        .or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().to_string())
        })
        .unwrap_or_else(|| "backup".to_string());

    path.with_file_name(format!("{base}.{ext}"))
}
