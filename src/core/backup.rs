use crate::errors::{AppError, AppResult};
use crate::utils::path::with_archive_extension;
use flate2::Compression as GzLevel;
use flate2::write::GzEncoder;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Zip,
    TarGz,
}

impl Compression {
    /// zip on Windows, tar.gz elsewhere.
    pub fn platform_default() -> Self {
        if cfg!(target_os = "windows") {
            Compression::Zip
        } else {
            Compression::TarGz
        }
    }

    fn extension(&self) -> Option<&'static str> {
        match self {
            Compression::None => None,
            Compression::Zip => Some("zip"),
            Compression::TarGz => Some("tar.gz"),
        }
    }
}

pub struct BackupLogic;

impl BackupLogic {
    /// Path the backup will be written to: `dest` itself for a plain copy,
    /// otherwise `dest` with its archive extension (`backup.sqlite` →
    /// `backup.tar.gz`, `backup.tar.gz` unchanged).
    pub fn target_path(dest: &Path, compression: Compression) -> PathBuf {
        match compression.extension() {
            None => dest.to_path_buf(),
            Some(ext) => with_archive_extension(dest, ext),
        }
    }

    /// Copy the database file to `dest`, optionally compressing it.
    /// The database is read in place; nothing besides the target is written.
    /// Returns the path of the file actually produced.
    pub fn backup(db_path: &Path, dest: &Path, compression: Compression) -> AppResult<PathBuf> {
        if !db_path.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", db_path.display()),
            )));
        }

        let target = Self::target_path(dest, compression);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        if same_file(db_path, &target)? {
            return Err(AppError::BackupOverwritesDatabase(
                target.display().to_string(),
            ));
        }

        match compression {
            Compression::None => {
                fs::copy(db_path, &target)?;
            }
            Compression::Zip => write_zip(db_path, &target)?,
            Compression::TarGz => write_tar_gz(db_path, &target)?,
        }

        Ok(target)
    }
}

/// True when `target` resolves to the same file as `db_path`.
/// `target` may not exist yet; its parent directory does.
fn same_file(db_path: &Path, target: &Path) -> AppResult<bool> {
    let db = fs::canonicalize(db_path)?;
    if target.exists() {
        return Ok(fs::canonicalize(target)? == db);
    }

    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => fs::canonicalize(p)?,
        _ => std::env::current_dir()?,
    };
    Ok(target.file_name().is_some_and(|name| parent.join(name) == db))
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "timeclock.sqlite".to_string())
}

fn write_zip(db_path: &Path, target: &Path) -> AppResult<()> {
    let mut zip = ZipWriter::new(fs::File::create(target)?);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry_name(db_path), options)
        .map_err(std::io::Error::other)?;
    std::io::copy(&mut fs::File::open(db_path)?, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(())
}

fn write_tar_gz(db_path: &Path, target: &Path) -> AppResult<()> {
    let encoder = GzEncoder::new(fs::File::create(target)?, GzLevel::default());

    let mut tar = tar::Builder::new(encoder);
    tar.append_path_with_name(db_path, entry_name(db_path))?;
    tar.into_inner()?.finish()?;

    Ok(())
}
