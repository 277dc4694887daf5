use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Cadence of the `status --watch` display refresh.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
    /// chrono format used for wall-clock times in listings.
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_refresh_interval() -> u64 {
    1
}
fn default_time_format() -> String {
    "%H:%M:%S".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            refresh_interval_secs: default_refresh_interval(),
            time_format: default_time_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timeclock")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".timeclock")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timeclock.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timeclock.sqlite")
    }

    /// Path given with `--db`: `~` is expanded and a relative path is taken
    /// from the current directory, for `init` and every other command alike.
    pub fn resolve_database_path(raw: &str) -> PathBuf {
        let path = expand_tilde(raw);
        if path.is_absolute() {
            return path;
        }
        env::current_dir()
            .map(|cwd| cwd.join(&path))
            .unwrap_or(path)
    }

    /// Parse a YAML document; absent fields take their defaults.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Config = serde_yaml::from_str(content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Load configuration from file, or return defaults if not found.
    /// A broken file is reported and replaced by defaults for this run.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path)
            .map_err(Into::into)
            .and_then(|content| Self::from_yaml(&content))
        {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!(
                    "Ignoring configuration file {}: {}",
                    path.display(),
                    e
                ));
                Self::default()
            }
        }
    }

    /// Create the config directory, the config file (unless `is_test`) and an
    /// empty database file. Returns the database path that was set up.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        let db_path = match custom_db {
            Some(name) => Self::resolve_database_path(name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
