use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

/// Environment override for the database path.
pub const DATABASE_ENV: &str = "ATTENDBOOK_DATABASE";

/// Language of the exported sheet labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_storage_key() -> String {
    "attendance_data_v1".to_string()
}
fn default_export_file() -> String {
    "attendance_info.xlsx".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            storage_key: default_storage_key(),
            language: Language::default(),
            export_file: default_export_file(),
        }
    }
}

impl Config {
    /// Keys every complete config file carries.
    pub const KEYS: [&'static str; 4] = ["database", "storage_key", "language", "export_file"];

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("attendbook")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".attendbook")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("attendbook.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("attendbook.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable file is reported and replaced by defaults.
    pub fn load() -> Self {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            match Self::read(&path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!("{e}; using default settings"));
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        cfg.override_database(env::var(DATABASE_ENV).ok());
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg
    }

    /// Take the database path from the environment value, unless it is blank.
    fn override_database(&mut self, value: Option<String>) {
        if let Some(db) = value
            && !db.trim().is_empty()
        {
            self.database = db;
        }
    }

    fn read(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir()).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), self.to_yaml()?).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize configuration and database paths.
    ///
    /// With `is_test` the config file is left alone (the database path
    /// comes from `--db`).
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::load_or_default(is_test)
        };

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }

    fn load_or_default(is_test: bool) -> Self {
        if is_test { Self::default() } else { Self::load() }
    }
}
