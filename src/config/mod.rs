use crate::db::{DEFAULT_DB_NAME, DEFAULT_SCRIPT_NAME};
use crate::errors::{AppError, AppResult};
use crate::output::OutputFormat;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the configuration directory (tests, portable installs).
pub const CONFIG_DIR_ENV: &str = "RCATALOG_CONFIG_DIR";

const CONFIG_FIELDS: [&str; 3] = ["database", "schema_script", "output_format"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_schema_script")]
    pub schema_script: String,
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_schema_script() -> String {
    DEFAULT_SCRIPT_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            schema_script: default_schema_script(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Return the configuration directory: `$RCATALOG_CONFIG_DIR` if set,
    /// otherwise `~/.rcatalog`.
    pub fn config_dir() -> PathBuf {
        if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return PathBuf::from(dir);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rcatalog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rcatalog.conf")
    }

    /// Return the full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DEFAULT_DB_NAME)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        // An empty file deserializes to unit, not to a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// Build the configuration for `init`, write it unless `is_test`,
    /// and make sure the database directory exists.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // A relative --db means the same file here as in every other command:
        // relative to the working directory. Stored absolute.
        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() {
                    p
                } else {
                    env::current_dir()?.join(p)
                }
            }
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }

    /// Fields absent from the YAML text (they fall back to defaults).
    pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
        let yaml: serde_yaml::Value = if content.trim().is_empty() {
            serde_yaml::Value::Mapping(Default::default())
        } else {
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?
        };

        let map = yaml
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration is not a YAML mapping".into()))?;

        Ok(CONFIG_FIELDS
            .into_iter()
            .filter(|f| !map.contains_key(*f))
            .collect())
    }
}
