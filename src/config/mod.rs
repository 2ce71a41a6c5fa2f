use crate::core::attendance::DEFAULT_AT_RISK_THRESHOLD;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate;

pub const DEFAULT_DESCRIPTION_PLACEHOLDER: &str = "No description available.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default = "default_at_risk_threshold")]
    pub at_risk_threshold: u8,
    #[serde(default = "default_description_placeholder")]
    pub description_placeholder: String,
}

fn default_at_risk_threshold() -> u8 {
    DEFAULT_AT_RISK_THRESHOLD
}
fn default_description_placeholder() -> String {
    DEFAULT_DESCRIPTION_PLACEHOLDER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            student_id: None,
            at_risk_threshold: default_at_risk_threshold(),
            description_placeholder: default_description_placeholder(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("coursedesk")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".coursedesk")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("coursedesk.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("coursedesk.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;

        if cfg.at_risk_threshold > 100 {
            return Err(AppError::Config(format!(
                "at_risk_threshold must be between 0 and 100 (got {})",
                cfg.at_risk_threshold
            )));
        }
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Student id from `--student`, falling back to the configured one.
    pub fn active_student(&self, cli_override: Option<&str>) -> AppResult<String> {
        cli_override
            .map(str::to_string)
            .or_else(|| self.student_id.clone())
            .ok_or(AppError::NoActiveStudent)
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, student: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = PathBuf::from(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            student_id: student,
            ..Config::default()
        };

        if !is_test {
            fs::write(Self::config_file(), config.to_yaml()?)?;
            crate::ui::messages::success(format!(
                "Config file: {}",
                Self::config_file().display()
            ));
        }

        Ok(config)
    }
}
