use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::filter;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Use iced debug feature if true.
    pub debug: Option<bool>,
}

pub const DEFAULT_FILE_NAME: &str = "gui.toml";

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_str::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ConfigError {
    InvalidField(&'static str, String),
    NotFound,
    ReadingFile(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Config file not found"),
            Self::InvalidField(field, message) => {
                write!(f, "Config field {} is invalid: {}", field, message)
            }
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(DEFAULT_FILE_NAME);
        std::fs::write(&path, "log_level = \"debug\"\n").unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.log_level, Some("debug".to_string()));
        assert_eq!(loaded.log_level().unwrap(), filter::LevelFilter::DEBUG);
    }

    #[test]
    fn config_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(
            Config::from_file(&tmp.path().join(DEFAULT_FILE_NAME)),
            Err(ConfigError::NotFound)
        );
    }

    #[test]
    fn config_invalid_log_level() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(DEFAULT_FILE_NAME);
        std::fs::write(&path, "log_level = \"warning\"").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::InvalidField("log_level", _))
        ));
    }
}
