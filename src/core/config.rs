// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

pub const DEFAULT_REPORT_FILE_NAME: &str = "UserDetails.txt";

// Configuration for a validation run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Report output
    pub report_file_name: String,
    pub report_directory: PathBuf,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,

    // Problems found while loading, reported once logging is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_file_name: DEFAULT_REPORT_FILE_NAME.to_string(),
            report_directory: PathBuf::from("."),

            log_level: LevelFilter::Info,
            log_file: PathBuf::from("./logs/usercheck.log"),

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Report output
        if let Some(name) = lookup("REPORT_FILE_NAME") {
            if name.trim().is_empty() {
                config.warnings.push("Ignoring empty REPORT_FILE_NAME".to_string());
            } else {
                config.report_file_name = name.trim().to_string();
            }
        }

        if let Some(dir) = lookup("REPORT_DIRECTORY") {
            config.report_directory = PathBuf::from(dir);
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {
                    let warning = format!("Unknown log level '{}', using {}", level, config.log_level);
                    config.warnings.push(warning);
                }
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = PathBuf::from(file);
        }

        config
    }

    /// Where the save prompt points by default.
    pub fn default_report_path(&self) -> PathBuf {
        self.report_directory.join(&self.report_file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.default_report_path(), PathBuf::from("./UserDetails.txt"));
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("REPORT_FILE_NAME", "batch.txt"),
            ("REPORT_DIRECTORY", "/tmp/reports"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_FILE", "/tmp/usercheck.log"),
        ]);
        assert_eq!(config.default_report_path(), PathBuf::from("/tmp/reports/batch.txt"));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, PathBuf::from("/tmp/usercheck.log"));
    }

    #[test]
    fn test_bad_values_are_ignored() {
        let config = config_from(&[("LOG_LEVEL", "loud"), ("REPORT_FILE_NAME", "  ")]);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.report_file_name, DEFAULT_REPORT_FILE_NAME);
        assert_eq!(
            config.warnings,
            ["Ignoring empty REPORT_FILE_NAME", "Unknown log level 'loud', using INFO"]
        );
    }

    #[test]
    fn test_valid_values_leave_no_warnings() {
        let config = config_from(&[("LOG_LEVEL", "warn"), ("REPORT_FILE_NAME", "out.txt")]);
        assert!(config.warnings.is_empty());
    }
}
