//! Runtime configuration.
//!
//! Values are layered: built-in defaults, then a YAML file
//! (`$SPECFLOW_CONFIG`, else `./specflow.yaml` when present), then
//! environment variables. A `.env` file in the working directory is
//! loaded into the environment first.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SpecflowError, SpecflowResult};
use crate::relate::{DEFAULT_LIMIT, DEFAULT_MIN_SCORE, DEFAULT_PARENT_THRESHOLD};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "specflow.yaml";

/// Resolved specflow configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the spec store.
    pub store_root: PathBuf,
    /// Minimum score for a related-spec suggestion.
    pub min_score: f64,
    /// Maximum number of related-spec suggestions.
    pub max_suggestions: usize,
    /// Minimum score for a parent suggestion.
    pub parent_threshold: f64,
    /// Shell command run for each task by `execute`.
    pub executor_command: Option<String>,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_root: PathBuf::from(".specflow"),
            min_score: DEFAULT_MIN_SCORE,
            max_suggestions: DEFAULT_LIMIT,
            parent_threshold: DEFAULT_PARENT_THRESHOLD,
            executor_command: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration from files and the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`SpecflowError::Config`] if a config file cannot be read or
    /// parsed, or a value is out of range.
    pub fn load() -> SpecflowResult<Self> {
        let _ = dotenvy::dotenv();

        let explicit = std::env::var_os("SPECFLOW_CONFIG").map(PathBuf::from);
        let mut config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a YAML config file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SpecflowError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> SpecflowResult<Self> {
        let shown = path.display();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SpecflowError::Config(format!("Failed to read {shown}: {e}")))?;
        let config = Self::from_yaml(&content)
            .map_err(|e| SpecflowError::Config(format!("Failed to parse {shown}: {e}")))?;
        tracing::debug!(path = %shown, "Loaded config file");
        Ok(config)
    }

    fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Applies `SPECFLOW_*` overrides read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`SpecflowError::Config`] if `SPECFLOW_MIN_SCORE` is not a number.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> SpecflowResult<()> {
        if let Some(root) = lookup("SPECFLOW_STORE").filter(|v| !v.is_empty()) {
            self.store_root = PathBuf::from(root);
        }
        if let Some(command) = lookup("SPECFLOW_EXECUTOR").filter(|v| !v.is_empty()) {
            self.executor_command = Some(command);
        }
        if let Some(raw) = lookup("SPECFLOW_MIN_SCORE") {
            self.min_score = raw.trim().parse().map_err(|_| {
                SpecflowError::Config(format!("SPECFLOW_MIN_SCORE is not a number: {raw}"))
            })?;
        }
        if let Some(level) = lookup("SPECFLOW_LOG").filter(|v| !v.is_empty()) {
            self.log_level = level;
        }
        Ok(())
    }

    /// Checks that scores are within `[0, 1]` and the suggestion limit is positive.
    ///
    /// # Errors
    ///
    /// Returns [`SpecflowError::Config`] naming the first bad value.
    pub fn validate(&self) -> SpecflowResult<()> {
        let scores = [("min_score", self.min_score), ("parent_threshold", self.parent_threshold)];
        for (name, value) in scores {
            if !(0.0..=1.0).contains(&value) {
                let message = format!("{name} must be between 0 and 1, got {value}");
                return Err(SpecflowError::Config(message));
            }
        }
        if self.max_suggestions == 0 {
            return Err(SpecflowError::Config("max_suggestions must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_engine_constants() {
        let config = Config::default();
        assert_eq!(config.store_root, PathBuf::from(".specflow"));
        assert!((config.min_score - 0.2).abs() < f64::EPSILON);
        assert!((config.parent_threshold - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.max_suggestions, 10);
        assert_eq!(config.log_level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let yaml = "min_score: 0.35\nexecutor_command: ./run.sh {task_id}\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert!((config.min_score - 0.35).abs() < f64::EPSILON);
        assert_eq!(config.executor_command.as_deref(), Some("./run.sh {task_id}"));
        assert_eq!(config.max_suggestions, 10);
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn reads_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("specflow.yaml");
        std::fs::write(&path, "store_root: /tmp/specs\nmax_suggestions: 3\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.store_root, PathBuf::from("/tmp/specs"));
        assert_eq!(config.max_suggestions, 3);

        std::fs::write(&path, "max_suggestions: [oops").unwrap();
        assert!(matches!(Config::from_file(&path), Err(SpecflowError::Config(_))));
    }

    #[test]
    fn environment_overrides_file_values() {
        let mut config = Config::from_yaml("store_root: from-file\nlog_level: info\n").unwrap();
        config
            .apply_env(env(&[
                ("SPECFLOW_STORE", "/data/specs"),
                ("SPECFLOW_EXECUTOR", "true"),
                ("SPECFLOW_MIN_SCORE", "0.4"),
                ("SPECFLOW_LOG", ""),
            ]))
            .unwrap();

        assert_eq!(config.store_root, PathBuf::from("/data/specs"));
        assert_eq!(config.executor_command.as_deref(), Some("true"));
        assert!((config.min_score - 0.4).abs() < f64::EPSILON);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.apply_env(env(&[("SPECFLOW_MIN_SCORE", "high")])).is_err());

        config.min_score = 1.5;
        let err = config.validate();
        assert!(matches!(err, Err(SpecflowError::Config(msg)) if msg.contains("min_score")));

        let config = Config { max_suggestions: 0, ..Config::default() };
        assert!(config.validate().is_err());
    }
}
