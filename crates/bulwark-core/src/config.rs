//! Configuration parsing and validation
//!
//! A boundary works without any configuration. Projects that want to tune
//! it keep the settings in a `bulwark.yaml` file:
//!
//! ```yaml
//! quiet: false
//! capture_location: true
//! report_level: error
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// File name looked up when [`BoundaryConfig::load`] is given a directory
pub const CONFIG_FILE_NAME: &str = "bulwark.yaml";

/// Boundary configuration from `bulwark.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoundaryConfig {
    /// Suppress the panic report normally printed to stderr for panics
    /// that a boundary intercepts
    #[serde(default = "default_true")]
    pub quiet: bool,

    /// Record where the intercepted panic was raised
    #[serde(default = "default_true")]
    pub capture_location: bool,

    /// Level of the tracing event emitted for each intercepted panic
    #[serde(default)]
    pub report_level: ReportLevel,
}

fn default_true() -> bool {
    true
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            quiet: default_true(),
            capture_location: default_true(),
            report_level: ReportLevel::default(),
        }
    }
}

/// Tracing level used to report intercepted panics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportLevel {
    /// Do not emit an event
    Off,
    /// `ERROR`
    Error,
    /// `WARN`
    #[default]
    Warn,
    /// `INFO`
    Info,
    /// `DEBUG`
    Debug,
}

impl BoundaryConfig {
    /// Load configuration from a directory or file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a directory containing `bulwark.yaml`, or to the file itself
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let config = BoundaryConfig::load("./my-project")?;
    /// let boundary = ExceptionBoundary::with_config(config);
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE_NAME)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            return Err(Error::ConfigNotFound {
                path: config_path.display().to_string(),
            });
        }

        tracing::debug!("Loading boundary configuration from {}", config_path.display());
        let contents = std::fs::read_to_string(&config_path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parse configuration from YAML text
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let doc: serde_yaml::Value = serde_yaml::from_str(contents)?;
        match doc {
            serde_yaml::Value::Null => Ok(Self::default()),
            serde_yaml::Value::Mapping(_) => Ok(serde_yaml::from_value(doc)?),
            other => Err(Error::ConfigInvalid {
                message: format!("expected a mapping at the top level, found {}", kind(&other)),
            }),
        }
    }

    /// Set quiet mode
    #[must_use]
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Enable or disable location capture
    #[must_use]
    pub fn with_capture_location(mut self, capture: bool) -> Self {
        self.capture_location = capture;
        self
    }

    /// Set the report level
    #[must_use]
    pub fn with_report_level(mut self, level: ReportLevel) -> Self {
        self.report_level = level;
        self
    }
}

fn kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoundaryConfig::default();
        assert!(config.quiet);
        assert!(config.capture_location);
        assert_eq!(config.report_level, ReportLevel::Warn);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = BoundaryConfig::from_yaml_str("").unwrap();
        assert_eq!(config, BoundaryConfig::default());
    }

    #[test]
    fn test_parse_partial_config() {
        let yaml = r#"
report_level: error
"#;
        let config = BoundaryConfig::from_yaml_str(yaml).unwrap();
        assert!(config.quiet);
        assert_eq!(config.report_level, ReportLevel::Error);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
quiet: false
capture_location: false
report_level: off
"#;
        let config = BoundaryConfig::from_yaml_str(yaml).unwrap();
        assert!(!config.quiet);
        assert!(!config.capture_location);
        assert_eq!(config.report_level, ReportLevel::Off);
    }

    #[test]
    fn test_unknown_report_level_is_parse_error() {
        let result = BoundaryConfig::from_yaml_str("report_level: loud\n");
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn test_non_mapping_is_invalid() {
        let result = BoundaryConfig::from_yaml_str("- quiet\n- loud\n");
        match result {
            Err(Error::ConfigInvalid { message }) => assert!(message.contains("a sequence")),
            other => panic!("Expected ConfigInvalid, got {:?}", other),
        }
    }

    #[test]
    fn test_builder_setters() {
        let config = BoundaryConfig::default()
            .with_quiet(false)
            .with_capture_location(false)
            .with_report_level(ReportLevel::Debug);
        assert!(!config.quiet);
        assert!(!config.capture_location);
        assert_eq!(config.report_level, ReportLevel::Debug);
    }
}
