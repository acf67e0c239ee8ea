use crate::domain::model::DEFAULT_MAX_MARK;
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub grading: GradingConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    pub max_mark: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub banner: String,
    pub done_keyword: String,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            max_mark: DEFAULT_MAX_MARK,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            banner: "Student Management Application".to_string(),
            done_keyword: "done".to_string(),
        }
    }
}

impl RosterConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| RosterError::ConfigError {
            message: format!("{}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RosterError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn max_mark(&self) -> i32 {
        self.grading.max_mark
    }

    pub fn done_keyword(&self) -> &str {
        &self.session.done_keyword
    }

    pub fn banner(&self) -> &str {
        &self.session.banner
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        validate_range("grading.max_mark", self.grading.max_mark, 1, 1000)?;
        validate_non_empty_string("session.banner", &self.session.banner)?;
        validate_non_empty_string("session.done_keyword", &self.session.done_keyword)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_built_in_behavior() {
        let config = RosterConfig::default();
        assert_eq!(config.max_mark(), 100);
        assert_eq!(config.done_keyword(), "done");
        assert_eq!(config.banner(), "Student Management Application");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = RosterConfig::from_toml_str(
            r#"
[grading]
max_mark = 20
"#,
        )
        .unwrap();

        assert_eq!(config.max_mark(), 20);
        assert_eq!(config.done_keyword(), "done");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(
            RosterConfig::from_toml_str("").unwrap(),
            RosterConfig::default()
        );
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let config = RosterConfig::from_toml_str(
            r#"
[grading]
max_mark = 0
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = RosterConfig::from_toml_str(
            r#"
[session]
done_keyword = "  "
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = RosterConfig::from_toml_str("[grading\nmax_mark = ").unwrap_err();
        assert!(matches!(err, RosterError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
[session]
banner = "Grade Book"
done_keyword = "stop"
"#,
            )
            .unwrap();

        let config = RosterConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.banner(), "Grade Book");
        assert_eq!(config.done_keyword(), "stop");
        assert_eq!(config.max_mark(), 100);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = RosterConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, RosterError::ConfigError { .. }));
    }
}
