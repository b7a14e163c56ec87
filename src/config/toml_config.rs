use crate::core::calculator::MAX_PRECISION;
use crate::core::{queue, stats};
use crate::utils::error::{ExerciseError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExercisesConfig {
    pub attacker: Option<AttackerConfig>,
    pub queue: Option<QueueConfig>,
    pub stats: Option<StatsConfig>,
    pub calculator: Option<CalculatorConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackerConfig {
    pub charset: Option<String>,
    pub max_length: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    pub capacity: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    pub window: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub max_precision: Option<usize>,
}

impl ExercisesConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ExerciseError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ExerciseError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PJV_CHARSET})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ExerciseError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn charset(&self) -> Option<&str> {
        self.attacker.as_ref()?.charset.as_deref()
    }

    pub fn max_length(&self) -> Option<usize> {
        self.attacker.as_ref()?.max_length
    }

    pub fn queue_capacity(&self) -> usize {
        self.queue
            .as_ref()
            .and_then(|q| q.capacity)
            .unwrap_or(queue::DEFAULT_CAPACITY)
    }

    pub fn stats_window(&self) -> usize {
        self.stats
            .as_ref()
            .and_then(|s| s.window)
            .unwrap_or(stats::DEFAULT_WINDOW)
    }

    pub fn max_precision(&self) -> Option<usize> {
        self.calculator.as_ref()?.max_precision
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(charset) = self.charset() {
            validate_non_empty_string("attacker.charset", charset)?;
        }

        if let Some(max_length) = self.max_length() {
            validate_positive_number("attacker.max_length", max_length, 1)?;
        }

        validate_positive_number("queue.capacity", self.queue_capacity(), 1)?;
        validate_positive_number("stats.window", self.stats_window(), 1)?;

        if let Some(max_precision) = self.max_precision() {
            validate_range(
                "calculator.max_precision",
                max_precision,
                0,
                MAX_PRECISION,
            )?;
        }

        Ok(())
    }
}

impl Validate for ExercisesConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[attacker]
charset = "abc"
max_length = 4

[queue]
capacity = 8

[stats]
window = 20

[calculator]
max_precision = 6
"#;

        let config = ExercisesConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.charset(), Some("abc"));
        assert_eq!(config.max_length(), Some(4));
        assert_eq!(config.queue_capacity(), 8);
        assert_eq!(config.stats_window(), 20);
        assert_eq!(config.max_precision(), Some(6));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ExercisesConfig::from_toml_str("").unwrap();
        assert_eq!(config.queue_capacity(), queue::DEFAULT_CAPACITY);
        assert_eq!(config.stats_window(), stats::DEFAULT_WINDOW);
        assert!(config.charset().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PJV_TEST_CHARSET", "xyz");

        let toml_content = r#"
[attacker]
charset = "${PJV_TEST_CHARSET}"
"#;

        let config = ExercisesConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.charset(), Some("xyz"));

        std::env::remove_var("PJV_TEST_CHARSET");
    }

    #[test]
    fn test_unset_env_var_stays_literal() {
        let toml_content = r#"
[attacker]
charset = "${PJV_SURELY_UNSET_VARIABLE}"
"#;
        let config = ExercisesConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.charset(), Some("${PJV_SURELY_UNSET_VARIABLE}"));
    }

    #[test]
    fn test_config_validation() {
        let zero_capacity = ExercisesConfig::from_toml_str("[queue]\ncapacity = 0\n").unwrap();
        assert!(zero_capacity.validate().is_err());

        let precision = ExercisesConfig::from_toml_str("[calculator]\nmax_precision = 40\n").unwrap();
        assert!(precision.validate().is_err());

        let charset = ExercisesConfig::from_toml_str("[attacker]\ncharset = \"  \"\n").unwrap();
        assert!(charset.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = ExercisesConfig::from_toml_str("[queue\ncapacity = ").unwrap_err();
        assert!(matches!(err, ExerciseError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[stats]\nwindow = 3\n").unwrap();

        let config = ExercisesConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.stats_window(), 3);
    }
}
