use crate::config::EstimatorSettings;
use crate::utils::error::{EstimatorError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: Option<CatalogConfig>,
    pub inquiry: Option<InquiryConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory or http(s) base URL holding the two resources.
    pub location: Option<String>,
    pub breeds: Option<String>,
    pub addons: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InquiryConfig {
    pub recipient: Option<String>,
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
}

impl TomlConfig {
    /// Reads and parses a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EstimatorError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EstimatorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` references from the environment. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EstimatorError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Fills every unset value with the built-in default.
    pub fn into_settings(self) -> EstimatorSettings {
        let defaults = EstimatorSettings::default();
        let catalog = self.catalog.unwrap_or_default();
        let inquiry = self.inquiry.unwrap_or_default();

        EstimatorSettings {
            catalog_location: catalog.location.unwrap_or(defaults.catalog_location),
            breeds_resource: catalog.breeds.unwrap_or(defaults.breeds_resource),
            addons_resource: catalog.addons.unwrap_or(defaults.addons_resource),
            timeout_seconds: catalog.timeout_seconds.unwrap_or(defaults.timeout_seconds),
            recipient: inquiry.recipient.unwrap_or(defaults.recipient),
            subject: inquiry.subject.unwrap_or(defaults.subject),
            output_path: self.output.and_then(|o| o.path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use crate::utils::validation::Validate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[catalog]
location = "https://cdn.example.com/estimator"
breeds = "breeds-2024.json"
addons = "addons-2024.json"
timeout_seconds = 3

[inquiry]
recipient = "desk@example.com"
subject = "Estimate please"

[output]
path = "./inquiries"
"#;

        let settings = TomlConfig::from_toml_str(toml_content)
            .unwrap()
            .into_settings();

        assert_eq!(settings.catalog_location(), "https://cdn.example.com/estimator");
        assert_eq!(settings.breeds_resource(), "breeds-2024.json");
        assert_eq!(settings.addons_resource(), "addons-2024.json");
        assert_eq!(settings.timeout_seconds(), 3);
        assert_eq!(settings.recipient(), "desk@example.com");
        assert_eq!(settings.subject(), "Estimate please");
        assert_eq!(settings.output_path(), Some("./inquiries"));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = TomlConfig::from_toml_str("").unwrap().into_settings();
        assert_eq!(settings.catalog_location(), "./data");
        assert_eq!(settings.recipient(), "reston@mollysdogcare.com");
        assert_eq!(settings.subject(), "Grooming Estimate Request");
        assert_eq!(settings.output_path(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("GROOM_TEST_CATALOG_URL", "https://test.example.com/data");

        let toml_content = r#"
[catalog]
location = "${GROOM_TEST_CATALOG_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.catalog.unwrap().location.as_deref(),
            Some("https://test.example.com/data")
        );

        std::env::remove_var("GROOM_TEST_CATALOG_URL");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[catalog\nlocation = 1").unwrap_err();
        assert!(matches!(err, EstimatorError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[catalog]
location = "https://"

[inquiry]
recipient = "front desk"
"#;

        let settings = TomlConfig::from_toml_str(toml_content)
            .unwrap()
            .into_settings();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[inquiry]\nsubject = \"From file\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.into_settings().subject(), "From file");
    }
}
