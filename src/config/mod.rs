pub mod cli;
pub mod toml_config;

use crate::core::inquiry::{DEFAULT_RECIPIENT, DEFAULT_SUBJECT};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

/// Fully resolved settings: file values, then command line overrides, then defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorSettings {
    pub catalog_location: String,
    pub breeds_resource: String,
    pub addons_resource: String,
    pub timeout_seconds: u64,
    pub recipient: String,
    pub subject: String,
    pub output_path: Option<String>,
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        Self {
            catalog_location: "./data".to_string(),
            breeds_resource: "breeds.json".to_string(),
            addons_resource: "addons.json".to_string(),
            timeout_seconds: 10,
            recipient: DEFAULT_RECIPIENT.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
            output_path: None,
        }
    }
}

impl ConfigProvider for EstimatorSettings {
    fn catalog_location(&self) -> &str {
        &self.catalog_location
    }

    fn breeds_resource(&self) -> &str {
        &self.breeds_resource
    }

    fn addons_resource(&self) -> &str {
        &self.addons_resource
    }

    fn recipient(&self) -> &str {
        &self.recipient
    }

    fn subject(&self) -> &str {
        &self.subject
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for EstimatorSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_location("catalog.location", &self.catalog_location)?;
        validation::validate_file_extensions(
            "catalog",
            &[self.breeds_resource.as_str(), self.addons_resource.as_str()],
            &["json"],
        )?;
        validation::validate_positive_number("catalog.timeout_seconds", self.timeout_seconds, 1)?;
        validation::validate_email("inquiry.recipient", &self.recipient)?;
        validation::validate_non_empty_string("inquiry.subject", &self.subject)?;
        if let Some(path) = &self.output_path {
            validation::validate_path("output.path", path)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "groom-estimate")]
#[command(about = "Price a grooming appointment and draft the inquiry email")]
pub struct CliConfig {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Catalog directory or http(s) base URL
    #[arg(long)]
    pub catalog: Option<String>,

    #[arg(long)]
    pub breeds_file: Option<String>,

    #[arg(long)]
    pub addons_file: Option<String>,

    /// HTTP timeout for remote catalogs
    #[arg(long)]
    pub timeout: Option<u64>,

    #[arg(long)]
    pub breed: Option<String>,

    /// Service key: bath_brush, bath_tidy or cut_style
    #[arg(long)]
    pub service: Option<String>,

    /// Add-on name; repeat to select several
    #[arg(long = "addon")]
    pub addons: Vec<String>,

    #[arg(long)]
    pub notes: Option<String>,

    #[arg(long)]
    pub recipient: Option<String>,

    #[arg(long)]
    pub subject: Option<String>,

    /// Also save the drafted inquiry under this directory
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the breed and add-on options and exit
    #[arg(long)]
    pub list: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file if one was given and lays the flags over it.
    pub fn resolve(&self) -> Result<EstimatorSettings> {
        let base = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                TomlConfig::from_file(path)?.into_settings()
            }
            None => EstimatorSettings::default(),
        };
        Ok(self.apply_overrides(base))
    }

    pub fn apply_overrides(&self, mut settings: EstimatorSettings) -> EstimatorSettings {
        if let Some(catalog) = &self.catalog {
            settings.catalog_location = catalog.clone();
        }
        if let Some(breeds) = &self.breeds_file {
            settings.breeds_resource = breeds.clone();
        }
        if let Some(addons) = &self.addons_file {
            settings.addons_resource = addons.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_seconds = timeout;
        }
        if let Some(recipient) = &self.recipient {
            settings.recipient = recipient.clone();
        }
        if let Some(subject) = &self.subject {
            settings.subject = subject.clone();
        }
        if let Some(output) = &self.output {
            settings.output_path = Some(output.clone());
        }
        settings
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = CliConfig::parse_from([
            "groom-estimate",
            "--catalog",
            "https://cdn.example.com/data",
            "--breed",
            "Poodle",
            "--addon",
            "Nail Trim",
            "--addon",
            "Ear Cleaning",
            "--subject",
            "Poodle estimate",
        ]);

        assert_eq!(cli.addons, vec!["Nail Trim", "Ear Cleaning"]);

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.catalog_location, "https://cdn.example.com/data");
        assert_eq!(settings.subject, "Poodle estimate");
        assert_eq!(settings.recipient, DEFAULT_RECIPIENT);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_bad_timeout_fails_validation() {
        let cli = CliConfig::parse_from(["groom-estimate", "--timeout", "0"]);
        let settings = cli.resolve().unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_non_json_catalog_file_fails_validation() {
        let cli = CliConfig::parse_from(["groom-estimate", "--breeds-file", "breeds.csv"]);
        assert!(cli.resolve().unwrap().validate().is_err());
    }
}
