//! User settings for fintrack
//!
//! Stores report defaults: the title, where report files are written, how
//! transaction timestamps are rendered and which formats are produced.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::FintrackError;
use crate::reports::ReportFormat;
use crate::util::date::{validate_date_format, DEFAULT_DATE_FORMAT};

/// Which report formats the `report` command produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormatSelection {
    Text,
    Csv,
    Json,
    Xlsx,
    /// Text, CSV and JSON
    #[default]
    All,
}

impl FormatSelection {
    pub fn formats(&self) -> Vec<ReportFormat> {
        match self {
            Self::Text => vec![ReportFormat::Text],
            Self::Csv => vec![ReportFormat::Csv],
            Self::Json => vec![ReportFormat::Json],
            Self::Xlsx => vec![ReportFormat::Xlsx],
            Self::All => ReportFormat::WRITABLE.to_vec(),
        }
    }
}

/// User settings for fintrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Title used for generated reports
    #[serde(default = "default_report_title")]
    pub report_title: String,

    /// Directory report files are written to (working directory if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Timestamp format for transaction dates (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default)]
    pub default_format: FormatSelection,
}

fn default_schema_version() -> u32 {
    1
}

fn default_report_title() -> String {
    "Monthly Report".to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            report_title: default_report_title(),
            output_dir: None,
            date_format: default_date_format(),
            default_format: FormatSelection::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FintrackError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FintrackError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            validate_date_format(&settings.date_format)?;

            tracing::debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FintrackError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            FintrackError::Io(format!("Failed to write settings file: {}", e))
        })?;

        tracing::info!(path = %settings_path.display(), "saved settings");
        Ok(())
    }

    /// Directory report files go to
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.report_title, "Monthly Report");
        assert_eq!(settings.date_format, "%Y-%m-%d %H:%M:%S");
        assert_eq!(settings.default_format, FormatSelection::All);
        assert_eq!(settings.output_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_format_selection() {
        assert_eq!(
            FormatSelection::All.formats(),
            vec![ReportFormat::Text, ReportFormat::Csv, ReportFormat::Json]
        );
        assert_eq!(FormatSelection::Xlsx.formats(), vec![ReportFormat::Xlsx]);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.report_title = "Quarterly".into();
        settings.output_dir = Some(temp_dir.path().join("out"));
        settings.default_format = FormatSelection::Json;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.report_title, "Quarterly");
        assert_eq!(loaded.output_dir(), temp_dir.path().join("out"));
        assert_eq!(loaded.default_format, FormatSelection::Json);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"report_title": "Weekly"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.report_title, "Weekly");
        assert_eq!(loaded.date_format, "%Y-%m-%d %H:%M:%S");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FintrackError::Config(_)));
    }

    #[test]
    fn test_unknown_date_specifier_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FintrackError::Config(_)));
        assert!(err.to_string().contains("Invalid date format"));
    }
}
