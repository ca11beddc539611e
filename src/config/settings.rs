//! User settings for roomsplit
//!
//! Manages user preferences: currency symbol, timestamp format, and the
//! policy applied when removing a participant who still has a balance.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

use super::paths::SplitPaths;
use crate::error::SplitError;

/// Timestamp format used when none (or an invalid one) is configured
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Check that a strftime format string only contains known specifiers
pub fn validate_date_format(format: &str) -> Result<(), SplitError> {
    if format.trim().is_empty() {
        return Err(SplitError::Validation(
            "Date format cannot be empty".to_string(),
        ));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(SplitError::Validation(format!(
            "Invalid date format: '{}'",
            format
        )));
    }
    Ok(())
}

/// What to do when removing a participant with a non-zero balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Always remove; past expenses keep referencing the name
    #[default]
    Allow,
    /// Refuse removal until the participant's balance is zero
    RequireSettled,
}

impl RemovalPolicy {
    /// Parse a policy name as written in `config.json`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "allow" => Some(Self::Allow),
            "require_settled" => Some(Self::RequireSettled),
            _ => None,
        }
    }
}

impl fmt::Display for RemovalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::RequireSettled => write!(f, "require_settled"),
        }
    }
}

/// User settings for roomsplit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Timestamp format for expense listings and details (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Participant removal policy
    #[serde(default)]
    pub removal_policy: RemovalPolicy,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            removal_policy: RemovalPolicy::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &SplitPaths) -> Result<Self, SplitError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SplitError::Io(format!("Failed to read settings file: {}", e)))?;

            let mut settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SplitError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if let Err(err) = validate_date_format(&settings.date_format) {
                tracing::warn!(error = %err, "ignoring configured date format");
                settings.date_format = default_date_format();
            }

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Render a timestamp with the configured format
    ///
    /// Falls back to [`DEFAULT_DATE_FORMAT`] if the configured format cannot
    /// render it.
    pub fn format_timestamp(&self, timestamp: &DateTime<Utc>) -> String {
        let mut output = String::new();
        if write!(output, "{}", timestamp.format(&self.date_format)).is_err() {
            output.clear();
            let _ = write!(output, "{}", timestamp.format(DEFAULT_DATE_FORMAT));
        }
        output
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SplitPaths) -> Result<(), SplitError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SplitError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SplitError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.date_format, "%Y-%m-%d %H:%M:%S");
        assert_eq!(settings.removal_policy, RemovalPolicy::Allow);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".into(),
            removal_policy: RemovalPolicy::RequireSettled,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.removal_policy, RemovalPolicy::RequireSettled);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "£"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.removal_policy, RemovalPolicy::Allow);
    }

    #[test]
    fn test_policy_serialization() {
        let json = serde_json::to_string(&RemovalPolicy::RequireSettled).unwrap();
        assert_eq!(json, r#""require_settled""#);
        assert_eq!(RemovalPolicy::RequireSettled.to_string(), "require_settled");
    }

    #[test]
    fn test_parse_removal_policy() {
        assert_eq!(RemovalPolicy::parse("allow"), Some(RemovalPolicy::Allow));
        assert_eq!(
            RemovalPolicy::parse("Require-Settled"),
            Some(RemovalPolicy::RequireSettled)
        );
        assert_eq!(RemovalPolicy::parse("never"), None);
    }

    #[test]
    fn test_validate_date_format() {
        assert!(validate_date_format(DEFAULT_DATE_FORMAT).is_ok());
        assert!(validate_date_format("%d/%m/%Y").is_ok());
        assert!(validate_date_format("%Q").unwrap_err().is_validation());
        assert!(validate_date_format("  ").unwrap_err().is_validation());
    }

    #[test]
    fn test_format_timestamp_falls_back() {
        let timestamp = DateTime::parse_from_rfc3339("2024-03-05T14:30:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let settings = Settings {
            date_format: "%d/%m/%Y".into(),
            ..Settings::default()
        };
        assert_eq!(settings.format_timestamp(&timestamp), "05/03/2024");

        let broken = Settings {
            date_format: "%Q".into(),
            ..Settings::default()
        };
        assert_eq!(broken.format_timestamp(&timestamp), "2024-03-05 14:30:00");
    }

    #[test]
    fn test_hand_edited_invalid_format_is_reset() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q %Y"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.date_format, DEFAULT_DATE_FORMAT);
    }
}
