//! Config CLI command
//!
//! Shows paths and settings, and updates settings when flags are given.

use crate::config::paths::SplitPaths;
use crate::config::settings::{validate_date_format, RemovalPolicy, Settings};
use crate::error::{SplitError, SplitResult};

/// Requested settings changes; every `None` field is left as is
#[derive(Debug, Default)]
pub struct ConfigUpdate {
    pub currency_symbol: Option<String>,
    pub date_format: Option<String>,
    pub removal_policy: Option<String>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.currency_symbol.is_none() && self.date_format.is_none() && self.removal_policy.is_none()
    }

    /// Apply the changes to `settings`
    ///
    /// Every field is checked first; on error `settings` is left untouched.
    pub fn apply(self, settings: &mut Settings) -> SplitResult<()> {
        let removal_policy = match &self.removal_policy {
            Some(policy) => Some(RemovalPolicy::parse(policy).ok_or_else(|| {
                SplitError::Validation(format!(
                    "Invalid removal policy: '{}'. Valid policies: allow, require_settled",
                    policy
                ))
            })?),
            None => None,
        };
        if let Some(format) = &self.date_format {
            validate_date_format(format)?;
        }

        if let Some(policy) = removal_policy {
            settings.removal_policy = policy;
        }
        if let Some(symbol) = self.currency_symbol {
            settings.currency_symbol = symbol;
        }
        if let Some(format) = self.date_format {
            settings.date_format = format;
        }
        Ok(())
    }
}

/// Handle the config command
pub fn handle_config_command(
    paths: &SplitPaths,
    settings: &mut Settings,
    update: ConfigUpdate,
) -> SplitResult<()> {
    if !update.is_empty() {
        update.apply(settings)?;
        settings.save(paths)?;
        tracing::info!("settings updated");
        println!("Settings saved.");
        println!();
    }

    println!("roomsplit Configuration");
    println!("=======================");
    println!("Base directory:    {}", paths.base_dir().display());
    println!("Data directory:    {}", paths.data_dir().display());
    println!("Uploads directory: {}", paths.uploads_dir().display());
    println!("Audit log:         {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Date format:     {}", settings.date_format);
    println!("  Removal policy:  {}", settings.removal_policy);

    Ok(())
}
