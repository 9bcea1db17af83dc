//! User settings for Kakeibo
//!
//! Display preferences and trend window sizes, persisted as JSON next to the
//! data directory. Every field has a serde default so older files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::KakeiboPaths;
use crate::error::KakeiboError;
use crate::metrics::{DAILY_TREND_DAYS, MONTHLY_TREND_MONTHS};
use crate::models::money::DEFAULT_SYMBOL;

/// User settings for Kakeibo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Day buckets shown by the daily trend
    #[serde(default = "default_daily_trend_days")]
    pub daily_trend_days: usize,

    /// Month buckets shown by the monthly trend
    #[serde(default = "default_monthly_trend_months")]
    pub monthly_trend_months: usize,

    /// First day of week (0 = Sunday, 1 = Monday)
    #[serde(default)]
    pub first_day_of_week: u8,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    DEFAULT_SYMBOL.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_daily_trend_days() -> usize {
    DAILY_TREND_DAYS
}

fn default_monthly_trend_months() -> usize {
    MONTHLY_TREND_MONTHS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            daily_trend_days: default_daily_trend_days(),
            monthly_trend_months: default_monthly_trend_months(),
            first_day_of_week: 0,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &KakeiboPaths) -> Result<Self, KakeiboError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| KakeiboError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| KakeiboError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &KakeiboPaths) -> Result<(), KakeiboError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| KakeiboError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| KakeiboError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values the rest of the application can't work with
    pub fn validate(&self) -> Result<(), KakeiboError> {
        if self.daily_trend_days == 0 || self.monthly_trend_months == 0 {
            return Err(KakeiboError::Config(
                "Trend windows must show at least one period".into(),
            ));
        }
        if self.first_day_of_week > 6 {
            return Err(KakeiboError::Config(format!(
                "first_day_of_week must be 0-6, got {}",
                self.first_day_of_week
            )));
        }
        Ok(())
    }
}
