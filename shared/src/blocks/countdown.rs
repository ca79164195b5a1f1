use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::error::ConfigError;

/// Evergreen countdown: counts down `duration_secs` from the moment the page opens.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct CountdownConfig {
    #[validate(length(max = 120))]
    pub headline: String,
    #[validate(range(min = 1, max = 31536000))]
    pub duration_secs: u64,
    #[validate(length(max = 200))]
    pub expired_message: String,
    #[serde(default = "default_show_days")]
    pub show_days: bool,
}

fn default_show_days() -> bool {
    true
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            headline: "Offer ends in".to_string(),
            duration_secs: 15 * 60,
            expired_message: "This offer has expired".to_string(),
            show_days: true,
        }
    }
}

impl CountdownConfig {
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate()?;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub expired: bool,
}

/// Time left `elapsed_ms` after the countdown started. Partial seconds round up so the
/// display reaches 0 exactly when the countdown expires.
pub fn remaining_parts(config: &CountdownConfig, elapsed_ms: u64) -> CountdownParts {
    let total_ms = config.duration_secs.saturating_mul(1000);
    let left_ms = total_ms.saturating_sub(elapsed_ms);
    let left = left_ms.div_ceil(1000);

    let (days, rest) = if config.show_days { (left / 86400, left % 86400) } else { (0, left) };
    CountdownParts {
        days,
        hours: rest / 3600,
        minutes: (rest % 3600) / 60,
        seconds: rest % 60,
        expired: left_ms == 0,
    }
}

/// Script twin of [`remaining_parts`].
pub const COUNTDOWN_JS: &str = r#"function remainingParts(durationSecs, elapsedMs, showDays) {
  var leftMs = Math.max(0, durationSecs * 1000 - elapsedMs);
  var left = Math.ceil(leftMs / 1000);
  var days = showDays ? Math.floor(left / 86400) : 0;
  var rest = showDays ? left % 86400 : left;
  return { days: days, hours: Math.floor(rest / 3600), minutes: Math.floor((rest % 3600) / 60), seconds: rest % 60, expired: leftMs === 0 };
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breaks_down_remaining_time() {
        let config = CountdownConfig { duration_secs: 90061, ..CountdownConfig::default() };
        let parts = remaining_parts(&config, 0);
        assert_eq!((parts.days, parts.hours, parts.minutes, parts.seconds), (1, 1, 1, 1));
        assert!(!parts.expired);
    }

    #[test]
    fn test_partial_seconds_round_up_and_expire_at_zero() {
        let config = CountdownConfig { duration_secs: 10, ..CountdownConfig::default() };
        assert_eq!(remaining_parts(&config, 9_001).seconds, 1);
        let done = remaining_parts(&config, 10_000);
        assert_eq!(done.seconds, 0);
        assert!(done.expired);
        assert!(remaining_parts(&config, 60_000).expired);
    }

    #[test]
    fn test_hours_absorb_days_when_hidden() {
        let config = CountdownConfig { duration_secs: 2 * 86400, show_days: false, ..CountdownConfig::default() };
        let parts = remaining_parts(&config, 0);
        assert_eq!((parts.days, parts.hours), (0, 48));
    }
}
