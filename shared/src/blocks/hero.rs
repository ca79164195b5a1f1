use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::error::ConfigError;
use crate::validation::validate_color;

/// Static headline section with a call to action
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct HeroConfig {
    #[validate(length(min = 1, max = 160))]
    pub headline: String,
    #[validate(length(max = 400))]
    pub subheadline: String,
    #[validate(length(max = 60))]
    pub cta_label: String,
    #[validate(url)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_url: Option<String>,
    /// CSS color for the section background
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            headline: "Your headline here".to_string(),
            subheadline: "Explain the offer in one sentence.".to_string(),
            cta_label: "Get started".to_string(),
            cta_url: None,
            background: None,
        }
    }
}

impl HeroConfig {
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate()?;
        if let Some(background) = &self.background {
            validate_color(background)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_is_required() {
        let config = HeroConfig { headline: String::new(), ..HeroConfig::default() };
        assert!(matches!(config.check(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_background_must_be_a_color() {
        let mut config = HeroConfig { background: Some("#0f172a".to_string()), ..HeroConfig::default() };
        assert!(config.check().is_ok());
        config.background = Some("red\" onmouseover=\"alert(1)".to_string());
        assert!(matches!(config.check(), Err(ConfigError::InvalidColor(_))));
    }

    #[test]
    fn test_cta_url_must_be_absolute() {
        let config = HeroConfig { cta_url: Some("not a url".to_string()), ..HeroConfig::default() };
        assert!(config.check().is_err());
    }
}
