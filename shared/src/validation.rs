use once_cell::sync::Lazy;
use regex::Regex;
use crate::candidate::{validate_weight, OutcomeCandidate};
use crate::error::ConfigError;

pub const MIN_SLOT_SYMBOLS: usize = 3;
pub const MIN_WHEEL_SEGMENTS: usize = 2;

/// Hex colors, named colors and rgb()/hsl() style functions. Nothing that can close a style attribute.
static CSS_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(#[0-9a-fA-F]{3,8}|[a-zA-Z]{3,20}|(rgb|rgba|hsl|hsla)\([0-9., %]{1,40}\))$").unwrap()
});

pub fn is_css_color(value: &str) -> bool {
    CSS_COLOR.is_match(value)
}

pub fn validate_color(value: &str) -> Result<(), ConfigError> {
    if !is_css_color(value) {
        return Err(ConfigError::InvalidColor(value.to_string()));
    }
    Ok(())
}

/// Checks a candidate list the way the editor does before accepting it.
pub fn validate_candidates(kind: &'static str, candidates: &[OutcomeCandidate], min: usize) -> Result<(), ConfigError> {
    if candidates.len() < min {
        return Err(ConfigError::TooFewCandidates { kind, min });
    }

    for (index, candidate) in candidates.iter().enumerate() {
        if validate_weight(candidate.weight).is_err() {
            return Err(ConfigError::InvalidWeight { index });
        }
        if candidates[..index].iter().any(|earlier| earlier.id == candidate.id) {
            return Err(ConfigError::DuplicateId(candidate.id.clone()));
        }
        if let Some(color) = &candidate.color {
            validate_color(color)?;
        }
    }
    Ok(())
}

pub fn validate_bets(bet_options: &[u64], default_bet: u64) -> Result<(), ConfigError> {
    if bet_options.is_empty() {
        return Err(ConfigError::NoBetOptions);
    }
    if bet_options.contains(&0) {
        return Err(ConfigError::ZeroBet);
    }
    if !bet_options.contains(&default_bet) {
        return Err(ConfigError::UnknownBet(default_bet));
    }
    Ok(())
}

pub fn validate_index(index: usize, len: usize) -> Result<(), ConfigError> {
    if index >= len {
        return Err(ConfigError::IndexOutOfRange { index, len });
    }
    Ok(())
}
