use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// What a candidate pays out when it lands.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum PayoutValue {
    /// Multiplier applied to the current bet (slot symbols)
    Credits(f64),
    /// Symbolic prize text such as "10% OFF" (wheel segments)
    Prize(String),
}

impl PayoutValue {
    /// Numeric value used by payout evaluation. Symbolic prizes pay no credits.
    pub fn credits(&self) -> f64 {
        match self {
            PayoutValue::Credits(value) => *value,
            PayoutValue::Prize(_) => 0.0,
        }
    }

    pub fn display(&self) -> String {
        match self {
            PayoutValue::Credits(value) => format!("x{}", value),
            PayoutValue::Prize(text) => text.clone(),
        }
    }
}

/// One selectable symbol or wheel segment.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct OutcomeCandidate {
    #[validate(length(min = 1, max = 64))]
    pub id: String,
    #[validate(length(max = 120))]
    pub label: String,
    pub payout: PayoutValue,
    #[validate(range(min = 0.0))]
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl OutcomeCandidate {
    pub fn new(id: &str, label: &str, payout: PayoutValue, weight: f64) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            payout,
            weight,
            color: None,
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    /// Same outcome for payout purposes. Labels may repeat, ids may not.
    pub fn same_outcome(&self, other: &OutcomeCandidate) -> bool {
        self.id == other.id
    }
}

/// Weights must be finite and not negative. Zero is allowed and means "practically unreachable".
/// `range` on its own lets NaN and infinity through, so config checks call this as well.
pub fn validate_weight(weight: f64) -> Result<(), ValidationError> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(ValidationError::new("invalid_weight"));
    }
    Ok(())
}

/// Keeps an externally held designated index valid after `removed` was taken out of a list
/// that now has `new_len` entries.
///
/// Removing an entry before the designated one shifts it down so the same entry stays
/// designated. Removing the designated entry itself falls back to `min(old, new_len - 1)`.
pub fn reindex_after_remove(designated: usize, removed: usize, new_len: usize) -> usize {
    let shifted = if removed < designated {
        designated - 1
    } else {
        designated
    };
    clamp_index(shifted, new_len)
}

/// Index after an entry moved from `from` to `to` in a list of unchanged length.
pub fn reindex_after_move(designated: usize, from: usize, to: usize, len: usize) -> usize {
    let moved = if designated == from {
        to
    } else if from < designated && to >= designated {
        designated - 1
    } else if from > designated && to <= designated {
        designated + 1
    } else {
        designated
    };
    clamp_index(moved, len)
}

/// Index after an entry was inserted at `at`.
pub fn reindex_after_insert(designated: usize, at: usize, new_len: usize) -> usize {
    let shifted = if at <= designated && new_len > 1 {
        designated + 1
    } else {
        designated
    };
    clamp_index(shifted, new_len)
}

pub fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.min(len - 1)
    }
}
