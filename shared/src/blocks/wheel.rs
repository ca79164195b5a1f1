use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::candidate::{
    clamp_index, reindex_after_insert, reindex_after_move, reindex_after_remove, OutcomeCandidate, PayoutValue,
};
use crate::error::ConfigError;
use crate::reveal::DEFAULT_FULL_SPINS;
use crate::validation::{validate_candidates, validate_index, MIN_WHEEL_SEGMENTS};

/// Configuration of a wheel of fortune block.
///
/// The landing segment is always `winning_index`; the spin only looks random.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct WheelConfig {
    #[validate(length(max = 120))]
    pub title: String,
    #[validate]
    pub segments: Vec<OutcomeCandidate>,
    pub winning_index: usize,
    #[validate(range(min = 1, max = 50))]
    pub full_spins: u32,
    #[validate(range(min = 500, max = 20000))]
    pub spin_duration_ms: u32,
    /// Spins a visitor gets, 0 means unlimited
    #[serde(default)]
    pub spins_allowed: u32,
    #[validate(url)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_url: Option<String>,
    #[validate(length(max = 60))]
    pub claim_label: String,
}

const SEGMENT_PALETTE: [&str; 8] = [
    "#f97316", "#06b6d4", "#8b5cf6", "#ec4899", "#22c55e", "#eab308", "#3b82f6", "#ef4444",
];

impl Default for WheelConfig {
    fn default() -> Self {
        let prizes = [
            "10% OFF", "Free shipping", "5% OFF", "Mystery gift", "15% OFF", "Try again", "20% OFF", "Free sample",
        ];
        let segments = prizes
            .iter()
            .enumerate()
            .map(|(i, prize)| {
                OutcomeCandidate::new(&format!("segment-{}", i + 1), prize, PayoutValue::Prize(prize.to_string()), 1.0)
                    .with_color(SEGMENT_PALETTE[i % SEGMENT_PALETTE.len()])
            })
            .collect();

        Self {
            title: "Spin the wheel".to_string(),
            segments,
            winning_index: 0,
            full_spins: DEFAULT_FULL_SPINS,
            spin_duration_ms: 4000,
            spins_allowed: 1,
            claim_url: None,
            claim_label: "Claim now".to_string(),
        }
    }
}

impl WheelConfig {
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate()?;
        validate_candidates("wheel segments", &self.segments, MIN_WHEEL_SEGMENTS)?;
        validate_index(self.winning_index, self.segments.len())?;
        Ok(())
    }

    /// Fill color for segment `index`, falling back to the palette.
    pub fn segment_color(&self, index: usize) -> &str {
        self.segments
            .get(index)
            .and_then(|s| s.color.as_deref())
            .unwrap_or(SEGMENT_PALETTE[index % SEGMENT_PALETTE.len()])
    }

    pub fn winning_segment(&self) -> Option<&OutcomeCandidate> {
        self.segments.get(self.winning_index)
    }

    pub fn set_winning_index(&mut self, index: usize) -> Result<(), ConfigError> {
        validate_index(index, self.segments.len())?;
        self.winning_index = index;
        Ok(())
    }

    pub fn insert_segment(&mut self, at: usize, segment: OutcomeCandidate) -> Result<(), ConfigError> {
        if self.segments.iter().any(|s| s.id == segment.id) {
            return Err(ConfigError::DuplicateId(segment.id));
        }
        let at = at.min(self.segments.len());
        self.segments.insert(at, segment);
        self.winning_index = reindex_after_insert(self.winning_index, at, self.segments.len());
        Ok(())
    }

    /// Removes a segment and re-checks the winning index against the shorter list.
    pub fn remove_segment(&mut self, index: usize) -> Result<OutcomeCandidate, ConfigError> {
        validate_index(index, self.segments.len())?;
        if self.segments.len() <= MIN_WHEEL_SEGMENTS {
            return Err(ConfigError::TooFewCandidates { kind: "wheel segments", min: MIN_WHEEL_SEGMENTS });
        }
        let removed = self.segments.remove(index);
        let before = self.winning_index;
        self.winning_index = reindex_after_remove(self.winning_index, index, self.segments.len());
        if before != self.winning_index {
            log::debug!("winning index moved from {} to {} after removing segment {}", before, self.winning_index, index);
        }
        Ok(removed)
    }

    pub fn move_segment(&mut self, from: usize, to: usize) -> Result<(), ConfigError> {
        validate_index(from, self.segments.len())?;
        validate_index(to, self.segments.len())?;
        let segment = self.segments.remove(from);
        self.segments.insert(to, segment);
        self.winning_index = reindex_after_move(self.winning_index, from, to, self.segments.len());
        Ok(())
    }

    /// Clamps a winning index that arrived out of range, e.g. from stored JSON.
    pub fn revalidate(&mut self) {
        self.winning_index = clamp_index(self.winning_index, self.segments.len());
    }
}
