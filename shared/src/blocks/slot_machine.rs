use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::candidate::{OutcomeCandidate, PayoutValue};
use crate::error::ConfigError;
use crate::reveal::DEFAULT_REEL_STAGGER_MS;
use crate::validation::{validate_bets, validate_candidates, validate_index, MIN_SLOT_SYMBOLS};

/// Configuration of a slot machine block
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct SlotMachineConfig {
    #[validate(length(max = 120))]
    pub title: String,
    #[validate]
    pub symbols: Vec<OutcomeCandidate>,
    #[validate(range(min = 1, max = 6))]
    pub reel_count: usize,
    pub bet_options: Vec<u64>,
    pub default_bet: u64,
    pub starting_balance: u64,
    #[validate(range(min = 100, max = 20000))]
    pub spin_duration_ms: u32,
    #[validate(range(max = 2000))]
    pub stagger_ms: u32,
    /// Percentage (0-100) of rounds forced into a jackpot
    #[validate(range(min = 0.0, max = 100.0))]
    pub win_chance: f64,
    /// Round counts offered by the auto-spin toggle
    #[serde(default)]
    pub auto_spin_counts: Vec<u32>,
    #[validate(url)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_url: Option<String>,
    #[validate(length(max = 60))]
    pub claim_label: String,
    #[validate(length(max = 200))]
    pub win_message: String,
}

impl Default for SlotMachineConfig {
    fn default() -> Self {
        Self {
            title: "Spin to win".to_string(),
            symbols: vec![
                OutcomeCandidate::new("cherry", "🍒", PayoutValue::Credits(5.0), 30.0),
                OutcomeCandidate::new("lemon", "🍋", PayoutValue::Credits(8.0), 25.0),
                OutcomeCandidate::new("bell", "🔔", PayoutValue::Credits(15.0), 20.0),
                OutcomeCandidate::new("star", "⭐", PayoutValue::Credits(25.0), 15.0),
                OutcomeCandidate::new("diamond", "💎", PayoutValue::Credits(50.0), 7.0),
                OutcomeCandidate::new("seven", "7️⃣", PayoutValue::Credits(100.0), 3.0),
            ],
            reel_count: 3,
            bet_options: vec![1, 5, 10, 25],
            default_bet: 10,
            starting_balance: 1000,
            spin_duration_ms: 2000,
            stagger_ms: DEFAULT_REEL_STAGGER_MS,
            win_chance: 20.0,
            auto_spin_counts: vec![10, 25, 50],
            claim_url: None,
            claim_label: "Claim your prize".to_string(),
            win_message: "Jackpot!".to_string(),
        }
    }
}

impl SlotMachineConfig {
    /// Structural checks plus the list rules the editor enforces.
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate()?;
        validate_candidates("slot symbols", &self.symbols, MIN_SLOT_SYMBOLS)?;
        validate_bets(&self.bet_options, self.default_bet)?;
        Ok(())
    }

    pub fn add_symbol(&mut self, symbol: OutcomeCandidate) -> Result<(), ConfigError> {
        if self.symbols.iter().any(|s| s.id == symbol.id) {
            return Err(ConfigError::DuplicateId(symbol.id));
        }
        self.symbols.push(symbol);
        Ok(())
    }

    /// Removes a symbol unless that would leave fewer than the minimum.
    pub fn remove_symbol(&mut self, index: usize) -> Result<OutcomeCandidate, ConfigError> {
        validate_index(index, self.symbols.len())?;
        if self.symbols.len() <= MIN_SLOT_SYMBOLS {
            return Err(ConfigError::TooFewCandidates { kind: "slot symbols", min: MIN_SLOT_SYMBOLS });
        }
        Ok(self.symbols.remove(index))
    }

    /// Removes a bet option, moving the default bet to a remaining option if it was the one removed.
    pub fn remove_bet_option(&mut self, bet: u64) -> Result<(), ConfigError> {
        let position = self
            .bet_options
            .iter()
            .position(|b| *b == bet)
            .ok_or(ConfigError::UnknownBet(bet))?;
        if self.bet_options.len() == 1 {
            return Err(ConfigError::NoBetOptions);
        }
        self.bet_options.remove(position);
        if self.default_bet == bet {
            let replacement = position.min(self.bet_options.len() - 1);
            self.default_bet = self.bet_options[replacement];
        }
        Ok(())
    }

    pub fn allows_bet(&self, bet: u64) -> bool {
        self.bet_options.contains(&bet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SlotMachineConfig::default().check().is_ok());
    }

    #[test]
    fn test_cannot_shrink_below_minimum() {
        let mut config = SlotMachineConfig::default();
        while config.symbols.len() > MIN_SLOT_SYMBOLS {
            config.remove_symbol(0).unwrap();
        }
        assert!(matches!(config.remove_symbol(0), Err(ConfigError::TooFewCandidates { .. })));
        assert_eq!(config.symbols.len(), MIN_SLOT_SYMBOLS);
    }

    #[test]
    fn test_removing_default_bet_reassigns_it() {
        let mut config = SlotMachineConfig::default();
        config.remove_bet_option(10).unwrap();
        assert_eq!(config.bet_options, vec![1, 5, 25]);
        assert_eq!(config.default_bet, 25);
        assert!(config.check().is_ok());

        config.remove_bet_option(25).unwrap();
        assert_eq!(config.default_bet, 5);
    }

    #[test]
    fn test_bad_claim_url_fails_structural_validation() {
        let config = SlotMachineConfig {
            claim_url: Some("not a url".to_string()),
            ..SlotMachineConfig::default()
        };
        assert!(matches!(config.check(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_win_chance_out_of_range() {
        let config = SlotMachineConfig { win_chance: 140.0, ..SlotMachineConfig::default() };
        assert!(config.check().is_err());
    }
}
