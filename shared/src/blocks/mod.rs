pub mod countdown;
pub mod hero;
pub mod slot_machine;
pub mod wheel;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use crate::error::ConfigError;

pub use countdown::{CountdownConfig, CountdownParts};
pub use hero::HeroConfig;
pub use slot_machine::SlotMachineConfig;
pub use wheel::WheelConfig;

/// Every block type the builder knows about
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BlockKind {
    SlotMachine,
    WheelOfFortune,
    Countdown,
    Hero,
}

/// Configuration of one block instance, tagged by block type in JSON
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockConfig {
    SlotMachine(SlotMachineConfig),
    WheelOfFortune(WheelConfig),
    Countdown(CountdownConfig),
    Hero(HeroConfig),
}

impl BlockConfig {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockConfig::SlotMachine(_) => BlockKind::SlotMachine,
            BlockConfig::WheelOfFortune(_) => BlockKind::WheelOfFortune,
            BlockConfig::Countdown(_) => BlockKind::Countdown,
            BlockConfig::Hero(_) => BlockKind::Hero,
        }
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        match self {
            BlockConfig::SlotMachine(config) => config.check(),
            BlockConfig::WheelOfFortune(config) => config.check(),
            BlockConfig::Countdown(config) => config.check(),
            BlockConfig::Hero(config) => config.check(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_block_config_is_tagged_by_type() {
        let json = serde_json::to_value(BlockConfig::Hero(HeroConfig::default())).unwrap();
        assert_eq!(json["type"], "hero");
        assert_eq!(json["headline"], "Your headline here");

        let back: BlockConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind(), BlockKind::Hero);
    }

    #[test]
    fn test_kind_names_match_serde_tags() {
        assert_eq!(BlockKind::WheelOfFortune.as_ref(), "wheel_of_fortune");
        assert_eq!(BlockKind::from_str("slot_machine").unwrap(), BlockKind::SlotMachine);
        let tag = serde_json::to_value(BlockConfig::WheelOfFortune(WheelConfig::default())).unwrap();
        assert_eq!(tag["type"], BlockKind::WheelOfFortune.as_ref());
    }

    #[test]
    fn test_unknown_type_fails_to_parse() {
        let result = serde_json::from_str::<BlockConfig>(r#"{"type":"carousel"}"#);
        assert!(result.is_err());
    }
}
