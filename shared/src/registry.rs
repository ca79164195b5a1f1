use std::str::FromStr;
use serde::Serialize;
use crate::blocks::{BlockConfig, BlockKind, CountdownConfig, HeroConfig, SlotMachineConfig, WheelConfig};
use crate::error::ConfigError;
use crate::render::{self, StaticRender};

pub struct BlockDefinition {
    pub kind: BlockKind,
    pub display_name: &'static str,
    pub description: &'static str,
    default_config: fn() -> BlockConfig,
}

impl BlockDefinition {
    pub fn default_config(&self) -> BlockConfig {
        (self.default_config)()
    }

    pub fn summary(&self) -> BlockSummary {
        BlockSummary {
            kind: self.kind,
            display_name: self.display_name,
            description: self.description,
            default_config: self.default_config(),
        }
    }
}

/// Registry entry as listed to clients
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BlockSummary {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub display_name: &'static str,
    pub description: &'static str,
    pub default_config: BlockConfig,
}

/// Block types available to the builder. Built once at startup and shared.
pub struct BlockRegistry {
    definitions: Vec<BlockDefinition>,
}

impl BlockRegistry {
    pub fn standard() -> Self {
        let definitions = vec![
            BlockDefinition {
                kind: BlockKind::Hero,
                display_name: "Hero",
                description: "Headline, supporting line and a call to action",
                default_config: || BlockConfig::Hero(HeroConfig::default()),
            },
            BlockDefinition {
                kind: BlockKind::SlotMachine,
                display_name: "Slot machine",
                description: "Weighted reels with credits, bets and auto-spin",
                default_config: || BlockConfig::SlotMachine(SlotMachineConfig::default()),
            },
            BlockDefinition {
                kind: BlockKind::WheelOfFortune,
                display_name: "Wheel of fortune",
                description: "Prize wheel that always lands on the chosen segment",
                default_config: || BlockConfig::WheelOfFortune(WheelConfig::default()),
            },
            BlockDefinition {
                kind: BlockKind::Countdown,
                display_name: "Countdown",
                description: "Evergreen timer counting down from page load",
                default_config: || BlockConfig::Countdown(CountdownConfig::default()),
            },
        ];
        Self { definitions }
    }

    pub fn definitions(&self) -> &[BlockDefinition] {
        &self.definitions
    }

    pub fn summaries(&self) -> Vec<BlockSummary> {
        self.definitions.iter().map(BlockDefinition::summary).collect()
    }

    pub fn get(&self, kind: BlockKind) -> Option<&BlockDefinition> {
        self.definitions.iter().find(|d| d.kind == kind)
    }

    /// Looks a block type up by its type tag, e.g. `wheel_of_fortune`.
    pub fn lookup(&self, type_name: &str) -> Result<&BlockDefinition, ConfigError> {
        BlockKind::from_str(type_name)
            .ok()
            .and_then(|kind| self.get(kind))
            .ok_or_else(|| ConfigError::UnknownBlockType(type_name.to_string()))
    }

    pub fn create(&self, type_name: &str) -> Result<BlockConfig, ConfigError> {
        self.lookup(type_name).map(BlockDefinition::default_config)
    }

    pub fn validate(&self, config: &BlockConfig) -> Result<(), ConfigError> {
        if self.get(config.kind()).is_none() {
            return Err(ConfigError::UnknownBlockType(config.kind().to_string()));
        }
        config.check()
    }

    pub fn render_static(&self, config: &BlockConfig, block_id: &str) -> StaticRender {
        render::render_static(config, block_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_standard_registry_covers_every_kind() {
        let registry = BlockRegistry::standard();
        for kind in BlockKind::iter() {
            let definition = registry.get(kind).unwrap();
            assert_eq!(definition.default_config().kind(), kind);
            assert!(registry.validate(&definition.default_config()).is_ok(), "{} default", kind);
        }
    }

    #[test]
    fn test_lookup_by_type_tag() {
        let registry = BlockRegistry::standard();
        assert_eq!(registry.lookup("countdown").unwrap().kind, BlockKind::Countdown);
        assert!(matches!(registry.create("carousel"), Err(ConfigError::UnknownBlockType(name)) if name == "carousel"));
    }

    #[test]
    fn test_summary_lists_type_and_defaults() {
        let registry = BlockRegistry::standard();
        let json = serde_json::to_value(registry.summaries()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 4);
        assert_eq!(json[0]["type"], "hero");
        assert_eq!(json[0]["default_config"]["type"], "hero");
    }
}
