use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::blocks::BlockConfig;
use crate::error::ConfigError;

/// One block placed on a page
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct PageBlock {
    #[validate(length(min = 1, max = 64))]
    pub id: String,
    pub config: BlockConfig,
}

impl PageBlock {
    pub fn new(id: &str, config: BlockConfig) -> Self {
        Self { id: id.to_string(), config }
    }
}

/// A landing page: blocks in display order
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct Page {
    pub id: String,
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[validate]
    pub blocks: Vec<PageBlock>,
}

impl Page {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn block(&self, id: &str) -> Option<&PageBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Page structure plus every block's own rules. The first failing block is reported.
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate()?;
        for (index, block) in self.blocks.iter().enumerate() {
            if self.blocks[..index].iter().any(|earlier| earlier.id == block.id) {
                return Err(ConfigError::DuplicateId(block.id.clone()));
            }
            block.config.check().map_err(|source| ConfigError::InBlock {
                id: block.id.clone(),
                source: Box::new(source),
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{HeroConfig, WheelConfig};

    #[test]
    fn test_page_check_reports_failing_block() {
        let mut page = Page::new("p1", "Launch");
        page.blocks.push(PageBlock::new("hero", BlockConfig::Hero(HeroConfig::default())));
        page.blocks.push(PageBlock::new(
            "wheel",
            BlockConfig::WheelOfFortune(WheelConfig { winning_index: 99, ..WheelConfig::default() }),
        ));

        match page.check() {
            Err(ConfigError::InBlock { id, source }) => {
                assert_eq!(id, "wheel");
                assert!(matches!(*source, ConfigError::IndexOutOfRange { index: 99, len: 8 }));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_block_ids_are_rejected() {
        let mut page = Page::new("p1", "Launch");
        page.blocks.push(PageBlock::new("a", BlockConfig::Hero(HeroConfig::default())));
        page.blocks.push(PageBlock::new("a", BlockConfig::Hero(HeroConfig::default())));
        assert!(matches!(page.check(), Err(ConfigError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_page_json_nests_tagged_configs() {
        let mut page = Page::new("p1", "Launch");
        page.blocks.push(PageBlock::new("hero", BlockConfig::Hero(HeroConfig::default())));
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["blocks"][0]["config"]["type"], "hero");
        let back: Page = serde_json::from_value(json).unwrap();
        assert_eq!(back, page);
    }
}
