use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::blocks::{BlockConfig, SlotMachineConfig, WheelConfig};
use shared::export::ExportFormat;
use shared::render::StaticRender;
use shared::rounds::SpinResult;
use shared::{Page, PageBlock};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredPage {
    #[serde(flatten)]
    pub page: Page,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
pub struct PageRow {
    pub id: String,
    pub title: String,
    pub blocks: sqlx::types::Json<Vec<PageBlock>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PageRow> for StoredPage {
    fn from(row: PageRow) -> Self {
        StoredPage {
            page: Page {
                id: row.id,
                title: row.title,
                blocks: row.blocks.0,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PageSummary {
    pub id: String,
    pub title: String,
    pub block_count: usize,
    pub updated_at: DateTime<Utc>,
}

impl From<&StoredPage> for PageSummary {
    fn from(stored: &StoredPage) -> Self {
        PageSummary {
            id: stored.page.id.clone(),
            title: stored.page.title.clone(),
            block_count: stored.page.blocks.len(),
            updated_at: stored.updated_at,
        }
    }
}

/// Body of create and replace requests
#[derive(Debug, Deserialize)]
pub struct PageInput {
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<PageBlock>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
}

#[derive(Debug, Deserialize)]
pub struct RenderBlockRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub config: BlockConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RenderBlockResponse {
    #[serde(flatten)]
    pub render: StaticRender,
    pub html: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub format: ExportFormat,
}

#[derive(Debug, Deserialize)]
pub struct SlotSpinRequest {
    pub config: SlotMachineConfig,
    /// Defaults to the configured default bet
    #[serde(default)]
    pub bet: Option<u64>,
    /// Defaults to the configured starting balance
    #[serde(default)]
    pub balance: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SlotRound {
    /// False when the balance could not cover the bet; nothing was charged
    pub accepted: bool,
    pub balance: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SpinResult>,
}

#[derive(Debug, Deserialize)]
pub struct WheelSpinRequest {
    pub config: WheelConfig,
    #[serde(default)]
    pub current_rotation: f64,
}
