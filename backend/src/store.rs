use std::collections::HashMap;
use std::sync::Arc;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::Mutex;
use shared::Page;
use crate::error::Error;
use crate::models::{PageRow, PageSummary, StoredPage};

const CREATE_PAGES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS pages (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    blocks JSONB NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
)
"#;

/// Page persistence. Blocks are stored as opaque JSON in either backend.
#[derive(Clone)]
pub enum PageStore {
    Memory(Arc<Mutex<HashMap<String, StoredPage>>>),
    Postgres(PgPool),
}

impl PageStore {
    pub fn memory() -> Self {
        PageStore::Memory(Arc::new(Mutex::new(HashMap::new())))
    }

    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new().max_connections(5).connect(database_url).await?;
        sqlx::query(CREATE_PAGES_TABLE).execute(&pool).await?;
        Ok(PageStore::Postgres(pool))
    }

    pub async fn insert(&self, page: Page) -> Result<StoredPage, Error> {
        let now = Utc::now();
        let stored = StoredPage { page, created_at: now, updated_at: now };
        match self {
            PageStore::Memory(pages) => {
                pages.lock().await.insert(stored.page.id.clone(), stored.clone());
            }
            PageStore::Postgres(pool) => {
                sqlx::query("INSERT INTO pages (id, title, blocks, created_at, updated_at) VALUES ($1, $2, $3, $4, $5)")
                    .bind(&stored.page.id)
                    .bind(&stored.page.title)
                    .bind(sqlx::types::Json(&stored.page.blocks))
                    .bind(stored.created_at)
                    .bind(stored.updated_at)
                    .execute(pool)
                    .await?;
            }
        }
        Ok(stored)
    }

    pub async fn get(&self, id: &str) -> Result<Option<StoredPage>, Error> {
        match self {
            PageStore::Memory(pages) => Ok(pages.lock().await.get(id).cloned()),
            PageStore::Postgres(pool) => {
                let row = sqlx::query_as::<_, PageRow>(
                    "SELECT id, title, blocks, created_at, updated_at FROM pages WHERE id = $1",
                )
                .bind(id)
                .fetch_optional(pool)
                .await?;
                Ok(row.map(StoredPage::from))
            }
        }
    }

    pub async fn list(&self) -> Result<Vec<PageSummary>, Error> {
        match self {
            PageStore::Memory(pages) => {
                let pages = pages.lock().await;
                let mut summaries: Vec<PageSummary> = pages.values().map(PageSummary::from).collect();
                summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.id.cmp(&b.id)));
                Ok(summaries)
            }
            PageStore::Postgres(pool) => {
                let rows = sqlx::query_as::<_, PageRow>(
                    "SELECT id, title, blocks, created_at, updated_at FROM pages ORDER BY updated_at DESC, id",
                )
                .fetch_all(pool)
                .await?;
                Ok(rows.into_iter().map(StoredPage::from).map(|p| PageSummary::from(&p)).collect())
            }
        }
    }

    /// Replaces title and blocks of an existing page. `None` when no page has that id.
    pub async fn replace(&self, page: Page) -> Result<Option<StoredPage>, Error> {
        let now = Utc::now();
        match self {
            PageStore::Memory(pages) => {
                let mut pages = pages.lock().await;
                Ok(pages.get_mut(&page.id).map(|stored| {
                    stored.page = page;
                    stored.updated_at = now;
                    stored.clone()
                }))
            }
            PageStore::Postgres(pool) => {
                let row = sqlx::query_as::<_, PageRow>(
                    "UPDATE pages SET title = $2, blocks = $3, updated_at = $4 WHERE id = $1 \
                     RETURNING id, title, blocks, created_at, updated_at",
                )
                .bind(&page.id)
                .bind(&page.title)
                .bind(sqlx::types::Json(&page.blocks))
                .bind(now)
                .fetch_optional(pool)
                .await?;
                Ok(row.map(StoredPage::from))
            }
        }
    }

    pub async fn delete(&self, id: &str) -> Result<bool, Error> {
        match self {
            PageStore::Memory(pages) => Ok(pages.lock().await.remove(id).is_some()),
            PageStore::Postgres(pool) => {
                let result = sqlx::query("DELETE FROM pages WHERE id = $1").bind(id).execute(pool).await?;
                Ok(result.rows_affected() > 0)
            }
        }
    }
}
