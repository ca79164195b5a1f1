use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, info};
use uuid::Uuid;
use shared::blocks::BlockConfig;
use shared::export::export_page as export_document;
use shared::registry::BlockSummary;
use shared::render::dom_id;
use shared::Page;
use crate::error::Error;
use crate::models::{
    ExportQuery, PageInput, PageSummary, RenderBlockRequest, RenderBlockResponse, StoredPage, ValidationReport,
};
use crate::AppState;

pub async fn list_blocks(State(state): State<AppState>) -> Json<Vec<BlockSummary>> {
    Json(state.registry.summaries())
}

pub async fn validate_block(
    State(state): State<AppState>,
    Json(config): Json<BlockConfig>,
) -> Result<Json<ValidationReport>, Error> {
    state.registry.validate(&config)?;
    Ok(Json(ValidationReport { valid: true }))
}

/// Static render of a single block. Malformed configs still render in their degraded form.
pub async fn render_block(
    State(state): State<AppState>,
    Json(request): Json<RenderBlockRequest>,
) -> Json<RenderBlockResponse> {
    let block_id = request.id.unwrap_or_else(|| request.config.kind().to_string());
    let render = state.registry.render_static(&request.config, &block_id);
    let html = render.to_html();
    Json(RenderBlockResponse { render, html })
}

pub async fn list_pages(State(state): State<AppState>) -> Result<Json<Vec<PageSummary>>, Error> {
    Ok(Json(state.store.list().await?))
}

pub async fn create_page(
    State(state): State<AppState>,
    Json(input): Json<PageInput>,
) -> Result<(StatusCode, Json<StoredPage>), Error> {
    let page = Page {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        blocks: input.blocks,
    };
    page.check()?;

    let stored = state.store.insert(page).await?;
    info!("created page {} with {} blocks", stored.page.id, stored.page.blocks.len());
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn get_page(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<StoredPage>, Error> {
    state
        .store
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("page {}", id)))
}

pub async fn update_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<PageInput>,
) -> Result<Json<StoredPage>, Error> {
    let page = Page { id: id.clone(), title: input.title, blocks: input.blocks };
    page.check()?;

    let stored = state
        .store
        .replace(page)
        .await?
        .ok_or_else(|| Error::NotFound(format!("page {}", id)))?;
    debug!("updated page {}", id);
    Ok(Json(stored))
}

pub async fn delete_page(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, Error> {
    if state.store.delete(&id).await? {
        info!("deleted page {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound(format!("page {}", id)))
    }
}

pub async fn export_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, Error> {
    let stored = state
        .store
        .get(&id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("page {}", id)))?;

    let body = export_document(&stored.page, query.format)?;
    let filename = format!("{}.{}", dom_id(&stored.page.id), query.format.extension());
    info!("exported page {} as {}", id, query.format);

    Ok((
        [
            (header::CONTENT_TYPE, query.format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", filename)),
        ],
        body,
    )
        .into_response())
}
