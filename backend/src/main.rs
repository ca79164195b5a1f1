use std::sync::Arc;
use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use shared::BlockRegistry;

use crate::config::ServerConfig;
use crate::games::backend_slot_game::create_router as create_slot_game_router;
use crate::games::backend_wheel_game::create_router as create_wheel_game_router;
use crate::handlers::{
    create_page, delete_page, export_page, get_page, list_blocks, list_pages, render_block, update_page,
    validate_block,
};
use crate::store::PageStore;

mod config;
mod error;
mod games;
mod handlers;
mod logging;
mod models;
mod store;

#[derive(Clone)]
pub struct AppState {
    store: PageStore,
    registry: Arc<BlockRegistry>,
}

impl AppState {
    pub fn new(store: PageStore) -> Self {
        Self { store, registry: Arc::new(BlockRegistry::standard()) }
    }
}

pub async fn health_check() -> &'static str {
    "OK"
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(vec![Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health_check", get(health_check))
        .route("/blocks", get(list_blocks))
        .route("/blocks/validate", axum::routing::post(validate_block))
        .route("/blocks/render", axum::routing::post(render_block))
        .route("/pages", get(list_pages).post(create_page))
        .route("/pages/:id", get(get_page).put(update_page).delete(delete_page))
        .route("/pages/:id/export", get(export_page))
        .nest("/spin", create_slot_game_router().merge(create_wheel_game_router()))
}

pub fn build_app(state: AppState, config: &ServerConfig) -> Router {
    let index = format!("{}/index.html", config.frontend_dist);
    let frontend = ServeDir::new(&config.frontend_dist).fallback(ServeFile::new(index));

    Router::new()
        .nest("/api", api_router())
        .fallback_service(frontend)
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::setup();
    let config = ServerConfig::from_env()?;

    let store = match &config.database_url {
        Some(url) => {
            let store = PageStore::connect(url).await?;
            info!("storing pages in postgres");
            store
        }
        None => {
            warn!("DATABASE_URL not set, pages are kept in memory only");
            PageStore::memory()
        }
    };

    let app = build_app(AppState::new(store), &config);

    info!("listening on {}", config.bind_addr);
    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
