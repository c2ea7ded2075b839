//src/main.rs

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::{AppConfig, AppState};
use crate::docs::ApiDoc;

// Combina tudo no router principal
pub(crate) fn app(app_state: AppState) -> Router {
    let dashboard_routes = Router::new()
        .route("/api/dashboard", get(handlers::dashboard::get_dashboard))
        .route("/api/dashboard/metrics", get(handlers::dashboard::get_metrics))
        .route("/api/dashboard/overview", get(handlers::dashboard::get_overview_chart))
        .route("/api/dashboard/top-suppliers", get(handlers::dashboard::get_top_suppliers))
        .route("/api/dashboard/top-departments", get(handlers::dashboard::get_top_departments));

    let registry_routes = Router::new()
        .route("/api/suppliers", get(handlers::suppliers::list_suppliers))
        .route("/api/departments", get(handlers::departments::list_departments));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        .merge(dashboard_routes)
        .merge(registry_routes)
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG controla o nível; padrão "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let config = AppConfig::from_env()?;
    let app_state = AppState::new(&config).await?;

    // Faz o app rodar as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await?;

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let listener = TcpListener::bind(&config.server_addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);

    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
