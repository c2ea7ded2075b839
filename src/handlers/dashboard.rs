// src/handlers/dashboard.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::i18n::Locale,
    // Importamos os models para referenciar no Swagger
    models::dashboard::{DashboardMetrics, DashboardOverview, OverviewChartData, RankingChart},
};

// GET /api/dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Cards, gráfico mensal e rankings num único carregamento", body = DashboardOverview),
        (status = 503, description = "Alguma das consultas falhou; nada é devolvido")
    )
)]
pub async fn get_dashboard(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {

    // Cache só desta requisição: as faturas são buscadas uma vez para cards e gráfico
    let cache = app_state.dashboard_service.request_cache();

    let dashboard = app_state.dashboard_service
        .get_dashboard(&cache, Utc::now())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(dashboard)))
}

// GET /api/dashboard/metrics
#[utoipa::path(
    get,
    path = "/api/dashboard/metrics",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Totais e variação dos últimos 30 dias", body = DashboardMetrics),
        (status = 503, description = "Falha ao buscar os dados")
    )
)]
pub async fn get_metrics(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {

    let cache = app_state.dashboard_service.request_cache();

    let metrics = app_state.dashboard_service
        .get_metrics(&cache, Utc::now())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(metrics)))
}

// GET /api/dashboard/overview
#[utoipa::path(
    get,
    path = "/api/dashboard/overview",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Pago x não pago nos últimos 6 meses", body = Vec<OverviewChartData>),
        (status = 503, description = "Falha ao buscar os dados")
    )
)]
pub async fn get_overview_chart(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {

    let cache = app_state.dashboard_service.request_cache();

    let chart = app_state.dashboard_service
        .get_overview_chart(&cache, Utc::now())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(chart)))
}

// GET /api/dashboard/top-suppliers
#[utoipa::path(
    get,
    path = "/api/dashboard/top-suppliers",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Top 5 fornecedores por valor líquido", body = RankingChart),
        (status = 503, description = "Falha ao buscar os dados")
    )
)]
pub async fn get_top_suppliers(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {

    let cache = app_state.dashboard_service.request_cache();

    let ranking = app_state.dashboard_service
        .get_top_suppliers(&cache)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ranking)))
}

// GET /api/dashboard/top-departments
#[utoipa::path(
    get,
    path = "/api/dashboard/top-departments",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Top 5 departamentos por valor líquido", body = RankingChart),
        (status = 503, description = "Falha ao buscar os dados")
    )
)]
pub async fn get_top_departments(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {

    let cache = app_state.dashboard_service.request_cache();

    let ranking = app_state.dashboard_service
        .get_top_departments(&cache)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(ranking)))
}
