// src/handlers/departments.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::i18n::Locale,
    models::department::DepartmentWithUnpaidStats,
};

// GET /api/departments
#[utoipa::path(
    get,
    path = "/api/departments",
    tag = "Departments",
    responses(
        (status = 200, description = "Departamentos com total em aberto", body = Vec<DepartmentWithUnpaidStats>),
        (status = 500, description = "Erro inesperado")
    )
)]
pub async fn list_departments(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {

    let departments = app_state.department_service
        .list_with_unpaid_stats()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(departments)))
}
