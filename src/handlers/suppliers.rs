// src/handlers/suppliers.rs

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
    models::supplier::SupplierWithUnpaidStats,
};

// GET /api/suppliers
#[utoipa::path(
    get,
    path = "/api/suppliers",
    tag = "Suppliers",
    responses(
        (status = 200, description = "Fornecedores (mais novos primeiro) com total em aberto", body = Vec<SupplierWithUnpaidStats>),
        (status = 500, description = "Erro inesperado")
    )
)]
pub async fn list_suppliers(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {

    let suppliers = app_state.supplier_service
        .list_with_unpaid_stats()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(suppliers)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::{
        db::entity_source::tests::InMemoryEntities,
        handlers::test_support::{call, call_text, test_state},
        services::{dashboard_service::tests::InMemorySource, supplier_service::tests::sample_suppliers},
    };

    fn state() -> crate::config::AppState {
        test_state(InMemorySource::default(), sample_suppliers(), InMemoryEntities::default())
    }

    #[tokio::test]
    async fn rows_are_flat_supplier_plus_unpaid_columns() {
        let (status, body) = call(state(), "/api/suppliers", "en").await;

        assert_eq!(status, StatusCode::OK);
        let first = &body[0];
        assert_eq!(first["id"], 2);
        assert_eq!(first["name"], "Acme");
        assert_eq!(first["contactPerson"], "Contato Acme");
        assert_eq!(first["unpaidInvoiceCount"], 2);
        assert_eq!(first["unpaidInvoiceTotal"], 100.0);
        assert!(first.get("supplier").is_none());
        assert_eq!(body[1]["name"], "Globex");
        assert_eq!(body[1]["unpaidInvoiceCount"], 0);
    }

    #[tokio::test]
    async fn unpaid_columns_follow_entity_fields() {
        let (_, text) = call_text(state(), "/api/suppliers", "en").await;

        let contact = text.find("\"contactPerson\"").unwrap();
        let count = text.find("\"unpaidInvoiceCount\"").unwrap();
        let total = text.find("\"unpaidInvoiceTotal\"").unwrap();
        assert!(contact < count && count < total);
    }

    #[tokio::test]
    async fn database_failure_is_localized_500() {
        let suppliers = InMemoryEntities { failing: true, ..sample_suppliers() };
        let state = test_state(InMemorySource::default(), suppliers, InMemoryEntities::default());

        let (status, body) = call(state, "/api/suppliers", "pt").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Ocorreu um erro inesperado no banco de dados.");
    }
}
