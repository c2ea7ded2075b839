// src/handlers/test_support.rs

use std::sync::Arc;

use axum::{body::Body, http::{Request, StatusCode}};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use crate::{
    config::AppState,
    db::entity_source::tests::InMemoryEntities,
    models::{department::Department, supplier::Supplier},
    services::dashboard_service::tests::InMemorySource,
};

// Pool preguiçoso: nunca conecta, todas as rotas leem das fontes em memória
pub(crate) fn test_state(
    dashboard: InMemorySource,
    suppliers: InMemoryEntities<Supplier>,
    departments: InMemoryEntities<Department>,
) -> AppState {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/procurement_test")
        .unwrap();
    AppState::from_parts(pool, Arc::new(dashboard), Arc::new(suppliers), Arc::new(departments))
}

pub(crate) fn state_with(dashboard: InMemorySource) -> AppState {
    test_state(dashboard, InMemoryEntities::default(), InMemoryEntities::default())
}

// Corpo cru, para quando a ordem das chaves importa
pub(crate) async fn call_text(state: AppState, uri: &str, lang: &str) -> (StatusCode, String) {
    let response = crate::app(state)
        .oneshot(
            Request::builder()
                .uri(uri)
                .header("accept-language", lang)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub(crate) async fn call(state: AppState, uri: &str, lang: &str) -> (StatusCode, Value) {
    let (status, text) = call_text(state, uri, lang).await;
    (status, serde_json::from_str(&text).unwrap())
}
