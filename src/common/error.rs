use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::{common::i18n::I18nStore, middleware::i18n::Locale};

// Erros internos da aplicação. O motor de agregação não falha; tudo aqui vem
// da borda de dados (sqlx) ou da inicialização.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Qualquer uma das buscas do dashboard falhou; não existe resultado parcial.
    #[error("Falha ao buscar os dados do dashboard")]
    DashboardUnavailable,

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    fn status_and_key(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::DashboardUnavailable => (StatusCode::SERVICE_UNAVAILABLE, "dashboard_unavailable"),
            AppError::DatabaseError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
            AppError::InternalServerError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    /// Converte para a resposta HTTP, com a mensagem no idioma do cliente.
    pub fn to_api_error(self, locale: &Locale, store: &I18nStore) -> ApiError {
        let (status, key) = self.status_and_key();

        // O detalhe fica só no log; o cliente recebe a mensagem genérica.
        if status.is_server_error() {
            tracing::error!(error = %self, "Requisição falhou");
        }

        ApiError {
            status,
            message: store.translate(&locale.0, key),
        }
    }
}

// O erro que efetivamente sai pela API.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}
