// src/db/entity_source.rs

use async_trait::async_trait;

use crate::{common::error::AppError, models::invoice::EntityWithInvoices};

/// Lista de fornecedores ou departamentos (mais novos primeiro), cada um com as
/// suas faturas cruas. Implementada pelos repositórios Postgres.
#[async_trait]
pub trait EntityListSource<T>: Send + Sync {
    async fn list_with_invoices(&self) -> Result<Vec<EntityWithInvoices<T>>, AppError>;
}
