// src/services/supplier_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::EntityListSource,
    models::supplier::{Supplier, SupplierWithUnpaidStats},
    services::aggregation::entity_unpaid_stats,
};

#[derive(Clone)]
pub struct SupplierService {
    source: Arc<dyn EntityListSource<Supplier>>,
}

impl SupplierService {
    pub fn new(source: Arc<dyn EntityListSource<Supplier>>) -> Self {
        Self { source }
    }

    /// Lista para a tabela de fornecedores: as estatísticas são recalculadas a cada leitura.
    pub async fn list_with_unpaid_stats(&self) -> Result<Vec<SupplierWithUnpaidStats>, AppError> {
        let rows = self.source.list_with_invoices().await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let stats = entity_unpaid_stats(&row.invoices);
                SupplierWithUnpaidStats::new(row.entity, stats)
            })
            .collect())
    }
}
