// src/db/supplier_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use crate::{
    common::{db_utils::attach_invoices, error::AppError},
    db::entity_source::EntityListSource,
    models::{
        invoice::{EntityWithInvoices, OwnedInvoiceRow},
        supplier::Supplier,
    },
};

#[derive(Clone)]
pub struct SupplierRepository {
    pool: PgPool,
}

impl SupplierRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityListSource<Supplier> for SupplierRepository {
    /// Fornecedores (mais novos primeiro) com o `{status, amount}` de cada fatura.
    async fn list_with_invoices(&self) -> Result<Vec<EntityWithInvoices<Supplier>>, AppError> {
        // Snapshot consistente: as duas leituras na mesma transação
        let mut tx = self.pool.begin().await?;

        let suppliers = sqlx::query_as::<_, Supplier>(
            r#"
            SELECT id, name, address, contact_person, email, phone, tax_id, notes,
                   created_at, updated_at
            FROM suppliers
            ORDER BY created_at DESC
            "#,
        )
            .fetch_all(&mut *tx)
            .await?;

        let invoices = sqlx::query_as::<_, OwnedInvoiceRow>(
            r#"
            SELECT supplier_id AS owner_id, status, amount
            FROM invoices
            WHERE supplier_id IS NOT NULL
            ORDER BY id ASC
            "#,
        )
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(attach_invoices(suppliers, invoices, |s| s.id))
    }
}
