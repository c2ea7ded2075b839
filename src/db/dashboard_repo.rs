// src/db/dashboard_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use crate::{
    common::error::AppError,
    models::{
        invoice::{InvoiceProjection, InvoiceRow, InvoiceStatus, NamedInvoice},
        supplier::SupplierProjection,
    },
};

/// De onde o dashboard tira as linhas cruas. Cada método é uma consulta
/// independente; quem chama decide como rodá-las em paralelo.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    async fn suppliers(&self) -> Result<Vec<SupplierProjection>, AppError>;

    async fn invoices(&self) -> Result<Vec<InvoiceProjection>, AppError>;

    // O filtro por status vai para o banco
    async fn invoices_with_status(&self, status: InvoiceStatus) -> Result<Vec<InvoiceProjection>, AppError>;

    async fn invoices_by_supplier_name(&self) -> Result<Vec<NamedInvoice>, AppError>;

    async fn invoices_by_department_name(&self) -> Result<Vec<NamedInvoice>, AppError>;
}

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DashboardSource for DashboardRepository {
    // 1. Fornecedores (para o card "Suppliers")
    async fn suppliers(&self) -> Result<Vec<SupplierProjection>, AppError> {
        let rows = sqlx::query_as::<_, SupplierProjection>(
            "SELECT created_at FROM suppliers",
        )
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    // 2. Todas as faturas (card "Total Invoices" e gráfico mensal)
    async fn invoices(&self) -> Result<Vec<InvoiceProjection>, AppError> {
        let rows = sqlx::query_as::<_, InvoiceRow>(
            "SELECT status, amount, discount_amount, created_at FROM invoices",
        )
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(InvoiceProjection::from).collect())
    }

    // 3. Faturas de um status (pagas / não pagas)
    async fn invoices_with_status(&self, status: InvoiceStatus) -> Result<Vec<InvoiceProjection>, AppError> {
        let rows = sqlx::query_as::<_, InvoiceRow>(
            r#"
            SELECT status, amount, discount_amount, created_at
            FROM invoices
            WHERE status = $1
            "#,
        )
            .bind(status.as_str())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(InvoiceProjection::from).collect())
    }

    // 4. Ranking: fatura + nome do fornecedor (LEFT JOIN mantém faturas sem dono, com nome nulo)
    async fn invoices_by_supplier_name(&self) -> Result<Vec<NamedInvoice>, AppError> {
        let rows = sqlx::query_as::<_, NamedInvoice>(
            r#"
            SELECT s.name AS name, i.amount, i.discount_amount
            FROM invoices i
            LEFT JOIN suppliers s ON s.id = i.supplier_id
            ORDER BY i.id ASC
            "#,
        )
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn invoices_by_department_name(&self) -> Result<Vec<NamedInvoice>, AppError> {
        let rows = sqlx::query_as::<_, NamedInvoice>(
            r#"
            SELECT d.name AS name, i.amount, i.discount_amount
            FROM invoices i
            LEFT JOIN departments d ON d.id = i.department_id
            ORDER BY i.id ASC
            "#,
        )
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}
