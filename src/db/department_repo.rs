// src/db/department_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use crate::{
    common::{db_utils::attach_invoices, error::AppError},
    db::entity_source::EntityListSource,
    models::{
        department::Department,
        invoice::{EntityWithInvoices, OwnedInvoiceRow},
    },
};

#[derive(Clone)]
pub struct DepartmentRepository {
    pool: PgPool,
}

impl DepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityListSource<Department> for DepartmentRepository {
    async fn list_with_invoices(&self) -> Result<Vec<EntityWithInvoices<Department>>, AppError> {
        let mut tx = self.pool.begin().await?;

        let departments = sqlx::query_as::<_, Department>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM departments
            ORDER BY created_at DESC
            "#,
        )
            .fetch_all(&mut *tx)
            .await?;

        let invoices = sqlx::query_as::<_, OwnedInvoiceRow>(
            r#"
            SELECT department_id AS owner_id, status, amount
            FROM invoices
            WHERE department_id IS NOT NULL
            ORDER BY id ASC
            "#,
        )
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(attach_invoices(departments, invoices, |d| d.id))
    }
}
