// src/services/department_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::EntityListSource,
    models::department::{Department, DepartmentWithUnpaidStats},
    services::aggregation::entity_unpaid_stats,
};

#[derive(Clone)]
pub struct DepartmentService {
    source: Arc<dyn EntityListSource<Department>>,
}

impl DepartmentService {
    pub fn new(source: Arc<dyn EntityListSource<Department>>) -> Self {
        Self { source }
    }

    pub async fn list_with_unpaid_stats(&self) -> Result<Vec<DepartmentWithUnpaidStats>, AppError> {
        let rows = self.source.list_with_invoices().await?;

        Ok(rows
            .into_iter()
            .map(|row| DepartmentWithUnpaidStats::new(row.entity, entity_unpaid_stats(&row.invoices)))
            .collect())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{
        db::entity_source::tests::{raw, InMemoryEntities},
        models::invoice::EntityWithInvoices,
    };
    use chrono::{Duration, Utc};
    use rust_decimal_macros::dec;

    pub(crate) fn department(id: i64, name: &str, days_ago: i64) -> Department {
        Department {
            id,
            name: name.to_string(),
            description: Some(format!("Setor de {name}")),
            created_at: Some(Utc::now() - Duration::days(days_ago)),
            updated_at: None,
        }
    }

    pub(crate) fn sample_departments() -> InMemoryEntities<Department> {
        InMemoryEntities::new(vec![
            EntityWithInvoices {
                entity: department(7, "Maintenance", 0),
                invoices: vec![
                    raw(Some("unpaid"), Some(dec!(75.50))),
                    raw(Some("partial"), Some(dec!(20))),
                    raw(Some("Unpaid"), Some(dec!(300))),
                ],
            },
            EntityWithInvoices {
                entity: department(3, "IT", 30),
                invoices: vec![raw(Some("unpaid"), None), raw(Some("cancelled"), Some(dec!(5)))],
            },
        ])
    }

    #[tokio::test]
    async fn attaches_unpaid_stats_in_source_order() {
        let service = DepartmentService::new(Arc::new(sample_departments()));

        let rows = service.list_with_unpaid_stats().await.unwrap();

        let names: Vec<&str> = rows.iter().map(|r| r.department.name.as_str()).collect();
        assert_eq!(names, ["Maintenance", "IT"]);
        // "Unpaid" maiúsculo não é uma tag conhecida
        assert_eq!(rows[0].unpaid_invoice_count, 1);
        assert_eq!(rows[0].unpaid_invoice_total, dec!(75.50));
        assert_eq!(rows[1].unpaid_invoice_count, 1);
        assert_eq!(rows[1].unpaid_invoice_total, dec!(0));
    }

    #[tokio::test]
    async fn empty_source_gives_empty_list() {
        let service = DepartmentService::new(Arc::new(InMemoryEntities::<Department>::default()));

        assert!(service.list_with_unpaid_stats().await.unwrap().is_empty());
    }
}
