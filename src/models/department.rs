// src/models/department.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::dashboard::DerivedStats;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[schema(example = 3)]
    pub id: i64,

    #[schema(example = "Maintenance")]
    pub name: String,

    #[schema(example = "Building and equipment upkeep")]
    pub description: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentWithUnpaidStats {
    #[serde(flatten)]
    pub department: Department,

    #[schema(example = 1)]
    pub unpaid_invoice_count: i64,

    #[schema(example = "75.50")]
    pub unpaid_invoice_total: Decimal,
}

impl DepartmentWithUnpaidStats {
    pub fn new(department: Department, stats: DerivedStats) -> Self {
        Self {
            department,
            unpaid_invoice_count: stats.unpaid_invoice_count,
            unpaid_invoice_total: stats.unpaid_invoice_total,
        }
    }
}
