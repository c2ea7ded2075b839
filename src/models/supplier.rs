// src/models/supplier.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::dashboard::DerivedStats;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Acme Trading Co.")]
    pub name: String,

    #[schema(example = "Al-Mansour St. 12, Baghdad")]
    pub address: Option<String>,

    #[schema(example = "Omar Hassan")]
    pub contact_person: Option<String>,

    #[schema(example = "sales@acme.example")]
    pub email: Option<String>,

    pub phone: Option<String>,
    pub tax_id: Option<String>,
    pub notes: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Só o necessário para os cards do dashboard.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SupplierProjection {
    pub created_at: Option<DateTime<Utc>>,
}

// Linha da tabela de fornecedores com a coluna de faturas em aberto
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierWithUnpaidStats {
    #[serde(flatten)]
    pub supplier: Supplier,

    #[schema(example = 2)]
    pub unpaid_invoice_count: i64,

    #[schema(example = "150.00")]
    pub unpaid_invoice_total: Decimal,
}

impl SupplierWithUnpaidStats {
    pub fn new(supplier: Supplier, stats: DerivedStats) -> Self {
        Self {
            supplier,
            unpaid_invoice_count: stats.unpaid_invoice_count,
            unpaid_invoice_total: stats.unpaid_invoice_total,
        }
    }
}
