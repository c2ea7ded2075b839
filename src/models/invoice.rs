// src/models/invoice.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// --- Status da fatura ---
// No banco a coluna é TEXT livre; só estes quatro valores entram nas estatísticas.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Unpaid,
    Paid,
    Partial,
    Cancelled,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Unpaid => "unpaid",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Partial => "partial",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }

    /// Converte a tag gravada no banco. Tags desconhecidas viram `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "unpaid" => Some(InvoiceStatus::Unpaid),
            "paid" => Some(InvoiceStatus::Paid),
            "partial" => Some(InvoiceStatus::Partial),
            "cancelled" => Some(InvoiceStatus::Cancelled),
            _ => None,
        }
    }
}

/// `amount - (discount_amount ?? 0)`
pub fn net_amount(amount: Decimal, discount_amount: Option<Decimal>) -> Decimal {
    amount - discount_amount.unwrap_or(Decimal::ZERO)
}

// =============================================================================
//  PROJEÇÕES (somente leitura)
// =============================================================================

/// Linha crua de `invoices` como o banco devolve (status ainda em texto).
#[derive(Debug, Clone, FromRow)]
pub struct InvoiceRow {
    pub status: Option<String>,
    pub amount: Decimal,
    pub discount_amount: Option<Decimal>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Projeção de fatura usada pelo motor de agregação.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceProjection {
    pub status: Option<InvoiceStatus>,
    pub amount: Decimal,
    pub discount_amount: Option<Decimal>,
    pub created_at: Option<DateTime<Utc>>,
}

impl InvoiceProjection {
    pub fn net_amount(&self) -> Decimal {
        net_amount(self.amount, self.discount_amount)
    }
}

impl From<InvoiceRow> for InvoiceProjection {
    fn from(row: InvoiceRow) -> Self {
        Self {
            status: row.status.as_deref().and_then(InvoiceStatus::parse),
            amount: row.amount,
            discount_amount: row.discount_amount,
            created_at: row.created_at,
        }
    }
}

/// Fatura anexada a um fornecedor/departamento: só `{status, amount}`.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct RawInvoiceRow {
    pub status: Option<String>,
    pub amount: Option<Decimal>,
}

/// Fatura de uma entidade já agrupada pelo id do dono (usada pelos repositórios).
#[derive(Debug, Clone, FromRow)]
pub struct OwnedInvoiceRow {
    pub owner_id: i64,
    pub status: Option<String>,
    pub amount: Option<Decimal>,
}

/// Fatura com o nome (opcional) do fornecedor ou departamento dono.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct NamedInvoice {
    pub name: Option<String>,
    pub amount: Decimal,
    pub discount_amount: Option<Decimal>,
}

impl NamedInvoice {
    pub fn net_amount(&self) -> Decimal {
        net_amount(self.amount, self.discount_amount)
    }
}

/// Fornecedor ou departamento com as faturas que lhe pertencem, na ordem do banco.
#[derive(Debug, Clone)]
pub struct EntityWithInvoices<T> {
    pub entity: T,
    pub invoices: Vec<RawInvoiceRow>,
}

/// Fronteira de ingestão: descarta status nulo ou desconhecido; valor ausente vira 0.
pub fn ingest_raw_invoices(rows: &[RawInvoiceRow]) -> Vec<InvoiceProjection> {
    rows.iter()
        .filter_map(|row| {
            let status = row.status.as_deref().and_then(InvoiceStatus::parse)?;
            Some(InvoiceProjection {
                status: Some(status),
                amount: row.amount.unwrap_or(Decimal::ZERO),
                discount_amount: None,
                created_at: None,
            })
        })
        .collect()
}
