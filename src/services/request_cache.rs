// src/services/request_cache.rs

use std::future::Future;
use std::time::Instant;

use tokio::sync::OnceCell;

use crate::{
    common::error::AppError,
    db::DashboardSource,
    models::{
        invoice::{InvoiceProjection, InvoiceStatus, NamedInvoice},
        supplier::SupplierProjection,
    },
};

/// Memoização das consultas do dashboard dentro de UMA requisição.
///
/// O handler cria o cache, as agregações concorrentes compartilham a mesma
/// instância e tudo é descartado junto com a resposta. Nunca é global, então
/// dados de uma requisição não vazam para outra.
pub struct RequestCache<'a> {
    source: &'a dyn DashboardSource,
    suppliers: OnceCell<Vec<SupplierProjection>>,
    invoices: OnceCell<Vec<InvoiceProjection>>,
    paid_invoices: OnceCell<Vec<InvoiceProjection>>,
    unpaid_invoices: OnceCell<Vec<InvoiceProjection>>,
    by_supplier_name: OnceCell<Vec<NamedInvoice>>,
    by_department_name: OnceCell<Vec<NamedInvoice>>,
}

impl<'a> RequestCache<'a> {
    pub fn new(source: &'a dyn DashboardSource) -> Self {
        Self {
            source,
            suppliers: OnceCell::new(),
            invoices: OnceCell::new(),
            paid_invoices: OnceCell::new(),
            unpaid_invoices: OnceCell::new(),
            by_supplier_name: OnceCell::new(),
            by_department_name: OnceCell::new(),
        }
    }

    pub async fn suppliers(&self) -> Result<&[SupplierProjection], AppError> {
        fetch_once(&self.suppliers, "suppliers", || self.source.suppliers()).await
    }

    pub async fn invoices(&self) -> Result<&[InvoiceProjection], AppError> {
        fetch_once(&self.invoices, "invoices", || self.source.invoices()).await
    }

    pub async fn paid_invoices(&self) -> Result<&[InvoiceProjection], AppError> {
        fetch_once(&self.paid_invoices, "paid_invoices", || {
            self.source.invoices_with_status(InvoiceStatus::Paid)
        })
        .await
    }

    pub async fn unpaid_invoices(&self) -> Result<&[InvoiceProjection], AppError> {
        fetch_once(&self.unpaid_invoices, "unpaid_invoices", || {
            self.source.invoices_with_status(InvoiceStatus::Unpaid)
        })
        .await
    }

    pub async fn invoices_by_supplier_name(&self) -> Result<&[NamedInvoice], AppError> {
        fetch_once(&self.by_supplier_name, "invoices_by_supplier", || {
            self.source.invoices_by_supplier_name()
        })
        .await
    }

    pub async fn invoices_by_department_name(&self) -> Result<&[NamedInvoice], AppError> {
        fetch_once(&self.by_department_name, "invoices_by_department", || {
            self.source.invoices_by_department_name()
        })
        .await
    }
}

// Qualquer falha de busca vira `DashboardUnavailable`; o detalhe só vai para o log.
// Falha não fica memoizada: o `OnceCell` continua vazio.
async fn fetch_once<'c, T, F, Fut>(
    cell: &'c OnceCell<Vec<T>>,
    dataset: &'static str,
    fetch: F,
) -> Result<&'c [T], AppError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<T>, AppError>>,
{
    let rows = cell
        .get_or_try_init(move || async move {
            let started = Instant::now();
            let rows = fetch().await.map_err(|err| {
                tracing::error!(dataset, error = %err, "Falha ao buscar dados do dashboard");
                AppError::DashboardUnavailable
            })?;
            tracing::debug!(
                dataset,
                rows = rows.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Dados do dashboard carregados"
            );
            Ok::<_, AppError>(rows)
        })
        .await?;

    Ok(rows.as_slice())
}
