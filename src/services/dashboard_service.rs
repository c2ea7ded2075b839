// src/services/dashboard_service.rs

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    common::error::AppError,
    db::DashboardSource,
    models::dashboard::{ChartData, DashboardMetrics, DashboardOverview, OverviewChartData, RankingChart},
    services::{
        aggregation::{self, DashboardDatasets},
        request_cache::RequestCache,
    },
};

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn DashboardSource>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn DashboardSource>) -> Self {
        Self { source }
    }

    /// Um cache novo por requisição.
    pub fn request_cache(&self) -> RequestCache<'_> {
        RequestCache::new(self.source.as_ref())
    }

    // As quatro buscas rodam juntas; se uma falhar, nenhuma métrica sai.
    pub async fn get_metrics(
        &self,
        cache: &RequestCache<'_>,
        now: DateTime<Utc>,
    ) -> Result<DashboardMetrics, AppError> {
        let (suppliers, invoices, paid_invoices, unpaid_invoices) = tokio::try_join!(
            cache.suppliers(),
            cache.invoices(),
            cache.paid_invoices(),
            cache.unpaid_invoices(),
        )?;

        let datasets = DashboardDatasets {
            suppliers,
            invoices,
            paid_invoices,
            unpaid_invoices,
        };

        Ok(aggregation::dashboard_metrics(datasets, aggregation::dashboard_cutoff(now)))
    }

    pub async fn get_overview_chart(
        &self,
        cache: &RequestCache<'_>,
        now: DateTime<Utc>,
    ) -> Result<Vec<OverviewChartData>, AppError> {
        let invoices = cache.invoices().await?;
        Ok(aggregation::monthly_overview(invoices, now))
    }

    pub async fn get_top_suppliers(&self, cache: &RequestCache<'_>) -> Result<RankingChart, AppError> {
        let invoices = cache.invoices_by_supplier_name().await?;
        Ok(ranking_chart(aggregation::top_entities(invoices)))
    }

    pub async fn get_top_departments(&self, cache: &RequestCache<'_>) -> Result<RankingChart, AppError> {
        let invoices = cache.invoices_by_department_name().await?;
        Ok(ranking_chart(aggregation::top_entities(invoices)))
    }

    /// Carregamento completo da página: tudo ou nada.
    pub async fn get_dashboard(
        &self,
        cache: &RequestCache<'_>,
        now: DateTime<Utc>,
    ) -> Result<DashboardOverview, AppError> {
        let (metrics, overview, top_suppliers, top_departments) = tokio::try_join!(
            self.get_metrics(cache, now),
            self.get_overview_chart(cache, now),
            self.get_top_suppliers(cache),
            self.get_top_departments(cache),
        )?;

        Ok(DashboardOverview {
            metrics,
            overview,
            top_suppliers,
            top_departments,
        })
    }
}

fn ranking_chart(data: Vec<ChartData>) -> RankingChart {
    let config = aggregation::chart_config(&data);
    RankingChart { data, config }
}
