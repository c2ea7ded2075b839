// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

// 0. Estatística derivada por fornecedor/departamento (nunca persistida)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub unpaid_invoice_count: i64,
    pub unpaid_invoice_total: Decimal,
}

// 1. Os Cards do Topo (valor atual + variação dos últimos 30 dias)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    #[schema(example = 42)]
    pub total_suppliers: i64,
    #[schema(example = 3)]
    pub suppliers_last_month: i64,
    #[schema(example = 310)]
    pub total_invoices: i64,
    #[schema(example = 27)]
    pub invoices_last_month: i64,
    #[schema(example = "125000.00")]
    pub paid_invoices_amount: Decimal,
    #[schema(example = "8400.00")]
    pub paid_invoices_last_month: Decimal,
    #[schema(example = "56000.00")]
    pub unpaid_invoices_amount: Decimal,
    #[schema(example = "12000.00")]
    pub unpaid_invoices_last_month: Decimal,
}

// 2. Gráfico de barras agrupadas (últimos 6 meses)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverviewChartData {
    #[schema(example = "Oct 2026")]
    pub month: String,
    pub paid: Decimal,
    pub unpaid: Decimal,
}

// 3. Ranking (top fornecedores / top departamentos)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    #[schema(example = "Acme Trading Co.")]
    pub name: String,
    pub total: Decimal,
    #[schema(example = "chart-1")]
    pub fill: String,
}

/// Entrada da legenda gerada a partir do ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfigEntry {
    #[schema(example = "Acme Trading Co.")]
    pub key: String,
    #[schema(example = "Acme Trading Co.")]
    pub label: String,
    #[schema(example = "var(--chart-1)")]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankingChart {
    pub data: Vec<ChartData>,
    pub config: Vec<ChartConfigEntry>,
}

// 4. Tudo que a página do dashboard precisa, num único carregamento
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub metrics: DashboardMetrics,
    pub overview: Vec<OverviewChartData>,
    pub top_suppliers: RankingChart,
    pub top_departments: RankingChart,
}
