// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Dashboard ---
        handlers::dashboard::get_dashboard,
        handlers::dashboard::get_metrics,
        handlers::dashboard::get_overview_chart,
        handlers::dashboard::get_top_suppliers,
        handlers::dashboard::get_top_departments,

        // --- Cadastros ---
        handlers::suppliers::list_suppliers,
        handlers::departments::list_departments,
    ),
    components(
        schemas(
            // --- DASHBOARD ---
            models::dashboard::DerivedStats,
            models::dashboard::DashboardMetrics,
            models::dashboard::OverviewChartData,
            models::dashboard::ChartData,
            models::dashboard::ChartConfigEntry,
            models::dashboard::RankingChart,
            models::dashboard::DashboardOverview,

            // --- Fornecedores / Departamentos ---
            models::supplier::Supplier,
            models::supplier::SupplierWithUnpaidStats,
            models::department::Department,
            models::department::DepartmentWithUnpaidStats,

            // --- Faturas ---
            models::invoice::InvoiceStatus,
        )
    ),
    tags(
        (name = "Dashboard", description = "Indicadores e Gráficos de Compras"),
        (name = "Suppliers", description = "Fornecedores e faturas em aberto"),
        (name = "Departments", description = "Departamentos e faturas em aberto")
    )
)]
pub struct ApiDoc;
