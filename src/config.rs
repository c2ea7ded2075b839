// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    common::i18n::I18nStore,
    db::{
        DashboardRepository, DashboardSource, DepartmentRepository, EntityListSource,
        SupplierRepository,
    },
    models::{department::Department, supplier::Supplier},
    services::{
        dashboard_service::DashboardService, department_service::DepartmentService,
        supplier_service::SupplierService,
    },
};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

// Configuração lida do ambiente (.env em desenvolvimento)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub server_addr: String,
    pub db_max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string());
        let db_max_connections = match env::var("DB_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS inválido: {raw}"))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            server_addr,
            db_max_connections,
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub i18n_store: Arc<I18nStore>,
    pub dashboard_service: DashboardService,
    pub supplier_service: SupplierService,
    pub department_service: DepartmentService,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&config.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        let dashboard_repo = DashboardRepository::new(db_pool.clone());
        let supplier_repo = SupplierRepository::new(db_pool.clone());
        let department_repo = DepartmentRepository::new(db_pool.clone());

        Ok(Self::from_parts(
            db_pool,
            Arc::new(dashboard_repo),
            Arc::new(supplier_repo),
            Arc::new(department_repo),
        ))
    }

    // --- Monta o gráfico de dependências ---
    // As fontes de dados são injetáveis (os testes usam versões em memória).
    pub fn from_parts(
        db_pool: PgPool,
        dashboard_source: Arc<dyn DashboardSource>,
        supplier_source: Arc<dyn EntityListSource<Supplier>>,
        department_source: Arc<dyn EntityListSource<Department>>,
    ) -> Self {
        let supplier_service = SupplierService::new(supplier_source);
        let department_service = DepartmentService::new(department_source);

        Self {
            db_pool,
            i18n_store: Arc::new(I18nStore::new()),
            dashboard_service: DashboardService::new(dashboard_source),
            supplier_service,
            department_service,
        }
    }
}
