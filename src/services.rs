pub mod aggregation;
pub mod dashboard_service;
pub mod department_service;
pub mod request_cache;
pub mod supplier_service;
