pub mod entity_source;
pub use entity_source::EntityListSource;
pub mod dashboard_repo;
pub use dashboard_repo::{DashboardRepository, DashboardSource};
pub mod supplier_repo;
pub use supplier_repo::SupplierRepository;
pub mod department_repo;
pub use department_repo::DepartmentRepository;
