pub mod dashboard;
pub mod department;
pub mod invoice;
pub mod supplier;
