pub mod audit;
pub mod filesystem;

pub use audit::AuditService;
