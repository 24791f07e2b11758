pub mod automation_audit;
pub mod error;
