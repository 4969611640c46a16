pub mod audit;
pub mod classify;
pub mod model;
pub mod report;
pub mod targets;

pub use audit::{AuditOptions, AuditProgress, AuditProgressCallback, execute_audit};
pub use classify::classify;
pub use model::{ProbeResult, RiskLevel};
pub use report::{AuditSummary, ReportError, ReportFormat};
pub use targets::DEFAULT_TARGETS;
