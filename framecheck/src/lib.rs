pub mod commands;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    AuditRun, AuditSettings, handle_audit, load_urls_from_file, load_urls_from_source,
    parse_url_line, run_audit,
};
