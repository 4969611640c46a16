pub mod error;
pub mod prober;
pub mod result;

pub use error::ScanError;
pub use prober::{ProbeConfig, Prober};
pub use result::{HeaderSnapshot, ProbeOutcome};
