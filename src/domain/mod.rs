// ============================================================
// DOMAIN LAYER
// ============================================================
// Record types, consistency report types, and the error type.
// No I/O, no external dependencies beyond serde.

pub mod error;
pub mod record;
pub mod seo_report;

pub use error::{MigrateError, Result};
pub use record::{MappedRecord, RawRecord};
pub use seo_report::{SeoCheckResult, SeoStatus};
