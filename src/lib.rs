pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use crate::application::Session;
pub use crate::domain::error::{MigrateError, Result};
pub use crate::domain::record::{MappedRecord, RawRecord};
pub use crate::domain::seo_report::{SeoCheckResult, SeoStatus};
