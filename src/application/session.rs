// ============================================================
// MIGRATION SESSION
// ============================================================
// Explicit context object holding the current record generations

use crate::application::use_cases::export::export_json;
use crate::application::use_cases::migration::run_migration;
use crate::application::use_cases::preview::render_table;
use crate::application::use_cases::seo_check::run_seo_check;
use crate::domain::error::Result;
use crate::domain::record::{MappedRecord, RawRecord};
use crate::domain::seo_report::SeoCheckResult;
use crate::infrastructure::decode::{decode_records, InputFormat};

/// One in-memory migration session: at most one generation of source
/// records and one of migrated records. Operations never mutate the
/// receiver; they return a new session, so the caller's state survives
/// any failed call unchanged.
#[derive(Debug, Clone, Default)]
pub struct Session {
    source: Vec<RawRecord>,
    mapped: Vec<MappedRecord>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> &[RawRecord] {
        &self.source
    }

    pub fn mapped(&self) -> &[MappedRecord] {
        &self.mapped
    }

    /// Decode a catalog into a fresh session. Loading replaces both
    /// record generations; migrated output never outlives a reload.
    pub fn load(&self, content: &str, format: InputFormat) -> Result<Session> {
        let source = decode_records(content, format)?;
        tracing::info!("{} records loaded", source.len());

        Ok(Session {
            source,
            mapped: Vec::new(),
        })
    }

    /// Run the field mapping over the loaded records. The migrated set
    /// is rebuilt from scratch on every call.
    pub fn migrate(&self) -> Result<Session> {
        let mapped = run_migration(&self.source)?;
        tracing::info!("migration completed: {} records", mapped.len());

        Ok(Session {
            source: self.source.clone(),
            mapped,
        })
    }

    /// Check that the SEO fields survived the migration.
    pub fn seo_check(&self) -> Result<Vec<SeoCheckResult>> {
        run_seo_check(&self.source, &self.mapped)
    }

    /// Serialize the migrated set as the downloadable JSON artifact.
    pub fn export(&self) -> Result<String> {
        export_json(&self.mapped)
    }

    /// Render the loaded records as a text table.
    pub fn preview(&self, limit: usize) -> Result<String> {
        render_table(&self.source, limit)
    }
}
