// ============================================================
// SEO CHECK USE CASE
// ============================================================
// Verify that SEO-relevant fields survived the migration

use crate::domain::error::{MigrateError, Result};
use crate::domain::record::{MappedRecord, RawRecord};
use crate::domain::seo_report::SeoCheckResult;

/// Compare each source record with its migrated counterpart on the
/// three SEO fields (slug/Handle, meta_title/SEO Title,
/// meta_description/SEO Description), in input order.
///
/// The sequences must be the aligned output of one migration run; an
/// empty side or a length mismatch is a precondition failure.
pub fn run_seo_check(
    source: &[RawRecord],
    mapped: &[MappedRecord],
) -> Result<Vec<SeoCheckResult>> {
    if source.is_empty() || mapped.is_empty() {
        return Err(MigrateError::Precondition(
            "nothing to check; run a migration first".to_string(),
        ));
    }

    if source.len() != mapped.len() {
        return Err(MigrateError::Precondition(format!(
            "source and migrated sets are misaligned: {} vs {} records",
            source.len(),
            mapped.len()
        )));
    }

    let results = source
        .iter()
        .zip(mapped)
        .map(|(raw, mapped)| SeoCheckResult {
            label: raw.display_name().to_string(),
            handle_match: raw.slug.as_deref() == Some(mapped.handle.as_str()),
            seo_title_match: raw.meta_title.as_deref() == Some(mapped.seo_title.as_str()),
            seo_description_match: raw.meta_description.as_deref()
                == Some(mapped.seo_description.as_str()),
        })
        .collect();

    Ok(results)
}

/// Render one report line per record, keyed by the product name.
pub fn format_report(results: &[SeoCheckResult]) -> String {
    results
        .iter()
        .map(|result| format!("{} -> {}", result.label, result.status()))
        .collect::<Vec<_>>()
        .join("\n")
}
