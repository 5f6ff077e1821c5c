// ============================================================
// EXPORT USE CASE
// ============================================================
// Serialize migrated records and provide the sample catalog

use crate::domain::error::{MigrateError, Result};
use crate::domain::record::MappedRecord;

/// Default artifact name for the exported migration result.
pub const MIGRATED_FILE_NAME: &str = "migrated_data.json";

/// Default artifact name for the sample catalog.
pub const SAMPLE_FILE_NAME: &str = "sample_store_data.csv";

/// A small catalog in the exact shape the CSV decoder expects.
pub const SAMPLE_CSV: &str = "\
product_id,product_name,description,price,sku,slug,meta_title,meta_description
1,Men Cotton Shirt,100% cotton slim fit shirt,899,SKU-001,men-cotton-shirt,Buy Men Cotton Shirt,Shop the latest men cotton shirts.
2,Women Denim Jacket,Classic blue denim jacket,1299,SKU-002,women-denim-jacket,Women Denim Jacket Online,Trendy denim jackets for women.
";

/// Serialize the migrated set as pretty-printed JSON (2-space indent).
/// The output is deterministic: the same records always produce
/// byte-identical text.
pub fn export_json(mapped: &[MappedRecord]) -> Result<String> {
    if mapped.is_empty() {
        return Err(MigrateError::Input(
            "no migrated records to export; run a migration first".to_string(),
        ));
    }

    serde_json::to_string_pretty(mapped)
        .map_err(|e| MigrateError::Precondition(format!("failed to serialize records: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::migration::run_migration;
    use crate::infrastructure::decode::CsvDecoder;

    #[test]
    fn test_sample_catalog_decodes_cleanly() {
        let records = CsvDecoder::new().decode(SAMPLE_CSV).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].slug.as_deref(), Some("men-cotton-shirt"));
        assert_eq!(records[1].sku.as_deref(), Some("SKU-002"));
        assert_eq!(records[0].extra.get("product_id").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_export_is_pretty_printed_with_two_spaces() {
        let source = CsvDecoder::new().decode(SAMPLE_CSV).unwrap();
        let mapped = run_migration(&source).unwrap();

        let json = export_json(&mapped).unwrap();

        assert!(json.starts_with("[\n  {\n    \"Handle\":"));
        assert!(json.contains("\"Variant Price\": \"899\""));
    }

    #[test]
    fn test_export_is_idempotent() {
        let source = CsvDecoder::new().decode(SAMPLE_CSV).unwrap();
        let mapped = run_migration(&source).unwrap();

        assert_eq!(export_json(&mapped).unwrap(), export_json(&mapped).unwrap());
    }

    #[test]
    fn test_export_without_migration_is_rejected() {
        assert!(matches!(export_json(&[]), Err(MigrateError::Input(_))));
    }
}
