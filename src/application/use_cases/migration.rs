// ============================================================
// MIGRATION USE CASE
// ============================================================
// Map source catalog records into the storefront import schema

use crate::domain::error::{MigrateError, Result};
use crate::domain::record::{MappedRecord, RawRecord};

/// Map every source record into the import schema, one-to-one and in
/// order. Values are copied verbatim; `price` in particular is never
/// validated numerically.
///
/// Fails with `Input` when no records are loaded and with `Validation`
/// when a record is missing one of the seven consumed columns.
pub fn run_migration(source: &[RawRecord]) -> Result<Vec<MappedRecord>> {
    if source.is_empty() {
        return Err(MigrateError::Input(
            "no catalog records loaded; load a CSV or JSON file first".to_string(),
        ));
    }

    source
        .iter()
        .enumerate()
        .map(|(index, record)| map_record(record, index))
        .collect()
}

/// Fixed field dictionary, not user-configurable:
/// Handle←slug, Title←product_name, Body (HTML)←description,
/// Variant Price←price, Variant SKU←sku, SEO Title←meta_title,
/// SEO Description←meta_description.
fn map_record(record: &RawRecord, index: usize) -> Result<MappedRecord> {
    Ok(MappedRecord {
        handle: require(&record.slug, "slug", index)?,
        title: require(&record.product_name, "product_name", index)?,
        body_html: require(&record.description, "description", index)?,
        variant_price: require(&record.price, "price", index)?,
        variant_sku: require(&record.sku, "sku", index)?,
        seo_title: require(&record.meta_title, "meta_title", index)?,
        seo_description: require(&record.meta_description, "meta_description", index)?,
    })
}

fn require(value: &Option<String>, column: &str, index: usize) -> Result<String> {
    value.clone().ok_or_else(|| {
        MigrateError::Validation(format!(
            "record {}: missing required column '{}'",
            index + 1,
            column
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(n: usize) -> RawRecord {
        let mut record = RawRecord::default();
        record.insert("slug", format!("product-{}", n));
        record.insert("product_name", format!("Product {}", n));
        record.insert("description", format!("Description {}", n));
        record.insert("price", format!("{}", 100 * n));
        record.insert("sku", format!("SKU-{:03}", n));
        record.insert("meta_title", format!("Buy Product {}", n));
        record.insert("meta_description", format!("Shop product {}.", n));
        record
    }

    #[test]
    fn test_round_trip_length_and_handles() {
        let source: Vec<_> = (1..=3).map(product).collect();
        let mapped = run_migration(&source).unwrap();

        assert_eq!(mapped.len(), source.len());
        for (raw, mapped) in source.iter().zip(&mapped) {
            assert_eq!(raw.slug.as_deref(), Some(mapped.handle.as_str()));
            assert_eq!(raw.price.as_deref(), Some(mapped.variant_price.as_str()));
        }
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let mut record = product(1);
        record.insert("warehouse", "berlin".to_string());

        let mapped = run_migration(std::slice::from_ref(&record)).unwrap();
        let json = serde_json::to_string(&mapped[0]).unwrap();
        assert!(!json.contains("warehouse"));
    }

    #[test]
    fn test_empty_source_is_rejected() {
        let err = run_migration(&[]).unwrap_err();
        assert!(matches!(err, MigrateError::Input(_)));
    }

    #[test]
    fn test_missing_required_column_is_rejected() {
        let mut record = product(1);
        record.slug = None;

        let err = run_migration(std::slice::from_ref(&record)).unwrap_err();
        match err {
            MigrateError::Validation(msg) => {
                assert!(msg.contains("slug"));
                assert!(msg.contains("record 1"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_string_values_are_copied_verbatim() {
        let mut record = product(1);
        record.price = Some(String::new());

        let mapped = run_migration(std::slice::from_ref(&record)).unwrap();
        assert_eq!(mapped[0].variant_price, "");
    }
}
