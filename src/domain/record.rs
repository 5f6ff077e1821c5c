// ============================================================
// RECORD TYPES
// ============================================================
// Source catalog rows and their storefront-import counterparts

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Source columns the migration consumes, in preview order.
pub const CORE_COLUMNS: [&str; 7] = [
    "slug",
    "product_name",
    "description",
    "price",
    "sku",
    "meta_title",
    "meta_description",
];

/// One row/object from an uploaded catalog, keyed by the original
/// column names. A field is `None` when the input row did not carry
/// that column (e.g. a short CSV row).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Raw price string; never parsed or validated numerically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    /// Columns the migration does not consume, preserved verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl RawRecord {
    /// Store a value under a source column name. Known columns fill the
    /// typed fields; anything else lands in `extra`.
    pub fn insert(&mut self, column: &str, value: String) {
        match column {
            "slug" => self.slug = Some(value),
            "product_name" => self.product_name = Some(value),
            "description" => self.description = Some(value),
            "price" => self.price = Some(value),
            "sku" => self.sku = Some(value),
            "meta_title" => self.meta_title = Some(value),
            "meta_description" => self.meta_description = Some(value),
            _ => {
                self.extra.insert(column.to_string(), value);
            }
        }
    }

    /// Look up a value by its original column name.
    pub fn get(&self, column: &str) -> Option<&str> {
        match column {
            "slug" => self.slug.as_deref(),
            "product_name" => self.product_name.as_deref(),
            "description" => self.description.as_deref(),
            "price" => self.price.as_deref(),
            "sku" => self.sku.as_deref(),
            "meta_title" => self.meta_title.as_deref(),
            "meta_description" => self.meta_description.as_deref(),
            _ => self.extra.get(column).map(String::as_str),
        }
    }

    /// Human-readable label for reports. Duplicate names are allowed and
    /// not deduplicated.
    pub fn display_name(&self) -> &str {
        self.product_name.as_deref().unwrap_or("")
    }
}

/// One row in the fixed storefront import schema, derived from exactly
/// one source record. Serialized key order matches declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedRecord {
    #[serde(rename = "Handle")]
    pub handle: String,

    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Body (HTML)")]
    pub body_html: String,

    #[serde(rename = "Variant Price")]
    pub variant_price: String,

    #[serde(rename = "Variant SKU")]
    pub variant_sku: String,

    #[serde(rename = "SEO Title")]
    pub seo_title: String,

    #[serde(rename = "SEO Description")]
    pub seo_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_routes_known_columns() {
        let mut record = RawRecord::default();
        record.insert("slug", "men-cotton-shirt".to_string());
        record.insert("color", "blue".to_string());

        assert_eq!(record.slug.as_deref(), Some("men-cotton-shirt"));
        assert_eq!(record.extra.get("color").map(String::as_str), Some("blue"));
        assert_eq!(record.get("color"), Some("blue"));
    }

    #[test]
    fn test_mapped_record_uses_import_schema_keys() {
        let mapped = MappedRecord {
            handle: "men-cotton-shirt".to_string(),
            title: "Men Cotton Shirt".to_string(),
            body_html: "100% cotton slim fit shirt".to_string(),
            variant_price: "899".to_string(),
            variant_sku: "SKU-001".to_string(),
            seo_title: "Buy Men Cotton Shirt".to_string(),
            seo_description: "Shop the latest men cotton shirts.".to_string(),
        };

        let json = serde_json::to_string(&mapped).unwrap();
        assert!(json.contains("\"Handle\":\"men-cotton-shirt\""));
        assert!(json.contains("\"Body (HTML)\""));
        assert!(json.contains("\"Variant SKU\":\"SKU-001\""));
        assert!(json.contains("\"SEO Description\""));
    }
}
