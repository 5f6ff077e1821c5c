// ============================================================
// JSON DECODER
// ============================================================
// Pass-through for catalogs already exported as JSON

use crate::domain::error::{MigrateError, Result};
use crate::domain::record::RawRecord;

/// Parse the text as a JSON array of flat objects. Known keys fill the
/// typed record fields; unknown keys are preserved in `extra`. Anything
/// that is not an array of string-valued objects is a parse failure.
pub fn decode_json(content: &str) -> Result<Vec<RawRecord>> {
    serde_json::from_str(content)
        .map_err(|e| MigrateError::Parse(format!("expected a JSON array of flat objects: {}", e)))
}
