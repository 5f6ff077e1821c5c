// ============================================================
// INPUT DECODING
// ============================================================
// Turn raw catalog text (CSV or JSON) into source records

mod csv_decoder;
mod json_decoder;

pub use csv_decoder::CsvDecoder;
pub use json_decoder::decode_json;

use std::path::Path;

use crate::domain::error::{MigrateError, Result};
use crate::domain::record::RawRecord;

/// Supported catalog input formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(InputFormat::Csv),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(InputFormat::Json),
            _ => Err(MigrateError::Parse(format!(
                "unsupported input file '{}'; expected .csv or .json",
                path.display()
            ))),
        }
    }
}

/// Decode raw text into source records. CSV goes through the
/// delimiter-detecting decoder; JSON bypasses it entirely.
pub fn decode_records(content: &str, format: InputFormat) -> Result<Vec<RawRecord>> {
    match format {
        InputFormat::Csv => {
            let delimiter = CsvDecoder::detect_delimiter(content);
            CsvDecoder::new().with_delimiter(delimiter).decode(content)
        }
        InputFormat::Json => decode_json(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            InputFormat::from_path(Path::new("store.csv")).unwrap(),
            InputFormat::Csv
        );
        assert_eq!(
            InputFormat::from_path(Path::new("export.JSON")).unwrap(),
            InputFormat::Json
        );
        assert!(InputFormat::from_path(Path::new("store.xlsx")).is_err());
        assert!(InputFormat::from_path(Path::new("noextension")).is_err());
    }
}
