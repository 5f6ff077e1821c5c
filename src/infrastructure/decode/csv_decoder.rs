// ============================================================
// CSV DECODER
// ============================================================
// Header-driven CSV decoding with delimiter detection

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::domain::error::{MigrateError, Result};
use crate::domain::record::RawRecord;

/// CSV decoder. Quoting-aware: a quoted field may contain the
/// delimiter, unlike a naive line splitter.
pub struct CsvDecoder {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from headers and values
    trim: bool,
}

impl Default for CsvDecoder {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether to trim whitespace
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Decode CSV content into source records. The first line is the
    /// header row; each following line becomes one record. Rows shorter
    /// than the header leave the trailing columns absent.
    pub fn decode(&self, content: &str) -> Result<Vec<RawRecord>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with fewer values than headers
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| MigrateError::Parse(format!("failed to read CSV headers: {}", e)))?
            .clone();

        let mut records = Vec::new();

        for (index, row) in reader.records().enumerate() {
            let row = row.map_err(|e| {
                MigrateError::Parse(format!("failed to read CSV row {}: {}", index + 1, e))
            })?;
            records.push(self.decode_row(&headers, &row));
        }

        Ok(records)
    }

    /// Build one record from a data row, pairing values with headers by
    /// position. Missing trailing values stay absent.
    fn decode_row(&self, headers: &StringRecord, row: &StringRecord) -> RawRecord {
        let mut record = RawRecord::default();

        for (idx, header) in headers.iter().enumerate() {
            if let Some(value) = row.get(idx) {
                record.insert(header, value.to_string());
            }
        }

        record
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe) by
    /// scoring each candidate on frequency and per-line consistency over
    /// a sample of the first lines.
    pub fn detect_delimiter(content: &str) -> u8 {
        let candidates = [b',', b';', b'\t', b'|'];
        let sample_lines: Vec<_> = content.lines().take(10).collect();

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        for &delimiter in &candidates {
            let counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| line.bytes().filter(|&b| b == delimiter).count())
                .collect();

            if counts.is_empty() {
                continue;
            }

            let avg = counts.iter().sum::<usize>() as f32 / counts.len() as f32;
            let variance = counts
                .iter()
                .map(|&n| (n as f32 - avg).powi(2))
                .sum::<f32>()
                / counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());

            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }
}
