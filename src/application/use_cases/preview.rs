// ============================================================
// PREVIEW USE CASE
// ============================================================
// Render loaded source records as an aligned text table

use std::collections::BTreeSet;

use crate::domain::error::{MigrateError, Result};
use crate::domain::record::{RawRecord, CORE_COLUMNS};

/// Render up to `limit` source records as a padded text table. Columns
/// are the seven consumed ones followed by any extra columns observed,
/// alphabetically. Absent fields render as empty cells.
pub fn render_table(records: &[RawRecord], limit: usize) -> Result<String> {
    if records.is_empty() {
        return Err(MigrateError::Input(
            "no catalog records loaded; load a CSV or JSON file first".to_string(),
        ));
    }

    let shown = &records[..records.len().min(limit)];

    let mut columns: Vec<String> = CORE_COLUMNS.iter().map(|c| c.to_string()).collect();
    let extras: BTreeSet<&String> = shown.iter().flat_map(|r| r.extra.keys()).collect();
    columns.extend(extras.into_iter().cloned());

    let rows: Vec<Vec<&str>> = shown
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| record.get(column).unwrap_or(""))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = columns.iter().map(String::len).collect();
    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(
        &columns.iter().map(String::as_str).collect::<Vec<_>>(),
        &widths,
    ));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        lines.push(format_row(row, &widths));
    }

    Ok(lines.join("\n"))
}

fn format_row(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::decode::CsvDecoder;

    const CATALOG: &str = "\
slug,product_name,description,price,sku,meta_title,meta_description,stock
men-cotton-shirt,Men Cotton Shirt,Slim fit shirt,899,SKU-001,Buy It,Shop shirts.,14
women-denim-jacket,Women Denim Jacket,Blue denim jacket,1299,SKU-002,Jackets Online,Trendy jackets.,3";

    #[test]
    fn test_table_lists_core_then_extra_columns() {
        let records = CsvDecoder::new().decode(CATALOG).unwrap();
        let table = render_table(&records, 10).unwrap();

        let header = table.lines().next().unwrap();
        assert!(header.starts_with("slug"));
        assert!(header.contains("meta_description"));
        assert!(header.trim_end().ends_with("stock"));
    }

    #[test]
    fn test_table_respects_limit() {
        let records = CsvDecoder::new().decode(CATALOG).unwrap();
        let table = render_table(&records, 1).unwrap();

        // header + separator + one record
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("men-cotton-shirt"));
        assert!(!table.contains("women-denim-jacket"));
    }

    #[test]
    fn test_absent_fields_render_as_empty_cells() {
        let records = CsvDecoder::new().decode("slug,price\nshirt").unwrap();
        let table = render_table(&records, 10).unwrap();

        assert!(table.contains("shirt"));
        assert_eq!(table.lines().count(), 3);
    }

    #[test]
    fn test_empty_records_are_rejected() {
        assert!(matches!(render_table(&[], 10), Err(MigrateError::Input(_))));
    }
}
