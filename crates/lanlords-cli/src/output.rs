//! Output renderers and formatting helpers for CLI commands.

use std::path::Path;

use anyhow::anyhow;
use lanlords_config::ConfigDocument;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

/// Render a decoded JSON array of uniform mapping records.
///
/// Table columns are the record keys in order of first appearance across
/// the whole array; missing keys render as empty cells.
pub(crate) fn render_records(records: &Value, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            let text = serde_json::to_string_pretty(records)
                .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
            println!("{text}");
        }
        OutputFormat::Table => {
            let rows = records
                .as_array()
                .ok_or_else(|| CliError::failure(anyhow!("expected a JSON array of records")))?;
            if rows.is_empty() {
                return Ok(());
            }

            let columns = collect_columns(rows)?;
            let mut widths: Vec<usize> = columns.iter().map(String::len).collect();
            let mut table: Vec<Vec<String>> = Vec::with_capacity(rows.len());
            for row in rows {
                let cells: Vec<String> = columns
                    .iter()
                    .map(|column| cell_text(row.get(column.as_str())))
                    .collect();
                for (width, cell) in widths.iter_mut().zip(&cells) {
                    *width = (*width).max(cell.len());
                }
                table.push(cells);
            }

            println!("{}", format_row(&columns, &widths));
            for cells in &table {
                println!("{}", format_row(cells, &widths));
            }
        }
    }
    Ok(())
}

/// Render the configuration document for `config show`.
pub(crate) fn render_config(path: &Path, document: &ConfigDocument) {
    println!("{}:", path.display());
    println!();
    let width = document
        .sections()
        .flat_map(|section| {
            section
                .entries()
                .map(|(key, _)| section.name().len() + 1 + key.len())
        })
        .max()
        .unwrap_or(0);
    for section in document.sections() {
        for (key, value) in section.entries() {
            let dotted = format!("{}.{key}", section.name());
            println!("  > {dotted:<width$}   {value}");
        }
    }
    println!();
}

fn collect_columns(rows: &[Value]) -> CliResult<Vec<String>> {
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        let record = row
            .as_object()
            .ok_or_else(|| CliError::failure(anyhow!("expected every record to be a mapping")))?;
        for key in record.keys() {
            if !columns.iter().any(|column| column == key) {
                columns.push(key.clone());
            }
        }
    }
    Ok(columns)
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths.iter().copied()).enumerate() {
        if index > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!("{cell:<width$}"));
    }
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn columns_follow_first_appearance_order() {
        let rows = vec![
            json!({"name": "factorio", "port": 34197}),
            json!({"name": "valheim", "port": 2456, "state": "running"}),
        ];
        let columns = collect_columns(&rows).expect("uniform records");
        assert_eq!(columns, vec!["name", "port", "state"]);
    }

    #[test]
    fn non_mapping_record_is_rejected() {
        let rows = vec![json!("just a string")];
        let err = collect_columns(&rows).expect_err("should fail");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn cells_render_scalars_without_quotes() {
        assert_eq!(cell_text(Some(&json!("plain"))), "plain");
        assert_eq!(cell_text(Some(&json!(42))), "42");
        assert_eq!(cell_text(Some(&json!(true))), "true");
        assert_eq!(cell_text(Some(&json!(null))), "");
        assert_eq!(cell_text(None), "");
    }

    #[test]
    fn rows_are_padded_to_column_width() {
        let cells = vec!["a".to_string(), "bb".to_string()];
        let widths = vec![4, 2];
        assert_eq!(format_row(&cells, &widths), "a     bb");
    }

    #[test]
    fn render_table_accepts_record_array() {
        let records = json!([{"a": 1}, {"a": 2}]);
        render_records(&records, OutputFormat::Table).expect("table should render");
        render_records(&records, OutputFormat::Json).expect("json should render");
    }

    #[test]
    fn render_table_rejects_non_array() {
        let records = json!({"a": 1});
        let err = render_records(&records, OutputFormat::Table).expect_err("should fail");
        assert_eq!(err.exit_code(), 1);
    }
}
