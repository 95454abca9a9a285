use crate::csv_processor::handle::Table;
use crate::csv_processor::record_reader::{RecordRead, RecordReader};
use crate::utils::{Result, TableOptions};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSummary {
    pub total_rows: usize,
    pub total_columns: usize,
    pub column_names: Vec<String>,
    pub file_size_bytes: u64,
    pub sample_data: Vec<JsonValue>,
}

/// Scans a table once and reports its shape.
///
/// When `options` carries no field names the first line is taken as the
/// header and is not counted as a row.
pub fn analyze_table(
    path: impl AsRef<Path>,
    options: TableOptions,
    sample_rows: usize,
) -> Result<TableSummary> {
    let path = path.as_ref();
    let discover = options.fieldnames.resolve(&options.delimiter).is_empty();

    let mut reader = RecordReader::try_open(path, options)?;
    if discover {
        reader.read_fieldnames()?;
    }
    let column_names = reader.fieldnames().to_vec();

    let mut total_rows = 0;
    let mut sample_data = Vec::with_capacity(sample_rows);
    for record in reader.records() {
        let record = record?;
        if sample_data.len() < sample_rows {
            sample_data.push(serde_json::to_value(&record)?);
        }
        total_rows += 1;
    }

    let file_size_bytes = std::fs::metadata(path)?.len();
    tracing::debug!(path = %path.display(), total_rows, "analyzed table");

    Ok(TableSummary {
        total_rows,
        total_columns: column_names.len(),
        column_names,
        file_size_bytes,
        sample_data,
    })
}
