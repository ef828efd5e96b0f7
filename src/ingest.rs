// Raw row ingestion: loosely typed JSON rows into the typed Dataset
use crate::model::{Dataset, SaleRecord, SchemaError, REQUIRED_COLUMNS};
use crate::utils::parse_date;
use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

/// Turns deserialized rows into a [`Dataset`], checking the schema first.
///
/// A required column counts as present when at least one row carries the key;
/// every absent column is reported in a single error before any cell is
/// parsed. A `null` or absent cell becomes `None`, so value-level gaps are
/// kept rather than rejected.
pub fn rows_to_dataset(rows: &[Value]) -> Result<Dataset, SchemaError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !rows.iter().any(|row| row.get(**column).is_some()))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError::MissingColumns(missing));
    }

    let mut records = Vec::with_capacity(rows.len());
    for (row_idx, row) in rows.iter().enumerate() {
        records.push(SaleRecord::new(
            date_cell(row, "date_sale", row_idx)?,
            date_cell(row, "birth_date", row_idx)?,
            number_cell(row, "price", row_idx)?,
            number_cell(row, "sold", row_idx)?,
            number_cell(row, "individual", row_idx)?,
        ));
    }
    debug!("ingested {} records", records.len());

    Ok(Dataset {
        records,
        columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
    })
}

fn date_cell(row: &Value, column: &str, row_idx: usize) -> Result<Option<NaiveDate>, SchemaError> {
    match row.get(column) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => match parse_date(text) {
            Some(date) => Ok(Some(date)),
            None => Err(invalid(column, row_idx, format!("`{text}` is not a YYYY-MM-DD date"))),
        },
        Some(other) => Err(invalid(column, row_idx, format!("expected a date string, got {other}"))),
    }
}

fn number_cell(row: &Value, column: &str, row_idx: usize) -> Result<Option<f64>, SchemaError> {
    match row.get(column) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => Ok(number.as_f64()),
        Some(other) => Err(invalid(column, row_idx, format!("expected a number, got {other}"))),
    }
}

fn invalid(column: &str, row: usize, detail: String) -> SchemaError {
    SchemaError::InvalidColumn {
        column: column.to_string(),
        row,
        detail,
    }
}
