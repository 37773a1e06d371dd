use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneRow {
    #[serde(rename = "phoneNumber", default)]
    pub phone_number: String,
}

impl PhoneRow {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
        }
    }
}

const PHONE_COLUMN: &str = "phoneNumber";

/// Reads rows from a CSV with a header line. Blank lines are skipped and
/// columns other than `phoneNumber` are ignored. Short rows are kept; a row
/// without a `phoneNumber` value gets an empty number.
pub fn read_phone_rows<R: Read>(reader: R) -> AppResult<Vec<PhoneRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let phone_index = csv_reader
        .headers()?
        .iter()
        .position(|header| header == PHONE_COLUMN);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let phone_number = phone_index
            .and_then(|index| record.get(index))
            .unwrap_or("");
        rows.push(PhoneRow::new(phone_number));
    }
    Ok(rows)
}

pub fn read_phone_rows_from_path(path: impl AsRef<Path>) -> AppResult<Vec<PhoneRow>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| AppError::validation(format!("Cannot open {}: {}", path.display(), e)))?;
    read_phone_rows(file)
}
