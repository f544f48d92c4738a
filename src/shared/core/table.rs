// Tabular input: a CSV export with a header row.
//
// Purpose
// - Validate that every column a report needs is present before any row is looked at.
// - Deserialize rows into the report's raw row type by header name.
//
// Boundaries
// - No business rules. Cell contents stay as text and are parsed by the use cases.

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone)]
pub struct InputTable {
    headers: csv::StringRecord,
    records: Vec<csv::StringRecord>,
}

impl InputTable {
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, InputError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);
        let headers = reader.headers()?.clone();
        let records = reader.records().collect::<Result<Vec<_>, _>>()?;
        Ok(Self { headers, records })
    }

    pub fn from_csv_str(input: &str) -> Result<Self, InputError> {
        Self::from_reader(input.as_bytes())
    }

    pub fn from_path(path: &std::path::Path) -> Result<Self, InputError> {
        let file = std::fs::File::open(path).map_err(csv::Error::from)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header == name)
    }

    /// Fails with every missing column at once, in the order they were requested.
    pub fn require_columns(&self, required: &[&str]) -> Result<(), InputError> {
        let missing: Vec<String> = required
            .iter()
            .filter(|column| !self.has_column(column))
            .map(|column| column.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(InputError::MissingColumns { columns: missing })
        }
    }

    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Vec<T>, InputError> {
        self.records
            .iter()
            .map(|record| record.deserialize(Some(&self.headers)).map_err(InputError::from))
            .collect()
    }
}
