// Report output port.
//
// Purpose
// - Describe where finished report sheets go, without deciding how they are stored.
//
// Responsibilities
// - Render typed report rows into a named CSV sheet.
// - Let the composition root pick a concrete sink (a directory on disk, memory for tests).

pub mod csv_directory;
pub mod in_memory;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

/// A report row with a fixed, externally visible column order.
///
/// `HEADERS` must list the serialized field names in declaration order.
pub trait SheetRow: Serialize {
    const HEADERS: &'static [&'static str];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub rows: usize,
    pub content: Vec<u8>,
}

impl Sheet {
    pub fn from_rows<T: SheetRow>(name: impl Into<String>, rows: &[T]) -> Result<Self, SinkError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(T::HEADERS)?;
        for row in rows {
            writer.serialize(row)?;
        }
        let content = writer
            .into_inner()
            .map_err(|err| SinkError::Backend(err.to_string()))?;
        Ok(Self {
            name: name.into(),
            rows: rows.len(),
            content,
        })
    }

    pub fn as_text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn write_sheet(&self, sheet: Sheet) -> Result<(), SinkError>;
}
