// Writes every sheet as `<directory>/<sheet name>.csv`.

use crate::shared::infrastructure::report_sink::{ReportSink, Sheet, SinkError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CsvDirectorySink {
    directory: PathBuf,
}

impl CsvDirectorySink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn path_for(&self, sheet_name: &str) -> PathBuf {
        self.directory.join(format!("{sheet_name}.csv"))
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

#[async_trait]
impl ReportSink for CsvDirectorySink {
    async fn write_sheet(&self, sheet: Sheet) -> Result<(), SinkError> {
        tokio::fs::create_dir_all(&self.directory).await?;
        let path = self.path_for(&sheet.name);
        tokio::fs::write(&path, &sheet.content).await?;
        tracing::info!(
            sheet = %sheet.name,
            rows = sheet.rows,
            path = %path.display(),
            "sheet written"
        );
        Ok(())
    }
}
