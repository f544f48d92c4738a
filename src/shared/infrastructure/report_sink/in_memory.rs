use crate::shared::infrastructure::report_sink::{ReportSink, Sheet, SinkError};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryReportSink {
    pub sheets: Mutex<Vec<Sheet>>,
    is_offline: bool,
}

impl InMemoryReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn sheet(&self, name: &str) -> Option<Sheet> {
        self.sheets
            .lock()
            .await
            .iter()
            .find(|sheet| sheet.name == name)
            .cloned()
    }
}

#[async_trait::async_trait]
impl ReportSink for InMemoryReportSink {
    async fn write_sheet(&self, sheet: Sheet) -> Result<(), SinkError> {
        if self.is_offline {
            return Err(SinkError::Backend("Report sink offline".into()));
        }
        self.sheets.lock().await.push(sheet);
        Ok(())
    }
}
