use crate::modules::idle_time::core::config::IdleTimeConfig;
use crate::modules::idle_time::use_cases::create_summary::summary::{IdleTimeSummary, build_summary};
use crate::modules::idle_time::use_cases::extract_idle_data::extract::extract_idle_data;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::table::InputTable;
use crate::shared::infrastructure::report_sink::ReportSink;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

pub struct CreateSummaryHandler<TSink>
where
    TSink: ReportSink + ?Sized + 'static,
{
    config: Arc<IdleTimeConfig>,
    sink: Arc<TSink>,
}

impl<TSink> CreateSummaryHandler<TSink>
where
    TSink: ReportSink + ?Sized + 'static,
{
    pub fn new(config: Arc<IdleTimeConfig>, sink: Arc<TSink>) -> Self {
        Self { config, sink }
    }

    /// Builds the summary and writes its sheets. A failing sheet stops the run.
    pub async fn handle(&self, table: &InputTable) -> Result<IdleTimeSummary, ApplicationError> {
        let report_id = Uuid::now_v7();
        let span = tracing::info_span!("idle_time_summary", %report_id, rows = table.len());

        async {
            let data = extract_idle_data(table, &self.config)?;
            let summary = build_summary(&self.config, &data);
            for sheet in summary.sheets()? {
                tracing::debug!(sheet = %sheet.name, rows = sheet.rows, "writing sheet");
                self.sink.write_sheet(sheet).await?;
            }
            tracing::info!(
                team_members = summary.overall.len(),
                days = summary.daily.len(),
                "idle time summary written"
            );
            Ok::<_, ApplicationError>(summary)
        }
        .instrument(span)
        .await
    }
}
