use crate::modules::idle_time::core::config::IdleTimeConfig;
use crate::modules::idle_time::use_cases::extract_idle_data::extract::extract_idle_data;
use crate::modules::idle_time::use_cases::mean_idle_time::projection::{
    MeanIdleTimeTable, SHEET_NAME, mean_idle_time,
};
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::table::InputTable;
use crate::shared::infrastructure::report_sink::{ReportSink, Sheet};
use std::sync::Arc;

pub struct MeanIdleTimeHandler<TSink>
where
    TSink: ReportSink + ?Sized + 'static,
{
    config: Arc<IdleTimeConfig>,
    sink: Arc<TSink>,
}

impl<TSink> MeanIdleTimeHandler<TSink>
where
    TSink: ReportSink + ?Sized + 'static,
{
    pub fn new(config: Arc<IdleTimeConfig>, sink: Arc<TSink>) -> Self {
        Self { config, sink }
    }

    pub async fn handle(&self, table: &InputTable) -> Result<MeanIdleTimeTable, ApplicationError> {
        let data = extract_idle_data(table, &self.config)?;
        let mean = mean_idle_time(&self.config, &data);
        self.sink
            .write_sheet(Sheet::from_rows(SHEET_NAME, &mean.rows)?)
            .await?;
        tracing::info!(
            title = %mean.title,
            team_members = mean.rows.len(),
            "mean idle time written"
        );
        Ok(mean)
    }
}
