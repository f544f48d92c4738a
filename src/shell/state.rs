use crate::modules::efficiency::core::config::EfficiencyConfig;
use crate::modules::idle_time::core::config::IdleTimeConfig;
use crate::shared::infrastructure::report_sink::ReportSink;
use crate::shell::config::ReportConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub idle_time: Arc<IdleTimeConfig>,
    pub efficiency: Arc<EfficiencyConfig>,
    pub report_sink: Arc<dyn ReportSink>,
}

impl AppState {
    pub fn new(config: ReportConfig, report_sink: Arc<dyn ReportSink>) -> Self {
        Self {
            idle_time: Arc::new(config.idle_time),
            efficiency: Arc::new(config.efficiency),
            report_sink,
        }
    }

    pub fn with_defaults(report_sink: Arc<dyn ReportSink>) -> Self {
        Self::new(ReportConfig::default(), report_sink)
    }
}
