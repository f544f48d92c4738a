// The four sheets of an idle time summary.
//
// Purpose
// - Run the day, week and person roll ups over extracted spans and shape them into
//   report rows.
//
// Responsibilities
// - Weeks and people are built from days, never from spans, so faulty spans cannot leak
//   into any total.

use crate::modules::idle_time::core::aggregate::{DayAggregate, aggregate_people, aggregate_weeks};
use crate::modules::idle_time::core::config::IdleTimeConfig;
use crate::modules::idle_time::use_cases::create_summary::daily::{
    self, DailySummaryRow, daily_rows,
};
use crate::modules::idle_time::use_cases::create_summary::overall::{
    self, OverallSummaryRow, overall_rows,
};
use crate::modules::idle_time::use_cases::create_summary::weekly::{
    self, WeeklySummaryRow, weekly_rows,
};
use crate::modules::idle_time::use_cases::extract_idle_data::detail::{self, DetailRow, detail_rows};
use crate::modules::idle_time::use_cases::extract_idle_data::extract::IdleTimeData;
use crate::shared::infrastructure::report_sink::{Sheet, SinkError};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdleTimeSummary {
    pub details: Vec<DetailRow>,
    pub daily: Vec<DailySummaryRow>,
    pub weekly: Vec<WeeklySummaryRow>,
    pub overall: Vec<OverallSummaryRow>,
}

impl IdleTimeSummary {
    /// Sheets in workbook order.
    pub fn sheets(&self) -> Result<Vec<Sheet>, SinkError> {
        Ok(vec![
            Sheet::from_rows(detail::SHEET_NAME, &self.details)?,
            Sheet::from_rows(daily::SHEET_NAME, &self.daily)?,
            Sheet::from_rows(weekly::SHEET_NAME, &self.weekly)?,
            Sheet::from_rows(overall::SHEET_NAME, &self.overall)?,
        ])
    }
}

pub fn build_summary(config: &IdleTimeConfig, data: &IdleTimeData) -> IdleTimeSummary {
    let days: Vec<&DayAggregate> = data.days.values().collect();
    let weeks = aggregate_weeks(config, days.iter().copied());
    let people = aggregate_people(config, &days, &weeks);

    IdleTimeSummary {
        details: detail_rows(config, data),
        daily: daily_rows(days.iter().copied(), &people),
        weekly: weekly_rows(&weeks, &people),
        overall: overall_rows(&people),
    }
}
