// Extensive details sheet: one line per retained clock span.
//
// Responsibilities
// - Copy the day level metrics onto every countable span of that day.
// - Faulty spans show FAULTY DATA with empty metrics. Their feedback is still subject to
//   overrides.
// - Order lines by start date, then team member, both descending.

use crate::modules::idle_time::core::aggregate::DayKey;
use crate::modules::idle_time::core::config::IdleTimeConfig;
use crate::modules::idle_time::core::feedback::{Feedback, feedback};
use crate::modules::idle_time::core::shift::Overtime;
use crate::modules::idle_time::use_cases::extract_idle_data::extract::IdleTimeData;
use crate::shared::core::primitives::{serialize_option_round2, serialize_round2};
use crate::shared::infrastructure::report_sink::SheetRow;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::cmp::Reverse;

pub const SHEET_NAME: &str = "Extensive Details";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    #[serde(rename = "Job")]
    pub job: String,
    #[serde(rename = "Operation")]
    pub operation: String,
    #[serde(rename = "Team Member")]
    pub team_member: String,
    #[serde(rename = "Started On Date")]
    pub started_on_date: Option<NaiveDate>,
    #[serde(rename = "Started On Time")]
    pub started_on_time: Option<NaiveTime>,
    #[serde(rename = "Started On Week")]
    pub started_on_week: String,
    #[serde(rename = "Stopped On Date")]
    pub stopped_on_date: Option<NaiveDate>,
    #[serde(rename = "Stopped On Time")]
    pub stopped_on_time: Option<NaiveTime>,
    #[serde(rename = "Duration Hours", serialize_with = "serialize_round2")]
    pub duration_hours: f64,
    #[serde(rename = "Total Hours Per Day", serialize_with = "serialize_option_round2")]
    pub total_hours_per_day: Option<f64>,
    #[serde(rename = "Overtime")]
    pub overtime: Overtime,
    #[serde(rename = "Idle Hours", serialize_with = "serialize_option_round2")]
    pub idle_hours: Option<f64>,
    #[serde(rename = "Set Working Hours", serialize_with = "serialize_option_round2")]
    pub set_working_hours: Option<f64>,
    #[serde(rename = "Idle Time Percentage", serialize_with = "serialize_option_round2")]
    pub idle_time_percentage: Option<f64>,
    #[serde(rename = "Feedback")]
    pub feedback: Feedback,
}

impl SheetRow for DetailRow {
    const HEADERS: &'static [&'static str] = &[
        "Job",
        "Operation",
        "Team Member",
        "Started On Date",
        "Started On Time",
        "Started On Week",
        "Stopped On Date",
        "Stopped On Time",
        "Duration Hours",
        "Total Hours Per Day",
        "Overtime",
        "Idle Hours",
        "Set Working Hours",
        "Idle Time Percentage",
        "Feedback",
    ];
}

pub fn detail_rows(config: &IdleTimeConfig, data: &IdleTimeData) -> Vec<DetailRow> {
    let overrides = config.override_table();
    let mut rows: Vec<DetailRow> = data
        .records
        .iter()
        .map(|classified| {
            let record = &classified.record;
            let key = DayKey {
                team_member: record.team_member.clone(),
                date: record.started_on_date,
            };
            let day = data.days.get(&key).filter(|_| classified.counts_towards_hours());
            DetailRow {
                job: record.job.clone(),
                operation: record.operation.clone(),
                team_member: record.team_member.clone(),
                started_on_date: record.started_on_date,
                started_on_time: record.started_on_time,
                started_on_week: record.started_on_week.clone(),
                stopped_on_date: record.stopped_on_date,
                stopped_on_time: record.stopped_on_time,
                duration_hours: record.duration_hours,
                total_hours_per_day: day.map(|d| d.total_hours_per_day),
                overtime: day.map(|d| d.overtime).unwrap_or(Overtime::FaultyData),
                idle_hours: day.and_then(|d| d.idle_hours),
                set_working_hours: day.and_then(|d| d.set_working_hours),
                idle_time_percentage: day.and_then(|d| d.idle_time_percentage),
                feedback: match day {
                    Some(d) => d.feedback.clone(),
                    None => feedback(
                        None,
                        &record.team_member,
                        record.started_on_date,
                        &overrides,
                        &config.thresholds,
                    ),
                },
            }
        })
        .collect();
    rows.sort_by_key(|row| Reverse((row.started_on_date, row.team_member.clone())));
    rows
}
