// Mean idle time per team member.
//
// Purpose
// - Average each team member's day metrics across the reporting range and label the result.
//
// Responsibilities
// - Only days with a baseline take part. A day made of faulty spans has nothing to average.
// - The range runs from the earliest stop date to the latest start date of the retained spans.

use crate::modules::idle_time::core::config::IdleTimeConfig;
use crate::modules::idle_time::core::feedback::{Feedback, classify_percentage};
use crate::modules::idle_time::use_cases::extract_idle_data::extract::IdleTimeData;
use crate::shared::core::primitives::{serialize_option_round2, serialize_round2};
use crate::shared::infrastructure::report_sink::SheetRow;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

pub const SHEET_NAME: &str = "Mean Idle Time";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeanIdleTimeRow {
    #[serde(rename = "Team Member")]
    pub team_member: String,
    #[serde(rename = "Mean Total Hours Per Day", serialize_with = "serialize_round2")]
    pub mean_total_hours_per_day: f64,
    #[serde(rename = "Mean Idle Hours", serialize_with = "serialize_round2")]
    pub mean_idle_hours: f64,
    #[serde(rename = "Mean Idle Time (%)", serialize_with = "serialize_option_round2")]
    pub mean_idle_time_percentage: Option<f64>,
    #[serde(rename = "Feedback")]
    pub feedback: Feedback,
}

impl SheetRow for MeanIdleTimeRow {
    const HEADERS: &'static [&'static str] = &[
        "Team Member",
        "Mean Total Hours Per Day",
        "Mean Idle Hours",
        "Mean Idle Time (%)",
        "Feedback",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeanIdleTimeTable {
    pub title: String,
    pub earliest_date: Option<NaiveDate>,
    pub latest_date: Option<NaiveDate>,
    pub rows: Vec<MeanIdleTimeRow>,
}

#[derive(Default)]
struct Sums {
    days: usize,
    total_hours: f64,
    idle_hours: f64,
    percentage: f64,
    percentage_days: usize,
}

pub fn mean_idle_time(config: &IdleTimeConfig, data: &IdleTimeData) -> MeanIdleTimeTable {
    let mut sums: BTreeMap<&str, Sums> = BTreeMap::new();
    for day in data.days.values() {
        let Some(idle) = day.idle_hours else {
            continue;
        };
        let entry = sums.entry(day.team_member.as_str()).or_default();
        entry.days += 1;
        entry.total_hours += day.total_hours_per_day;
        entry.idle_hours += idle;
        if let Some(pct) = day.idle_time_percentage {
            entry.percentage += pct;
            entry.percentage_days += 1;
        }
    }

    let rows = sums
        .into_iter()
        .map(|(team_member, s)| {
            let days = s.days as f64;
            let percentage =
                (s.percentage_days > 0).then(|| s.percentage / s.percentage_days as f64);
            MeanIdleTimeRow {
                team_member: team_member.to_string(),
                mean_total_hours_per_day: s.total_hours / days,
                mean_idle_hours: s.idle_hours / days,
                mean_idle_time_percentage: percentage,
                feedback: classify_percentage(percentage, &config.thresholds),
            }
        })
        .collect();

    let earliest_date = data.records.iter().filter_map(|c| c.record.stopped_on_date).min();
    let latest_date = data.records.iter().filter_map(|c| c.record.started_on_date).max();
    let title = match (earliest_date, latest_date) {
        (Some(from), Some(to)) => format!("Mean Idle Time Percentage from {from} to {to}"),
        _ => "Mean Idle Time Percentage".to_string(),
    };

    MeanIdleTimeTable {
        title,
        earliest_date,
        latest_date,
        rows,
    }
}
