use crate::modules::idle_time::core::aggregate::{DayAggregate, PersonOverallAggregate};
use crate::modules::idle_time::core::dominant::OverallFeedback;
use crate::modules::idle_time::core::feedback::Feedback;
use crate::modules::idle_time::core::shift::Overtime;
use crate::shared::core::primitives::{serialize_option_round2, serialize_round2};
use crate::shared::infrastructure::report_sink::SheetRow;
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;

pub const SHEET_NAME: &str = "Daily Summary";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummaryRow {
    #[serde(rename = "Team Member")]
    pub team_member: String,
    #[serde(rename = "Started On Date")]
    pub started_on_date: Option<NaiveDate>,
    #[serde(rename = "Started On Week")]
    pub started_on_week: String,
    #[serde(rename = "Total Hours Per Day", serialize_with = "serialize_round2")]
    pub total_hours_per_day: f64,
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
    #[serde(rename = "Daily Overall Feedback")]
    pub daily_overall_feedback: OverallFeedback,
}

impl SheetRow for DailySummaryRow {
    const HEADERS: &'static [&'static str] = &[
        "Team Member",
        "Started On Date",
        "Started On Week",
        "Total Hours Per Day",
        "Overtime",
        "Idle Hours",
        "Set Working Hours",
        "Idle Time Percentage",
        "Feedback",
        "Daily Overall Feedback",
    ];
}

/// One line per team member and day, newest day first.
pub fn daily_rows<'a, I>(days: I, people: &[PersonOverallAggregate]) -> Vec<DailySummaryRow>
where
    I: IntoIterator<Item = &'a DayAggregate>,
{
    let overall: HashMap<&str, OverallFeedback> = people
        .iter()
        .map(|person| (person.team_member.as_str(), person.daily_overall_feedback))
        .collect();

    let mut rows: Vec<DailySummaryRow> = days
        .into_iter()
        .map(|day| DailySummaryRow {
            team_member: day.team_member.clone(),
            started_on_date: day.date,
            started_on_week: day.week.clone(),
            total_hours_per_day: day.total_hours_per_day,
            overtime: day.overtime,
            idle_hours: day.idle_hours,
            set_working_hours: day.set_working_hours,
            idle_time_percentage: day.idle_time_percentage,
            feedback: day.feedback.clone(),
            daily_overall_feedback: overall
                .get(day.team_member.as_str())
                .copied()
                .unwrap_or(OverallFeedback::NeedsInvestigation),
        })
        .collect();
    rows.sort_by_key(|row| Reverse((row.started_on_date, row.team_member.clone())));
    rows
}
