use crate::modules::idle_time::core::aggregate::{PersonOverallAggregate, WeekAggregate};
use crate::modules::idle_time::core::dominant::OverallFeedback;
use crate::modules::idle_time::core::feedback::Feedback;
use crate::shared::core::primitives::{serialize_option_round2, serialize_round2};
use crate::shared::infrastructure::report_sink::SheetRow;
use serde::Serialize;
use std::collections::HashMap;

pub const SHEET_NAME: &str = "Weekly Summary";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummaryRow {
    #[serde(rename = "Team Member")]
    pub team_member: String,
    #[serde(rename = "Started On Week")]
    pub started_on_week: String,
    #[serde(rename = "Total Hours/Week", serialize_with = "serialize_round2")]
    pub total_hours_week: f64,
    #[serde(rename = "Total Idle Hours/Week", serialize_with = "serialize_round2")]
    pub total_idle_hours_week: f64,
    #[serde(rename = "Set Working Hours/Week", serialize_with = "serialize_round2")]
    pub set_working_hours_week: f64,
    #[serde(rename = "Idle Time Percentage", serialize_with = "serialize_option_round2")]
    pub idle_time_percentage: Option<f64>,
    #[serde(rename = "Feedback")]
    pub feedback: Feedback,
    #[serde(rename = "Weekly Overall Feedback")]
    pub weekly_overall_feedback: OverallFeedback,
}

impl SheetRow for WeeklySummaryRow {
    const HEADERS: &'static [&'static str] = &[
        "Team Member",
        "Started On Week",
        "Total Hours/Week",
        "Total Idle Hours/Week",
        "Set Working Hours/Week",
        "Idle Time Percentage",
        "Feedback",
        "Weekly Overall Feedback",
    ];
}

/// Weeks keep the order they were aggregated in: team member, then week label.
pub fn weekly_rows(
    weeks: &[WeekAggregate],
    people: &[PersonOverallAggregate],
) -> Vec<WeeklySummaryRow> {
    let overall: HashMap<&str, OverallFeedback> = people
        .iter()
        .map(|person| (person.team_member.as_str(), person.weekly_overall_feedback))
        .collect();

    weeks
        .iter()
        .map(|week| WeeklySummaryRow {
            team_member: week.team_member.clone(),
            started_on_week: week.week.clone(),
            total_hours_week: week.total_hours_week,
            total_idle_hours_week: week.total_idle_hours_week,
            set_working_hours_week: week.set_working_hours_week,
            idle_time_percentage: week.idle_time_percentage,
            feedback: week.feedback.clone(),
            weekly_overall_feedback: overall
                .get(week.team_member.as_str())
                .copied()
                .unwrap_or(OverallFeedback::NeedsInvestigation),
        })
        .collect()
}
