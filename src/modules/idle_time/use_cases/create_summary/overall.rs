use crate::modules::idle_time::core::aggregate::PersonOverallAggregate;
use crate::modules::idle_time::core::dominant::OverallFeedback;
use crate::modules::idle_time::core::feedback::Feedback;
use crate::shared::core::primitives::{serialize_option_round2, serialize_round2};
use crate::shared::infrastructure::report_sink::SheetRow;
use serde::Serialize;

pub const SHEET_NAME: &str = "Overall Summary";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallSummaryRow {
    #[serde(rename = "Team Member")]
    pub team_member: String,
    #[serde(rename = "Total Hours", serialize_with = "serialize_round2")]
    pub total_hours: f64,
    #[serde(rename = "Idle Hours", serialize_with = "serialize_round2")]
    pub idle_hours: f64,
    #[serde(rename = "Set Working Hours", serialize_with = "serialize_round2")]
    pub set_working_hours: f64,
    #[serde(rename = "Idle Time Percentage", serialize_with = "serialize_option_round2")]
    pub idle_time_percentage: Option<f64>,
    #[serde(rename = "Total Time based Feedback")]
    pub total_time_feedback: Feedback,
    #[serde(rename = "Weekly Overall Feedback")]
    pub weekly_overall_feedback: OverallFeedback,
    #[serde(rename = "Daily Overall Feedback")]
    pub daily_overall_feedback: OverallFeedback,
}

impl SheetRow for OverallSummaryRow {
    const HEADERS: &'static [&'static str] = &[
        "Team Member",
        "Total Hours",
        "Idle Hours",
        "Set Working Hours",
        "Idle Time Percentage",
        "Total Time based Feedback",
        "Weekly Overall Feedback",
        "Daily Overall Feedback",
    ];
}

impl From<&PersonOverallAggregate> for OverallSummaryRow {
    fn from(person: &PersonOverallAggregate) -> Self {
        Self {
            team_member: person.team_member.clone(),
            total_hours: person.total_hours,
            idle_hours: person.idle_hours,
            set_working_hours: person.set_working_hours,
            idle_time_percentage: person.idle_time_percentage,
            total_time_feedback: person.total_time_feedback.clone(),
            weekly_overall_feedback: person.weekly_overall_feedback,
            daily_overall_feedback: person.daily_overall_feedback,
        }
    }
}

pub fn overall_rows(people: &[PersonOverallAggregate]) -> Vec<OverallSummaryRow> {
    people.iter().map(OverallSummaryRow::from).collect()
}
