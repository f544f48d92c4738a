// Operation efficiency: estimated hours against actual hours per routing operation.
//
// Responsibilities
// - Judge only rows whose actual hours exceed the minimum.
// - Drop rows at or above the efficiency ceiling. Those are estimates nobody worked to.

use crate::modules::efficiency::core::average::{EfficiencySample, group_averages};
use crate::modules::efficiency::core::config::EfficiencyConfig;
use crate::shared::core::primitives::{parse_hours, serialize_option_round2, serialize_round2};
use crate::shared::core::table::{InputError, InputTable};
use crate::shared::infrastructure::report_sink::{Sheet, SheetRow, SinkError};
use serde::{Deserialize, Serialize};

pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Job",
    "Make Item",
    "Operation",
    "Estimated Total Hours",
    "Actual Total Hours",
    "Total Hours Variance",
    "Job Completed On",
];

pub const ROWS_SHEET: &str = "Operation Efficiency";
pub const SUMMARY_SHEET: &str = "Operation Efficiency Summary";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawOperationRow {
    #[serde(rename = "Job")]
    job: Option<String>,
    #[serde(rename = "Make Item")]
    make_item: Option<String>,
    #[serde(rename = "Operation")]
    operation: Option<String>,
    #[serde(rename = "Estimated Total Hours")]
    estimated_total_hours: Option<String>,
    #[serde(rename = "Actual Total Hours")]
    actual_total_hours: Option<String>,
    #[serde(rename = "Total Hours Variance")]
    total_hours_variance: Option<String>,
    #[serde(rename = "Job Completed On")]
    job_completed_on: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationEfficiencyRow {
    #[serde(rename = "Job")]
    pub job: String,
    #[serde(rename = "Make Item")]
    pub make_item: String,
    #[serde(rename = "Operation")]
    pub operation: String,
    #[serde(rename = "Estimated Total Hours", serialize_with = "serialize_round2")]
    pub estimated_total_hours: f64,
    #[serde(rename = "Actual Total Hours", serialize_with = "serialize_round2")]
    pub actual_total_hours: f64,
    #[serde(rename = "Total Hours Variance", serialize_with = "serialize_option_round2")]
    pub total_hours_variance: Option<f64>,
    #[serde(rename = "Job Completed On")]
    pub job_completed_on: String,
    #[serde(rename = "Efficiency (%)", serialize_with = "serialize_round2")]
    pub efficiency: f64,
}

impl SheetRow for OperationEfficiencyRow {
    const HEADERS: &'static [&'static str] = &[
        "Job",
        "Make Item",
        "Operation",
        "Estimated Total Hours",
        "Actual Total Hours",
        "Total Hours Variance",
        "Job Completed On",
        "Efficiency (%)",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationSummaryRow {
    #[serde(rename = "Operation")]
    pub operation: String,
    #[serde(rename = "Average Efficiency (%)", serialize_with = "serialize_round2")]
    pub average_efficiency: f64,
    #[serde(rename = "Average Estimated Hours", serialize_with = "serialize_round2")]
    pub average_estimated_hours: f64,
    #[serde(rename = "Average Spent Hours", serialize_with = "serialize_round2")]
    pub average_spent_hours: f64,
}

impl SheetRow for OperationSummaryRow {
    const HEADERS: &'static [&'static str] = &[
        "Operation",
        "Average Efficiency (%)",
        "Average Estimated Hours",
        "Average Spent Hours",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationEfficiencyReport {
    pub rows: Vec<OperationEfficiencyRow>,
    pub summary: Vec<OperationSummaryRow>,
}

impl OperationEfficiencyReport {
    pub fn sheets(&self) -> Result<Vec<Sheet>, SinkError> {
        Ok(vec![
            Sheet::from_rows(ROWS_SHEET, &self.rows)?,
            Sheet::from_rows(SUMMARY_SHEET, &self.summary)?,
        ])
    }
}

pub fn operation_efficiency(
    table: &InputTable,
    config: &EfficiencyConfig,
) -> Result<OperationEfficiencyReport, InputError> {
    table.require_columns(&REQUIRED_COLUMNS)?;
    let raw: Vec<RawOperationRow> = table.deserialize()?;

    let rows: Vec<OperationEfficiencyRow> = raw
        .into_iter()
        .filter_map(|row| {
            let estimated = parse_hours(row.estimated_total_hours.as_deref().unwrap_or_default())?;
            let actual = parse_hours(row.actual_total_hours.as_deref().unwrap_or_default())?;
            if actual <= config.min_hours {
                return None;
            }
            let efficiency = estimated / actual * 100.0;
            if efficiency >= config.operation_max_efficiency {
                return None;
            }
            Some(OperationEfficiencyRow {
                job: row.job.unwrap_or_default(),
                make_item: row.make_item.unwrap_or_default(),
                operation: row.operation.unwrap_or_default().trim().to_string(),
                estimated_total_hours: estimated,
                actual_total_hours: actual,
                total_hours_variance: row.total_hours_variance.as_deref().and_then(parse_hours),
                job_completed_on: row.job_completed_on.unwrap_or_default(),
                efficiency,
            })
        })
        .collect();

    let summary = group_averages(rows.iter().map(|row| EfficiencySample {
        group: &row.operation,
        efficiency: row.efficiency,
        estimated_hours: row.estimated_total_hours,
        spent_hours: row.actual_total_hours,
    }))
    .into_iter()
    .map(|average| OperationSummaryRow {
        operation: average.name,
        average_efficiency: average.average_efficiency,
        average_estimated_hours: average.average_estimated_hours,
        average_spent_hours: average.average_spent_hours,
    })
    .collect();

    tracing::info!(rows = rows.len(), "operation efficiency computed");
    Ok(OperationEfficiencyReport { rows, summary })
}
