// Employee efficiency: planned hours against clocked hours.
//
// Responsibilities
// - Judge only rows where both planned and clocked hours exceed the minimum.
// - Trim employee names before matching them against the exclusion list.

use crate::modules::efficiency::core::average::{EfficiencySample, group_averages};
use crate::modules::efficiency::core::config::EfficiencyConfig;
use crate::shared::core::primitives::{parse_hours, serialize_round2};
use crate::shared::core::table::{InputError, InputTable};
use crate::shared::infrastructure::report_sink::{Sheet, SheetRow, SinkError};
use serde::{Deserialize, Serialize};

pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Job",
    "Item",
    "Description",
    "Employee",
    "Operation",
    "Planned Hours",
    "Total Clocked Hours",
];

pub const ROWS_SHEET: &str = "Employee Efficiency";
pub const SUMMARY_SHEET: &str = "Employee Efficiency Summary";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawEmployeeRow {
    #[serde(rename = "Job")]
    job: Option<String>,
    #[serde(rename = "Item")]
    item: Option<String>,
    #[serde(rename = "Description")]
    description: Option<String>,
    #[serde(rename = "Employee")]
    employee: Option<String>,
    #[serde(rename = "Operation")]
    operation: Option<String>,
    #[serde(rename = "Planned Hours")]
    planned_hours: Option<String>,
    #[serde(rename = "Total Clocked Hours")]
    total_clocked_hours: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeEfficiencyRow {
    #[serde(rename = "Job")]
    pub job: String,
    #[serde(rename = "Item")]
    pub item: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Employee")]
    pub employee: String,
    #[serde(rename = "Operation")]
    pub operation: String,
    #[serde(rename = "Planned Hours", serialize_with = "serialize_round2")]
    pub planned_hours: f64,
    #[serde(rename = "Total Clocked Hours", serialize_with = "serialize_round2")]
    pub total_clocked_hours: f64,
    #[serde(rename = "Efficiency (%)", serialize_with = "serialize_round2")]
    pub efficiency: f64,
}

impl SheetRow for EmployeeEfficiencyRow {
    const HEADERS: &'static [&'static str] = &[
        "Job",
        "Item",
        "Description",
        "Employee",
        "Operation",
        "Planned Hours",
        "Total Clocked Hours",
        "Efficiency (%)",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeSummaryRow {
    #[serde(rename = "Employee")]
    pub employee: String,
    #[serde(rename = "Average Efficiency (%)", serialize_with = "serialize_round2")]
    pub average_efficiency: f64,
    #[serde(rename = "Average Planned Hours", serialize_with = "serialize_round2")]
    pub average_planned_hours: f64,
    #[serde(rename = "Average Clocked Hours", serialize_with = "serialize_round2")]
    pub average_clocked_hours: f64,
}

impl SheetRow for EmployeeSummaryRow {
    const HEADERS: &'static [&'static str] = &[
        "Employee",
        "Average Efficiency (%)",
        "Average Planned Hours",
        "Average Clocked Hours",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeEfficiencyReport {
    pub rows: Vec<EmployeeEfficiencyRow>,
    pub summary: Vec<EmployeeSummaryRow>,
}

impl EmployeeEfficiencyReport {
    pub fn sheets(&self) -> Result<Vec<Sheet>, SinkError> {
        Ok(vec![
            Sheet::from_rows(ROWS_SHEET, &self.rows)?,
            Sheet::from_rows(SUMMARY_SHEET, &self.summary)?,
        ])
    }
}

pub fn employee_efficiency(
    table: &InputTable,
    config: &EfficiencyConfig,
) -> Result<EmployeeEfficiencyReport, InputError> {
    table.require_columns(&REQUIRED_COLUMNS)?;
    let raw: Vec<RawEmployeeRow> = table.deserialize()?;
    let exclusions = config.exclusions();

    let rows: Vec<EmployeeEfficiencyRow> = raw
        .into_iter()
        .filter_map(|row| {
            let planned = parse_hours(row.planned_hours.as_deref().unwrap_or_default())?;
            let clocked = parse_hours(row.total_clocked_hours.as_deref().unwrap_or_default())?;
            if planned <= config.min_hours || clocked <= config.min_hours {
                return None;
            }
            let employee = row.employee.as_deref().unwrap_or_default().trim();
            if exclusions.contains(employee) {
                return None;
            }
            Some(EmployeeEfficiencyRow {
                job: row.job.unwrap_or_default(),
                item: row.item.unwrap_or_default(),
                description: row.description.unwrap_or_default(),
                employee: employee.to_string(),
                operation: row.operation.unwrap_or_default(),
                planned_hours: planned,
                total_clocked_hours: clocked,
                efficiency: planned / clocked * 100.0,
            })
        })
        .collect();

    let summary = group_averages(rows.iter().map(|row| EfficiencySample {
        group: &row.employee,
        efficiency: row.efficiency,
        estimated_hours: row.planned_hours,
        spent_hours: row.total_clocked_hours,
    }))
    .into_iter()
    .map(|average| EmployeeSummaryRow {
        employee: average.name,
        average_efficiency: average.average_efficiency,
        average_planned_hours: average.average_estimated_hours,
        average_clocked_hours: average.average_spent_hours,
    })
    .collect();

    tracing::info!(rows = rows.len(), "employee efficiency computed");
    Ok(EmployeeEfficiencyReport { rows, summary })
}
