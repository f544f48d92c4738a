// Item efficiency: per-unit estimated time against per-unit actual time, by make item.
//
// Purpose
// - Compare how long a job was expected to take per unit with how long it took, and
//   report the average per make item with a product category.
//
// Responsibilities
// - Drop rows without actual hours and rows whose per-unit hours are not finite.
// - Sum per-unit hours per job. The mean estimated time per item spans all of the item's
//   rows; the mean efficiency spans only the rows under the ceiling.
// - Report the first surviving row of each item, ordered by category descending.

use crate::modules::efficiency::core::config::EfficiencyConfig;
use crate::shared::core::primitives::{parse_hours, serialize_round2};
use crate::shared::core::table::{InputError, InputTable};
use crate::shared::infrastructure::report_sink::{Sheet, SheetRow, SinkError};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Actual Total Hours",
    "Estimated Total Hours",
    "Estimated Make Quantity",
    "Job",
    "Make Item",
    "Make Item Description",
];

pub const SHEET_NAME: &str = "Item Efficiency";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawItemRow {
    #[serde(rename = "Actual Total Hours")]
    actual_total_hours: Option<String>,
    #[serde(rename = "Estimated Total Hours")]
    estimated_total_hours: Option<String>,
    #[serde(rename = "Estimated Make Quantity")]
    estimated_make_quantity: Option<String>,
    #[serde(rename = "Job")]
    job: Option<String>,
    #[serde(rename = "Make Item")]
    make_item: Option<String>,
    #[serde(rename = "Make Item Description")]
    make_item_description: Option<String>,
}

struct UnitRow {
    job: String,
    make_item: String,
    description: String,
    estimated_per_unit: f64,
    actual_per_unit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemEfficiencyRow {
    #[serde(rename = "Make Item")]
    pub make_item: String,
    #[serde(rename = "Item Category")]
    pub item_category: String,
    #[serde(rename = "Make Item Description")]
    pub make_item_description: String,
    #[serde(rename = "Mean Estimated Time", serialize_with = "serialize_round2")]
    pub mean_estimated_time: f64,
    #[serde(rename = "Mean Actual Time", serialize_with = "serialize_round2")]
    pub mean_actual_time: f64,
    #[serde(rename = "Mean Efficiency", serialize_with = "serialize_round2")]
    pub mean_efficiency: f64,
}

impl SheetRow for ItemEfficiencyRow {
    const HEADERS: &'static [&'static str] = &[
        "Make Item",
        "Item Category",
        "Make Item Description",
        "Mean Estimated Time",
        "Mean Actual Time",
        "Mean Efficiency",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemEfficiencyReport {
    pub rows: Vec<ItemEfficiencyRow>,
}

impl ItemEfficiencyReport {
    pub fn sheets(&self) -> Result<Vec<Sheet>, SinkError> {
        Ok(vec![Sheet::from_rows(SHEET_NAME, &self.rows)?])
    }
}

pub fn item_efficiency(
    table: &InputTable,
    config: &EfficiencyConfig,
) -> Result<ItemEfficiencyReport, InputError> {
    table.require_columns(&REQUIRED_COLUMNS)?;
    let raw: Vec<RawItemRow> = table.deserialize()?;
    let units: Vec<UnitRow> = raw.into_iter().filter_map(per_unit).collect();

    let mut job_totals: HashMap<&str, (f64, f64)> = HashMap::new();
    for unit in &units {
        let totals = job_totals.entry(unit.job.as_str()).or_default();
        totals.0 += unit.estimated_per_unit;
        totals.1 += unit.actual_per_unit;
    }
    let job_time = |job: &str| job_totals.get(job).copied().unwrap_or_default();

    let mut estimated_by_item: HashMap<&str, (f64, usize)> = HashMap::new();
    for unit in &units {
        let entry = estimated_by_item.entry(unit.make_item.as_str()).or_default();
        entry.0 += job_time(&unit.job).0;
        entry.1 += 1;
    }

    let kept: Vec<(&UnitRow, f64)> = units
        .iter()
        .filter_map(|unit| {
            let (estimated, actual) = job_time(&unit.job);
            let efficiency = estimated / actual * 100.0;
            (efficiency.is_finite() && efficiency < config.item_max_efficiency)
                .then_some((unit, efficiency))
        })
        .collect();

    let mut efficiency_by_item: HashMap<&str, (f64, usize)> = HashMap::new();
    for (unit, efficiency) in &kept {
        let entry = efficiency_by_item.entry(unit.make_item.as_str()).or_default();
        entry.0 += efficiency;
        entry.1 += 1;
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut rows: Vec<ItemEfficiencyRow> = kept
        .iter()
        .filter(|(unit, _)| seen.insert(unit.make_item.as_str()))
        .map(|(unit, _)| {
            let item = unit.make_item.as_str();
            ItemEfficiencyRow {
                make_item: unit.make_item.clone(),
                item_category: config.categorize(&unit.description).to_string(),
                make_item_description: unit.description.clone(),
                mean_estimated_time: mean(estimated_by_item.get(item)),
                mean_actual_time: job_time(&unit.job).1,
                mean_efficiency: mean(efficiency_by_item.get(item)),
            }
        })
        .collect();
    rows.sort_by_key(|row| Reverse(row.item_category.clone()));

    tracing::info!(items = rows.len(), "item efficiency computed");
    Ok(ItemEfficiencyReport { rows })
}

fn per_unit(row: RawItemRow) -> Option<UnitRow> {
    let actual = parse_hours(row.actual_total_hours.as_deref().unwrap_or_default())?;
    if actual == 0.0 {
        return None;
    }
    let estimated = parse_hours(row.estimated_total_hours.as_deref().unwrap_or_default())?;
    let quantity = parse_hours(row.estimated_make_quantity.as_deref().unwrap_or_default())?;
    let estimated_per_unit = estimated / quantity;
    let actual_per_unit = actual / quantity;
    if !estimated_per_unit.is_finite() || !actual_per_unit.is_finite() {
        tracing::debug!(job = ?row.job, "item row without a usable make quantity skipped");
        return None;
    }
    Some(UnitRow {
        job: row.job.unwrap_or_default(),
        make_item: row.make_item.unwrap_or_default(),
        description: row.make_item_description.unwrap_or_default(),
        estimated_per_unit,
        actual_per_unit,
    })
}

fn mean(sum: Option<&(f64, usize)>) -> f64 {
    match sum {
        Some((total, count)) if *count > 0 => total / *count as f64,
        _ => 0.0,
    }
}
