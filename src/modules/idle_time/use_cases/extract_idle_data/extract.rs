// Per-record extraction step shared by every idle time report.
//
// Purpose
// - Ingest an export, classify each span and build the day level it rolls up into.

use crate::modules::idle_time::core::aggregate::{DayAggregate, DayKey, aggregate_days};
use crate::modules::idle_time::core::config::IdleTimeConfig;
use crate::modules::idle_time::core::record::{ClassifiedRecord, classify_record};
use crate::modules::idle_time::use_cases::extract_idle_data::ingest::ingest;
use crate::shared::core::table::{InputError, InputTable};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct IdleTimeData {
    pub records: Vec<ClassifiedRecord>,
    pub days: BTreeMap<DayKey, DayAggregate>,
}

impl IdleTimeData {
    pub fn faulty_records(&self) -> usize {
        self.records.iter().filter(|c| !c.counts_towards_hours()).count()
    }
}

pub fn extract_idle_data(
    table: &InputTable,
    config: &IdleTimeConfig,
) -> Result<IdleTimeData, InputError> {
    let records: Vec<ClassifiedRecord> = ingest(table, config)?
        .into_iter()
        .map(|record| classify_record(config, record))
        .collect();
    let days = aggregate_days(config, &records);

    let data = IdleTimeData { records, days };
    let faulty = data.faulty_records();
    if faulty > 0 {
        tracing::warn!(rows = faulty, "spans with faulty data are left out of the hour totals");
    }
    Ok(data)
}
