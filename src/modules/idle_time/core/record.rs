use crate::modules::idle_time::core::config::IdleTimeConfig;
use crate::modules::idle_time::core::shift::{ShiftClass, classify_shift};
use chrono::{NaiveDate, NaiveTime};

/// One clock span of one team member, as retained after ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeRecord {
    pub job: String,
    pub operation: String,
    pub team_member: String,
    pub started_on_date: Option<NaiveDate>,
    pub started_on_time: Option<NaiveTime>,
    pub started_on_week: String,
    pub stopped_on_date: Option<NaiveDate>,
    pub stopped_on_time: Option<NaiveTime>,
    pub duration_hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRecord {
    pub record: TimeRecord,
    pub shift: ShiftClass,
}

impl ClassifiedRecord {
    /// Faulty spans stay in the detail sheet but never count towards hours.
    pub fn counts_towards_hours(&self) -> bool {
        self.shift != ShiftClass::FaultyData
    }
}

/// A span without a start date cannot be placed on a day, so it is faulty whatever its times say.
pub fn classify_record(config: &IdleTimeConfig, record: TimeRecord) -> ClassifiedRecord {
    let shift = match record.started_on_date {
        Some(_) => classify_shift(config, record.started_on_time, record.stopped_on_time),
        None => ShiftClass::FaultyData,
    };
    ClassifiedRecord { record, shift }
}
