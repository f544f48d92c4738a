// Shared test fixture for TimeRecord.
// Defaults describe Bob's morning span on Thursday 2024-09-12.

use crate::modules::idle_time::core::record::TimeRecord;
use crate::shared::core::primitives::parse_time;
use chrono::NaiveDate;

pub struct TimeRecordBuilder {
    inner: TimeRecord,
}

impl Default for TimeRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TimeRecordBuilder {
    pub fn new() -> Self {
        let date = NaiveDate::from_ymd_opt(2024, 9, 12);
        Self {
            inner: TimeRecord {
                job: "J-1001".to_string(),
                operation: "Machining".to_string(),
                team_member: "Bob".to_string(),
                started_on_date: date,
                started_on_time: parse_time("08:00"),
                started_on_week: "2024-W37".to_string(),
                stopped_on_date: date,
                stopped_on_time: parse_time("12:00"),
                duration_hours: 4.0,
            },
        }
    }

    pub fn job(mut self, v: impl Into<String>) -> Self {
        self.inner.job = v.into();
        self
    }

    pub fn operation(mut self, v: impl Into<String>) -> Self {
        self.inner.operation = v.into();
        self
    }

    pub fn team_member(mut self, v: impl Into<String>) -> Self {
        self.inner.team_member = v.into();
        self
    }

    pub fn date(mut self, year: i32, month: u32, day: u32) -> Self {
        let date = NaiveDate::from_ymd_opt(year, month, day);
        self.inner.started_on_date = date;
        self.inner.stopped_on_date = date;
        self
    }

    pub fn without_date(mut self) -> Self {
        self.inner.started_on_date = None;
        self.inner.stopped_on_date = None;
        self
    }

    pub fn times(mut self, start: &str, end: &str) -> Self {
        self.inner.started_on_time = parse_time(start);
        self.inner.stopped_on_time = parse_time(end);
        self
    }

    pub fn without_times(mut self) -> Self {
        self.inner.started_on_time = None;
        self.inner.stopped_on_time = None;
        self
    }

    pub fn week(mut self, v: impl Into<String>) -> Self {
        self.inner.started_on_week = v.into();
        self
    }

    pub fn duration(mut self, v: f64) -> Self {
        self.inner.duration_hours = v;
        self
    }

    pub fn build(self) -> TimeRecord {
        self.inner
    }
}
