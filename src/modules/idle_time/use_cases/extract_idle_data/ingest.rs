// Ingestion of a timeclock export.
//
// Purpose
// - Turn the raw rows of an export into typed clock spans.
//
// Responsibilities
// - Reject an export that lacks any required column, naming all of them.
// - Drop rows in a fixed order: clock-in markers, rows without an operation, rows whose
//   duration is unparseable or below the minimum, excluded team members.
// - Keep rows with unparseable dates or times. They surface later as faulty data.

use crate::modules::idle_time::core::config::IdleTimeConfig;
use crate::modules::idle_time::core::record::TimeRecord;
use crate::shared::core::primitives::{iso_week_label, parse_date, parse_hours, parse_time};
use crate::shared::core::table::{InputError, InputTable};
use serde::Deserialize;

pub const REQUIRED_COLUMNS: [&str; 10] = [
    "Team Member",
    "Started On Date",
    "Started On Time",
    "Stopped On Date",
    "Stopped On Time",
    "Duration Hours",
    "Clock Type",
    "Job",
    "Operation",
    "Started On Week",
];

const CLOCK_IN_MARKER: &str = "ClockIn";

// CSV -> DTO (export shape)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTimeRow {
    #[serde(rename = "Job")]
    pub job: Option<String>,
    #[serde(rename = "Operation")]
    pub operation: Option<String>,
    #[serde(rename = "Team Member")]
    pub team_member: Option<String>,
    #[serde(rename = "Started On Date")]
    pub started_on_date: Option<String>,
    #[serde(rename = "Started On Time")]
    pub started_on_time: Option<String>,
    #[serde(rename = "Started On Week")]
    pub started_on_week: Option<String>,
    #[serde(rename = "Stopped On Date")]
    pub stopped_on_date: Option<String>,
    #[serde(rename = "Stopped On Time")]
    pub stopped_on_time: Option<String>,
    #[serde(rename = "Duration Hours")]
    pub duration_hours: Option<String>,
    #[serde(rename = "Clock Type")]
    pub clock_type: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    pub clock_in: usize,
    pub missing_operation: usize,
    pub short_or_invalid_duration: usize,
    pub excluded: usize,
    pub unparseable_start_date: usize,
}

pub fn ingest(table: &InputTable, config: &IdleTimeConfig) -> Result<Vec<TimeRecord>, InputError> {
    table.require_columns(&REQUIRED_COLUMNS)?;
    let rows: Vec<RawTimeRow> = table.deserialize()?;
    let (records, stats) = filter_rows(rows, config);

    if stats.unparseable_start_date > 0 {
        tracing::warn!(
            rows = stats.unparseable_start_date,
            "some 'Started On Date' values could not be parsed"
        );
    }
    tracing::debug!(
        kept = records.len(),
        clock_in = stats.clock_in,
        missing_operation = stats.missing_operation,
        short_or_invalid_duration = stats.short_or_invalid_duration,
        excluded = stats.excluded,
        "timeclock export ingested"
    );
    Ok(records)
}

fn filter_rows(rows: Vec<RawTimeRow>, config: &IdleTimeConfig) -> (Vec<TimeRecord>, IngestStats) {
    let exclusions = config.exclusions();
    let mut stats = IngestStats::default();
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        if cell(&row.clock_type).contains(CLOCK_IN_MARKER) {
            stats.clock_in += 1;
            continue;
        }
        let operation = cell(&row.operation);
        if operation.is_empty() {
            stats.missing_operation += 1;
            continue;
        }
        let Some(duration_hours) = parse_hours(cell(&row.duration_hours))
            .filter(|hours| *hours >= config.min_duration_hours)
        else {
            stats.short_or_invalid_duration += 1;
            continue;
        };
        let team_member = cell(&row.team_member);
        if exclusions.contains(team_member) {
            stats.excluded += 1;
            continue;
        }

        let started_on_date = parse_date(cell(&row.started_on_date));
        if started_on_date.is_none() {
            stats.unparseable_start_date += 1;
        }
        let started_on_week = match (cell(&row.started_on_week), started_on_date) {
            ("", Some(date)) => iso_week_label(date),
            (week, _) => week.to_string(),
        };

        records.push(TimeRecord {
            job: cell(&row.job).to_string(),
            operation: operation.to_string(),
            team_member: team_member.to_string(),
            started_on_date,
            started_on_time: parse_time(cell(&row.started_on_time)),
            started_on_week,
            stopped_on_date: parse_date(cell(&row.stopped_on_date)),
            stopped_on_time: parse_time(cell(&row.stopped_on_time)),
            duration_hours,
        });
    }
    (records, stats)
}

fn cell(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or_default()
}

#[cfg(test)]
mod timeclock_ingest_tests {
    use super::*;
    use crate::tests::fixtures::timeclock_csv::{TimeclockCsvBuilder, TimeclockRow};
    use chrono::{NaiveDate, NaiveTime};
    use rstest::{fixture, rstest};

    #[fixture]
    fn config() -> IdleTimeConfig {
        IdleTimeConfig {
            excluded_team_members: vec!["Sam Office".into()],
            ..IdleTimeConfig::default()
        }
    }

    fn ingest_csv(csv: &str, config: &IdleTimeConfig) -> Result<Vec<TimeRecord>, InputError> {
        ingest(&InputTable::from_csv_str(csv).unwrap(), config)
    }

    #[rstest]
    fn it_should_parse_the_export_formats(config: IdleTimeConfig) {
        let csv = TimeclockCsvBuilder::new()
            .row(|r| {
                r.started_on_time = "07:45:00 AM".into();
                r.stopped_on_time = "06:15:00 PM".into();
                r.duration_hours = " 10.5 ".into();
            })
            .build();
        let records = ingest_csv(&csv, &config).unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.team_member, "Bob");
        assert_eq!(record.started_on_date, NaiveDate::from_ymd_opt(2024, 9, 12));
        assert_eq!(record.started_on_time, NaiveTime::from_hms_opt(7, 45, 0));
        assert_eq!(record.stopped_on_time, NaiveTime::from_hms_opt(18, 15, 0));
        assert_eq!(record.duration_hours, 10.5);
    }

    #[rstest]
    fn it_should_report_every_missing_column_at_once(config: IdleTimeConfig) {
        let csv = TimeclockCsvBuilder::new()
            .without_column("Clock Type")
            .without_column("Stopped On Time")
            .row(|_| {})
            .build();
        match ingest_csv(&csv, &config) {
            Err(InputError::MissingColumns { columns }) => {
                assert_eq!(columns, vec!["Stopped On Time", "Clock Type"]);
            }
            other => panic!("expected missing columns, got {other:?}"),
        }
    }

    #[rstest]
    #[case::clock_in(|r: &mut TimeclockRow| r.clock_type = "ClockIn".into())]
    #[case::clock_in_variant(|r: &mut TimeclockRow| r.clock_type = "ClockIn (Shift)".into())]
    #[case::empty_operation(|r: &mut TimeclockRow| r.operation = "".into())]
    #[case::short_duration(|r: &mut TimeclockRow| r.duration_hours = "0.005".into())]
    #[case::invalid_duration(|r: &mut TimeclockRow| r.duration_hours = "n/a".into())]
    #[case::excluded(|r: &mut TimeclockRow| r.team_member = "  Sam Office ".into())]
    fn it_should_drop_rows_that_never_count(
        config: IdleTimeConfig,
        #[case] edit: fn(&mut TimeclockRow),
    ) {
        let csv = TimeclockCsvBuilder::new().row(edit).row(|_| {}).build();
        let records = ingest_csv(&csv, &config).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].team_member, "Bob");
    }

    #[rstest]
    fn it_should_keep_the_minimum_duration(config: IdleTimeConfig) {
        let csv = TimeclockCsvBuilder::new().row(|r| r.duration_hours = "0.01".into()).build();
        assert_eq!(ingest_csv(&csv, &config).unwrap().len(), 1);
    }

    #[rstest]
    fn it_should_keep_rows_with_unparseable_dates_and_times(config: IdleTimeConfig) {
        let csv = TimeclockCsvBuilder::new()
            .row(|r| {
                r.started_on_date = "soon".into();
                r.started_on_time = "".into();
                r.started_on_week = "".into();
            })
            .build();
        let records = ingest_csv(&csv, &config).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].started_on_date, None);
        assert_eq!(records[0].started_on_time, None);
        assert_eq!(records[0].started_on_week, "");
    }

    #[rstest]
    fn it_should_fall_back_to_the_iso_week_when_the_week_is_blank(config: IdleTimeConfig) {
        let csv = TimeclockCsvBuilder::new()
            .row(|r| {
                r.started_on_date = "09/16/2024".into();
                r.started_on_week = " ".into();
            })
            .build();
        let records = ingest_csv(&csv, &config).unwrap();
        assert_eq!(records[0].started_on_week, "2024-W38");
    }
}
