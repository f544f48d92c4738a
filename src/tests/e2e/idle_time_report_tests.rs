use crate::modules::idle_time::core::config::{FeedbackOverride, IdleTimeConfig};
use crate::modules::idle_time::core::shift::Overtime;
use crate::modules::idle_time::use_cases::create_summary::handler::CreateSummaryHandler;
use crate::shared::core::table::InputTable;
use crate::shared::infrastructure::report_sink::csv_directory::CsvDirectorySink;
use crate::tests::fixtures::timeclock_csv::TimeclockCsvBuilder;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;

fn two_week_export() -> String {
    TimeclockCsvBuilder::new()
        // Bob, week 37: a regular day, a short day and an overtime day.
        .row(|r| {
            r.started_on_date = "2024-09-10".into();
            r.stopped_on_date = "2024-09-10".into();
            r.duration_hours = "8.2".into();
        })
        .row(|r| {
            r.started_on_date = "2024-09-11".into();
            r.stopped_on_date = "2024-09-11".into();
            r.duration_hours = "5.0".into();
        })
        .row(|r| {
            r.started_on_date = "2024-09-12".into();
            r.started_on_time = "07:50:00 AM".into();
            r.stopped_on_time = "12:00:00 PM".into();
            r.duration_hours = "4.0".into();
        })
        .row(|r| {
            r.started_on_date = "2024-09-12".into();
            r.started_on_time = "12:30:00 PM".into();
            r.stopped_on_time = "06:45:00 PM".into();
            r.duration_hours = "6.25".into();
        })
        // Bob, week 38: a faulty span next to a valid one.
        .row(|r| {
            r.started_on_date = "2024-09-16".into();
            r.stopped_on_date = "2024-09-16".into();
            r.started_on_week = "2024-W38".into();
            r.duration_hours = "8.0".into();
        })
        .row(|r| {
            r.started_on_date = "2024-09-16".into();
            r.stopped_on_date = "2024-09-16".into();
            r.started_on_week = "2024-W38".into();
            r.stopped_on_time = "".into();
            r.duration_hours = "3.0".into();
        })
        // Bob, Friday: a long afternoon running into the night shift.
        .row(|r| {
            r.started_on_date = "2024-09-13".into();
            r.stopped_on_date = "2024-09-13".into();
            r.started_on_time = "08:00:00 AM".into();
            r.stopped_on_time = "05:00:00 PM".into();
            r.duration_hours = "9.0".into();
        })
        .row(|r| {
            r.started_on_date = "2024-09-13".into();
            r.stopped_on_date = "2024-09-13".into();
            r.started_on_time = "05:00:00 PM".into();
            r.stopped_on_time = "08:00:00 PM".into();
            r.duration_hours = "3.0".into();
        })
        // Alice on nights, one of them overridden.
        .row(|r| {
            r.team_member = "Alice".into();
            r.started_on_date = "2024-09-10".into();
            r.started_on_time = "08:00:00 PM".into();
            r.stopped_on_time = "04:00:00 AM".into();
            r.duration_hours = "8.0".into();
        })
        .row(|r| {
            r.team_member = "Alice".into();
            r.started_on_date = "2024-09-11".into();
            r.started_on_time = "08:00:00 PM".into();
            r.stopped_on_time = "11:00:00 PM".into();
            r.duration_hours = "3.0".into();
        })
        // Noise that never reaches a report.
        .row(|r| r.clock_type = "ClockIn".into())
        .row(|r| r.operation = "".into())
        .row(|r| r.duration_hours = "0.004".into())
        .row(|r| r.team_member = "Office Admin".into())
        .build()
}

fn config() -> IdleTimeConfig {
    IdleTimeConfig {
        excluded_team_members: vec!["Office Admin".into()],
        overrides: vec![FeedbackOverride {
            team_member: "Alice".into(),
            date: NaiveDate::from_ymd_opt(2024, 9, 11).unwrap(),
            label: "1/2 day".into(),
        }],
        ..IdleTimeConfig::default()
    }
}

#[tokio::test]
async fn it_should_build_a_consistent_report_from_a_raw_export() {
    let table = InputTable::from_csv_str(&two_week_export()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let sink = Arc::new(CsvDirectorySink::new(dir.path()));
    let handler = CreateSummaryHandler::new(Arc::new(config()), sink.clone());

    let summary = handler.handle(&table).await.unwrap();

    // Noise rows are gone, every retained span is listed.
    assert_eq!(summary.details.len(), 10);
    assert!(summary.details.iter().all(|d| d.team_member != "Office Admin"));

    // Daily totals equal the sum of the countable spans of that day.
    let mut sums: HashMap<(String, Option<NaiveDate>), f64> = HashMap::new();
    for detail in summary.details.iter().filter(|d| d.overtime != Overtime::FaultyData) {
        *sums
            .entry((detail.team_member.clone(), detail.started_on_date))
            .or_default() += detail.duration_hours;
    }
    for day in &summary.daily {
        let expected = sums
            .get(&(day.team_member.clone(), day.started_on_date))
            .copied()
            .unwrap_or_default();
        assert!((day.total_hours_per_day - expected).abs() < 1e-9);
    }

    let bob_overtime = summary
        .daily
        .iter()
        .find(|d| {
            d.team_member == "Bob" && d.started_on_date == NaiveDate::from_ymd_opt(2024, 9, 12)
        })
        .unwrap();
    assert_eq!(bob_overtime.overtime, Overtime::Yes);
    assert_eq!(bob_overtime.set_working_hours, Some(10.5));

    let bob_long_friday = summary
        .daily
        .iter()
        .find(|d| {
            d.team_member == "Bob" && d.started_on_date == NaiveDate::from_ymd_opt(2024, 9, 13)
        })
        .unwrap();
    assert_eq!(bob_long_friday.overtime, Overtime::Yes);
    assert_eq!(bob_long_friday.total_hours_per_day, 12.0);
    assert_eq!(bob_long_friday.idle_hours, Some(-1.5));

    let alice_override = summary
        .daily
        .iter()
        .find(|d| {
            d.team_member == "Alice" && d.started_on_date == NaiveDate::from_ymd_opt(2024, 9, 11)
        })
        .unwrap();
    assert_eq!(alice_override.feedback.label(), "1/2 day");

    let bob_w38 = summary
        .weekly
        .iter()
        .find(|w| w.team_member == "Bob" && w.started_on_week == "2024-W38")
        .unwrap();
    assert_eq!(bob_w38.total_hours_week, 8.0);

    // Every sheet landed on disk with a header and one line per row.
    for (name, rows) in [
        ("Extensive Details", summary.details.len()),
        ("Daily Summary", summary.daily.len()),
        ("Weekly Summary", summary.weekly.len()),
        ("Overall Summary", summary.overall.len()),
    ] {
        let text = std::fs::read_to_string(sink.path_for(name)).unwrap();
        assert_eq!(text.lines().count(), rows + 1, "{name}");
    }
}

#[tokio::test]
async fn it_should_produce_identical_sheets_for_identical_input() {
    let table = InputTable::from_csv_str(&two_week_export()).unwrap();
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    for dir in [&first, &second] {
        let sink = Arc::new(CsvDirectorySink::new(dir.path()));
        CreateSummaryHandler::new(Arc::new(config()), sink)
            .handle(&table)
            .await
            .unwrap();
    }

    for name in ["Extensive Details", "Daily Summary", "Weekly Summary", "Overall Summary"] {
        let a = std::fs::read(first.path().join(format!("{name}.csv"))).unwrap();
        let b = std::fs::read(second.path().join(format!("{name}.csv"))).unwrap();
        assert_eq!(a, b, "{name}");
    }
}
