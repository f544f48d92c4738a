// Multi-level roll up of classified clock spans.
//
// Purpose
// - Derive day aggregates from records, week aggregates from days, and one overall aggregate
//   per team member from both.
//
// Responsibilities
// - Group with explicit key -> aggregate maps. Each level is rebuilt from the level below.
// - A day is overtime as soon as one of its spans is. A day with no countable span is faulty.
// - Week and person idle percentages divide idle hours by hours worked. A zero denominator
//   yields None instead of an infinity.

use crate::modules::idle_time::core::config::IdleTimeConfig;
use crate::modules::idle_time::core::dominant::{OverallFeedback, dominant_feedback};
use crate::modules::idle_time::core::feedback::{Feedback, classify_percentage, feedback};
use crate::modules::idle_time::core::idle::{idle_hours, idle_time_percentage, set_working_hours};
use crate::modules::idle_time::core::record::ClassifiedRecord;
use crate::modules::idle_time::core::shift::{Overtime, ShiftClass};
use crate::shared::core::primitives::finite_ratio;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey {
    pub team_member: String,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayAggregate {
    pub team_member: String,
    pub date: Option<NaiveDate>,
    pub week: String,
    pub total_hours_per_day: f64,
    pub overtime: Overtime,
    pub set_working_hours: Option<f64>,
    pub idle_hours: Option<f64>,
    pub idle_time_percentage: Option<f64>,
    pub feedback: Feedback,
}

impl DayAggregate {
    pub fn key(&self) -> DayKey {
        DayKey {
            team_member: self.team_member.clone(),
            date: self.date,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekAggregate {
    pub team_member: String,
    pub week: String,
    pub total_hours_week: f64,
    pub total_idle_hours_week: f64,
    pub set_working_hours_week: f64,
    pub idle_time_percentage: Option<f64>,
    pub feedback: Feedback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonOverallAggregate {
    pub team_member: String,
    pub total_hours: f64,
    pub idle_hours: f64,
    pub set_working_hours: f64,
    pub idle_time_percentage: Option<f64>,
    pub total_time_feedback: Feedback,
    pub daily_overall_feedback: OverallFeedback,
    pub weekly_overall_feedback: OverallFeedback,
}

pub fn aggregate_days(
    config: &IdleTimeConfig,
    records: &[ClassifiedRecord],
) -> BTreeMap<DayKey, DayAggregate> {
    let mut groups: BTreeMap<DayKey, Vec<&ClassifiedRecord>> = BTreeMap::new();
    for classified in records {
        groups
            .entry(DayKey {
                team_member: classified.record.team_member.clone(),
                date: classified.record.started_on_date,
            })
            .or_default()
            .push(classified);
    }

    let overrides = config.override_table();
    groups
        .into_iter()
        .map(|(key, group)| {
            let countable: Vec<&&ClassifiedRecord> =
                group.iter().filter(|c| c.counts_towards_hours()).collect();
            let total_hours_per_day: f64 = countable.iter().map(|c| c.record.duration_hours).sum();
            let overtime = if countable.is_empty() {
                Overtime::FaultyData
            } else if countable.iter().any(|c| c.shift == ShiftClass::MixedOvertime) {
                Overtime::Yes
            } else {
                Overtime::No
            };
            let set_hours = set_working_hours(&config.baseline_hours, overtime);
            let idle = idle_hours(&config.baseline_hours, total_hours_per_day, overtime);
            let percentage = idle_time_percentage(idle, set_hours);
            let week = group
                .iter()
                .map(|c| c.record.started_on_week.as_str())
                .find(|week| !week.is_empty())
                .unwrap_or_default()
                .to_string();
            let day_feedback = feedback(
                percentage,
                &key.team_member,
                key.date,
                &overrides,
                &config.thresholds,
            );
            let day = DayAggregate {
                feedback: day_feedback,
                team_member: key.team_member.clone(),
                date: key.date,
                week,
                total_hours_per_day,
                overtime,
                set_working_hours: set_hours,
                idle_hours: idle,
                idle_time_percentage: percentage,
            };
            (key, day)
        })
        .collect()
}

pub fn aggregate_weeks<'a, I>(config: &IdleTimeConfig, days: I) -> Vec<WeekAggregate>
where
    I: IntoIterator<Item = &'a DayAggregate>,
{
    let mut groups: BTreeMap<(String, String), Vec<&DayAggregate>> = BTreeMap::new();
    for day in days {
        groups
            .entry((day.team_member.clone(), day.week.clone()))
            .or_default()
            .push(day);
    }

    groups
        .into_iter()
        .map(|((team_member, week), group)| {
            let total_hours_week: f64 = group.iter().map(|d| d.total_hours_per_day).sum();
            let total_idle_hours_week: f64 = group.iter().filter_map(|d| d.idle_hours).sum();
            let set_working_hours_week: f64 =
                group.iter().filter_map(|d| d.set_working_hours).sum();
            let percentage =
                finite_ratio(total_idle_hours_week, total_hours_week).map(|r| r * 100.0);
            WeekAggregate {
                team_member,
                week,
                total_hours_week,
                total_idle_hours_week,
                set_working_hours_week,
                idle_time_percentage: percentage,
                feedback: classify_percentage(percentage, &config.thresholds),
            }
        })
        .collect()
}

pub fn aggregate_people(
    config: &IdleTimeConfig,
    days: &[&DayAggregate],
    weeks: &[WeekAggregate],
) -> Vec<PersonOverallAggregate> {
    let mut day_groups: BTreeMap<&str, Vec<&DayAggregate>> = BTreeMap::new();
    for day in days {
        day_groups.entry(day.team_member.as_str()).or_default().push(*day);
    }
    let mut week_groups: BTreeMap<&str, Vec<&WeekAggregate>> = BTreeMap::new();
    for week in weeks {
        week_groups.entry(week.team_member.as_str()).or_default().push(week);
    }

    day_groups
        .into_iter()
        .map(|(team_member, group)| {
            let total_hours: f64 = group.iter().map(|d| d.total_hours_per_day).sum();
            let idle: f64 = group.iter().filter_map(|d| d.idle_hours).sum();
            let set_hours: f64 = group.iter().filter_map(|d| d.set_working_hours).sum();
            let percentage = finite_ratio(idle, total_hours).map(|r| r * 100.0);
            let member_weeks = week_groups.get(team_member).map(Vec::as_slice).unwrap_or_default();
            PersonOverallAggregate {
                team_member: team_member.to_string(),
                total_hours,
                idle_hours: idle,
                set_working_hours: set_hours,
                idle_time_percentage: percentage,
                total_time_feedback: classify_percentage(percentage, &config.thresholds),
                // One vote per day, whatever the number of spans in it.
                daily_overall_feedback: dominant_feedback(group.iter().map(|d| &d.feedback)),
                weekly_overall_feedback: dominant_feedback(
                    member_weeks.iter().map(|w| &w.feedback),
                ),
            }
        })
        .collect()
}

#[cfg(test)]
mod multi_level_aggregation_tests {
    use super::*;
    use crate::modules::idle_time::core::config::FeedbackOverride;
    use crate::modules::idle_time::core::record::classify_record;
    use crate::tests::fixtures::records::TimeRecordBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn config() -> IdleTimeConfig {
        IdleTimeConfig::default()
    }

    fn classify(
        config: &IdleTimeConfig,
        builders: Vec<TimeRecordBuilder>,
    ) -> Vec<ClassifiedRecord> {
        builders
            .into_iter()
            .map(|b| classify_record(config, b.build()))
            .collect()
    }

    fn only_day(days: BTreeMap<DayKey, DayAggregate>) -> DayAggregate {
        assert_eq!(days.len(), 1);
        days.into_values().next().unwrap()
    }

    #[rstest]
    fn it_should_compute_idle_time_for_a_regular_day(config: IdleTimeConfig) {
        let records = classify(
            &config,
            vec![
                TimeRecordBuilder::new().times("08:00", "12:00").duration(4.0),
                TimeRecordBuilder::new().times("13:00", "16:30").duration(3.5),
            ],
        );
        let day = only_day(aggregate_days(&config, &records));
        assert_eq!(day.total_hours_per_day, 7.5);
        assert_eq!(day.overtime, Overtime::No);
        assert_eq!(day.set_working_hours, Some(8.5));
        assert_eq!(day.idle_hours, Some(1.0));
        assert!((day.idle_time_percentage.unwrap() - 11.76).abs() < 0.01);
        assert_eq!(day.feedback, Feedback::TooMuchIdleTime);
    }

    #[rstest]
    fn it_should_mark_the_whole_day_as_overtime_when_one_span_crosses(config: IdleTimeConfig) {
        let records = classify(
            &config,
            vec![
                TimeRecordBuilder::new().times("08:00", "12:00").duration(4.0),
                TimeRecordBuilder::new().times("13:00", "18:40").duration(5.67),
            ],
        );
        let day = only_day(aggregate_days(&config, &records));
        assert_eq!(day.overtime, Overtime::Yes);
        assert_eq!(day.set_working_hours, Some(10.5));
        assert!((day.idle_hours.unwrap() - 0.83).abs() < 1e-9);
        assert_eq!(day.feedback, Feedback::GoodTime);
    }

    #[rstest]
    fn it_should_count_a_span_running_into_the_night_shift_as_overtime(config: IdleTimeConfig) {
        let records = classify(
            &config,
            vec![
                TimeRecordBuilder::new().times("08:00", "17:00").duration(9.0),
                TimeRecordBuilder::new().times("17:00", "20:00").duration(3.0),
            ],
        );
        let day = only_day(aggregate_days(&config, &records));
        assert_eq!(day.total_hours_per_day, 12.0);
        assert_eq!(day.overtime, Overtime::Yes);
        assert_eq!(day.set_working_hours, Some(10.5));
        assert_eq!(day.idle_hours, Some(-1.5));
        assert_eq!(day.feedback, Feedback::LeftTimeRunning);
    }

    #[rstest]
    fn it_should_keep_faulty_spans_out_of_the_day_total(config: IdleTimeConfig) {
        let records = classify(
            &config,
            vec![
                TimeRecordBuilder::new().times("08:00", "16:00").duration(8.0),
                TimeRecordBuilder::new().without_times().duration(3.0),
            ],
        );
        let day = only_day(aggregate_days(&config, &records));
        assert_eq!(day.total_hours_per_day, 8.0);
        assert_eq!(day.overtime, Overtime::No);
        assert_eq!(day.idle_hours, Some(0.5));
    }

    #[rstest]
    fn it_should_leave_a_day_of_only_faulty_spans_without_metrics(config: IdleTimeConfig) {
        let records = classify(
            &config,
            vec![TimeRecordBuilder::new().without_times().duration(3.0)],
        );
        let day = only_day(aggregate_days(&config, &records));
        assert_eq!(day.overtime, Overtime::FaultyData);
        assert_eq!(day.total_hours_per_day, 0.0);
        assert_eq!(day.set_working_hours, None);
        assert_eq!(day.idle_hours, None);
        assert_eq!(day.idle_time_percentage, None);
        assert_eq!(day.feedback, Feedback::Unknown);
    }

    #[rstest]
    fn it_should_sum_durations_of_each_day_exactly(config: IdleTimeConfig) {
        let durations = [(12, 1.25), (12, 2.5), (12, 0.75), (13, 4.0), (13, 3.3)];
        let builders = durations
            .iter()
            .map(|(day, hours)| {
                TimeRecordBuilder::new()
                    .date(2024, 9, *day)
                    .times("08:00", "12:00")
                    .duration(*hours)
            })
            .collect();
        let records = classify(&config, builders);
        let days = aggregate_days(&config, &records);
        assert_eq!(days.len(), 2);
        for (key, day) in &days {
            let expected: f64 = records
                .iter()
                .filter(|c| {
                    c.record.team_member == key.team_member
                        && c.record.started_on_date == key.date
                })
                .map(|c| c.record.duration_hours)
                .sum();
            assert_eq!(day.total_hours_per_day, expected);
        }
    }

    #[rstest]
    fn it_should_apply_overrides_to_the_day_feedback() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 12).unwrap();
        let config = IdleTimeConfig {
            overrides: vec![FeedbackOverride {
                team_member: "Bob".into(),
                date,
                label: "Medical Leave".into(),
            }],
            ..IdleTimeConfig::default()
        };
        let records = classify(
            &config,
            vec![TimeRecordBuilder::new().times("08:00", "09:00").duration(1.0)],
        );
        let day = only_day(aggregate_days(&config, &records));
        assert_eq!(day.feedback, Feedback::Override("Medical Leave".into()));
    }

    #[rstest]
    fn it_should_roll_days_up_into_weeks(config: IdleTimeConfig) {
        let records = classify(
            &config,
            vec![
                TimeRecordBuilder::new().date(2024, 9, 9).times("08:00", "16:00").duration(8.0),
                TimeRecordBuilder::new().date(2024, 9, 10).times("08:00", "16:00").duration(8.0),
                TimeRecordBuilder::new()
                    .date(2024, 9, 16)
                    .week("2024-W38")
                    .times("08:00", "12:00")
                    .duration(4.0),
            ],
        );
        let days = aggregate_days(&config, &records);
        let weeks = aggregate_weeks(&config, days.values());
        assert_eq!(weeks.len(), 2);

        let first = &weeks[0];
        assert_eq!(first.week, "2024-W37");
        assert_eq!(first.total_hours_week, 16.0);
        assert_eq!(first.total_idle_hours_week, 1.0);
        assert_eq!(first.set_working_hours_week, 17.0);
        assert_eq!(first.idle_time_percentage, Some(6.25));
        assert_eq!(first.feedback, Feedback::GoodTime);

        let second = &weeks[1];
        assert_eq!(second.week, "2024-W38");
        assert_eq!(second.total_idle_hours_week, 4.5);
        assert_eq!(second.idle_time_percentage, Some(112.5));
        assert_eq!(second.feedback, Feedback::TooMuchIdleTime);
    }

    #[rstest]
    fn it_should_leave_a_week_without_worked_hours_without_a_percentage(config: IdleTimeConfig) {
        let records = classify(
            &config,
            vec![TimeRecordBuilder::new().without_times().duration(2.0)],
        );
        let days = aggregate_days(&config, &records);
        let weeks = aggregate_weeks(&config, days.values());
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].idle_time_percentage, None);
        assert_eq!(weeks[0].feedback, Feedback::Unknown);
    }

    #[rstest]
    fn it_should_summarise_each_person_with_dominant_feedback(config: IdleTimeConfig) {
        let records = classify(
            &config,
            vec![
                TimeRecordBuilder::new().date(2024, 9, 9).times("08:00", "16:00").duration(8.0),
                TimeRecordBuilder::new().date(2024, 9, 10).times("08:00", "16:00").duration(8.2),
                TimeRecordBuilder::new().date(2024, 9, 11).times("08:00", "12:00").duration(4.0),
                TimeRecordBuilder::new()
                    .team_member("Alice")
                    .times("08:00", "12:00")
                    .duration(4.0),
                TimeRecordBuilder::new()
                    .team_member("Alice")
                    .date(2024, 9, 13)
                    .times("08:00", "16:00")
                    .duration(8.0),
            ],
        );
        let days = aggregate_days(&config, &records);
        let weeks = aggregate_weeks(&config, days.values());
        let day_refs: Vec<&DayAggregate> = days.values().collect();
        let people = aggregate_people(&config, &day_refs, &weeks);
        assert_eq!(people.len(), 2);

        let alice = &people[0];
        assert_eq!(alice.team_member, "Alice");
        assert_eq!(alice.total_hours, 12.0);
        assert_eq!(alice.daily_overall_feedback, OverallFeedback::NeedsInvestigation);
        assert_eq!(alice.weekly_overall_feedback.text(), "Try to reduce idle time");

        let bob = &people[1];
        assert_eq!(bob.team_member, "Bob");
        assert!((bob.total_hours - 20.2).abs() < 1e-9);
        assert!((bob.idle_hours - 5.3).abs() < 1e-9);
        assert_eq!(bob.set_working_hours, 25.5);
        assert_eq!(bob.daily_overall_feedback.text(), "Great job");
        assert_eq!(bob.total_time_feedback, Feedback::TooMuchIdleTime);
    }
}
