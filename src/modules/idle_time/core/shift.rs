// Shift classification for a single clock span.
//
// Purpose
// - Decide whether a span sits inside the day shift, inside the night shift, or crosses a
//   shift change (overtime).
//
// Responsibilities
// - Evaluate an ordered rule table. The first matching rule wins; no match is faulty data.
// - Window edges belong to the window. The crossing gaps between windows are open intervals.
// - A span starting in one window and ending in the other has crossed a shift change, so it
//   is overtime even when neither end sits inside a gap.
// - Never look at dates or durations. A night span past midnight is still a night span.

use crate::modules::idle_time::core::config::IdleTimeConfig;
use chrono::NaiveTime;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShiftClass {
    Day,
    Night,
    MixedOvertime,
    FaultyData,
}

impl ShiftClass {
    pub fn overtime(self) -> Overtime {
        match self {
            ShiftClass::Day | ShiftClass::Night => Overtime::No,
            ShiftClass::MixedOvertime => Overtime::Yes,
            ShiftClass::FaultyData => Overtime::FaultyData,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Overtime {
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
    #[serde(rename = "FAULTY DATA")]
    FaultyData,
}

impl fmt::Display for Overtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Overtime::Yes => "YES",
            Overtime::No => "NO",
            Overtime::FaultyData => "FAULTY DATA",
        })
    }
}

struct ShiftRule {
    class: ShiftClass,
    applies: fn(&IdleTimeConfig, NaiveTime, NaiveTime) -> bool,
}

const SHIFT_RULES: [ShiftRule; 4] = [
    ShiftRule {
        class: ShiftClass::MixedOvertime,
        applies: touches_crossing_gap,
    },
    ShiftRule {
        class: ShiftClass::Day,
        applies: inside_day_window,
    },
    ShiftRule {
        class: ShiftClass::Night,
        applies: inside_night_window,
    },
    ShiftRule {
        class: ShiftClass::MixedOvertime,
        applies: crosses_shift_change,
    },
];

fn touches_crossing_gap(config: &IdleTimeConfig, start: NaiveTime, end: NaiveTime) -> bool {
    in_crossing_gap(config, start) || in_crossing_gap(config, end)
}

fn inside_day_window(config: &IdleTimeConfig, start: NaiveTime, end: NaiveTime) -> bool {
    config.day_window.contains(start) && config.day_window.contains(end)
}

fn inside_night_window(config: &IdleTimeConfig, start: NaiveTime, end: NaiveTime) -> bool {
    config.night_window.contains(start) && config.night_window.contains(end)
}

fn crosses_shift_change(config: &IdleTimeConfig, start: NaiveTime, end: NaiveTime) -> bool {
    let (day, night) = (&config.day_window, &config.night_window);
    (day.contains(start) && night.contains(end)) || (night.contains(start) && day.contains(end))
}

fn strictly_between(after: NaiveTime, before: NaiveTime, time: NaiveTime) -> bool {
    after < time && time < before
}

/// True inside the morning gap (night end to day start) or the evening gap (day end to
/// night start).
pub fn in_crossing_gap(config: &IdleTimeConfig, time: NaiveTime) -> bool {
    strictly_between(config.night_window.end, config.day_window.start, time)
        || strictly_between(config.day_window.end, config.night_window.start, time)
}

pub fn classify_shift(
    config: &IdleTimeConfig,
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
) -> ShiftClass {
    let (Some(start), Some(end)) = (start, end) else {
        return ShiftClass::FaultyData;
    };
    SHIFT_RULES
        .iter()
        .find(|rule| (rule.applies)(config, start, end))
        .map(|rule| rule.class)
        .unwrap_or(ShiftClass::FaultyData)
}
