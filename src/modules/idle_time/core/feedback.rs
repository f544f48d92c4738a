// Feedback labels for an idle time percentage.
//
// Purpose
// - Map a percentage to one of the fixed labels, unless a manual override exists for the
//   team member and date.
//
// Responsibilities
// - Overrides win over any computed value, including a missing one.
// - Comparisons are strict on both thresholds. A value sitting exactly on a threshold, or a
//   missing value, is Unknown.

use crate::modules::idle_time::core::config::{FeedbackThresholds, OverrideTable};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

pub const LEFT_TIME_RUNNING: &str = "Left Time Running";
pub const GOOD_TIME: &str = "Good Time";
pub const TOO_MUCH_IDLE_TIME: &str = "Too Much Idle Time";
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Feedback {
    LeftTimeRunning,
    GoodTime,
    TooMuchIdleTime,
    Unknown,
    /// Manual correction such as recorded leave, reported verbatim.
    Override(String),
}

impl Feedback {
    pub fn label(&self) -> &str {
        match self {
            Feedback::LeftTimeRunning => LEFT_TIME_RUNNING,
            Feedback::GoodTime => GOOD_TIME,
            Feedback::TooMuchIdleTime => TOO_MUCH_IDLE_TIME,
            Feedback::Unknown => UNKNOWN,
            Feedback::Override(label) => label,
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Feedback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

pub fn classify_percentage(percentage: Option<f64>, thresholds: &FeedbackThresholds) -> Feedback {
    match percentage {
        Some(p) if p < thresholds.lower => Feedback::LeftTimeRunning,
        Some(p) if thresholds.lower < p && p < thresholds.upper => Feedback::GoodTime,
        Some(p) if p > thresholds.upper => Feedback::TooMuchIdleTime,
        _ => Feedback::Unknown,
    }
}

pub fn feedback(
    percentage: Option<f64>,
    team_member: &str,
    date: Option<NaiveDate>,
    overrides: &OverrideTable,
    thresholds: &FeedbackThresholds,
) -> Feedback {
    if let Some(label) = date.and_then(|d| overrides.get(team_member, d)) {
        return Feedback::Override(label.to_string());
    }
    classify_percentage(percentage, thresholds)
}
