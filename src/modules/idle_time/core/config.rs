// Tunable business constants for the idle time report.
//
// Purpose
// - Hold the shift windows, baseline hours, feedback thresholds, exclusion list and manual
//   overrides as injected data so every rule can be exercised against fixtures.
//
// Boundaries
// - Plain data. Loading from disk lives in the shell.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ShiftWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Inclusive at both edges. A window whose end is before its start wraps past midnight.
    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.start <= self.end {
            self.start <= time && time <= self.end
        } else {
            time >= self.start || time <= self.end
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineHours {
    pub normal: f64,
    pub overtime: f64,
}

impl Default for BaselineHours {
    fn default() -> Self {
        Self {
            normal: 8.5,
            overtime: 10.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedbackThresholds {
    pub lower: f64,
    pub upper: f64,
}

impl Default for FeedbackThresholds {
    fn default() -> Self {
        Self {
            lower: -10.0,
            upper: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackOverride {
    pub team_member: String,
    pub date: NaiveDate,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    entries: HashMap<(String, NaiveDate), String>,
}

impl OverrideTable {
    pub fn insert(
        &mut self,
        team_member: impl Into<String>,
        date: NaiveDate,
        label: impl Into<String>,
    ) {
        self.entries.insert((team_member.into(), date), label.into());
    }

    pub fn get(&self, team_member: &str, date: NaiveDate) -> Option<&str> {
        self.entries
            .get(&(team_member.to_string(), date))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<FeedbackOverride> for OverrideTable {
    fn from_iter<I: IntoIterator<Item = FeedbackOverride>>(iter: I) -> Self {
        let mut table = Self::default();
        for entry in iter {
            table.insert(entry.team_member, entry.date, entry.label);
        }
        table
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdleTimeConfig {
    pub day_window: ShiftWindow,
    pub night_window: ShiftWindow,
    pub baseline_hours: BaselineHours,
    pub thresholds: FeedbackThresholds,
    pub min_duration_hours: f64,
    pub excluded_team_members: Vec<String>,
    pub overrides: Vec<FeedbackOverride>,
}

impl Default for IdleTimeConfig {
    fn default() -> Self {
        Self {
            day_window: ShiftWindow::new(hm(7, 45), hm(18, 15)),
            night_window: ShiftWindow::new(hm(19, 45), hm(6, 15)),
            baseline_hours: BaselineHours::default(),
            thresholds: FeedbackThresholds::default(),
            min_duration_hours: 0.01,
            excluded_team_members: Vec::new(),
            overrides: Vec::new(),
        }
    }
}

impl IdleTimeConfig {
    pub fn exclusions(&self) -> HashSet<&str> {
        self.excluded_team_members
            .iter()
            .map(|name| name.trim())
            .collect()
    }

    pub fn override_table(&self) -> OverrideTable {
        self.overrides.iter().cloned().collect()
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}
