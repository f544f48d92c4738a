// Idle hours against the expected shift length.
//
// Purpose
// - Pick the baseline for a day from its overtime flag and measure the gap to the hours worked.
//
// Responsibilities
// - No clamping. Negative idle hours mean the timer ran past the baseline.
// - Faulty days have no baseline, so every derived value is None.

use crate::modules::idle_time::core::config::BaselineHours;
use crate::modules::idle_time::core::shift::Overtime;
use crate::shared::core::primitives::finite_ratio;

pub fn set_working_hours(baseline: &BaselineHours, overtime: Overtime) -> Option<f64> {
    match overtime {
        Overtime::Yes => Some(baseline.overtime),
        Overtime::No => Some(baseline.normal),
        Overtime::FaultyData => None,
    }
}

pub fn idle_hours(
    baseline: &BaselineHours,
    total_hours_per_day: f64,
    overtime: Overtime,
) -> Option<f64> {
    set_working_hours(baseline, overtime).map(|expected| expected - total_hours_per_day)
}

pub fn idle_time_percentage(
    idle_hours: Option<f64>,
    set_working_hours: Option<f64>,
) -> Option<f64> {
    match (idle_hours, set_working_hours) {
        (Some(idle), Some(expected)) => finite_ratio(idle, expected).map(|ratio| ratio * 100.0),
        _ => None,
    }
}
