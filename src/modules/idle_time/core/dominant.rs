// Dominant feedback of a group of labels.
//
// Purpose
// - Summarise many feedback labels (days of a person, weeks of a person) into one message.
//
// Responsibilities
// - Count labels by their text, so the result does not depend on input order.
// - A unique most frequent label maps through the message table. A tie on the highest count
//   is "Needs Investigation", whatever the tied labels are.
// - A unique winner with no message (an override label) is "Mixed Feedback".

use crate::modules::idle_time::core::feedback::{
    Feedback, GOOD_TIME, LEFT_TIME_RUNNING, TOO_MUCH_IDLE_TIME, UNKNOWN,
};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

pub const NEEDS_INVESTIGATION: &str = "Needs Investigation";
pub const MIXED_FEEDBACK: &str = "Mixed Feedback";

const FEEDBACK_MESSAGES: [(&str, &str); 4] = [
    (LEFT_TIME_RUNNING, "Leaves timer running usually"),
    (GOOD_TIME, "Great job"),
    (TOO_MUCH_IDLE_TIME, "Try to reduce idle time"),
    (UNKNOWN, "Unknown issue, needs investigation"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverallFeedback {
    Message(&'static str),
    NeedsInvestigation,
    MixedFeedback,
}

impl OverallFeedback {
    pub fn text(&self) -> &'static str {
        match *self {
            OverallFeedback::Message(message) => message,
            OverallFeedback::NeedsInvestigation => NEEDS_INVESTIGATION,
            OverallFeedback::MixedFeedback => MIXED_FEEDBACK,
        }
    }
}

impl fmt::Display for OverallFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl Serialize for OverallFeedback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.text())
    }
}

pub fn feedback_message(label: &str) -> Option<&'static str> {
    FEEDBACK_MESSAGES
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, message)| *message)
}

pub fn dominant_feedback<'a, I>(labels: I) -> OverallFeedback
where
    I: IntoIterator<Item = &'a Feedback>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for feedback in labels {
        *counts.entry(feedback.label()).or_default() += 1;
    }

    let Some(max_count) = counts.values().copied().max() else {
        return OverallFeedback::Message(feedback_message(UNKNOWN).unwrap_or(UNKNOWN));
    };
    let mut leaders = counts
        .iter()
        .filter(|(_, count)| **count == max_count)
        .map(|(label, _)| *label);

    match (leaders.next(), leaders.next()) {
        (Some(label), None) => feedback_message(label)
            .map(OverallFeedback::Message)
            .unwrap_or(OverallFeedback::MixedFeedback),
        _ => OverallFeedback::NeedsInvestigation,
    }
}
