use crate::shared::core::primitives::serialize_round2;
use serde::Serialize;
use std::collections::BTreeMap;

/// One judged row: how long it was planned to take against how long it took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EfficiencySample<'a> {
    pub group: &'a str,
    pub efficiency: f64,
    pub estimated_hours: f64,
    pub spent_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAverage {
    pub name: String,
    #[serde(serialize_with = "serialize_round2")]
    pub average_efficiency: f64,
    #[serde(serialize_with = "serialize_round2")]
    pub average_estimated_hours: f64,
    #[serde(serialize_with = "serialize_round2")]
    pub average_spent_hours: f64,
    pub samples: usize,
}

/// Arithmetic means per group, ordered by group name.
pub fn group_averages<'a, I>(samples: I) -> Vec<GroupAverage>
where
    I: IntoIterator<Item = EfficiencySample<'a>>,
{
    let mut sums: BTreeMap<&str, (f64, f64, f64, usize)> = BTreeMap::new();
    for sample in samples {
        let entry = sums.entry(sample.group).or_default();
        entry.0 += sample.efficiency;
        entry.1 += sample.estimated_hours;
        entry.2 += sample.spent_hours;
        entry.3 += 1;
    }
    sums.into_iter()
        .map(|(name, (efficiency, estimated, spent, count))| {
            let n = count as f64;
            GroupAverage {
                name: name.to_string(),
                average_efficiency: efficiency / n,
                average_estimated_hours: estimated / n,
                average_spent_hours: spent / n,
                samples: count,
            }
        })
        .collect()
}
