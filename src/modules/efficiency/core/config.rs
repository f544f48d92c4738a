// Tunable constants for the efficiency reports.
//
// Purpose
// - Hold the hour cut-offs, efficiency ceilings, exclusion list and the item category
//   keyword table as injected data.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const OTHER_CATEGORY: &str = "OTHER CATEGORY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

impl ItemCategory {
    fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EfficiencyConfig {
    /// Rows at or below this many hours are too short to judge.
    pub min_hours: f64,
    pub operation_max_efficiency: f64,
    pub item_max_efficiency: f64,
    pub excluded_employees: Vec<String>,
    /// Checked in order. The first category with a matching keyword wins.
    pub categories: Vec<ItemCategory>,
}

impl Default for EfficiencyConfig {
    fn default() -> Self {
        Self {
            min_hours: 0.5,
            operation_max_efficiency: 120.0,
            item_max_efficiency: 100.0,
            excluded_employees: Vec::new(),
            categories: vec![
                ItemCategory::new("MOE", &["millout", "moe"]),
                ItemCategory::new("TBR", &["tbr", "ext", "tieback", "extension", "extensions"]),
                ItemCategory::new("BODY", &["body", "bodies"]),
                ItemCategory::new("MANDREL", &["mandrel", "mandrels", "mndrel", "mndrl", "mdrl"]),
                ItemCategory::new("PBR", &["pbr", "polished", "bore"]),
                ItemCategory::new("FLOW COUPLING", &["flow coupling"]),
                ItemCategory::new("BLAST JOINT", &["blast joint"]),
                ItemCategory::new("CROSSOVER", &["crossover", "crossovers", "xover", "sub"]),
            ],
        }
    }
}

impl EfficiencyConfig {
    pub fn exclusions(&self) -> HashSet<&str> {
        self.excluded_employees.iter().map(|name| name.trim()).collect()
    }

    /// Case-insensitive substring match against the keyword table.
    pub fn categorize(&self, description: &str) -> &str {
        let description = description.to_lowercase();
        self.categories
            .iter()
            .find(|category| {
                category
                    .keywords
                    .iter()
                    .any(|keyword| description.contains(&keyword.to_lowercase()))
            })
            .map(|category| category.name.as_str())
            .unwrap_or(OTHER_CATEGORY)
    }
}
