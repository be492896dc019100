//! Stable, diffable report record for external consumers.
//!
//! Field names and nesting never change across runs:
//!
//! ```json
//! {
//!   "configuration": { "max_capacity": ..., "total_items": ..., "timestamp": "..." },
//!   "all_items": [ ... ],
//!   "optimization_results": { "selected_items": [ ... ], "summary": { ... } }
//! }
//! ```

use crate::catalog::Item;
use crate::dispatch::OptimizationOutcome;
use crate::solution::Summary;
use serde::{Deserialize, Serialize};

/// Run parameters recorded alongside the results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfiguration {
    /// Capacity the run was solved against.
    pub max_capacity: f64,
    /// Size of the input catalog.
    pub total_items: usize,
    /// Creation time, `%Y%m%d_%H%M%S`.
    pub timestamp: String,
}

/// The results half of the record: what was selected and its summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResults {
    /// Chosen items, full records.
    pub selected_items: Vec<Item>,
    /// Derived summary.
    pub summary: Summary,
}

/// One complete optimization report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Run parameters.
    pub configuration: ReportConfiguration,
    /// The full input catalog, selected or not.
    pub all_items: Vec<Item>,
    /// Selection and summary.
    pub optimization_results: OptimizationResults,
}

impl Report {
    /// Builds a report stamped with the current local time.
    pub fn new(items: &[Item], outcome: &OptimizationOutcome, capacity: f64) -> Self {
        let timestamp = jiff::Zoned::now().strftime("%Y%m%d_%H%M%S").to_string();
        Self::with_timestamp(items, outcome, capacity, timestamp)
    }

    /// Builds a report with an explicit timestamp, for deterministic tests
    /// and replayed runs.
    pub fn with_timestamp(
        items: &[Item],
        outcome: &OptimizationOutcome,
        capacity: f64,
        timestamp: String,
    ) -> Self {
        Self {
            configuration: ReportConfiguration {
                max_capacity: capacity,
                total_items: items.len(),
                timestamp,
            },
            all_items: items.to_vec(),
            optimization_results: OptimizationResults {
                selected_items: outcome.selection.selected_items.clone(),
                summary: outcome.summary.clone(),
            },
        }
    }

    /// File name this report would be saved under.
    pub fn file_name(&self) -> String {
        format!("knapsack_results_{}.json", self.configuration.timestamp)
    }

    /// Pretty-printed JSON encoding.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a report back from its JSON encoding.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
