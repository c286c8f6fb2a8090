// src/models/record.rs

//! Parsed record and composite fetch result types.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::AppError;

/// One normalized record: field name to scalar value, in declared field
/// order (`serde_json` is built with `preserve_order`).
pub type Record = Map<String, Value>;

/// Outcome of one report fetch within a composite operation.
///
/// Distinguishes "succeeded with data", "succeeded but the program has no
/// data for this report", and "failed".
#[derive(Debug)]
pub enum ReportOutcome {
    Data(Value),
    Empty(Value),
    Failed(AppError),
}

impl ReportOutcome {
    /// Classify a successful parse as data-bearing or empty.
    pub fn classify(value: Value) -> Self {
        if is_empty_value(&value) {
            ReportOutcome::Empty(value)
        } else {
            ReportOutcome::Data(value)
        }
    }

    /// The parsed value, if the fetch succeeded.
    pub fn value(&self) -> Option<&Value> {
        match self {
            ReportOutcome::Data(v) | ReportOutcome::Empty(v) => Some(v),
            ReportOutcome::Failed(_) => None,
        }
    }

    /// The error, if the fetch failed.
    pub fn error(&self) -> Option<&AppError> {
        match self {
            ReportOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ReportOutcome::Failed(_))
    }
}

/// A value is empty when it carries no records anywhere: an empty array,
/// an object whose members are all empty, or null.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.values().all(is_empty_value),
        _ => false,
    }
}

/// Summary of a composite fetch across all reports of one track.
#[derive(Debug, Default)]
pub struct FetchSummary {
    /// Per-report outcomes, keyed by report name
    pub reports: BTreeMap<String, ReportOutcome>,
    /// Reports that returned data
    pub succeeded: usize,
    /// Reports that succeeded but returned no data
    pub empty: usize,
    /// Reports that failed
    pub failed: usize,
}

impl FetchSummary {
    /// Record one report outcome, updating the counters.
    pub fn record(&mut self, report: &str, outcome: ReportOutcome) {
        match &outcome {
            ReportOutcome::Data(_) => self.succeeded += 1,
            ReportOutcome::Empty(_) => self.empty += 1,
            ReportOutcome::Failed(_) => self.failed += 1,
        }
        self.reports.insert(report.to_string(), outcome);
    }

    /// Total number of reports attempted.
    pub fn total(&self) -> usize {
        self.succeeded + self.empty + self.failed
    }
}
