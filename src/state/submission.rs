//! History of accepted submissions

use super::forms::{SubmissionSink, ValueMap};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One accepted submit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub values: ValueMap,
    pub submitted_at: DateTime<Utc>,
}

/// Collects every accepted value map, newest last
#[derive(Debug, Clone, Default)]
pub struct SubmissionLog {
    entries: Vec<Submission>,
}

impl SubmissionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&Submission> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[Submission] {
        &self.entries
    }

    /// Pretty JSON of the latest submitted values
    pub fn latest_json(&self) -> Option<String> {
        self.latest()
            .and_then(|s| serde_json::to_string_pretty(&s.values).ok())
    }
}

impl SubmissionSink for SubmissionLog {
    fn accept(&mut self, values: &ValueMap) {
        tracing::info!(fields = values.len(), "Form submitted");
        self.entries.push(Submission {
            values: values.clone(),
            submitted_at: Utc::now(),
        });
    }
}
