//! Side channel for issues that do not stop a row.
//!
//! Nothing in here feeds back into the generated triples; the counters exist
//! so an operator can see which vocabulary terms and columns need attention
//! after a run.

use std::collections::BTreeMap;

/// An item a transformer skipped without failing the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    UnknownCommunity(String),
    UnknownLearningResourceType(String),
}

impl Skip {
    fn message(&self) -> String {
        match self {
            Skip::UnknownCommunity(name) => format!("unknown community: {}", name),
            Skip::UnknownLearningResourceType(value) => {
                format!("unable to lookup learning resource type: {}", value)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    source_name: String,
    warnings: Vec<DiagnosticMessage>,
    missing_communities: BTreeMap<String, usize>,
    unresolved_terms: BTreeMap<(&'static str, String), usize>,
    unprocessed_columns: BTreeMap<String, usize>,
    failed_rows: usize,
}

impl Diagnostics {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            ..Default::default()
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn set_source_name(&mut self, source_name: impl Into<String>) {
        self.source_name = source_name.into();
    }

    /// Writes a `[<source> line:<n>] <message>` warning.
    pub fn log(&mut self, line: usize, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("[{} line:{}] {}", self.source_name, line, message);
        self.warnings.push(DiagnosticMessage { line, message });
    }

    /// Unknown communities are logged the first time they are seen and only
    /// counted afterwards.
    pub fn record_skip(&mut self, line: usize, skip: Skip) {
        match &skip {
            Skip::UnknownCommunity(name) => {
                let count = self.missing_communities.entry(name.clone()).or_insert(0);
                *count += 1;
                if *count == 1 {
                    self.log(line, skip.message());
                }
            }
            Skip::UnknownLearningResourceType(value) => {
                *self
                    .unresolved_terms
                    .entry(("learning resource type", value.clone()))
                    .or_insert(0) += 1;
                self.log(line, skip.message());
            }
        }
    }

    pub fn record_unprocessed_column(&mut self, column: &str) {
        *self
            .unprocessed_columns
            .entry(column.to_string())
            .or_insert(0) += 1;
    }

    pub fn record_failed_row(&mut self, line: usize, message: impl Into<String>) {
        self.failed_rows += 1;
        let message = message.into();
        tracing::error!("{}", message);
        self.warnings.push(DiagnosticMessage { line, message });
    }

    pub fn warnings(&self) -> &[DiagnosticMessage] {
        &self.warnings
    }

    pub fn missing_communities(&self) -> &BTreeMap<String, usize> {
        &self.missing_communities
    }

    pub fn unresolved_terms(&self) -> &BTreeMap<(&'static str, String), usize> {
        &self.unresolved_terms
    }

    pub fn unprocessed_columns(&self) -> &BTreeMap<String, usize> {
        &self.unprocessed_columns
    }

    pub fn failed_rows(&self) -> usize {
        self.failed_rows
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Clears all counters, keeping the source name.
    pub fn reset(&mut self) {
        let source_name = std::mem::take(&mut self.source_name);
        *self = Self::new(source_name);
    }

    pub fn merge(&mut self, other: Diagnostics) {
        self.warnings.extend(other.warnings);
        for (name, count) in other.missing_communities {
            *self.missing_communities.entry(name).or_insert(0) += count;
        }
        for (term, count) in other.unresolved_terms {
            *self.unresolved_terms.entry(term).or_insert(0) += count;
        }
        for (column, count) in other.unprocessed_columns {
            *self.unprocessed_columns.entry(column).or_insert(0) += count;
        }
        self.failed_rows += other.failed_rows;
    }

    /// Emits the end-of-run counters through `tracing`.
    pub fn log_summary(&self) {
        for (name, count) in &self.missing_communities {
            tracing::info!("Unknown community {:?} seen {} time(s)", name, count);
        }
        for ((vocabulary, term), count) in &self.unresolved_terms {
            tracing::info!("Unresolved {} {:?} seen {} time(s)", vocabulary, term, count);
        }
        for (column, count) in &self.unprocessed_columns {
            tracing::info!("Column {:?} was not processed in {} row(s)", column, count);
        }
        if self.failed_rows > 0 {
            tracing::warn!("{} row(s) failed", self.failed_rows);
        }
    }
}
