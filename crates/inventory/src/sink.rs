//! Reporting sinks: where rendered items and operation outcomes go.

use stockroom_core::InventoryError;

use crate::operations::Operation;

/// One reportable line produced by the category operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Section title emitted by the driver (e.g. before listing a category).
    Heading(String),
    /// A rendered item of the given category.
    Item { category: &'static str, line: String },
    /// A mutation that went through.
    Success(String),
    /// A mutation rejected by the repository.
    Failure {
        operation: Operation,
        error: InventoryError,
    },
}

impl core::fmt::Display for Report {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Report::Heading(title) => write!(f, "--- {title} ---"),
            Report::Item { line, .. } => f.write_str(line),
            Report::Success(message) => f.write_str(message),
            Report::Failure { operation, error } => write!(f, "Error {operation}: {error}"),
        }
    }
}

/// Destination for reports (console, log, API response buffer, ...).
pub trait ReportSink {
    fn report(&mut self, report: Report);
}

impl<S> ReportSink for &mut S
where
    S: ReportSink + ?Sized,
{
    fn report(&mut self, report: Report) {
        (**self).report(report)
    }
}

/// Sink that keeps every report in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    reports: Vec<Report>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Rendered form of every report, in arrival order.
    pub fn lines(&self) -> Vec<String> {
        self.reports.iter().map(ToString::to_string).collect()
    }

    pub fn failures(&self) -> impl Iterator<Item = &InventoryError> {
        self.reports.iter().filter_map(|r| match r {
            Report::Failure { error, .. } => Some(error),
            _ => None,
        })
    }
}

impl ReportSink for MemorySink {
    fn report(&mut self, report: Report) {
        self.reports.push(report);
    }
}
