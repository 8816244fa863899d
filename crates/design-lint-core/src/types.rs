//! Core types for lint violations and results.

use crate::document::{Document, NodeId};
use crate::model::Class;

use serde::{Deserialize, Serialize};

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Where in the document a violation was found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Arena index of the node.
    pub node: usize,
    /// Object identifier of the node.
    pub object_id: String,
    /// Class discriminant of the node.
    pub class: String,
    /// Node name.
    pub name: String,
    /// Names from the page down to the node, joined with ` / `.
    pub path: String,
}

impl Location {
    /// Describes a node of `document`.
    #[must_use]
    pub fn of(document: &Document, id: NodeId) -> Self {
        let node = document.node(id);
        Self {
            node: id.index(),
            object_id: node.map(|n| n.object_id().to_string()).unwrap_or_default(),
            class: node.map_or(Class::Other, |n| n.class()).to_string(),
            name: node.map(|n| n.name().to_string()).unwrap_or_default(),
            path: document.path(id),
        }
    }
}

/// A lint violation found during analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "DL001").
    pub code: String,
    /// Rule name (e.g., "text-styles-prefer-shared").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Offending node.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
        }
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {} ({} {})\n",
            self.code, self.rule, self.location.path, self.location.class, self.location.object_id,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.location.path, self.severity, self.code, self.message
        )
    }
}

/// Result of running lint analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found, in rule order then emission order.
    pub violations: Vec<Violation>,
    /// Number of rules that ran.
    pub rules_run: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Returns true if there are any warnings or errors.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity >= Severity::Warning)
    }

    /// Returns violations filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .collect()
    }

    /// Returns violations reported by one rule.
    #[must_use]
    pub fn by_rule(&self, rule: &str) -> Vec<&Violation> {
        self.violations.iter().filter(|v| v.rule == rule).collect()
    }

    /// Counts violations by severity.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |severity| {
            self.violations
                .iter()
                .filter(|v| v.severity == severity)
                .count()
        };
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Prints a summary report to stdout.
    pub fn print_report(&self) {
        print!("{}", self.format_report());
    }

    /// Formats every violation followed by a summary line.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        let mut report = String::new();
        for violation in &self.violations {
            let _ = writeln!(report, "{}", violation.format());
        }
        let (errors, warnings, infos) = self.count_by_severity();
        let _ = writeln!(
            report,
            "Found {} error(s), {} warning(s), {} info(s) from {} rule(s)",
            errors, warnings, infos, self.rules_run
        );
        report
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Adds violations from another result.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.rules_run += other.rules_run;
    }
}
