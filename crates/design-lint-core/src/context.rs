//! Context passed to a rule invocation.

use crate::document::{Document, NodeId};
use crate::options::ResolvedOptions;
use crate::reporter::{Diagnostic, Reporter};

/// State of a single rule invocation.
///
/// Holds the read-only document, the options resolved for this run and the
/// reporter the rule writes to. A fresh context is built for every
/// invocation, so nothing carries over between runs.
#[derive(Debug)]
pub struct RuleContext<'a> {
    document: &'a Document,
    options: ResolvedOptions,
    reporter: Reporter,
}

impl<'a> RuleContext<'a> {
    /// Creates a new context.
    #[must_use]
    pub fn new(document: &'a Document, options: ResolvedOptions) -> Self {
        Self {
            document,
            options,
            reporter: Reporter::new(),
        }
    }

    /// The document under inspection.
    #[must_use]
    pub fn document(&self) -> &'a Document {
        self.document
    }

    /// Options resolved for this invocation.
    #[must_use]
    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// Reports a problem on a node.
    pub fn report(&mut self, node: NodeId, message: impl Into<String>) {
        self.reporter.report(Diagnostic::new(node, message));
    }

    /// Reports several problems at once.
    pub fn report_all(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.reporter.report_all(diagnostics);
    }

    /// Diagnostics reported so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.reporter.diagnostics()
    }

    /// Consumes the context, returning the reported diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.reporter.into_diagnostics()
    }
}
