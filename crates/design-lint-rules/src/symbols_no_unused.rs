//! Rule forbidding symbol masters that no instance uses.

use design_lint_core::{Class, Rule, RuleContext, RuleError, Severity};
use std::collections::HashSet;

/// Rule code for symbols-no-unused.
pub const CODE: &str = "DL016";

/// Rule name for symbols-no-unused.
pub const NAME: &str = "symbols-no-unused";

/// Disallows symbol masters without any instance in the document.
#[derive(Debug, Clone)]
pub struct SymbolsNoUnused {
    severity: Severity,
}

impl Default for SymbolsNoUnused {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolsNoUnused {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for SymbolsNoUnused {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "No Unused Symbols"
    }

    fn description(&self) -> &'static str {
        "Disallow symbols that are not used by any symbol instance"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &mut RuleContext<'_>) -> Result<(), RuleError> {
        let doc = ctx.document();

        let used: HashSet<&str> = doc
            .nodes_of(Class::SymbolInstance)
            .filter_map(|node| node.as_layer()?.symbol_id.as_deref())
            .collect();

        for node in doc.nodes_of(Class::SymbolMaster) {
            // A master without an id cannot be instantiated or checked.
            let Some(symbol_id) = node.as_layer().and_then(|l| l.symbol_id.as_deref()) else {
                continue;
            };
            if !used.contains(symbol_id) {
                ctx.report(node.id(), "Unexpected unused symbol");
            }
        }

        Ok(())
    }
}
