//! Rule forbidding shared styles that no layer uses.

use design_lint_core::{Rule, RuleContext, RuleError, Severity};
use std::collections::HashSet;

/// Rule code for shared-styles-no-unused.
pub const CODE: &str = "DL015";

/// Rule name for shared-styles-no-unused.
pub const NAME: &str = "shared-styles-no-unused";

/// Disallows unused layer and text shared styles.
#[derive(Debug, Clone)]
pub struct SharedStylesNoUnused {
    severity: Severity,
}

impl Default for SharedStylesNoUnused {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedStylesNoUnused {
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

impl Rule for SharedStylesNoUnused {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "No Unused Shared Styles"
    }

    fn description(&self) -> &'static str {
        "Disallow shared styles that are not used by any layer"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &mut RuleContext<'_>) -> Result<(), RuleError> {
        let doc = ctx.document();

        let used: HashSet<&str> = doc
            .layers()
            .filter_map(|node| node.as_layer()?.shared_style_id.as_deref())
            .collect();

        for node in doc.shared_styles() {
            if !used.contains(node.object_id()) {
                ctx.report(node.id(), "Unexpected unused shared style");
            }
        }

        Ok(())
    }
}
