//! Rule forbidding disabled borders in layer and shared styles.
//!
//! A disabled border stays in the file but has no visible effect, which
//! makes styles look different when they are not.

use crate::helpers::report_disabled;
use design_lint_core::{Rule, RuleContext, RuleError, Severity, Style, StyleEntry};

/// Rule code for borders-no-disabled.
pub const CODE: &str = "DL004";

/// Rule name for borders-no-disabled.
pub const NAME: &str = "borders-no-disabled";

/// Disallows disabled border properties.
#[derive(Debug, Clone)]
pub struct BordersNoDisabled {
    severity: Severity,
}

impl Default for BordersNoDisabled {
    fn default() -> Self {
        Self::new()
    }
}

impl BordersNoDisabled {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

fn borders(style: &Style) -> Option<&[StyleEntry]> {
    style.borders.as_deref()
}

impl Rule for BordersNoDisabled {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "No Disabled Borders"
    }

    fn description(&self) -> &'static str {
        "Forbids disabled border properties in layer and shared styles"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &mut RuleContext<'_>) -> Result<(), RuleError> {
        report_disabled(
            ctx,
            borders,
            "There's a disabled border in this layer style",
            "There's a disabled border in this shared style",
        );
        Ok(())
    }
}
