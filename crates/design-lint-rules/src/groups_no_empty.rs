//! Rule forbidding groups without children.

use design_lint_core::{Class, Rule, RuleContext, RuleError, Severity};

/// Rule code for groups-no-empty.
pub const CODE: &str = "DL010";

/// Rule name for groups-no-empty.
pub const NAME: &str = "groups-no-empty";

/// Disallows empty groups.
#[derive(Debug, Clone)]
pub struct GroupsNoEmpty {
    severity: Severity,
}

impl Default for GroupsNoEmpty {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupsNoEmpty {
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

impl Rule for GroupsNoEmpty {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "No Empty Groups"
    }

    fn description(&self) -> &'static str {
        "Disallow empty groups"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &mut RuleContext<'_>) -> Result<(), RuleError> {
        let doc = ctx.document();
        for group in doc.nodes_of(Class::Group) {
            if group.children().is_empty() {
                ctx.report(group.id(), "Unexpected empty group");
            }
        }
        Ok(())
    }
}
