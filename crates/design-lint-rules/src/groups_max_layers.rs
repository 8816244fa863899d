//! Rule limiting the number of direct children of a group.
//!
//! # Configuration
//!
//! - `maxLayers`: Maximum number of layers in a group (default: 50)

use design_lint_core::{Class, OptionDecl, Rule, RuleContext, RuleError, Severity};

/// Rule code for groups-max-layers.
pub const CODE: &str = "DL013";

/// Rule name for groups-max-layers.
pub const NAME: &str = "groups-max-layers";

const MAX_LAYERS: &str = "maxLayers";

/// Restricts the number of layers in a group.
#[derive(Debug, Clone)]
pub struct GroupsMaxLayers {
    max_layers: i64,
    severity: Severity,
}

impl Default for GroupsMaxLayers {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupsMaxLayers {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_layers: 50,
            severity: Severity::Error,
        }
    }

    /// Sets the default for `maxLayers`.
    #[must_use]
    pub fn max_layers(mut self, max: i64) -> Self {
        self.max_layers = max;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for GroupsMaxLayers {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "Max Layers in Group"
    }

    fn description(&self) -> &'static str {
        "Restrict the number of layers in a group"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn options(&self) -> Vec<OptionDecl> {
        vec![OptionDecl::integer(
            MAX_LAYERS,
            "Max Layers",
            "Maximum number of layers allowed in a group",
        )
        .minimum(1.0)
        .default_value(self.max_layers)]
    }

    fn check(&self, ctx: &mut RuleContext<'_>) -> Result<(), RuleError> {
        let max_layers = ctx.options().integer(MAX_LAYERS)?;
        let doc = ctx.document();

        for group in doc.nodes_of(Class::Group) {
            let count = group.children().len();
            if i64::try_from(count).map_or(true, |n| n > max_layers) {
                ctx.report(
                    group.id(),
                    format!("Found {count} layers in group, expected at most {max_layers}"),
                );
            }
        }

        Ok(())
    }
}
