//! Rule forbidding hidden layers.

use design_lint_core::{Rule, RuleContext, RuleError, Severity};

/// Rule code for layers-no-hidden.
pub const CODE: &str = "DL014";

/// Rule name for layers-no-hidden.
pub const NAME: &str = "layers-no-hidden";

/// Disallows layers that are switched off.
#[derive(Debug, Clone)]
pub struct LayersNoHidden {
    severity: Severity,
}

impl Default for LayersNoHidden {
    fn default() -> Self {
        Self::new()
    }
}

impl LayersNoHidden {
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

impl Rule for LayersNoHidden {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "No Hidden Layers"
    }

    fn description(&self) -> &'static str {
        "Disallow hidden layers"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &mut RuleContext<'_>) -> Result<(), RuleError> {
        let doc = ctx.document();
        for node in doc.layers() {
            if node.as_layer().is_some_and(|layer| !layer.is_visible) {
                ctx.report(node.id(), "Unexpected hidden layer");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::testing::{doc, page, reported_ids, run};
    use serde_json::json;

    #[test]
    fn reports_hidden_layers_at_any_depth() {
        let d = doc(page(json!([
            { "_class": "rectangle", "do_objectID": "shown" },
            {
                "_class": "group",
                "do_objectID": "g",
                "layers": [{ "_class": "text", "do_objectID": "off", "isVisible": false }]
            }
        ])));
        let diagnostics = run(&LayersNoHidden::new(), &d);
        assert_eq!(reported_ids(&d, &diagnostics), vec!["off"]);
        assert_eq!(diagnostics[0].message, "Unexpected hidden layer");
    }
}
