//! Rule forbidding disabled inner shadows in layer and shared styles.

use crate::helpers::report_disabled;
use design_lint_core::{Rule, RuleContext, RuleError, Severity, Style, StyleEntry};

/// Rule code for inner-shadows-no-disabled.
pub const CODE: &str = "DL005";

/// Rule name for inner-shadows-no-disabled.
pub const NAME: &str = "inner-shadows-no-disabled";

/// Disallows disabled inner shadow properties.
#[derive(Debug, Clone)]
pub struct InnerShadowsNoDisabled {
    severity: Severity,
}

impl Default for InnerShadowsNoDisabled {
    fn default() -> Self {
        Self::new()
    }
}

impl InnerShadowsNoDisabled {
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

fn inner_shadows(style: &Style) -> Option<&[StyleEntry]> {
    style.inner_shadows.as_deref()
}

impl Rule for InnerShadowsNoDisabled {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "No Disabled Inner Shadows"
    }

    fn description(&self) -> &'static str {
        "Forbids disabled inner shadow properties in layer and shared styles"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &mut RuleContext<'_>) -> Result<(), RuleError> {
        report_disabled(
            ctx,
            inner_shadows,
            "Unexpected disabled inner shadow on layer style",
            "Unexpected disabled inner shadow in shared style",
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::testing::{doc, reported_ids, run};
    use serde_json::json;

    #[test]
    fn reports_layers_and_shared_styles() {
        let d = doc(json!({
            "pages": [{
                "_class": "page",
                "name": "Page 1",
                "layers": [
                    {
                        "_class": "text",
                        "do_objectID": "t",
                        "style": { "innerShadows": [{ "isEnabled": true }, { "isEnabled": false }] }
                    },
                    {
                        "_class": "oval",
                        "do_objectID": "o",
                        "style": { "innerShadows": [{ "isEnabled": true }] }
                    },
                    {
                        "_class": "oval",
                        "do_objectID": "border-only",
                        "style": { "borders": [{ "isEnabled": false }] }
                    }
                ]
            }],
            "layerStyles": [{
                "do_objectID": "ls",
                "name": "Inset",
                "value": { "innerShadows": [{ "isEnabled": false }] }
            }]
        }));

        let diagnostics = run(&InnerShadowsNoDisabled::new(), &d);
        assert_eq!(reported_ids(&d, &diagnostics), vec!["t", "ls"]);
        assert_eq!(
            diagnostics[0].message,
            "Unexpected disabled inner shadow on layer style"
        );
        assert_eq!(
            diagnostics[1].message,
            "Unexpected disabled inner shadow in shared style"
        );
    }
}
