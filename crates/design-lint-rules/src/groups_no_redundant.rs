//! Rule forbidding groups that only wrap another group.
//!
//! A group is redundant when its single child is itself a group and the
//! outer group contributes no visible styling of its own.

use crate::helpers::has_enabled_entry;
use design_lint_core::{Class, Rule, RuleContext, RuleError, Severity, Style};

/// Rule code for groups-no-redundant.
pub const CODE: &str = "DL011";

/// Rule name for groups-no-redundant.
pub const NAME: &str = "groups-no-redundant";

/// Disallows redundant groups.
#[derive(Debug, Clone)]
pub struct GroupsNoRedundant {
    severity: Severity,
}

impl Default for GroupsNoRedundant {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupsNoRedundant {
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

fn is_styled(style: &Style) -> bool {
    has_enabled_entry(style.fills.as_deref())
        || has_enabled_entry(style.borders.as_deref())
        || has_enabled_entry(style.shadows.as_deref())
        || has_enabled_entry(style.inner_shadows.as_deref())
        || style.has_enabled_blur()
}

impl Rule for GroupsNoRedundant {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "No Redundant Groups"
    }

    fn description(&self) -> &'static str {
        "Disallow redundant groups that only wrap another group"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &mut RuleContext<'_>) -> Result<(), RuleError> {
        let doc = ctx.document();

        for group in doc.nodes_of(Class::Group) {
            let [only_child] = group.children() else {
                continue;
            };
            let wraps_group = doc
                .node(*only_child)
                .is_some_and(|child| child.class() == Class::Group);
            if !wraps_group {
                continue;
            }
            if group.style().is_some_and(is_styled) {
                continue;
            }
            ctx.report(group.id(), "Unexpected redundant group");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::testing::{doc, page, reported_ids, run};
    use serde_json::{json, Value};

    fn wrapper(id: &str, style: Value) -> Value {
        json!({
            "_class": "group",
            "do_objectID": id,
            "style": style,
            "layers": [{ "_class": "group", "layers": [{ "_class": "text" }] }]
        })
    }

    #[test]
    fn reports_unstyled_wrappers() {
        let d = doc(page(json!([
            wrapper("plain", json!({})),
            wrapper("disabled-fill", json!({ "fills": [{ "isEnabled": false }] })),
            wrapper("filled", json!({ "fills": [{ "isEnabled": true }] })),
            wrapper("shadowed", json!({ "shadows": [{ "isEnabled": true }] })),
            wrapper("blurred", json!({ "blur": { "isEnabled": true, "radius": 2 } })),
            wrapper("blur-off", json!({ "blur": { "isEnabled": false } }))
        ])));
        let diagnostics = run(&GroupsNoRedundant::new(), &d);
        assert_eq!(
            reported_ids(&d, &diagnostics),
            vec!["plain", "disabled-fill", "blur-off"]
        );
        assert_eq!(diagnostics[0].message, "Unexpected redundant group");
    }

    #[test]
    fn ignores_groups_with_other_children() {
        let d = doc(page(json!([
            { "_class": "group", "do_objectID": "text-only", "layers": [{ "_class": "text" }] },
            {
                "_class": "group",
                "do_objectID": "two",
                "layers": [{ "_class": "group" }, { "_class": "group" }]
            }
        ])));
        assert!(run(&GroupsNoRedundant::new(), &d).is_empty());
    }
}
