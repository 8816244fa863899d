//! Rules enforcing naming conventions through regular expressions.
//!
//! # Detected Patterns
//!
//! - A name matching none of the `allowed` patterns
//! - A name matching any of the `forbidden` patterns
//!
//! The two checks are independent, so one layer can get both diagnostics.
//! The per-class rules run both; `layer-names-pattern-allowed` and
//! `layer-names-pattern-disallowed` each run one of them over every layer.
//!
//! # Configuration
//!
//! - `allowed`: Patterns a name must match at least one of (default: empty)
//! - `forbidden`: Patterns a name must not match (default: empty)
//!
//! ```toml
//! [rules.name-pattern-groups]
//! allowed = ["^[A-Z]"]
//! forbidden = ["^Group \\d+$"]
//!
//! [rules.layer-names-pattern-disallowed]
//! forbidden = ["^Rectangle( Copy)*"]
//! ```

use crate::helpers::compile_patterns;
use design_lint_core::{Class, OptionDecl, Rule, RuleContext, RuleError, Severity};

/// Rule code for name-pattern-groups.
pub const GROUPS_CODE: &str = "DL006";

/// Rule name for name-pattern-groups.
pub const GROUPS_NAME: &str = "name-pattern-groups";

/// Rule code for name-pattern-artboards.
pub const ARTBOARDS_CODE: &str = "DL007";

/// Rule name for name-pattern-artboards.
pub const ARTBOARDS_NAME: &str = "name-pattern-artboards";

/// Rule code for name-pattern-symbols.
pub const SYMBOLS_CODE: &str = "DL008";

/// Rule name for name-pattern-symbols.
pub const SYMBOLS_NAME: &str = "name-pattern-symbols";

/// Rule code for layer-names-pattern-allowed.
pub const LAYERS_ALLOWED_CODE: &str = "DL018";

/// Rule name for layer-names-pattern-allowed.
pub const LAYERS_ALLOWED_NAME: &str = "layer-names-pattern-allowed";

/// Rule code for layer-names-pattern-disallowed.
pub const LAYERS_DISALLOWED_CODE: &str = "DL019";

/// Rule name for layer-names-pattern-disallowed.
pub const LAYERS_DISALLOWED_NAME: &str = "layer-names-pattern-disallowed";

const ALLOWED: &str = "allowed";
const FORBIDDEN: &str = "forbidden";

/// Checks layer names against allowed and forbidden patterns.
#[derive(Debug, Clone)]
pub struct NamePattern {
    /// Class to check, or every layer when `None`.
    class: Option<Class>,
    allowed: bool,
    forbidden: bool,
    name: &'static str,
    code: &'static str,
    title: &'static str,
    description: &'static str,
    severity: Severity,
}

impl NamePattern {
    /// Creates `name-pattern-groups`.
    #[must_use]
    pub fn groups() -> Self {
        Self {
            class: Some(Class::Group),
            allowed: true,
            forbidden: true,
            name: GROUPS_NAME,
            code: GROUPS_CODE,
            title: "Group Name Pattern",
            description: "Enforce naming conventions for groups",
            severity: Severity::Error,
        }
    }

    /// Creates `name-pattern-artboards`.
    #[must_use]
    pub fn artboards() -> Self {
        Self {
            class: Some(Class::Artboard),
            allowed: true,
            forbidden: true,
            name: ARTBOARDS_NAME,
            code: ARTBOARDS_CODE,
            title: "Artboard Name Pattern",
            description: "Enforce naming conventions for artboards",
            severity: Severity::Error,
        }
    }

    /// Creates `name-pattern-symbols`.
    #[must_use]
    pub fn symbols() -> Self {
        Self {
            class: Some(Class::SymbolMaster),
            allowed: true,
            forbidden: true,
            name: SYMBOLS_NAME,
            code: SYMBOLS_CODE,
            title: "Symbol Name Pattern",
            description: "Enforce naming conventions for symbols",
            severity: Severity::Error,
        }
    }

    /// Creates `layer-names-pattern-allowed`.
    #[must_use]
    pub fn layers_allowed() -> Self {
        Self {
            class: None,
            allowed: true,
            forbidden: false,
            name: LAYERS_ALLOWED_NAME,
            code: LAYERS_ALLOWED_CODE,
            title: "Allowed Layer Names",
            description: "Require every layer name to match one of the allowed patterns",
            severity: Severity::Error,
        }
    }

    /// Creates `layer-names-pattern-disallowed`.
    #[must_use]
    pub fn layers_disallowed() -> Self {
        Self {
            class: None,
            allowed: false,
            forbidden: true,
            name: LAYERS_DISALLOWED_NAME,
            code: LAYERS_DISALLOWED_CODE,
            title: "Disallowed Layer Names",
            description: "Forbid layer names matching any of the forbidden patterns",
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

impl Rule for NamePattern {
    fn name(&self) -> &'static str {
        self.name
    }

    fn code(&self) -> &'static str {
        self.code
    }

    fn title(&self) -> &'static str {
        self.title
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn options(&self) -> Vec<OptionDecl> {
        let mut options = Vec::new();
        if self.allowed {
            options.push(
                OptionDecl::string_array(
                    ALLOWED,
                    "Allowed patterns",
                    "Names must match at least one of these regular expressions",
                )
                .default_value(Vec::<String>::new()),
            );
        }
        if self.forbidden {
            options.push(
                OptionDecl::string_array(
                    FORBIDDEN,
                    "Forbidden patterns",
                    "Names must not match any of these regular expressions",
                )
                .default_value(Vec::<String>::new()),
            );
        }
        options
    }

    fn check(&self, ctx: &mut RuleContext<'_>) -> Result<(), RuleError> {
        let allowed = if self.allowed {
            compile_patterns(ALLOWED, ctx.options().string_array(ALLOWED)?)?
        } else {
            Vec::new()
        };
        let forbidden = if self.forbidden {
            compile_patterns(FORBIDDEN, ctx.options().string_array(FORBIDDEN)?)?
        } else {
            Vec::new()
        };
        if allowed.is_empty() && forbidden.is_empty() {
            return Ok(());
        }
        let doc = ctx.document();

        let nodes = doc
            .layers()
            .filter(|node| self.class.map_or(true, |class| node.class() == class));

        for node in nodes {
            let name = node.name();

            if !allowed.is_empty() && !allowed.iter().any(|re| re.is_match(name)) {
                ctx.report(
                    node.id(),
                    "Layer name does not match any of the allowed patterns",
                );
            }

            if forbidden.iter().any(|re| re.is_match(name)) {
                ctx.report(node.id(), "Layer name matches one of the forbidden patterns");
            }
        }

        Ok(())
    }
}
