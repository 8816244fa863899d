//! Rule limiting the number of loose layers directly inside an artboard.
//!
//! # Configuration
//!
//! - `maxUngroupedLayers`: Maximum number of top-level non-group layers
//!   (default: 5)

use design_lint_core::{Class, OptionDecl, Rule, RuleContext, RuleError, Severity};

/// Rule code for artboards-max-ungrouped-layers.
pub const CODE: &str = "DL009";

/// Rule name for artboards-max-ungrouped-layers.
pub const NAME: &str = "artboards-max-ungrouped-layers";

const MAX_UNGROUPED_LAYERS: &str = "maxUngroupedLayers";

/// Restricts the number of ungrouped layers at the top of an artboard.
#[derive(Debug, Clone)]
pub struct ArtboardsMaxUngroupedLayers {
    max_ungrouped: f64,
    severity: Severity,
}

impl Default for ArtboardsMaxUngroupedLayers {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtboardsMaxUngroupedLayers {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_ungrouped: 5.0,
            severity: Severity::Error,
        }
    }

    /// Sets the default for `maxUngroupedLayers`.
    #[must_use]
    pub fn max_ungrouped(mut self, max: f64) -> Self {
        self.max_ungrouped = max;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for ArtboardsMaxUngroupedLayers {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "Max Ungrouped Layers"
    }

    fn description(&self) -> &'static str {
        "Restrict the number of ungrouped layers allowed at the top level of an artboard"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn options(&self) -> Vec<OptionDecl> {
        vec![OptionDecl::number(
            MAX_UNGROUPED_LAYERS,
            "Max Ungrouped Layers",
            "Maximum number of ungrouped layers allowed at the top level of an artboard",
        )
        .minimum(1.0)
        .default_value(self.max_ungrouped)]
    }

    fn check(&self, ctx: &mut RuleContext<'_>) -> Result<(), RuleError> {
        let max = ctx.options().number(MAX_UNGROUPED_LAYERS)?;
        let doc = ctx.document();

        for artboard in doc.nodes_of(Class::Artboard) {
            let ungrouped = doc
                .children(artboard.id())
                .filter(|child| child.class() != Class::Group)
                .count();
            #[allow(clippy::cast_precision_loss)]
            let count = ungrouped as f64;

            if count > max {
                ctx.report(
                    artboard.id(),
                    format!(
                        "Found {ungrouped} ungrouped layers at top level of artboard, expected at most {max}"
                    ),
                );
            }
        }

        Ok(())
    }
}
