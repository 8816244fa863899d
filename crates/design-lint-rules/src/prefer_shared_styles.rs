//! Rules that flag identical inline styles which should be shared styles.
//!
//! # Rationale
//!
//! When the same style is repeated on many layers it should live in one
//! shared style, so that a change propagates everywhere at once.
//!
//! # Detected Patterns
//!
//! - More than `maxIdentical` text layers with the same text style
//!   (`text-styles-prefer-shared`)
//! - More than `maxIdentical` shape layers with the same layer style
//!   (`layer-styles-prefer-shared`)
//!
//! Layers already bound to a shared style are ignored, as are layers inside
//! symbol instances where repeated styling is expected.
//!
//! # Configuration
//!
//! - `maxIdentical`: Maximum number of identical styles (default: 1)

use crate::helpers::is_in_symbol_instance;
use design_lint_core::{
    Class, Fingerprint, NodeId, OptionDecl, Rule, RuleContext, RuleError, Severity,
    StyleProjection,
};
use std::collections::HashMap;
use tracing::debug;

/// Rule code for text-styles-prefer-shared.
pub const TEXT_CODE: &str = "DL001";

/// Rule name for text-styles-prefer-shared.
pub const TEXT_NAME: &str = "text-styles-prefer-shared";

/// Rule code for layer-styles-prefer-shared.
pub const LAYER_CODE: &str = "DL002";

/// Rule name for layer-styles-prefer-shared.
pub const LAYER_NAME: &str = "layer-styles-prefer-shared";

const MAX_IDENTICAL: &str = "maxIdentical";

/// Which layers a [`PreferSharedStyles`] rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTarget {
    /// Text layers and their text styles.
    Text,
    /// Shape layers and their layer styles.
    Layer,
}

impl StyleTarget {
    fn classes(self) -> &'static [Class] {
        match self {
            Self::Text => &[Class::Text],
            Self::Layer => Class::SHAPES,
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Layer => "layer",
        }
    }
}

/// Disallows identical inline styles in favour of shared styles.
#[derive(Debug, Clone)]
pub struct PreferSharedStyles {
    target: StyleTarget,
    max_identical: i64,
    severity: Severity,
}

impl PreferSharedStyles {
    /// Creates `text-styles-prefer-shared`.
    #[must_use]
    pub fn text() -> Self {
        Self::new(StyleTarget::Text)
    }

    /// Creates `layer-styles-prefer-shared`.
    #[must_use]
    pub fn layer() -> Self {
        Self::new(StyleTarget::Layer)
    }

    fn new(target: StyleTarget) -> Self {
        Self {
            target,
            max_identical: 1,
            severity: Severity::Error,
        }
    }

    /// Sets the default for `maxIdentical`.
    #[must_use]
    pub fn max_identical(mut self, max: i64) -> Self {
        self.max_identical = max;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn message(&self, max_identical: i64, found: usize) -> String {
        let noun = self.target.noun();
        if max_identical == 1 {
            format!(
                "Expected no identical {noun} styles in the document, but found {found} matching \
                 this layer's {noun} style. Consider a shared {noun} style instead"
            )
        } else {
            format!(
                "Expected a maximum of {max_identical} identical {noun} styles in the document, \
                 but found {found} instances of this layer's {noun} style. Consider a shared \
                 {noun} style instead"
            )
        }
    }
}

impl Rule for PreferSharedStyles {
    fn name(&self) -> &'static str {
        match self.target {
            StyleTarget::Text => TEXT_NAME,
            StyleTarget::Layer => LAYER_NAME,
        }
    }

    fn code(&self) -> &'static str {
        match self.target {
            StyleTarget::Text => TEXT_CODE,
            StyleTarget::Layer => LAYER_CODE,
        }
    }

    fn title(&self) -> &'static str {
        match self.target {
            StyleTarget::Text => "Prefer Shared Text Styles",
            StyleTarget::Layer => "Prefer Shared Layer Styles",
        }
    }

    fn description(&self) -> &'static str {
        match self.target {
            StyleTarget::Text => "Disallow identical text styles in favour of shared text styles",
            StyleTarget::Layer => {
                "Disallow identical layer styles in favour of shared layer styles"
            }
        }
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn options(&self) -> Vec<OptionDecl> {
        vec![OptionDecl::integer(
            MAX_IDENTICAL,
            "Max Identical",
            "Maximum number of identical styles allowable in the document",
        )
        .minimum(1.0)
        .default_value(self.max_identical)]
    }

    fn check(&self, ctx: &mut RuleContext<'_>) -> Result<(), RuleError> {
        let max_identical = ctx.options().integer(MAX_IDENTICAL)?;
        let doc = ctx.document();

        // Groups in first-seen order so reruns report identically.
        let mut index: HashMap<Fingerprint, usize> = HashMap::new();
        let mut groups: Vec<Vec<NodeId>> = Vec::new();

        for node in doc.nodes_of_any(self.target.classes()) {
            let Some(layer) = node.as_layer() else {
                continue;
            };
            if layer.shared_style_id.is_some() {
                continue;
            }
            if is_in_symbol_instance(doc, node) {
                continue;
            }

            let hash = StyleProjection::of(layer.style.as_ref()).fingerprint();
            let slot = *index.entry(hash).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(node.id());
        }

        debug!("{}: {} distinct style(s)", self.name(), groups.len());

        for nodes in groups {
            let found = nodes.len();
            if i64::try_from(found).map_or(true, |n| n > max_identical) {
                let message = self.message(max_identical, found);
                for node in nodes {
                    ctx.report(node, message.clone());
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::testing::{doc, page, reported_ids, run, run_with};
    use serde_json::{json, Value};

    fn text(id: &str, color: &str) -> Value {
        json!({
            "_class": "text",
            "do_objectID": id,
            "style": {
                "do_objectID": format!("style-{id}"),
                "textStyle": { "font": "Inter", "size": 14, "color": color }
            }
        })
    }

    #[test]
    fn threshold_two_with_three_identical_reports_all_three() {
        let d = doc(page(json!([
            text("a", "#000"),
            text("b", "#000"),
            text("c", "#000")
        ])));
        let diagnostics =
            run_with(&PreferSharedStyles::text(), &d, "maxIdentical = 2").unwrap();
        assert_eq!(reported_ids(&d, &diagnostics), vec!["a", "b", "c"]);
        assert!(diagnostics[0].message.starts_with(
            "Expected a maximum of 2 identical text styles in the document, but found 3 instances"
        ));
    }

    #[test]
    fn threshold_two_with_two_identical_is_compliant() {
        let d = doc(page(json!([text("a", "#000"), text("b", "#000")])));
        let diagnostics =
            run_with(&PreferSharedStyles::text(), &d, "maxIdentical = 2").unwrap();
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn default_threshold_uses_singular_wording() {
        let d = doc(page(json!([
            text("a", "#000"),
            text("b", "#000"),
            text("c", "#fff")
        ])));
        let diagnostics = run(&PreferSharedStyles::text(), &d);
        assert_eq!(reported_ids(&d, &diagnostics), vec!["a", "b"]);
        assert_eq!(
            diagnostics[0].message,
            "Expected no identical text styles in the document, but found 2 matching this \
             layer's text style. Consider a shared text style instead"
        );
    }

    #[test]
    fn groups_across_artboards() {
        let d = doc(page(json!([
            { "_class": "artboard", "layers": [text("a", "#000")] },
            { "_class": "artboard", "layers": [text("b", "#000")] }
        ])));
        assert_eq!(run(&PreferSharedStyles::text(), &d).len(), 2);
    }

    #[test]
    fn ignores_shared_styled_layers() {
        let mut bound = text("b", "#000");
        bound["sharedStyleID"] = json!("shared-1");
        let d = doc(page(json!([text("a", "#000"), bound])));
        assert!(run(&PreferSharedStyles::text(), &d).is_empty());
    }

    #[test]
    fn ignores_layers_inside_symbol_instances() {
        let d = doc(page(json!([{
            "_class": "symbolInstance",
            "layers": [{
                "_class": "group",
                "layers": [text("a", "#000"), text("b", "#000"), text("c", "#000")]
            }]
        }])));
        assert!(run(&PreferSharedStyles::text(), &d).is_empty());
    }

    #[test]
    fn layer_variant_checks_shapes_only() {
        let fill = json!({ "fills": [{ "isEnabled": true, "color": "#f00" }] });
        let d = doc(page(json!([
            { "_class": "rectangle", "do_objectID": "r", "style": fill },
            { "_class": "oval", "do_objectID": "o", "style": fill },
            { "_class": "text", "do_objectID": "t", "style": fill }
        ])));
        let diagnostics = run(&PreferSharedStyles::layer(), &d);
        assert_eq!(reported_ids(&d, &diagnostics), vec!["r", "o"]);
        assert!(diagnostics[0].message.contains("shared layer style"));
    }

    #[test]
    fn builder_default_feeds_option_declaration() {
        let d = doc(page(json!([text("a", "#000"), text("b", "#000")])));
        assert!(run(&PreferSharedStyles::text().max_identical(2), &d).is_empty());
    }

    #[test]
    fn zero_threshold_is_a_configuration_error() {
        let d = doc(page(json!([])));
        assert!(run_with(&PreferSharedStyles::text(), &d, "maxIdentical = 0").is_err());
        assert!(run_with(&PreferSharedStyles::text(), &d, "maxIdentical = \"1\"").is_err());
    }
}
