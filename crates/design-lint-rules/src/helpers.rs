//! Traversal and style predicates shared by several rules.

use design_lint_core::{Class, Document, Node, RuleContext, RuleError, Style, StyleEntry};
use regex::Regex;

/// Whether `node` or any of its ancestors is a symbol instance.
///
/// Walks every ancestor up to the root, not only the direct parent.
pub(crate) fn is_in_symbol_instance(doc: &Document, node: &Node) -> bool {
    node.class() == Class::SymbolInstance
        || doc
            .ancestors(node.id())
            .any(|ancestor| ancestor.class() == Class::SymbolInstance)
}

/// Whether `node` is one operand of a boolean shape combination.
///
/// Such layers are governed by their parent shape group.
pub(crate) fn is_combined_shape_child(doc: &Document, node: &Node) -> bool {
    doc.parent(node.id())
        .is_some_and(|parent| parent.class() == Class::ShapeGroup && parent.children().len() > 1)
}

/// Whether a style list is present, non-empty and has a disabled entry.
pub(crate) fn has_disabled_entry(entries: Option<&[StyleEntry]>) -> bool {
    entries.is_some_and(|entries| entries.iter().any(|entry| !entry.is_enabled))
}

/// Whether a style list has at least one enabled entry.
pub(crate) fn has_enabled_entry(entries: Option<&[StyleEntry]>) -> bool {
    entries.is_some_and(|entries| entries.iter().any(|entry| entry.is_enabled))
}

/// Reports inline layer styles and shared styles with a disabled entry in
/// the list picked by `property`.
///
/// Layers inside combined shapes and layers bound to a shared style are
/// skipped; shared styles are visited once each regardless of usage.
pub(crate) fn report_disabled(
    ctx: &mut RuleContext<'_>,
    property: fn(&Style) -> Option<&[StyleEntry]>,
    layer_message: &str,
    shared_message: &str,
) {
    let doc = ctx.document();

    for node in doc.layers() {
        let Some(layer) = node.as_layer() else {
            continue;
        };
        let Some(style) = layer.style.as_ref() else {
            continue;
        };
        if layer.shared_style_id.is_some() || is_combined_shape_child(doc, node) {
            continue;
        }
        if has_disabled_entry(property(style)) {
            ctx.report(node.id(), layer_message);
        }
    }

    for node in doc.shared_styles() {
        if let Some(shared) = node.as_shared_style() {
            if has_disabled_entry(property(&shared.value)) {
                ctx.report(node.id(), shared_message);
            }
        }
    }
}

/// Compiles the patterns of a string array option.
pub(crate) fn compile_patterns(option: &str, sources: &[String]) -> Result<Vec<Regex>, RuleError> {
    sources
        .iter()
        .map(|source| {
            Regex::new(source).map_err(|e| RuleError::InvalidPattern {
                option: option.to_string(),
                pattern: source.clone(),
                message: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod testing {
    //! Fixture helpers for rule tests.

    use design_lint_core::{evaluate, Diagnostic, Document, Rule, RuleError};
    use std::collections::BTreeMap;

    /// Builds a document with one page holding `layers`.
    pub(crate) fn page(layers: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "pages": [{ "_class": "page", "name": "Page 1", "layers": layers }]
        })
    }

    pub(crate) fn doc(value: serde_json::Value) -> Document {
        Document::from_value(value).expect("fixture document should parse")
    }

    pub(crate) fn run(rule: &dyn Rule, doc: &Document) -> Vec<Diagnostic> {
        evaluate(rule, doc, &BTreeMap::new()).expect("rule should run")
    }

    pub(crate) fn run_with(
        rule: &dyn Rule,
        doc: &Document,
        options: &str,
    ) -> Result<Vec<Diagnostic>, RuleError> {
        let overrides: BTreeMap<String, toml::Value> =
            toml::from_str(options).expect("fixture options should parse");
        evaluate(rule, doc, &overrides)
    }

    /// Object ids of the nodes a set of diagnostics points at.
    pub(crate) fn reported_ids(doc: &Document, diagnostics: &[Diagnostic]) -> Vec<String> {
        diagnostics
            .iter()
            .filter_map(|d| doc.node(d.node))
            .map(|n| n.object_id().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{doc, page};
    use super::*;
    use serde_json::json;

    fn find<'a>(doc: &'a Document, id: &str) -> &'a Node {
        doc.layers().find(|n| n.object_id() == id).unwrap()
    }

    #[test]
    fn symbol_instance_ancestor_anywhere_up_the_chain() {
        let d = doc(page(json!([{
            "_class": "symbolInstance",
            "do_objectID": "si",
            "layers": [{
                "_class": "group",
                "do_objectID": "g",
                "layers": [{ "_class": "text", "do_objectID": "t" }]
            }]
        }, { "_class": "text", "do_objectID": "free" }])));

        assert!(is_in_symbol_instance(&d, find(&d, "t")));
        assert!(is_in_symbol_instance(&d, find(&d, "si")));
        assert!(!is_in_symbol_instance(&d, find(&d, "free")));
    }

    #[test]
    fn combined_shape_children() {
        let d = doc(page(json!([
            {
                "_class": "shapeGroup",
                "do_objectID": "combo",
                "layers": [
                    { "_class": "rectangle", "do_objectID": "a" },
                    { "_class": "oval", "do_objectID": "b" }
                ]
            },
            {
                "_class": "shapeGroup",
                "do_objectID": "single",
                "layers": [{ "_class": "rectangle", "do_objectID": "c" }]
            }
        ])));

        assert!(is_combined_shape_child(&d, find(&d, "a")));
        assert!(!is_combined_shape_child(&d, find(&d, "c")));
        assert!(!is_combined_shape_child(&d, find(&d, "combo")));
    }

    #[test]
    fn disabled_entries() {
        assert!(!has_disabled_entry(None));
        assert!(!has_disabled_entry(Some(&[])));
        assert!(!has_disabled_entry(Some(&[StyleEntry::new(true)])));
        assert!(has_disabled_entry(Some(&[
            StyleEntry::new(true),
            StyleEntry::new(false)
        ])));
        assert!(has_enabled_entry(Some(&[StyleEntry::new(true)])));
        assert!(!has_enabled_entry(Some(&[StyleEntry::new(false)])));
    }

    #[test]
    fn invalid_pattern_is_a_rule_error() {
        let err = compile_patterns("allowed", &["(".to_string()]).unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { ref pattern, .. } if pattern == "("));
        assert_eq!(
            compile_patterns("allowed", &["^a".into(), "b$".into()])
                .unwrap()
                .len(),
            2
        );
    }
}
