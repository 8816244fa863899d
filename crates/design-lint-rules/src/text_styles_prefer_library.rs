//! Rule requiring text layers to use unmodified library text styles.
//!
//! # Detected Patterns
//!
//! Each text layer gets at most one diagnostic; the first failing check wins:
//!
//! 1. No shared style at all
//! 2. A shared style that does not come from a library
//! 3. A library outside the `libraries` allow-list
//! 4. A layer style that has drifted from the library definition
//!
//! # Configuration
//!
//! - `libraries`: Authorized library names (default: empty, any library)

use design_lint_core::{
    Class, ForeignStyle, OptionDecl, Rule, RuleContext, RuleError, Severity, StyleProjection,
};
use std::collections::HashMap;
use tracing::debug;

/// Rule code for text-styles-prefer-library.
pub const CODE: &str = "DL003";

/// Rule name for text-styles-prefer-library.
pub const NAME: &str = "text-styles-prefer-library";

const LIBRARIES: &str = "libraries";

/// Disallows local text styles in favour of library text styles.
#[derive(Debug, Clone)]
pub struct TextStylesPreferLibrary {
    severity: Severity,
}

impl Default for TextStylesPreferLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl TextStylesPreferLibrary {
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

impl Rule for TextStylesPreferLibrary {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "Prefer Library Text Styles"
    }

    fn description(&self) -> &'static str {
        "Disallow local text styles in favour of library text styles"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn options(&self) -> Vec<OptionDecl> {
        vec![OptionDecl::string_array(
            LIBRARIES,
            "Authorized libraries",
            "Libraries that are valid to use. An error is shown if a library that does not \
             belong to this list is used.",
        )
        .default_value(Vec::<String>::new())]
    }

    fn check(&self, ctx: &mut RuleContext<'_>) -> Result<(), RuleError> {
        let authorized = ctx.options().string_array(LIBRARIES)?.to_vec();
        let doc = ctx.document();

        let libraries: HashMap<&str, &ForeignStyle> = doc
            .foreign_text_styles()
            .iter()
            .map(|style| (style.local_shared_style.object_id.as_str(), style))
            .collect();
        debug!("{} library text style(s) bound", libraries.len());

        for node in doc.nodes_of(Class::Text) {
            let Some(layer) = node.as_layer() else {
                continue;
            };

            let Some(shared_style_id) = layer.shared_style_id.as_deref() else {
                ctx.report(
                    node.id(),
                    "Text styles must be set with the shared styles of a library",
                );
                continue;
            };

            let Some(library) = libraries.get(shared_style_id) else {
                ctx.report(node.id(), "A shared style from a library is expected");
                continue;
            };

            let library_name = &library.source_library_name;
            if !authorized.is_empty() && !authorized.contains(library_name) {
                ctx.report(
                    node.id(),
                    format!("Uses the unauthorized library \"{library_name}\""),
                );
                continue;
            }

            let layer_hash = StyleProjection::of(layer.style.as_ref()).fingerprint();
            let library_hash =
                StyleProjection::of(Some(&library.local_shared_style.value)).fingerprint();
            if layer_hash != library_hash {
                ctx.report(node.id(), "Shared style differs from library");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::testing::{doc, reported_ids, run, run_with};
    use serde_json::{json, Value};

    fn text_style(color: &str) -> Value {
        json!({ "textStyle": { "font": "Inter", "size": 16, "color": color } })
    }

    fn document(layers: Value) -> Value {
        json!({
            "pages": [{ "_class": "page", "name": "Page 1", "layers": layers }],
            "foreignTextStyles": [
                {
                    "sourceLibraryName": "Core UI",
                    "remoteStyleID": "remote-1",
                    "localSharedStyle": {
                        "do_objectID": "lib-heading",
                        "name": "Heading",
                        "value": text_style("#111")
                    }
                },
                {
                    "sourceLibraryName": "Marketing",
                    "remoteStyleID": "remote-2",
                    "localSharedStyle": {
                        "do_objectID": "lib-promo",
                        "name": "Promo",
                        "value": text_style("#f0f")
                    }
                }
            ]
        })
    }

    fn layer(id: &str, shared: Option<&str>, color: &str) -> Value {
        let mut value = json!({ "_class": "text", "do_objectID": id, "style": text_style(color) });
        if let Some(shared) = shared {
            value["sharedStyleID"] = json!(shared);
        }
        value
    }

    #[test]
    fn missing_shared_style_reports_once_and_stops() {
        let d = doc(document(json!([layer("t", None, "#999")])));
        let diagnostics = run(&TextStylesPreferLibrary::new(), &d);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "Text styles must be set with the shared styles of a library"
        );
    }

    #[test]
    fn local_shared_style_is_not_a_library_style() {
        let d = doc(document(json!([layer("t", Some("local-1"), "#111")])));
        let diagnostics = run(&TextStylesPreferLibrary::new(), &d);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "A shared style from a library is expected");
    }

    #[test]
    fn unauthorized_library() {
        let d = doc(document(json!([
            layer("ok", Some("lib-heading"), "#111"),
            layer("bad", Some("lib-promo"), "#000")
        ])));
        let diagnostics =
            run_with(&TextStylesPreferLibrary::new(), &d, "libraries = [\"Core UI\"]").unwrap();
        assert_eq!(reported_ids(&d, &diagnostics), vec!["bad"]);
        assert_eq!(
            diagnostics[0].message,
            "Uses the unauthorized library \"Marketing\""
        );
    }

    #[test]
    fn empty_allow_list_accepts_any_library() {
        let d = doc(document(json!([
            layer("a", Some("lib-heading"), "#111"),
            layer("b", Some("lib-promo"), "#f0f")
        ])));
        assert!(run(&TextStylesPreferLibrary::new(), &d).is_empty());
    }

    #[test]
    fn drift_from_library_definition() {
        let d = doc(document(json!([
            layer("same", Some("lib-heading"), "#111"),
            layer("drifted", Some("lib-heading"), "#222")
        ])));
        let diagnostics = run(&TextStylesPreferLibrary::new(), &d);
        assert_eq!(reported_ids(&d, &diagnostics), vec!["drifted"]);
        assert_eq!(diagnostics[0].message, "Shared style differs from library");
    }

    #[test]
    fn libraries_option_must_be_strings() {
        let d = doc(document(json!([])));
        assert!(run_with(&TextStylesPreferLibrary::new(), &d, "libraries = 3").is_err());
    }
}
