//! Rule trait for defining lint rules.

use crate::context::RuleContext;
use crate::document::Document;
use crate::options::{OptionDecl, OptionError, ResolvedOptions};
use crate::reporter::Diagnostic;
use crate::types::Severity;

use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that abort a rule invocation.
///
/// These are configuration problems, never document defects: a document
/// that merely violates the rule produces diagnostics instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    /// An option failed validation.
    #[error(transparent)]
    Option(#[from] OptionError),

    /// A pattern option holds an invalid regular expression.
    #[error("option `{option}` has an invalid pattern `{pattern}`: {message}")]
    InvalidPattern {
        /// Option name.
        option: String,
        /// Offending pattern source.
        pattern: String,
        /// Regex compiler message.
        message: String,
    },
}

/// A lint rule evaluated against a whole [`Document`].
///
/// Implementations are stateless; everything an invocation accumulates lives
/// in the [`RuleContext`] or in locals of [`Rule::check`].
///
/// # Example
///
/// ```ignore
/// use design_lint_core::{Class, Rule, RuleContext, RuleError};
///
/// pub struct NoSlices;
///
/// impl Rule for NoSlices {
///     fn name(&self) -> &'static str { "no-slices" }
///     fn code(&self) -> &'static str { "DL900" }
///     fn title(&self) -> &'static str { "No Slices" }
///
///     fn check(&self, ctx: &mut RuleContext<'_>) -> Result<(), RuleError> {
///         let doc = ctx.document();
///         for node in doc.nodes_of(Class::Slice) {
///             ctx.report(node.id(), "Unexpected slice");
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "groups-no-empty").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "DL010").
    fn code(&self) -> &'static str;

    /// Returns the display title.
    fn title(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Declares the options this rule accepts.
    fn options(&self) -> Vec<OptionDecl> {
        Vec::new()
    }

    /// Inspects the document and reports problems through `ctx`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolved options are unusable.
    fn check(&self, ctx: &mut RuleContext<'_>) -> Result<(), RuleError>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

/// Runs one rule against a document with the given option overrides.
///
/// Options are resolved before the rule sees the document.
///
/// # Errors
///
/// Returns an error if the overrides fail validation or the rule rejects
/// its options.
pub fn evaluate(
    rule: &dyn Rule,
    document: &Document,
    overrides: &BTreeMap<String, toml::Value>,
) -> Result<Vec<Diagnostic>, RuleError> {
    let options = ResolvedOptions::resolve(&rule.options(), overrides)?;
    let mut ctx = RuleContext::new(document, options);
    rule.check(&mut ctx)?;
    Ok(ctx.into_diagnostics())
}
