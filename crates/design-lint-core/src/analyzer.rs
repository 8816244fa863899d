//! Core analyzer for orchestrating rule invocations.

use crate::config::Config;
use crate::document::Document;
use crate::rule::{evaluate, Rule, RuleBox, RuleError};
use crate::types::{LintResult, Location, Violation};

use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// A rule invocation failed on its configuration.
    #[error("Rule `{rule}` failed: {source}")]
    Rule {
        /// Name of the failing rule.
        rule: String,
        /// Underlying rule error.
        source: RuleError,
    },

    /// Two registered rules share a name.
    #[error("Rule `{0}` is registered more than once")]
    DuplicateRule(String),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules to the analyzer.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if two rules share a name.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.name()) {
                return Err(AnalyzerError::DuplicateRule(rule.name().to_string()));
            }
        }

        let config = self.config.unwrap_or_default();
        for name in config.rules.keys() {
            if !seen.contains(name.as_str()) {
                warn!("Config mentions rule `{}` which is not registered", name);
            }
        }

        Ok(Analyzer {
            rules: self.rules,
            config,
        })
    }
}

/// The main analyzer that runs rules against a document.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the configuration in effect.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs every enabled rule and collects the results.
    ///
    /// Violations keep rule registration order, then each rule's emission
    /// order, so unchanged input yields an identical result.
    ///
    /// # Errors
    ///
    /// Returns an error on the first rule whose configuration is invalid.
    pub fn analyze(&self, document: &Document) -> Result<LintResult, AnalyzerError> {
        info!(
            "Starting analysis of {} nodes with {} rules",
            document.len(),
            self.rules.len()
        );

        let mut result = LintResult::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let violations = self.run_rule(rule.as_ref(), document)?;
            debug!("{}: {} violation(s)", rule.name(), violations.len());
            result.violations.extend(violations);
            result.rules_run += 1;
        }

        info!(
            "Analysis complete: {} violations from {} rules",
            result.violations.len(),
            result.rules_run
        );

        Ok(result)
    }

    /// Runs a single rule with its configured options and severity.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule's options are invalid.
    pub fn run_rule(
        &self,
        rule: &dyn Rule,
        document: &Document,
    ) -> Result<Vec<Violation>, AnalyzerError> {
        let diagnostics = evaluate(rule, document, self.config.rule_options(rule.name()))
            .map_err(|source| AnalyzerError::Rule {
                rule: rule.name().to_string(),
                source,
            })?;

        let severity = self
            .config
            .rule_severity(rule.name())
            .unwrap_or_else(|| rule.default_severity());

        Ok(diagnostics
            .into_iter()
            .map(|d| {
                Violation::new(
                    rule.code(),
                    rule.name(),
                    severity,
                    Location::of(document, d.node),
                    d.message,
                )
            })
            .collect())
    }
}
