//! # design-lint-core
//!
//! Core framework for linting design documents against a style-governance
//! policy.
//!
//! This crate provides the foundational traits and types for building
//! design-document rules. It includes:
//!
//! - [`Document`] for the read-only node tree rules traverse
//! - [`Rule`] trait with declarative metadata and an options schema
//! - [`OptionDecl`] / [`ResolvedOptions`] for typed rule configuration
//! - [`fingerprint`] for stable content hashing of style projections
//! - [`Analyzer`] for orchestrating rule invocations
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use design_lint_core::{Analyzer, Document};
//!
//! let document = Document::from_file("design.json".as_ref())?;
//! let analyzer = Analyzer::builder()
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze(&document)?;
//! result.print_report();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod document;
mod hash;
mod model;
mod options;
mod reporter;
mod rule;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{Config, ConfigError, RuleConfig};
pub use context::RuleContext;
pub use document::{Ancestors, Document, DocumentError, Node, NodeId, NodeKind};
pub use hash::{fingerprint, Fingerprint, StyleProjection};
pub use model::{
    Class, DocumentData, ForeignStyle, ImageRef, Layer, RawLayer, Rect, SharedStyle, Style,
    StyleEntry,
};
pub use options::{OptionDecl, OptionError, OptionKind, OptionValue, ResolvedOptions};
pub use reporter::{Diagnostic, Reporter};
pub use rule::{evaluate, Rule, RuleBox, RuleError};
pub use types::{LintResult, Location, Severity, Violation};
