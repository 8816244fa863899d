//! # design-lint-rules
//!
//! Built-in style governance rules for design-lint.
//!
//! Each rule walks part of a [`design_lint_core::Document`] and reports
//! layers or shared styles that break a convention of the design system.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | DL001 | `text-styles-prefer-shared` | Forbids identical inline text styles |
//! | DL002 | `layer-styles-prefer-shared` | Forbids identical inline layer styles |
//! | DL003 | `text-styles-prefer-library` | Requires unmodified library text styles |
//! | DL004 | `borders-no-disabled` | Forbids disabled borders |
//! | DL005 | `inner-shadows-no-disabled` | Forbids disabled inner shadows |
//! | DL006 | `name-pattern-groups` | Naming conventions for groups |
//! | DL007 | `name-pattern-artboards` | Naming conventions for artboards |
//! | DL008 | `name-pattern-symbols` | Naming conventions for symbols |
//! | DL009 | `artboards-max-ungrouped-layers` | Limits loose layers in artboards |
//! | DL010 | `groups-no-empty` | Forbids empty groups |
//! | DL011 | `groups-no-redundant` | Forbids groups wrapping a single group |
//! | DL012 | `images-no-outsized` | Forbids images larger than their frame |
//! | DL013 | `groups-max-layers` | Limits layers per group |
//! | DL014 | `layers-no-hidden` | Forbids hidden layers |
//! | DL015 | `shared-styles-no-unused` | Forbids unused shared styles |
//! | DL016 | `symbols-no-unused` | Forbids symbols without instances |
//! | DL017 | `layers-subpixel-positioning` | Forbids positions between pixels |
//! | DL018 | `layer-names-pattern-allowed` | Allowed patterns for every layer name |
//! | DL019 | `layer-names-pattern-disallowed` | Forbidden patterns for every layer name |
//!
//! ## Usage
//!
//! ```ignore
//! use design_lint_core::{Analyzer, Document};
//! use design_lint_rules::{BordersNoDisabled, PreferSharedStyles};
//!
//! let analyzer = Analyzer::builder()
//!     .rule(PreferSharedStyles::text())
//!     .rule(BordersNoDisabled::new())
//!     .build()?;
//! let result = analyzer.analyze(&Document::from_file("document.json".as_ref())?)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artboards_max_ungrouped_layers;
mod borders_no_disabled;
mod groups_max_layers;
mod groups_no_empty;
mod groups_no_redundant;
mod helpers;
mod images_no_outsized;
mod inner_shadows_no_disabled;
mod layers_no_hidden;
mod layers_subpixel_positioning;
mod name_pattern;
mod prefer_shared_styles;
mod presets;
mod shared_styles_no_unused;
mod symbols_no_unused;
mod text_styles_prefer_library;

pub use artboards_max_ungrouped_layers::ArtboardsMaxUngroupedLayers;
pub use borders_no_disabled::BordersNoDisabled;
pub use groups_max_layers::GroupsMaxLayers;
pub use groups_no_empty::GroupsNoEmpty;
pub use groups_no_redundant::GroupsNoRedundant;
pub use images_no_outsized::ImagesNoOutsized;
pub use inner_shadows_no_disabled::InnerShadowsNoDisabled;
pub use layers_no_hidden::LayersNoHidden;
pub use layers_subpixel_positioning::LayersSubpixelPositioning;
pub use name_pattern::NamePattern;
pub use prefer_shared_styles::{PreferSharedStyles, StyleTarget};
pub use presets::{all_rules, minimal_rules, recommended_rules, strict_rules, Preset};
pub use shared_styles_no_unused::SharedStylesNoUnused;
pub use symbols_no_unused::SymbolsNoUnused;
pub use text_styles_prefer_library::TextStylesPreferLibrary;

/// Re-export core types for convenience.
pub use design_lint_core::{Rule, Severity, Violation};
