//! Rule presets for common configurations.

use crate::{
    ArtboardsMaxUngroupedLayers, BordersNoDisabled, GroupsMaxLayers, GroupsNoEmpty,
    GroupsNoRedundant, ImagesNoOutsized, InnerShadowsNoDisabled, LayersNoHidden,
    LayersSubpixelPositioning, NamePattern, PreferSharedStyles, SharedStylesNoUnused,
    SymbolsNoUnused, TextStylesPreferLibrary,
};
use design_lint_core::{RuleBox, Severity};

/// Preset configurations for design-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Recommended rules with sensible defaults.
    Recommended,
    /// Every rule, with hygiene rules raised to errors.
    Strict,
    /// Minimal rules for gradual adoption.
    Minimal,
}

impl Preset {
    /// Looks up a preset by its config name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "recommended" => Some(Self::Recommended),
            "strict" => Some(Self::Strict),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }

    /// Name used for this preset in config files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Strict => "strict",
            Self::Minimal => "minimal",
        }
    }

    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => strict_rules(),
            Self::Minimal => minimal_rules(),
        }
    }
}

/// Returns the recommended set of rules.
///
/// Includes the shared-style, disabled-property and group hygiene rules.
/// Library and naming rules need project-specific options and are left to
/// the config file.
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![
        Box::new(PreferSharedStyles::text()),
        Box::new(PreferSharedStyles::layer()),
        Box::new(BordersNoDisabled::new()),
        Box::new(InnerShadowsNoDisabled::new()),
        Box::new(ArtboardsMaxUngroupedLayers::new()),
        Box::new(GroupsNoEmpty::new()),
        Box::new(GroupsNoRedundant::new()),
        Box::new(ImagesNoOutsized::new()),
        Box::new(LayersNoHidden::new()),
    ]
}

/// Returns the strict set of rules.
///
/// Every rule, with `layers-no-hidden`, `shared-styles-no-unused` and
/// `symbols-no-unused` reporting errors instead of warnings.
#[must_use]
pub fn strict_rules() -> Vec<RuleBox> {
    vec![
        Box::new(PreferSharedStyles::text()),
        Box::new(PreferSharedStyles::layer()),
        Box::new(TextStylesPreferLibrary::new()),
        Box::new(BordersNoDisabled::new()),
        Box::new(InnerShadowsNoDisabled::new()),
        Box::new(NamePattern::groups()),
        Box::new(NamePattern::artboards()),
        Box::new(NamePattern::symbols()),
        Box::new(ArtboardsMaxUngroupedLayers::new()),
        Box::new(GroupsNoEmpty::new()),
        Box::new(GroupsNoRedundant::new()),
        Box::new(ImagesNoOutsized::new()),
        Box::new(GroupsMaxLayers::new()),
        Box::new(LayersNoHidden::new().severity(Severity::Error)),
        Box::new(SharedStylesNoUnused::new().severity(Severity::Error)),
        Box::new(SymbolsNoUnused::new().severity(Severity::Error)),
        Box::new(LayersSubpixelPositioning::new()),
        Box::new(NamePattern::layers_allowed()),
        Box::new(NamePattern::layers_disallowed()),
    ]
}

/// Returns the minimal set of rules.
///
/// For gradual adoption, only the checks that never need tuning:
/// - `borders-no-disabled`
/// - `inner-shadows-no-disabled`
/// - `groups-no-empty`
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    vec![
        Box::new(BordersNoDisabled::new()),
        Box::new(InnerShadowsNoDisabled::new()),
        Box::new(GroupsNoEmpty::new()),
    ]
}

/// Returns all available rules, in code order.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(PreferSharedStyles::text()),
        Box::new(PreferSharedStyles::layer()),
        Box::new(TextStylesPreferLibrary::new()),
        Box::new(BordersNoDisabled::new()),
        Box::new(InnerShadowsNoDisabled::new()),
        Box::new(NamePattern::groups()),
        Box::new(NamePattern::artboards()),
        Box::new(NamePattern::symbols()),
        Box::new(ArtboardsMaxUngroupedLayers::new()),
        Box::new(GroupsNoEmpty::new()),
        Box::new(GroupsNoRedundant::new()),
        Box::new(ImagesNoOutsized::new()),
        Box::new(GroupsMaxLayers::new()),
        Box::new(LayersNoHidden::new()),
        Box::new(SharedStylesNoUnused::new()),
        Box::new(SymbolsNoUnused::new()),
        Box::new(LayersSubpixelPositioning::new()),
        Box::new(NamePattern::layers_allowed()),
        Box::new(NamePattern::layers_disallowed()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_preset_rules() {
        assert!(!Preset::Recommended.rules().is_empty());
        assert_eq!(Preset::Strict.rules().len(), all_rules().len());
        assert_eq!(Preset::Minimal.rules().len(), 3);
    }

    #[test]
    fn preset_names_round_trip() {
        for preset in [Preset::Recommended, Preset::Strict, Preset::Minimal] {
            assert_eq!(Preset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(Preset::from_name("lenient"), None);
    }

    #[test]
    fn rule_names_and_codes_are_unique() {
        let rules = all_rules();
        let names: HashSet<_> = rules.iter().map(|r| r.name()).collect();
        let codes: HashSet<_> = rules.iter().map(|r| r.code()).collect();
        assert_eq!(names.len(), rules.len());
        assert_eq!(codes.len(), rules.len());
    }

    #[test]
    fn codes_follow_registration_order() {
        let codes: Vec<_> = all_rules().iter().map(|r| r.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn strict_raises_hygiene_rules() {
        let strict = strict_rules();
        let hidden = strict
            .iter()
            .find(|r| r.name() == crate::layers_no_hidden::NAME)
            .unwrap();
        assert_eq!(hidden.default_severity(), Severity::Error);

        let symbols = strict
            .iter()
            .find(|r| r.name() == crate::symbols_no_unused::NAME)
            .unwrap();
        assert_eq!(symbols.default_severity(), Severity::Error);
    }

    #[test]
    fn every_rule_is_registered() {
        let names: Vec<_> = all_rules().iter().map(|r| r.name()).collect();
        for name in [
            crate::symbols_no_unused::NAME,
            crate::layers_subpixel_positioning::NAME,
            crate::name_pattern::LAYERS_ALLOWED_NAME,
            crate::name_pattern::LAYERS_DISALLOWED_NAME,
        ] {
            assert!(names.contains(&name), "{name} missing from all_rules");
        }
        assert_eq!(all_rules().len(), 19);
    }
}
