//! Check command implementation.

use anyhow::{bail, Context, Result};
use design_lint_core::{Analyzer, Config, Document, RuleBox};
use design_lint_rules::{all_rules, recommended_rules, Preset};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    document: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = load_config(source)?;

    let rules = if let Some(filter) = rules_filter {
        let names: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_rules(&names)
    } else {
        preset_rules(&config)?
    };

    let fail_on = config.fail_on();
    let analyzer = Analyzer::builder()
        .rules(rules)
        .config(config)
        .build()
        .context("Failed to build analyzer")?;

    let document = Document::from_file(document)
        .with_context(|| format!("Failed to load document: {}", document.display()))?;

    tracing::info!("Analyzing {} nodes with {} rules", document.len(), analyzer.rule_count());

    let result = analyzer.analyze(&document).context("Analysis failed")?;

    super::output::print(&result, format)?;

    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}

/// Rules of the configured preset, plus every rule the config names in a
/// `[rules.<name>]` table that is not switched off.
fn preset_rules(config: &Config) -> Result<Vec<RuleBox>> {
    let mut rules = match config.preset.as_deref() {
        None => recommended_rules(),
        Some(name) => match Preset::from_name(name) {
            Some(preset) => preset.rules(),
            None => bail!("Unknown preset `{name}` (expected recommended, strict or minimal)"),
        },
    };

    for rule in all_rules() {
        let name = rule.name();
        if !config.rules.contains_key(name) || !config.is_rule_enabled(name) {
            continue;
        }
        if rules.iter().any(|r| r.name() == name) {
            continue;
        }
        tracing::debug!("Adding configured rule {} outside the preset", name);
        rules.push(rule);
    }

    Ok(rules)
}

fn filter_rules(names: &[&str]) -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = Vec::new();

    for name in names {
        let found = all_rules()
            .into_iter()
            .find(|rule| rule.name() == *name || rule.code() == *name);
        match found {
            Some(rule) if rules.iter().any(|r| r.name() == rule.name()) => {}
            Some(rule) => rules.push(rule),
            None => tracing::warn!("Unknown rule: {}", name),
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(rules: &[RuleBox]) -> Vec<&'static str> {
        rules.iter().map(|r| r.name()).collect()
    }

    #[test]
    fn filter_accepts_names_and_codes() {
        let rules = filter_rules(&["groups-no-empty", "DL001", "no-such-rule", "DL010"]);
        assert_eq!(
            names(&rules),
            vec!["groups-no-empty", "text-styles-prefer-shared"]
        );
    }

    #[test]
    fn preset_from_config() {
        let config = Config::parse("preset = \"minimal\"").unwrap();
        assert_eq!(preset_rules(&config).unwrap().len(), 3);

        let config = Config::default();
        assert_eq!(
            preset_rules(&config).unwrap().len(),
            recommended_rules().len()
        );

        let config = Config::parse("preset = \"lenient\"").unwrap();
        assert!(preset_rules(&config).is_err());
    }

    #[test]
    fn configured_rules_join_the_preset() {
        let config = Config::parse("[rules.name-pattern-groups]\nforbidden = [\"^Group\"]").unwrap();
        let rules = preset_rules(&config).unwrap();
        assert!(names(&rules).contains(&"name-pattern-groups"));
        assert_eq!(rules.len(), recommended_rules().len() + 1);

        let config = Config::parse(
            "preset = \"minimal\"\n\n[rules.layers-no-hidden]\n\n[rules.groups-no-empty]\nseverity = \"warning\"",
        )
        .unwrap();
        let rules = preset_rules(&config).unwrap();
        assert_eq!(rules.len(), 4);
        assert!(names(&rules).contains(&"layers-no-hidden"));
    }

    #[test]
    fn disabled_configured_rules_stay_out() {
        let config =
            Config::parse("[rules.name-pattern-groups]\nenabled = false\nforbidden = [\"^Group\"]")
                .unwrap();
        let rules = preset_rules(&config).unwrap();
        assert!(!names(&rules).contains(&"name-pattern-groups"));
        assert_eq!(rules.len(), recommended_rules().len());
    }

    #[test]
    fn default_source_uses_default_config() {
        let config = load_config(&ConfigSource::Default).unwrap();
        assert!(config.rules.is_empty());
    }
}
