//! List rules command implementation.

use design_lint_core::{OptionDecl, OptionValue};
use design_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<32} {:<8} Description", "Code", "Name", "Severity");
    println!("{}", "-".repeat(96));

    for rule in all_rules() {
        println!(
            "{:<8} {:<32} {:<8} {}",
            rule.code(),
            rule.name(),
            rule.default_severity().to_string(),
            rule.description()
        );
        for option in rule.options() {
            println!("{:<50}{}", "", describe(&option));
        }
    }

    println!("\nPresets:");
    println!("  recommended  - Shared styles, disabled properties, group hygiene (default)");
    println!("  strict       - All rules, hidden layers and unused styles as errors");
    println!("  minimal      - DL004, DL005, DL010 (for gradual adoption)");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  design-lint check document.json --rules groups-no-empty,layers-no-hidden");
    println!("  design-lint check document.json --rules DL001,DL002");
}

fn describe(option: &OptionDecl) -> String {
    use std::fmt::Write;
    let mut line = format!("{} ({})", option.name, option.kind);
    if let Some(default) = &option.default_value {
        let _ = write!(line, " default {}", render(default));
    }
    if let Some(minimum) = option.minimum {
        let _ = write!(line, " min {minimum}");
    }
    if let Some(maximum) = option.maximum {
        let _ = write!(line, " max {maximum}");
    }
    line
}

fn render(value: &OptionValue) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_bounds_and_defaults() {
        let option = OptionDecl::integer("maxLayers", "Max Layers", "")
            .minimum(1.0)
            .default_value(50_i64);
        assert_eq!(describe(&option), "maxLayers (integer) default 50 min 1");

        let option = OptionDecl::string_array("allowed", "Allowed", "")
            .default_value(vec!["^[A-Z]".to_string()]);
        assert_eq!(describe(&option), "allowed (string array) default [\"^[A-Z]\"]");
    }
}
