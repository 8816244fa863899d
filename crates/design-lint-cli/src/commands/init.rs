//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# design-lint configuration

# Rule preset: "recommended" (default), "strict" or "minimal"
preset = "recommended"

# Lowest severity that makes `design-lint check` exit with status 1
fail_on = "error"

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden.
# Any other key is a rule option.

[rules.text-styles-prefer-shared]
maxIdentical = 1

[rules.layer-styles-prefer-shared]
maxIdentical = 1

[rules.artboards-max-ungrouped-layers]
maxUngroupedLayers = 5

[rules.images-no-outsized]
# Allow @2x assets
maxRatio = 2

[rules.layers-no-hidden]
severity = "warning"

# [rules.text-styles-prefer-library]
# libraries = ["Core UI"]

# [rules.name-pattern-groups]
# allowed = ["^[A-Z]"]
# forbidden = ["^Group \\d+$"]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("design-lint.toml");
    write_config(config_path, force)?;

    println!("Created design-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit design-lint.toml to configure rules");
    println!("  2. Run: design-lint check <document.json>");

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))
}
