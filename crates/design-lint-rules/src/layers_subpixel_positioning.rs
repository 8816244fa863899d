//! Rule forbidding layers placed between device pixels.
//!
//! A coordinate is aligned when it lands on a whole pixel at the configured
//! scale: scale 1 accepts whole points only, scale 2 also accepts half
//! points, scale 3 accepts thirds.
//!
//! # Configuration
//!
//! - `scaleFactor`: Highest export scale the positions must stay crisp at
//!   (default: 2)

use design_lint_core::{OptionDecl, Rule, RuleContext, RuleError, Severity};

/// Rule code for layers-subpixel-positioning.
pub const CODE: &str = "DL017";

/// Rule name for layers-subpixel-positioning.
pub const NAME: &str = "layers-subpixel-positioning";

const SCALE_FACTOR: &str = "scaleFactor";

/// Tolerance for coordinates stored with float noise, e.g. `10.499999999`.
const EPSILON: f64 = 1e-6;

/// Disallows layer positions that fall between pixels.
#[derive(Debug, Clone)]
pub struct LayersSubpixelPositioning {
    scale_factor: i64,
    severity: Severity,
}

impl Default for LayersSubpixelPositioning {
    fn default() -> Self {
        Self::new()
    }
}

impl LayersSubpixelPositioning {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scale_factor: 2,
            severity: Severity::Error,
        }
    }

    /// Sets the default for `scaleFactor`.
    #[must_use]
    pub fn scale_factor(mut self, scale: i64) -> Self {
        self.scale_factor = scale;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

fn is_aligned(coordinate: f64, scale: f64) -> bool {
    let scaled = coordinate * scale;
    (scaled - scaled.round()).abs() <= EPSILON
}

impl Rule for LayersSubpixelPositioning {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "No Sub-pixel Positioning"
    }

    fn description(&self) -> &'static str {
        "Disallow layers positioned between pixels"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn options(&self) -> Vec<OptionDecl> {
        vec![OptionDecl::integer(
            SCALE_FACTOR,
            "Scale Factor",
            "Positions must be whole pixels at this scale, e.g. 2 allows half points",
        )
        .minimum(1.0)
        .default_value(self.scale_factor)]
    }

    fn check(&self, ctx: &mut RuleContext<'_>) -> Result<(), RuleError> {
        #[allow(clippy::cast_precision_loss)]
        let scale = ctx.options().integer(SCALE_FACTOR)? as f64;
        let doc = ctx.document();

        for node in doc.layers() {
            let Some(frame) = node.as_layer().and_then(|layer| layer.frame) else {
                continue;
            };
            if !is_aligned(frame.x, scale) || !is_aligned(frame.y, scale) {
                ctx.report(
                    node.id(),
                    format!("Unexpected sub-pixel positioning at ({}, {})", frame.x, frame.y),
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::testing::{doc, page, reported_ids, run, run_with};
    use serde_json::{json, Value};

    fn at(id: &str, x: f64, y: f64) -> Value {
        json!({ "_class": "rectangle", "do_objectID": id, "frame": { "x": x, "y": y } })
    }

    #[test]
    fn half_points_pass_by_default() {
        let d = doc(page(json!([
            at("whole", 10.0, 20.0),
            at("half", 10.5, -0.5),
            at("quarter", 10.25, 0.0),
            at("third", 0.0, 33.333),
            at("noisy", 10.499_999_999_9, 4.0),
            { "_class": "rectangle", "do_objectID": "no-frame" }
        ])));
        let diagnostics = run(&LayersSubpixelPositioning::new(), &d);
        assert_eq!(reported_ids(&d, &diagnostics), vec!["quarter", "third"]);
        assert_eq!(
            diagnostics[0].message,
            "Unexpected sub-pixel positioning at (10.25, 0)"
        );
    }

    #[test]
    fn scale_factor_sets_the_grid() {
        let d = doc(page(json!([
            at("half", 10.5, 0.0),
            at("third", 1.0 / 3.0, 0.0)
        ])));
        let whole = run_with(&LayersSubpixelPositioning::new(), &d, "scaleFactor = 1").unwrap();
        assert_eq!(reported_ids(&d, &whole), vec!["half", "third"]);

        let thirds = run_with(&LayersSubpixelPositioning::new(), &d, "scaleFactor = 3").unwrap();
        assert_eq!(reported_ids(&d, &thirds), vec!["half"]);
    }

    #[test]
    fn children_are_checked() {
        let d = doc(page(json!([
            {
                "_class": "group",
                "do_objectID": "g",
                "frame": { "x": 0, "y": 0 },
                "layers": [at("child", 0.1, 0.0)]
            }
        ])));
        assert_eq!(
            reported_ids(&d, &run(&LayersSubpixelPositioning::new(), &d)),
            vec!["child"]
        );
    }
}
