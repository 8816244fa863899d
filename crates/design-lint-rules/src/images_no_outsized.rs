//! Rule forbidding bitmaps whose pixel size is much larger than their frame.
//!
//! # Configuration
//!
//! - `maxRatio`: How many times larger than its frame an image may be in
//!   either dimension (default: 1)

use design_lint_core::{Class, OptionDecl, Rule, RuleContext, RuleError, Severity};

/// Rule code for images-no-outsized.
pub const CODE: &str = "DL012";

/// Rule name for images-no-outsized.
pub const NAME: &str = "images-no-outsized";

const MAX_RATIO: &str = "maxRatio";

/// Disallows images that are larger than the frame they are shown in.
#[derive(Debug, Clone)]
pub struct ImagesNoOutsized {
    max_ratio: f64,
    severity: Severity,
}

impl Default for ImagesNoOutsized {
    fn default() -> Self {
        Self::new()
    }
}

impl ImagesNoOutsized {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_ratio: 1.0,
            severity: Severity::Error,
        }
    }

    /// Sets the default for `maxRatio`.
    #[must_use]
    pub fn max_ratio(mut self, ratio: f64) -> Self {
        self.max_ratio = ratio;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for ImagesNoOutsized {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "No Outsized Images"
    }

    fn description(&self) -> &'static str {
        "Disallow images that are unnecessarily large for their frame"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn options(&self) -> Vec<OptionDecl> {
        vec![OptionDecl::number(
            MAX_RATIO,
            "Max Size Ratio",
            "How many times larger than its frame an image may be, e.g. 2 allows @2x images",
        )
        .minimum(1.0)
        .default_value(self.max_ratio)]
    }

    fn check(&self, ctx: &mut RuleContext<'_>) -> Result<(), RuleError> {
        let max_ratio = ctx.options().number(MAX_RATIO)?;
        let doc = ctx.document();

        for node in doc.nodes_of(Class::Bitmap) {
            let Some(layer) = node.as_layer() else {
                continue;
            };
            let (Some(image), Some(frame)) = (layer.image.as_ref(), layer.frame.as_ref()) else {
                continue;
            };
            let (Some(pixel_width), Some(pixel_height), Some(width), Some(height)) = (
                image.pixel_width,
                image.pixel_height,
                frame.width,
                frame.height,
            ) else {
                continue;
            };

            let too_wide = pixel_width > width * max_ratio;
            let too_tall = pixel_height > height * max_ratio;
            if too_wide || too_tall {
                ctx.report(
                    node.id(),
                    format!(
                        "Unexpected {pixel_width}x{pixel_height} image in a {width}x{height} frame, expected at most {max_ratio} times the frame size"
                    ),
                );
            }
        }

        Ok(())
    }
}
