//! Output Validation - Rule/Policy Separation
//!
//! Rules inspect encoded bytes and produce structured violations.
//! The validator collects them; any error makes the output invalid.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};
use serde::{Deserialize, Serialize};

use crate::templates::ImageTemplate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationViolation {
    pub rule: String,
    pub severity: ViolationSeverity,
    pub message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<ValidationViolation>,
    pub template_id: String,
    pub filename: String,
}

impl ValidationResult {
    pub fn from_violations(template: &ImageTemplate, violations: Vec<ValidationViolation>) -> Self {
        Self {
            valid: !violations.iter().any(|v| v.severity == ViolationSeverity::Error),
            violations,
            template_id: template.id.clone(),
            filename: template.filename.clone(),
        }
    }

    /// Result for an expected output that is not on disk.
    pub fn missing(template: &ImageTemplate) -> Self {
        let violation = error(
            "exists",
            "Output file is missing",
            template.filename.clone(),
            "no such file".into(),
        );
        Self::from_violations(template, vec![violation])
    }

    pub fn has_errors(&self) -> bool {
        !self.valid
    }

    /// `rule: message` pairs joined for error reporting.
    pub fn summary(&self) -> String {
        self.violations
            .iter()
            .map(|v| format!("{}: {}", v.rule, v.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validation rule trait - produces violations
pub trait ValidationRule {
    fn name(&self) -> &'static str;
    fn validate(&self, output: &[u8], template: &ImageTemplate) -> Vec<ValidationViolation>;
}

fn error(rule: &str, message: &str, expected: String, actual: String) -> ValidationViolation {
    ValidationViolation {
        rule: rule.to_string(),
        severity: ViolationSeverity::Error,
        message: message.to_string(),
        expected: Some(expected),
        actual: Some(actual),
    }
}

// --- Concrete Rules ---

pub struct NonEmptyRule;

impl ValidationRule for NonEmptyRule {
    fn name(&self) -> &'static str { "non_empty" }

    fn validate(&self, output: &[u8], _template: &ImageTemplate) -> Vec<ValidationViolation> {
        if output.is_empty() {
            vec![error(self.name(), "Output is empty", "> 0 bytes".into(), "0 bytes".into())]
        } else {
            vec![]
        }
    }
}

pub struct FormatRule;

impl ValidationRule for FormatRule {
    fn name(&self) -> &'static str { "format" }

    fn validate(&self, output: &[u8], _template: &ImageTemplate) -> Vec<ValidationViolation> {
        if output.is_empty() {
            return vec![];
        }
        match image::guess_format(output) {
            Ok(ImageFormat::WebP) => vec![],
            Ok(other) => vec![error(self.name(), "Unexpected image format", "WebP".into(), format!("{:?}", other))],
            Err(e) => vec![error(self.name(), "Unrecognised image data", "WebP".into(), e.to_string())],
        }
    }
}

pub struct DimensionRule;

impl ValidationRule for DimensionRule {
    fn name(&self) -> &'static str { "dimensions" }

    fn validate(&self, output: &[u8], template: &ImageTemplate) -> Vec<ValidationViolation> {
        if output.is_empty() {
            return vec![];
        }
        let [w, h] = template.size;
        let expected = format!("{}x{}", w, h);
        let dims = ImageReader::new(Cursor::new(output))
            .with_guessed_format()
            .map_err(image::ImageError::from)
            .and_then(|reader| reader.into_dimensions());
        match dims {
            Ok((aw, ah)) if (aw, ah) == (w, h) => vec![],
            Ok((aw, ah)) => vec![error(self.name(), "Dimension mismatch", expected, format!("{}x{}", aw, ah))],
            Err(e) => vec![error(self.name(), "Image does not decode", expected, e.to_string())],
        }
    }
}

/// Validator orchestrates rules
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(NonEmptyRule),
                Box::new(FormatRule),
                Box::new(DimensionRule),
            ],
        }
    }

    pub fn validate(&self, output: &[u8], template: &ImageTemplate) -> ValidationResult {
        let violations = self
            .rules
            .iter()
            .flat_map(|rule| rule.validate(output, template))
            .collect();
        ValidationResult::from_violations(template, violations)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{RasterEncoder, WebpEncoder};
    use crate::templates::TemplateRegistry;
    use image::RgbImage;

    fn card_template() -> ImageTemplate {
        TemplateRegistry::bristol().get("location-north").unwrap().clone()
    }

    fn webp(w: u32, h: u32) -> Vec<u8> {
        WebpEncoder.encode(&RgbImage::new(w, h), 82).unwrap()
    }

    #[test]
    fn test_exact_size_passes() {
        let result = Validator::new().validate(&webp(600, 400), &card_template());
        assert!(result.valid, "{}", result.summary());
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_wrong_size_fails() {
        let result = Validator::new().validate(&webp(600, 401), &card_template());
        assert!(!result.valid);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].rule, "dimensions");
        assert_eq!(result.violations[0].actual.as_deref(), Some("600x401"));
    }

    #[test]
    fn test_empty_output_reports_once() {
        let result = Validator::new().validate(&[], &card_template());
        assert!(result.has_errors());
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].rule, "non_empty");
    }

    #[test]
    fn test_png_is_rejected() {
        let mut png = Vec::new();
        RgbImage::new(600, 400)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();
        let result = Validator::new().validate(&png, &card_template());
        assert!(!result.valid);
        assert!(result.violations.iter().any(|v| v.rule == "format"));
        assert!(result.summary().contains("format: Unexpected image format"));
    }

    #[test]
    fn test_missing_output_is_an_error() {
        let result = ValidationResult::missing(&card_template());
        assert!(result.has_errors());
        assert_eq!(result.filename, "location-north-bristol.webp");
        assert_eq!(result.summary(), "exists: Output file is missing");
    }

    #[test]
    fn test_garbage_does_not_decode() {
        let result = Validator::new().validate(b"not an image at all", &card_template());
        assert!(!result.valid);
        let rules: Vec<_> = result.violations.iter().map(|v| v.rule.as_str()).collect();
        assert_eq!(rules, ["format", "dimensions"]);
    }
}
