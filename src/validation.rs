//! Validation System - Rules Produce Violations
//!
//! Rules inspect rendered markup and report structured violations.
//! A document is valid when no rule reports an error.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::{Deserialize, Serialize};

use crate::svg::AssetClass;
use crate::themes::Theme;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationViolation {
    pub rule: String,
    pub severity: ViolationSeverity,
    pub message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
    pub remediation: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub asset_class: AssetClass,
    pub violations: Vec<ValidationViolation>,
}

impl ValidationResult {
    /// Violations that block output.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationViolation> {
        self.violations
            .iter()
            .filter(|v| v.severity == ViolationSeverity::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

/// Rendered asset under validation.
#[derive(Debug, Clone, Copy)]
pub struct AssetInput<'a> {
    pub class: AssetClass,
    pub markup: &'a str,
}

impl<'a> AssetInput<'a> {
    pub fn new(class: AssetClass, markup: &'a str) -> Self {
        Self { class, markup }
    }
}

/// Validation rule trait - produces violations
pub trait ValidationRule {
    fn name(&self) -> &'static str;
    fn validate(&self, input: &AssetInput<'_>, theme: &Theme) -> Vec<ValidationViolation>;
}

/// One opened element: tag name and raw attribute pairs.
struct Element {
    name: String,
    attrs: Vec<(String, String)>,
}

impl Element {
    fn from_start(e: &BytesStart<'_>) -> Result<Self, quick_xml::Error> {
        let mut attrs = vec![];
        for attr in e.attributes() {
            let attr = attr?;
            attrs.push((
                String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
                String::from_utf8_lossy(&attr.value).into_owned(),
            ));
        }
        Ok(Self {
            name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
            attrs,
        })
    }

    fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

/// Parsed element outline of a document.
struct Outline {
    elements: Vec<Element>,
    roots: usize,
}

fn parse_outline(markup: &str) -> Result<Outline, String> {
    let mut reader = Reader::from_str(markup);
    let mut elements = vec![];
    let mut depth = 0usize;
    let mut roots = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;
                elements.push(Element::from_start(&e).map_err(|e| e.to_string())?);
            }
            Ok(Event::Empty(e)) => {
                if depth == 0 {
                    roots += 1;
                }
                elements.push(Element::from_start(&e).map_err(|e| e.to_string())?);
            }
            Ok(Event::End(_)) => {
                depth = depth.checked_sub(1).ok_or("Unbalanced end tag")?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(format!(
                    "{} at byte {}",
                    e,
                    reader.error_position()
                ))
            }
        }
    }

    if depth != 0 {
        return Err(format!("{} element(s) left open", depth));
    }
    Ok(Outline { elements, roots })
}

// --- Concrete Rules ---

pub struct WellFormedRule;

impl ValidationRule for WellFormedRule {
    fn name(&self) -> &'static str { "well_formed" }

    fn validate(&self, input: &AssetInput<'_>, _theme: &Theme) -> Vec<ValidationViolation> {
        let violation = |message: String, actual: Option<String>| ValidationViolation {
            rule: self.name().to_string(),
            severity: ViolationSeverity::Error,
            message,
            expected: Some("single <svg> root".to_string()),
            actual,
            remediation: vec!["Escape text content and close every element".to_string()],
        };

        match parse_outline(input.markup) {
            Err(e) => vec![violation("Markup does not parse".to_string(), Some(e))],
            Ok(outline) => {
                let root = outline.elements.first().map(|e| e.name.as_str());
                if outline.roots != 1 || root != Some("svg") {
                    vec![violation(
                        "Document root is not a single svg element".to_string(),
                        Some(format!("{} root(s), first {:?}", outline.roots, root)),
                    )]
                } else {
                    vec![]
                }
            }
        }
    }
}

pub struct CanvasRule {
    pub tolerance: f64,
}

impl Default for CanvasRule {
    fn default() -> Self {
        Self { tolerance: 0.01 }
    }
}

fn parse_view_box(value: &str) -> Option<[f64; 4]> {
    let parts: Vec<f64> = value
        .split_whitespace()
        .map(|p| p.parse::<f64>())
        .collect::<Result<_, _>>()
        .ok()?;
    match parts.as_slice() {
        [x, y, w, h] if *w > 0.0 && *h > 0.0 => Some([*x, *y, *w, *h]),
        _ => None,
    }
}

impl ValidationRule for CanvasRule {
    fn name(&self) -> &'static str { "canvas" }

    fn validate(&self, input: &AssetInput<'_>, _theme: &Theme) -> Vec<ValidationViolation> {
        let [cw, ch] = input.class.canonical_size();
        let expected = format!("0 0 {} {}", cw, ch);

        // unparsable markup is reported by WellFormedRule
        let Ok(outline) = parse_outline(input.markup) else {
            return vec![];
        };
        let view_box = outline
            .elements
            .first()
            .filter(|e| e.name == "svg")
            .and_then(|e| e.attr("viewBox"));

        let Some([_, _, w, h]) = view_box.and_then(parse_view_box) else {
            return vec![ValidationViolation {
                rule: self.name().to_string(),
                severity: ViolationSeverity::Error,
                message: "Missing or invalid viewBox".to_string(),
                expected: Some(expected),
                actual: view_box.map(str::to_string),
                remediation: vec!["Declare the canonical canvas on the root element".to_string()],
            }];
        };

        let actual_ratio = w / h;
        if (input.class.aspect_ratio() - actual_ratio).abs() > self.tolerance {
            return vec![ValidationViolation {
                rule: self.name().to_string(),
                severity: ViolationSeverity::Error,
                message: "Aspect ratio mismatch".to_string(),
                expected: Some(format!("{}:{}", cw, ch)),
                actual: Some(format!("{:.3}", actual_ratio)),
                remediation: vec!["Compose on the asset class canvas".to_string()],
            }];
        }

        if w != cw as f64 || h != ch as f64 {
            return vec![ValidationViolation {
                rule: self.name().to_string(),
                severity: ViolationSeverity::Warning,
                message: "Canvas size differs from canonical size".to_string(),
                expected: Some(expected),
                actual: Some(format!("0 0 {} {}", w, h)),
                remediation: vec!["Use canonical logical units".to_string()],
            }];
        }

        vec![]
    }
}

const PAINT_ATTRS: [&str; 4] = ["fill", "stroke", "stop-color", "flood-color"];

pub struct PaletteRule;

impl PaletteRule {
    fn allowed(value: &str, theme: &Theme) -> bool {
        value == "none"
            || (value.starts_with("url(#") && value.ends_with(')'))
            || theme
                .palette()
                .iter()
                .any(|c| c.as_str().eq_ignore_ascii_case(value))
    }
}

impl ValidationRule for PaletteRule {
    fn name(&self) -> &'static str { "palette" }

    fn validate(&self, input: &AssetInput<'_>, theme: &Theme) -> Vec<ValidationViolation> {
        let Ok(outline) = parse_outline(input.markup) else {
            return vec![];
        };

        let mut foreign: Vec<String> = vec![];
        for element in &outline.elements {
            for (key, value) in &element.attrs {
                if PAINT_ATTRS.contains(&key.as_str())
                    && !Self::allowed(value, theme)
                    && !foreign.contains(value)
                {
                    foreign.push(value.clone());
                }
            }
        }

        if foreign.is_empty() {
            return vec![];
        }
        vec![ValidationViolation {
            rule: self.name().to_string(),
            severity: ViolationSeverity::Error,
            message: "Paint outside the theme palette".to_string(),
            expected: Some(
                theme
                    .palette()
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            actual: Some(foreign.join(", ")),
            remediation: vec![
                "Draw with theme colors and express transparency with opacity attributes".to_string(),
            ],
        }]
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
                Box::new(WellFormedRule),
                Box::new(CanvasRule::default()),
                Box::new(PaletteRule),
            ],
        }
    }

    pub fn validate(&self, input: &AssetInput<'_>, theme: &Theme) -> ValidationResult {
        let mut result = ValidationResult {
            valid: true,
            asset_class: input.class,
            violations: vec![],
        };

        for rule in &self.rules {
            result.violations.extend(rule.validate(input, theme));
        }

        result.valid = !result.has_errors();
        result
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
