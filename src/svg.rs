//! Vector Documents - SVG Is Truth
//!
//! Every composed asset is an `SvgDocument`: a canvas size, a `<defs>` block
//! and a body of shape fragments. Markup is produced with plain string
//! formatting so output is byte-stable.

use serde::{Deserialize, Serialize};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Asset classes this engine produces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Logo,
    Banner,
}

impl AssetClass {
    /// Canonical logical size `[width, height]`.
    pub fn canonical_size(&self) -> [u32; 2] {
        match self {
            AssetClass::Logo => [512, 512],
            AssetClass::Banner => [1920, 1080],
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        let [w, h] = self.canonical_size();
        w as f64 / h as f64
    }

    pub fn file_stem(&self) -> &'static str {
        match self {
            AssetClass::Logo => "logo",
            AssetClass::Banner => "banner",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgDocument {
    pub class: AssetClass,
    defs: String,
    body: String,
}

impl SvgDocument {
    pub fn new(class: AssetClass) -> Self {
        Self {
            class,
            defs: String::new(),
            body: String::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.class.canonical_size()[0]
    }

    pub fn height(&self) -> u32 {
        self.class.canonical_size()[1]
    }

    /// Append a gradient, filter or other reusable definition.
    pub fn define(&mut self, fragment: &str) {
        self.defs.push_str(fragment);
    }

    /// Append a drawable fragment. Later fragments paint over earlier ones.
    pub fn push(&mut self, fragment: &str) {
        self.body.push_str(fragment);
    }

    /// Serialize to standalone SVG markup.
    pub fn markup(&self) -> String {
        let (w, h) = (self.width(), self.height());
        let mut svg = String::with_capacity(self.defs.len() + self.body.len() + 256);
        svg.push_str(&format!(
            r#"<svg xmlns="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            SVG_NS, w, h, w, h
        ));
        if !self.defs.is_empty() {
            svg.push_str("<defs>");
            svg.push_str(&self.defs);
            svg.push_str("</defs>");
        }
        svg.push_str(&self.body);
        svg.push_str("</svg>");
        svg
    }
}

/// Format a coordinate: at most two decimals, no trailing zeros, no `-0`.
pub fn num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Point on a circle, `deg` measured clockwise from the positive x axis.
pub fn polar(cx: f64, cy: f64, r: f64, deg: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// Escape text for markup. Characters XML 1.0 cannot carry are dropped.
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\t' | '\n' | '\r' => out.push(ch),
            c if c.is_control() || c == '\u{FFFE}' || c == '\u{FFFF}' => {}
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_trims() {
        assert_eq!(num(1.0), "1");
        assert_eq!(num(1.5), "1.5");
        assert_eq!(num(0.10), "0.1");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(256.0), "256");
        assert_eq!(num(-12.25), "-12.25");
    }

    #[test]
    fn test_markup_has_canvas() {
        let mut doc = SvgDocument::new(AssetClass::Banner);
        doc.push("<rect/>");
        let markup = doc.markup();
        assert!(markup.starts_with("<svg"));
        assert!(markup.contains(r#"viewBox="0 0 1920 1080""#));
        assert!(!markup.contains("<defs>"));
        assert!(markup.ends_with("<rect/></svg>"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("R&D <101>"), "R&amp;D &lt;101&gt;");
        assert_eq!(escape_xml("it's \"ok\""), "it&apos;s &quot;ok&quot;");
        assert_eq!(escape_xml("a\u{0}b\u{1b}c"), "abc");
    }

    #[test]
    fn test_polar_axes() {
        let (x, y) = polar(256.0, 256.0, 100.0, 90.0);
        assert_eq!(num(x), "256");
        assert_eq!(num(y), "356");
    }
}
