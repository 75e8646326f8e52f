//! Contract Invariant Tests
//!
//! These tests verify the non-negotiable guarantees.

use brandforge_core::{
    decode_data_uri, generate_fallback_branding, select_theme,
    encoding::SVG_DATA_URI_PREFIX,
    pipeline::{BrandingPipeline, BrandingRequest},
    svg::AssetClass,
    themes::{Theme, CATALOG, DEFAULT_THEME},
    validation::{AssetInput, Validator},
    IconId,
};
use proptest::prelude::*;

fn decode_pair(title: &str, description: Option<&str>) -> (String, String) {
    let result = generate_fallback_branding(title, description);
    (
        decode_data_uri(&result.logo_url).unwrap(),
        decode_data_uri(&result.banner_url).unwrap(),
    )
}

fn assert_valid(class: AssetClass, markup: &str, theme: &Theme) {
    let result = Validator::new().validate(&AssetInput::new(class, markup), theme);
    assert!(result.valid, "{:?}: {:?}", class, result.violations);
}

#[test]
fn invariant_output_is_deterministic() {
    let a = generate_fallback_branding("Machine Learning Basics", Some("neural nets from scratch"));
    let b = generate_fallback_branding("Machine Learning Basics", Some("neural nets from scratch"));
    assert_eq!(a, b);
}

#[test]
fn invariant_different_titles_differ() {
    let a = generate_fallback_branding("Machine Learning Basics", None);
    let b = generate_fallback_branding("Machine Learning Advanced", None);
    assert_ne!(a.logo_url, b.logo_url);
    assert_ne!(a.banner_url, b.banner_url);
}

#[test]
fn invariant_documented_themes() {
    let python = select_theme("python", "");
    assert_eq!(python.primary.as_str(), "#3776AB");
    assert_eq!(python.icon, IconId::Code);

    let yoga = select_theme("yoga", "");
    assert_eq!(yoga.primary.as_str(), "#14B8A6");
    assert_eq!(yoga.background.as_str(), "#06141A");
    assert_eq!(yoga.icon, IconId::Heart);

    let finance = select_theme("finance", "");
    assert_eq!(finance.accent.as_str(), "#FBBF24");
    assert_eq!(finance.icon, IconId::Chart);

    let fallback = select_theme("Underwater Basket Weaving", "");
    assert_eq!(fallback, DEFAULT_THEME);
    assert_eq!(fallback.primary.as_str(), "#6366F1");
    assert_eq!(fallback.secondary.as_str(), "#8B5CF6");
    assert_eq!(fallback.accent.as_str(), "#EC4899");
    assert_eq!(fallback.background.as_str(), "#0F0A1E");
}

#[test]
fn invariant_catalog_order_is_fixed() {
    let keywords: Vec<&str> = CATALOG.iter().map(|e| e.keyword).collect();
    assert_eq!(keywords.len(), 50);
    assert_eq!(&keywords[..4], &["python", "javascript", "react", "coding"]);
    let coding = keywords.iter().position(|k| *k == "coding").unwrap();
    let ai = keywords.iter().position(|k| *k == "ai").unwrap();
    assert!(coding < ai);
    assert_eq!(select_theme("AI coding bootcamp", ""), CATALOG[coding].theme);
}

#[test]
fn invariant_data_uris_are_svg() {
    let result = generate_fallback_branding("Personal Finance 101", None);
    assert!(result.logo_url.starts_with(SVG_DATA_URI_PREFIX));
    assert!(result.banner_url.starts_with(SVG_DATA_URI_PREFIX));

    let (logo, banner) = decode_pair("Personal Finance 101", None);
    assert!(logo.starts_with("<svg"));
    assert!(logo.contains(r#"class="icon-chart""#));
    assert!(banner.contains(">Personal Finance 101</text>"));
}

#[test]
fn invariant_documents_pass_validation() {
    for title in ["Python for Everyone", "Go", "", "Sales & <Marketing>", "Yoga for Beginners"] {
        let theme = select_theme(title, "");
        let (logo, banner) = decode_pair(title, None);
        assert_valid(AssetClass::Logo, &logo, &theme);
        assert_valid(AssetClass::Banner, &banner, &theme);
    }
}

#[test]
fn invariant_every_theme_stays_in_palette() {
    for entry in CATALOG {
        let (logo, banner) = decode_pair(entry.keyword, None);
        assert_valid(AssetClass::Logo, &logo, &entry.theme);
        assert_valid(AssetClass::Banner, &banner, &entry.theme);
    }
}

#[test]
fn invariant_long_title_truncated_in_banner() {
    let title = "Complete Guide to Watercolor Painting for Absolute Beginners";
    let (_, banner) = decode_pair(title, None);
    let shown: String = title.chars().take(33).collect();
    assert!(banner.contains(&format!(">{}\u{2026}</text>", shown)));
    assert!(!banner.contains(title));
    assert!(banner.contains(r#"font-size="64""#));
}

#[test]
fn invariant_description_affects_theme_only() {
    let plain = generate_fallback_branding("Weekend Workshop", None);
    let music = generate_fallback_branding("Weekend Workshop", Some("learn guitar chords"));
    assert_ne!(plain.logo_url, music.logo_url);
    let (logo, _) = decode_pair("Weekend Workshop", Some("learn guitar chords"));
    assert!(logo.contains(r#"class="icon-music""#));
}

#[test]
fn invariant_edge_inputs_do_not_fail() {
    for title in ["", "   ", "\t\n", "日本語のコース", "🚀🚀🚀", "Ünïcödé Çøürsé", "\u{0}"] {
        let theme = select_theme(title, "");
        let (logo, banner) = decode_pair(title, None);
        assert_valid(AssetClass::Logo, &logo, &theme);
        assert_valid(AssetClass::Banner, &banner, &theme);
    }
}

#[test]
fn invariant_pipeline_matches_fallback() {
    let request = BrandingRequest::new("Python for Everyone", Some("basics".to_string()));
    let compiled = BrandingPipeline::new().compile(&request).unwrap();
    let direct = generate_fallback_branding("Python for Everyone", Some("basics"));
    assert_eq!(compiled.result, direct);
}

#[test]
fn invariant_exports_written_to_dir() {
    let dir = tempfile::tempdir().unwrap();
    let compiled = BrandingPipeline::new()
        .compile(&BrandingRequest::new("Cloud Architecture", None))
        .unwrap();
    let written = compiled.write_to_dir(&dir.path().join("out")).unwrap();
    assert_eq!(written.len(), 3);

    let logo = std::fs::read_to_string(dir.path().join("out/logo.svg")).unwrap();
    assert_eq!(logo, decode_data_uri(&compiled.result.logo_url).unwrap());

    let manifest = std::fs::read_to_string(dir.path().join("out/manifest.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(parsed["theme"], "cloud");
    assert_eq!(parsed["icon"], "globe");
}

proptest! {
    #[test]
    fn prop_generation_is_pure(title in "\\PC{0,60}", description in "\\PC{0,40}") {
        let a = generate_fallback_branding(&title, Some(&description));
        let b = generate_fallback_branding(&title, Some(&description));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_any_title_yields_valid_documents(title in "\\PC{0,80}") {
        let theme = select_theme(&title, "");
        let result = generate_fallback_branding(&title, None);
        let logo = decode_data_uri(&result.logo_url).unwrap();
        let banner = decode_data_uri(&result.banner_url).unwrap();
        let validator = Validator::new();
        prop_assert!(validator.validate(&AssetInput::new(AssetClass::Logo, &logo), &theme).valid);
        prop_assert!(validator.validate(&AssetInput::new(AssetClass::Banner, &banner), &theme).valid);
    }
}
