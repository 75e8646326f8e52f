//! Banner Composer
//!
//! Wide 1920x1080 course banner with a centered title card.

use crate::hashing::title_hash;
use crate::icons::render_icon;
use crate::svg::{escape_xml, num, AssetClass, SvgDocument};
use crate::themes::{Color, Theme};

const WIDTH: f64 = 1920.0;
const HEIGHT: f64 = 1080.0;
const MAX_TITLE_CHARS: usize = 35;
const TRUNCATED_CHARS: usize = 33;
const ELLIPSIS: char = '\u{2026}';
const FONT_STACK: &str = "Inter, Segoe UI, Helvetica, Arial, sans-serif";

/// Glow orbs: normalized center, radius, paint id.
const ORBS: [(f64, f64, f64, &str); 3] = [
    (0.20, 0.35, 420.0, "banner-orb-0"),
    (0.80, 0.65, 460.0, "banner-orb-1"),
    (0.50, 0.25, 360.0, "banner-orb-2"),
];

/// Watermark icons: center, size, opacity.
const WATERMARKS: [(f64, f64, f64, f64); 7] = [
    (150.0, 180.0, 110.0, 0.06),
    (1760.0, 140.0, 90.0, 0.05),
    (340.0, 900.0, 80.0, 0.05),
    (1600.0, 930.0, 120.0, 0.06),
    (980.0, 120.0, 60.0, 0.04),
    (120.0, 560.0, 70.0, 0.04),
    (1820.0, 560.0, 75.0, 0.05),
];

const DOT_ROWS: usize = 12;
const DOT_COLS: usize = 22;

#[derive(Debug, Clone, PartialEq)]
pub struct Wave {
    pub baseline: f64,
    pub amplitude: f64,
    /// Phase in degrees.
    pub phase: f64,
}

/// Hash-derived parameters of a banner.
#[derive(Debug, Clone, PartialEq)]
pub struct BannerLayout {
    pub hash: u32,
    /// Wireframe rotation, degrees in `15..40`.
    pub angle: u32,
    pub title: String,
    pub font_size: u32,
    pub waves: [Wave; 2],
}

impl BannerLayout {
    pub fn new(title: &str) -> Self {
        let hash = title_hash(title);
        let h = hash as u64;
        let wave = |k: u64| Wave {
            baseline: 780.0 + k as f64 * 90.0,
            amplitude: (30 + (h / (k + 1)) % 40) as f64,
            phase: ((h + k * 90) % 360) as f64,
        };

        Self {
            hash,
            angle: 15 + hash % 25,
            title: display_title(title),
            font_size: font_size_tier(title),
            waves: [wave(0), wave(1)],
        }
    }
}

/// Title as shown on the card: over 35 characters becomes 33 plus an ellipsis.
/// Lengths count `char`s, not the UTF-16 units `title_hash` folds over.
pub fn display_title(title: &str) -> String {
    if title.chars().count() > MAX_TITLE_CHARS {
        let mut short: String = title.chars().take(TRUNCATED_CHARS).collect();
        short.push(ELLIPSIS);
        short
    } else {
        title.to_string()
    }
}

/// Font size picked from the length of the full, untruncated title, in `char`s.
pub fn font_size_tier(title: &str) -> u32 {
    match title.chars().count() {
        n if n > 25 => 64,
        n if n > 18 => 76,
        _ => 88,
    }
}

pub fn compose_banner(title: &str, theme: &Theme) -> SvgDocument {
    let layout = BannerLayout::new(title);
    let mut doc = SvgDocument::new(AssetClass::Banner);

    define_paints(&mut doc, theme);
    draw_background(&mut doc, theme);
    draw_orbs(&mut doc);
    draw_waves(&mut doc, theme, &layout);
    draw_wireframes(&mut doc, theme, &layout);
    draw_dot_grid(&mut doc, theme);
    draw_watermarks(&mut doc, theme);
    draw_accents(&mut doc, theme);
    draw_card(&mut doc, theme);
    draw_title(&mut doc, &layout);
    draw_badge(&mut doc, theme);
    draw_vignette(&mut doc, theme);
    doc
}

fn define_paints(doc: &mut SvgDocument, theme: &Theme) {
    doc.define(&format!(
        r#"<linearGradient id="banner-tint" x1="0" y1="0" x2="1" y2="1"><stop offset="0%" stop-color="{}" stop-opacity="0"/><stop offset="100%" stop-color="{}" stop-opacity="0.3"/></linearGradient>"#,
        theme.primary, theme.primary
    ));
    doc.define(&format!(
        r#"<radialGradient id="banner-center" cx="50%" cy="50%" r="50%"><stop offset="0%" stop-color="{}" stop-opacity="0.2"/><stop offset="100%" stop-color="{}" stop-opacity="0"/></radialGradient>"#,
        theme.primary, theme.primary
    ));
    let orb_colors = [theme.primary, theme.accent, theme.secondary];
    for ((_, _, _, id), color) in ORBS.iter().zip(orb_colors) {
        doc.define(&format!(
            r#"<radialGradient id="{}"><stop offset="0%" stop-color="{}" stop-opacity="0.45"/><stop offset="100%" stop-color="{}" stop-opacity="0"/></radialGradient>"#,
            id, color, color
        ));
    }
    doc.define(&format!(
        r#"<linearGradient id="banner-title-fill" x1="0" y1="0" x2="1" y2="0"><stop offset="0%" stop-color="{}"/><stop offset="100%" stop-color="{}"/></linearGradient>"#,
        theme.primary, theme.accent
    ));
    doc.define(&format!(
        r#"<linearGradient id="banner-fade-top" x1="0" y1="0" x2="0" y2="1"><stop offset="0%" stop-color="{}" stop-opacity="0.5"/><stop offset="100%" stop-color="{}" stop-opacity="0"/></linearGradient>"#,
        Color::BLACK,
        Color::BLACK
    ));
    doc.define(&format!(
        r#"<linearGradient id="banner-fade-bottom" x1="0" y1="1" x2="0" y2="0"><stop offset="0%" stop-color="{}" stop-opacity="0.5"/><stop offset="100%" stop-color="{}" stop-opacity="0"/></linearGradient>"#,
        Color::BLACK,
        Color::BLACK
    ));
    doc.define(r#"<filter id="banner-blur" x="-50%" y="-50%" width="200%" height="200%"><feGaussianBlur stdDeviation="60"/></filter>"#);
    doc.define(
        r#"<filter id="banner-glow" x="-10%" y="-30%" width="120%" height="160%"><feGaussianBlur stdDeviation="6" result="blur"/><feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge></filter>"#,
    );
}

fn draw_background(doc: &mut SvgDocument, theme: &Theme) {
    doc.push(&format!(
        r#"<rect width="1920" height="1080" fill="{}"/><rect width="1920" height="1080" fill="url(#banner-tint)"/><ellipse cx="960" cy="540" rx="900" ry="500" fill="url(#banner-center)"/>"#,
        theme.background
    ));
}

fn draw_orbs(doc: &mut SvgDocument) {
    for (nx, ny, r, id) in ORBS {
        doc.push(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="url(#{})" filter="url(#banner-blur)"/>"#,
            num(nx * WIDTH),
            num(ny * HEIGHT),
            num(r),
            id
        ));
    }
}

/// Closed path of one sine wave sampled every 40 units, two periods across.
fn wave_path(wave: &Wave) -> String {
    let mut d = String::new();
    let steps = (WIDTH / 40.0) as usize;
    for step in 0..=steps {
        let x = step as f64 * 40.0;
        let theta = x / (WIDTH / 2.0) * std::f64::consts::TAU + wave.phase.to_radians();
        let y = wave.baseline + wave.amplitude * theta.sin();
        let cmd = if step == 0 { "M" } else { " L" };
        d.push_str(&format!("{} {} {}", cmd, num(x), num(y)));
    }
    d.push_str(" L 1920 1080 L 0 1080 Z");
    d
}

fn draw_waves(doc: &mut SvgDocument, theme: &Theme, layout: &BannerLayout) {
    let fills = [(theme.primary, 0.12), (theme.accent, 0.08)];
    for (wave, (color, opacity)) in layout.waves.iter().zip(fills) {
        doc.push(&format!(
            r#"<path d="{}" fill="{}" fill-opacity="{}"/>"#,
            wave_path(wave),
            color,
            num(opacity)
        ));
    }
}

fn draw_wireframes(doc: &mut SvgDocument, theme: &Theme, layout: &BannerLayout) {
    let a = layout.angle;
    doc.push(&format!(
        r#"<g fill="none" stroke-width="2" opacity="0.1"><rect x="260" y="160" width="180" height="180" stroke="{}" transform="rotate({} 350 250)"/><rect x="120" y="800" width="110" height="110" stroke="{}" transform="rotate({} 175 855)"/><circle cx="1650" cy="220" r="90" stroke="{}" stroke-dasharray="10 12"/><polygon points="1560,800 1629.28,920 1490.72,920" stroke="{}" transform="rotate(-{} 1560 880)"/></g>"#,
        theme.primary,
        a,
        theme.secondary,
        a * 2,
        theme.accent,
        theme.secondary,
        a
    ));
}

fn draw_dot_grid(doc: &mut SvgDocument, theme: &Theme) {
    let mut grid = format!(r#"<g fill="{}" opacity="0.08">"#, theme.primary);
    let dx = 1800.0 / (DOT_COLS - 1) as f64;
    let dy = 960.0 / (DOT_ROWS - 1) as f64;
    for row in 0..DOT_ROWS {
        for col in 0..DOT_COLS {
            grid.push_str(&format!(
                r#"<circle cx="{}" cy="{}" r="2"/>"#,
                num(60.0 + col as f64 * dx),
                num(60.0 + row as f64 * dy)
            ));
        }
    }
    grid.push_str("</g>");
    doc.push(&grid);
}

fn draw_watermarks(doc: &mut SvgDocument, theme: &Theme) {
    let colors = [theme.primary, theme.accent, theme.secondary];
    for (i, (x, y, size, opacity)) in WATERMARKS.iter().enumerate() {
        doc.push(&format!(
            r#"<g opacity="{}">{}</g>"#,
            num(*opacity),
            render_icon(theme.icon, *x, *y, *size, colors[i % 3])
        ));
    }
}

fn draw_accents(doc: &mut SvgDocument, theme: &Theme) {
    doc.push(&format!(
        r#"<path d="M 0 1080 L 700 0" stroke="{}" stroke-width="2" opacity="0.06"/><path d="M 1220 1080 L 1920 80" stroke="{}" stroke-width="2" opacity="0.06"/>"#,
        theme.primary, theme.accent
    ));
    doc.push(&format!(
        r#"<circle cx="300" cy="950" r="120" fill="{}" opacity="0.05" filter="url(#banner-blur)"/><circle cx="1650" cy="120" r="140" fill="{}" opacity="0.05" filter="url(#banner-blur)"/>"#,
        theme.accent, theme.primary
    ));
}

fn draw_card(doc: &mut SvgDocument, theme: &Theme) {
    doc.push(&format!(
        r#"<rect x="260" y="380" width="1400" height="320" rx="32" fill="{}" fill-opacity="0.55" stroke="{}" stroke-opacity="0.25" stroke-width="2"/>"#,
        theme.background, theme.primary
    ));
}

fn draw_title(doc: &mut SvgDocument, layout: &BannerLayout) {
    doc.push(&format!(
        r#"<text x="960" y="545" text-anchor="middle" font-family="{}" font-size="{}" font-weight="800" fill="url(#banner-title-fill)" filter="url(#banner-glow)">{}</text>"#,
        FONT_STACK,
        layout.font_size,
        escape_xml(&layout.title)
    ));
}

fn draw_badge(doc: &mut SvgDocument, theme: &Theme) {
    doc.push(&format!(
        r#"<rect x="900" y="590" width="120" height="6" rx="3" fill="{}"/>"#,
        theme.accent
    ));
    doc.push(&format!(
        r#"<rect x="840" y="622" width="240" height="40" rx="20" fill="{}" fill-opacity="0.2" stroke="{}" stroke-width="1.5"/><text x="960" y="648" text-anchor="middle" font-family="{}" font-size="16" font-weight="700" letter-spacing="4" fill="{}">PREMIUM COURSE</text>"#,
        theme.primary,
        theme.primary,
        FONT_STACK,
        Color::WHITE
    ));
}

fn draw_vignette(doc: &mut SvgDocument, theme: &Theme) {
    doc.push(r#"<rect x="0" y="0" width="1920" height="200" fill="url(#banner-fade-top)"/><rect x="0" y="880" width="1920" height="200" fill="url(#banner-fade-bottom)"/>"#);
    for (x, y) in [(40, 40), (1880, 40), (40, 1040), (1880, 1040)] {
        doc.push(&format!(
            r#"<circle cx="{}" cy="{}" r="6" fill="{}" opacity="0.6"/>"#,
            x, y, theme.accent
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::{select_theme, DEFAULT_THEME};

    #[test]
    fn test_display_title_truncates() {
        let long = "a".repeat(50);
        let shown = display_title(&long);
        assert_eq!(shown.chars().count(), 34);
        assert!(shown.ends_with('\u{2026}'));
        assert_eq!(&shown[..33], &long[..33]);

        let short = "Intro to Watercolor!";
        assert_eq!(short.chars().count(), 20);
        assert_eq!(display_title(short), short);

        let exact = "b".repeat(35);
        assert_eq!(display_title(&exact), exact);
    }

    #[test]
    fn test_display_title_counts_chars_not_bytes() {
        let title = "é".repeat(36);
        let shown = display_title(&title);
        assert_eq!(shown.chars().count(), 34);
        assert_eq!(display_title(&"é".repeat(35)), "é".repeat(35));
    }

    #[test]
    fn test_font_tiers_use_full_title() {
        assert_eq!(font_size_tier(&"x".repeat(18)), 88);
        assert_eq!(font_size_tier(&"x".repeat(19)), 76);
        assert_eq!(font_size_tier(&"x".repeat(25)), 76);
        assert_eq!(font_size_tier(&"x".repeat(26)), 64);
        // the shown title is shorter, the tier still follows the full length
        let layout = BannerLayout::new(&"x".repeat(60));
        assert_eq!(layout.font_size, 64);
        assert_eq!(layout.title.chars().count(), 34);
    }

    #[test]
    fn test_layout_angle_range() {
        for title in ["", "Go", "Personal Finance 101"] {
            let layout = BannerLayout::new(title);
            assert!((15..40).contains(&layout.angle));
        }
        assert_eq!(BannerLayout::new("").angle, 15);
        assert_eq!(BannerLayout::new("a").angle, 15 + 97 % 25);
    }

    #[test]
    fn test_layout_from_known_hash() {
        // hash("Machine Learning Basics") = 1879873358
        let layout = BannerLayout::new("Machine Learning Basics");
        assert_eq!(layout.hash, 1879873358);
        assert_eq!(layout.angle, 15 + 1879873358 % 25);
        assert_eq!(
            layout.waves,
            [
                Wave { baseline: 780.0, amplitude: 68.0, phase: 158.0 },
                Wave { baseline: 870.0, amplitude: 69.0, phase: 248.0 },
            ]
        );
    }

    #[test]
    fn test_tiers_count_chars_of_astral_titles() {
        // 19 chars, 38 UTF-16 units
        let title = "\u{1F680}".repeat(19);
        assert_eq!(font_size_tier(&title), 76);
        assert_eq!(display_title(&title), title);
    }

    #[test]
    fn test_banner_contains_title_and_badge() {
        let theme = select_theme("Personal Finance 101", "");
        let markup = compose_banner("Personal Finance 101", &theme).markup();
        assert!(markup.contains(">Personal Finance 101</text>"));
        assert!(markup.contains(">PREMIUM COURSE</text>"));
        assert!(markup.contains(r#"font-size="76""#));
        assert_eq!(markup.matches(r#"class="icon-chart""#).count(), 7);
    }

    #[test]
    fn test_dot_grid_size() {
        let markup = compose_banner("Go", &DEFAULT_THEME).markup();
        assert_eq!(markup.matches(r#" r="2"/>"#).count(), DOT_ROWS * DOT_COLS);
    }

    #[test]
    fn test_banner_escapes_title() {
        let markup = compose_banner("Sales & <Marketing>", &DEFAULT_THEME).markup();
        assert!(markup.contains(">Sales &amp; &lt;Marketing&gt;</text>"));
    }
}
