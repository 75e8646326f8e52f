//! Logo Composer
//!
//! Square 512x512 badge. Every "random" choice is derived from `title_hash`,
//! so a title always yields the same logo.

use crate::hashing::title_hash;
use crate::icons::render_icon;
use crate::svg::{escape_xml, num, polar, AssetClass, SvgDocument};
use crate::themes::{Color, Theme};

const CENTER: f64 = 256.0;
const BADGE_RADIUS: f64 = 165.0;
const RING_RADIUS: f64 = 215.0;
const PARTICLE_COUNT: u64 = 18;
const FONT_STACK: &str = "Inter, Segoe UI, Helvetica, Arial, sans-serif";

const CORNER_ICONS: [(f64, f64); 4] = [(70.0, 70.0), (442.0, 70.0), (70.0, 442.0), (442.0, 442.0)];

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub angle: f64,
    pub distance: f64,
    pub radius: f64,
    pub opacity: f64,
    pub color: Color,
}

/// Hash-derived parameters of a logo.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoLayout {
    pub hash: u32,
    /// Rotation of the decorative ring group, degrees in `15..75`.
    pub rotation: u32,
    /// Phase offset of the ring segments, degrees in `0..30`.
    pub ring_phase: u32,
    pub initials: String,
    pub particles: Vec<Particle>,
}

impl LogoLayout {
    pub fn new(title: &str, theme: &Theme) -> Self {
        let hash = title_hash(title);
        let h = hash as u64;
        let cycle = [theme.accent, theme.primary, theme.secondary];

        let particles = (0..PARTICLE_COUNT)
            .map(|i| Particle {
                angle: i as f64 / PARTICLE_COUNT as f64 * 360.0 + (h % 100) as f64 * 0.02,
                distance: (195 + (h * (i + 1)) % 50) as f64,
                radius: (1 + (h * (i + 2)) % 3) as f64,
                opacity: 0.1 + ((h * (i + 3)) % 30) as f64 / 100.0,
                color: cycle[(i % 3) as usize],
            })
            .collect();

        Self {
            hash,
            rotation: hash % 60 + 15,
            ring_phase: hash % 30,
            initials: initials(title),
            particles,
        }
    }
}

/// Two-letter monogram for a title.
///
/// First letters of the first two words longer than two characters; if no
/// word qualifies, the first two characters of the title; `"C"` when empty.
/// Characters markup cannot carry are ignored.
pub fn initials(title: &str) -> String {
    let title: String = title
        .chars()
        .filter(|c| c.is_whitespace() || !(c.is_control() || *c == '\u{FFFE}' || *c == '\u{FFFF}'))
        .collect();
    let words: Vec<&str> = title
        .split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .collect();

    let raw: String = if words.is_empty() {
        title.trim().chars().take(2).collect()
    } else {
        words.iter().take(2).filter_map(|w| w.chars().next()).collect()
    };

    if raw.is_empty() {
        "C".to_string()
    } else {
        raw.to_uppercase()
    }
}

pub fn compose_logo(title: &str, theme: &Theme) -> SvgDocument {
    let layout = LogoLayout::new(title, theme);
    let mut doc = SvgDocument::new(AssetClass::Logo);

    define_paints(&mut doc, theme);
    draw_background(&mut doc, theme);
    draw_hex_grid(&mut doc, theme);
    draw_rings(&mut doc, theme, &layout);
    draw_particles(&mut doc, &layout);
    draw_corner_icons(&mut doc, theme);
    draw_wireframes(&mut doc, theme, &layout);
    draw_badge(&mut doc, theme);
    draw_main_icon(&mut doc, theme);
    draw_initials(&mut doc, &layout);
    draw_course_label(&mut doc, theme);
    draw_top_accent(&mut doc);
    doc
}

fn define_paints(doc: &mut SvgDocument, theme: &Theme) {
    doc.define(&format!(
        r#"<radialGradient id="logo-glow" cx="50%" cy="50%" r="60%"><stop offset="0%" stop-color="{}" stop-opacity="0.25"/><stop offset="100%" stop-color="{}" stop-opacity="0"/></radialGradient>"#,
        theme.primary, theme.background
    ));
    doc.define(&format!(
        r#"<radialGradient id="logo-badge" cx="35%" cy="35%" r="75%"><stop offset="0%" stop-color="{}"/><stop offset="60%" stop-color="{}"/><stop offset="100%" stop-color="{}"/></radialGradient>"#,
        theme.primary, theme.secondary, theme.accent
    ));
    doc.define(&format!(
        r#"<linearGradient id="logo-inner" x1="0" y1="0" x2="0" y2="1"><stop offset="0%" stop-color="{}" stop-opacity="0.25"/><stop offset="100%" stop-color="{}" stop-opacity="0"/></linearGradient>"#,
        Color::WHITE,
        Color::WHITE
    ));
    doc.define(&format!(
        r#"<linearGradient id="logo-accent" x1="0" y1="0" x2="1" y2="0"><stop offset="0%" stop-color="{}"/><stop offset="50%" stop-color="{}"/><stop offset="100%" stop-color="{}"/></linearGradient>"#,
        theme.primary, theme.accent, theme.secondary
    ));
    doc.define(&format!(
        r#"<filter id="logo-shadow" x="-30%" y="-30%" width="160%" height="160%"><feDropShadow dx="0" dy="8" stdDeviation="12" flood-color="{}" flood-opacity="0.45"/></filter>"#,
        Color::BLACK
    ));
    doc.define(&format!(
        r#"<filter id="logo-icon-shadow" x="-30%" y="-30%" width="160%" height="160%"><feDropShadow dx="0" dy="4" stdDeviation="6" flood-color="{}" flood-opacity="0.35"/></filter>"#,
        Color::BLACK
    ));
    doc.define(
        r#"<filter id="logo-soft-glow" x="-20%" y="-20%" width="140%" height="140%"><feGaussianBlur stdDeviation="3" result="blur"/><feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge></filter>"#,
    );
}

fn draw_background(doc: &mut SvgDocument, theme: &Theme) {
    doc.push(&format!(
        r#"<rect width="512" height="512" fill="{}"/><rect width="512" height="512" fill="url(#logo-glow)"/>"#,
        theme.background
    ));
}

/// Fixed 9x9 pointy-top hex tiling, barely visible.
fn draw_hex_grid(doc: &mut SvgDocument, theme: &Theme) {
    const R: f64 = 20.0;
    let mut grid = format!(
        r#"<g fill="none" stroke="{}" stroke-width="1" opacity="0.06">"#,
        theme.primary
    );
    for row in 0..9 {
        for col in 0..9 {
            let offset = if row % 2 == 1 { 32.0 } else { 0.0 };
            let cx = col as f64 * 64.0 + offset;
            let cy = row as f64 * 56.0 + 32.0;
            let points: Vec<String> = (0..6)
                .map(|k| {
                    let (x, y) = polar(cx, cy, R, 30.0 + k as f64 * 60.0);
                    format!("{},{}", num(x), num(y))
                })
                .collect();
            grid.push_str(&format!(r#"<polygon points="{}"/>"#, points.join(" ")));
        }
    }
    grid.push_str("</g>");
    doc.push(&grid);
}

fn draw_rings(doc: &mut SvgDocument, theme: &Theme, layout: &LogoLayout) {
    let colors = theme.accents();
    let mut group = format!(
        r#"<g transform="rotate({} 256 256)" fill="none" stroke-width="3" stroke-linecap="round" opacity="0.5">"#,
        layout.rotation
    );
    for i in 0..6 {
        let start = i as f64 * 60.0 + layout.ring_phase as f64;
        let (x1, y1) = polar(CENTER, CENTER, RING_RADIUS, start);
        let (x2, y2) = polar(CENTER, CENTER, RING_RADIUS, start + 40.0);
        group.push_str(&format!(
            r#"<path d="M {} {} A {} {} 0 0 1 {} {}" stroke="{}"/>"#,
            num(x1),
            num(y1),
            num(RING_RADIUS),
            num(RING_RADIUS),
            num(x2),
            num(y2),
            colors[i % 3]
        ));
    }
    group.push_str("</g>");
    doc.push(&group);
}

fn draw_particles(doc: &mut SvgDocument, layout: &LogoLayout) {
    for p in &layout.particles {
        let (x, y) = polar(CENTER, CENTER, p.distance, p.angle);
        doc.push(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" opacity="{}"/>"#,
            num(x),
            num(y),
            num(p.radius),
            p.color,
            num(p.opacity)
        ));
    }
}

fn draw_corner_icons(doc: &mut SvgDocument, theme: &Theme) {
    let colors = theme.accents();
    for (i, (x, y)) in CORNER_ICONS.iter().enumerate() {
        doc.push(&format!(
            r#"<g opacity="0.12">{}</g>"#,
            render_icon(theme.icon, *x, *y, 44.0, colors[i % 3])
        ));
    }
}

fn draw_wireframes(doc: &mut SvgDocument, theme: &Theme, layout: &LogoLayout) {
    doc.push(&format!(
        r#"<rect x="106" y="106" width="300" height="300" fill="none" stroke="{}" stroke-width="1" opacity="0.08" transform="rotate({} 256 256)"/>"#,
        theme.primary,
        45 + layout.rotation
    ));
    doc.push(&format!(
        r#"<rect x="131" y="131" width="250" height="250" fill="none" stroke="{}" stroke-width="1" opacity="0.06" transform="rotate(-{} 256 256)"/>"#,
        theme.accent, layout.rotation
    ));
}

fn draw_badge(doc: &mut SvgDocument, theme: &Theme) {
    let r = num(BADGE_RADIUS);
    doc.push(&format!(
        r#"<circle cx="256" cy="256" r="{}" fill="url(#logo-badge)" filter="url(#logo-shadow)"/>"#,
        r
    ));
    doc.push(&format!(
        r#"<circle cx="256" cy="256" r="{}" fill="url(#logo-inner)"/>"#,
        r
    ));
    // glass highlight over the upper cap
    doc.push(&format!(
        r#"<path d="M 126 226 A 140 140 0 0 1 386 226 Q 256 190 126 226 Z" fill="{}" opacity="0.12"/>"#,
        Color::WHITE
    ));
    doc.push(&format!(
        r#"<circle cx="256" cy="256" r="150" fill="none" stroke="{}" stroke-width="2" opacity="0.25"/>"#,
        Color::WHITE
    ));
    doc.push(&format!(
        r#"<circle cx="256" cy="256" r="178" fill="none" stroke="{}" stroke-width="2" stroke-dasharray="6 8" opacity="0.6"/>"#,
        theme.accent
    ));
}

fn draw_main_icon(doc: &mut SvgDocument, theme: &Theme) {
    doc.push(&format!(
        r#"<g filter="url(#logo-icon-shadow)">{}</g>"#,
        render_icon(theme.icon, CENTER, 225.0, 130.0, Color::WHITE)
    ));
}

fn draw_initials(doc: &mut SvgDocument, layout: &LogoLayout) {
    doc.push(&format!(
        r#"<text x="256" y="345" text-anchor="middle" font-family="{}" font-size="44" font-weight="800" letter-spacing="6" fill="{}" filter="url(#logo-soft-glow)">{}</text>"#,
        FONT_STACK,
        Color::WHITE,
        escape_xml(&layout.initials)
    ));
}

fn draw_course_label(doc: &mut SvgDocument, theme: &Theme) {
    doc.push(&format!(
        r#"<rect x="211" y="446" width="90" height="24" rx="12" fill="{}" fill-opacity="0.7" stroke="{}" stroke-width="1.5"/>"#,
        theme.background, theme.accent
    ));
    doc.push(&format!(
        r#"<text x="256" y="462" text-anchor="middle" font-family="{}" font-size="11" font-weight="700" letter-spacing="3" fill="{}">COURSE</text>"#,
        FONT_STACK,
        Color::WHITE
    ));
}

fn draw_top_accent(doc: &mut SvgDocument) {
    doc.push(r#"<rect x="156" y="0" width="200" height="4" rx="2" fill="url(#logo-accent)"/>"#);
}
