//! Procedural Icons
//!
//! Each `IconId` is one drawing rule expressed in terms of a center point and
//! a size. Every length is a fraction of `size`; those fractions are the
//! contract and must not drift.

use serde::{Deserialize, Serialize};

use crate::svg::num;
use crate::themes::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconId {
    Code,
    Brain,
    Chart,
    Globe,
    Shield,
    Briefcase,
    Rocket,
    Star,
    Heart,
    Bolt,
    Flame,
    Book,
    Pen,
    Camera,
    Music,
    Play,
    Phone,
    Megaphone,
    Sparkle,
    Flask,
    Calculator,
}

impl IconId {
    pub const ALL: [IconId; 21] = [
        IconId::Code,
        IconId::Brain,
        IconId::Chart,
        IconId::Globe,
        IconId::Shield,
        IconId::Briefcase,
        IconId::Rocket,
        IconId::Star,
        IconId::Heart,
        IconId::Bolt,
        IconId::Flame,
        IconId::Book,
        IconId::Pen,
        IconId::Camera,
        IconId::Music,
        IconId::Play,
        IconId::Phone,
        IconId::Megaphone,
        IconId::Sparkle,
        IconId::Flask,
        IconId::Calculator,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IconId::Code => "code",
            IconId::Brain => "brain",
            IconId::Chart => "chart",
            IconId::Globe => "globe",
            IconId::Shield => "shield",
            IconId::Briefcase => "briefcase",
            IconId::Rocket => "rocket",
            IconId::Star => "star",
            IconId::Heart => "heart",
            IconId::Bolt => "bolt",
            IconId::Flame => "flame",
            IconId::Book => "book",
            IconId::Pen => "pen",
            IconId::Camera => "camera",
            IconId::Music => "music",
            IconId::Play => "play",
            IconId::Phone => "phone",
            IconId::Megaphone => "megaphone",
            IconId::Sparkle => "sparkle",
            IconId::Flask => "flask",
            IconId::Calculator => "calculator",
        }
    }

    /// Look up an icon by name. Unknown names draw as `Star`.
    pub fn from_name(name: &str) -> IconId {
        IconId::ALL
            .iter()
            .copied()
            .find(|icon| icon.name() == name)
            .unwrap_or(IconId::Star)
    }

    /// Marker carried by every rendered fragment of this icon.
    pub fn marker(&self) -> String {
        format!(r#"class="icon-{}""#, self.name())
    }
}

/// Scales unit offsets around a center into formatted coordinates.
struct Pen {
    cx: f64,
    cy: f64,
    s: f64,
}

impl Pen {
    fn x(&self, dx: f64) -> String {
        num(self.cx + dx * self.s)
    }

    fn y(&self, dy: f64) -> String {
        num(self.cy + dy * self.s)
    }

    fn pt(&self, dx: f64, dy: f64) -> String {
        format!("{} {}", self.x(dx), self.y(dy))
    }

    fn len(&self, f: f64) -> String {
        num(self.s * f)
    }

    fn points(&self, offsets: &[(f64, f64)]) -> String {
        offsets
            .iter()
            .map(|&(dx, dy)| format!("{},{}", self.x(dx), self.y(dy)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Draw `icon` centered on `(cx, cy)`, `size` units across, in `color`.
pub fn render_icon(icon: IconId, cx: f64, cy: f64, size: f64, color: Color) -> String {
    let p = Pen { cx, cy, s: size };
    let inner = match icon {
        IconId::Code => code(&p),
        IconId::Brain => brain(&p),
        IconId::Chart => chart(&p, color),
        IconId::Globe => globe(&p),
        IconId::Shield => shield(&p, color),
        IconId::Briefcase => briefcase(&p, color),
        IconId::Rocket => rocket(&p, color),
        IconId::Star => star(&p, color),
        IconId::Heart => heart(&p, color),
        IconId::Bolt => bolt(&p, color),
        IconId::Flame => flame(&p, color),
        IconId::Book => book(&p),
        IconId::Pen => pen(&p, color),
        IconId::Camera => camera(&p, color),
        IconId::Music => music(&p, color),
        IconId::Play => play(&p, color),
        IconId::Phone => phone(&p, color),
        IconId::Megaphone => megaphone(&p, color),
        IconId::Sparkle => sparkle(&p, color),
        IconId::Flask => flask(&p, color),
        IconId::Calculator => calculator(&p, color),
    };
    format!(
        r#"<g {} fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round">{}</g>"#,
        icon.marker(),
        color,
        p.len(stroke_fraction(icon)),
        inner
    )
}

fn stroke_fraction(icon: IconId) -> f64 {
    match icon {
        IconId::Code | IconId::Globe | IconId::Book | IconId::Camera => 0.08,
        IconId::Star | IconId::Heart | IconId::Bolt | IconId::Flame | IconId::Sparkle => 0.04,
        _ => 0.07,
    }
}

fn code(p: &Pen) -> String {
    format!(
        r#"<path d="M {} L {} L {}"/><path d="M {} L {} L {}"/><path d="M {} L {}"/>"#,
        p.pt(-0.15, -0.25),
        p.pt(-0.4, 0.0),
        p.pt(-0.15, 0.25),
        p.pt(0.15, -0.25),
        p.pt(0.4, 0.0),
        p.pt(0.15, 0.25),
        p.pt(0.08, -0.3),
        p.pt(-0.08, 0.3),
    )
}

fn brain(p: &Pen) -> String {
    format!(
        r#"<circle cx="{}" cy="{}" r="{}"/><path d="M {} Q {} {}"/><path d="M {} Q {} {}"/><path d="M {} L {}"/>"#,
        p.x(0.0),
        p.y(-0.05),
        p.len(0.35),
        p.pt(-0.18, -0.25),
        p.pt(-0.05, -0.05),
        p.pt(-0.18, 0.15),
        p.pt(0.18, -0.25),
        p.pt(0.05, -0.05),
        p.pt(0.18, 0.15),
        p.pt(0.0, 0.3),
        p.pt(0.0, 0.48),
    )
}

fn chart(p: &Pen, color: Color) -> String {
    let mut out = String::new();
    for (i, h) in [0.3, 0.5, 0.7].iter().enumerate() {
        let left = -0.35 + i as f64 * 0.25;
        out.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" fill-opacity="0.85" stroke="none"/>"#,
            p.x(left),
            p.y(0.35 - h),
            p.len(0.2),
            p.len(*h),
            p.len(0.03),
            color
        ));
    }
    out.push_str(&format!(
        r#"<path d="M {} L {}"/><path d="M {} L {} L {} L {}" stroke-width="{}"/>"#,
        p.pt(-0.45, 0.42),
        p.pt(0.45, 0.42),
        p.pt(-0.4, 0.0),
        p.pt(-0.1, -0.2),
        p.pt(0.1, -0.1),
        p.pt(0.4, -0.42),
        p.len(0.06),
    ));
    out
}

fn globe(p: &Pen) -> String {
    format!(
        r#"<circle cx="{}" cy="{}" r="{}"/><ellipse cx="{}" cy="{}" rx="{}" ry="{}"/><path d="M {} L {}"/><path d="M {} L {}"/><path d="M {} L {}"/>"#,
        p.x(0.0),
        p.y(0.0),
        p.len(0.4),
        p.x(0.0),
        p.y(0.0),
        p.len(0.18),
        p.len(0.4),
        p.pt(-0.4, 0.0),
        p.pt(0.4, 0.0),
        p.pt(-0.35, -0.2),
        p.pt(0.35, -0.2),
        p.pt(-0.35, 0.2),
        p.pt(0.35, 0.2),
    )
}

fn shield(p: &Pen, color: Color) -> String {
    format!(
        r#"<path d="M {} L {} L {} Q {} {} Q {} {} L {} Z" fill="{}" fill-opacity="0.15"/><path d="M {} L {} L {}"/>"#,
        p.pt(0.0, -0.42),
        p.pt(0.35, -0.28),
        p.pt(0.35, 0.02),
        p.pt(0.35, 0.3),
        p.pt(0.0, 0.45),
        p.pt(-0.35, 0.3),
        p.pt(-0.35, 0.02),
        p.pt(-0.35, -0.28),
        color,
        p.pt(-0.14, 0.0),
        p.pt(-0.03, 0.12),
        p.pt(0.16, -0.12),
    )
}

fn briefcase(p: &Pen, color: Color) -> String {
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}"/><path d="M {} L {} L {} L {}"/><path d="M {} L {}"/><rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="none"/>"#,
        p.x(-0.4),
        p.y(-0.22),
        p.len(0.8),
        p.len(0.55),
        p.len(0.06),
        p.pt(-0.14, -0.22),
        p.pt(-0.14, -0.35),
        p.pt(0.14, -0.35),
        p.pt(0.14, -0.22),
        p.pt(-0.4, 0.0),
        p.pt(0.4, 0.0),
        p.x(-0.06),
        p.y(-0.05),
        p.len(0.12),
        p.len(0.1),
        color,
    )
}

fn rocket(p: &Pen, color: Color) -> String {
    format!(
        concat!(
            r#"<path d="M {} Q {} {} L {} Q {} {} Z" fill="{}" fill-opacity="0.9"/>"#,
            r#"<path d="M {} L {} L {} Z" fill="{}"/><path d="M {} L {} L {} Z" fill="{}"/>"#,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" fill-opacity="0.35"/>"#,
            r#"<path d="M {} L {} L {} Z" fill="{}" opacity="0.7"/>"#
        ),
        p.pt(0.0, -0.45),
        p.pt(0.2, -0.25),
        p.pt(0.16, 0.2),
        p.pt(-0.16, 0.2),
        p.pt(-0.2, -0.25),
        p.pt(0.0, -0.45),
        color,
        p.pt(-0.16, 0.05),
        p.pt(-0.32, 0.3),
        p.pt(-0.14, 0.2),
        color,
        p.pt(0.16, 0.05),
        p.pt(0.32, 0.3),
        p.pt(0.14, 0.2),
        color,
        p.x(0.0),
        p.y(-0.12),
        p.len(0.08),
        color,
        p.pt(-0.08, 0.22),
        p.pt(0.0, 0.42),
        p.pt(0.08, 0.22),
        color,
    )
}

/// Vertices of an `n`-point star, outer and inner radii as size fractions.
fn star_points(p: &Pen, n: usize, outer: f64, inner: f64) -> String {
    let offsets: Vec<(f64, f64)> = (0..n * 2)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let angle = (-90.0 + i as f64 * 180.0 / n as f64).to_radians();
            (r * angle.cos(), r * angle.sin())
        })
        .collect();
    p.points(&offsets)
}

fn star(p: &Pen, color: Color) -> String {
    format!(
        r#"<polygon points="{}" fill="{}"/>"#,
        star_points(p, 5, 0.45, 0.18),
        color
    )
}

fn heart(p: &Pen, color: Color) -> String {
    format!(
        r#"<path d="M {} C {} {} {} C {} {} {} Z" fill="{}"/>"#,
        p.pt(0.0, 0.38),
        p.pt(-0.5, 0.02),
        p.pt(-0.3, -0.42),
        p.pt(0.0, -0.18),
        p.pt(0.3, -0.42),
        p.pt(0.5, 0.02),
        p.pt(0.0, 0.38),
        color
    )
}

fn bolt(p: &Pen, color: Color) -> String {
    format!(
        r#"<polygon points="{}" fill="{}"/>"#,
        p.points(&[
            (0.08, -0.45),
            (-0.28, 0.05),
            (-0.02, 0.05),
            (-0.1, 0.45),
            (0.28, -0.08),
            (0.02, -0.08),
        ]),
        color
    )
}

fn flame(p: &Pen, color: Color) -> String {
    format!(
        concat!(
            r#"<path d="M {} C {} {} {} C {} {} {} C {} {} {} C {} {} {} Z" fill="{}"/>"#,
            r#"<path d="M {} C {} {} {} C {} {} {} Z" fill="{}" opacity="0.5"/>"#
        ),
        p.pt(0.0, -0.45),
        p.pt(0.1, -0.2),
        p.pt(0.35, -0.1),
        p.pt(0.3, 0.15),
        p.pt(0.28, 0.38),
        p.pt(0.12, 0.45),
        p.pt(0.0, 0.45),
        p.pt(-0.12, 0.45),
        p.pt(-0.3, 0.38),
        p.pt(-0.3, 0.15),
        p.pt(-0.3, -0.05),
        p.pt(-0.1, -0.15),
        p.pt(0.0, -0.45),
        color,
        p.pt(0.0, 0.0),
        p.pt(0.15, 0.12),
        p.pt(0.14, 0.4),
        p.pt(0.0, 0.4),
        p.pt(-0.14, 0.4),
        p.pt(-0.15, 0.12),
        p.pt(0.0, 0.0),
        color,
    )
}

fn book(p: &Pen) -> String {
    format!(
        r#"<path d="M {} Q {} {} L {} Q {} {} Z"/><path d="M {} Q {} {} L {} Q {} {} Z"/><path d="M {} L {}"/>"#,
        p.pt(0.0, -0.3),
        p.pt(-0.2, -0.4),
        p.pt(-0.42, -0.3),
        p.pt(-0.42, 0.35),
        p.pt(-0.2, 0.25),
        p.pt(0.0, 0.35),
        p.pt(0.0, -0.3),
        p.pt(0.2, -0.4),
        p.pt(0.42, -0.3),
        p.pt(0.42, 0.35),
        p.pt(0.2, 0.25),
        p.pt(0.0, 0.35),
        p.pt(0.0, -0.3),
        p.pt(0.0, 0.35),
    )
}

fn pen(p: &Pen, color: Color) -> String {
    format!(
        r#"<path d="M {} L {} L {} L {} L {} Z" fill="{}" fill-opacity="0.2"/><path d="M {} L {}"/>"#,
        p.pt(0.3, -0.4),
        p.pt(0.4, -0.3),
        p.pt(-0.2, 0.3),
        p.pt(-0.35, 0.35),
        p.pt(-0.3, 0.2),
        color,
        p.pt(0.2, -0.3),
        p.pt(0.3, -0.2),
    )
}

fn camera(p: &Pen, color: Color) -> String {
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}"/><path d="M {} L {} L {} L {}"/><circle cx="{}" cy="{}" r="{}"/><circle cx="{}" cy="{}" r="{}" fill="{}" stroke="none"/>"#,
        p.x(-0.42),
        p.y(-0.22),
        p.len(0.84),
        p.len(0.55),
        p.len(0.08),
        p.pt(-0.15, -0.22),
        p.pt(-0.1, -0.34),
        p.pt(0.1, -0.34),
        p.pt(0.15, -0.22),
        p.x(0.0),
        p.y(0.05),
        p.len(0.16),
        p.x(0.3),
        p.y(-0.12),
        p.len(0.03),
        color,
    )
}

fn music(p: &Pen, color: Color) -> String {
    format!(
        concat!(
            r#"<path d="M {} L {}"/><path d="M {} L {}"/><path d="M {} L {}" stroke-width="{}"/>"#,
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{}" stroke="none"/>"#,
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{}" stroke="none"/>"#
        ),
        p.pt(-0.15, 0.25),
        p.pt(-0.15, -0.3),
        p.pt(0.3, 0.15),
        p.pt(0.3, -0.4),
        p.pt(-0.15, -0.3),
        p.pt(0.3, -0.4),
        p.len(0.1),
        p.x(-0.25),
        p.y(0.25),
        p.len(0.12),
        p.len(0.09),
        color,
        p.x(0.2),
        p.y(0.15),
        p.len(0.12),
        p.len(0.09),
        color,
    )
}

fn play(p: &Pen, color: Color) -> String {
    format!(
        r#"<circle cx="{}" cy="{}" r="{}"/><polygon points="{}" fill="{}"/>"#,
        p.x(0.0),
        p.y(0.0),
        p.len(0.42),
        p.points(&[(-0.12, -0.2), (0.22, 0.0), (-0.12, 0.2)]),
        color
    )
}

fn phone(p: &Pen, color: Color) -> String {
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}"/><path d="M {} L {}"/><circle cx="{}" cy="{}" r="{}" fill="{}" stroke="none"/>"#,
        p.x(-0.22),
        p.y(-0.42),
        p.len(0.44),
        p.len(0.84),
        p.len(0.08),
        p.pt(-0.06, -0.33),
        p.pt(0.06, -0.33),
        p.x(0.0),
        p.y(0.32),
        p.len(0.04),
        color,
    )
}

fn megaphone(p: &Pen, color: Color) -> String {
    format!(
        concat!(
            r#"<path d="M {} L {} L {} L {} Z" fill="{}" fill-opacity="0.2"/>"#,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="none"/>"#,
            r#"<path d="M {} Q {} {}"/><path d="M {} L {}"/>"#
        ),
        p.pt(-0.3, -0.1),
        p.pt(0.25, -0.35),
        p.pt(0.25, 0.35),
        p.pt(-0.3, 0.1),
        color,
        p.x(-0.4),
        p.y(-0.1),
        p.len(0.1),
        p.len(0.2),
        color,
        p.pt(0.35, -0.15),
        p.pt(0.45, 0.0),
        p.pt(0.35, 0.15),
        p.pt(-0.2, 0.1),
        p.pt(-0.15, 0.35),
    )
}

fn sparkle_path(p: &Pen) -> String {
    format!(
        "M {} Q {} {} Q {} {} Q {} {} Q {} {} Z",
        p.pt(0.0, -0.45),
        p.pt(0.05, -0.05),
        p.pt(0.45, 0.0),
        p.pt(0.05, 0.05),
        p.pt(0.0, 0.45),
        p.pt(-0.05, 0.05),
        p.pt(-0.45, 0.0),
        p.pt(-0.05, -0.05),
        p.pt(0.0, -0.45),
    )
}

fn sparkle(p: &Pen, color: Color) -> String {
    let small = Pen {
        cx: p.cx + 0.3 * p.s,
        cy: p.cy - 0.3 * p.s,
        s: p.s * 0.35,
    };
    format!(
        r#"<path d="{}" fill="{}"/><path d="{}" fill="{}" opacity="0.7"/>"#,
        sparkle_path(p),
        color,
        sparkle_path(&small),
        color
    )
}

fn flask(p: &Pen, color: Color) -> String {
    format!(
        concat!(
            r#"<path d="M {} L {} L {} Q {} {} L {} Q {} {} L {} L {}"/>"#,
            r#"<path d="M {} L {}"/>"#,
            r#"<path d="M {} L {} L {} L {} Z" fill="{}" fill-opacity="0.6" stroke="none"/>"#,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="none"/>"#,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="none"/>"#
        ),
        p.pt(-0.1, -0.42),
        p.pt(-0.1, -0.12),
        p.pt(-0.35, 0.35),
        p.pt(-0.37, 0.42),
        p.pt(-0.28, 0.42),
        p.pt(0.28, 0.42),
        p.pt(0.37, 0.42),
        p.pt(0.35, 0.35),
        p.pt(0.1, -0.12),
        p.pt(0.1, -0.42),
        p.pt(-0.16, -0.42),
        p.pt(0.16, -0.42),
        p.pt(-0.24, 0.15),
        p.pt(0.24, 0.15),
        p.pt(0.33, 0.36),
        p.pt(-0.33, 0.36),
        color,
        p.x(-0.05),
        p.y(0.02),
        p.len(0.035),
        color,
        p.x(0.06),
        p.y(-0.06),
        p.len(0.025),
        color,
    )
}

fn calculator(p: &Pen, color: Color) -> String {
    let mut out = format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}"/><rect x="{}" y="{}" width="{}" height="{}" fill="{}" fill-opacity="0.5" stroke="none"/>"#,
        p.x(-0.3),
        p.y(-0.42),
        p.len(0.6),
        p.len(0.84),
        p.len(0.06),
        p.x(-0.2),
        p.y(-0.32),
        p.len(0.4),
        p.len(0.18),
        color,
    );
    for row in 0..3 {
        for col in 0..3 {
            out.push_str(&format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="none"/>"#,
                p.x(-0.15 + col as f64 * 0.15),
                p.y(0.02 + row as f64 * 0.13),
                p.len(0.04),
                color
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = Color::WHITE;

    #[test]
    fn test_every_icon_renders_its_marker() {
        for icon in IconId::ALL {
            let frag = render_icon(icon, 100.0, 100.0, 80.0, WHITE);
            assert!(frag.starts_with(&format!("<g {}", icon.marker())), "{:?}", icon);
            assert!(frag.ends_with("</g>"));
        }
    }

    #[test]
    fn test_unknown_name_falls_back_to_star() {
        assert_eq!(IconId::from_name("unicorn"), IconId::Star);
        assert_eq!(IconId::from_name(""), IconId::Star);
        assert_eq!(IconId::from_name("flask"), IconId::Flask);
    }

    #[test]
    fn test_names_round_trip() {
        for icon in IconId::ALL {
            assert_eq!(IconId::from_name(icon.name()), icon);
        }
    }

    #[test]
    fn test_stroke_scales_with_size() {
        let frag = render_icon(IconId::Code, 0.0, 0.0, 100.0, WHITE);
        assert!(frag.contains(r#"stroke-width="8""#));
        let frag = render_icon(IconId::Brain, 0.0, 0.0, 100.0, WHITE);
        assert!(frag.contains(r#"stroke-width="7""#));
    }

    #[test]
    fn test_code_geometry() {
        let frag = render_icon(IconId::Code, 100.0, 100.0, 100.0, WHITE);
        assert!(frag.contains(r#"<path d="M 85 75 L 60 100 L 85 125"/>"#));
        assert!(frag.contains(r#"<path d="M 108 70 L 92 130"/>"#));
    }

    #[test]
    fn test_star_top_vertex() {
        let frag = render_icon(IconId::Star, 0.0, 0.0, 100.0, WHITE);
        // first vertex points straight up at 0.45 * size
        assert!(frag.contains(r#"points="0,-45 "#), "{}", frag);
        assert_eq!(frag.matches(',').count(), 10);
    }

    #[test]
    fn test_icon_uses_given_color_only() {
        let color = Color::new("#22D3EE");
        for icon in IconId::ALL {
            let frag = render_icon(icon, 50.0, 50.0, 40.0, color);
            for attr in ["fill=\"", "stroke=\""] {
                for part in frag.split(attr).skip(1) {
                    let value = &part[..part.find('"').unwrap()];
                    assert!(value == "none" || value == "#22D3EE", "{:?}: {}", icon, value);
                }
            }
        }
    }
}
