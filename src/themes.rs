//! Theme Catalog - Ordered Keyword Contracts
//!
//! Themes are looked up by keyword substring. The catalog is an ordered
//! slice: the first matching entry wins, so entry order is part of the
//! observable output.

use serde::Serialize;

use crate::icons::IconId;

/// `#RRGGBB` color. No alpha; transparency is an attribute at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Color(&'static str);

impl Color {
    pub const WHITE: Color = Color("#FFFFFF");
    pub const BLACK: Color = Color("#000000");

    pub const fn new(hex: &'static str) -> Self {
        Color(hex)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub icon: IconId,
}

impl Theme {
    /// Primary, secondary, accent: the order decorative elements cycle through.
    pub fn accents(&self) -> [Color; 3] {
        [self.primary, self.secondary, self.accent]
    }

    /// Every color a document drawn with this theme may paint with.
    pub fn palette(&self) -> [Color; 6] {
        [
            self.primary,
            self.secondary,
            self.accent,
            self.background,
            Color::WHITE,
            Color::BLACK,
        ]
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogEntry {
    pub keyword: &'static str,
    pub theme: Theme,
}

const fn entry(
    keyword: &'static str,
    primary: &'static str,
    secondary: &'static str,
    accent: &'static str,
    background: &'static str,
    icon: IconId,
) -> CatalogEntry {
    CatalogEntry {
        keyword,
        theme: Theme {
            primary: Color::new(primary),
            secondary: Color::new(secondary),
            accent: Color::new(accent),
            background: Color::new(background),
            icon,
        },
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    primary: Color::new("#6366F1"),
    secondary: Color::new("#8B5CF6"),
    accent: Color::new("#EC4899"),
    background: Color::new("#0F0A1E"),
    icon: IconId::Star,
};

/// Keyword catalog in match order.
pub static CATALOG: &[CatalogEntry] = &[
    entry("python", "#3776AB", "#FFD43B", "#4B8BBE", "#0A1628", IconId::Code),
    entry("javascript", "#F7DF1E", "#E8A317", "#FACC15", "#1A1608", IconId::Code),
    entry("react", "#61DAFB", "#2563EB", "#38BDF8", "#0B1620", IconId::Code),
    entry("coding", "#22D3EE", "#6366F1", "#A855F7", "#0A0F1E", IconId::Code),
    entry("programming", "#06B6D4", "#3B82F6", "#8B5CF6", "#0A101E", IconId::Code),
    entry("web develop", "#F97316", "#3B82F6", "#22D3EE", "#0F1222", IconId::Code),
    entry("software", "#0EA5E9", "#6366F1", "#14B8A6", "#0A1220", IconId::Code),
    entry("blockchain", "#F59E0B", "#6366F1", "#10B981", "#110E1E", IconId::Shield),
    entry("crypto", "#F7931A", "#EAB308", "#6366F1", "#14100A", IconId::Shield),
    entry("machine learning", "#8B5CF6", "#EC4899", "#22D3EE", "#120A24", IconId::Brain),
    entry("ai", "#A855F7", "#6366F1", "#22D3EE", "#0E0A22", IconId::Brain),
    entry("data", "#3B82F6", "#06B6D4", "#10B981", "#081422", IconId::Chart),
    entry("analytics", "#2563EB", "#7C3AED", "#14B8A6", "#0A1024", IconId::Chart),
    entry("cyber", "#10B981", "#059669", "#22D3EE", "#04140E", IconId::Shield),
    entry("security", "#16A34A", "#0EA5E9", "#84CC16", "#06140C", IconId::Shield),
    entry("cloud", "#38BDF8", "#6366F1", "#A5B4FC", "#0A1222", IconId::Globe),
    entry("finance", "#10B981", "#0EA5E9", "#FBBF24", "#06160F", IconId::Chart),
    entry("invest", "#22C55E", "#15803D", "#FACC15", "#061409", IconId::Chart),
    entry("trading", "#EF4444", "#22C55E", "#F59E0B", "#140A0A", IconId::Chart),
    entry("accounting", "#0D9488", "#2563EB", "#FBBF24", "#05161A", IconId::Calculator),
    entry("math", "#6366F1", "#0EA5E9", "#F43F5E", "#0B0D22", IconId::Calculator),
    entry("business", "#1D4ED8", "#0F766E", "#F59E0B", "#0A0F1C", IconId::Briefcase),
    entry("entrepreneur", "#F97316", "#EF4444", "#FACC15", "#1A0E06", IconId::Rocket),
    entry("startup", "#F43F5E", "#8B5CF6", "#F59E0B", "#1A0A12", IconId::Rocket),
    entry("leadership", "#EAB308", "#B45309", "#F97316", "#18120A", IconId::Star),
    entry("management", "#475569", "#2563EB", "#F59E0B", "#0C1018", IconId::Briefcase),
    entry("marketing", "#EC4899", "#F97316", "#8B5CF6", "#1A0A14", IconId::Megaphone),
    entry("social media", "#3B82F6", "#EC4899", "#A855F7", "#0C0C20", IconId::Phone),
    entry("sales", "#EF4444", "#F97316", "#FACC15", "#1A0B08", IconId::Megaphone),
    entry("design", "#EC4899", "#8B5CF6", "#F59E0B", "#180A1A", IconId::Pen),
    entry("writing", "#A16207", "#78350F", "#F59E0B", "#140E06", IconId::Pen),
    entry("photo", "#F59E0B", "#EF4444", "#6366F1", "#140E08", IconId::Camera),
    entry("video", "#EF4444", "#DC2626", "#F97316", "#160808", IconId::Play),
    entry("film", "#B91C1C", "#F59E0B", "#FDE68A", "#120808", IconId::Play),
    entry("music", "#8B5CF6", "#EC4899", "#F59E0B", "#140A1E", IconId::Music),
    entry("guitar", "#B45309", "#DC2626", "#FBBF24", "#160C06", IconId::Music),
    entry("yoga", "#14B8A6", "#A78BFA", "#F9A8D4", "#06141A", IconId::Heart),
    entry("meditation", "#818CF8", "#C084FC", "#5EEAD4", "#0C0A20", IconId::Sparkle),
    entry("mindful", "#A78BFA", "#5EEAD4", "#F0ABFC", "#0E0C1E", IconId::Sparkle),
    entry("fitness", "#F97316", "#EF4444", "#FACC15", "#180C06", IconId::Flame),
    entry("health", "#10B981", "#14B8A6", "#F472B6", "#06160F", IconId::Heart),
    entry("nutrition", "#84CC16", "#22C55E", "#F97316", "#0B1406", IconId::Heart),
    entry("cooking", "#EA580C", "#DC2626", "#FBBF24", "#180A06", IconId::Flame),
    entry("science", "#06B6D4", "#8B5CF6", "#84CC16", "#06121A", IconId::Flask),
    entry("chemistry", "#22C55E", "#06B6D4", "#A855F7", "#06140F", IconId::Flask),
    entry("productivity", "#FACC15", "#F97316", "#3B82F6", "#14120A", IconId::Bolt),
    entry("language", "#0EA5E9", "#F43F5E", "#FACC15", "#0A1220", IconId::Globe),
    entry("travel", "#0284C7", "#14B8A6", "#F59E0B", "#061320", IconId::Globe),
    entry("history", "#92400E", "#B45309", "#FCD34D", "#140C06", IconId::Book),
    entry("book", "#7C3AED", "#DB2777", "#FBBF24", "#120A1E", IconId::Book),
];

/// Find the first catalog entry whose keyword occurs in `title + " " + description`.
pub fn select_entry(title: &str, description: &str) -> Option<&'static CatalogEntry> {
    let text = format!("{} {}", title, description).to_lowercase();
    CATALOG.iter().find(|e| text.contains(e.keyword))
}

/// Resolve the theme for a course, falling back to `DEFAULT_THEME`.
pub fn select_theme(title: &str, description: &str) -> Theme {
    select_entry(title, description)
        .map(|e| e.theme)
        .unwrap_or(DEFAULT_THEME)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword_of(title: &str) -> Option<&'static str> {
        select_entry(title, "").map(|e| e.keyword)
    }

    #[test]
    fn test_each_keyword_resolves_to_itself() {
        for (i, e) in CATALOG.iter().enumerate() {
            let found = select_entry(e.keyword, "").map(|f| f.keyword);
            assert_eq!(found, Some(e.keyword), "entry {} is shadowed", i);
        }
    }

    #[test]
    fn test_no_match_is_default() {
        assert_eq!(select_theme("Watercolor Landscapes", ""), DEFAULT_THEME);
        assert_eq!(select_theme("", ""), DEFAULT_THEME);
        assert_eq!(DEFAULT_THEME.icon, IconId::Star);
    }

    #[test]
    fn test_catalog_order_breaks_ties() {
        assert_eq!(keyword_of("AI coding bootcamp"), Some("coding"));
        assert_eq!(keyword_of("Data Science with Python"), Some("python"));
        assert_eq!(keyword_of("Cooking for Fitness"), Some("fitness"));
    }

    #[test]
    fn test_match_is_case_insensitive_and_uses_description() {
        assert_eq!(keyword_of("YOGA FLOW"), Some("yoga"));
        let theme = select_theme("Weekend Workshop", "learn guitar chords");
        assert_eq!(theme.icon, IconId::Music);
    }

    #[test]
    fn test_substring_match_is_raw() {
        // "ai" sits inside "email"
        assert_eq!(keyword_of("Email Etiquette"), Some("ai"));
    }

    #[test]
    fn test_colors_are_hex() {
        for e in CATALOG {
            for c in e.theme.palette() {
                let s = c.as_str();
                assert_eq!(s.len(), 7, "{}", s);
                assert!(s.starts_with('#'));
                assert!(s[1..].chars().all(|ch| ch.is_ascii_hexdigit()));
            }
        }
    }
}
