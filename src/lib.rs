//! BrandForge Core - Deterministic Course Branding
//!
//! # Laws
//! 1. SVG Is Truth
//! 2. Same Title, Same Pixels
//! 3. Themes Are Ordered Contracts
//! 4. Fallbacks, Never Failures

pub mod themes;
pub mod icons;
pub mod svg;
pub mod logo;
pub mod banner;
pub mod encoding;
pub mod hashing;
pub mod validation;
pub mod pipeline;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use themes::{select_theme, Color, Theme, CATALOG, DEFAULT_THEME};
pub use icons::{render_icon, IconId};
pub use svg::{AssetClass, SvgDocument};
pub use logo::compose_logo;
pub use banner::compose_banner;
pub use encoding::{decode_data_uri, to_data_uri, EncodingError};
pub use hashing::{canonical_json, compute_manifest_hash, title_hash};
pub use validation::{ValidationResult, ValidationRule, ValidationViolation, ViolationSeverity};
pub use pipeline::{BrandingManifest, BrandingPipeline, BrandingRequest, CompiledBranding, PipelineError};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Logo and banner as self-contained `data:image/svg+xml;base64,` URIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingResult {
    pub logo_url: String,
    pub banner_url: String,
}

/// Offline branding for a course: no network, no assets, no failure path.
///
/// Identical input always produces byte-identical output.
pub fn generate_fallback_branding(title: &str, description: Option<&str>) -> BrandingResult {
    let theme = select_theme(title, description.unwrap_or(""));
    debug!(icon = theme.icon.name(), "generating fallback branding");

    BrandingResult {
        logo_url: to_data_uri(&compose_logo(title, &theme)),
        banner_url: to_data_uri(&compose_banner(title, &theme)),
    }
}
