//! Branding Pipeline - Single Entry Point
//!
//! CRITICAL: compile MUST validate both documents. No bypass.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::banner::compose_banner;
use crate::encoding::{markup_to_data_uri, EncodingError};
use crate::hashing::{compute_manifest_hash, sha256_hex, title_hash};
use crate::icons::IconId;
use crate::logo::compose_logo;
use crate::svg::{AssetClass, SvgDocument};
use crate::themes::{select_entry, Theme, DEFAULT_THEME};
use crate::validation::{AssetInput, ValidationResult, Validator};
use crate::{BrandingResult, ENGINE_VERSION};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data URI: {0}")]
    InvalidDataUri(#[from] EncodingError),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandingRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl BrandingRequest {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
        }
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Reproduction record for a compiled pair. Carries no timestamps or ids,
/// so equal requests give equal manifests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingManifest {
    pub engine_version: String,
    /// Matched catalog keyword, `"default"` when nothing matched.
    pub theme: String,
    pub icon: IconId,
    pub title_hash: u32,
    pub logo_sha256: String,
    pub banner_sha256: String,
    /// SHA-256 of the canonical JSON of the fields above.
    #[serde(default)]
    pub manifest_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedFile {
    pub class: AssetClass,
    pub filename: String,
    pub markup: String,
    pub hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompiledBranding {
    pub result: BrandingResult,
    pub manifest: BrandingManifest,
    pub validation: Vec<ValidationResult>,
    #[serde(skip)]
    pub exports: Vec<ExportedFile>,
}

impl CompiledBranding {
    /// Write every export plus `manifest.json` into `dir`, creating it if needed.
    pub fn write_to_dir(&self, dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
        fs::create_dir_all(dir)?;
        let mut written = vec![];

        for export in &self.exports {
            let path = dir.join(&export.filename);
            fs::write(&path, &export.markup)?;
            written.push(path);
        }

        let path = dir.join("manifest.json");
        fs::write(&path, serde_json::to_string_pretty(&self.manifest)?)?;
        written.push(path);

        debug!(dir = %dir.display(), files = written.len(), "wrote branding exports");
        Ok(written)
    }
}

/// Compose both branding documents for a request.
pub fn compose(title: &str, theme: &Theme) -> [SvgDocument; 2] {
    [compose_logo(title, theme), compose_banner(title, theme)]
}

/// The branding pipeline - single entry point for validated compilation
pub struct BrandingPipeline {
    validator: Validator,
}

impl BrandingPipeline {
    pub fn new() -> Self {
        Self {
            validator: Validator::new(),
        }
    }

    /// Compile a logo and banner for a course.
    ///
    /// CRITICAL: Both documents are always validated. Any error blocks output.
    pub fn compile(&self, request: &BrandingRequest) -> Result<CompiledBranding, PipelineError> {
        let entry = select_entry(&request.title, request.description());
        let theme = entry.map(|e| e.theme).unwrap_or(DEFAULT_THEME);
        let keyword = entry.map(|e| e.keyword).unwrap_or("default");
        let hash = title_hash(&request.title);
        debug!(theme = keyword, icon = theme.icon.name(), hash, "resolved course theme");

        let mut validation = vec![];
        let mut exports = vec![];
        for doc in compose(&request.title, &theme) {
            let markup = doc.markup();
            let result = self.validator.validate(&AssetInput::new(doc.class, &markup), &theme);
            debug!(class = ?doc.class, bytes = markup.len(), valid = result.valid, "rendered document");

            exports.push(ExportedFile {
                class: doc.class,
                filename: format!("{}.svg", doc.class.file_stem()),
                hash: sha256_hex(markup.as_bytes()),
                markup,
            });
            validation.push(result);
        }

        let messages: Vec<String> = validation
            .iter()
            .flat_map(|r| {
                r.errors()
                    .map(move |v| format!("{}/{}: {}", r.asset_class.file_stem(), v.rule, v.message))
            })
            .collect();
        if !messages.is_empty() {
            warn!(title = %request.title, "branding rejected: {}", messages.join("; "));
            return Err(PipelineError::ValidationFailed(messages.join("; ")));
        }

        let (logo, banner) = (&exports[0], &exports[1]);
        let mut manifest = BrandingManifest {
            engine_version: ENGINE_VERSION.to_string(),
            theme: keyword.to_string(),
            icon: theme.icon,
            title_hash: hash,
            logo_sha256: logo.hash.clone(),
            banner_sha256: banner.hash.clone(),
            manifest_hash: String::new(),
        };
        manifest.manifest_hash = compute_manifest_hash(&manifest)?;

        let result = BrandingResult {
            logo_url: markup_to_data_uri(&logo.markup),
            banner_url: markup_to_data_uri(&banner.markup),
        };

        Ok(CompiledBranding {
            result,
            manifest,
            validation,
            exports,
        })
    }
}

impl Default for BrandingPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_produces_both_exports() {
        let compiled = BrandingPipeline::new()
            .compile(&BrandingRequest::new("Python for Everyone", None))
            .unwrap();
        assert_eq!(compiled.exports.len(), 2);
        assert_eq!(compiled.exports[0].filename, "logo.svg");
        assert_eq!(compiled.exports[1].filename, "banner.svg");
        assert!(compiled.validation.iter().all(|v| v.valid));
        assert_eq!(compiled.manifest.theme, "python");
        assert_eq!(compiled.manifest.icon, IconId::Code);
    }

    #[test]
    fn test_manifest_is_reproducible() {
        let pipeline = BrandingPipeline::new();
        let request = BrandingRequest::new("Yoga for Beginners", Some("gentle flows".into()));
        let a = pipeline.compile(&request).unwrap();
        let b = pipeline.compile(&request).unwrap();
        assert_eq!(a.manifest, b.manifest);
        assert_eq!(a.manifest.manifest_hash.len(), 64);
    }

    #[test]
    fn test_unmatched_title_uses_default_keyword() {
        let compiled = BrandingPipeline::new()
            .compile(&BrandingRequest::new("Watercolor Landscapes", None))
            .unwrap();
        assert_eq!(compiled.manifest.theme, "default");
        assert_eq!(compiled.manifest.icon, IconId::Star);
    }

    #[test]
    fn test_manifest_hash_covers_fields() {
        let compiled = BrandingPipeline::new()
            .compile(&BrandingRequest::new("Go", None))
            .unwrap();
        let mut unhashed = compiled.manifest.clone();
        unhashed.manifest_hash = String::new();
        assert_eq!(
            compute_manifest_hash(&unhashed).unwrap(),
            compiled.manifest.manifest_hash
        );
    }
}
