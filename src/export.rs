//! Static site export
//!
//! Writes every section as a standalone HTML page whose menu links to the
//! sibling pages, so the dashboard can be browsed without a server.
//!
//! Layout of the output directory:
//!
//! ```text
//! index.html            default section
//! overview.html         one page per section id
//! insurance.html
//! ...
//! manifest.json         page list and generation time
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::data::DatasetRegistry;
use crate::render::{render_page, NavMode, PageOptions, Renderer};
use crate::section::{SectionId, SECTIONS};

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest serialization error: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// One exported page
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExportedPage {
    pub section: SectionId,
    pub label: &'static str,
    pub file: String,
}

/// Contents of `manifest.json`
#[derive(Debug, Clone, Serialize)]
pub struct ExportManifest {
    pub generated_at: DateTime<Utc>,
    pub default_section: SectionId,
    pub pages: Vec<ExportedPage>,
}

/// Write all section pages, `index.html` and `manifest.json` into `dir`
///
/// The directory is created if missing. Existing files with the same names
/// are overwritten.
pub fn export_site(
    registry: &DatasetRegistry,
    dir: &Path,
    options: &PageOptions,
    default_section: SectionId,
) -> Result<ExportManifest, ExportError> {
    fs::create_dir_all(dir)?;

    let options = PageOptions {
        nav: NavMode::Links,
        ..options.clone()
    };
    let renderer = Renderer::new(registry);
    let mut pages = Vec::with_capacity(SECTIONS.len());

    for section in &SECTIONS {
        let panel = renderer.render_section(section.id);
        let html = render_page(&panel, registry.source(), &options);
        let file = format!("{}.html", section.id);

        fs::write(dir.join(&file), &html)?;
        if section.id == default_section {
            fs::write(dir.join("index.html"), &html)?;
        }

        tracing::debug!(section = %section.id, file = %file, "Exported section page");
        pages.push(ExportedPage {
            section: section.id,
            label: section.label,
            file,
        });
    }

    let manifest = ExportManifest {
        generated_at: Utc::now(),
        default_section,
        pages,
    };
    fs::write(
        dir.join("manifest.json"),
        serde_json::to_string_pretty(&manifest)?,
    )?;

    tracing::info!(
        dir = %dir.display(),
        pages = manifest.pages.len(),
        "Static dashboard exported"
    );
    Ok(manifest)
}

/// Paths written by [`export_site`] for a given manifest
pub fn exported_paths(dir: &Path, manifest: &ExportManifest) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = manifest.pages.iter().map(|p| dir.join(&p.file)).collect();
    paths.push(dir.join("index.html"));
    paths.push(dir.join("manifest.json"));
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn export(default_section: SectionId) -> (TempDir, ExportManifest) {
        let temp_dir = TempDir::new().unwrap();
        let manifest = export_site(
            &DatasetRegistry::national_2023(),
            temp_dir.path(),
            &PageOptions::default(),
            default_section,
        )
        .unwrap();
        (temp_dir, manifest)
    }

    #[test]
    fn test_export_writes_every_section() {
        let (temp_dir, manifest) = export(SectionId::Overview);

        assert_eq!(manifest.pages.len(), 6);
        for path in exported_paths(temp_dir.path(), &manifest) {
            assert!(path.exists(), "missing {}", path.display());
        }

        let insurance = fs::read_to_string(temp_dir.path().join("insurance.html")).unwrap();
        assert!(insurance.contains("data-section=\"insurance\""));
        assert!(insurance.contains("href=\"regional.html\""));
        assert!(!insurance.contains("<form"));
    }

    #[test]
    fn test_index_is_default_section() {
        let (temp_dir, _) = export(SectionId::Prevalence);

        let index = fs::read_to_string(temp_dir.path().join("index.html")).unwrap();
        let prevalence = fs::read_to_string(temp_dir.path().join("prevalence.html")).unwrap();
        assert_eq!(index, prevalence);
    }

    #[test]
    fn test_manifest_json() {
        let (temp_dir, _) = export(SectionId::Overview);

        let content = fs::read_to_string(temp_dir.path().join("manifest.json")).unwrap();
        let manifest: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(manifest["default_section"], "overview");
        assert_eq!(manifest["pages"][0]["file"], "recommendations.html");
        assert!(manifest["generated_at"].as_str().is_some());
    }
}
