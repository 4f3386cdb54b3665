//! Batch driver: walk, extract, render, write, then emit the manifest.

use crate::config::{GlueConfig, ManifestScope};
use crate::extract::{self, DeclarationExtractor, Extraction, PatternExtractor};
use crate::manifest::FunctionManifest;
use crate::render;
use crate::walk;
use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Counters for one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub scanned: usize,
    pub matched: usize,
    pub excluded: usize,
    pub written: usize,
    pub skipped_existing: usize,
    pub unreadable: usize,
    /// Signatures in the written manifest, after dedup
    pub signatures: usize,
    pub manifest_path: PathBuf,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scanned {} headers: {} widgets, {} excluded, {} written, {} already present, {} unreadable; {} signatures",
            self.scanned,
            self.matched,
            self.excluded,
            self.written,
            self.skipped_existing,
            self.unreadable,
            self.signatures
        )
    }
}

/// Run the whole pipeline with the regex extractor.
pub fn run(config: &GlueConfig) -> Result<RunReport> {
    run_with(config, &PatternExtractor)
}

/// Run the whole pipeline with a custom extractor.
pub fn run_with(config: &GlueConfig, extractor: &dyn DeclarationExtractor) -> Result<RunReport> {
    ensure_target_dir(&config.target_root)?;

    let headers = walk::find_files(&config.source_root, &config.extension)?;
    let template = fs::read_to_string(&config.template_path).with_context(|| {
        format!("failed to read template: {}", config.template_path.display())
    })?;

    let mut report = RunReport {
        scanned: headers.len(),
        ..Default::default()
    };
    let mut signatures: Vec<Option<String>> = Vec::new();

    for header in &headers {
        let decl = match extract::extract_file(extractor, header) {
            Extraction::Match(decl) => decl,
            Extraction::NoMatch => {
                log::trace!("no widget in {}", header.display());
                continue;
            }
            Extraction::Unreadable => {
                report.unreadable += 1;
                continue;
            }
        };

        let name = base_name(header, &config.extension);
        if config.is_excluded(&name) {
            log::debug!("excluded {}", header.display());
            report.excluded += 1;
            continue;
        }
        report.matched += 1;
        log::debug!(
            "{}: {} : public {}",
            header.display(),
            decl.class_name,
            decl.parent_class
        );

        if config.manifest_scope == ManifestScope::Matched {
            signatures.extend(decl.snippet.definition_signatures.iter().cloned());
        }

        let out_path = render::output_path(&config.target_root, &name);
        if out_path.exists() {
            log::info!("skip, already exists: {}", out_path.display());
            report.skipped_existing += 1;
            continue;
        }

        let code = render::render(&template, &decl);
        fs::write(&out_path, code)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        log::info!("created {}", out_path.display());
        report.written += 1;

        if config.manifest_scope == ManifestScope::Written {
            signatures.extend(decl.snippet.definition_signatures.iter().cloned());
        }
    }

    let manifest = FunctionManifest::build(signatures);
    report.signatures = manifest.signature_count();
    if manifest.is_empty() {
        log::warn!("no argument definitions collected");
    }
    report.manifest_path = manifest.write(&config.target_root)?;
    log::info!(
        "wrote {} ({} functions)",
        report.manifest_path.display(),
        manifest.len()
    );

    Ok(report)
}

/// Create the target directory if it is missing. Only the last path
/// component is created; a missing parent is an error.
fn ensure_target_dir(target: &Path) -> Result<()> {
    if target.exists() {
        return Ok(());
    }
    fs::create_dir(target)
        .with_context(|| format!("failed to create target directory: {}", target.display()))
}

/// File name with the header extension stripped.
/// "Widgets/SButton.h" → "SButton", "SFoo.generated.h" → "SFoo.generated"
fn base_name(path: &Path, extension: &str) -> String {
    let filename = path
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_default();
    let suffix = format!(".{}", extension);
    filename
        .strip_suffix(suffix.as_str())
        .unwrap_or(&filename)
        .to_string()
}
