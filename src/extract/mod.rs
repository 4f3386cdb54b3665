//! Extractor module — find widget declarations in header text.
//!
//! The pipeline only depends on the [`DeclarationExtractor`] trait, so the
//! regex strategy in [`pattern`] can be swapped for a tokenizer without
//! touching the driver.

pub mod pattern;

use crate::model::WidgetDeclaration;
use std::fs;
use std::path::Path;

pub use pattern::PatternExtractor;

/// Strategy for recognizing a widget declaration in a header.
pub trait DeclarationExtractor {
    /// Return the declaration if `content` declares a widget with an
    /// argument block, `None` otherwise.
    fn extract(&self, content: &str) -> Option<WidgetDeclaration>;
}

/// Outcome of extracting a single file.
#[derive(Debug)]
pub enum Extraction {
    Match(WidgetDeclaration),
    NoMatch,
    /// The file could not be read. Already logged.
    Unreadable,
}

/// Read `path` and run `extractor` over it. Read failures are logged and
/// reported as [`Extraction::Unreadable`] instead of aborting the run.
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected.
pub fn extract_file(extractor: &dyn DeclarationExtractor, path: &Path) -> Extraction {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("error reading {}: {}", path.display(), e);
            return Extraction::Unreadable;
        }
    };
    let content = String::from_utf8_lossy(&bytes);
    match extractor.extract(&content) {
        Some(decl) => Extraction::Match(decl),
        None => Extraction::NoMatch,
    }
}
