//! Run configuration.

use std::collections::BTreeSet;
use std::path::PathBuf;

/// Header base names that are never turned into glue code. These either
/// are not real widgets or need hand-written bindings.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "AndroidWebBrowserWidget",
    "DebugCanvas",
    "MultiBox",
    "MultiBoxCustomization",
    "SDockingArea",
    "SDockingCross",
    "SDockingSplitter",
    "SObjectWidget",
    "SNumericPropertyValue",
    "SStringPropertyValue",
    "SBoolPropertyValue",
    "SEnumPropertyValue",
    "SObjectTableRow",
    "SNumericDropDown",
    "SPropertyViewer",
    "SRotatorInputBox",
    "SSegmentedControl",
    "SFieldIcon",
    "SlateAttribute",
    "SCarouselNavigationBar",
    "SCarouselNavigationButton",
];

pub const DEFAULT_EXTENSION: &str = "h";

/// Which matched headers feed the function manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ManifestScope {
    /// Every matched, non-excluded header, including ones whose output
    /// already existed.
    #[default]
    Matched,
    /// Only headers whose output file was written in this run.
    Written,
}

/// Everything a run needs. Built once in `main` and passed to the driver.
#[derive(Debug, Clone)]
pub struct GlueConfig {
    pub source_root: PathBuf,
    pub target_root: PathBuf,
    pub template_path: PathBuf,
    /// Header extension without the dot, compared case-sensitively
    pub extension: String,
    /// Base names (no extension) to skip
    pub exclusions: BTreeSet<String>,
    pub manifest_scope: ManifestScope,
}

impl GlueConfig {
    pub fn new(
        source_root: impl Into<PathBuf>,
        target_root: impl Into<PathBuf>,
        template_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            target_root: target_root.into(),
            template_path: template_path.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            exclusions: default_exclusions(),
            manifest_scope: ManifestScope::default(),
        }
    }

    pub fn is_excluded(&self, base_name: &str) -> bool {
        self.exclusions.contains(base_name)
    }
}

pub fn default_exclusions() -> BTreeSet<String> {
    DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GlueConfig::new("src", "out", "Template.txt");
        assert_eq!(config.extension, "h");
        assert_eq!(config.manifest_scope, ManifestScope::Matched);
        assert_eq!(config.exclusions.len(), DEFAULT_EXCLUSIONS.len());
        assert!(config.is_excluded("SDockingArea"));
        assert!(!config.is_excluded("SButton"));
    }

    #[test]
    fn exclusion_is_exact() {
        let config = GlueConfig::new("src", "out", "Template.txt");
        assert!(!config.is_excluded("SDockingArea.h"));
        assert!(!config.is_excluded("sdockingarea"));
    }
}
