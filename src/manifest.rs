//! `DEFINE_FUNCTION.json` manifest.
//!
//! Collects the definition signatures of a whole run, drops sentinels and
//! duplicates, sorts them and groups them by function name (the text
//! before the first `(`).

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE_NAME: &str = "DEFINE_FUNCTION.json";

/// Function name → signatures, in sorted order.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FunctionManifest {
    groups: IndexMap<String, Vec<String>>,
}

/// Text before the first `(`, or the whole signature if there is none.
pub fn function_name(signature: &str) -> &str {
    match signature.find('(') {
        Some(idx) => &signature[..idx],
        None => signature,
    }
}

impl FunctionManifest {
    /// Build the manifest from the raw accumulator of a run.
    pub fn build<I>(signatures: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let mut seen = HashSet::new();
        let mut unique: Vec<String> = signatures
            .into_iter()
            .flatten()
            .filter(|sig| seen.insert(sig.clone()))
            .collect();
        unique.sort();

        let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
        let mut previous = String::new();
        for sig in unique {
            let name = function_name(&sig).to_string();
            if name != previous {
                // A name seen again after a different one restarts its group
                groups.insert(name.clone(), Vec::new());
            }
            groups.entry(name.clone()).or_default().push(sig);
            previous = name;
        }
        Self { groups }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of signatures across all groups.
    pub fn signature_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Pretty-printed JSON with 4-space indentation.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .context("failed to serialize function manifest")?;
        String::from_utf8(buf).context("function manifest is not valid UTF-8")
    }

    /// Write the manifest into `target_dir`, replacing any previous one.
    pub fn write(&self, target_dir: &Path) -> Result<PathBuf> {
        let path = target_dir.join(MANIFEST_FILE_NAME);
        let json = self.to_json()?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}
