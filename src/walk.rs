//! Recursive header discovery.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// List every regular file under `root` (recursively) whose extension is
/// exactly `extension`. Any unreadable directory or dangling symlink
/// aborts the walk.
pub fn find_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("source root is not a directory: {}", root.display());
    }
    // Escape the root so brackets or asterisks in real paths stay literal
    let root_str = root
        .to_str()
        .with_context(|| format!("source root is not valid UTF-8: {}", root.display()))?;
    let pattern = format!(
        "{}/**/*.{}",
        glob::Pattern::escape(root_str),
        glob::Pattern::escape(extension)
    );
    let options = glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let mut files = Vec::new();
    for entry in glob::glob_with(&pattern, options)
        .with_context(|| format!("invalid glob pattern: {}", pattern))?
    {
        let path = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        let meta =
            fs::metadata(&path).with_context(|| format!("failed to stat {}", path.display()))?;
        if meta.is_file() {
            files.push(path);
        }
    }
    // Sort for deterministic output
    files.sort();
    Ok(files)
}
