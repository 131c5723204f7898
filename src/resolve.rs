//! Input/output path resolution.
//!
//! Turns the user-supplied input argument and output root into an absolute
//! input file path plus the output base directory, which is named after the
//! input file (everything before the first `.`).

use anyhow::Context;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub input: PathBuf,
    pub output_base: PathBuf,
}

/// Resolve against the process working directory.
///
/// `out_root` of `None` means "the working directory".
pub fn resolve_paths(input: &Path, out_root: Option<&Path>) -> anyhow::Result<ResolvedPaths> {
    let cwd = env::current_dir().context("resolve current working directory")?;
    Ok(resolve_paths_from(&cwd, input, out_root))
}

/// Same as [`resolve_paths`] but with an explicit working directory.
pub fn resolve_paths_from(cwd: &Path, input: &Path, out_root: Option<&Path>) -> ResolvedPaths {
    let input = absolutize(cwd, input);
    let out_root = match out_root {
        Some(root) => absolutize(cwd, root),
        None => cwd.to_path_buf(),
    };
    let output_base = out_root.join(base_name(&input));

    ResolvedPaths { input, output_base }
}

/// Final path segment truncated at the first `.`: `report.v1.yaml` => `report`.
pub fn base_name(path: &Path) -> String {
    let file = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => file,
    }
}

fn absolutize(cwd: &Path, p: &Path) -> PathBuf {
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        cwd.join(p)
    }
}
