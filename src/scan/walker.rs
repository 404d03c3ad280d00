use crate::analyze::analyze_source;
use crate::config::ScanConfig;
use crate::error::{Error, Result};
use crate::types::FileRecord;
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::filter::should_include_file;

/// Lazy sequence of [`FileRecord`]s, one per qualifying file under a root.
///
/// Directory entries are visited sorted by file name, so the order is the
/// same on every platform. Each file is read only when the iterator reaches it.
pub struct SourceScanner {
    root: PathBuf,
    paths: Box<dyn Iterator<Item = Result<PathBuf>>>,
}

impl Iterator for SourceScanner {
    type Item = Result<FileRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = match self.paths.next()? {
            Ok(path) => path,
            Err(e) => return Some(Err(e)),
        };
        Some(scan_file(&self.root, &path))
    }
}

pub fn scan_directory(root: &Path, config: &ScanConfig) -> SourceScanner {
    let extensions = config.normalized_extensions();
    tracing::info!(
        root = %root.display(),
        extensions = ?extensions,
        gitignore = config.respect_gitignore,
        "scanning source tree"
    );

    let paths: Box<dyn Iterator<Item = Result<PathBuf>>> = if config.respect_gitignore {
        Box::new(walk_with_gitignore(root, extensions))
    } else {
        Box::new(walk_all(root, extensions))
    };

    SourceScanner {
        root: root.to_path_buf(),
        paths,
    }
}

fn walk_all(root: &Path, extensions: Vec<String>) -> impl Iterator<Item = Result<PathBuf>> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) => {
                let include = entry.file_type().is_file()
                    && should_include_file(entry.path(), &extensions);
                include.then(|| Ok(entry.into_path()))
            }
            Err(e) => Some(Err(Error::from(e))),
        })
}

fn walk_with_gitignore(
    root: &Path,
    extensions: Vec<String>,
) -> impl Iterator<Item = Result<PathBuf>> {
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(false)
        .ignore(false)
        .git_global(false)
        .git_ignore(true)
        .git_exclude(true)
        .require_git(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    builder.build().filter_map(move |entry| match entry {
        Ok(entry) => {
            let is_file = entry.file_type().is_some_and(|t| t.is_file());
            let include = is_file && should_include_file(entry.path(), &extensions);
            include.then(|| Ok(entry.into_path()))
        }
        Err(e) => Some(Err(Error::from(e))),
    })
}

/// Read one file as UTF-8 and extract its record. Binary or non-UTF-8 content
/// is an error rather than a source of garbage matches.
pub fn scan_file(root: &Path, path: &Path) -> Result<FileRecord> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let relative = relative_path(root, path);
    let record = analyze_source(relative, &content);

    tracing::debug!(
        file = %record.path,
        types = record.declared_types.len(),
        imports = record.imports.len(),
        "scanned file"
    );

    Ok(record)
}

/// `/`-separated path of `path` relative to `root`.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        // root is the file itself
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        joined
    }
}
