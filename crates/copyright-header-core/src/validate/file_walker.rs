//! Repository file walking for validation runs.
//!
//! This module provides a configurable file walker that lists the source files
//! a run should check.

use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::Path;

/// Configuration for file walking behavior.
#[derive(Debug, Clone, Default)]
pub struct FileWalkerConfig {
    /// Whether to include hidden files and directories (starting with `.`).
    /// Default: false
    pub include_hidden: bool,
    /// Whether to respect `.gitignore` rules.
    /// Default: false
    pub respect_gitignore: bool,
    /// File extensions (without the dot) to keep. Empty keeps every file.
    pub extensions: Vec<String>,
}

impl FileWalkerConfig {
    /// Creates a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to include hidden files.
    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Sets whether to respect .gitignore rules.
    pub fn with_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }

    /// Restricts the walk to files with one of the given extensions.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        self
    }

    /// Returns true if `path` has one of the configured extensions.
    pub fn matches_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|wanted| *wanted == ext)
            })
    }
}

/// Lists the files in a repository that match `config`.
///
/// Returns paths relative to `repo_path` with forward slashes, sorted.
pub fn list_files(repo_path: &Path, config: &FileWalkerConfig) -> Vec<String> {
    debug!(
        "Listing files in {:?} (hidden={}, gitignore={}, extensions={:?})",
        repo_path, config.include_hidden, config.respect_gitignore, config.extensions
    );

    let mut files = Vec::new();

    let walker = WalkBuilder::new(repo_path)
        .hidden(!config.include_hidden) // hidden(true) = skip hidden files
        .ignore(false)
        .git_ignore(config.respect_gitignore)
        .git_global(config.respect_gitignore)
        .git_exclude(config.respect_gitignore)
        .require_git(false)
        .follow_links(false)
        .build();

    for entry in walker.filter_map(|e| e.ok()) {
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        if !config.matches_extension(entry.path()) {
            continue;
        }

        if let Ok(relative) = entry.path().strip_prefix(repo_path)
            && let Some(path_str) = relative.to_str()
        {
            // Normalize to forward slashes
            files.push(path_str.replace('\\', "/"));
        }
    }

    files.sort();
    debug!("Found {} files", files.len());
    trace!("Files: {:?}", files);
    files
}
