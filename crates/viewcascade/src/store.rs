//! Template stores: the only thing the resolver asks of the file system.
//!
//! A store answers a single question: does a template exist at this path?
//! Stores are read-only and shared across concurrent resolutions, so the
//! trait requires `Send + Sync`. Failures are returned as `io::Error` and
//! surfaced to the caller untouched (wrapped with the path being checked).

use std::collections::HashSet;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

// ─── Interface ────────────────────────────────────────────────────────────────

pub trait TemplateStore: Send + Sync {
    fn exists(&self, path: &str) -> io::Result<bool>;
}

impl<S: TemplateStore + ?Sized> TemplateStore for &S {
    fn exists(&self, path: &str) -> io::Result<bool> { (**self).exists(path) }
}

impl<S: TemplateStore + ?Sized> TemplateStore for Arc<S> {
    fn exists(&self, path: &str) -> io::Result<bool> { (**self).exists(path) }
}

// ─── MemoryStore ──────────────────────────────────────────────────────────────

/// A fixed set of template paths held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    paths: HashSet<String>,
    case_insensitive: bool,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    /// Match paths ignoring ASCII/Unicode case, like a Windows file provider.
    /// Paths already inserted are re-keyed.
    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self.paths = self.paths.drain().map(|p| p.to_lowercase()).collect();
        self
    }

    pub fn insert(&mut self, path: impl Into<String>) {
        let path = self.key(path.into());
        self.paths.insert(path);
    }

    pub fn with(mut self, path: impl Into<String>) -> Self {
        self.insert(path);
        self
    }

    pub fn len(&self) -> usize { self.paths.len() }

    pub fn is_empty(&self) -> bool { self.paths.is_empty() }

    fn key(&self, path: String) -> String {
        if self.case_insensitive { path.to_lowercase() } else { path }
    }
}

impl<S: Into<String>> FromIterator<S> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut store = Self::new();
        for path in iter {
            store.insert(path);
        }
        store
    }
}

impl TemplateStore for MemoryStore {
    fn exists(&self, path: &str) -> io::Result<bool> {
        if self.case_insensitive {
            Ok(self.paths.contains(&path.to_lowercase()))
        } else {
            Ok(self.paths.contains(path))
        }
    }
}

// ─── DirectoryStore ───────────────────────────────────────────────────────────

/// Regular files below a root directory.
///
/// Candidate paths are virtual (`~/Views/Edit.cshtml`): the root marker and
/// leading slashes are dropped and the rest is joined onto `root`. Paths that
/// would climb out of `root` are reported absent.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path { &self.root }

    fn physical(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('~').trim_start_matches(['/', '\\']));
        let mut out = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => out.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        Some(out)
    }
}

impl TemplateStore for DirectoryStore {
    fn exists(&self, path: &str) -> io::Result<bool> {
        let Some(physical) = self.physical(path) else { return Ok(false) };
        match std::fs::metadata(&physical) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
