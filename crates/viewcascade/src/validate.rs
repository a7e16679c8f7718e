//! Candidate path validation.
//!
//! Takes one logical base path (`/Views/Render/Models/Widget`), expands it
//! through every filename pattern of the active conventions and asks the
//! store about each expansion. One `PathResult` per pattern, in pattern order.

use crate::config::ViewConventions;
use crate::error::{Error, Result};
use crate::result::PathResult;
use crate::store::TemplateStore;

#[derive(Debug, Clone)]
pub struct PathValidation {
    results: Vec<PathResult>,
}

impl PathValidation {
    /// Check `base_path` against every pattern in `conventions`.
    ///
    /// `base_path` may already carry the template suffix or the root marker;
    /// both are stripped before substitution so `~/Views/Edit.cshtml` and
    /// `/Views/Edit` check the same files. A store failure aborts the check.
    pub fn check(
        base_path:   &str,
        store:       &dyn TemplateStore,
        conventions: &ViewConventions,
    ) -> Result<Self> {
        let normalized = normalize(base_path, conventions);
        let mut results = Vec::with_capacity(conventions.patterns.len());

        for pattern in &conventions.patterns {
            let candidate = pattern.apply(&normalized);
            let exists = store
                .exists(&candidate)
                .map_err(|source| Error::Store { path: candidate.clone(), source })?;
            tracing::trace!(path = %candidate, exists, "checked candidate");
            results.push(PathResult::new(candidate, exists));
        }

        Ok(Self { results })
    }

    pub fn results(&self) -> &[PathResult] { &self.results }

    pub fn into_results(self) -> Vec<PathResult> { self.results }

    pub fn found_path(&self) -> bool {
        self.results.iter().any(PathResult::exists)
    }

    pub fn first_existing(&self) -> Option<&PathResult> {
        self.results.iter().find(|r| r.exists())
    }

    /// The first existing path, or `NoTemplateFound` listing everything checked.
    pub fn require(&self) -> Result<&str> {
        self.first_existing()
            .map(PathResult::path)
            .ok_or_else(|| Error::NoTemplateFound {
                checked: self.results.iter().map(|r| r.path().to_string()).collect(),
            })
    }
}

fn normalize(base_path: &str, conventions: &ViewConventions) -> String {
    let suffix = conventions.template_suffix.as_str();
    let mut path = match base_path.strip_suffix(suffix) {
        Some(stripped) if !suffix.is_empty() => stripped,
        _ => base_path,
    };
    if let Some(marker) = conventions.root_marker {
        path = path.strip_prefix(marker).unwrap_or(path);
    }
    if conventions.lowercase { path.to_lowercase() } else { path.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::store::MemoryStore;

    fn layered() -> ViewConventions {
        ViewConventions::default()
            .with_patterns(["~{0}.Client.cshtml", "~{0}.cshtml", "~{0}.Default.cshtml"])
            .unwrap()
    }

    #[test]
    fn default_pattern_adds_marker_and_suffix() {
        let store = MemoryStore::new().with("~/Views/Edit/Models/Widget.cshtml");
        let v = PathValidation::check("/Views/Edit/Models/Widget", &store, &ViewConventions::default()).unwrap();
        assert_eq!(v.results().len(), 1);
        assert_eq!(v.require().unwrap(), "~/Views/Edit/Models/Widget.cshtml");
    }

    #[test]
    fn suffix_and_marker_normalize_identically() {
        let store = MemoryStore::new();
        let conv = ViewConventions::default();
        let bare = PathValidation::check("/Views/Edit", &store, &conv).unwrap();
        let full = PathValidation::check("~/Views/Edit.cshtml", &store, &conv).unwrap();
        assert_eq!(bare.results(), full.results());
    }

    #[test]
    fn only_one_root_marker_is_stripped() {
        let store = MemoryStore::new();
        let v = PathValidation::check("~~/x", &store, &ViewConventions::default()).unwrap();
        assert_eq!(v.results()[0].path(), "~~/x.cshtml");
    }

    #[test]
    fn patterns_checked_in_order() {
        let store = MemoryStore::new()
            .with("~/V/Widget.cshtml")
            .with("~/V/Widget.Default.cshtml");
        let v = PathValidation::check("/V/Widget", &store, &layered()).unwrap();
        let paths: Vec<_> = v.results().iter().map(|r| (r.path(), r.exists())).collect();
        assert_eq!(paths, vec![
            ("~/V/Widget.Client.cshtml", false),
            ("~/V/Widget.cshtml", true),
            ("~/V/Widget.Default.cshtml", true),
        ]);
        assert_eq!(v.first_existing().map(PathResult::path), Some("~/V/Widget.cshtml"));
    }

    #[test]
    fn require_lists_every_checked_path() {
        let v = PathValidation::check("/V/Widget", &MemoryStore::new(), &layered()).unwrap();
        assert!(!v.found_path());
        let err = v.require().unwrap_err();
        assert_eq!(err.code(), ErrorCode::M002);
        assert_eq!(err.checked_paths().len(), 3);
    }

    #[test]
    fn lowercase_convention() {
        let conv = ViewConventions::new(".tmpl", None).lowercased();
        let store = MemoryStore::new().with("/views/models/widget.tmpl");
        let v = PathValidation::check("/views/Models/Widget", &store, &conv).unwrap();
        assert!(v.found_path());
    }

    struct Broken;

    impl TemplateStore for Broken {
        fn exists(&self, _: &str) -> std::io::Result<bool> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn store_failure_propagates_with_path() {
        let err = PathValidation::check("/V/Widget", &Broken, &ViewConventions::default()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::X001);
        assert!(err.to_string().contains("~/V/Widget.cshtml"));
    }
}
