//! Resolution configuration.
//!
//! Everything a resolution needs besides its target and store lives here,
//! including the root namespace, which is passed explicitly with every call
//! rather than read from a global. Configs deserialize from TOML (or any
//! serde format); every field has a default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ─── Presets ──────────────────────────────────────────────────────────────────

pub const EDIT_BASE: &str = "/Areas/Admin/Views/Edit/";
pub const RENDER_BASE: &str = "/Views/Render/";
pub const ADMIN_RENDER_BASE: &str = "/Areas/Admin/Views/Render/";

pub const DEFAULT_DYNAMIC_VIEW: &str = "Edit";
pub const DEFAULT_TEMPLATE_SUFFIX: &str = ".cshtml";
pub const DEFAULT_ROOT_MARKER: char = '~';

// ─── PathPattern ──────────────────────────────────────────────────────────────

/// A physical naming convention: a format template with exactly one `{0}`
/// placeholder for the normalized view path, e.g. `~{0}.cshtml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathPattern(String);

impl PathPattern {
    pub const PLACEHOLDER: &'static str = "{0}";

    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        match pattern.matches(Self::PLACEHOLDER).count() {
            1 => Ok(Self(pattern)),
            0 => Err(Error::InvalidPattern { pattern, reason: "missing `{0}` placeholder" }),
            _ => Err(Error::InvalidPattern { pattern, reason: "more than one `{0}` placeholder" }),
        }
    }

    /// `~{0}.cshtml` style: root marker, path, suffix.
    pub fn standard(root_marker: Option<char>, suffix: &str) -> Self {
        let marker = root_marker.map(String::from).unwrap_or_default();
        Self(format!("{marker}{}{suffix}", Self::PLACEHOLDER))
    }

    pub fn apply(&self, path: &str) -> String {
        self.0.replacen(Self::PLACEHOLDER, path, 1)
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl TryFrom<String> for PathPattern {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> { Self::new(s) }
}

impl From<PathPattern> for String {
    fn from(p: PathPattern) -> Self { p.0 }
}

// ─── ViewConventions ──────────────────────────────────────────────────────────

/// How logical view paths map onto physical template files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConventions {
    /// Stripped from incoming base paths, re-added by the patterns.
    pub template_suffix: String,
    /// Leading marker stripped from incoming base paths.
    pub root_marker:     Option<char>,
    /// Checked in order for every base path.
    pub patterns:        Vec<PathPattern>,
    /// Lowercase the normalized path before substitution.
    pub lowercase:       bool,
}

impl Default for ViewConventions {
    fn default() -> Self {
        Self {
            template_suffix: DEFAULT_TEMPLATE_SUFFIX.to_string(),
            root_marker:     Some(DEFAULT_ROOT_MARKER),
            patterns:        vec![PathPattern::standard(Some(DEFAULT_ROOT_MARKER), DEFAULT_TEMPLATE_SUFFIX)],
            lowercase:       false,
        }
    }
}

impl ViewConventions {
    /// Conventions for a given suffix and marker with the single standard pattern.
    pub fn new(template_suffix: impl Into<String>, root_marker: Option<char>) -> Self {
        let template_suffix = template_suffix.into();
        let patterns = vec![PathPattern::standard(root_marker, &template_suffix)];
        Self { template_suffix, root_marker, patterns, lowercase: false }
    }

    pub fn with_patterns<I, S>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns = patterns.into_iter().map(PathPattern::new).collect::<Result<_>>()?;
        Ok(self)
    }

    pub fn lowercased(mut self) -> Self {
        self.lowercase = true;
        self
    }
}

// ─── ResolverConfig ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Directory segment every candidate lives under, e.g. `/Views/Render/`.
    pub base_path:         String,
    /// View tried when nothing in the cascade exists.
    pub dynamic_view_name: String,
    /// Try only the leaf type (plus attribute overrides) and the catch-all.
    pub exact_only:        bool,
    /// Try least specific identifiers first.
    pub start_at_bottom:   bool,
    /// Stripped from qualified identifiers before they become paths.
    /// `None` keeps identifiers whole.
    pub root_namespace:    Option<String>,
    pub conventions:       ViewConventions,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_path:         EDIT_BASE.to_string(),
            dynamic_view_name: DEFAULT_DYNAMIC_VIEW.to_string(),
            exact_only:        false,
            start_at_bottom:   false,
            root_namespace:    None,
            conventions:       ViewConventions::default(),
        }
    }
}

impl ResolverConfig {
    pub fn edit() -> Self { Self::default() }

    pub fn render() -> Self { Self::default().with_base_path(RENDER_BASE) }

    pub fn admin_render() -> Self { Self::default().with_base_path(ADMIN_RENDER_BASE) }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_dynamic_view(mut self, name: impl Into<String>) -> Self {
        self.dynamic_view_name = name.into();
        self
    }

    pub fn with_root_namespace(mut self, root: impl Into<String>) -> Self {
        self.root_namespace = Some(root.into());
        self
    }

    pub fn exact_only(mut self, exact_only: bool) -> Self {
        self.exact_only = exact_only;
        self
    }

    pub fn start_at_bottom(mut self, start_at_bottom: bool) -> Self {
        self.start_at_bottom = start_at_bottom;
        self
    }

    pub fn with_conventions(mut self, conventions: ViewConventions) -> Self {
        self.conventions = conventions;
        self
    }

    /// Root namespace, treating an empty string like `None`.
    pub fn root(&self) -> Option<&str> {
        self.root_namespace.as_deref().filter(|r| !r.is_empty())
    }

    // ── Loading ───────────────────────────────────────────────────────────────

    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::ConfigLoad {
            origin:  "inline TOML".to_string(),
            message: e.to_string(),
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let source = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigLoad { origin: origin.clone(), message: e.to_string() })?;
        let config = toml::from_str(&source)
            .map_err(|e| Error::ConfigLoad { origin, message: e.to_string() })?;
        tracing::debug!(path = %path.display(), "loaded resolver config");
        Ok(config)
    }
}
