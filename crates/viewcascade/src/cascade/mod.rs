pub mod shape;
pub mod order;
pub mod path;


use tracing::{debug, instrument};

use crate::config::ResolverConfig;
use crate::error::{Error, Result};
use crate::meta::{PropertyInfo, TypeInfo};
use crate::result::PathResult;
use crate::store::TemplateStore;
use crate::validate::PathValidation;
pub use order::CascadeKey;
pub use shape::{CascadeShape, Prefix};

// ─── Target ───────────────────────────────────────────────────────────────────

/// What to find a view for.
#[derive(Clone, Copy)]
pub enum Target<'a> {
    /// A described type, optionally reached through a property whose
    /// attributes are tried ahead of the type's own name.
    ByType { ty: &'a dyn TypeInfo, property: Option<&'a dyn PropertyInfo> },
    /// A bare type name. Tried verbatim, with no cascade.
    ByName(&'a str),
}

impl<'a> Target<'a> {
    pub fn of_type(ty: &'a dyn TypeInfo) -> Self {
        Self::ByType { ty, property: None }
    }

    /// The property's own type, with the property's attributes.
    pub fn of_property(property: &'a dyn PropertyInfo) -> Self {
        Self::ByType { ty: property.property_type(), property: Some(property) }
    }

    /// An override type still reached through `property`.
    pub fn with_property(ty: &'a dyn TypeInfo, property: &'a dyn PropertyInfo) -> Self {
        Self::ByType { ty, property: Some(property) }
    }

    pub fn by_name(name: &'a str) -> Self {
        Self::ByName(name)
    }
}

impl std::fmt::Display for Target<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ByType { ty, property: Some(p) } => write!(f, "{} via {}", ty.full_name(), p.name()),
            Self::ByType { ty, property: None } => f.write_str(ty.full_name()),
            Self::ByName(name) => write!(f, "name `{name}`"),
        }
    }
}

impl std::fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Target({self})")
    }
}

// ─── Resolution ───────────────────────────────────────────────────────────────

/// Every candidate checked for one target, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    rendering_order: Vec<String>,
    results:         Vec<PathResult>,
    is_dynamic:      bool,
}

impl Resolution {
    /// Logical identifiers tried, before the dynamic fallback.
    pub fn rendering_order(&self) -> &[String] { &self.rendering_order }

    pub fn results(&self) -> &[PathResult] { &self.results }

    /// True when nothing in the cascade existed and the dynamic view was checked.
    pub fn is_dynamic(&self) -> bool { self.is_dynamic }

    pub fn has_match(&self) -> bool {
        self.results.iter().any(PathResult::exists)
    }

    pub fn first_match(&self) -> Option<&PathResult> {
        self.results.iter().find(|r| r.exists())
    }

    pub fn existing(&self) -> impl Iterator<Item = &PathResult> {
        self.results.iter().filter(|r| r.exists())
    }

    /// Highest priority existing path, or `NoMatch` listing every checked path.
    pub fn matched_path(&self) -> Result<&str> {
        self.first_match()
            .map(PathResult::path)
            .ok_or_else(|| Error::NoMatch {
                checked: self.results.iter().map(|r| r.path().to_string()).collect(),
            })
    }
}

// ─── Resolver ─────────────────────────────────────────────────────────────────

/// Resolution pipeline:
/// 1. Rendering order: cascade identifiers for the target
/// 2. Base paths: every identifier converted (all or nothing)
/// 3. Validation: each base path checked against the store, in order
/// 4. Fallback: the dynamic view, only if nothing existed
///
/// Holds no state between calls; one resolver can serve any number of
/// threads if its store can.
pub struct Resolver<'c, S> {
    config: &'c ResolverConfig,
    store:  S,
}

impl<'c, S: TemplateStore> Resolver<'c, S> {
    pub fn new(config: &'c ResolverConfig, store: S) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ResolverConfig { self.config }

    #[instrument(skip_all, fields(target = %target))]
    pub fn resolve(&self, target: Target<'_>) -> Result<Resolution> {
        let keys = order::build(&target, self.config)?;
        let base_paths = keys
            .iter()
            .map(|key| path::base_path(key, self.config))
            .collect::<Result<Vec<_>>>()?;
        debug!(identifiers = keys.len(), "built rendering order");

        let mut results = Vec::new();
        for base in &base_paths {
            results.extend(self.check(base)?);
        }

        let mut is_dynamic = false;
        if !results.iter().any(PathResult::exists) {
            is_dynamic = true;
            let fallback = format!("{}{}", self.config.base_path, self.config.dynamic_view_name);
            debug!(path = %fallback, "no cascade match, checking dynamic view");
            results.extend(self.check(&fallback)?);
        }

        Ok(Resolution {
            rendering_order: keys.iter().map(ToString::to_string).collect(),
            results,
            is_dynamic,
        })
    }

    fn check(&self, base_path: &str) -> Result<Vec<PathResult>> {
        PathValidation::check(base_path, &self.store, &self.config.conventions)
            .map(PathValidation::into_results)
    }
}

/// Logical identifiers for `target`, without touching any store.
pub fn rendering_order(target: Target<'_>, config: &ResolverConfig) -> Result<Vec<String>> {
    Ok(order::build(&target, config)?.iter().map(ToString::to_string).collect())
}
