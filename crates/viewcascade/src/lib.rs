//! View template selection by type cascade.
//!
//! Given a type (and optionally the property that led to it), builds the
//! ordered list of view identifiers to try, walking the type's ancestors and
//! marker attributes, then asks a `TemplateStore` which candidates exist.
//! The first existing candidate wins; if none exists, a configured dynamic
//! view is checked last.

pub mod cascade;
pub mod config;
pub mod error;
pub mod meta;
pub mod result;
pub mod store;
pub mod validate;

pub use cascade::{Resolution, Resolver, Target, rendering_order};
pub use config::{PathPattern, ResolverConfig, ViewConventions};
pub use error::{Error, ErrorCode, Result};
pub use meta::{CoreKind, MarkerAttribute, PropertyDesc, PropertyInfo, TypeDesc, TypeInfo};
pub use result::PathResult;
pub use store::{DirectoryStore, MemoryStore, TemplateStore};
pub use validate::PathValidation;

// ─── Public API ───────────────────────────────────────────────────────────────

/// Resolve `target` once against `store`.
pub fn resolve(
    target: Target<'_>,
    config: &ResolverConfig,
    store:  &dyn TemplateStore,
) -> Result<Resolution> {
    Resolver::new(config, store).resolve(target)
}
