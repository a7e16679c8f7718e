//! Rendering order: the logical identifiers to try, most specific first.
//!
//! For `App.Models.Widget : App.Models.Entity` reached through a property
//! tagged `@Summary`, with `Widget` tagged `@Card`:
//!
//! ```text
//! @Summary
//! App.Models.Widget
//! @Card
//! @Summary
//! App.Models.Entity
//! App.Models.$Object
//! ```
//!
//! Property attributes are repeated ahead of every step of the walk; a
//! type's own attributes follow it. The list is reversed as a whole for
//! `start_at_bottom`, and never reordered afterwards.

use crate::config::ResolverConfig;
use crate::error::Result;
use crate::meta::direct_values;

use super::Target;
use super::shape::{CascadeShape, Prefix};

// ─── CascadeKey ───────────────────────────────────────────────────────────────

/// One entry of the rendering order. `Display` gives the logical identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeKey<'a> {
    /// A caller-supplied name, used verbatim.
    Name(&'a str),
    /// `{prefix}{typeName}` for one step of the base-type walk.
    Type { prefix: Prefix<'a>, name: &'a str },
    /// `{prefix}@{value}` from a marker attribute.
    Attribute { prefix: Prefix<'a>, value: &'a str },
    /// `{namespace}.{prefix}$Object`, the namespace-wide catch-all.
    Catchall { namespace: &'a str, prefix: Prefix<'a> },
}

pub const CATCHALL: &str = "$Object";

impl std::fmt::Display for CascadeKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name)                => f.write_str(name),
            Self::Type { prefix, name }     => write!(f, "{prefix}{name}"),
            Self::Attribute { prefix, value } => write!(f, "{prefix}@{value}"),
            Self::Catchall { namespace, prefix } if namespace.is_empty() => write!(f, "{prefix}{CATCHALL}"),
            Self::Catchall { namespace, prefix } => write!(f, "{namespace}.{prefix}{CATCHALL}"),
        }
    }
}

// ─── Builder ──────────────────────────────────────────────────────────────────

pub fn build<'a>(target: &Target<'a>, config: &ResolverConfig) -> Result<Vec<CascadeKey<'a>>> {
    let (ty, property) = match *target {
        Target::ByName(name) => return Ok(vec![CascadeKey::Name(name)]),
        Target::ByType { ty, property } => (ty, property),
    };

    let shape = CascadeShape::classify(ty)?;
    let prefix = shape.prefix();
    let property_values: Vec<&'a str> = property
        .map(|p| direct_values(p.attributes()).collect())
        .unwrap_or_default();

    let mut keys = Vec::new();
    let mut step = Some(shape.cascade_type());

    while let Some(current) = step {
        keys.extend(property_values.iter().map(|&value| CascadeKey::Attribute { prefix, value }));
        keys.push(CascadeKey::Type { prefix, name: shape.step_name(current) });
        keys.extend(direct_values(current.attributes()).map(|value| CascadeKey::Attribute { prefix, value }));

        step = if config.exact_only { None } else { current.base_type() };
    }

    keys.push(CascadeKey::Catchall { namespace: ty.namespace(), prefix });

    if config.start_at_bottom {
        keys.reverse();
    }
    Ok(keys)
}
