//! Shape classification, decided once before the cascade walk.
//!
//! Collections cascade over their element type; what remains of the
//! collection is a prefix that keeps `Widget[]`, `List<Widget>` and `Widget`
//! from landing on the same view.

use crate::error::{Error, Result};
use crate::meta::{CoreKind, TypeInfo};

// ─── Prefix ───────────────────────────────────────────────────────────────────

/// Leading identifier segment for every cascade entry of one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix<'a> {
    None,
    /// `Array.`
    Array,
    /// `{namespace}.{name}.` of the collection type itself, arity marker removed.
    Collection { namespace: &'a str, name: &'a str },
}

impl std::fmt::Display for Prefix<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Array => f.write_str("Array."),
            Self::Collection { namespace, name } if namespace.is_empty() => write!(f, "{name}."),
            Self::Collection { namespace, name } => write!(f, "{namespace}.{name}."),
        }
    }
}

// ─── CascadeShape ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
pub enum CascadeShape<'a> {
    Ordinary(&'a dyn TypeInfo),
    Array { element: &'a dyn TypeInfo },
    Collection { element: &'a dyn TypeInfo, namespace: &'a str, name: &'a str },
}

impl<'a> CascadeShape<'a> {
    pub fn classify(ty: &'a dyn TypeInfo) -> Result<Self> {
        if ty.core_kind() == CoreKind::Ordinary {
            return Ok(Self::Ordinary(ty));
        }

        let Some(element) = ty.element_type() else {
            return Err(malformed(ty, "collection has no element type"));
        };

        if ty.is_array() {
            return Ok(Self::Array { element });
        }

        let name = generic_name(ty.name());
        if name.is_empty() {
            return Err(malformed(ty, "collection name is empty"));
        }
        Ok(Self::Collection { element, namespace: ty.namespace(), name })
    }

    /// First type of the base-type walk.
    pub fn cascade_type(&self) -> &'a dyn TypeInfo {
        match *self {
            Self::Ordinary(ty) => ty,
            Self::Array { element } | Self::Collection { element, .. } => element,
        }
    }

    pub fn prefix(&self) -> Prefix<'a> {
        match *self {
            Self::Ordinary(_) => Prefix::None,
            Self::Array { .. } => Prefix::Array,
            Self::Collection { namespace, name, .. } => Prefix::Collection { namespace, name },
        }
    }

    /// Identifier body for one step of the walk. Array steps drop any
    /// trailing array markers (`Widget[][]` → `Widget`).
    pub fn step_name(&self, step: &'a dyn TypeInfo) -> &'a str {
        let full = step.full_name();
        match self {
            Self::Array { .. } => full.split('[').next().unwrap_or(full),
            _ => full,
        }
    }
}

/// `List`1` → `List`.
fn generic_name(name: &str) -> &str {
    name.split('`').next().unwrap_or(name)
}

fn malformed(ty: &dyn TypeInfo, reason: &'static str) -> Error {
    Error::MalformedType { type_name: ty.full_name().to_string(), reason }
}
