//! Logical identifier → base path.
//!
//! `App.Models.Widget` under root `App` and base `/Views/Render/` becomes
//! `/Views/Render/Models/Widget`. Type names and raw names must live under
//! the root namespace; a mismatch means the root is misconfigured and fails
//! the whole call. Attribute values are copied as-is. Collection prefixes and
//! the catch-all namespace lose the root when they fall under it and are kept
//! whole otherwise.

use crate::config::ResolverConfig;
use crate::error::{Error, Result};

use super::order::{CATCHALL, CascadeKey};
use super::shape::Prefix;

pub fn base_path(key: &CascadeKey<'_>, config: &ResolverConfig) -> Result<String> {
    let root = config.root();

    let dotted = match *key {
        CascadeKey::Name(name) => strip_strict(name, root, key)?.to_string(),
        CascadeKey::Type { prefix, name } => {
            format!("{}{}", rooted(prefix, root), strip_strict(name, root, key)?)
        }
        CascadeKey::Attribute { prefix, value } => format!("{}@{value}", rooted(prefix, root)),
        CascadeKey::Catchall { namespace, prefix } => match strip_lenient(namespace, root) {
            "" => format!("{}{CATCHALL}", rooted(prefix, root)),
            ns => format!("{ns}.{}{CATCHALL}", rooted(prefix, root)),
        },
    };

    Ok(format!("{}{}", config.base_path, dotted.replace('.', "/")))
}

fn strip_strict<'n>(name: &'n str, root: Option<&str>, key: &CascadeKey<'_>) -> Result<&'n str> {
    let Some(root) = root else { return Ok(name) };
    name.strip_prefix(root)
        .and_then(|rest| rest.strip_prefix('.'))
        .ok_or_else(|| Error::Configuration { identifier: key.to_string(), root: root.to_string() })
}

/// Collection prefix with the root dropped from its namespace.
fn rooted<'p>(prefix: Prefix<'p>, root: Option<&str>) -> Prefix<'p> {
    match prefix {
        Prefix::Collection { namespace, name } => {
            Prefix::Collection { namespace: strip_lenient(namespace, root), name }
        }
        other => other,
    }
}

fn strip_lenient<'n>(namespace: &'n str, root: Option<&str>) -> &'n str {
    let Some(root) = root else { return namespace };
    if namespace == root {
        return "";
    }
    namespace
        .strip_prefix(root)
        .and_then(|rest| rest.strip_prefix('.'))
        .unwrap_or(namespace)
}
