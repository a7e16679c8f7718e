//! Type metadata consumed by the cascade.
//!
//! The resolver never inspects runtime values; it only reads descriptors
//! through `TypeInfo` / `PropertyInfo`. Any metadata provider can implement
//! the traits directly. `TypeDesc` and `PropertyDesc` are ready-made
//! implementations for callers that build descriptors by hand.

pub mod desc;

pub use desc::{PropertyDesc, TypeDesc};

// ─── Attributes ───────────────────────────────────────────────────────────────

/// A marker tag whose value names an alternate view to try.
///
/// `inherited` marks copies a provider surfaces from an ancestor type. Those
/// are skipped by the cascade since the base-type walk reaches the ancestor's
/// own copy anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerAttribute {
    pub value:     String,
    pub inherited: bool,
}

impl MarkerAttribute {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), inherited: false }
    }

    pub fn inherited(value: impl Into<String>) -> Self {
        Self { value: value.into(), inherited: true }
    }
}

/// Values of the attributes attached directly (not inherited), in order.
pub fn direct_values(attributes: &[MarkerAttribute]) -> impl Iterator<Item = &str> {
    attributes.iter().filter(|a| !a.inherited).map(|a| a.value.as_str())
}

// ─── Descriptor interfaces ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoreKind {
    #[default]
    Ordinary,
    Collection,
}

pub trait TypeInfo {
    /// Namespace-qualified name, e.g. `App.Models.Widget`.
    fn full_name(&self) -> &str;
    fn namespace(&self) -> &str;
    /// Simple name. Generic collections keep their arity marker (`List`1`).
    fn name(&self) -> &str;
    fn core_kind(&self) -> CoreKind;
    fn is_array(&self) -> bool;
    /// Element type when `core_kind` is `Collection`.
    fn element_type(&self) -> Option<&dyn TypeInfo>;
    /// `None` at the root of the hierarchy.
    fn base_type(&self) -> Option<&dyn TypeInfo>;
    fn attributes(&self) -> &[MarkerAttribute];
}

pub trait PropertyInfo {
    fn name(&self) -> &str;
    fn property_type(&self) -> &dyn TypeInfo;
    fn attributes(&self) -> &[MarkerAttribute];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_values_skip_inherited() {
        let attrs = vec![
            MarkerAttribute::new("Card"),
            MarkerAttribute::inherited("Base"),
            MarkerAttribute::new("Compact"),
        ];
        assert_eq!(direct_values(&attrs).collect::<Vec<_>>(), vec!["Card", "Compact"]);
    }
}
