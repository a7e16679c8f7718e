//! Hand-built descriptors.
//!
//! Base and element types are shared through `Arc`, so one ancestor can sit
//! under any number of derived types and collections.

use std::sync::Arc;

use super::{CoreKind, MarkerAttribute, PropertyInfo, TypeInfo};

// ─── TypeDesc ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct TypeDesc {
    pub namespace:  String,
    pub name:       String,
    pub full_name:  String,
    pub core_kind:  CoreKind,
    pub is_array:   bool,
    pub element:    Option<Arc<TypeDesc>>,
    pub base:       Option<Arc<TypeDesc>>,
    pub attributes: Vec<MarkerAttribute>,
}

impl TypeDesc {
    /// An ordinary type. The full name is `{namespace}.{name}`.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let name = name.into();
        Self {
            full_name: qualify(&namespace, &name),
            namespace,
            name,
            core_kind: CoreKind::Ordinary,
            is_array: false,
            element: None,
            base: None,
            attributes: Vec::new(),
        }
    }

    /// `T[]`, living in the element's namespace.
    pub fn array_of(element: Arc<TypeDesc>) -> Self {
        let name = format!("{}[]", element.name);
        Self {
            full_name: format!("{}[]", element.full_name),
            namespace: element.namespace.clone(),
            name,
            core_kind: CoreKind::Collection,
            is_array: true,
            element: Some(element),
            base: None,
            attributes: Vec::new(),
        }
    }

    /// A generic collection such as `System.Collections.Generic` / `List`1`.
    pub fn collection(
        namespace: impl Into<String>,
        name: impl Into<String>,
        element: Arc<TypeDesc>,
    ) -> Self {
        let mut desc = Self::new(namespace, name);
        desc.full_name = format!("{}[[{}]]", desc.full_name, element.full_name);
        desc.core_kind = CoreKind::Collection;
        desc.element = Some(element);
        desc
    }

    pub fn with_base(mut self, base: Arc<TypeDesc>) -> Self {
        self.base = Some(base);
        self
    }

    pub fn with_attribute(mut self, value: impl Into<String>) -> Self {
        self.attributes.push(MarkerAttribute::new(value));
        self
    }

    pub fn with_inherited_attribute(mut self, value: impl Into<String>) -> Self {
        self.attributes.push(MarkerAttribute::inherited(value));
        self
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn shared(self) -> Arc<Self> { Arc::new(self) }
}

impl TypeInfo for TypeDesc {
    fn full_name(&self) -> &str { &self.full_name }
    fn namespace(&self) -> &str { &self.namespace }
    fn name(&self) -> &str { &self.name }
    fn core_kind(&self) -> CoreKind { self.core_kind }
    fn is_array(&self) -> bool { self.is_array }

    fn element_type(&self) -> Option<&dyn TypeInfo> {
        self.element.as_deref().map(|t| t as &dyn TypeInfo)
    }

    fn base_type(&self) -> Option<&dyn TypeInfo> {
        self.base.as_deref().map(|t| t as &dyn TypeInfo)
    }

    fn attributes(&self) -> &[MarkerAttribute] { &self.attributes }
}

fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() { name.to_string() } else { format!("{namespace}.{name}") }
}

// ─── PropertyDesc ─────────────────────────────────────────────────────────────

/// The property through which an object is reached, e.g. `Order.Lines`.
#[derive(Debug, Clone)]
pub struct PropertyDesc {
    pub name:       String,
    pub ty:         Arc<TypeDesc>,
    pub attributes: Vec<MarkerAttribute>,
}

impl PropertyDesc {
    pub fn new(name: impl Into<String>, ty: Arc<TypeDesc>) -> Self {
        Self { name: name.into(), ty, attributes: Vec::new() }
    }

    pub fn with_attribute(mut self, value: impl Into<String>) -> Self {
        self.attributes.push(MarkerAttribute::new(value));
        self
    }

    pub fn with_inherited_attribute(mut self, value: impl Into<String>) -> Self {
        self.attributes.push(MarkerAttribute::inherited(value));
        self
    }
}

impl PropertyInfo for PropertyDesc {
    fn name(&self) -> &str { &self.name }
    fn property_type(&self) -> &dyn TypeInfo { self.ty.as_ref() }
    fn attributes(&self) -> &[MarkerAttribute] { &self.attributes }
}
