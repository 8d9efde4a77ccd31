//! Named tag kinds with preset attributes.
//!
//! A [`Kind`] binds a tag to a set of default attributes, e.g. a `row` kind
//! that renders as `<div class="row">`. Instance attributes replace defaults
//! key by key when the element is added to a builder.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::attributes::{AttrValue, Attributes, CLASS};
use crate::element::Element;
use crate::error::ElementError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kind {
    name: String,
    tag: Cow<'static, str>,
    defaults: Attributes,
}

impl Kind {
    pub fn new(name: impl Into<String>, tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            defaults: Attributes::new(),
        }
    }

    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.defaults.set(key, value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn defaults(&self) -> &Attributes {
        &self.defaults
    }

    pub fn element(&self) -> Element {
        Element::new(self.tag.clone()).with_defaults(self.defaults.clone())
    }
}

/// Kinds keyed by name.
#[derive(Debug, Clone, Default)]
pub struct KindTable {
    kinds: BTreeMap<String, Kind>,
}

impl KindTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The layout presets used by the bundled Bootstrap demo page.
    pub fn bootstrap() -> Self {
        let mut table = Self::new();
        table.register(Kind::new("container", "div").with_default(CLASS, ["container", "example"]));
        table.register(Kind::new("row", "div").with_default(CLASS, "row"));
        table.register(Kind::new("col-md-4", "div").with_default(CLASS, "col-md-4"));
        table
    }

    /// Add a kind, returning the one it replaced.
    pub fn register(&mut self, kind: Kind) -> Option<Kind> {
        self.kinds.insert(kind.name.clone(), kind)
    }

    pub fn get(&self, name: &str) -> Option<&Kind> {
        self.kinds.get(name)
    }

    pub fn element(&self, name: &str) -> Result<Element, ElementError> {
        self.get(name)
            .map(Kind::element)
            .ok_or_else(|| ElementError::UnknownKind(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
