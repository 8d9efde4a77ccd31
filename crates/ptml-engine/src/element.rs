//! Element descriptions handed to [`Builder::add`](crate::Builder::add).
//!
//! An [`Element`] carries everything a node needs at construction time: its
//! tag (or comment marker), inline content, instance attributes, and the
//! default attributes of the kind it was created from.

use std::borrow::Cow;

use crate::attributes::{AttrValue, Attributes, CLASS, ID};
use crate::error::ElementError;
use crate::node::NodeKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    kind: NodeKind,
    content: Option<String>,
    attributes: Attributes,
    defaults: Attributes,
}

impl Element {
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: NodeKind::Element { tag: tag.into() },
            content: None,
            attributes: Attributes::new(),
            defaults: Attributes::new(),
        }
    }

    /// A comment node. Its text is written raw between `<!--` and `-->`.
    pub fn comment(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Comment,
            content: Some(text.into()),
            attributes: Attributes::new(),
            defaults: Attributes::new(),
        }
    }

    /// A heading whose tag is computed from `level` (`2` gives `h2`).
    pub fn heading(level: u8) -> Result<Self, ElementError> {
        if !(1..=6).contains(&level) {
            return Err(ElementError::HeadingLevel(level));
        }
        Ok(Self::new(format!("h{level}")))
    }

    pub fn content(mut self, text: impl Into<String>) -> Self {
        self.content = Some(text.into());
        self
    }

    pub fn id(self, id: impl Into<AttrValue>) -> Self {
        self.attr(ID, id)
    }

    pub fn class(self, class: impl Into<AttrValue>) -> Self {
        self.attr(CLASS, class)
    }

    /// Set any attribute. `cls` is accepted as an alias for `class`.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(key, value);
        self
    }

    pub fn attrs<K, V>(mut self, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        for (key, value) in attrs {
            self.attributes.set(key, value);
        }
        self
    }

    /// Defaults sit underneath the instance attributes; see [`Attributes::overlay`].
    pub fn with_defaults(mut self, defaults: Attributes) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { tag } => Some(tag.as_ref()),
            NodeKind::Comment => None,
        }
    }

    pub(crate) fn resolve(self) -> (NodeKind, Option<String>, Attributes) {
        let attributes = self.defaults.overlay(self.attributes);
        (self.kind, self.content, attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_heading_computes_tag() {
        assert_eq!(Element::heading(2).unwrap(), Element::new("h2"));
        assert_eq!(Element::heading(6).unwrap().tag(), Some("h6"));
    }

    #[test]
    fn test_heading_rejects_out_of_range_levels() {
        assert_eq!(Element::heading(0), Err(ElementError::HeadingLevel(0)));
        assert_eq!(Element::heading(7), Err(ElementError::HeadingLevel(7)));
    }

    #[test]
    fn test_resolve_prefers_instance_attributes() {
        let defaults: Attributes = [("class", "row")].into_iter().collect();
        let element = Element::new("div")
            .with_defaults(defaults)
            .class("row special");

        let (_, _, attributes) = element.resolve();
        assert_eq!(attributes.class(), Some(&AttrValue::from("row special")));
    }

    #[test]
    fn test_cls_alias_via_attr() {
        let element = Element::new("span").attr("cls", "sr-only");
        let (_, _, attributes) = element.resolve();
        assert_eq!(attributes.class(), Some(&AttrValue::from("sr-only")));
    }

    #[test]
    fn test_comment_has_no_tag() {
        let comment = Element::comment("note");
        assert_eq!(comment.tag(), None);
        let (kind, content, _) = comment.resolve();
        assert_eq!(kind, NodeKind::Comment);
        assert_eq!(content.as_deref(), Some("note"));
    }
}
