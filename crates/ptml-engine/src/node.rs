use std::borrow::Cow;
use std::fmt;

use crate::attributes::Attributes;
use crate::element::Element;

/// Handle to a node inside the [`Builder`](crate::Builder) or
/// [`Document`](crate::Document) that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Element { tag: Cow<'static, str> },
    /// Renders `<!-- content -->` verbatim; never a container.
    Comment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Scope {
    None,
    Open,
    Closed(Vec<NodeId>),
}

#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    attributes: Attributes,
    content: Option<String>,
    depth: usize,
    pub(crate) scope: Scope,
}

impl Node {
    /// Resolve an element against its kind defaults and pin it at `depth`.
    pub(crate) fn construct(element: Element, depth: usize) -> Self {
        let (kind, content, attributes) = element.resolve();
        Self {
            kind,
            attributes,
            content,
            depth,
            scope: Scope::None,
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Tag name, or `None` for comments.
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { tag } => Some(tag.as_ref()),
            NodeKind::Comment => None,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub(crate) fn set_content(&mut self, content: String) {
        self.content = Some(content);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.kind, NodeKind::Comment)
    }

    /// True once the node has been used as a scope; selects container
    /// rendering over leaf rendering.
    pub fn is_container(&self) -> bool {
        !matches!(self.scope, Scope::None)
    }

    /// Children collected while this node's scope was open. Empty for leaves
    /// and for scopes that are still open.
    pub fn children(&self) -> &[NodeId] {
        match &self.scope {
            Scope::Closed(children) => children,
            Scope::None | Scope::Open => &[],
        }
    }
}
