use std::borrow::Cow;
use std::io::{self, Write};
use std::ops::Index;

use crate::node::{Node, NodeId};
use crate::render::{Fragments, RenderOptions};

/// A finished tree. Every scope in it is closed, so rendering cannot fail.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Document {
    pub(crate) fn new(nodes: Vec<Node>, roots: Vec<NodeId>) -> Self {
        Self { nodes, roots }
    }

    /// Nodes that were added with no scope open, in order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn root(&self) -> Option<NodeId> {
        self.roots.first().copied()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn render(&self, id: NodeId) -> Fragments<'_> {
        Fragments::new(self, id, Cow::Owned(RenderOptions::default()))
    }

    pub fn render_with<'a>(&'a self, id: NodeId, options: &'a RenderOptions) -> Fragments<'a> {
        Fragments::new(self, id, Cow::Borrowed(options))
    }

    pub fn render_to_string(&self, id: NodeId) -> String {
        self.render(id).collect()
    }

    /// Stream every root into `writer`, one line break between roots.
    pub fn write_to<W: Write>(&self, writer: &mut W, options: &RenderOptions) -> io::Result<()> {
        for (index, &root) in self.roots.iter().enumerate() {
            if index > 0 {
                writer.write_all(b"\n")?;
            }
            for fragment in self.render_with(root, options) {
                writer.write_all(fragment.as_bytes())?;
            }
        }
        if options.trailing_newline && !self.roots.is_empty() {
            writer.write_all(b"\n")?;
        }
        Ok(())
    }
}

/// # Panics
///
/// Panics if `id` was not issued by the builder that produced this document.
/// Use [`Document::node`] for ids of unknown origin.
impl Index<NodeId> for Document {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}
