//! Tree construction through scopes.
//!
//! Every element added to a [`Builder`] becomes a child of the innermost open
//! scope (or a root when none is open). A node becomes a scope with
//! [`Builder::enter`], which hands back a [`ScopeGuard`]; dropping the guard
//! closes the scope on every early return, and on panics when unwinding is
//! enabled.

use std::ops::{Deref, DerefMut};

use crate::document::Document;
use crate::element::Element;
use crate::error::SequenceError;
use crate::frame::FrameStack;
use crate::node::{Node, NodeId, Scope};

#[derive(Debug, Default)]
pub struct Builder {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    frames: FrameStack,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a node and attach it to the current scope.
    pub fn add(&mut self, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = self.frames.current_depth();
        self.nodes.push(Node::construct(element, depth));
        if !self.frames.append(id) {
            self.roots.push(id);
        }
        id
    }

    /// Add `element`, open it as a scope, run `body` inside it, then close it.
    ///
    /// The scope is closed even if `body` fails; the failure is returned
    /// unchanged afterwards.
    pub fn scope<F>(&mut self, element: Element, body: F) -> Result<NodeId, SequenceError>
    where
        F: FnOnce(&mut Builder) -> Result<(), SequenceError>,
    {
        self.try_scope(element, body)
    }

    /// Like [`Builder::scope`], for bodies with their own error type.
    pub fn try_scope<E, F>(&mut self, element: Element, body: F) -> Result<NodeId, E>
    where
        E: From<SequenceError>,
        F: FnOnce(&mut Builder) -> Result<(), E>,
    {
        let id = self.add(element);
        let mut guard = self.enter(id)?;
        body(&mut *guard)?;
        Ok(guard.exit()?)
    }

    /// Open `id` as a scope. The node must belong to the current scope and
    /// must not have been opened before.
    pub fn enter(&mut self, id: NodeId) -> Result<ScopeGuard<'_>, SequenceError> {
        self.open_scope(id)?;
        Ok(ScopeGuard {
            builder: self,
            owner: id,
            closed: false,
        })
    }

    /// Unguarded scope entry. Pair with [`Builder::close_scope`].
    pub fn open_scope(&mut self, id: NodeId) -> Result<(), SequenceError> {
        let node = self.nodes.get(id.0).ok_or(SequenceError::UnknownNode(id))?;
        if node.is_comment() {
            return Err(SequenceError::CommentScope(id));
        }
        if node.scope != Scope::None {
            return Err(SequenceError::AlreadyScoped(id));
        }
        let siblings = match self.frames.current() {
            Some(frame) => frame.children(),
            None => self.roots.as_slice(),
        };
        if !siblings.iter().rev().any(|&sibling| sibling == id) {
            return Err(SequenceError::NotInCurrentScope(id));
        }

        self.nodes[id.0].scope = Scope::Open;
        self.frames.open(id);
        Ok(())
    }

    /// Close the innermost scope, which must belong to `id`, and hand its
    /// children to the node.
    pub fn close_scope(&mut self, id: NodeId) -> Result<(), SequenceError> {
        let expected = self
            .frames
            .current()
            .map(|frame| frame.owner())
            .ok_or(SequenceError::NoOpenScope)?;
        if expected != id {
            return Err(SequenceError::MismatchedClose { expected, found: id });
        }
        let frame = self.frames.close()?;
        self.nodes[id.0].scope = Scope::Closed(frame.into_children());
        Ok(())
    }

    /// Replace the inline content of an existing node.
    pub fn set_content(&mut self, id: NodeId, text: impl Into<String>) -> Result<(), SequenceError> {
        let node = self
            .nodes
            .get_mut(id.0)
            .ok_or(SequenceError::UnknownNode(id))?;
        node.set_content(text.into());
        Ok(())
    }

    pub fn current_depth(&self) -> usize {
        self.frames.current_depth()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Freeze the tree. Fails if any scope is still open.
    pub fn finish(self) -> Result<Document, SequenceError> {
        if let Some(frame) = self.frames.current() {
            let owner = frame.owner();
            let tag = self.nodes[owner.0].tag().unwrap_or_default().to_string();
            return Err(SequenceError::UnclosedScope { owner, tag });
        }
        log::debug!(
            "finished document with {} nodes and {} roots",
            self.nodes.len(),
            self.roots.len()
        );
        Ok(Document::new(self.nodes, self.roots))
    }

    /// Close frames until the one owned by `owner` is gone.
    fn unwind_to(&mut self, owner: NodeId) {
        if !self.frames.contains(owner) {
            return;
        }
        while let Some(top) = self.frames.current().map(|frame| frame.owner()) {
            if top != owner {
                log::warn!("closing scope {top} left open inside scope {owner}");
            }
            if self.close_scope(top).is_err() || top == owner {
                break;
            }
        }
    }
}

/// An open scope. Derefs to the [`Builder`] so nodes can be added through it.
pub struct ScopeGuard<'b> {
    builder: &'b mut Builder,
    owner: NodeId,
    closed: bool,
}

impl ScopeGuard<'_> {
    pub fn id(&self) -> NodeId {
        self.owner
    }

    /// Close the scope, reporting out-of-order use instead of repairing it.
    ///
    /// On error the guard still unwinds the stack when it drops, so the
    /// failure propagates with this scope and any inner ones closed.
    pub fn exit(mut self) -> Result<NodeId, SequenceError> {
        let owner = self.owner;
        self.builder.close_scope(owner)?;
        self.closed = true;
        Ok(owner)
    }
}

impl Deref for ScopeGuard<'_> {
    type Target = Builder;

    fn deref(&self) -> &Builder {
        self.builder
    }
}

impl DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut Builder {
        self.builder
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        if !self.closed {
            log::trace!("scope guard for {} dropped without exit", self.owner);
            self.builder.unwind_to(self.owner);
        }
    }
}
