//! The frame stack: one frame per open scope.
//!
//! Frames nest like parentheses. The frame below the top of the stack is the
//! parent of the top frame; nodes added while a frame is on top become that
//! frame's children in the order they were added.

use crate::error::SequenceError;
use crate::node::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    owner: NodeId,
    depth: usize,
    children: Vec<NodeId>,
}

impl Frame {
    pub fn owner(&self) -> NodeId {
        self.owner
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn into_children(self) -> Vec<NodeId> {
        self.children
    }
}

#[derive(Debug, Default)]
pub struct FrameStack {
    frames: Vec<Frame>,
}

impl FrameStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a frame owned by `owner`, one level deeper than the current one.
    pub fn open(&mut self, owner: NodeId) -> &Frame {
        let depth = self.current_depth() + 1;
        log::trace!("open frame for {owner} at depth {depth}");
        self.frames.push(Frame {
            owner,
            depth,
            children: Vec::new(),
        });
        &self.frames[self.frames.len() - 1]
    }

    pub fn close(&mut self) -> Result<Frame, SequenceError> {
        let frame = self.frames.pop().ok_or(SequenceError::NoOpenScope)?;
        log::trace!(
            "close frame for {} with {} children",
            frame.owner,
            frame.children.len()
        );
        Ok(frame)
    }

    /// Record `node` as a child of the current frame. Returns `false` when no
    /// frame is open, leaving the node unparented.
    pub fn append(&mut self, node: NodeId) -> bool {
        match self.frames.last_mut() {
            Some(frame) => {
                frame.children.push(node);
                true
            }
            None => false,
        }
    }

    pub fn current_depth(&self) -> usize {
        self.frames.last().map_or(0, |frame| frame.depth)
    }

    pub fn current(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Whether `owner` has a frame anywhere on the stack.
    pub fn contains(&self, owner: NodeId) -> bool {
        self.frames.iter().any(|frame| frame.owner == owner)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_depth_tracks_nesting() {
        let mut stack = FrameStack::new();
        assert_eq!(stack.current_depth(), 0);

        assert_eq!(stack.open(NodeId(0)).depth(), 1);
        assert_eq!(stack.open(NodeId(1)).depth(), 2);
        assert_eq!(stack.current_depth(), 2);

        stack.close().unwrap();
        assert_eq!(stack.current_depth(), 1);
        stack.close().unwrap();
        assert_eq!(stack.current_depth(), 0);
    }

    #[test]
    fn test_append_goes_to_innermost_frame_in_order() {
        let mut stack = FrameStack::new();
        stack.open(NodeId(0));
        assert!(stack.append(NodeId(1)));
        stack.open(NodeId(1));
        assert!(stack.append(NodeId(2)));
        assert!(stack.append(NodeId(3)));

        let inner = stack.close().unwrap();
        assert_eq!(inner.owner(), NodeId(1));
        assert_eq!(inner.children(), &[NodeId(2), NodeId(3)]);

        assert!(stack.append(NodeId(4)));
        let outer = stack.close().unwrap();
        assert_eq!(outer.into_children(), vec![NodeId(1), NodeId(4)]);
    }

    #[test]
    fn test_append_without_frame_is_noop() {
        let mut stack = FrameStack::new();
        assert!(!stack.append(NodeId(0)));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_close_without_frame_fails() {
        let mut stack = FrameStack::new();
        assert_eq!(stack.close(), Err(SequenceError::NoOpenScope));
    }
}
