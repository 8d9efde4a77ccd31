use crate::node::NodeId;

/// Misuse of the scope API: scopes entered or exited out of order, or a
/// document finished while a scope is still open.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    #[error("No scope is open")]
    NoOpenScope,
    #[error("Cannot close scope of {found}: innermost open scope belongs to {expected}")]
    MismatchedClose { expected: NodeId, found: NodeId },
    #[error("Node {0} already has a scope")]
    AlreadyScoped(NodeId),
    #[error("Node {0} is not a member of the current scope")]
    NotInCurrentScope(NodeId),
    #[error("Comment node {0} cannot hold children")]
    CommentScope(NodeId),
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),
    #[error("Scope of <{tag}> ({owner}) was never closed")]
    UnclosedScope { owner: NodeId, tag: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ElementError {
    #[error("Heading level must be between 1 and 6, got {0}")]
    HeadingLevel(u8),
    #[error("Unknown element kind: {0}")]
    UnknownKind(String),
}
