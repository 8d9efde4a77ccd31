//! # ptml-engine
//!
//! Build HTML-like markup with nested scopes, then stream it out as indented,
//! escaped text.
//!
//! ## How construction works
//!
//! A [`Builder`] keeps a stack of open scopes ([`frame::FrameStack`]). Adding
//! an element registers it as a child of the innermost open scope right away;
//! opening the element as a scope makes it the parent of everything added
//! until the scope closes. Scopes close through a drop guard, so an error
//! returned from a scope body still leaves the stack balanced. The same holds
//! for a panic when the build unwinds; the workspace profiles abort instead.
//!
//! ```text
//! Element ──add──▶ Node (child of current frame)
//!                   │ enter
//!                   ▼
//!                 Frame ──children──▶ Node.children on exit
//! ```
//!
//! ## How rendering works
//!
//! [`Builder::finish`] yields a [`Document`]. [`Document::render`] returns a
//! lazy iterator of fragments; [`Document::write_to`] streams them to any
//! [`std::io::Write`].
//!
//! ## Quick Start
//!
//! ```
//! use ptml_engine::{Builder, tags};
//!
//! let mut b = Builder::new();
//! let root = b
//!     .scope(tags::div().id("main"), |b| {
//!         b.add(tags::p().content("fish & chips").class("menu"));
//!         Ok(())
//!     })
//!     .unwrap();
//! let doc = b.finish().unwrap();
//!
//! assert_eq!(
//!     doc.render_to_string(root),
//!     "<div id=\"main\">\n\t<p class=\"menu\">fish &amp; chips</p>\n</div>"
//! );
//! ```

pub mod attributes;
pub mod builder;
pub mod document;
pub mod element;
pub mod error;
pub mod escape;
pub mod frame;
pub mod kinds;
pub mod node;
pub mod render;
pub mod tags;

pub use attributes::{AttrValue, Attributes};
pub use builder::{Builder, ScopeGuard};
pub use document::Document;
pub use element::Element;
pub use error::{ElementError, SequenceError};
pub use kinds::{Kind, KindTable};
pub use node::{Node, NodeId, NodeKind};
pub use render::{Fragments, RenderOptions};
