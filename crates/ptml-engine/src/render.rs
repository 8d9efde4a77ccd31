//! Lazy serialization of a finished [`Document`].
//!
//! [`Fragments`] walks a subtree with an explicit work stack and yields the
//! markup piece by piece, so callers can stream it into a sink without
//! building the whole string first.
//!
//! Layout rules:
//!
//! ```text
//! <ul>                        container: open tag, then each child on its own
//! 	<li>one</li>            line, then the close tag on its own line, both at
//! 	<li>two &amp; a half</li>  the node's depth
//! </ul>
//! ```
//!
//! A leaf keeps its escaped content and close tag on the opening line. Root
//! fragments carry no leading or trailing line break.

use std::borrow::Cow;
use std::collections::VecDeque;

use crate::attributes::AttrValue;
use crate::document::Document;
use crate::escape;
use crate::node::{Node, NodeId, NodeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Written once per depth level before an opening or closing tag.
    pub indent: String,
    /// Escape `id` values like every other attribute. Turning this off
    /// writes `id` verbatim.
    pub escape_id: bool,
    /// End [`Document::write_to`] output with a line break.
    pub trailing_newline: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            escape_id: true,
            trailing_newline: true,
        }
    }
}

impl RenderOptions {
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn escape_id(mut self, escape_id: bool) -> Self {
        self.escape_id = escape_id;
        self
    }

    pub fn trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Node(NodeId),
    Close(NodeId),
    LineBreak,
}

/// Iterator over the markup fragments of one subtree.
#[derive(Debug, Clone)]
pub struct Fragments<'a> {
    document: &'a Document,
    options: Cow<'a, RenderOptions>,
    steps: Vec<Step>,
    pending: VecDeque<Cow<'a, str>>,
}

impl<'a> Fragments<'a> {
    pub(crate) fn new(document: &'a Document, root: NodeId, options: Cow<'a, RenderOptions>) -> Self {
        Self {
            document,
            options,
            steps: vec![Step::Node(root)],
            pending: VecDeque::new(),
        }
    }

    fn indent(&self, depth: usize) -> Option<Cow<'a, str>> {
        if depth == 0 || self.options.indent.is_empty() {
            return None;
        }
        Some(Cow::Owned(self.options.indent.repeat(depth)))
    }

    fn expand(&mut self, id: NodeId, node: &'a Node) {
        if let Some(indent) = self.indent(node.depth()) {
            self.pending.push_back(indent);
        }

        let tag = match node.kind() {
            NodeKind::Comment => {
                self.pending.push_back(Cow::Borrowed("<!-- "));
                self.pending
                    .push_back(Cow::Borrowed(node.content().unwrap_or_default()));
                self.pending.push_back(Cow::Borrowed(" -->"));
                return;
            }
            NodeKind::Element { tag } => tag.as_ref(),
        };

        self.open_tag(tag, node);

        if node.is_container() {
            self.steps.push(Step::Close(id));
            self.steps.push(Step::LineBreak);
            for &child in node.children().iter().rev() {
                self.steps.push(Step::Node(child));
                self.steps.push(Step::LineBreak);
            }
        } else {
            if let Some(content) = node.content() {
                self.pending.push_back(escape::text(content));
            }
            self.pending.push_back(close_tag(tag));
        }
    }

    fn open_tag(&mut self, tag: &'a str, node: &'a Node) {
        let attributes = node.attributes();
        self.pending.push_back(Cow::Owned(format!("<{tag}")));

        if let Some(id) = attributes.id().filter(|id| !id.is_empty()) {
            let id = id.joined();
            let id = if self.options.escape_id {
                escape::attribute(&id)
            } else {
                Cow::Borrowed(id.as_ref())
            };
            self.pending.push_back(Cow::Owned(format!(" id=\"{id}\"")));
        }

        if let Some(class) = attributes.class().filter(|class| !class.is_empty()) {
            self.pending.push_back(attribute_fragment("class", class));
        }

        for (key, value) in attributes.others() {
            self.pending.push_back(attribute_fragment(key, value));
        }

        self.pending.push_back(Cow::Borrowed(">"));
    }
}

impl<'a> Iterator for Fragments<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(fragment) = self.pending.pop_front() {
                return Some(fragment);
            }

            let document = self.document;
            match self.steps.pop()? {
                Step::LineBreak => return Some(Cow::Borrowed("\n")),
                Step::Close(id) => {
                    let Some(node) = document.node(id) else {
                        continue;
                    };
                    if let Some(indent) = self.indent(node.depth()) {
                        self.pending.push_back(indent);
                    }
                    self.pending
                        .push_back(close_tag(node.tag().unwrap_or_default()));
                }
                Step::Node(id) => {
                    let Some(node) = document.node(id) else {
                        log::warn!("skipping unknown node {id} while rendering");
                        continue;
                    };
                    self.expand(id, node);
                }
            }
        }
    }
}

fn close_tag(tag: &str) -> Cow<'static, str> {
    Cow::Owned(format!("</{tag}>"))
}

fn attribute_fragment(key: &str, value: &AttrValue) -> Cow<'static, str> {
    Cow::Owned(format!(" {key}=\"{}\"", escape::attribute(&value.joined())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;
    use crate::tags::{a, div, li, p, span, ul};
    use pretty_assertions::assert_eq;

    fn render(document: &Document) -> String {
        document.render(document.roots()[0]).collect()
    }

    #[test]
    fn test_leaf_without_content_renders_empty() {
        let mut b = Builder::new();
        b.add(span());
        let doc = b.finish().unwrap();
        assert_eq!(render(&doc), "<span></span>");
    }

    #[test]
    fn test_container_lays_children_out_on_lines() {
        let mut b = Builder::new();
        b.scope(ul(), |b| {
            b.add(li().content("one"));
            b.add(li().content("two"));
            Ok(())
        })
        .unwrap();
        let doc = b.finish().unwrap();

        assert_eq!(render(&doc), "<ul>\n\t<li>one</li>\n\t<li>two</li>\n</ul>");
    }

    #[test]
    fn test_empty_container() {
        let mut b = Builder::new();
        b.scope(div(), |_| Ok(())).unwrap();
        let doc = b.finish().unwrap();
        assert_eq!(render(&doc), "<div>\n</div>");
    }

    #[test]
    fn test_children_supersede_content() {
        let mut b = Builder::new();
        let head = b
            .scope(div().content("ignored"), |b| {
                b.add(p().content("kept"));
                Ok(())
            })
            .unwrap();
        let doc = b.finish().unwrap();

        assert_eq!(doc[head].content(), Some("ignored"));
        assert_eq!(render(&doc), "<div>\n\t<p>kept</p>\n</div>");
    }

    #[test]
    fn test_fixed_attribute_order() {
        let mut b = Builder::new();
        b.add(
            a().attr("href", "#")
                .attr("cls", ["btn", "btn-default"])
                .attr("role", "btn")
                .id("details"),
        );
        let doc = b.finish().unwrap();

        assert_eq!(
            render(&doc),
            r##"<a id="details" class="btn btn-default" href="#" role="btn"></a>"##
        );
    }

    #[test]
    fn test_empty_id_and_class_are_skipped() {
        let mut b = Builder::new();
        b.add(div().id("").class("").attr("title", ""));
        let doc = b.finish().unwrap();
        assert_eq!(render(&doc), r#"<div title=""></div>"#);
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let mut b = Builder::new();
        b.add(div().attr("escaped_attr", "\"hello world\" <&>"));
        let doc = b.finish().unwrap();
        assert_eq!(
            render(&doc),
            r#"<div escaped_attr="&quot;hello world&quot; &lt;&amp;&gt;"></div>"#
        );
    }

    #[test]
    fn test_id_escaping_is_configurable() {
        let mut b = Builder::new();
        b.add(div().id("a\"b"));
        let doc = b.finish().unwrap();
        let root = doc.roots()[0];

        let escaped: String = doc.render(root).collect();
        assert_eq!(escaped, r#"<div id="a&quot;b"></div>"#);

        let verbatim = RenderOptions::default().escape_id(false);
        let raw: String = doc.render_with(root, &verbatim).collect();
        assert_eq!(raw, r#"<div id="a"b"></div>"#);
    }

    #[test]
    fn test_comment_is_raw_and_indented() {
        let mut b = Builder::new();
        b.scope(div(), |b| {
            b.add(crate::tags::comment("a <raw> & note"));
            Ok(())
        })
        .unwrap();
        let doc = b.finish().unwrap();
        assert_eq!(render(&doc), "<div>\n\t<!-- a <raw> & note -->\n</div>");
    }

    #[test]
    fn test_custom_indent() {
        let mut b = Builder::new();
        b.scope(div(), |b| {
            b.scope(div(), |b| {
                b.add(span());
                Ok(())
            })?;
            Ok(())
        })
        .unwrap();
        let doc = b.finish().unwrap();
        let options = RenderOptions::default().indent("  ");

        let out: String = doc.render_with(doc.roots()[0], &options).collect();
        assert_eq!(
            out,
            "<div>\n  <div>\n    <span></span>\n  </div>\n</div>"
        );
    }

    #[test]
    fn test_fragments_are_produced_incrementally() {
        let mut b = Builder::new();
        b.scope(ul(), |b| {
            b.add(li().content("one"));
            Ok(())
        })
        .unwrap();
        let doc = b.finish().unwrap();

        let fragments: Vec<_> = doc.render(doc.roots()[0]).collect();
        assert_eq!(
            fragments,
            ["<ul", ">", "\n", "\t", "<li", ">", "one", "</li>", "\n", "</ul>"]
        );
    }
}
