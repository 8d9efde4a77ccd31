//! Constructors for common HTML tags.
//!
//! ```
//! use ptml_engine::tags;
//!
//! let link = tags::a().content("Project Name").class("navbar-brand").attr("href", "#");
//! assert_eq!(link.tag(), Some("a"));
//! ```

use crate::element::Element;
use crate::error::ElementError;

macro_rules! tags {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("`<", $tag, ">`")]
            pub fn $name() -> Element {
                Element::new($tag)
            }
        )*
    };
}

tags! {
    html => "html",
    head => "head",
    title => "title",
    link => "link",
    meta => "meta",
    style => "style",
    script => "script",
    body => "body",
    header => "header",
    nav => "nav",
    main => "main",
    section => "section",
    article => "article",
    aside => "aside",
    footer => "footer",
    div => "div",
    span => "span",
    p => "p",
    a => "a",
    img => "img",
    strong => "strong",
    em => "em",
    code => "code",
    pre => "pre",
    br => "br",
    hr => "hr",
    ul => "ul",
    ol => "ol",
    li => "li",
    table => "table",
    thead => "thead",
    tbody => "tbody",
    tr => "tr",
    th => "th",
    td => "td",
    form => "form",
    label => "label",
    input => "input",
    button => "button",
    h1 => "h1",
    h2 => "h2",
    h3 => "h3",
    h4 => "h4",
    h5 => "h5",
    h6 => "h6",
}

/// `<h1>`..`<h6>` chosen by `level`.
pub fn heading(level: u8) -> Result<Element, ElementError> {
    Element::heading(level)
}

pub fn comment(text: impl Into<String>) -> Element {
    Element::comment(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, h1())]
    #[case(2, h2())]
    #[case(3, h3())]
    #[case(4, h4())]
    #[case(5, h5())]
    #[case(6, h6())]
    fn test_heading_matches_fixed_tag(#[case] level: u8, #[case] fixed: Element) {
        assert_eq!(heading(level).unwrap(), fixed);
    }

    #[test]
    fn test_catalog_binds_tag_names() {
        assert_eq!(div().tag(), Some("div"));
        assert_eq!(button().tag(), Some("button"));
        assert_eq!(comment("x").tag(), None);
    }
}
