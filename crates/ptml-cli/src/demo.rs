//! The Bootstrap "jumbotron" example page.

use anyhow::Result;
use ptml_engine::{Builder, Document, KindTable, SequenceError, tags};

const COPY: &str = "Donec id elit non mi porta gravida at eget metus. Fusce dapibus, tellus ac \
cursus commodo, tortor mauris condimentum nibh, ut fermentum massa justo sit amet risus. \
Etiam porta sem malesuada magna mollis euismod. Donec sed odio dui";

const PITCH: &str = "This is a template for a simple marketing or informational website. It \
includes a large callout called a jumbotron and three supporting pieces of content. Use it as \
a starting point to create something more unique.";

const BOOTSTRAP_CSS: &str = "https://maxcdn.bootstrapcdn.com/bootstrap/3.3.7/css/bootstrap.min.css";
const BOOTSTRAP_INTEGRITY: &str =
    "sha384-BVYiiSIFeK1dGmJRAkycuHAHRg32OmUcww7on3RYdg4Va+PmSTsz/K68vbdEjh4u";

/// Lay out the page, taking the container, row and column presets from `kinds`.
pub fn build(kinds: &KindTable) -> Result<Document> {
    let container = kinds.element("container")?;
    let row = kinds.element("row")?;
    let column = kinds.element("col-md-4")?;

    let mut b = Builder::new();
    b.scope(tags::html(), |b| {
        b.scope(tags::head(), |b| {
            b.add(
                tags::title()
                    .content("Example document")
                    .attr("escaped_attr", "\"hello world\""),
            );
            b.add(
                tags::link()
                    .attr("rel", "stylesheet")
                    .attr("href", BOOTSTRAP_CSS)
                    .attr("integrity", BOOTSTRAP_INTEGRITY)
                    .attr("crossorigin", "anonymous"),
            );
            b.add(tags::meta().attr("charset", "utf-8"));
            Ok(())
        })?;
        b.scope(tags::body(), |b| {
            navbar(b)?;
            b.scope(tags::div().class("jumbotron"), |b| {
                b.scope(container.clone().attr("extra", "\"hello\""), |b| {
                    b.add(tags::h1().content("<headline>"));
                    b.add(tags::p().content(PITCH));
                    Ok(())
                })?;
                Ok(())
            })?;
            b.scope(container.clone(), |b| {
                b.scope(row.clone().id("row_1"), |b| {
                    for index in 1..=3 {
                        b.scope(column.clone().id(format!("column{index}")), |b| {
                            b.add(tags::h2().content("Heading"));
                            b.add(tags::p().content(COPY));
                            b.scope(tags::p(), |b| {
                                b.add(
                                    tags::a()
                                        .content("view details»")
                                        .class(["btn", "btn-default"])
                                        .attr("href", "#")
                                        .attr("role", "btn"),
                                );
                                Ok(())
                            })?;
                            Ok(())
                        })?;
                    }
                    Ok(())
                })?;
                Ok(())
            })?;
            b.scope(tags::footer().class("container"), |b| {
                b.add(tags::comment("footer"));
                b.add(tags::p().content("© Company 2017-2018"));
                Ok(())
            })?;
            Ok(())
        })?;
        Ok(())
    })?;

    Ok(b.finish()?)
}

fn navbar(b: &mut Builder) -> Result<(), SequenceError> {
    b.scope(tags::nav().class(["navbar", "navbar-fixed-top"]), |b| {
        b.scope(tags::div().class("container"), |b| {
            b.scope(tags::div().class("navbar-header"), |b| {
                nav_button(b)?;
                b.add(
                    tags::a()
                        .content("Project Name")
                        .class("navbar-brand")
                        .attr("href", "#"),
                );
                Ok(())
            })?;
            b.scope(
                tags::div()
                    .id("navbar")
                    .class(["navbar-collapse", "collapse"]),
                sign_in_form,
            )?;
            Ok(())
        })?;
        Ok(())
    })?;
    Ok(())
}

fn sign_in_form(b: &mut Builder) -> Result<(), SequenceError> {
    b.scope(tags::form().class(["navbar-form", "navbar-right"]), |b| {
        for (kind, placeholder) in [("text", "email"), ("password", "password")] {
            b.scope(tags::div().class("form-group"), |b| {
                b.add(
                    tags::input()
                        .attr("type", kind)
                        .attr("placeholder", placeholder)
                        .class("form-control"),
                );
                Ok(())
            })?;
        }
        b.add(
            tags::button()
                .content("sign in")
                .attr("type", "submit")
                .class(["btn", "btn-success"]),
        );
        Ok(())
    })?;
    Ok(())
}

fn nav_button(b: &mut Builder) -> Result<(), SequenceError> {
    let button = tags::button()
        .attr("type", "button")
        .class(["navbar-toggle", "collapsed"])
        .attrs([
            ("data-toggle", "collapse"),
            ("data-target", "#navbar"),
            ("aria-expanded", "false"),
            ("aria-controls", "navbar"),
        ]);
    b.scope(button, |b| {
        b.add(tags::span().content("Toggle Navigation").class("sr-only"));
        for _ in 0..3 {
            b.add(tags::span().class("icon-bar"));
        }
        Ok(())
    })?;
    Ok(())
}
