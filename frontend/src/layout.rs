//! Skeleton of the portfolio comments page.

use crate::{
    config::ElementIds,
    dom::{Document, Element},
};

/// The page as served, before any script has run.
pub fn portfolio_document(ids: &ElementIds) -> Document {
    let header = Element::new("header")
        .with_child(Element::new("span").with_id(&ids.nickname))
        .with_child(
            Element::new("a")
                .with_id(&ids.login_link)
                .with_attr("href", "#")
                .with_text("Log in"),
        );

    let form = Element::new("form")
        .with_attr("action", "/new-comment")
        .with_attr("method", "POST")
        .with_child(
            Element::new("input")
                .with_attr("type", "text")
                .with_attr("name", "custom")
                .with_attr("placeholder", "Name"),
        )
        .with_child(
            Element::new("input")
                .with_id(&ids.text_input)
                .with_attr("type", "text")
                .with_attr("name", "text-input"),
        )
        .with_child(
            Element::new("input")
                .with_id(&ids.submit_button)
                .with_attr("type", "submit")
                .with_attr("disabled", ""),
        );

    let comments = Element::new("section")
        .with_class("comments")
        .with_child(Element::new("h2").with_id(&ids.comment_count))
        .with_child(Element::new("ul").with_id(&ids.comments_container))
        .with_child(form)
        .with_child(
            Element::new("button")
                .with_id(&ids.delete_button)
                .with_text("Delete all comments"),
        )
        .with_child(Element::new("p").with_id(&ids.status).with_class("status"));

    Document::new(
        Element::new("body")
            .with_child(header)
            .with_child(comments)
            .with_child(Element::new("div").with_id(&ids.map)),
    )
}
