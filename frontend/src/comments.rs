//! Rendering of the comment list.
//!
//! Every sync rebuilds the whole list from the server's response; nothing is
//! patched in place.

use portfolio_adapters::Comment;

use crate::{
    config::ElementIds,
    dom::{DomError, Element, Page},
};

pub const AVATAR_SRC: &str = "/images/avatar.png";

/// Build the render unit for one comment.
pub fn render_comment(comment: &Comment) -> Element {
    Element::new("li")
        .with_class("comment")
        .with_child(
            Element::new("img")
                .with_class("avatar")
                .with_attr("src", AVATAR_SRC)
                .with_attr("alt", "avatar"),
        )
        .with_child(
            Element::new("div")
                .with_class("comment-content")
                .with_child(
                    Element::new("span")
                        .with_class("comment-name")
                        .with_text(&comment.name),
                )
                .with_child(
                    Element::new("p")
                        .with_class("comment-body")
                        .with_text(&comment.body),
                ),
        )
}

pub fn count_label(count: usize) -> String {
    format!("{count} Comments")
}

/// Replace the comment container and counter with `comments`.
pub fn render_comments(
    page: &mut impl Page,
    ids: &ElementIds,
    comments: &[Comment],
) -> Result<(), DomError> {
    page.replace_children(
        &ids.comments_container,
        comments.iter().map(render_comment).collect(),
    )?;
    page.set_text(&ids.comment_count, &count_label(comments.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::portfolio_document;
    use pretty_assertions::assert_eq;

    #[test]
    fn unit_holds_avatar_name_and_body() {
        let unit = render_comment(&Comment::new("Ada", "hello"));

        let avatar = &unit.find_by_class("avatar")[0];
        assert_eq!(avatar.tag, "img");
        assert_eq!(avatar.attribute("src"), Some(AVATAR_SRC));
        assert_eq!(unit.find_by_class("comment-name")[0].text, "Ada");
        assert_eq!(unit.find_by_class("comment-body")[0].text, "hello");
    }

    #[test]
    fn names_and_bodies_are_text_not_markup() {
        let unit = render_comment(&Comment::new("<script>", "a & b"));
        let html = unit.to_html();

        assert!(html.contains("&lt;script&gt;"), "{html}");
        assert!(html.contains("a &amp; b"), "{html}");
    }

    #[test]
    fn renders_one_unit_per_comment_and_the_count() {
        let ids = ElementIds::default();
        let mut doc = portfolio_document(&ids);
        for n in [0, 1, 7] {
            let comments: Vec<Comment> = (0..n)
                .map(|i| Comment::new(format!("user{i}"), "x"))
                .collect();
            render_comments(&mut doc, &ids, &comments).unwrap();

            let container = doc.element(&ids.comments_container).unwrap();
            assert_eq!(container.children.len(), n);
            assert_eq!(
                doc.element(&ids.comment_count).unwrap().text,
                format!("{n} Comments")
            );
        }
    }

    #[test]
    fn missing_container_is_reported() {
        let ids = ElementIds {
            comments_container: "elsewhere".into(),
            ..ElementIds::default()
        };
        let mut doc = portfolio_document(&ElementIds::default());

        assert_eq!(
            render_comments(&mut doc, &ids, &[]),
            Err(DomError::MissingElement("elsewhere".into()))
        );
    }
}
