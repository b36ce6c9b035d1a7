//! The page structure the controller writes into.
//!
//! `Page` is the seam between the controller and a concrete DOM. `Document`
//! is an in-memory implementation that can be serialized to HTML.

use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("No element with id {0:?}")]
    MissingElement(String),
}

/// Operations the controller performs on elements addressed by id.
pub trait Page {
    /// Drop the element's current content and append `children`.
    fn replace_children(&mut self, id: &str, children: Vec<Element>) -> Result<(), DomError>;

    /// Replace the element's content with plain text.
    fn set_text(&mut self, id: &str, text: &str) -> Result<(), DomError>;

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), DomError>;

    fn set_disabled(&mut self, id: &str, disabled: bool) -> Result<(), DomError>;

    /// Current value of a form field.
    fn value(&self, id: &str) -> Result<String, DomError>;

    fn set_value(&mut self, id: &str, value: &str) -> Result<(), DomError>;
}

/// A detached element tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub text: String,
    pub children: Vec<Element>,
}

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.attributes
            .entry("class".into())
            .and_modify(|classes| {
                classes.push(' ');
                classes.push_str(class);
            })
            .or_insert_with(|| class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Depth-first search for the element carrying `id`, including `self`.
    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Descendants (not `self`) carrying `class`, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        for child in &self.children {
            if child.has_class(class) {
                found.push(child);
            }
            found.extend(child.find_by_class(class));
        }
        found
    }

    /// Own text followed by the text of every descendant.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            if !value.is_empty() {
                out.push_str("=\"");
                escape_into(value, out);
                out.push('"');
            }
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        escape_into(&self.text, out);
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn escape_into(raw: &str, out: &mut String) {
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// In-memory page rooted at a single element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.root.find(id)
    }

    pub fn to_html(&self) -> String {
        self.root.to_html()
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut Element, DomError> {
        self.root
            .find_mut(id)
            .ok_or_else(|| DomError::MissingElement(id.to_string()))
    }
}

impl Page for Document {
    fn replace_children(&mut self, id: &str, children: Vec<Element>) -> Result<(), DomError> {
        let element = self.element_mut(id)?;
        element.text.clear();
        element.children = children;
        Ok(())
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), DomError> {
        let element = self.element_mut(id)?;
        element.text = text.to_string();
        element.children.clear();
        Ok(())
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), DomError> {
        self.element_mut(id)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_disabled(&mut self, id: &str, disabled: bool) -> Result<(), DomError> {
        let attributes = &mut self.element_mut(id)?.attributes;
        if disabled {
            attributes.insert("disabled".into(), String::new());
        } else {
            attributes.remove("disabled");
        }
        Ok(())
    }

    fn value(&self, id: &str) -> Result<String, DomError> {
        self.element(id)
            .map(|element| element.attribute("value").unwrap_or_default().to_string())
            .ok_or_else(|| DomError::MissingElement(id.to_string()))
    }

    fn set_value(&mut self, id: &str, value: &str) -> Result<(), DomError> {
        self.set_attribute(id, "value", value)
    }
}
