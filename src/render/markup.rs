//! Generic markup element trees
//!
//! A minimal tag/attribute/child serializer. Attributes keep insertion
//! order and values are single-quoted; children render space-separated
//! inside the enclosing tag.

use std::fmt::Display;

/// One named attribute
#[derive(Debug, Clone)]
struct Attribute {
    name: String,
    value: String,
}

/// Element content: either a nested element or raw text
#[derive(Debug, Clone)]
enum Content {
    Element(Element),
    Raw(String),
}

/// A markup element with ordered attributes and children
#[derive(Debug, Clone)]
pub struct Element {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<Content>,
}

impl Element {
    /// Create an element with the given tag name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute
    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Display) -> Self {
        self.attributes.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Append a child element
    #[must_use]
    pub fn child(mut self, element: Self) -> Self {
        self.children.push(Content::Element(element));
        self
    }

    /// Append raw text content
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Content::Raw(text.to_string()));
        self
    }

    /// Serialize the tree to a markup string
    pub fn render(&self) -> String {
        let mut out = format!("<{}", self.name);
        for attribute in &self.attributes {
            out.push_str(&format!(" {}='{}'", attribute.name, attribute.value));
        }
        out.push('>');
        for content in &self.children {
            out.push(' ');
            match content {
                Content::Element(element) => out.push_str(&element.render()),
                Content::Raw(raw) => out.push_str(raw),
            }
        }
        out.push_str(&format!("</{}>", self.name));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::Element;

    #[test]
    fn nested_elements_render_in_order() {
        let tree = Element::new("svg")
            .attr("width", 10)
            .child(Element::new("rect").attr("fill", "white"))
            .text("done");
        assert_eq!(
            tree.render(),
            "<svg width='10'> <rect fill='white'></rect> done</svg>"
        );
    }
}
