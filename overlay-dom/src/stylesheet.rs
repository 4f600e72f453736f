//! Document-level style rules.
//!
//! Only the selector forms the overlay needs are supported: attribute
//! presence (`[data-foo]`) and tag name.

use crate::element::Element;
use crate::types::Style;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `[name]`
    Attribute(String),
    /// `tag`
    Tag(String),
}

impl Selector {
    pub fn attribute(name: impl Into<String>) -> Self {
        Selector::Attribute(name.into())
    }

    pub fn tag(name: impl Into<String>) -> Self {
        Selector::Tag(name.into())
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Attribute(name) => element.has_attribute(name),
            Selector::Tag(tag) => element.tag == *tag,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selector: Selector,
    pub style: Style,
    /// `!important`: wins over inline style.
    pub important: bool,
}

impl Rule {
    pub fn new(selector: Selector, style: Style) -> Self {
        Self {
            selector,
            style,
            important: false,
        }
    }

    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }
}

/// Nodes in the document head.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadNode {
    Comment(String),
    Style(Stylesheet),
}
