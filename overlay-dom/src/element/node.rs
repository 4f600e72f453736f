use std::collections::HashMap;

use crate::layout::Rect;
use crate::transitions::Transitions;
use crate::types::Style;

/// Handle to an element in a [`Document`](crate::Document) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) usize);

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub tag: String,
    pub attributes: HashMap<String, String>,

    // Tree
    pub parent: Option<ElementId>,
    pub children: Vec<ElementId>,

    // Geometry (border box in page coordinates, assigned by the host)
    pub rect: Rect,

    // Scrolling
    pub scroll_top: f32,
    /// Total content height. Never less than the client height.
    pub scroll_height: f32,

    // Visual
    pub hidden: bool,
    pub style: Style,
    pub transitions: Transitions,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: HashMap::new(),
            parent: None,
            children: Vec::new(),
            rect: Rect::default(),
            scroll_top: 0.0,
            scroll_height: 0.0,
            hidden: false,
            style: Style::default(),
            transitions: Transitions::default(),
        }
    }

    pub fn client_height(&self) -> f32 {
        self.rect.height
    }

    pub fn scroll_height(&self) -> f32 {
        self.scroll_height.max(self.client_height())
    }

    /// Largest valid `scroll_top`.
    pub fn max_scroll_top(&self) -> f32 {
        (self.scroll_height() - self.client_height()).max(0.0)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }
}
