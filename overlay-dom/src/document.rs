//! Retained element tree plus the host services elements rely on:
//! listeners, timers, an event queue and opacity transitions.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::animation::AnimationState;
use crate::element::{Element, ElementId};
use crate::event::{Event, EventKind};
use crate::hit::hit_test;
use crate::layout::Rect;
use crate::listener::{ListenerId, ListenerRegistry, Scope};
use crate::stylesheet::HeadNode;
use crate::timer::{TimerId, Timers};
use crate::types::{ComputedStyle, Style};

/// Result of dispatching one event: the element it was aimed at and every
/// listener that should see it, innermost first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dispatch {
    pub target: Option<ElementId>,
    pub listeners: Vec<ListenerId>,
}

#[derive(Debug)]
pub struct Document {
    elements: Vec<Option<Element>>,
    body: ElementId,
    head: Vec<HeadNode>,
    viewport: (f32, f32),
    listeners: ListenerRegistry,
    timers: Timers,
    animations: AnimationState,
    queue: VecDeque<Event>,
    hovered: Option<ElementId>,
    pressed: Option<ElementId>,
}

impl Document {
    /// Create a document whose body fills a viewport of the given size.
    pub fn new(width: f32, height: f32) -> Self {
        let mut body = Element::new("body");
        body.rect = Rect::from_size(width, height);
        Self {
            elements: vec![Some(body)],
            body: ElementId(0),
            head: Vec::new(),
            viewport: (width, height),
            listeners: ListenerRegistry::new(),
            timers: Timers::new(),
            animations: AnimationState::new(),
            queue: VecDeque::new(),
            hovered: None,
            pressed: None,
        }
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    pub fn viewport_size(&self) -> (f32, f32) {
        self.viewport
    }

    fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
        if let Some(body) = self.get_mut(self.body) {
            body.rect = Rect::from_size(width, height);
        }
    }

    // -------------------------------------------------------------------------
    // Tree
    // -------------------------------------------------------------------------

    /// Create a detached element.
    pub fn create_element(&mut self, tag: impl Into<String>) -> ElementId {
        self.elements.push(Some(Element::new(tag)));
        ElementId(self.elements.len() - 1)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id)?.parent
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map_or(&[], |el| el.children.as_slice())
    }

    pub fn next_sibling(&self, id: ElementId) -> Option<ElementId> {
        let siblings = self.children(self.parent(id)?);
        let index = siblings.iter().position(|&c| c == id)?;
        siblings.get(index + 1).copied()
    }

    /// True if `ancestor` is `id` or one of its ancestors.
    pub fn is_ancestor_or_self(&self, ancestor: ElementId, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(el) = current {
            if el == ancestor {
                return true;
            }
            current = self.parent(el);
        }
        false
    }

    /// True if the element is reachable from the body.
    pub fn is_connected(&self, id: ElementId) -> bool {
        self.contains(id) && self.is_ancestor_or_self(self.body, id)
    }

    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> bool {
        self.insert_child(parent, child, None)
    }

    pub fn prepend_child(&mut self, parent: ElementId, child: ElementId) -> bool {
        self.insert_child(parent, child, Some(0))
    }

    fn insert_child(&mut self, parent: ElementId, child: ElementId, index: Option<usize>) -> bool {
        if !self.contains(parent) || !self.contains(child) || self.is_ancestor_or_self(child, parent)
        {
            return false;
        }
        self.detach(child);

        let Some(parent_el) = self.get_mut(parent) else {
            return false;
        };
        match index {
            Some(i) => parent_el.children.insert(i.min(parent_el.children.len()), child),
            None => parent_el.children.push(child),
        }
        if let Some(child_el) = self.get_mut(child) {
            child_el.parent = Some(parent);
        }
        true
    }

    fn detach(&mut self, id: ElementId) {
        if let Some(parent) = self.parent(id) {
            if let Some(parent_el) = self.get_mut(parent) {
                parent_el.children.retain(|&c| c != id);
            }
        }
        if let Some(el) = self.get_mut(id) {
            el.parent = None;
        }
    }

    /// Remove an element and its subtree. Listeners attached to removed
    /// elements are dropped with them.
    pub fn remove(&mut self, id: ElementId) -> bool {
        if id == self.body || !self.contains(id) {
            return false;
        }
        self.detach(id);

        let subtree = self.subtree(id);
        for &el in &subtree {
            self.elements[el.0] = None;
            self.animations.forget(el);
        }
        let dropped = self.listeners.remove_for_elements(&subtree);
        if dropped > 0 {
            log::debug!("[dom] removing {id:?} dropped {dropped} element listeners");
        }
        if self.hovered.is_some_and(|h| subtree.contains(&h)) {
            self.hovered = None;
        }
        if self.pressed.is_some_and(|p| subtree.contains(&p)) {
            self.pressed = None;
        }
        true
    }

    /// The element and all its descendants in document order.
    pub fn subtree(&self, id: ElementId) -> Vec<ElementId> {
        let mut result = Vec::new();
        self.collect_subtree(id, &mut result);
        result
    }

    fn collect_subtree(&self, id: ElementId, result: &mut Vec<ElementId>) {
        if !self.contains(id) {
            return;
        }
        result.push(id);
        for &child in self.children(id) {
            self.collect_subtree(child, result);
        }
    }

    // -------------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------------

    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: impl Into<String>) {
        if let Some(el) = self.get_mut(id) {
            el.attributes.insert(name.to_string(), value.into());
        }
    }

    pub fn remove_attribute(&mut self, id: ElementId, name: &str) {
        if let Some(el) = self.get_mut(id) {
            el.attributes.remove(name);
        }
    }

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.get(id)?.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, id: ElementId, name: &str) -> bool {
        self.get(id).is_some_and(|el| el.has_attribute(name))
    }

    /// Connected elements carrying the attribute, in document order.
    pub fn query_all_by_attribute(&self, name: &str) -> Vec<ElementId> {
        self.subtree(self.body)
            .into_iter()
            .filter(|&id| self.has_attribute(id, name))
            .collect()
    }

    /// First direct child of `parent` carrying the attribute.
    pub fn child_with_attribute(&self, parent: ElementId, name: &str) -> Option<ElementId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|&c| self.has_attribute(c, name))
    }

    // -------------------------------------------------------------------------
    // Geometry and visibility
    // -------------------------------------------------------------------------

    /// Bounding rectangle in page coordinates.
    pub fn rect(&self, id: ElementId) -> Option<Rect> {
        self.get(id).map(|el| el.rect)
    }

    pub fn set_rect(&mut self, id: ElementId, rect: Rect) {
        if let Some(el) = self.get_mut(id) {
            el.rect = rect;
        }
        self.clamp_scroll(id);
    }

    pub fn set_hidden(&mut self, id: ElementId, hidden: bool) {
        if let Some(el) = self.get_mut(id) {
            el.hidden = hidden;
        }
    }

    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.get(id).is_none_or(|el| el.hidden)
    }

    /// Connected and neither the element nor an ancestor is hidden.
    pub fn is_rendered(&self, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(el) = current {
            if self.is_hidden(el) {
                return false;
            }
            if el == self.body {
                return true;
            }
            current = self.parent(el);
        }
        false
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    pub fn scroll_top(&self, id: ElementId) -> f32 {
        self.get(id).map_or(0.0, |el| el.scroll_top)
    }

    pub fn scroll_height(&self, id: ElementId) -> f32 {
        self.get(id).map_or(0.0, Element::scroll_height)
    }

    pub fn client_height(&self, id: ElementId) -> f32 {
        self.get(id).map_or(0.0, Element::client_height)
    }

    /// Set the total content height of a scrollable element.
    pub fn set_scroll_height(&mut self, id: ElementId, height: f32) {
        if let Some(el) = self.get_mut(id) {
            el.scroll_height = height.max(0.0);
        }
        self.clamp_scroll(id);
    }

    /// Write a scroll position. The value is clamped to the element's range;
    /// if it changes, a [`Event::Scroll`] is queued for the element.
    pub fn set_scroll_top(&mut self, id: ElementId, value: f32) -> bool {
        let Some(el) = self.get_mut(id) else {
            return false;
        };
        let clamped = value.clamp(0.0, el.max_scroll_top());
        if (clamped - el.scroll_top).abs() <= f32::EPSILON {
            return false;
        }
        el.scroll_top = clamped;
        self.queue.push_back(Event::Scroll { target: id });
        true
    }

    pub fn scroll_by(&mut self, id: ElementId, delta_y: f32) -> bool {
        let current = self.scroll_top(id);
        self.set_scroll_top(id, current + delta_y)
    }

    fn clamp_scroll(&mut self, id: ElementId) {
        let Some(el) = self.get(id) else { return };
        if el.scroll_top > el.max_scroll_top() {
            let max = el.max_scroll_top();
            self.set_scroll_top(id, max);
        }
    }

    /// Innermost element at or above `id` that scrolls vertically.
    fn scrollable_ancestor(&self, id: ElementId) -> Option<ElementId> {
        let mut current = Some(id);
        while let Some(el) = current {
            let scrolls = self
                .computed_style(el)
                .is_some_and(|s| s.overflow_y.is_scrollable());
            if scrolls && self.get(el).is_some_and(|e| e.max_scroll_top() > 0.0) {
                return Some(el);
            }
            current = self.parent(el);
        }
        None
    }

    // -------------------------------------------------------------------------
    // Style
    // -------------------------------------------------------------------------

    pub fn head(&self) -> &[HeadNode] {
        &self.head
    }

    pub fn append_head(&mut self, node: HeadNode) {
        self.head.push(node);
    }

    pub fn head_has_comment(&self, text: &str) -> bool {
        self.head
            .iter()
            .any(|node| matches!(node, HeadNode::Comment(c) if c == text))
    }

    pub fn inline_style(&self, id: ElementId) -> Option<&Style> {
        self.get(id).map(|el| &el.style)
    }

    pub fn inline_style_mut(&mut self, id: ElementId) -> Option<&mut Style> {
        self.get_mut(id).map(|el| &mut el.style)
    }

    /// Cascade: stylesheet rules in order, then inline style, then
    /// `!important` rules.
    pub fn computed_style(&self, id: ElementId) -> Option<ComputedStyle> {
        let element = self.get(id)?;
        let rules: Vec<_> = self
            .head
            .iter()
            .filter_map(|node| match node {
                HeadNode::Style(sheet) => Some(sheet.rules.iter()),
                HeadNode::Comment(_) => None,
            })
            .flatten()
            .filter(|rule| rule.selector.matches(element))
            .collect();

        let mut style = Style::default();
        for rule in rules.iter().filter(|r| !r.important) {
            style.merge(&rule.style);
        }
        style.merge(&element.style);
        for rule in rules.iter().filter(|r| r.important) {
            style.merge(&rule.style);
        }
        Some(style.resolve())
    }

    /// Set the target opacity, transitioning from the displayed value when
    /// the element has an opacity transition configured.
    pub fn set_opacity(&mut self, id: ElementId, target: f32, now: Instant) {
        let Some(current) = self.opacity_at(id, now) else {
            return;
        };
        let Some(el) = self.get_mut(id) else { return };
        el.style.opacity = Some(target);
        let transition = el.transitions.opacity;
        match transition {
            Some(config) => self.animations.start(id, current, target, config, now),
            None => self.animations.forget(id),
        }
    }

    /// Opacity as displayed at `now`.
    pub fn opacity_at(&self, id: ElementId, now: Instant) -> Option<f32> {
        self.animations
            .value_at(id, now)
            .or_else(|| self.computed_style(id).map(|s| s.opacity))
    }

    pub fn has_active_transitions(&self, now: Instant) -> bool {
        self.animations.has_active_transitions(now)
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.animations.set_reduced_motion(enabled);
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    pub fn add_listener(&mut self, scope: Scope, kind: EventKind) -> ListenerId {
        self.listeners.add(scope, kind)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn has_listener(&self, id: ListenerId) -> bool {
        self.listeners.contains(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // -------------------------------------------------------------------------
    // Timers
    // -------------------------------------------------------------------------

    pub fn set_timeout(&mut self, now: Instant, delay: Duration) -> TimerId {
        self.timers.set_timeout(now, delay)
    }

    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        self.timers.clear(id)
    }

    pub fn is_timer_pending(&self, id: TimerId) -> bool {
        self.timers.is_pending(id)
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn take_due_timers(&mut self, now: Instant) -> Vec<TimerId> {
        self.animations.prune(now);
        self.timers.take_due(now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Next event produced by the document itself (scroll notifications).
    pub fn pop_queued(&mut self) -> Option<Event> {
        self.queue.pop_front()
    }

    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    pub fn hovered(&self) -> Option<ElementId> {
        self.hovered
    }

    /// True while the pointer is over the element or one of its descendants.
    pub fn is_hovered(&self, id: ElementId) -> bool {
        self.hovered.is_some_and(|h| self.is_ancestor_or_self(id, h))
    }

    /// True while a button pressed on the element (or a descendant) is held.
    pub fn is_pressed(&self, id: ElementId) -> bool {
        self.pressed.is_some_and(|p| self.is_ancestor_or_self(id, p))
    }

    /// Resolve an event to its target and the listeners that should see it.
    ///
    /// Pointer events bubble from the hit element up to the body, then reach
    /// document and window listeners. Scroll events do not bubble. Wheel
    /// events scroll the innermost scrollable element under the pointer and
    /// are not delivered to listeners; the resulting scroll is queued.
    pub fn dispatch(&mut self, event: &Event) -> Dispatch {
        match *event {
            Event::MouseDown { x, y, .. } => {
                let target = hit_test(self, x, y);
                self.hovered = target;
                self.pressed = target;
                self.pointer_dispatch(target, EventKind::MouseDown)
            }
            Event::MouseMove { x, y } => {
                let target = hit_test(self, x, y);
                self.hovered = target;
                self.pointer_dispatch(target, EventKind::MouseMove)
            }
            Event::MouseUp { x, y, .. } => {
                let target = hit_test(self, x, y);
                self.hovered = target;
                self.pressed = None;
                self.pointer_dispatch(target, EventKind::MouseUp)
            }
            Event::Wheel { x, y, delta_y } => {
                let target = hit_test(self, x, y);
                if let Some(scrollable) = target.and_then(|t| self.scrollable_ancestor(t)) {
                    self.scroll_by(scrollable, delta_y);
                }
                Dispatch {
                    target,
                    listeners: Vec::new(),
                }
            }
            Event::Scroll { target } => {
                if !self.contains(target) {
                    return Dispatch::default();
                }
                Dispatch {
                    target: Some(target),
                    listeners: self
                        .listeners
                        .matching(Scope::Element(target), EventKind::Scroll)
                        .collect(),
                }
            }
            Event::Resize { width, height } => {
                self.set_viewport_size(width, height);
                Dispatch {
                    target: None,
                    listeners: self
                        .listeners
                        .matching(Scope::Window, EventKind::Resize)
                        .collect(),
                }
            }
        }
    }

    fn pointer_dispatch(&self, target: Option<ElementId>, kind: EventKind) -> Dispatch {
        let mut listeners = Vec::new();
        let mut current = target;
        while let Some(el) = current {
            listeners.extend(self.listeners.matching(Scope::Element(el), kind));
            current = self.parent(el);
        }
        listeners.extend(self.listeners.matching(Scope::Document, kind));
        listeners.extend(self.listeners.matching(Scope::Window, kind));
        Dispatch { target, listeners }
    }
}
