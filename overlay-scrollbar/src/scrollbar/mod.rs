//! The overlay scrollbar widget.
//!
//! A scrollbar owns three elements (host, track, thumb) injected as the
//! first child of a container, and is bound to one content element inside
//! that container for its whole lifetime. Everything it subscribes to is
//! recorded in [`BoundListeners`] so `detach` removes exactly what `attach`
//! added.

mod appearance;
mod events;

pub use appearance::Appearance;

use std::time::Instant;

use overlay_dom::{Document, ElementId, EventKind, ListenerId, Rect, Scope, TimerId};

use crate::config::{ACTIVE_ATTR, ELEMENT_TAG, ScrollbarConfig};
use crate::error::BindError;
use crate::geometry::Geometry;
use crate::state::InteractionState;
use crate::stylesheet::{host_style, thumb_style, track_style, track_transitions};

#[derive(Debug, Clone, Copy)]
struct Binding {
    container: ElementId,
    content: ElementId,
    listeners: BoundListeners,
}

/// Every listener a scrollbar has registered.
#[derive(Debug, Clone, Copy)]
struct BoundListeners {
    resize: ListenerId,
    track_down: ListenerId,
    thumb_down: ListenerId,
    /// Document-scoped pointer moves, for track hover.
    hover: ListenerId,
    /// `None` while a drag owns the content position.
    scroll: Option<ListenerId>,
    /// Document-scoped, present only during a drag.
    drag: Option<DragListeners>,
}

#[derive(Debug, Clone, Copy)]
struct DragListeners {
    mouse_move: ListenerId,
    mouse_up: ListenerId,
}

#[derive(Debug)]
pub struct OverlayScrollbar {
    config: ScrollbarConfig,
    host: ElementId,
    track: ElementId,
    thumb: ElementId,
    binding: Binding,
    state: InteractionState,
    /// The single pending fade-out timer.
    fade_timer: Option<TimerId>,
    track_hovered: bool,
}

impl OverlayScrollbar {
    /// Create the scrollbar elements, prepend them to `container` and bind
    /// to `content`, which must be a direct child of `container`.
    pub fn attach(
        doc: &mut Document,
        container: ElementId,
        content: ElementId,
        config: ScrollbarConfig,
    ) -> Result<Self, BindError> {
        if !doc.is_connected(container) {
            return Err(BindError::MissingContainer(container));
        }
        if !doc.contains(content) {
            return Err(BindError::MissingContent {
                container,
                attr: config.content_attr.clone(),
            });
        }
        if doc.parent(content) != Some(container) {
            return Err(BindError::NotAChild { container, content });
        }
        let has_host = doc
            .children(container)
            .iter()
            .any(|&child| doc.get(child).is_some_and(|el| el.tag == ELEMENT_TAG));
        if has_host {
            return Err(BindError::AlreadyBound(container));
        }

        let theme = &config.theme;
        let host = doc.create_element(ELEMENT_TAG);
        let track = doc.create_element("div");
        let thumb = doc.create_element("button");

        doc.set_attribute(track, "class", "track");
        doc.set_attribute(thumb, "class", "thumb");
        doc.set_attribute(thumb, "type", "button");
        doc.set_attribute(thumb, "aria-label", config.label.as_str());

        if let Some(el) = doc.get_mut(host) {
            el.style = host_style(theme);
        }
        if let Some(el) = doc.get_mut(track) {
            el.style = track_style();
            el.transitions = track_transitions(theme);
        }
        if let Some(el) = doc.get_mut(thumb) {
            el.style = thumb_style(0.0);
        }

        doc.append_child(host, track);
        doc.append_child(track, thumb);
        doc.prepend_child(container, host);

        let listeners = BoundListeners {
            resize: doc.add_listener(Scope::Window, EventKind::Resize),
            track_down: doc.add_listener(Scope::Element(track), EventKind::MouseDown),
            thumb_down: doc.add_listener(Scope::Element(thumb), EventKind::MouseDown),
            hover: doc.add_listener(Scope::Document, EventKind::MouseMove),
            scroll: Some(doc.add_listener(Scope::Element(content), EventKind::Scroll)),
            drag: None,
        };

        let scrollbar = Self {
            config,
            host,
            track,
            thumb,
            binding: Binding {
                container,
                content,
                listeners,
            },
            state: InteractionState::Idle,
            fade_timer: None,
            track_hovered: false,
        };
        scrollbar.render(doc);

        log::debug!(
            "[scrollbar] attached to container {:?} content {:?}",
            container,
            content
        );
        Ok(scrollbar)
    }

    /// Release every listener, the pending timer and the scrollbar elements.
    /// Returns the number of listeners removed.
    pub fn detach(mut self, doc: &mut Document) -> usize {
        if self.state.is_dragging() {
            self.end_drag(doc);
        }

        let listeners = self.binding.listeners;
        let mut ids = vec![
            listeners.resize,
            listeners.track_down,
            listeners.thumb_down,
            listeners.hover,
        ];
        ids.extend(listeners.scroll);
        if let Some(drag) = listeners.drag {
            ids.extend([drag.mouse_move, drag.mouse_up]);
        }
        let removed = ids
            .into_iter()
            .filter(|&id| doc.remove_listener(id))
            .count();

        if let Some(timer) = self.fade_timer.take() {
            doc.clear_timeout(timer);
        }
        doc.remove(self.host);

        log::debug!(
            "[scrollbar] detached from container {:?}, released {} listeners",
            self.binding.container,
            removed
        );
        removed
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Configuration this scrollbar was attached with.
    pub fn config(&self) -> &ScrollbarConfig {
        &self.config
    }

    /// The injected `overlay-scrollbar` element.
    pub fn host(&self) -> ElementId {
        self.host
    }

    /// Full-height hit region that fades in and out.
    pub fn track(&self) -> ElementId {
        self.track
    }

    /// The draggable handle inside the track.
    pub fn thumb(&self) -> ElementId {
        self.thumb
    }

    /// Element the scrollbar is injected into.
    pub fn container(&self) -> ElementId {
        self.binding.container
    }

    /// Scrollable element the thumb represents.
    pub fn content(&self) -> ElementId {
        self.binding.content
    }

    /// Current interaction state.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// True while the content scroll listener is subscribed.
    pub fn is_tracking_scroll(&self) -> bool {
        self.binding.listeners.scroll.is_some()
    }

    /// Pending fade-out timer, if the track is counting down.
    pub fn fade_timer(&self) -> Option<TimerId> {
        self.fade_timer
    }

    /// True while the pointer is over the track.
    pub fn is_track_hovered(&self) -> bool {
        self.track_hovered
    }

    /// True while the scrollbar's elements are still in the document.
    pub fn is_connected(&self, doc: &Document) -> bool {
        doc.is_connected(self.host)
    }

    /// True while the track carries the `active` marker.
    pub fn is_active(&self, doc: &Document) -> bool {
        doc.has_attribute(self.track, ACTIVE_ATTR)
    }

    /// True while there is nothing to scroll.
    pub fn is_track_hidden(&self, doc: &Document) -> bool {
        doc.is_hidden(self.track)
    }

    /// Current measurements, or `None` when the track is hidden.
    pub fn geometry(&self, doc: &Document) -> Option<Geometry> {
        Geometry::measure(doc, self.binding.content, self.config.theme.min_thumb_height)
    }

    /// Thumb offset from the top of the track.
    pub fn thumb_offset(&self, doc: &Document) -> f32 {
        doc.inline_style(self.thumb)
            .and_then(|s| s.translate_y)
            .unwrap_or(0.0)
    }

    /// Rendered thumb height, 0 while the track is hidden.
    pub fn thumb_height(&self, doc: &Document) -> f32 {
        doc.inline_style(self.thumb)
            .and_then(|s| s.height)
            .unwrap_or(0.0)
    }

    /// True if `id` is one of this scrollbar's registered listeners.
    pub fn owns_listener(&self, id: ListenerId) -> bool {
        let l = &self.binding.listeners;
        id == l.resize
            || id == l.track_down
            || id == l.thumb_down
            || id == l.hover
            || l.scroll == Some(id)
            || l.drag.is_some_and(|d| d.mouse_move == id || d.mouse_up == id)
    }

    /// True if `id` is this scrollbar's fade timer.
    pub fn owns_timer(&self, id: TimerId) -> bool {
        self.fade_timer == Some(id)
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Recompute thumb size and track visibility from the current
    /// measurements. Interaction state is left untouched.
    pub fn render(&self, doc: &mut Document) {
        let geometry = self.geometry(doc);
        doc.set_hidden(self.track, geometry.is_none());

        let thumb_height = geometry.map_or(0.0, |g| g.thumb_height());
        if let Some(style) = doc.inline_style_mut(self.thumb) {
            style.height = Some(thumb_height);
        }

        match geometry {
            Some(g) if !self.state.is_dragging() => {
                let offset = g.thumb_offset_from_scroll_top(doc.scroll_top(self.binding.content));
                self.apply_offset(doc, offset);
            }
            Some(g) => {
                let offset = g.clamp_offset(self.thumb_offset(doc));
                self.apply_offset(doc, offset);
            }
            None => self.apply_offset(doc, 0.0),
        }
    }

    /// Move the thumb and lay out the scrollbar against the container.
    fn apply_offset(&self, doc: &mut Document, offset: f32) {
        if let Some(style) = doc.inline_style_mut(self.thumb) {
            style.translate_y = Some(offset);
        }

        let Some(container) = doc.rect(self.binding.container) else {
            return;
        };
        let theme = &self.config.theme;
        let strip = container.right_strip(theme.track_width());
        let thumb = Rect::new(
            strip.x + theme.track_padding,
            strip.y + offset,
            theme.thumb_width,
            self.thumb_height(doc),
        );
        doc.set_rect(self.host, strip);
        doc.set_rect(self.track, strip);
        doc.set_rect(self.thumb, thumb);
    }

    // -------------------------------------------------------------------------
    // Visibility
    // -------------------------------------------------------------------------

    /// Mark the scrollbar visible and restart the fade-out countdown.
    fn show(&mut self, doc: &mut Document, now: Instant) {
        if let Some(pending) = self.fade_timer.take() {
            doc.clear_timeout(pending);
        }
        if !doc.has_attribute(self.track, ACTIVE_ATTR) {
            doc.set_attribute(self.track, ACTIVE_ATTR, "");
            doc.set_opacity(self.track, 1.0, now);
        }
        self.fade_timer = Some(doc.set_timeout(now, self.config.fade_delay));
    }

    fn fade_out(&mut self, doc: &mut Document, now: Instant) {
        doc.remove_attribute(self.track, ACTIVE_ATTR);
        if !self.state.is_dragging() {
            doc.remove_attribute(self.thumb, ACTIVE_ATTR);
        }
        if !self.track_hovered {
            doc.set_opacity(self.track, 0.0, now);
        }
    }

    /// Handle a fired timer. Returns false if the timer is not ours.
    pub fn on_timer(&mut self, doc: &mut Document, timer: TimerId, now: Instant) -> bool {
        if self.fade_timer != Some(timer) {
            return false;
        }
        self.fade_timer = None;
        self.fade_out(doc, now);
        if self.state == InteractionState::Scrolling {
            self.state = InteractionState::Idle;
        }
        log::trace!("[scrollbar] faded out {:?}", self.host);
        true
    }
}
