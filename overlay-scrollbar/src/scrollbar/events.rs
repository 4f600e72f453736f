//! Event handlers for the scrollbar state machine.

use std::time::Instant;

use overlay_dom::{
    Document, ElementId, Event, EventKind, ListenerId, MouseButton, Scope, UserSelect,
};

use super::{DragListeners, OverlayScrollbar};
use crate::config::ACTIVE_ATTR;
use crate::state::InteractionState;

impl OverlayScrollbar {
    /// Route an event delivered to one of this scrollbar's listeners.
    ///
    /// `target` is the element the event was aimed at. Returns false if the
    /// listener does not belong to this scrollbar.
    pub fn handle(
        &mut self,
        doc: &mut Document,
        listener: ListenerId,
        event: &Event,
        target: Option<ElementId>,
        now: Instant,
    ) -> bool {
        let listeners = self.binding.listeners;

        if listener == listeners.resize {
            self.on_resize(doc);
        } else if listeners.scroll == Some(listener) {
            self.on_scroll(doc, now);
        } else if listener == listeners.thumb_down {
            if let Event::MouseDown { y, button, .. } = *event {
                self.on_thumb_down(doc, y, button, now);
            }
        } else if listener == listeners.track_down {
            if let Event::MouseDown { y, button, .. } = *event {
                self.on_track_down(doc, target, y, button);
            }
        } else if listener == listeners.hover {
            self.on_pointer_move(doc, now);
        } else if listeners.drag.is_some_and(|d| d.mouse_move == listener) {
            if let Event::MouseMove { y, .. } = *event {
                self.on_drag_move(doc, y, now);
            }
        } else if listeners.drag.is_some_and(|d| d.mouse_up == listener) {
            self.end_drag(doc);
        } else {
            return false;
        }
        true
    }

    fn on_resize(&mut self, doc: &mut Document) {
        self.render(doc);
    }

    /// Content scrolled: follow it with the thumb.
    fn on_scroll(&mut self, doc: &mut Document, now: Instant) {
        let Some(geometry) = self.geometry(doc) else {
            return;
        };
        let scroll_top = doc.scroll_top(self.binding.content);
        let offset = geometry.thumb_offset_from_scroll_top(scroll_top);
        self.apply_offset(doc, offset);

        self.state = InteractionState::Scrolling;
        self.show(doc, now);
        log::trace!("[scrollbar] scroll_top {scroll_top} -> thumb offset {offset}");
    }

    /// Fade the track in while hovered and back out when the pointer leaves,
    /// unless scrolling still holds it active.
    fn on_pointer_move(&mut self, doc: &mut Document, now: Instant) {
        let hovered = doc.is_hovered(self.track);
        if hovered == self.track_hovered {
            return;
        }
        self.track_hovered = hovered;
        let target = if hovered || self.is_active(doc) { 1.0 } else { 0.0 };
        doc.set_opacity(self.track, target, now);
        log::trace!("[scrollbar] track hovered: {hovered}");
    }

    /// Primary press on the thumb starts a drag.
    fn on_thumb_down(&mut self, doc: &mut Document, y: f32, button: MouseButton, now: Instant) {
        if !button.is_primary() || self.state.is_dragging() {
            return;
        }
        if self.geometry(doc).is_none() {
            return;
        }
        let Some(container) = doc.rect(self.binding.container) else {
            return;
        };

        let grab_offset = y - container.top() - self.thumb_offset(doc);

        let content = self.binding.content;
        if let Some(scroll) = self.binding.listeners.scroll.take() {
            doc.remove_listener(scroll);
        }
        if let Some(style) = doc.inline_style_mut(content) {
            style.user_select = Some(UserSelect::None);
        }
        self.binding.listeners.drag = Some(DragListeners {
            mouse_move: doc.add_listener(Scope::Document, EventKind::MouseMove),
            mouse_up: doc.add_listener(Scope::Document, EventKind::MouseUp),
        });
        doc.set_attribute(self.thumb, ACTIVE_ATTR, "");

        self.state = InteractionState::Dragging { grab_offset };
        self.show(doc, now);
        log::debug!("[scrollbar] drag start, grab offset {grab_offset}");
    }

    fn on_drag_move(&mut self, doc: &mut Document, y: f32, now: Instant) {
        let InteractionState::Dragging { grab_offset } = self.state else {
            return;
        };
        let Some(geometry) = self.geometry(doc) else {
            return;
        };
        let Some(container) = doc.rect(self.binding.container) else {
            return;
        };

        let offset = geometry.clamp_offset(y - container.top() - grab_offset);
        self.apply_offset(doc, offset);
        doc.set_scroll_top(
            self.binding.content,
            geometry.scroll_top_from_thumb_offset(offset),
        );

        self.show(doc, now);
        log::trace!("[scrollbar] drag to offset {offset}");
    }

    /// Pointer released anywhere: hand scroll tracking back to the content.
    pub(super) fn end_drag(&mut self, doc: &mut Document) {
        if let Some(drag) = self.binding.listeners.drag.take() {
            doc.remove_listener(drag.mouse_move);
            doc.remove_listener(drag.mouse_up);
        }

        let content = self.binding.content;
        if self.binding.listeners.scroll.is_none() && doc.contains(content) {
            self.binding.listeners.scroll =
                Some(doc.add_listener(Scope::Element(content), EventKind::Scroll));
        }
        if let Some(style) = doc.inline_style_mut(content) {
            style.user_select = Some(UserSelect::Auto);
        }
        doc.remove_attribute(self.thumb, ACTIVE_ATTR);

        self.state = InteractionState::Idle;
        log::debug!("[scrollbar] drag end");
    }

    /// Primary press on the track (not the thumb) centers the thumb on the
    /// pointer and scrolls there in one step.
    fn on_track_down(
        &mut self,
        doc: &mut Document,
        target: Option<ElementId>,
        y: f32,
        button: MouseButton,
    ) {
        if !button.is_primary() || self.state.is_dragging() {
            return;
        }
        if target.is_some_and(|t| doc.is_ancestor_or_self(self.thumb, t)) {
            return;
        }
        let Some(geometry) = self.geometry(doc) else {
            return;
        };
        let Some(container) = doc.rect(self.binding.container) else {
            return;
        };

        self.state = InteractionState::TrackClicking;
        let offset = geometry.centered_offset(y - container.top());
        self.apply_offset(doc, offset);
        doc.set_scroll_top(
            self.binding.content,
            geometry.scroll_top_from_thumb_offset(offset),
        );
        self.state = InteractionState::Idle;

        log::debug!("[scrollbar] track jump to offset {offset}");
    }
}
