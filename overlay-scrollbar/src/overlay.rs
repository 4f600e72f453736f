//! Page-level setup and event routing.
//!
//! [`init`] is the explicit entry point: it installs the page stylesheet
//! and binds one scrollbar per container. The returned [`Overlay`] then
//! receives host events and timer ticks and forwards them to the scrollbar
//! that owns each listener or timer.

use std::time::Instant;

use overlay_dom::{Document, ElementId, Event};

use crate::config::ScrollbarConfig;
use crate::error::BindError;
use crate::scrollbar::OverlayScrollbar;
use crate::stylesheet::inject_stylesheet;

/// All connected elements carrying the configured container attribute.
pub fn find_containers(doc: &Document, config: &ScrollbarConfig) -> Vec<ElementId> {
    doc.query_all_by_attribute(&config.container_attr)
}

/// Install the page stylesheet and attach a scrollbar to each container.
///
/// Containers with broken markup are logged and skipped; the page keeps
/// working without their scrollbar.
pub fn init(doc: &mut Document, containers: &[ElementId], config: ScrollbarConfig) -> Overlay {
    inject_stylesheet(doc, &config);

    let mut overlay = Overlay::new(config);
    for &container in containers {
        if let Err(err) = overlay.bind(doc, container) {
            log::warn!("[overlay] skipping container {container:?}: {err}");
        }
    }
    log::debug!(
        "[overlay] initialized {} of {} containers",
        overlay.scrollbars.len(),
        containers.len()
    );
    overlay
}

#[derive(Debug)]
pub struct Overlay {
    config: ScrollbarConfig,
    scrollbars: Vec<OverlayScrollbar>,
}

impl Overlay {
    pub fn new(config: ScrollbarConfig) -> Self {
        Self {
            config,
            scrollbars: Vec::new(),
        }
    }

    pub fn config(&self) -> &ScrollbarConfig {
        &self.config
    }

    pub fn scrollbars(&self) -> &[OverlayScrollbar] {
        &self.scrollbars
    }

    pub fn scrollbar_for(&self, container: ElementId) -> Option<&OverlayScrollbar> {
        self.scrollbars.iter().find(|s| s.container() == container)
    }

    /// Attach a scrollbar to one container, locating its content child by
    /// the configured content attribute.
    pub fn bind(&mut self, doc: &mut Document, container: ElementId) -> Result<(), BindError> {
        if self.scrollbar_for(container).is_some() {
            return Err(BindError::AlreadyBound(container));
        }
        if !doc.is_connected(container) {
            return Err(BindError::MissingContainer(container));
        }
        let content = doc
            .child_with_attribute(container, &self.config.content_attr)
            .ok_or_else(|| BindError::MissingContent {
                container,
                attr: self.config.content_attr.clone(),
            })?;

        if doc
            .computed_style(container)
            .is_some_and(|s| !s.position.is_positioned())
        {
            log::warn!("[overlay] container {container:?} is not positioned; the scrollbar may overflow it");
        }

        let scrollbar = OverlayScrollbar::attach(doc, container, content, self.config.clone())?;
        self.scrollbars.push(scrollbar);
        Ok(())
    }

    /// Detach and drop the scrollbar of a container.
    pub fn remove(&mut self, doc: &mut Document, container: ElementId) -> bool {
        let Some(index) = self
            .scrollbars
            .iter()
            .position(|s| s.container() == container)
        else {
            return false;
        };
        self.scrollbars.remove(index).detach(doc);
        true
    }

    /// Detach every scrollbar.
    pub fn shutdown(self, doc: &mut Document) {
        for scrollbar in self.scrollbars {
            scrollbar.detach(doc);
        }
    }

    /// Feed one host event through the document, then drain the scroll
    /// events the resulting writes produced.
    pub fn handle_event(&mut self, doc: &mut Document, event: &Event, now: Instant) {
        self.release_disconnected(doc);
        self.deliver(doc, event, now);
        self.flush(doc, now);
    }

    /// Deliver events the document queued on its own, e.g. after a host
    /// wrote a scroll position directly.
    pub fn flush(&mut self, doc: &mut Document, now: Instant) {
        while let Some(queued) = doc.pop_queued() {
            self.deliver(doc, &queued, now);
        }
    }

    fn deliver(&mut self, doc: &mut Document, event: &Event, now: Instant) {
        let dispatch = doc.dispatch(event);
        for listener in dispatch.listeners {
            // A handler earlier in this dispatch may have removed the listener.
            if !doc.has_listener(listener) {
                continue;
            }
            if let Some(scrollbar) = self
                .scrollbars
                .iter_mut()
                .find(|s| s.owns_listener(listener))
            {
                scrollbar.handle(doc, listener, event, dispatch.target, now);
            }
        }
    }

    /// Fire every timer due at `now`.
    pub fn tick(&mut self, doc: &mut Document, now: Instant) {
        self.release_disconnected(doc);
        for timer in doc.take_due_timers(now) {
            if let Some(scrollbar) = self.scrollbars.iter_mut().find(|s| s.owns_timer(timer)) {
                scrollbar.on_timer(doc, timer, now);
            }
        }
        self.flush(doc, now);
    }

    /// Detach scrollbars whose elements were removed from the document
    /// along with their container. Returns how many were dropped.
    pub fn release_disconnected(&mut self, doc: &mut Document) -> usize {
        let (live, dead): (Vec<_>, Vec<_>) = std::mem::take(&mut self.scrollbars)
            .into_iter()
            .partition(|s| s.is_connected(doc));
        self.scrollbars = live;

        let released = dead.len();
        for scrollbar in dead {
            log::debug!(
                "[overlay] container {:?} left the document",
                scrollbar.container()
            );
            scrollbar.detach(doc);
        }
        released
    }

    /// When the host should call [`Overlay::tick`] next.
    pub fn next_deadline(&self, doc: &Document) -> Option<Instant> {
        doc.next_deadline()
    }
}
