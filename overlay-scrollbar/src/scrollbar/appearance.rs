use std::time::Instant;

use overlay_dom::{Color, Document, Rect, Rgb};

use super::OverlayScrollbar;
use crate::config::ACTIVE_ATTR;

/// What a host should paint for one scrollbar at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub track: Rect,
    pub thumb: Rect,
    /// Track opacity, applied to everything inside it.
    pub opacity: f32,
    pub fill: Color,
    pub border: Color,
    pub border_width: f32,
    pub border_radius: f32,
    /// Hovered, pressed or active.
    pub highlighted: bool,
}

impl Appearance {
    /// Thumb fill composited over an opaque backdrop.
    pub fn fill_over(&self, backdrop: Rgb) -> Rgb {
        self.fill.fade(self.opacity).over(backdrop)
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

impl OverlayScrollbar {
    /// Resolve the scrollbar's look at `now`. `None` while the track is
    /// hidden because there is nothing to scroll.
    pub fn appearance(&self, doc: &Document, now: Instant) -> Option<Appearance> {
        if !doc.is_rendered(self.track) {
            return None;
        }
        let track = doc.rect(self.track)?;
        let thumb = doc.rect(self.thumb)?;

        let opacity = doc.opacity_at(self.track, now).unwrap_or(0.0);
        let highlighted = doc.is_hovered(self.thumb)
            || doc.is_pressed(self.thumb)
            || doc.has_attribute(self.thumb, ACTIVE_ATTR)
            || self.state.is_dragging();

        let theme = &self.config.theme;
        let (fill, border) = if highlighted {
            (theme.thumb_fill_active, theme.thumb_border_active)
        } else {
            (theme.thumb_fill, theme.thumb_border)
        };

        Some(Appearance {
            track,
            thumb,
            opacity,
            fill,
            border,
            border_width: theme.border_width,
            border_radius: theme.border_radius,
            highlighted,
        })
    }
}
