//! Mapping between content scroll position and thumb position.
//!
//! All values are pixels. A [`Geometry`] only exists while the content
//! overflows and the thumb is shorter than the track, so the ratio between
//! the two ranges is always finite.

use overlay_dom::{Document, ElementId};

/// Proportional thumb size: the visible fraction of the content applied to
/// the track height, rounded to a whole pixel and kept within
/// `[min_thumb_height, client_height]`.
pub fn thumb_height(client_height: f32, scroll_height: f32, min_thumb_height: f32) -> f32 {
    if client_height <= 0.0 || scroll_height <= 0.0 {
        return 0.0;
    }
    (client_height / scroll_height * client_height)
        .round()
        .max(min_thumb_height)
        .min(client_height)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    client_height: f32,
    scroll_height: f32,
    thumb_height: f32,
}

impl Geometry {
    /// Returns `None` when there is nothing to scroll (no overflow) or the
    /// thumb would fill the whole track.
    pub fn new(client_height: f32, scroll_height: f32, min_thumb_height: f32) -> Option<Self> {
        if !client_height.is_finite() || !scroll_height.is_finite() {
            return None;
        }
        if client_height <= 0.0 || scroll_height <= client_height {
            return None;
        }
        let thumb_height = thumb_height(client_height, scroll_height, min_thumb_height);
        if thumb_height >= client_height {
            return None;
        }
        Some(Self {
            client_height,
            scroll_height,
            thumb_height,
        })
    }

    /// Read the current measurements of a content element.
    pub fn measure(doc: &Document, content: ElementId, min_thumb_height: f32) -> Option<Self> {
        let element = doc.get(content)?;
        Self::new(
            element.client_height(),
            element.scroll_height(),
            min_thumb_height,
        )
    }

    /// Visible height of the content, which is also the track height.
    pub fn client_height(&self) -> f32 {
        self.client_height
    }

    /// Total content height.
    pub fn scroll_height(&self) -> f32 {
        self.scroll_height
    }

    /// Thumb height after the minimum is applied.
    pub fn thumb_height(&self) -> f32 {
        self.thumb_height
    }

    /// Largest content scroll position.
    pub fn height_diff(&self) -> f32 {
        self.scroll_height - self.client_height
    }

    /// Pixel range the thumb can move through.
    pub fn scrollable_travel(&self) -> f32 {
        self.client_height - self.thumb_height
    }

    /// Content pixels scrolled per pixel of thumb travel.
    pub fn scroll_ratio(&self) -> f32 {
        self.height_diff() / self.scrollable_travel()
    }

    /// Clamp a thumb offset into `[0, scrollable_travel]`.
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.scrollable_travel())
    }

    /// Clamp a content position into `[0, height_diff]`.
    pub fn clamp_scroll_top(&self, scroll_top: f32) -> f32 {
        scroll_top.clamp(0.0, self.height_diff())
    }

    /// Content position for a thumb offset.
    pub fn scroll_top_from_thumb_offset(&self, offset: f32) -> f32 {
        // Multiply before dividing so the end of travel maps exactly to the
        // end of the content.
        let offset = self.clamp_offset(offset);
        self.clamp_scroll_top(offset * self.height_diff() / self.scrollable_travel())
    }

    /// Thumb offset for a content position.
    pub fn thumb_offset_from_scroll_top(&self, scroll_top: f32) -> f32 {
        let scroll_top = self.clamp_scroll_top(scroll_top);
        self.clamp_offset(scroll_top * self.scrollable_travel() / self.height_diff())
    }

    /// Offset that centers the thumb on a point `y` pixels below the track top.
    pub fn centered_offset(&self, y: f32) -> f32 {
        self.clamp_offset(y - self.thumb_height / 2.0)
    }
}
