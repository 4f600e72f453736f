//! Overlay scrollbars for [`overlay_dom`] documents.
//!
//! A container marked with `data-overlay-container` holding one child
//! marked `data-overlay-content` gets a thin, auto-hiding scrollbar drawn
//! over the content's right edge:
//!
//! - the thumb follows the content's scroll position,
//! - dragging the thumb scrolls the content,
//! - pressing the track jumps there,
//! - the track fades out after a short period without activity.

pub mod config;
pub mod error;
pub mod geometry;
pub mod overlay;
pub mod scrollbar;
pub mod state;
pub mod stylesheet;

pub use config::{
    ACTIVE_ATTR, CONTAINER_ATTR, CONTENT_ATTR, ELEMENT_TAG, ScrollbarConfig, ScrollbarTheme,
};
pub use error::BindError;
pub use geometry::{Geometry, thumb_height};
pub use overlay::{Overlay, find_containers, init};
pub use scrollbar::{Appearance, OverlayScrollbar};
pub use state::InteractionState;
pub use stylesheet::{STYLE_END_MARKER, STYLE_START_MARKER, inject_stylesheet, page_stylesheet};
