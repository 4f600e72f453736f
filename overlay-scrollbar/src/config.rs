//! Scrollbar configuration types.

use std::time::Duration;

use overlay_dom::{Color, Easing, TransitionConfig};

/// Attribute marking a container that should get an overlay scrollbar.
pub const CONTAINER_ATTR: &str = "data-overlay-container";
/// Attribute marking the scrollable content inside a container.
pub const CONTENT_ATTR: &str = "data-overlay-content";
/// Tag of the injected scrollbar host element.
pub const ELEMENT_TAG: &str = "overlay-scrollbar";
/// Attribute set on track and thumb while the scrollbar is shown.
pub const ACTIVE_ATTR: &str = "active";

/// Configuration shared by every scrollbar created by one [`Overlay`](crate::Overlay).
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollbarConfig {
    /// Inactivity interval after which the track fades out.
    pub fade_delay: Duration,

    /// Accessible label of the thumb.
    pub label: String,

    /// Attribute used to discover containers.
    pub container_attr: String,

    /// Attribute used to find the content element inside a container.
    pub content_attr: String,

    pub theme: ScrollbarTheme,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            fade_delay: Duration::from_millis(100),
            label: "Overlay scrollbar".to_string(),
            container_attr: CONTAINER_ATTR.to_string(),
            content_attr: CONTENT_ATTR.to_string(),
            theme: ScrollbarTheme::default(),
        }
    }
}

impl ScrollbarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inactivity interval before the track fades out.
    pub fn fade_delay(mut self, delay: Duration) -> Self {
        self.fade_delay = delay;
        self
    }

    /// Set the thumb's accessible label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Use different markup attributes for containers and content.
    pub fn attributes(mut self, container: impl Into<String>, content: impl Into<String>) -> Self {
        self.container_attr = container.into();
        self.content_attr = content.into();
        self
    }

    pub fn theme(mut self, theme: ScrollbarTheme) -> Self {
        self.theme = theme;
        self
    }
}

/// The scrollbar's own visual surface, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollbarTheme {
    /// Horizontal padding on each side of the thumb inside the track.
    pub track_padding: f32,
    pub thumb_width: f32,
    pub min_thumb_height: f32,
    pub border_width: f32,
    pub border_radius: f32,
    /// Stacking order of the host over the content.
    pub z_index: i16,
    /// Track opacity transition.
    pub fade: TransitionConfig,
    pub thumb_fill: Color,
    pub thumb_border: Color,
    /// Thumb colors while hovered, pressed or active.
    pub thumb_fill_active: Color,
    pub thumb_border_active: Color,
}

impl Default for ScrollbarTheme {
    fn default() -> Self {
        Self {
            track_padding: 4.8,
            thumb_width: 10.0,
            min_thumb_height: 16.0,
            border_width: 1.0,
            border_radius: 15.0,
            z_index: 20,
            fade: TransitionConfig::new(Duration::from_millis(300), Easing::Ease),
            thumb_fill: Color::rgba(0, 0, 0, 0.3),
            thumb_border: Color::rgba(255, 255, 255, 0.3),
            thumb_fill_active: Color::rgba(140, 140, 140, 0.5),
            thumb_border_active: Color::rgba(255, 255, 255, 0.4),
        }
    }
}

impl ScrollbarTheme {
    /// One-cell-wide thumb for character grids.
    pub fn terminal() -> Self {
        Self {
            track_padding: 0.0,
            thumb_width: 1.0,
            min_thumb_height: 1.0,
            border_width: 0.0,
            border_radius: 0.0,
            thumb_fill: Color::rgba(90, 90, 110, 0.8),
            thumb_fill_active: Color::rgba(170, 170, 200, 0.9),
            ..Self::default()
        }
    }

    /// Full width of the track, padding included.
    pub fn track_width(&self) -> f32 {
        self.thumb_width + 2.0 * self.track_padding
    }
}
