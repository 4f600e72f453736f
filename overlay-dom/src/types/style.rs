use super::{Overflow, Position, UserSelect};

/// A set of declared properties. Used both for inline style and for
/// stylesheet rules; unset fields fall through the cascade.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub position: Option<Position>,
    pub overflow_y: Option<Overflow>,
    /// Whether the host should draw its own scrollbar for this element.
    pub native_scrollbar: Option<bool>,
    pub user_select: Option<UserSelect>,
    pub height: Option<f32>,
    pub translate_y: Option<f32>,
    pub opacity: Option<f32>,
    pub z_index: Option<i16>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn overflow_y(mut self, overflow: Overflow) -> Self {
        self.overflow_y = Some(overflow);
        self
    }

    pub fn native_scrollbar(mut self, visible: bool) -> Self {
        self.native_scrollbar = Some(visible);
        self
    }

    pub fn user_select(mut self, user_select: UserSelect) -> Self {
        self.user_select = Some(user_select);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn z_index(mut self, z: i16) -> Self {
        self.z_index = Some(z);
        self
    }

    /// Overlay `other` on top of `self`: every property set in `other` wins.
    pub fn merge(&mut self, other: &Style) {
        fn take<T: Copy>(dst: &mut Option<T>, src: Option<T>) {
            if src.is_some() {
                *dst = src;
            }
        }
        take(&mut self.position, other.position);
        take(&mut self.overflow_y, other.overflow_y);
        take(&mut self.native_scrollbar, other.native_scrollbar);
        take(&mut self.user_select, other.user_select);
        take(&mut self.height, other.height);
        take(&mut self.translate_y, other.translate_y);
        take(&mut self.opacity, other.opacity);
        take(&mut self.z_index, other.z_index);
    }

    pub fn resolve(&self) -> ComputedStyle {
        ComputedStyle {
            position: self.position.unwrap_or_default(),
            overflow_y: self.overflow_y.unwrap_or_default(),
            native_scrollbar: self.native_scrollbar.unwrap_or(true),
            user_select: self.user_select.unwrap_or_default(),
            height: self.height,
            translate_y: self.translate_y.unwrap_or(0.0),
            opacity: self.opacity.unwrap_or(1.0),
            z_index: self.z_index.unwrap_or(0),
        }
    }
}

/// Final property values after the cascade, with defaults filled in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedStyle {
    pub position: Position,
    pub overflow_y: Overflow,
    pub native_scrollbar: bool,
    pub user_select: UserSelect,
    pub height: Option<f32>,
    pub translate_y: f32,
    pub opacity: f32,
    pub z_index: i16,
}
