/// Interaction mode of a scrollbar. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Content scrolled recently; waiting for the fade timer.
    Scrolling,
    /// Thumb held with the primary button. `grab_offset` is the distance
    /// from the pointer to the thumb's top edge, in container coordinates.
    Dragging { grab_offset: f32 },
    /// Transient while a track press jumps the thumb.
    TrackClicking,
}

impl InteractionState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, InteractionState::Dragging { .. })
    }
}
