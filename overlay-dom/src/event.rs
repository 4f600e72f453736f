use crate::element::ElementId;

/// Wheel notches in a terminal are translated to this many pixels.
pub const WHEEL_STEP: f32 = 3.0;

/// Input and notification events flowing through a [`Document`](crate::Document).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Pointer button pressed at page coordinates
    MouseDown { x: f32, y: f32, button: MouseButton },
    /// Pointer moved (with or without a button held)
    MouseMove { x: f32, y: f32 },
    /// Pointer button released
    MouseUp { x: f32, y: f32, button: MouseButton },
    /// Wheel input; the document scrolls the innermost scrollable element
    Wheel { x: f32, y: f32, delta_y: f32 },
    /// An element's scroll position changed
    Scroll { target: ElementId },
    /// Viewport resized
    Resize { width: f32, height: f32 },
}

impl Event {
    /// The listener kind this event is delivered to, if any.
    pub fn kind(&self) -> Option<EventKind> {
        match self {
            Event::MouseDown { .. } => Some(EventKind::MouseDown),
            Event::MouseMove { .. } => Some(EventKind::MouseMove),
            Event::MouseUp { .. } => Some(EventKind::MouseUp),
            Event::Scroll { .. } => Some(EventKind::Scroll),
            Event::Resize { .. } => Some(EventKind::Resize),
            Event::Wheel { .. } => None,
        }
    }

    /// Pointer position for pointer events.
    pub fn position(&self) -> Option<(f32, f32)> {
        match *self {
            Event::MouseDown { x, y, .. }
            | Event::MouseMove { x, y }
            | Event::MouseUp { x, y, .. }
            | Event::Wheel { x, y, .. } => Some((x, y)),
            Event::Scroll { .. } | Event::Resize { .. } => None,
        }
    }

    /// Translate a terminal event, treating one cell as one pixel.
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as CtEvent, MouseEventKind};
        match event {
            CtEvent::Mouse(mouse) => {
                let x = mouse.column as f32;
                let y = mouse.row as f32;
                match mouse.kind {
                    MouseEventKind::Down(button) => Some(Event::MouseDown {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::Up(button) => Some(Event::MouseUp {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                        Some(Event::MouseMove { x, y })
                    }
                    MouseEventKind::ScrollDown => Some(Event::Wheel {
                        x,
                        y,
                        delta_y: WHEEL_STEP,
                    }),
                    MouseEventKind::ScrollUp => Some(Event::Wheel {
                        x,
                        y,
                        delta_y: -WHEEL_STEP,
                    }),
                    _ => None,
                }
            }
            CtEvent::Resize(width, height) => Some(Event::Resize {
                width: *width as f32,
                height: *height as f32,
            }),
            _ => None,
        }
    }
}

/// Event categories a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    MouseDown,
    MouseMove,
    MouseUp,
    Scroll,
    Resize,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub fn is_primary(self) -> bool {
        self == MouseButton::Left
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
