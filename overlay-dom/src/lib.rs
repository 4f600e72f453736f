pub mod animation;
pub mod document;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod listener;
pub mod stylesheet;
pub mod timer;
pub mod transitions;
pub mod types;

pub use document::{Dispatch, Document};
pub use element::{Element, ElementId};
pub use event::{Event, EventKind, MouseButton, WHEEL_STEP};
pub use hit::hit_test;
pub use layout::Rect;
pub use listener::{ListenerId, Scope};
pub use stylesheet::{HeadNode, Rule, Selector, Stylesheet};
pub use timer::TimerId;
pub use transitions::{Easing, TransitionConfig, Transitions};
pub use types::*;
