mod color;
mod enums;
mod style;

pub use color::{Color, Rgb};
pub use enums::{Overflow, Position, UserSelect};
pub use style::{ComputedStyle, Style};
