pub mod color;
pub mod dom;
pub mod easing;
pub mod number_format;
pub mod types;

pub use color::CssColor;
pub use easing::{Easing, clamp_progress};
pub use number_format::{NumberFormat, is_whole};
pub use types::{ElementId, Millis};
