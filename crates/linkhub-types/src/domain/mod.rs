mod glyph;
mod link;
mod theme;

pub use glyph::Glyph;
pub use link::Link;
pub use theme::{Rgb, Theme, ThemeId};
