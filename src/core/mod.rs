//! Content Model
//!
//! Platform-independent representation of the text to render:
//! - Rune style (colors, style class, packed word interchange)
//! - Styled runes and the append-only rune stream

mod stream;
mod style;

pub use stream::{RuneStream, StyledRune};
pub use style::{Rgb, Rgba, Style, StyleClass, DEFAULT_FOREGROUND};
