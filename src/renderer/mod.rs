//! Renderer Module
//!
//! Turns measured content into pixels: window chrome and shadow, the glyph
//! draw loop, and the optional transparent-border clip. Uses tiny-skia for
//! paths and compositing and fontdue coverage bitmaps for glyphs.

mod blur;
mod clip;
mod glyph;
mod window;

pub use blur::stack_blur;
pub use clip::{clip_canvas, content_bounds};
pub use glyph::{font_style_for, substitute_glyph, GlyphPainter};
pub use window::{Shadow, WindowCanvas, WindowChrome};
