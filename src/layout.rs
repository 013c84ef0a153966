//! Content measurement
//!
//! Computes the pixel size the text area needs before any canvas exists.

use crate::core::RuneStream;
use crate::font::{measure_str, GlyphFace};

/// Glyph used to approximate a fixed-width column grid
const FILLER_GLYPH: char = 'a';

/// Pixel size of the text area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentSize {
    pub width: f32,
    pub height: f32,
}

/// Measure `content` with the regular face.
///
/// With `columns == 0` the width is the widest line. With a fixed column
/// count the width is that of `columns` filler glyphs, whatever the lines
/// actually hold.
pub fn measure_content(
    content: &RuneStream,
    regular: &dyn GlyphFace,
    columns: usize,
    line_spacing: f32,
) -> ContentSize {
    let lines = content.lines();

    let width = match columns {
        0 => lines
            .iter()
            .map(|line| measure_str(regular, line))
            .fold(0.0, f32::max),
        n => measure_str(regular, &FILLER_GLYPH.to_string().repeat(n)),
    };

    ContentSize {
        width,
        height: content_height(regular, lines.len(), line_spacing),
    }
}

/// `font_height * ((lines - 1) * line_spacing + 1)`; never less than one line
pub fn content_height(regular: &dyn GlyphFace, line_count: usize, line_spacing: f32) -> f32 {
    let font_height = regular.line_metrics().height();
    let extra_lines = line_count.saturating_sub(1) as f32;
    font_height * (extra_lines * line_spacing + 1.0)
}
