//! Glyph painting
//!
//! Walks the rune stream and paints each glyph at a moving pen position,
//! resolving face, colors and underline from the rune's style. Nothing in
//! here fails: unknown style values render with defaults.

use tiny_skia::{PathBuilder, Pixmap, PremultipliedColorU8, Rect, Stroke, Transform};

use super::window::paint;
use crate::core::{Rgb, StyleClass, StyledRune};
use crate::font::{FontFaceSet, FontStyle, Glyph, GlyphFace};

/// Distance of the underline below the baseline, unscaled
const UNDERLINE_OFFSET: f32 = 4.0;

/// Face used for a style class; underline is drawn with the regular face
pub fn font_style_for(class: StyleClass) -> FontStyle {
    match class {
        StyleClass::Bold => FontStyle::Bold,
        StyleClass::Italic => FontStyle::Italic,
        StyleClass::BoldItalic => FontStyle::BoldItalic,
        StyleClass::Regular | StyleClass::Underline => FontStyle::Regular,
    }
}

/// Replacement for glyphs the bundled fonts are known to lack
pub fn substitute_glyph(c: char) -> char {
    match c {
        '✗' | 'ˣ' => '×',
        _ => c,
    }
}

/// Paints runes onto a canvas
pub struct GlyphPainter<'a> {
    pub faces: &'a FontFaceSet,
    pub factor: f32,
    pub line_spacing: f32,
    pub tab_spaces: usize,
    pub default_foreground: Rgb,
}

impl GlyphPainter<'_> {
    /// Paint `runes` starting with the pen at the left text edge `left` and
    /// the first baseline at `baseline`. Returns the final pen position.
    pub fn paint(&self, pixmap: &mut Pixmap, left: f32, baseline: f32, runes: &[StyledRune]) -> (f32, f32) {
        let (mut x, mut y) = (left, baseline);

        for rune in runes {
            let style = rune.style;
            let face = self.faces.face(font_style_for(style.class));
            let metrics = face.line_metrics();
            let w = face.advance(rune.symbol);
            let h = metrics.height();

            if let Some(bg) = style.background {
                if let Some(rect) = Rect::from_xywh(x, y - metrics.ascent, w, h) {
                    pixmap.fill_rect(rect, &paint(bg.into()), Transform::identity(), None);
                }
            }

            let fg = style.foreground_or(self.default_foreground);

            if rune.is_newline() {
                x = left;
                y += h * self.line_spacing;
                continue;
            }
            if rune.is_tab() {
                x += w * self.tab_spaces as f32;
                continue;
            }

            let glyph = face.rasterize(substitute_glyph(rune.symbol));
            blit_glyph(pixmap, x, y, &glyph, fg);

            if style.class.is_underline() {
                self.underline(pixmap, x, y, w, fg);
            }

            x += w;
        }

        (x, y)
    }

    fn underline(&self, pixmap: &mut Pixmap, x: f32, baseline: f32, width: f32, color: Rgb) {
        let y = baseline + self.factor * UNDERLINE_OFFSET;
        let mut pb = PathBuilder::new();
        pb.move_to(x, y);
        pb.line_to(x + width, y);
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: self.factor,
                ..Default::default()
            };
            pixmap.stroke_path(&path, &paint(color.into()), &stroke, Transform::identity(), None);
        }
    }
}

/// Source-over blend of a coverage bitmap in a solid color
fn blit_glyph(pixmap: &mut Pixmap, pen_x: f32, baseline: f32, glyph: &Glyph, color: Rgb) {
    let origin_x = pen_x.round() as i32 + glyph.left;
    let origin_y = baseline.round() as i32 - glyph.top;
    let width = pixmap.width() as i32;
    let height = pixmap.height() as i32;
    let pixels = pixmap.pixels_mut();

    for row in 0..glyph.height {
        let py = origin_y + row as i32;
        if py < 0 || py >= height {
            continue;
        }
        for col in 0..glyph.width {
            let px = origin_x + col as i32;
            if px < 0 || px >= width {
                continue;
            }
            let coverage = glyph.coverage[row * glyph.width + col];
            if coverage == 0 {
                continue;
            }
            let idx = (py * width + px) as usize;
            pixels[idx] = source_over(pixels[idx], color, coverage);
        }
    }
}

fn source_over(dst: PremultipliedColorU8, color: Rgb, alpha: u8) -> PremultipliedColorU8 {
    let a = alpha as u32;
    let inv = 255 - a;
    let mix = |src: u8, dst: u8| ((src as u32 * a + dst as u32 * inv + 127) / 255) as u8;

    PremultipliedColorU8::from_rgba(
        mix(color.r, dst.red()),
        mix(color.g, dst.green()),
        mix(color.b, dst.blue()),
        mix(255, dst.alpha()),
    )
    .unwrap_or(dst)
}
