//! Font Faces
//!
//! A face answers the three questions the renderer asks: how tall is a line,
//! how far does a glyph advance, and what coverage bitmap does it draw.
//! Uses fontdue for rasterization; there is no shaping, every glyph is
//! placed by its own advance width.

use std::fmt;
use std::sync::Arc;

use fontdue::{Font, FontSettings};

use super::FontError;

/// Vertical line metrics in whole pixels.
///
/// TrueType tooling usually reports these in 26.6 fixed point; fontdue gives
/// floating-point pixels instead. Both are truncated to whole pixels when a
/// face is loaded, which is what shifting 26.6 values right by 6 would do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    /// Distance from the baseline to the top of the line
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the line (positive)
    pub descent: f32,
}

impl LineMetrics {
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// Coverage bitmap of a single glyph
#[derive(Debug, Clone, Default)]
pub struct Glyph {
    /// Horizontal offset from the pen position to the bitmap's left edge
    pub left: i32,
    /// Distance from the baseline up to the bitmap's top edge
    pub top: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major coverage, one byte per pixel
    pub coverage: Vec<u8>,
}

/// Source of glyph metrics and bitmaps for one font variant.
///
/// Faces are immutable once built and may be shared across rendering
/// sessions.
pub trait GlyphFace: Send + Sync {
    fn line_metrics(&self) -> LineMetrics;

    /// Horizontal advance of `c` in pixels
    fn advance(&self, c: char) -> f32;

    fn rasterize(&self, c: char) -> Glyph;
}

/// Total advance of `text` in whole pixels
pub fn measure_str(face: &dyn GlyphFace, text: &str) -> f32 {
    text.chars().map(|c| face.advance(c)).sum::<f32>().floor()
}

/// A TrueType face rasterized by fontdue at a fixed pixel size
pub struct FontFace {
    font: Font,
    px: f32,
    metrics: LineMetrics,
}

impl FontFace {
    /// Parse TrueType data and configure it for `size` points at `dpi`
    pub fn from_bytes(data: &[u8], size: f32, dpi: f32) -> Result<Self, String> {
        let px = size * dpi / 72.0;
        let font = Font::from_bytes(
            data,
            FontSettings {
                scale: px,
                ..FontSettings::default()
            },
        )
        .map_err(str::to_owned)?;

        let line = font
            .horizontal_line_metrics(px)
            .ok_or_else(|| "No horizontal line metrics".to_string())?;

        let metrics = LineMetrics {
            ascent: line.ascent.floor(),
            descent: (-line.descent).floor(),
        };

        Ok(Self { font, px, metrics })
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFace")
            .field("px", &self.px)
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl GlyphFace for FontFace {
    fn line_metrics(&self) -> LineMetrics {
        self.metrics
    }

    fn advance(&self, c: char) -> f32 {
        self.font.metrics(c, self.px).advance_width
    }

    fn rasterize(&self, c: char) -> Glyph {
        let (metrics, coverage) = self.font.rasterize(c, self.px);
        Glyph {
            left: metrics.xmin,
            top: metrics.ymin + metrics.height as i32,
            width: metrics.width,
            height: metrics.height,
            coverage,
        }
    }
}

/// The four font variants a rendering session needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub const ALL: [FontStyle; 4] = [
        FontStyle::Regular,
        FontStyle::Bold,
        FontStyle::Italic,
        FontStyle::BoldItalic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FontStyle::Regular => "Regular",
            FontStyle::Bold => "Bold",
            FontStyle::Italic => "Italic",
            FontStyle::BoldItalic => "BoldItalic",
        }
    }

    /// File name suffix identifying this variant, e.g. `-Bold.ttf`
    pub fn file_suffix(self) -> String {
        format!("-{}.ttf", self.name())
    }

    fn index(self) -> usize {
        match self {
            FontStyle::Regular => 0,
            FontStyle::Bold => 1,
            FontStyle::Italic => 2,
            FontStyle::BoldItalic => 3,
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Regular, bold, italic and bold-italic faces of one font family
#[derive(Clone)]
pub struct FontFaceSet {
    faces: [Arc<dyn GlyphFace>; 4],
}

impl FontFaceSet {
    pub fn new(
        regular: Arc<dyn GlyphFace>,
        bold: Arc<dyn GlyphFace>,
        italic: Arc<dyn GlyphFace>,
        bold_italic: Arc<dyn GlyphFace>,
    ) -> Self {
        Self {
            faces: [regular, bold, italic, bold_italic],
        }
    }

    /// Use the same face for every variant
    pub fn uniform(face: Arc<dyn GlyphFace>) -> Self {
        Self::new(face.clone(), face.clone(), face.clone(), face)
    }

    pub fn face(&self, style: FontStyle) -> &dyn GlyphFace {
        self.faces[style.index()].as_ref()
    }

    pub fn regular(&self) -> &dyn GlyphFace {
        self.face(FontStyle::Regular)
    }

    pub fn set_face(&mut self, style: FontStyle, face: Arc<dyn GlyphFace>) {
        self.faces[style.index()] = face;
    }

    /// Parse four TrueType blobs into faces of the same size and DPI
    pub fn from_bytes(
        fonts: [(&[u8], &str); 4],
        size: f32,
        dpi: f32,
    ) -> Result<Self, FontError> {
        let load = |style: FontStyle, (data, name): (&[u8], &str)| {
            FontFace::from_bytes(data, size, dpi)
                .map(|face| Arc::new(face) as Arc<dyn GlyphFace>)
                .map_err(|reason| FontError::Parse {
                    style,
                    path: name.into(),
                    reason,
                })
        };

        let [regular, bold, italic, bold_italic] = fonts;
        Ok(Self::new(
            load(FontStyle::Regular, regular)?,
            load(FontStyle::Bold, bold)?,
            load(FontStyle::Italic, italic)?,
            load(FontStyle::BoldItalic, bold_italic)?,
        ))
    }
}

impl fmt::Debug for FontFaceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFaceSet")
            .field("regular", &self.regular().line_metrics())
            .finish_non_exhaustive()
    }
}
