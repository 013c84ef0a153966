//! Synthetic faces for unit tests

use crate::font::{Glyph, GlyphFace, LineMetrics};

/// Monospace face that draws every glyph as a solid box
#[derive(Debug, Clone, Copy)]
pub struct BoxFace {
    advance: f32,
    metrics: LineMetrics,
}

impl BoxFace {
    pub fn new(advance: f32, ascent: f32, descent: f32) -> Self {
        Self {
            advance,
            metrics: LineMetrics { ascent, descent },
        }
    }
}

impl GlyphFace for BoxFace {
    fn line_metrics(&self) -> LineMetrics {
        self.metrics
    }

    fn advance(&self, _c: char) -> f32 {
        self.advance
    }

    fn rasterize(&self, c: char) -> Glyph {
        if c == ' ' {
            return Glyph::default();
        }
        let width = self.advance as usize;
        let height = self.metrics.ascent as usize;
        Glyph {
            left: 0,
            top: height as i32,
            width,
            height,
            coverage: vec![255; width * height],
        }
    }
}
