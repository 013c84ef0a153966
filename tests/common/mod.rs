//! Shared fixtures for integration tests

use std::sync::Arc;

use termshot::font::{FontFaceSet, Glyph, GlyphFace, LineMetrics};
use termshot::{Config, Scaffold};

/// Fixed-advance face that draws every non-space glyph as a solid block
pub struct BlockFace {
    pub advance: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl GlyphFace for BlockFace {
    fn line_metrics(&self) -> LineMetrics {
        LineMetrics {
            ascent: self.ascent,
            descent: self.descent,
        }
    }

    fn advance(&self, _c: char) -> f32 {
        self.advance
    }

    fn rasterize(&self, c: char) -> Glyph {
        if c == ' ' {
            return Glyph::default();
        }
        let width = self.advance as usize;
        let height = self.ascent as usize;
        Glyph {
            left: 0,
            top: height as i32,
            width,
            height,
            coverage: vec![255; width * height],
        }
    }
}

/// 6px advance, 14px line height
pub fn faces() -> FontFaceSet {
    FontFaceSet::uniform(Arc::new(BlockFace {
        advance: 6.0,
        ascent: 11.0,
        descent: 3.0,
    }))
}

/// Unscaled config with small margins and no shadow
pub fn config() -> Config {
    Config {
        factor: 1.0,
        margin: 10.0,
        padding: 5.0,
        draw_shadow: false,
        ..Config::default()
    }
}

pub fn scaffold(config: &Config) -> Scaffold {
    Scaffold::with_faces(config, faces()).unwrap()
}
