//! Fonts
//!
//! Loads the regular, bold, italic and bold-italic faces used for rendering.
//! Uses fontdue for simple, fast glyph rasterization.

mod face;
mod resolver;

use std::io;
use std::path::PathBuf;

pub use face::{measure_str, FontFace, FontFaceSet, FontStyle, Glyph, GlyphFace, LineMetrics};
pub use resolver::{
    load_font_set, load_font_set_or_default, load_system_font_set, match_font_names,
    resolve_font_files, FontFiles,
};

/// Font-related errors
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("Failed to read font directory {}: {source}", dir.display())]
    ReadDirectory {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Multiple files found for {style} style: {first} and {second}")]
    Duplicate {
        style: FontStyle,
        first: String,
        second: String,
    },

    #[error("Missing required font file: no file matching *-{style}.ttf found in {}", dir.display())]
    Missing { style: FontStyle, dir: PathBuf },

    #[error("Failed to read {style} font {}: {source}", path.display())]
    ReadFile {
        style: FontStyle,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {style} font {}: {reason}", path.display())]
    Parse {
        style: FontStyle,
        path: PathBuf,
        reason: String,
    },

    #[error("Font directory {} is unavailable and no system monospace font was found", dir.display())]
    NoFontFound { dir: PathBuf },
}
