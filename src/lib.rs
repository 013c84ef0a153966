//! Termshot Library
//!
//! Renders styled terminal output into a raster image that looks like a
//! terminal window: background, optional drop shadow, title bar buttons and
//! the text itself.
//!
//! - `core`: Styled runes, the packed style word and the rune stream
//! - `parser`: ANSI SGR tokenizer producing styled runes
//! - `font`: Font directory resolution and glyph faces
//! - `layout`: Text area measurement
//! - `renderer`: Window chrome, glyph painting and canvas clipping
//! - `scaffold`: The rendering session tying it all together

pub mod config;
pub mod core;
pub mod error;
pub mod font;
pub mod ingest;
pub mod layout;
pub mod parser;
pub mod renderer;
pub mod scaffold;
pub mod terminal;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use error::{Error, Result};
pub use scaffold::Scaffold;
