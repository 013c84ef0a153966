//! Styled text tokenizer
//!
//! Converts a byte stream carrying ANSI SGR escapes into styled runes.
//! The byte-level state machine is `vte`; this module only interprets the
//! printable characters, the `\n`/`\t` controls and SGR parameters.

mod sgr;
mod tokenizer;

pub use sgr::SgrState;
pub use tokenizer::{parse_bytes, parse_stream, Tokenizer};
