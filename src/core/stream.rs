//! Styled Rune Stream
//!
//! The content model: an ordered, append-only sequence of characters, each
//! carrying its decoded style. `'\n'` and `'\t'` are kept as control runes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::style::Style;

/// A single character and its visual style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledRune {
    pub symbol: char,
    pub style: Style,
}

impl StyledRune {
    pub fn new(symbol: char, style: Style) -> Self {
        Self { symbol, style }
    }

    /// Create a rune with no explicit colors and the regular class
    pub fn plain(symbol: char) -> Self {
        Self::new(symbol, Style::PLAIN)
    }

    /// Build a rune from the packed 64-bit interchange word
    pub fn from_word(symbol: char, word: u64) -> Self {
        Self::new(symbol, Style::from_word(word))
    }

    pub fn is_newline(&self) -> bool {
        self.symbol == '\n'
    }

    pub fn is_tab(&self) -> bool {
        self.symbol == '\t'
    }
}

/// Append-only sequence of styled runes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuneStream {
    runes: Vec<StyledRune>,
}

impl RuneStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.runes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    pub fn runes(&self) -> &[StyledRune] {
        &self.runes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StyledRune> {
        self.runes.iter()
    }

    /// Append runes in order
    pub fn extend<I: IntoIterator<Item = StyledRune>>(&mut self, runes: I) {
        self.runes.extend(runes);
    }

    /// Plain text of every line, split on `'\n'`.
    ///
    /// A single trailing newline does not start an extra empty line; an
    /// empty stream is one empty line.
    pub fn lines(&self) -> Vec<String> {
        let text = self.to_string();
        let text = text.strip_suffix('\n').unwrap_or(&text);
        text.split('\n').map(str::to_owned).collect()
    }

    pub fn line_count(&self) -> usize {
        self.lines().len()
    }
}

impl fmt::Display for RuneStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for rune in &self.runes {
            f.write_char(rune.symbol)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a RuneStream {
    type Item = &'a StyledRune;
    type IntoIter = std::slice::Iter<'a, StyledRune>;

    fn into_iter(self) -> Self::IntoIter {
        self.runes.iter()
    }
}
