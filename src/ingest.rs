//! Content ingestion
//!
//! Line wrapping applied while runes are appended to a rune stream.

use crate::core::StyledRune;

/// Insert a synthetic `'\n'` before any rune that would exceed `columns`.
///
/// The column counter starts at zero for every call, so separate calls are
/// wrapped as independent paragraphs. The inserted newline carries the style
/// of the rune that triggered the wrap.
pub fn wrap_runes<I>(runes: I, columns: usize) -> Vec<StyledRune>
where
    I: IntoIterator<Item = StyledRune>,
{
    let runes = runes.into_iter();
    let mut wrapped = Vec::with_capacity(runes.size_hint().0);
    let mut counter = 0usize;

    for rune in runes {
        counter += 1;

        if rune.is_newline() {
            counter = 0;
        } else if counter > columns {
            counter = 0;
            wrapped.push(StyledRune::new('\n', rune.style));
        }

        wrapped.push(rune);
    }

    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rgb, RuneStream, Style};

    fn plain(text: &str) -> Vec<StyledRune> {
        text.chars().map(StyledRune::plain).collect()
    }

    fn text(runes: &[StyledRune]) -> String {
        runes.iter().map(|r| r.symbol).collect()
    }

    #[test]
    fn test_short_line_untouched() {
        let wrapped = wrap_runes(plain("hello"), 10);
        assert_eq!(text(&wrapped), "hello");
    }

    #[test]
    fn test_exact_width_not_wrapped() {
        assert_eq!(text(&wrap_runes(plain("abcd"), 4)), "abcd");
    }

    #[test]
    fn test_three_widths_make_three_lines() {
        let input = "x".repeat(3 * 8);
        let wrapped = wrap_runes(plain(&input), 8);

        let breaks = wrapped.iter().filter(|r| r.is_newline()).count();
        assert_eq!(breaks, 2);

        let mut stream = RuneStream::new();
        stream.extend(wrapped);
        assert_eq!(stream.line_count(), 3);
    }

    #[test]
    fn test_newline_resets_counter() {
        let wrapped = wrap_runes(plain("abc\nabcd"), 4);
        assert_eq!(text(&wrapped), "abc\nabcd");
    }

    #[test]
    fn test_wrap_after_counter_reset() {
        // The rune that triggered the wrap is not counted on the new line
        assert_eq!(text(&wrap_runes(plain("abcdefghij"), 3)), "abc\ndefg\nhij");
    }

    #[test]
    fn test_synthetic_break_carries_rune_style() {
        let red = Style::PLAIN.with_foreground(Rgb::new(255, 0, 0));
        let mut runes = plain("ab");
        runes.push(StyledRune::new('c', red));

        let wrapped = wrap_runes(runes, 2);
        assert_eq!(text(&wrapped), "ab\nc");
        assert_eq!(wrapped[2].style, red);
    }

    #[test]
    fn test_empty_input() {
        assert!(wrap_runes(Vec::new(), 5).is_empty());
    }
}
