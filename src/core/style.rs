//! Rune Style
//!
//! The visual attributes attached to every rune: optional foreground and
//! background colors plus a single style class.
//!
//! Styles are exchanged with other tools as a packed 64-bit word:
//!
//! | bits  | meaning                                            |
//! |-------|----------------------------------------------------|
//! | 0     | foreground color set                               |
//! | 1     | background color set                               |
//! | 2-4   | style class (0 regular, 1 bold, 2 italic, 3 bold   |
//! |       | italic, 4 underline)                               |
//! | 8-31  | foreground RGB (R low byte, B high byte)           |
//! | 32-55 | background RGB, same layout                        |
//!
//! The word is decoded once into a [`Style`] and never re-masked while
//! rendering.

use serde::{Deserialize, Serialize};

const FOREGROUND_FLAG: u64 = 0x01;
const BACKGROUND_FLAG: u64 = 0x02;
const CLASS_SHIFT: u32 = 2;
const CLASS_MASK: u64 = 0x07;
const FOREGROUND_SHIFT: u32 = 8;
const BACKGROUND_SHIFT: u32 = 32;
const RGB_MASK: u64 = 0x00FF_FFFF;

/// 24-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode a 24-bit color field (R in the low byte)
    pub fn from_field(field: u32) -> Self {
        Self {
            r: (field & 0xFF) as u8,
            g: ((field >> 8) & 0xFF) as u8,
            b: ((field >> 16) & 0xFF) as u8,
        }
    }

    /// Encode as a 24-bit color field (R in the low byte)
    pub fn to_field(self) -> u32 {
        self.r as u32 | (self.g as u32) << 8 | (self.b as u32) << 16
    }

    /// Convert a 256-color index to RGB
    /// This implements the standard xterm 256-color palette
    pub fn from_ansi_index(index: u8) -> Self {
        let (r, g, b) = match index {
            0 => (0, 0, 0),
            1 => (205, 0, 0),
            2 => (0, 205, 0),
            3 => (205, 205, 0),
            4 => (0, 0, 238),
            5 => (205, 0, 205),
            6 => (0, 205, 205),
            7 => (229, 229, 229),
            8 => (127, 127, 127),
            9 => (255, 0, 0),
            10 => (0, 255, 0),
            11 => (255, 255, 0),
            12 => (92, 92, 255),
            13 => (255, 0, 255),
            14 => (0, 255, 255),
            15 => (255, 255, 255),
            // 216 color cube (16-231)
            16..=231 => {
                let n = index - 16;
                let to_rgb = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
                (to_rgb(n / 36), to_rgb((n % 36) / 6), to_rgb(n % 6))
            }
            // Grayscale (232-255)
            232..=255 => {
                let gray = 8 + (index - 232) * 10;
                (gray, gray, gray)
            }
        };
        Self { r, g, b }
    }
}

/// sRGB color with straight (non-premultiplied) alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgb> for Rgba {
    fn from(c: Rgb) -> Self {
        Self::new(c.r, c.g, c.b, 255)
    }
}

/// Neutral light gray used when a rune carries no foreground color
pub const DEFAULT_FOREGROUND: Rgb = Rgb::new(211, 211, 211);

/// Font variant and decoration of a rune.
///
/// This is a value, not a set of flags: a rune is either bold, italic, bold
/// italic, underlined, or regular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StyleClass {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
    Underline,
}

impl StyleClass {
    /// Decode the 3-bit class field. Values 5-7 are unassigned and fall back
    /// to `Regular`.
    pub fn from_bits(bits: u8) -> Self {
        match bits {
            1 => StyleClass::Bold,
            2 => StyleClass::Italic,
            3 => StyleClass::BoldItalic,
            4 => StyleClass::Underline,
            _ => StyleClass::Regular,
        }
    }

    pub fn to_bits(self) -> u8 {
        match self {
            StyleClass::Regular => 0,
            StyleClass::Bold => 1,
            StyleClass::Italic => 2,
            StyleClass::BoldItalic => 3,
            StyleClass::Underline => 4,
        }
    }

    pub fn is_underline(self) -> bool {
        self == StyleClass::Underline
    }
}

/// Decoded rune style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Style {
    /// Explicit foreground color, `None` means the default foreground
    pub foreground: Option<Rgb>,
    /// Explicit background color, `None` means no fill
    pub background: Option<Rgb>,
    pub class: StyleClass,
}

impl Style {
    pub const PLAIN: Style = Style {
        foreground: None,
        background: None,
        class: StyleClass::Regular,
    };

    pub fn with_foreground(mut self, color: Rgb) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn with_background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_class(mut self, class: StyleClass) -> Self {
        self.class = class;
        self
    }

    /// Decode a packed style word.
    ///
    /// Color fields are only read when their flag bit is set; the class field
    /// is read independently of the color flags.
    pub fn from_word(word: u64) -> Self {
        let foreground = (word & FOREGROUND_FLAG != 0)
            .then(|| Rgb::from_field(((word >> FOREGROUND_SHIFT) & RGB_MASK) as u32));
        let background = (word & BACKGROUND_FLAG != 0)
            .then(|| Rgb::from_field(((word >> BACKGROUND_SHIFT) & RGB_MASK) as u32));
        let class = StyleClass::from_bits(((word >> CLASS_SHIFT) & CLASS_MASK) as u8);

        Self {
            foreground,
            background,
            class,
        }
    }

    /// Encode into a packed style word
    pub fn to_word(self) -> u64 {
        let mut word = (self.class.to_bits() as u64) << CLASS_SHIFT;
        if let Some(fg) = self.foreground {
            word |= FOREGROUND_FLAG | (fg.to_field() as u64) << FOREGROUND_SHIFT;
        }
        if let Some(bg) = self.background {
            word |= BACKGROUND_FLAG | (bg.to_field() as u64) << BACKGROUND_SHIFT;
        }
        word
    }

    /// Foreground to paint with, falling back to `default` when unset
    pub fn foreground_or(&self, default: Rgb) -> Rgb {
        self.foreground.unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_word_bit_layout() {
        let style = Style::PLAIN
            .with_foreground(Rgb::new(0x11, 0x22, 0x33))
            .with_class(StyleClass::Bold);
        assert_eq!(style.to_word(), 0x0033_2211_05);

        let style = Style::PLAIN.with_background(Rgb::new(0xAA, 0xBB, 0xCC));
        assert_eq!(style.to_word(), 0x00CC_BBAA_0000_0002);
    }

    #[test]
    fn test_unset_flags_ignore_color_fields() {
        // Color bytes present, flags cleared
        let word = 0x00CC_BBAA_3322_1100u64;
        let style = Style::from_word(word);
        assert_eq!(style.foreground, None);
        assert_eq!(style.background, None);
        assert_eq!(style.foreground_or(DEFAULT_FOREGROUND), DEFAULT_FOREGROUND);
    }

    #[test]
    fn test_class_mapping() {
        let expected = [
            StyleClass::Regular,
            StyleClass::Bold,
            StyleClass::Italic,
            StyleClass::BoldItalic,
            StyleClass::Underline,
        ];
        for (bits, class) in expected.iter().enumerate() {
            let word = (bits as u64) << 2;
            assert_eq!(Style::from_word(word).class, *class);
        }
    }

    #[test]
    fn test_unassigned_class_falls_back_to_regular() {
        for bits in 5u64..=7 {
            let style = Style::from_word(bits << 2);
            assert_eq!(style.class, StyleClass::Regular);
            assert!(!style.class.is_underline());
        }
    }

    #[test]
    fn test_class_does_not_imply_color() {
        let style = Style::from_word(0x10);
        assert_eq!(style.class, StyleClass::Underline);
        assert_eq!(style.foreground, None);
        assert_eq!(style.background, None);
    }

    #[test]
    fn test_ansi_index_palette() {
        assert_eq!(Rgb::from_ansi_index(1), Rgb::new(205, 0, 0));
        assert_eq!(Rgb::from_ansi_index(16), Rgb::new(0, 0, 0));
        assert_eq!(Rgb::from_ansi_index(231), Rgb::new(255, 255, 255));
        assert_eq!(Rgb::from_ansi_index(232), Rgb::new(8, 8, 8));
    }

    proptest! {
        #[test]
        fn prop_color_decode_inverts_encode(
            fr in any::<u8>(), fg in any::<u8>(), fb in any::<u8>(),
            br in any::<u8>(), bg in any::<u8>(), bb in any::<u8>(),
            class in 0u8..5,
        ) {
            let style = Style::PLAIN
                .with_foreground(Rgb::new(fr, fg, fb))
                .with_background(Rgb::new(br, bg, bb))
                .with_class(StyleClass::from_bits(class));
            let decoded = Style::from_word(style.to_word());
            prop_assert_eq!(decoded, style);
        }

        #[test]
        fn prop_field_roundtrip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let color = Rgb::new(r, g, b);
            prop_assert_eq!(Rgb::from_field(color.to_field()), color);
        }
    }
}
