//! SGR (Select Graphic Rendition) interpretation

use crate::core::{Rgb, Style, StyleClass};

/// Text attributes accumulated from SGR sequences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SgrState {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
}

impl SgrState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Collapse the attribute flags into a single style class.
    ///
    /// Bold and italic take precedence over underline since a rune can only
    /// carry one class.
    pub fn class(&self) -> StyleClass {
        match (self.bold, self.italic, self.underline) {
            (true, true, _) => StyleClass::BoldItalic,
            (true, false, _) => StyleClass::Bold,
            (false, true, _) => StyleClass::Italic,
            (false, false, true) => StyleClass::Underline,
            (false, false, false) => StyleClass::Regular,
        }
    }

    pub fn style(&self) -> Style {
        Style {
            foreground: self.foreground,
            background: self.background,
            class: self.class(),
        }
    }

    /// Apply the flattened parameters of one `CSI ... m` sequence
    pub fn apply(&mut self, params: &[u16]) {
        if params.is_empty() {
            self.reset();
            return;
        }

        let mut i = 0;
        while i < params.len() {
            match params[i] {
                0 => self.reset(),
                1 => self.bold = true,
                3 => self.italic = true,
                4 => self.underline = true,
                22 => self.bold = false,
                23 => self.italic = false,
                24 => self.underline = false,
                30..=37 => self.foreground = Some(Rgb::from_ansi_index((params[i] - 30) as u8)),
                38 => {
                    if let Some(color) = parse_extended_color(params, &mut i) {
                        self.foreground = Some(color);
                    }
                }
                39 => self.foreground = None,
                40..=47 => self.background = Some(Rgb::from_ansi_index((params[i] - 40) as u8)),
                48 => {
                    if let Some(color) = parse_extended_color(params, &mut i) {
                        self.background = Some(color);
                    }
                }
                49 => self.background = None,
                90..=97 => {
                    self.foreground = Some(Rgb::from_ansi_index((params[i] - 90 + 8) as u8))
                }
                100..=107 => {
                    self.background = Some(Rgb::from_ansi_index((params[i] - 100 + 8) as u8))
                }
                _ => {}
            }
            i += 1;
        }
    }
}

/// Parse `5;n` (256 colors) or `2;r;g;b` (true color) following a 38/48
fn parse_extended_color(params: &[u16], i: &mut usize) -> Option<Rgb> {
    match params.get(*i + 1)? {
        5 => {
            let index = *params.get(*i + 2)?;
            *i += 2;
            Some(Rgb::from_ansi_index(index.min(255) as u8))
        }
        2 => {
            let r = *params.get(*i + 2)?;
            let g = *params.get(*i + 3)?;
            let b = *params.get(*i + 4)?;
            *i += 4;
            Some(Rgb::new(r.min(255) as u8, g.min(255) as u8, b.min(255) as u8))
        }
        _ => None,
    }
}
