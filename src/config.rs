//! Configuration for rendering sessions
//!
//! A [`Config`] is passed explicitly to each [`Scaffold`](crate::Scaffold),
//! so several differently configured sessions can coexist in one process.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{Rgb, Rgba};
use crate::error::{Error, Result};

/// Rendering configuration.
///
/// Geometry values are given at scale 1 and multiplied by `factor` when a
/// scaffold is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Global scale multiplier for all geometry
    pub factor: f32,
    /// Font size in points
    pub font_size: f32,
    pub font_dpi: f32,
    /// Directory holding `*-Regular.ttf`, `*-Bold.ttf`, `*-Italic.ttf`
    /// and `*-BoldItalic.ttf`
    pub font_dir: PathBuf,
    /// Transparent space around the window
    pub margin: f32,
    /// Space between the window border and the text
    pub padding: f32,
    pub draw_decorations: bool,
    pub draw_shadow: bool,
    pub shadow_base_color: String,
    pub shadow_radius: f32,
    pub shadow_offset_x: f32,
    pub shadow_offset_y: f32,
    pub line_spacing: f32,
    /// Tab width in space glyphs
    pub tab_spaces: usize,
    pub prompt: String,
    pub prompt_color: String,
    pub command_color: String,
    pub outline_color: String,
    pub background_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            factor: 2.0,
            font_size: 12.0,
            font_dpi: 72.0,
            font_dir: PathBuf::from("fonts"),
            margin: 48.0,
            padding: 24.0,
            draw_decorations: true,
            draw_shadow: true,
            shadow_base_color: "#10101066".to_string(),
            shadow_radius: 16.0,
            shadow_offset_x: 16.0,
            shadow_offset_y: 16.0,
            line_spacing: 1.2,
            tab_spaces: 2,
            prompt: "➜".to_string(),
            prompt_color: "#00AFFF".to_string(),
            command_color: "#FFFFFF".to_string(),
            outline_color: "#404040".to_string(),
            background_color: "#151515".to_string(),
        }
    }
}

impl Config {
    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        tracing::debug!("Loaded config from {}", path.display());
        Self::from_json_str(&contents)
    }

    /// Resolved colors, validated up front so rendering cannot fail on them
    pub fn palette(&self) -> Result<ConfigPalette> {
        let color = |field: &'static str, value: &str| {
            parse_hex_color(value).ok_or_else(|| Error::InvalidColor {
                field,
                value: value.to_string(),
            })
        };

        Ok(ConfigPalette {
            shadow: color("shadow_base_color", &self.shadow_base_color)?,
            outline: color("outline_color", &self.outline_color)?,
            background: color("background_color", &self.background_color)?,
            prompt: opaque(color("prompt_color", &self.prompt_color)?),
            command: opaque(color("command_color", &self.command_color)?),
        })
    }
}

/// Parsed configuration colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigPalette {
    pub shadow: Rgba,
    pub outline: Rgba,
    pub background: Rgba,
    pub prompt: Rgb,
    pub command: Rgb,
}

fn opaque(c: Rgba) -> Rgb {
    Rgb::new(c.r, c.g, c.b)
}

/// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional)
pub fn parse_hex_color(hex: &str) -> Option<Rgba> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    let nibble = |i: usize| {
        let v = u8::from_str_radix(hex.get(i..i + 1)?, 16).ok()?;
        Some(v << 4 | v)
    };

    match hex.len() {
        3 => Some(Rgba::new(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
        6 => Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}
