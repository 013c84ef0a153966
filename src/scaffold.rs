//! Rendering session
//!
//! A [`Scaffold`] owns the cumulative rune stream of one screenshot together
//! with its scaled geometry and fonts, and turns it into a raster.

use std::io::{Read, Write};
use std::sync::Arc;

use tiny_skia::Pixmap;

use crate::config::{Config, ConfigPalette};
use crate::core::{Rgb, RuneStream, Style, StyledRune, DEFAULT_FOREGROUND};
use crate::error::{Error, Result};
use crate::font::{load_font_set_or_default, FontFaceSet, FontStyle, GlyphFace};
use crate::ingest::wrap_runes;
use crate::layout::measure_content;
use crate::parser::parse_stream;
use crate::renderer::{clip_canvas, GlyphPainter, Shadow, WindowChrome};
use crate::terminal::detect_columns;

/// One rendering session.
///
/// Geometry is multiplied by the scale factor once, at construction.
/// A scaffold is confined to one thread at a time; the font faces it holds
/// may be shared with other scaffolds.
#[derive(Debug)]
pub struct Scaffold {
    content: RuneStream,
    factor: f32,
    /// Fixed column count, 0 follows the terminal width
    columns: usize,
    faces: FontFaceSet,
    font_size: f32,
    font_dpi: f32,
    margin: f32,
    padding: f32,
    shadow: Shadow,
    draw_decorations: bool,
    draw_shadow: bool,
    clip_canvas: bool,
    line_spacing: f32,
    tab_spaces: usize,
    palette: ConfigPalette,
    prompt: String,
    default_foreground: Rgb,
}

impl Scaffold {
    /// Create a scaffold, loading fonts from `config.font_dir`.
    ///
    /// Installed system monospace fonts are used when the directory does
    /// not exist.
    pub fn new(config: &Config) -> Result<Self> {
        let (size, dpi) = (config.factor * config.font_size, config.font_dpi);
        let faces = load_font_set_or_default(&config.font_dir, size, dpi)?;
        Self::with_faces(config, faces)
    }

    /// Create a scaffold around already loaded faces
    pub fn with_faces(config: &Config, faces: FontFaceSet) -> Result<Self> {
        let palette = config.palette()?;
        let f = config.factor;

        Ok(Self {
            content: RuneStream::new(),
            factor: f,
            columns: 0,
            faces,
            font_size: config.font_size,
            font_dpi: config.font_dpi,
            margin: f * config.margin,
            padding: f * config.padding,
            shadow: Shadow {
                color: palette.shadow,
                radius: (f * config.shadow_radius).clamp(0.0, 255.0) as u8,
                offset_x: f * config.shadow_offset_x,
                offset_y: f * config.shadow_offset_y,
            },
            draw_decorations: config.draw_decorations,
            draw_shadow: config.draw_shadow,
            clip_canvas: false,
            line_spacing: config.line_spacing,
            tab_spaces: config.tab_spaces,
            palette,
            prompt: config.prompt.clone(),
            default_foreground: DEFAULT_FOREGROUND,
        })
    }

    pub fn set_font_face(&mut self, style: FontStyle, face: Arc<dyn GlyphFace>) {
        self.faces.set_face(style, face);
    }

    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns;
    }

    pub fn set_draw_decorations(&mut self, value: bool) {
        self.draw_decorations = value;
    }

    pub fn set_draw_shadow(&mut self, value: bool) {
        self.draw_shadow = value;
    }

    pub fn set_clip_canvas(&mut self, value: bool) {
        self.clip_canvas = value;
    }

    /// Column count used for wrapping: the configured value, or the
    /// detected terminal width when none is set
    pub fn fixed_columns(&self) -> usize {
        match self.columns {
            0 => detect_columns(),
            n => n,
        }
    }

    /// Font size and DPI for loading faces compatible with this scaffold
    pub fn font_options(&self) -> (f32, f32) {
        (self.factor * self.font_size, self.font_dpi)
    }

    pub fn content(&self) -> &RuneStream {
        &self.content
    }

    /// Tokenize a byte stream and append it
    pub fn add_content<R: Read>(&mut self, reader: R) -> Result<()> {
        let runes = parse_stream(reader)?;
        self.add_runes(runes);
        Ok(())
    }

    /// Append already tokenized runes, wrapping at [`fixed_columns`](Self::fixed_columns).
    ///
    /// Wrapping restarts at column zero on every call.
    pub fn add_runes<I>(&mut self, runes: I)
    where
        I: IntoIterator<Item = StyledRune>,
    {
        let before = self.content.len();
        let wrapped = wrap_runes(runes, self.fixed_columns());
        self.content.extend(wrapped);
        tracing::debug!("Ingested {} runes", self.content.len() - before);
    }

    /// Append a prompt line: prompt, a space, then the command arguments
    pub fn add_command<S: AsRef<str>>(&mut self, args: &[S]) {
        let prompt = Style::PLAIN.with_foreground(self.palette.prompt);
        let command = Style::PLAIN.with_foreground(self.palette.command);
        let line = args.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");

        let mut runes: Vec<StyledRune> = self
            .prompt
            .chars()
            .map(|c| StyledRune::new(c, prompt))
            .collect();
        runes.push(StyledRune::plain(' '));
        runes.extend(line.chars().map(|c| StyledRune::new(c, command)));
        runes.push(StyledRune::plain('\n'));

        self.add_runes(runes);
    }

    fn chrome(&self) -> WindowChrome {
        WindowChrome {
            factor: self.factor,
            margin: self.margin,
            padding: self.padding,
            background: self.palette.background,
            outline: self.palette.outline,
            decorations: self.draw_decorations,
            shadow: self.draw_shadow.then_some(self.shadow),
        }
    }

    /// Window chrome with all content painted on it, before clipping
    fn image(&self) -> Result<Pixmap> {
        let regular = self.faces.regular();
        let size = measure_content(&self.content, regular, self.columns, self.line_spacing);
        let mut canvas = self.chrome().compose(size)?;

        let left = canvas.origin_x + self.padding;
        let baseline = canvas.origin_y
            + self.padding
            + canvas.title_offset
            + regular.line_metrics().ascent;

        let painter = GlyphPainter {
            faces: &self.faces,
            factor: self.factor,
            line_spacing: self.line_spacing,
            tab_spaces: self.tab_spaces,
            default_foreground: self.default_foreground,
        };
        painter.paint(&mut canvas.pixmap, left, baseline, self.content.runes());

        Ok(canvas.pixmap)
    }

    /// Render the content to an RGBA raster
    pub fn render(&self) -> Result<Pixmap> {
        let pixmap = self.image()?;
        if self.clip_canvas {
            return Ok(clip_canvas(pixmap));
        }
        Ok(pixmap)
    }

    /// Render and write the result as PNG
    pub fn write_png<W: Write>(&self, mut writer: W) -> Result<()> {
        let pixmap = self.render()?;
        let data = pixmap
            .encode_png()
            .map_err(|e| Error::Encoding(e.to_string()))?;
        writer.write_all(&data)?;
        Ok(())
    }

    /// Write the plain characters of the content, without styling
    pub fn write_raw<W: Write>(&self, mut writer: W) -> Result<()> {
        write!(writer, "{}", self.content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StyleClass;
    use crate::test_support::BoxFace;

    fn config() -> Config {
        Config {
            factor: 1.0,
            margin: 10.0,
            padding: 5.0,
            draw_shadow: false,
            ..Config::default()
        }
    }

    fn scaffold(config: &Config) -> Scaffold {
        let faces = FontFaceSet::uniform(Arc::new(BoxFace::new(6.0, 11.0, 3.0)));
        Scaffold::with_faces(config, faces).unwrap()
    }

    fn text(s: &Scaffold) -> String {
        s.content().to_string()
    }

    #[test]
    fn test_geometry_is_scaled() {
        let config = Config {
            factor: 2.0,
            shadow_radius: 200.0,
            ..config()
        };
        let s = scaffold(&config);
        assert_eq!(s.margin, 20.0);
        assert_eq!(s.padding, 10.0);
        assert_eq!(s.shadow.radius, 255);
        assert_eq!(s.shadow.offset_x, 32.0);
        assert_eq!(s.font_options(), (24.0, 72.0));
    }

    #[test]
    fn test_invalid_color_rejected() {
        let config = Config {
            background_color: "nope".to_string(),
            ..config()
        };
        let faces = FontFaceSet::uniform(Arc::new(BoxFace::new(6.0, 11.0, 3.0)));
        assert!(matches!(
            Scaffold::with_faces(&config, faces),
            Err(Error::InvalidColor { field: "background_color", .. })
        ));
    }

    #[test]
    fn test_fixed_columns() {
        let mut s = scaffold(&config());
        s.set_columns(12);
        assert_eq!(s.fixed_columns(), 12);
        s.set_columns(0);
        assert!(s.fixed_columns() > 0);
    }

    #[test]
    fn test_three_widths_wrap_to_three_lines() {
        let mut s = scaffold(&config());
        s.set_columns(10);
        s.add_content("y".repeat(30).as_bytes()).unwrap();
        assert_eq!(s.content().line_count(), 3);
    }

    #[test]
    fn test_wrap_counter_resets_per_call() {
        let mut s = scaffold(&config());
        s.set_columns(4);
        s.add_content(&b"abc"[..]).unwrap();
        s.add_content(&b"def"[..]).unwrap();
        // Six runes in total, but neither call exceeded four columns
        assert_eq!(text(&s), "abcdef");
    }

    #[test]
    fn test_short_input_is_one_line() {
        let mut s = scaffold(&config());
        s.set_columns(40);
        s.add_content(&b"just a line"[..]).unwrap();
        assert_eq!(s.content().line_count(), 1);
    }

    #[test]
    fn test_add_content_keeps_styles() {
        let mut s = scaffold(&config());
        s.set_columns(80);
        s.add_content(&b"\x1b[1mB\x1b[0mr"[..]).unwrap();
        let runes = s.content().runes();
        assert_eq!(runes[0].style.class, StyleClass::Bold);
        assert_eq!(runes[1].style.class, StyleClass::Regular);
    }

    #[test]
    fn test_add_command_prompt_line() {
        let mut s = scaffold(&config());
        s.set_columns(80);
        s.add_command(&["ls", "-la"]);
        assert_eq!(text(&s), "➜ ls -la\n");

        let runes = s.content().runes();
        let palette = config().palette().unwrap();
        assert_eq!(runes[0].style.foreground, Some(palette.prompt));
        assert_eq!(runes[1].style, Style::PLAIN);
        assert_eq!(runes[2].style.foreground, Some(palette.command));
    }

    #[test]
    fn test_empty_render_has_minimum_width() {
        let s = scaffold(&config());
        let pixmap = s.render().unwrap();
        // 3 * 25 + 3 * 9 content floor plus margins and padding
        assert_eq!(pixmap.width(), 102 + 20 + 10);
        assert_eq!(pixmap.height(), 14 + 20 + 10 + 40);
    }

    #[test]
    fn test_clip_removes_margin() {
        let mut s = scaffold(&config());
        s.set_columns(80);
        s.add_content(&b"hi"[..]).unwrap();
        let full = s.render().unwrap();

        s.set_clip_canvas(true);
        let clipped = s.render().unwrap();
        assert!(clipped.width() < full.width());
        assert!(clipped.height() < full.height());
    }

    #[test]
    fn test_setters_change_the_render() {
        let pixel = |p: &Pixmap, x: u32, y: u32| p.pixels()[(y * p.width() + x) as usize].demultiply();

        let mut s = scaffold(&config());
        s.set_columns(80);
        s.add_content(&b"\x1b[1mbb"[..]).unwrap();
        let decorated = s.render().unwrap();

        s.set_draw_decorations(false);
        let plain = s.render().unwrap();
        assert_eq!(decorated.height(), plain.height() + 40);

        // Without a shadow the bottom-right margin stays transparent
        let (w, h) = (plain.width(), plain.height());
        assert_eq!(pixel(&plain, w - 4, h - 4).alpha(), 0);
        s.set_draw_shadow(true);
        let shadowed = s.render().unwrap();
        assert!(pixel(&shadowed, w - 4, h - 4).alpha() > 0);
        s.set_draw_shadow(false);

        // Second bold glyph starts after the bold face's advance:
        // 15 + 6 = 21 with the default face, 15 + 9 = 24 with a wider one
        let before = pixel(&plain, 30, 20);
        assert_eq!((before.red(), before.green(), before.blue()), (0x15, 0x15, 0x15));
        s.set_font_face(FontStyle::Bold, Arc::new(BoxFace::new(9.0, 11.0, 3.0)));
        let wide = s.render().unwrap();
        let after = pixel(&wide, 30, 20);
        let gray = DEFAULT_FOREGROUND;
        assert_eq!((after.red(), after.green(), after.blue()), (gray.r, gray.g, gray.b));
    }

    #[test]
    fn test_write_raw_is_plain_text() {
        let mut s = scaffold(&config());
        s.set_columns(80);
        s.add_content(&b"\x1b[31mred\x1b[0m\tplain\n"[..]).unwrap();
        let mut out = Vec::new();
        s.write_raw(&mut out).unwrap();
        assert_eq!(out, b"red\tplain\n");
    }
}
