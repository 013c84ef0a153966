//! Window chrome
//!
//! Builds the background canvas: an optional blurred drop shadow, the
//! rounded window body with its outline, and the three title bar buttons.

use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform};

use super::blur::stack_blur;
use crate::core::Rgba;
use crate::error::{Error, Result};
use crate::layout::ContentSize;

/// Title bar button colors: close, minimize, zoom
const BUTTON_COLORS: [Rgba; 3] = [
    Rgba::new(0xED, 0x65, 0x5A, 0xFF),
    Rgba::new(0xE1, 0xC0, 0x4C, 0xFF),
    Rgba::new(0x71, 0xBD, 0x47, 0xFF),
];

// Unscaled geometry, multiplied by the scale factor
const CORNER_RADIUS: f32 = 6.0;
const BUTTON_RADIUS: f32 = 9.0;
const BUTTON_DISTANCE: f32 = 25.0;
const BUTTON_INSET: f32 = 4.0;
const TITLE_OFFSET: f32 = 40.0;

/// Drop shadow settings, already scaled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Rgba,
    pub radius: u8,
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Everything needed to draw the window, geometry already scaled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowChrome {
    pub factor: f32,
    pub margin: f32,
    pub padding: f32,
    pub background: Rgba,
    pub outline: Rgba,
    pub decorations: bool,
    pub shadow: Option<Shadow>,
}

/// The composed background and where text goes on it
pub struct WindowCanvas {
    pub pixmap: Pixmap,
    /// Top-left corner of the window body
    pub origin_x: f32,
    pub origin_y: f32,
    /// Height reserved above the text for the button row
    pub title_offset: f32,
}

impl WindowChrome {
    fn scaled(&self, value: f32) -> f32 {
        self.factor * value
    }

    pub fn title_offset(&self) -> f32 {
        if self.decorations {
            self.scaled(TITLE_OFFSET)
        } else {
            0.0
        }
    }

    /// Narrowest content width that still fits the three buttons
    pub fn min_content_width(&self) -> f32 {
        3.0 * self.scaled(BUTTON_DISTANCE) + 3.0 * self.scaled(BUTTON_RADIUS)
    }

    /// Canvas size in pixels for the given content
    pub fn canvas_size(&self, content: ContentSize) -> (u32, u32) {
        let content_width = content.width.max(self.min_content_width());
        let width = content_width + 2.0 * self.margin + 2.0 * self.padding;
        let height =
            content.height + 2.0 * self.margin + 2.0 * self.padding + self.title_offset();
        (width as u32, height as u32)
    }

    /// Compose the window chrome for `content`
    pub fn compose(&self, content: ContentSize) -> Result<WindowCanvas> {
        let (width, height) = self.canvas_size(content);
        let mut pixmap = Pixmap::new(width, height).ok_or(Error::Canvas { width, height })?;

        let body_width = width as f32 - 2.0 * self.margin;
        let body_height = height as f32 - 2.0 * self.margin;
        let corner = self.scaled(CORNER_RADIUS);

        let mut origin_x = self.margin;
        let mut origin_y = self.margin;

        if let Some(shadow) = &self.shadow {
            // Keep the blurred shadow visually centered around the body
            origin_x -= shadow.offset_x / 2.0;
            origin_y -= shadow.offset_y / 2.0;

            let mut layer = Pixmap::new(width, height)
                .ok_or_else(|| Error::Blur(format!("cannot allocate {}x{} layer", width, height)))?;
            if let Some(path) = rounded_rect(
                origin_x + shadow.offset_x,
                origin_y + shadow.offset_y,
                body_width,
                body_height,
                corner,
            ) {
                layer.fill_path(&path, &paint(shadow.color), FillRule::Winding, Transform::identity(), None);
            }
            stack_blur(&mut layer, shadow.radius)?;
            pixmap.draw_pixmap(0, 0, layer.as_ref(), &PixmapPaint::default(), Transform::identity(), None);
        }

        if let Some(path) = rounded_rect(origin_x, origin_y, body_width, body_height, corner) {
            pixmap.fill_path(&path, &paint(self.background), FillRule::Winding, Transform::identity(), None);

            let stroke = Stroke {
                width: self.scaled(1.0),
                ..Default::default()
            };
            pixmap.stroke_path(&path, &paint(self.outline), &stroke, Transform::identity(), None);
        }

        if self.decorations {
            for (i, color) in BUTTON_COLORS.iter().enumerate() {
                let cx = origin_x + self.padding + i as f32 * self.scaled(BUTTON_DISTANCE) + self.scaled(BUTTON_INSET);
                let cy = origin_y + self.padding + self.scaled(BUTTON_INSET);
                if let Some(circle) = PathBuilder::from_circle(cx, cy, self.scaled(BUTTON_RADIUS)) {
                    pixmap.fill_path(&circle, &paint(*color), FillRule::Winding, Transform::identity(), None);
                }
            }
        }

        tracing::debug!("Composed {}x{} window canvas", width, height);

        Ok(WindowCanvas {
            pixmap,
            origin_x,
            origin_y,
            title_offset: self.title_offset(),
        })
    }
}

pub(crate) fn paint(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

/// Rectangle with circular corners built from cubic arcs
fn rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32) -> Option<Path> {
    // Cubic bezier control distance for a quarter circle
    const KAPPA: f32 = 0.552_284_8;

    let r = r.min(w / 2.0).min(h / 2.0).max(0.0);
    let k = r * KAPPA;
    let (right, bottom) = (x + w, y + h);

    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(right - r, y);
    pb.cubic_to(right - r + k, y, right, y + r - k, right, y + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
    pb.line_to(x + r, bottom);
    pb.cubic_to(x + r - k, bottom, x, bottom - r + k, x, bottom - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
    pb.close();
    pb.finish()
}
