//! Canvas clipping
//!
//! Trims fully transparent borders from a finished canvas.

use tiny_skia::{IntRect, Pixmap};

/// Bounding box of all pixels that are not fully transparent.
///
/// A pixel is transparent when all four channels are zero. Returns `None`
/// when every pixel is transparent.
pub fn content_bounds(pixmap: &Pixmap) -> Option<IntRect> {
    let width = pixmap.width() as usize;
    let mut bounds: Option<(usize, usize, usize, usize)> = None;

    for (i, px) in pixmap.pixels().iter().enumerate() {
        let transparent = px.red() == 0 && px.green() == 0 && px.blue() == 0 && px.alpha() == 0;
        if transparent {
            continue;
        }
        let (x, y) = (i % width, i / width);
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }

    let (min_x, min_y, max_x, max_y) = bounds?;
    IntRect::from_xywh(
        min_x as i32,
        min_y as i32,
        (max_x - min_x + 1) as u32,
        (max_y - min_y + 1) as u32,
    )
}

/// Crop `pixmap` to [`content_bounds`].
///
/// An all-transparent canvas has no meaningful crop and is returned whole.
pub fn clip_canvas(pixmap: Pixmap) -> Pixmap {
    let Some(bounds) = content_bounds(&pixmap) else {
        tracing::warn!("Canvas is fully transparent, skipping clip");
        return pixmap;
    };

    tracing::debug!(
        "Clipping {}x{} canvas to {}x{} at ({}, {})",
        pixmap.width(),
        pixmap.height(),
        bounds.width(),
        bounds.height(),
        bounds.x(),
        bounds.y()
    );
    pixmap.clone_rect(bounds).unwrap_or(pixmap)
}
