//! Stack blur
//!
//! Approximates a gaussian blur with a triangular kernel of radius `r`
//! (weights `1, 2, .., r+1, .., 2, 1`), applied horizontally then
//! vertically. Each pass slides a running sum along the line, so the cost is
//! independent of the radius. Operates on premultiplied RGBA, which keeps
//! color from bleeding out of transparent areas.

use tiny_skia::Pixmap;

use crate::error::{Error, Result};

/// Blur every channel of `pixmap` in place
pub fn stack_blur(pixmap: &mut Pixmap, radius: u8) -> Result<()> {
    if radius == 0 {
        return Ok(());
    }

    let width = pixmap.width() as usize;
    let height = pixmap.height() as usize;
    let data = pixmap.data_mut();
    if data.len() != width * height * 4 {
        return Err(Error::Blur(format!(
            "buffer holds {} bytes, expected {}x{} RGBA",
            data.len(),
            width,
            height
        )));
    }

    let radius = radius as usize;
    let mut line = vec![[0u32; 4]; width.max(height)];
    let mut out = vec![[0u32; 4]; width.max(height)];

    for y in 0..height {
        for x in 0..width {
            line[x] = load(data, (y * width + x) * 4);
        }
        blur_line(&line[..width], &mut out[..width], radius);
        for x in 0..width {
            store(data, (y * width + x) * 4, out[x]);
        }
    }

    for x in 0..width {
        for y in 0..height {
            line[y] = load(data, (y * width + x) * 4);
        }
        blur_line(&line[..height], &mut out[..height], radius);
        for y in 0..height {
            store(data, (y * width + x) * 4, out[y]);
        }
    }

    Ok(())
}

fn load(data: &[u8], i: usize) -> [u32; 4] {
    [
        data[i] as u32,
        data[i + 1] as u32,
        data[i + 2] as u32,
        data[i + 3] as u32,
    ]
}

fn store(data: &mut [u8], i: usize, px: [u32; 4]) {
    // Premultiplied channels must not exceed alpha
    let alpha = px[3].min(255);
    data[i] = px[0].min(alpha) as u8;
    data[i + 1] = px[1].min(alpha) as u8;
    data[i + 2] = px[2].min(alpha) as u8;
    data[i + 3] = alpha as u8;
}

/// One pass over a line, edges clamped
fn blur_line(src: &[[u32; 4]], dst: &mut [[u32; 4]], radius: usize) {
    let n = src.len();
    if n == 0 {
        return;
    }
    let last = n - 1;
    let div = 2 * radius + 1;
    let weight = ((radius + 1) * (radius + 1)) as u32;

    let mut stack = vec![[0u32; 4]; div];
    let mut sum = [0u32; 4];
    let mut sum_in = [0u32; 4];
    let mut sum_out = [0u32; 4];

    // Left half of the kernel sees the first pixel repeated
    for (i, slot) in stack.iter_mut().enumerate().take(radius + 1) {
        *slot = src[0];
        for c in 0..4 {
            sum[c] += src[0][c] * (i as u32 + 1);
            sum_out[c] += src[0][c];
        }
    }
    for i in 1..=radius {
        let px = src[i.min(last)];
        stack[i + radius] = px;
        for c in 0..4 {
            sum[c] += px[c] * (radius + 1 - i) as u32;
            sum_in[c] += px[c];
        }
    }

    let mut stack_ptr = radius;
    for (x, out) in dst.iter_mut().enumerate() {
        for c in 0..4 {
            out[c] = sum[c] / weight;
            sum[c] -= sum_out[c];
        }

        // Oldest entry leaves the kernel, the next pixel enters
        let start = (stack_ptr + div - radius) % div;
        let incoming = src[(x + radius + 1).min(last)];
        for c in 0..4 {
            sum_out[c] -= stack[start][c];
            sum_in[c] += incoming[c];
            sum[c] += sum_in[c];
        }
        stack[start] = incoming;

        stack_ptr = (stack_ptr + 1) % div;
        for c in 0..4 {
            sum_out[c] += stack[stack_ptr][c];
            sum_in[c] -= stack[stack_ptr][c];
        }
    }
}
