use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;

use crate::common::cast::{f32_to_i32, f32_to_u32};
use crate::common::color::blend;
use crate::common::error::RenderError;

// Dot painting
//------------------------------------------------------------------------------
// Pixel (i, j) covers the unit square [i, i + 1) x [j, j + 1), so its center
// sits at (i + 0.5, j + 0.5).

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub(crate) enum Painted {
    Partial,
    /// Every pixel now holds the dot color.
    WholeCanvas,
}

/// Distance from `(cx, cy)` to the farthest pixel center of the canvas.
fn farthest_pixel(canvas: &RgbImage, cx: f32, cy: f32) -> f32 {
    let (w, h) = canvas.dimensions();
    let dx = (cx - 0.5).abs().max((w as f32 - 0.5 - cx).abs());
    let dy = (cy - 0.5).abs().max((h as f32 - 0.5 - cy).abs());
    dx.hypot(dy)
}

fn fill(canvas: &mut RgbImage, color: Rgb<u8>) -> Painted {
    canvas.pixels_mut().for_each(|p| *p = color);
    Painted::WholeCanvas
}

/// Paints a disc whose edge pixels are blended by their estimated coverage.
pub(crate) fn paint_smooth_dot(
    canvas: &mut RgbImage,
    (cx, cy): (f32, f32),
    radius: f32,
    color: Rgb<u8>,
) -> Result<Painted, RenderError> {
    if farthest_pixel(canvas, cx, cy) <= radius - 0.5 {
        return Ok(fill(canvas, color));
    }

    let (w, h) = canvas.dimensions();
    let x0 = f32_to_u32((cx - radius - 1.0).floor().clamp(0.0, w as f32))?;
    let x1 = f32_to_u32((cx + radius + 1.0).ceil().clamp(0.0, w as f32))?;
    let y0 = f32_to_u32((cy - radius - 1.0).floor().clamp(0.0, h as f32))?;
    let y1 = f32_to_u32((cy + radius + 1.0).ceil().clamp(0.0, h as f32))?;

    for py in y0..y1 {
        let dy = py as f32 + 0.5 - cy;
        for px in x0..x1 {
            let dx = px as f32 + 0.5 - cx;
            let coverage = (radius + 0.5 - dx.hypot(dy)).clamp(0.0, 1.0);
            if coverage <= 0.0 {
                continue;
            }
            let pixel = canvas.get_pixel_mut(px, py);
            *pixel = if coverage >= 1.0 { color } else { blend(*pixel, color, coverage) };
        }
    }
    Ok(Painted::Partial)
}

/// Paints a hard edged disc, the canvas keeps only two colors.
pub(crate) fn paint_crisp_dot(
    canvas: &mut RgbImage,
    (cx, cy): (f32, f32),
    radius: f32,
    color: Rgb<u8>,
) -> Result<Painted, RenderError> {
    // imageproc centers the disc on pixel (fx, fy) and rasterizes it with a
    // midpoint circle, which may leave out pixels up to one unit inside `r`.
    let (fx, fy, r) = (cx.floor(), cy.floor(), radius.round());
    if farthest_pixel(canvas, fx + 0.5, fy + 0.5) <= r - 1.0 {
        return Ok(fill(canvas, color));
    }

    draw_filled_circle_mut(canvas, (f32_to_i32(fx)?, f32_to_i32(fy)?), f32_to_i32(r)?, color);
    Ok(Painted::Partial)
}
