mod dot;
pub mod logo;

use image::{Rgb, RgbImage};
use tracing::{debug, warn};

use crate::common::error::{QrStyleResult, RenderError};
use crate::encoder::ModuleMatrix;
use crate::style::{DotPlacement, StyleParameters};
use dot::{paint_crisp_dot, paint_smooth_dot, Painted};

// Rasterizer
//------------------------------------------------------------------------------

/// Paints `matrix` onto a fresh `output_size x output_size` canvas.
///
/// The canvas is flat filled with the background color, then every dark module
/// gets a filled circle of `dot_radius` in the dot color, centered according to
/// [`StyleParameters::placement`]. Dots past the canvas edge are clipped.
///
/// Fails with `InvalidArgument` before allocating anything when the style is
/// invalid, and with `RenderFailure` when the canvas cannot be allocated.
pub fn render(matrix: &ModuleMatrix, style: &StyleParameters) -> QrStyleResult<RgbImage> {
    style.validate()?;

    let size = style.output_size;
    let n = matrix.width();
    debug!("Rendering {n}x{n} matrix on {size}x{size} canvas with style {style}");

    if style.placement == DotPlacement::MatrixIndex && n > size as usize {
        warn!("Matrix of width {n} exceeds canvas of {size}px, outer dots will be clipped");
    }

    let mut canvas = allocate_canvas(size, style.background_color)?;

    let cell = size as f32 / n as f32;
    let paint = if style.antialias { paint_smooth_dot } else { paint_crisp_dot };
    for (x, y) in matrix.dark_modules() {
        let center = match style.placement {
            DotPlacement::MatrixIndex => (x as f32, y as f32),
            DotPlacement::Scaled => ((x as f32 + 0.5) * cell, (y as f32 + 0.5) * cell),
        };
        if paint(&mut canvas, center, style.dot_radius, style.dot_color)? == Painted::WholeCanvas {
            debug!("Dot at ({x}, {y}) covers the whole canvas");
            break;
        }
    }

    Ok(canvas)
}

fn allocate_canvas(size: u32, fill: Rgb<u8>) -> Result<RgbImage, RenderError> {
    let len = (size as usize)
        .checked_mul(size as usize)
        .and_then(|px| px.checked_mul(3))
        .ok_or(RenderError::CanvasTooLarge(size))?;

    let mut buf = Vec::new();
    buf.try_reserve_exact(len)?;
    buf.extend(fill.0.iter().copied().cycle().take(len));

    RgbImage::from_raw(size, size, buf).ok_or(RenderError::CanvasTooLarge(size))
}
