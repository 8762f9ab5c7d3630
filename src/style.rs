use std::fmt::{Display, Formatter};

use image::Rgb;

use crate::common::color::{to_hex, BLACK, WHITE};
use crate::common::error::{InvalidArgument, QrStyleResult};
use crate::encoder::EcLevel;

pub const DEFAULT_OUTPUT_SIZE: u32 = 512;
pub const DEFAULT_DOT_RADIUS: f32 = 4.0;
pub const DEFAULT_EC_LEVEL: EcLevel = EcLevel::L;

// Dot placement
//------------------------------------------------------------------------------

/// Where the dot of module `(x, y)` is centered on the canvas.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum DotPlacement {
    /// At pixel `(x, y)`. The module grid spans `N` pixels whatever the canvas
    /// size, so the encoder is expected to hand over a matrix already scaled to
    /// the canvas.
    #[default]
    MatrixIndex,
    /// At the center of the module's cell after stretching the grid over the
    /// whole canvas: `((x + 0.5) * size / N, (y + 0.5) * size / N)`.
    Scaled,
}

// Style parameters
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct StyleParameters {
    pub dot_color: Rgb<u8>,
    pub background_color: Rgb<u8>,
    pub dot_radius: f32,
    /// Edge of the square canvas in pixels.
    pub output_size: u32,
    pub placement: DotPlacement,
    /// Blend dot edges with sub-pixel coverage. When off, dots are hard edged
    /// and the canvas only holds the two style colors.
    pub antialias: bool,
}

impl Default for StyleParameters {
    fn default() -> Self {
        Self {
            dot_color: BLACK,
            background_color: WHITE,
            dot_radius: DEFAULT_DOT_RADIUS,
            output_size: DEFAULT_OUTPUT_SIZE,
            placement: DotPlacement::MatrixIndex,
            antialias: true,
        }
    }
}

impl StyleParameters {
    pub fn validate(&self) -> QrStyleResult<()> {
        if self.output_size == 0 {
            return Err(InvalidArgument::OutputSize(self.output_size).into());
        }
        if !self.dot_radius.is_finite() || self.dot_radius <= 0.0 {
            return Err(InvalidArgument::DotRadius(self.dot_radius).into());
        }
        Ok(())
    }

    /// True when colors differ from black on white.
    pub fn has_custom_colors(&self) -> bool {
        self.dot_color != BLACK || self.background_color != WHITE
    }
}

impl Display for StyleParameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ Dots: {}, Background: {}, Radius: {}, Size: {}, Placement: {:?} }}",
            to_hex(self.dot_color),
            to_hex(self.background_color),
            self.dot_radius,
            self.output_size,
            self.placement
        )
    }
}
