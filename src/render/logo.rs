use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage, RgbaImage};
use tracing::debug;

use crate::common::error::{QrStyleResult, RenderError};

/// Logo side is `qr_size / LOGO_FRACTION`, small enough for a high error
/// correction level to recover the modules it hides.
pub const LOGO_FRACTION: u32 = 7;

// Logo overlay
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct LogoOverlay {
    image: RgbaImage,
}

impl LogoOverlay {
    pub fn new(image: impl Into<DynamicImage>) -> Self {
        Self { image: image.into().to_rgba8() }
    }

    pub fn open(path: impl AsRef<Path>) -> QrStyleResult<Self> {
        let path = path.as_ref();
        debug!("Loading logo from {}", path.display());
        let image = image::open(path).map_err(RenderError::from)?;
        Ok(Self::new(image))
    }

    pub fn from_bytes(bytes: &[u8]) -> QrStyleResult<Self> {
        let image = image::load_from_memory(bytes).map_err(RenderError::from)?;
        Ok(Self::new(image))
    }

    pub fn source_width(&self) -> u32 {
        self.image.width()
    }

    pub fn source_height(&self) -> u32 {
        self.image.height()
    }
}

// Placement
//------------------------------------------------------------------------------

/// Square the logo is stretched into. `right` and `bottom` are exclusive.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct LogoPlacement {
    pub left: u32,
    pub top: u32,
    pub size: u32,
}

impl LogoPlacement {
    /// Centered square of side `qr_size / 7`, `None` when that rounds to zero.
    pub fn centered(qr_size: u32) -> Option<Self> {
        let size = qr_size / LOGO_FRACTION;
        if size == 0 {
            return None;
        }
        let offset = (qr_size - size) / 2;
        Some(Self { left: offset, top: offset, size })
    }

    pub fn right(&self) -> u32 {
        self.left + self.size
    }

    pub fn bottom(&self) -> u32 {
        self.top + self.size
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.left..self.right()).contains(&x) && (self.top..self.bottom()).contains(&y)
    }
}

// Compositor
//------------------------------------------------------------------------------

/// Stretches `logo` over the centered square of a `qr_size` symbol.
///
/// Pixels under the logo are replaced, logo alpha is discarded. Anything past
/// the canvas edge is clipped.
pub fn overlay(image: &mut RgbImage, logo: &LogoOverlay, qr_size: u32) {
    let Some(place) = LogoPlacement::centered(qr_size) else {
        debug!("QR size {qr_size} too small for a logo, skipping overlay");
        return;
    };

    debug!(
        "Overlaying {}x{} logo at ({}, {})-({}, {})",
        logo.source_width(),
        logo.source_height(),
        place.left,
        place.top,
        place.right(),
        place.bottom()
    );

    let scaled = imageops::resize(&logo.image, place.size, place.size, FilterType::Nearest);
    let opaque = DynamicImage::ImageRgba8(scaled).to_rgb8();
    imageops::replace(image, &opaque, place.left as i64, place.top as i64);
}

/// Owned variant of [`overlay`]; returns `image` untouched without a logo.
pub fn compose(mut image: RgbImage, logo: Option<&LogoOverlay>, qr_size: u32) -> RgbImage {
    if let Some(logo) = logo {
        overlay(&mut image, logo, qr_size);
    }
    image
}
