mod matrix;

pub use matrix::ModuleMatrix;

use qrcode::{Color, QrCode};
use tracing::debug;

use crate::common::error::{InvalidArgument, QrStyleResult};

/// Width of the light border drawn around the symbol, in modules.
pub const QUIET_ZONE: u32 = 4;

// Error correction level
//------------------------------------------------------------------------------

/// Share of the symbol that can be damaged or covered and still decode.
///
/// A centered logo needs a high level, [`EcLevel::H`] being the safe choice.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum EcLevel {
    /// ~7%
    #[default]
    L,
    /// ~15%
    M,
    /// ~25%
    Q,
    /// ~30%
    H,
}

impl From<EcLevel> for qrcode::EcLevel {
    fn from(ecl: EcLevel) -> Self {
        match ecl {
            EcLevel::L => qrcode::EcLevel::L,
            EcLevel::M => qrcode::EcLevel::M,
            EcLevel::Q => qrcode::EcLevel::Q,
            EcLevel::H => qrcode::EcLevel::H,
        }
    }
}

// Encoder
//------------------------------------------------------------------------------

/// Turns text into a module matrix.
///
/// `size` is the requested canvas edge. Implementations may use it to scale the
/// symbol; the returned matrix width is not required to match it.
pub trait Encoder {
    fn encode(&self, text: &str, ec_level: EcLevel, size: u32) -> QrStyleResult<ModuleMatrix>;
}

/// [`Encoder`] backed by the `qrcode` crate.
///
/// By default the symbol and its quiet zone are magnified by the largest integer
/// factor that fits the requested size, then centered, so each matrix cell maps
/// to one output pixel. [`QrcodeEncoder::unscaled`] keeps one cell per module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrcodeEncoder {
    quiet_zone: u32,
    magnify: bool,
}

impl Default for QrcodeEncoder {
    fn default() -> Self {
        Self { quiet_zone: QUIET_ZONE, magnify: true }
    }
}

impl QrcodeEncoder {
    pub fn unscaled() -> Self {
        Self { quiet_zone: QUIET_ZONE, magnify: false }
    }

    pub fn quiet_zone(mut self, modules: u32) -> Self {
        self.quiet_zone = modules;
        self
    }

    /// Returns the matrix width, pixels per module and the symbol's offset.
    ///
    /// `symbol_w * multiple <= out_w`, so the symbol always ends inside the matrix.
    fn layout(&self, symbol_w: u32, size: u32) -> Result<(u32, u32, u32), InvalidArgument> {
        let padded_w = self
            .quiet_zone
            .checked_mul(2)
            .and_then(|border| border.checked_add(symbol_w))
            .ok_or(InvalidArgument::QuietZone(self.quiet_zone))?;
        if !self.magnify {
            return Ok((padded_w, 1, self.quiet_zone));
        }
        let out_w = size.max(padded_w);
        let multiple = out_w / padded_w;
        let padding = (out_w - symbol_w * multiple) / 2;
        Ok((out_w, multiple, padding))
    }
}

impl Encoder for QrcodeEncoder {
    fn encode(&self, text: &str, ec_level: EcLevel, size: u32) -> QrStyleResult<ModuleMatrix> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), ec_level.into())?;
        let symbol_w = code.width() as u32;
        let (out_w, multiple, padding) = self.layout(symbol_w, size)?;

        debug!(
            "Encoded {} bytes at {ec_level:?}: symbol {symbol_w}x{symbol_w}, matrix {out_w}x{out_w}, {multiple} px per module",
            text.len()
        );

        let end = padding + symbol_w * multiple;
        ModuleMatrix::from_fn(out_w as usize, |x, y| {
            let (x, y) = (x as u32, y as u32);
            if x < padding || y < padding || x >= end || y >= end {
                return false;
            }
            let (sx, sy) = ((x - padding) / multiple, (y - padding) / multiple);
            code[(sx as usize, sy as usize)] == Color::Dark
        })
    }
}

#[cfg(test)]
mod encoder_tests {
    use test_case::test_case;

    use super::{EcLevel, Encoder, QrcodeEncoder};
    use crate::common::error::{InvalidArgument, QrStyleError};

    #[test]
    fn test_scaled_to_requested_size() {
        // "HELLO" fits a 21x21 symbol, 29 with the quiet zone, magnified 17 times
        let m = QrcodeEncoder::default().encode("HELLO", EcLevel::L, 512).unwrap();
        assert_eq!(m.width(), 512);

        let padding = (512 - 21 * 17) / 2;
        assert_eq!(padding, 77);
        assert!(!m.get(padding - 1, padding - 1));
        assert!(m.get(padding, padding));
        // Finder pattern is 7 modules wide, followed by a light separator
        assert!(m.get(padding + 7 * 17 - 1, padding));
        assert!(!m.get(padding + 7 * 17, padding));
    }

    #[test]
    fn test_size_smaller_than_symbol() {
        let m = QrcodeEncoder::default().encode("HELLO", EcLevel::L, 10).unwrap();
        assert_eq!(m.width(), 29);
        assert!(!m.get(3, 3));
        assert!(m.get(4, 4));
    }

    #[test]
    fn test_unscaled() {
        let m = QrcodeEncoder::unscaled().encode("HELLO", EcLevel::H, 512).unwrap();
        assert_eq!(m.width(), 29);
        let m = QrcodeEncoder::unscaled().quiet_zone(0).encode("HELLO", EcLevel::H, 512).unwrap();
        assert_eq!(m.width(), 21);
        assert!(m.get(0, 0));
    }

    #[test_case(EcLevel::L)]
    #[test_case(EcLevel::M)]
    #[test_case(EcLevel::Q)]
    #[test_case(EcLevel::H)]
    fn test_encode_is_deterministic(ecl: EcLevel) {
        let enc = QrcodeEncoder::default();
        let first = enc.encode("https://example.com", ecl, 200).unwrap();
        assert_eq!(first, enc.encode("https://example.com", ecl, 200).unwrap());
    }

    #[test]
    fn test_higher_level_needs_more_modules() {
        let text = "https://example.com/a/fairly/long/path?with=query";
        let low = QrcodeEncoder::unscaled().encode(text, EcLevel::L, 0).unwrap();
        let high = QrcodeEncoder::unscaled().encode(text, EcLevel::H, 0).unwrap();
        assert!(high.width() > low.width());
    }

    #[test]
    fn test_data_too_long() {
        let text = "A".repeat(5000);
        let err = QrcodeEncoder::default().encode(&text, EcLevel::H, 512).unwrap_err();
        assert!(matches!(err, QrStyleError::Encoding(qrcode::types::QrError::DataTooLong)));
    }

    #[test_case(QrcodeEncoder::default(); "magnified")]
    #[test_case(QrcodeEncoder::unscaled(); "unscaled")]
    fn test_quiet_zone_too_wide(enc: QrcodeEncoder) {
        let err = enc.quiet_zone(u32::MAX / 2).encode("HELLO", EcLevel::L, 512).unwrap_err();
        assert!(matches!(
            err,
            QrStyleError::InvalidArgument(InvalidArgument::QuietZone(q)) if q == u32::MAX / 2
        ));
    }

    #[test]
    fn test_unallocatable_matrix() {
        let err = QrcodeEncoder::default().encode("HELLO", EcLevel::L, u32::MAX).unwrap_err();
        assert!(matches!(err, QrStyleError::RenderFailure(_)), "{err}");
    }
}
