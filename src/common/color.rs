use image::Rgb;

use super::error::{InvalidArgument, QrStyleResult};

pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Parses `#RRGGBB` or `RRGGBB`.
pub fn parse_hex(hex: &str) -> QrStyleResult<Rgb<u8>> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(InvalidArgument::Color(hex.to_string()).into());
    }

    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|_| InvalidArgument::Color(hex.to_string()))?;
    }
    Ok(Rgb(rgb))
}

pub fn to_hex(color: Rgb<u8>) -> String {
    let [r, g, b] = color.0;
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Moves `base` towards `paint` by `coverage` in `[0, 1]`, rounding per channel.
pub fn blend(base: Rgb<u8>, paint: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let mut out = base;
    for (o, &p) in out.0.iter_mut().zip(paint.0.iter()) {
        let b = *o as f32;
        *o = (b + (p as f32 - b) * coverage).round().clamp(0.0, 255.0) as u8;
    }
    out
}

#[cfg(test)]
mod color_tests {
    use image::Rgb;
    use test_case::test_case;

    use super::{blend, parse_hex, to_hex, BLACK, WHITE};
    use crate::common::error::{InvalidArgument, QrStyleError};

    #[test_case("#000000", BLACK)]
    #[test_case("FFFFFF", WHITE)]
    #[test_case("#1a2B3c", Rgb([0x1a, 0x2b, 0x3c]))]
    fn test_parse_hex(hex: &str, exp: Rgb<u8>) {
        assert_eq!(parse_hex(hex).unwrap(), exp);
    }

    #[test_case(""; "empty")]
    #[test_case("#12345"; "too_short")]
    #[test_case("#1234567"; "too_long")]
    #[test_case("#GG0000"; "not_hex")]
    #[test_case("#éé00"; "multibyte")]
    fn test_parse_hex_invalid(hex: &str) {
        let err = parse_hex(hex).unwrap_err();
        assert!(matches!(err, QrStyleError::InvalidArgument(InvalidArgument::Color(_))));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(Rgb([255, 165, 0])), "#FFA500");
        assert_eq!(parse_hex(&to_hex(Rgb([7, 8, 9]))).unwrap(), Rgb([7, 8, 9]));
    }

    #[test]
    fn test_blend() {
        assert_eq!(blend(WHITE, BLACK, 0.0), WHITE);
        assert_eq!(blend(WHITE, BLACK, 1.0), BLACK);
        assert_eq!(blend(WHITE, BLACK, 0.5), Rgb([128, 128, 128]));
        // Equal channels never drift
        assert_eq!(blend(Rgb([10, 10, 10]), Rgb([10, 200, 10]), 0.3).0[0], 10);
    }
}
