//! # qrstyle
//!
//! A Rust library for rendering styled QR codes: custom dot and background colors,
//! anti-aliased circular dots and an optional centered logo.
//!
//! ## Features
//!
//! - **Styled Rendering**: Every dark module becomes a filled circle of configurable radius and color
//! - **Logo Overlay**: Stretch any image over the center of the symbol
//! - **Pluggable Encoding**: Symbols come from the `qrcode` crate through the [`Encoder`] trait
//! - **Export**: PNG bytes for display, gallery style saving and share ready temporary files
//!
//! ## Quick Start
//!
//! ### Simple Styled QR
//!
//! ```rust
//! use qrstyle::QrStyleBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Black dots on white, 512x512 pixels, error correction level L
//! let img = QrStyleBuilder::new("Hello, World!").build()?;
//! assert_eq!(img.dimensions(), (512, 512));
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use image::{Rgba, RgbaImage};
//! use qrstyle::{parse_hex, EcLevel, LogoOverlay, QrStyleBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let logo = LogoOverlay::new(RgbaImage::from_pixel(64, 64, Rgba([255, 165, 0, 255])));
//! let img = QrStyleBuilder::new("https://example.com")
//!     .ec_level(EcLevel::H)                   // Logo hides the center, use the highest level
//!     .dot_color(parse_hex("#0F172A")?)       // Defaults to black
//!     .background_color(parse_hex("#F8FAFC")?) // Defaults to white
//!     .dot_radius(3.0)                        // Defaults to 4 px
//!     .size(384)                              // Defaults to 512 px
//!     .logo(&logo)                            // Side is size / 7, centered
//!     .build()?;
//!
//! let png = qrstyle::export::encode_png(&img)?;
//! assert!(png.starts_with(b"\x89PNG"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Rendering a Matrix Directly
//!
//! ```rust
//! use qrstyle::{render, Encoder, EcLevel, QrcodeEncoder, StyleParameters};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let style = StyleParameters { output_size: 256, ..Default::default() };
//! let matrix = QrcodeEncoder::default().encode("HELLO", EcLevel::M, style.output_size)?;
//! let img = render(&matrix, &style)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Dot Placement
//!
//! By default the dot of module `(x, y)` is centered on pixel `(x, y)`, and
//! [`QrcodeEncoder`] magnifies the symbol so that one matrix cell maps to one
//! pixel. [`DotPlacement::Scaled`] instead spreads an unscaled symbol over the
//! whole canvas, a dot per module, in which case the radius should be about half
//! the cell size.
//!
//! ## Errors
//!
//! All operations return [`QrStyleResult`]. [`QrStyleError`] tells apart invalid
//! arguments, encoding failures, rendering failures and failures to save or share.

pub mod builder;
pub(crate) mod common;
pub mod encoder;
pub mod export;
pub mod render;
pub mod style;

pub use builder::QrStyleBuilder;
pub use common::color::{parse_hex, to_hex, BLACK, WHITE};
pub use common::error::{
    ExportError, InvalidArgument, QrStyleError, QrStyleResult, RenderError,
};
pub use encoder::{EcLevel, Encoder, ModuleMatrix, QrcodeEncoder};
pub use render::logo::{compose, overlay, LogoOverlay, LogoPlacement};
pub use render::render;
pub use style::{DotPlacement, StyleParameters};
