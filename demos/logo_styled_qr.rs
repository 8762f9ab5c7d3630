use std::env;
use std::error::Error;

use image::{Rgba, RgbaImage};
use qrstyle::{export, parse_hex, EcLevel, LogoOverlay, QrStyleBuilder};
use tracing_subscriber::EnvFilter;

// Usage: cargo run --example logo_styled_qr -- [logo.png]
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let data = "https://example.com/styled-qr";

    // Without a logo file, use an orange square
    let logo = match env::args().nth(1) {
        Some(path) => LogoOverlay::open(path)?,
        None => LogoOverlay::new(RgbaImage::from_pixel(64, 64, Rgba([255, 165, 0, 255]))),
    };

    let mut builder = QrStyleBuilder::new(data);
    builder
        .ec_level(EcLevel::H) // Logo hides modules, use the highest level
        .dot_color(parse_hex("#0F172A")?) // Defaults to black
        .background_color(parse_hex("#F8FAFC")?) // Defaults to white
        .dot_radius(3.0) // Defaults to 4 px
        .size(600) // Defaults to 512 px
        .logo(&logo);
    let img = builder.build()?;

    let path = export::save_to_gallery(&img, "generated", Some("logo_qr"))?;
    println!("Styled QR code saved to: {}", path.display());
    println!("QR metadata: {}", builder.metadata());

    let share = export::export_for_share(&img, env::temp_dir())?;
    println!("Ready to share as {} ({}): {}", share.subject, share.mime_type, share.path.display());

    Ok(())
}
