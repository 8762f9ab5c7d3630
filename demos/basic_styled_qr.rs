use std::error::Error;

use qrstyle::QrStyleBuilder;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let data = "Hello, World!";

    // Simplest usage - black dots on white, 512x512
    let img = QrStyleBuilder::new(data).build()?;

    let path = qrstyle::export::save_to_gallery(&img, "generated", None)?;
    println!("Styled QR code saved to: {}", path.display());

    Ok(())
}
