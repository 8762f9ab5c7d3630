use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};
use tracing::{debug, info};

use crate::common::error::{ExportError, QrStyleError, QrStyleResult, RenderError};

pub const PNG_MIME_TYPE: &str = "image/png";
pub const DEFAULT_FILE_NAME: &str = "qr_code";
pub const SHARE_FILE_NAME: &str = "qr_code.png";
pub const SHARE_SUBJECT: &str = "QR Code";
pub const SHARE_CHOOSER_TITLE: &str = "Share QR Code";

/// Everything a share sheet needs to offer the exported image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareBundle {
    pub path: PathBuf,
    pub mime_type: &'static str,
    pub subject: &'static str,
    pub chooser_title: &'static str,
}

// PNG
//------------------------------------------------------------------------------

/// Encodes the image as PNG in memory, for display.
pub fn encode_png(image: &RgbImage) -> QrStyleResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png).map_err(RenderError::from)?;
    Ok(buffer.into_inner())
}

fn write_png(image: &RgbImage, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

fn png_file_name(file_name: Option<&str>) -> String {
    let name = file_name.map(str::trim).filter(|n| !n.is_empty()).unwrap_or(DEFAULT_FILE_NAME);
    if name.to_ascii_lowercase().ends_with(".png") {
        name.to_string()
    } else {
        format!("{name}.png")
    }
}

// Gallery
//------------------------------------------------------------------------------

/// Saves the image as `<dir>/<file_name>.png`, creating `dir` if needed.
///
/// A missing or blank name falls back to [`DEFAULT_FILE_NAME`].
pub fn save_to_gallery(
    image: &RgbImage,
    dir: impl AsRef<Path>,
    file_name: Option<&str>,
) -> QrStyleResult<PathBuf> {
    let path = dir.as_ref().join(png_file_name(file_name));
    debug!("Saving QR image to {}", path.display());

    write_png(image, &path).map_err(QrStyleError::PersistenceFailure)?;
    info!("Saved {}x{} QR image to {}", image.width(), image.height(), path.display());
    Ok(path)
}

// Share
//------------------------------------------------------------------------------

/// Writes the image to `<cache_dir>/qr_code.png` and describes it for sharing.
pub fn export_for_share(
    image: &RgbImage,
    cache_dir: impl AsRef<Path>,
) -> QrStyleResult<ShareBundle> {
    let path = cache_dir.as_ref().join(SHARE_FILE_NAME);
    debug!("Exporting QR image for sharing to {}", path.display());

    write_png(image, &path).map_err(QrStyleError::ShareFailure)?;
    info!("Exported QR image for sharing to {}", path.display());
    Ok(ShareBundle {
        path,
        mime_type: PNG_MIME_TYPE,
        subject: SHARE_SUBJECT,
        chooser_title: SHARE_CHOOSER_TITLE,
    })
}
