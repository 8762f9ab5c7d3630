use std::collections::TryReserveError;

use image::ImageError;
use qrcode::types::QrError;
use thiserror::Error;

// Error
//------------------------------------------------------------------------------

/// Top level error returned by every fallible operation of the crate.
///
/// Each variant corresponds to one stage of the pipeline so callers can tell a
/// bad input apart from a failed generation, save or share.
#[derive(Error, Debug)]
pub enum QrStyleError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    #[error("Failed to encode text: {0}")]
    Encoding(#[from] QrError),
    #[error("Failed to render QR: {0}")]
    RenderFailure(#[source] RenderError),
    #[error("Failed to save QR image: {0}")]
    PersistenceFailure(#[source] ExportError),
    #[error("Failed to export QR image for sharing: {0}")]
    ShareFailure(#[source] ExportError),
}

/// Names the caller supplied parameter that was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidArgument {
    #[error("Text cannot be empty")]
    EmptyText,
    #[error("QR size must be greater than 0, got {0}")]
    OutputSize(u32),
    #[error("Dot radius must be a finite value greater than 0, got {0}")]
    DotRadius(f32),
    #[error("Module count {0} does not form a non-empty square matrix")]
    MatrixShape(usize),
    #[error("Quiet zone of {0} modules is too wide")]
    QuietZone(u32),
    #[error("Invalid hex color {0:?}")]
    Color(String),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Canvas of {0}x{0} pixels is too large")]
    CanvasTooLarge(u32),
    #[error("Matrix of {0}x{0} modules is too large")]
    MatrixTooLarge(usize),
    #[error(transparent)]
    Allocation(#[from] TryReserveError),
    #[error("Coordinate {0} is out of pixel range")]
    CoordinateOutOfRange(f32),
    #[error(transparent)]
    Image(#[from] ImageError),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Image(#[from] ImageError),
}

impl From<RenderError> for QrStyleError {
    fn from(err: RenderError) -> Self {
        Self::RenderFailure(err)
    }
}

pub type QrStyleResult<T> = Result<T, QrStyleError>;
