use image::ImageError;
use qr_encode::QrError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QrRenderError {
    #[error("image error: {0}")]
    Image(#[from] ImageError),

    #[error("qr encoding error: {0}")]
    Qr(#[from] QrError),

    #[error("invalid dimensions: scale {scale} at border {border} produced a zero-size image")]
    InvalidDimensions { scale: u32, border: u32 },
}
