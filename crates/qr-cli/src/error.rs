use qr_encode::QrError;
use qr_render::QrRenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("encoding failed: {0}")]
    Encode(#[from] QrError),

    #[error("rendering failed: {0}")]
    Render(#[from] QrRenderError),

    #[error("could not write {path}: {source}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid version override {0}: must be between 1 and 40")]
    InvalidVersion(u8),

    #[error("invalid mask override {0}: must be between 0 and 7")]
    InvalidMask(u8),
}
