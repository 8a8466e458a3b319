//! Converts a [`qr_encode::QrCode`] matrix into a raster image.
//!
//! This crate is the external collaborator the core encoder intentionally
//! has no opinion about: it owns pixel scaling, the quiet zone, and the PNG
//! container format, none of which affect the symbol's module values.

mod error;

pub use error::QrRenderError;

use image::{DynamicImage, ImageBuffer, ImageFormat, Luma};
use qr_encode::QrCode;
use std::io::Cursor;

/// Default quiet zone width, in modules, per the standard's recommendation.
pub const DEFAULT_BORDER: u32 = 4;

/// Renders `qr` to PNG bytes, with `border` light modules of quiet zone on
/// each side and each module drawn as a `scale x scale` pixel block.
pub fn render_png(qr: &QrCode, border: u32, scale: u32) -> Result<Vec<u8>, QrRenderError> {
    let grid = qr.to_matrix_with_border(border);
    let grid_size = grid.len() as u32;
    if grid_size == 0 || scale == 0 {
        return Err(QrRenderError::InvalidDimensions { scale, border });
    }

    let base: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::from_fn(grid_size, grid_size, |x, y| {
        if grid[y as usize][x as usize] {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    });

    let resized = image::imageops::resize(
        &base,
        grid_size * scale,
        grid_size * scale,
        image::imageops::FilterType::Nearest,
    );

    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(resized).write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qr_encode::CodeEcc;

    #[test]
    fn renders_a_nonempty_png() {
        let qr = QrCode::encode_text("https://example.com", CodeEcc::Medium).unwrap();
        let png = render_png(&qr, DEFAULT_BORDER, 8).unwrap();
        // PNG magic bytes.
        assert_eq!(&png[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn zero_scale_is_rejected() {
        let qr = QrCode::encode_text("x", CodeEcc::Low).unwrap();
        assert!(matches!(
            render_png(&qr, DEFAULT_BORDER, 0),
            Err(QrRenderError::InvalidDimensions { .. })
        ));
    }
}
