//! Generates QR Code symbols from text strings and byte arrays.
//!
//! Implements the QR Code Model 2 specification (ISO/IEC 18004): all 40
//! versions (sizes), all four error correction levels, and the numeric,
//! alphanumeric, and byte character encoding modes. Decoding, Kanji mode,
//! ECI/structured-append, and Micro QR are out of scope.
//!
//! The encoder is a pure function of `(input, ecl)` to a matrix of modules;
//! it performs no I/O and does no logging. Converting that matrix to a
//! raster image is left to a sibling crate (`qr-render` in this workspace).
//!
//! # Examples
//!
//! Simple operation:
//!
//! ```
//! use qr_encode::{QrCode, CodeEcc};
//!
//! let qr = QrCode::encode_text("Hello, world!", CodeEcc::Medium).unwrap();
//! for y in 0..qr.size() {
//!     for x in 0..qr.size() {
//!         let _dark = qr.get_module(x, y);
//!     }
//! }
//! ```
//!
//! Manual operation, choosing segments and a mask explicitly:
//!
//! ```
//! use qr_encode::{Mask, QrCode, CodeEcc, Segment, Version};
//!
//! let segs = Segment::make_segments("3141592653589793238462643383").unwrap();
//! let qr = QrCode::encode_segments_advanced(
//!     &segs, CodeEcc::High, Version::new(5), Version::new(5), Some(Mask::new(2)), false,
//! ).unwrap();
//! ```

mod bit_buffer;
mod code_ecc;
mod encoder;
mod error;
mod finder_penalty;
mod format_info;
mod gf256;
mod mask;
mod matrix;
mod qr_code;
mod reed_solomon;
mod segment;
mod segment_mode;
mod tables;
mod version;

pub use code_ecc::CodeEcc;
pub use error::QrError;
pub use mask::Mask;
pub use qr_code::QrCode;
pub use segment::Segment;
pub use segment_mode::SegmentMode;
pub use version::Version;

pub use tables::{ECC_CODEWORDS_PER_BLOCK, NUM_ERROR_CORRECTION_BLOCKS};

/// Field arithmetic and the Reed-Solomon codec, exposed for testing and for
/// callers building custom low-level pipelines; not needed for ordinary use.
pub mod codec {
    pub use crate::gf256::{exp, inv, mul};
    pub use crate::reed_solomon::{compute_divisor, compute_remainder};
}
