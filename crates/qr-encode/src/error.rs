use thiserror::Error;

/// Errors produced while encoding a QR Code symbol.
///
/// All variants are data-dependent or caller-supplied-selector failures;
/// they surface synchronously to the caller and are never retried
/// internally. Arithmetic post-condition violations (the standard's own
/// invariants) are treated as bugs and caught with `debug_assert!` at their
/// point of origin rather than reported through this enum.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QrError {
    /// A byte-mode segment was given a Unicode code point outside 0-255.
    #[error("character with code point outside 0-255 is not representable in byte mode")]
    UnsupportedCharacter,

    /// No version in the requested range has enough data capacity.
    #[error("data length = {used_bits} bits, max capacity = {capacity_bits} bits")]
    DataTooLong {
        used_bits: usize,
        capacity_bits: usize,
    },

    /// A segment's character count does not fit its mode's count-indicator
    /// field width at any version in the requested range.
    #[error("segment too long for its mode's character count field")]
    SegmentTooLong,

    /// An error-correction-level selector string did not match one of L/M/Q/H.
    #[error("invalid error correction level selector: {0:?}")]
    InvalidEcl(String),
}
