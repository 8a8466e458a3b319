//! Mode/version selection, bit-stream assembly with padding, and the
//! block-split + Reed-Solomon interleave that produces the final codeword
//! sequence drawn into the matrix.

use crate::bit_buffer::BitBuffer;
use crate::code_ecc::CodeEcc;
use crate::error::QrError;
use crate::reed_solomon;
use crate::segment::Segment;
use crate::tables::{self, ECC_CODEWORDS_PER_BLOCK, NUM_ERROR_CORRECTION_BLOCKS};
use crate::version::Version;

/// Finds the smallest version in `[minversion, maxversion]` whose data
/// capacity (in bits) at `ecl` fits the given segments, returning the
/// version and the segments' exact bit length at that version.
///
/// Fails with [`QrError::DataTooLong`] (or [`QrError::SegmentTooLong`] if a
/// segment's character count doesn't fit its field at any version in range)
/// if no version in the range suffices.
pub fn select_version(
    segs: &[Segment],
    ecl: CodeEcc,
    minversion: Version,
    maxversion: Version,
) -> Result<(Version, usize), QrError> {
    let mut version = minversion;
    loop {
        let capacity_bits = tables::num_data_codewords(version, ecl) * 8;
        let used_bits = Segment::get_total_bits(segs, version);
        if let Some(used) = used_bits {
            if used <= capacity_bits {
                return Ok((version, used));
            }
        }
        if version >= maxversion {
            return Err(match used_bits {
                None => QrError::SegmentTooLong,
                Some(used) => QrError::DataTooLong {
                    used_bits: used,
                    capacity_bits,
                },
            });
        }
        version = Version::new(version.value() + 1);
    }
}

/// Assembles the final padded data codeword sequence for the given segments
/// at the given (already-selected) version and ECL: concatenated segment
/// headers/payloads, terminator (up to 4 zero bits, truncated to remaining
/// capacity), zero-fill to a byte boundary, then alternating `0xEC`/`0x11`
/// pad bytes until the version's data capacity is reached.
pub fn build_data_codewords(segs: &[Segment], ecl: CodeEcc, version: Version) -> Vec<u8> {
    let datacapacitybits = tables::num_data_codewords(version, ecl) * 8;

    let mut bb = BitBuffer::default();
    for seg in segs {
        bb.append_bits(seg.mode().mode_bits(), 4);
        bb.append_bits(u32::try_from(seg.num_chars()).unwrap(), seg.mode().num_char_count_bits(version));
        bb.0.extend_from_slice(seg.data());
    }
    debug_assert!(bb.len() <= datacapacitybits);

    // Terminator: up to 4 zero bits, truncated so as not to exceed capacity.
    let numzerobits = std::cmp::min(4, datacapacitybits - bb.len());
    bb.append_bits(0, u8::try_from(numzerobits).unwrap());

    // Zero-pad to the next byte boundary.
    let numzerobits = bb.len().wrapping_neg() & 7;
    bb.append_bits(0, u8::try_from(numzerobits).unwrap());
    debug_assert_eq!(bb.len() % 8, 0);

    // Pad with alternating bytes until data capacity is reached.
    for &padbyte in [0xECu32, 0x11].iter().cycle() {
        if bb.len() >= datacapacitybits {
            break;
        }
        bb.append_bits(padbyte, 8);
    }

    bb.pack_to_bytes()
}

/// Splits `data` into the standard short/long blocks for `(version, ecl)`,
/// computes each block's Reed-Solomon ECC codewords, and interleaves data
/// and ECC bytes into the final raw codeword sequence (length
/// `num_raw_data_modules(version) / 8`).
///
/// Panics if `data.len()` doesn't equal the expected data codeword count for
/// `(version, ecl)`; this is an internal invariant, not a user-facing error.
pub fn add_ecc_and_interleave(version: Version, ecl: CodeEcc, data: &[u8]) -> Vec<u8> {
    assert_eq!(data.len(), tables::num_data_codewords(version, ecl), "Illegal argument");

    let numblocks = tables::table_get(&NUM_ERROR_CORRECTION_BLOCKS, version, ecl);
    let blockecclen = tables::table_get(&ECC_CODEWORDS_PER_BLOCK, version, ecl);
    let rawcodewords = tables::num_raw_data_modules(version) / 8;
    let numshortblocks = numblocks - rawcodewords % numblocks;
    let shortblocklen = rawcodewords / numblocks;

    let mut blocks = Vec::<Vec<u8>>::with_capacity(numblocks);
    let rsdiv = reed_solomon::compute_divisor(blockecclen);
    let mut k = 0;
    for i in 0..numblocks {
        let datlen = shortblocklen - blockecclen + usize::from(i >= numshortblocks);
        let mut dat = data[k..k + datlen].to_vec();
        k += datlen;
        let ecc = reed_solomon::compute_remainder(&dat, &rsdiv);
        if i < numshortblocks {
            dat.push(0); // Padding byte, skipped again during interleave below.
        }
        dat.extend_from_slice(&ecc);
        blocks.push(dat);
    }

    // Interleave (not concatenate) the bytes from every block.
    let mut result = Vec::<u8>::with_capacity(rawcodewords);
    for i in 0..=shortblocklen {
        for (j, block) in blocks.iter().enumerate() {
            if i != shortblocklen - blockecclen || j >= numshortblocks {
                result.push(block[i]);
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_version_finds_version_one_for_short_text() {
        let segs = Segment::make_segments("Hello, world!").unwrap();
        let (version, used_bits) = select_version(&segs, CodeEcc::Medium, Version::MIN, Version::MAX).unwrap();
        assert_eq!(version, Version::new(1));
        assert_eq!(used_bits, 4 + 8 + 13 * 8);
    }

    #[test]
    fn build_data_codewords_matches_invariant_1() {
        let segs = Segment::make_segments("Hello, world!").unwrap();
        let version = Version::new(1);
        let ecl = CodeEcc::Medium;
        let codewords = build_data_codewords(&segs, ecl, version);
        assert_eq!(codewords.len() * 8, tables::num_data_codewords(version, ecl) * 8);
    }

    #[test]
    fn interleave_length_matches_total_codewords() {
        let version = Version::new(5);
        let ecl = CodeEcc::Quartile;
        let data = vec![0u8; tables::num_data_codewords(version, ecl)];
        let interleaved = add_ecc_and_interleave(version, ecl, &data);
        assert_eq!(interleaved.len(), tables::total_codewords(version));
    }
}
