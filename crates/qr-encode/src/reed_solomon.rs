//! Block Reed-Solomon error correction over GF(256), as used by QR Code's
//! error-correction layer. The generator polynomial for a block depends only
//! on the number of ECC codewords it carries, not on the data, so callers
//! that encode many blocks of the same degree may cache the divisor.

use crate::gf256;

/// Returns a Reed-Solomon ECC generator polynomial of the given degree, as
/// the array of its `degree` coefficients from highest to lowest power
/// (the leading `x^degree` coefficient, always 1, is implicit and omitted).
///
/// Panics if `degree` is outside [1, 255].
pub fn compute_divisor(degree: usize) -> Vec<u8> {
    assert!((1..=255).contains(&degree), "Degree out of range");
    // Coefficients are stored highest to lowest power, excluding the leading
    // term which is always 1. E.g. x^3 + 255x^2 + 8x + 93 is [255, 8, 93].
    let mut result = vec![0u8; degree - 1];
    result.push(1); // Start off with the monomial x^0

    // Compute (x - r^0)(x - r^1)...(x - r^{degree-1}) and drop the always-1
    // leading term. r = 0x02 is a generator element of GF(2^8)/0x11D.
    let mut root: u8 = 1;
    for _ in 0..degree {
        for j in 0..degree {
            result[j] = gf256::mul(result[j], root);
            if j + 1 < result.len() {
                result[j] ^= result[j + 1];
            }
        }
        root = gf256::mul(root, 0x02);
    }
    result
}

/// Returns the Reed-Solomon ECC codewords for `data`, given its generator
/// divisor polynomial (see [`compute_divisor`]). Output length equals
/// `divisor.len()`.
pub fn compute_remainder(data: &[u8], divisor: &[u8]) -> Vec<u8> {
    let mut result = vec![0u8; divisor.len()];
    for &b in data {
        let factor: u8 = b ^ result.remove(0);
        result.push(0);
        for (x, &y) in result.iter_mut().zip(divisor.iter()) {
            *x ^= gf256::mul(y, factor);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisor_has_exactly_degree_coefficients() {
        for degree in [1usize, 7, 30, 68] {
            assert_eq!(compute_divisor(degree).len(), degree);
        }
    }

    #[test]
    fn zero_message_yields_zero_ecc() {
        let divisor = compute_divisor(10);
        let zero_data = vec![0u8; 16];
        assert_eq!(compute_remainder(&zero_data, &divisor), vec![0u8; 10]);
    }

    #[test]
    #[should_panic]
    fn degree_zero_is_rejected() {
        compute_divisor(0);
    }

    #[test]
    fn known_block_vector() {
        // Version 1, ECL M block: spec.md 8 reference vector.
        let data: [u8; 16] = [
            0x40, 0x56, 0x86, 0x56, 0xC6, 0xC6, 0xF0, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC,
            0x11, 0xEC,
        ];
        let divisor = compute_divisor(10);
        let ecc = compute_remainder(&data, &divisor);
        assert_eq!(
            ecc,
            vec![0x16, 0x4F, 0xDF, 0xD4, 0x8C, 0x11, 0xD1, 0x5C, 0x2F, 0xB7]
        );
    }
}
