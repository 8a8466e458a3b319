use crate::code_ecc::CodeEcc;
use crate::version::Version;

/// The set of all legal characters in alphanumeric mode, where each
/// character's value is its index in this string.
pub static ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

// Used by get_penalty_score() when evaluating which mask is best.
pub const PENALTY_N1: i32 = 3;
pub const PENALTY_N2: i32 = 3;
pub const PENALTY_N3: i32 = 40;
pub const PENALTY_N4: i32 = 10;

pub static ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    // Version: (index 0 is padding, set to an illegal value)
    //0,  1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40    Error correction level
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

pub static NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    // Version: (index 0 is padding, set to an illegal value)
    //0, 1, 2, 3, 4, 5, 6, 7, 8, 9,10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40    Error correction level
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Returns an entry from the given table based on the given version and ECL.
pub fn table_get(table: &'static [[i8; 41]; 4], ver: Version, ecl: CodeEcc) -> usize {
    table[ecl.ordinal()][usize::from(ver.value())] as usize
}

/// Returns the number of data bits that can be stored in a QR Code of the
/// given version, after all function modules are excluded. Includes
/// remainder bits, so it might not be a multiple of 8. Result is in the
/// range [208, 29648].
pub fn num_raw_data_modules(ver: Version) -> usize {
    let v = usize::from(ver.value());
    let mut result: usize = (16 * v + 128) * v + 64;
    if v >= 2 {
        let numalign: usize = v / 7 + 2;
        result -= (25 * numalign - 10) * numalign - 55;
        if v >= 7 {
            result -= 36;
        }
    }
    debug_assert!((208..=29648).contains(&result));
    result
}

/// Returns the number of 8-bit data (non-ECC) codewords contained in a QR
/// Code of the given version and error correction level, with remainder
/// bits discarded.
pub fn num_data_codewords(ver: Version, ecl: CodeEcc) -> usize {
    num_raw_data_modules(ver) / 8
        - table_get(&ECC_CODEWORDS_PER_BLOCK, ver, ecl) * table_get(&NUM_ERROR_CORRECTION_BLOCKS, ver, ecl)
}

/// Returns the total number of codewords (data + ECC) in a QR Code of the
/// given version, independent of error correction level.
pub fn total_codewords(ver: Version) -> usize {
    num_raw_data_modules(ver) / 8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_data_modules_range() {
        assert_eq!(num_raw_data_modules(Version::new(1)), 208);
        assert_eq!(num_raw_data_modules(Version::new(40)), 29648);
    }

    #[test]
    fn data_codewords_invariant_2() {
        let v = Version::new(1);
        let ecl = CodeEcc::Medium;
        let nb = table_get(&NUM_ERROR_CORRECTION_BLOCKS, v, ecl);
        let eb = table_get(&ECC_CODEWORDS_PER_BLOCK, v, ecl);
        assert_eq!(num_data_codewords(v, ecl), total_codewords(v) - nb * eb);
    }
}
