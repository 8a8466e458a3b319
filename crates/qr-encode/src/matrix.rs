//! Module placement: function pattern reservation, zigzag data layout,
//! masking, and penalty scoring. This module owns the raw grid; callers
//! (see [`crate::qr_code::QrCode`]) drive it in the standard order:
//! draw function patterns, draw codewords, try each mask and score it,
//! apply the winner, stamp final format bits.

use crate::bit_buffer::get_bit;
use crate::code_ecc::CodeEcc;
use crate::finder_penalty::FinderPenalty;
use crate::format_info;
use crate::mask::{self, Mask};
use crate::tables::{PENALTY_N1, PENALTY_N2, PENALTY_N3, PENALTY_N4};
use crate::version::Version;

/// The `size x size` grid of modules plus a parallel "is this a function
/// module" grid, used while building a QR Code symbol.
pub struct Matrix {
    pub version: Version,
    pub size: i32,
    // true = dark, false = light.
    modules: Vec<bool>,
    // Function modules are excluded from masking; discarded once the caller
    // has finished drawing and masking.
    isfunction: Vec<bool>,
}

impl Matrix {
    pub fn new(version: Version) -> Self {
        let size = version.size();
        let area = (size * size) as usize;
        Self {
            version,
            size,
            modules: vec![false; area],
            isfunction: vec![false; area],
        }
    }

    pub fn get_module(&self, x: i32, y: i32) -> bool {
        (0..self.size).contains(&x) && (0..self.size).contains(&y) && self.module(x, y)
    }

    fn module(&self, x: i32, y: i32) -> bool {
        self.modules[(y * self.size + x) as usize]
    }

    fn module_mut(&mut self, x: i32, y: i32) -> &mut bool {
        &mut self.modules[(y * self.size + x) as usize]
    }

    fn is_function(&self, x: i32, y: i32) -> bool {
        self.isfunction[(y * self.size + x) as usize]
    }

    // Sets the color of a module and marks it as a function module.
    fn set_function_module(&mut self, x: i32, y: i32, isdark: bool) {
        *self.module_mut(x, y) = isdark;
        self.isfunction[(y * self.size + x) as usize] = true;
    }

    /// Reads this matrix's version field and draws/marks all function
    /// modules: timing patterns, finder patterns, alignment patterns, and
    /// the configuration data placeholders (format bits with a dummy mask,
    /// and version bits if applicable).
    pub fn draw_function_patterns(&mut self) {
        let size = self.size;

        // Timing patterns (drawn first; finder patterns overwrite where they overlap).
        for i in 0..size {
            self.set_function_module(6, i, i % 2 == 0);
            self.set_function_module(i, 6, i % 2 == 0);
        }

        // Three finder patterns (all corners except bottom right).
        self.draw_finder_pattern(3, 3);
        self.draw_finder_pattern(size - 4, 3);
        self.draw_finder_pattern(3, size - 4);

        // Alignment patterns.
        let alignpatpos = self.alignment_pattern_positions();
        let numalign = alignpatpos.len();
        for i in 0..numalign {
            for j in 0..numalign {
                // Skip the three finder corners.
                if !(i == 0 && j == 0 || i == 0 && j == numalign - 1 || i == numalign - 1 && j == 0) {
                    self.draw_alignment_pattern(alignpatpos[i], alignpatpos[j]);
                }
            }
        }

        // Reserve configuration data regions (dummy mask; overwritten by draw_format_bits later).
        self.draw_format_bits(CodeEcc::Low, Mask::new(0));
        self.draw_version();
    }

    /// Draws two copies of the format bits (with their own error correction
    /// code) for the given ECL and mask, overwriting any prior value in
    /// those reserved cells.
    pub fn draw_format_bits(&mut self, ecl: CodeEcc, mask: Mask) {
        let bits = format_info::encode_format_bits(ecl, mask);

        // First copy, around the top-left finder.
        for i in 0..6 {
            self.set_function_module(8, i, get_bit(bits, i));
        }
        self.set_function_module(8, 7, get_bit(bits, 6));
        self.set_function_module(8, 8, get_bit(bits, 7));
        self.set_function_module(7, 8, get_bit(bits, 8));
        for i in 9..15 {
            self.set_function_module(14 - i, 8, get_bit(bits, i));
        }

        // Second copy, mirrored at the top-right and bottom-left.
        let size = self.size;
        for i in 0..8 {
            self.set_function_module(size - 1 - i, 8, get_bit(bits, i));
        }
        for i in 8..15 {
            self.set_function_module(8, size - 15 + i, get_bit(bits, i));
        }
        self.set_function_module(8, size - 8, true); // Dark module, always dark.
    }

    /// Draws two copies of the version bits (with their own error correction
    /// code), iff `7 <= version <= 40`.
    fn draw_version(&mut self) {
        if self.version.value() < 7 {
            return;
        }
        let bits = format_info::encode_version_bits(self.version);
        for i in 0..18 {
            let bit = get_bit(bits, i);
            let a = self.size - 11 + i % 3;
            let b = i / 3;
            self.set_function_module(a, b, bit);
            self.set_function_module(b, a, bit);
        }
    }

    // Draws a 9x9 finder pattern including the border separator, with the
    // center module at (x, y). Modules can be out of bounds.
    fn draw_finder_pattern(&mut self, x: i32, y: i32) {
        for dy in -4..=4 {
            for dx in -4..=4 {
                let xx = x + dx;
                let yy = y + dy;
                if (0..self.size).contains(&xx) && (0..self.size).contains(&yy) {
                    let dist = dx.abs().max(dy.abs()); // Chebyshev distance
                    self.set_function_module(xx, yy, dist != 2 && dist != 4);
                }
            }
        }
    }

    // Draws a 5x5 alignment pattern with the center module at (x, y). All
    // modules must be in bounds.
    fn draw_alignment_pattern(&mut self, x: i32, y: i32) {
        for dy in -2..=2 {
            for dx in -2..=2 {
                self.set_function_module(x + dx, y + dy, dx.abs().max(dy.abs()) != 1);
            }
        }
    }

    /// Returns an ascending list of alignment pattern center positions for
    /// this matrix's version, used on both axes.
    fn alignment_pattern_positions(&self) -> Vec<i32> {
        let ver = self.version.value();
        if ver == 1 {
            return vec![];
        }
        let numalign = i32::from(ver) / 7 + 2;
        let step = if ver == 32 {
            26
        } else {
            (i32::from(ver) * 4 + numalign * 2 + 1) / (numalign * 2 - 2) * 2
        };
        let mut result: Vec<i32> = (0..numalign - 1).map(|i| self.size - 7 - i * step).collect();
        result.push(6);
        result.reverse();
        result
    }

    /// Draws the given sequence of 8-bit codewords (data and ECC,
    /// interleaved) onto the matrix's data area in the standard zigzag scan.
    /// Function modules must already be marked. Remainder bits (if any) are
    /// left as light, per the standard.
    pub fn draw_codewords(&mut self, data: &[u8]) {
        let mut i: usize = 0;
        let mut right = self.size - 1;
        while right >= 1 {
            if right == 6 {
                right = 5; // Skip the vertical timing column.
            }
            for vert in 0..self.size {
                for j in 0..2 {
                    let x = right - j;
                    let upward = (right + 1) & 2 == 0;
                    let y = if upward { self.size - 1 - vert } else { vert };
                    if !self.is_function(x, y) && i < data.len() * 8 {
                        *self.module_mut(x, y) = get_bit(u32::from(data[i >> 3]), 7 - ((i as i32) & 7));
                        i += 1;
                    }
                }
            }
            right -= 2;
        }
        debug_assert_eq!(i, data.len() * 8);
    }

    /// XORs every non-function module by the given mask pattern. Applying
    /// the same mask twice undoes it, since XOR is its own inverse.
    pub fn apply_mask(&mut self, msk: Mask) {
        for y in 0..self.size {
            for x in 0..self.size {
                let invert = mask::apply(msk, x, y);
                *self.module_mut(x, y) ^= invert && !self.is_function(x, y);
            }
        }
    }

    /// Computes the penalty score (P1 + P2 + P3 + P4) for this matrix's
    /// current module values. Used by the automatic mask-selection loop.
    pub fn penalty_score(&self) -> i32 {
        let mut result = 0;
        let size = self.size;

        // P1 + P3: adjacent runs and finder-like patterns, by row.
        for y in 0..size {
            let mut runcolor = false;
            let mut runx = 0;
            let mut runhistory = FinderPenalty::new(size);
            for x in 0..size {
                if self.module(x, y) == runcolor {
                    runx += 1;
                    if runx == 5 {
                        result += PENALTY_N1;
                    } else if runx > 5 {
                        result += 1;
                    }
                } else {
                    runhistory.add_history(runx);
                    if !runcolor {
                        result += runhistory.count_patterns() * PENALTY_N3;
                    }
                    runcolor = self.module(x, y);
                    runx = 1;
                }
            }
            result += runhistory.terminate_and_count(runcolor, runx) * PENALTY_N3;
        }

        // P1 + P3: adjacent runs and finder-like patterns, by column.
        for x in 0..size {
            let mut runcolor = false;
            let mut runy = 0;
            let mut runhistory = FinderPenalty::new(size);
            for y in 0..size {
                if self.module(x, y) == runcolor {
                    runy += 1;
                    if runy == 5 {
                        result += PENALTY_N1;
                    } else if runy > 5 {
                        result += 1;
                    }
                } else {
                    runhistory.add_history(runy);
                    if !runcolor {
                        result += runhistory.count_patterns() * PENALTY_N3;
                    }
                    runcolor = self.module(x, y);
                    runy = 1;
                }
            }
            result += runhistory.terminate_and_count(runcolor, runy) * PENALTY_N3;
        }

        // P2: 2x2 blocks of same-colored modules.
        for y in 0..size - 1 {
            for x in 0..size - 1 {
                let color = self.module(x, y);
                if color == self.module(x + 1, y) && color == self.module(x, y + 1) && color == self.module(x + 1, y + 1) {
                    result += PENALTY_N2;
                }
            }
        }

        // P4: proportion of dark modules.
        let dark: i32 = self.modules.iter().copied().map(i32::from).sum();
        let total = size * size;
        let k = ((dark * 20 - total * 10).abs() + total - 1) / total - 1;
        debug_assert!((0..=9).contains(&k));
        result += k * PENALTY_N4;
        result
    }

    /// Drops the function-module bookkeeping grid, which is only needed
    /// while drawing and masking.
    pub fn finish(mut self) -> Vec<bool> {
        self.isfunction.clear();
        self.isfunction.shrink_to_fit();
        self.modules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_positions_match_reference_table() {
        let m = Matrix::new(Version::new(1));
        assert_eq!(m.alignment_pattern_positions(), Vec::<i32>::new());

        let m = Matrix::new(Version::new(2));
        assert_eq!(m.alignment_pattern_positions(), vec![6, 18]);

        let m = Matrix::new(Version::new(13));
        assert_eq!(m.alignment_pattern_positions(), vec![6, 34, 62]);

        let m = Matrix::new(Version::new(19));
        assert_eq!(m.alignment_pattern_positions(), vec![6, 30, 58, 86]);

        let m = Matrix::new(Version::new(40));
        assert_eq!(
            m.alignment_pattern_positions(),
            vec![6, 30, 58, 86, 114, 142, 170]
        );
    }

    #[test]
    fn dark_module_is_always_dark_after_format_draw() {
        let mut m = Matrix::new(Version::new(1));
        m.draw_function_patterns();
        m.draw_format_bits(CodeEcc::Medium, Mask::new(5));
        assert!(m.get_module(8, m.size - 8));
    }

    #[test]
    fn penalty_proportion_examples() {
        // [0,0,0,0,1,1,1,1] -> 50% dark -> 0 penalty contribution, isolated check
        // via a fresh 1-row-tall matrix is awkward since Matrix is square;
        // instead exercise the formula directly with the same arithmetic.
        let check = |dark: i32, total: i32| ((dark * 20 - total * 10).abs() + total - 1) / total - 1;
        assert_eq!(check(4, 8), 0);
        assert_eq!(check(10, 15), 3); // |p-50| = 16.67 -> floor(/5) = 3
    }
}
