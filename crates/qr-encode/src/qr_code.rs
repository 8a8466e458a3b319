use crate::code_ecc::CodeEcc;
use crate::encoder;
use crate::error::QrError;
use crate::mask::Mask;
use crate::matrix::Matrix;
use crate::segment::Segment;
use crate::version::Version;

/// A QR Code symbol: an immutable square grid of dark and light modules.
///
/// Ways to create one:
///
/// - High level: [`QrCode::encode_text`] or [`QrCode::encode_binary`].
/// - Mid level: [`QrCode::encode_segments`] or [`QrCode::encode_segments_advanced`].
/// - Low level: [`QrCode::encode_codewords`], supplying pre-built data
///   codewords (including segment headers and padding, excluding ECC).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    version: Version,
    size: i32,
    errorcorrectionlevel: CodeEcc,
    mask: Mask,
    modules: Vec<bool>,
}

impl QrCode {
    /*---- Static factory functions (high level) ----*/

    /// Returns a QR Code representing the given text at the given error
    /// correction level, automatically choosing mode, version, and mask.
    pub fn encode_text(text: &str, ecl: CodeEcc) -> Result<Self, QrError> {
        let segs = Segment::make_segments(text)?;
        QrCode::encode_segments(&segs, ecl)
    }

    /// Returns a QR Code representing the given binary data at the given
    /// error correction level, always using byte mode.
    pub fn encode_binary(data: &[u8], ecl: CodeEcc) -> Result<Self, QrError> {
        let segs = [Segment::make_bytes(data)];
        QrCode::encode_segments(&segs, ecl)
    }

    /*---- Static factory functions (mid level) ----*/

    /// Returns a QR Code representing the given segments at the given error
    /// correction level, searching the full version range [1, 40] and
    /// letting the ECC level be boosted if that doesn't increase the version.
    pub fn encode_segments(segs: &[Segment], ecl: CodeEcc) -> Result<Self, QrError> {
        QrCode::encode_segments_advanced(segs, ecl, Version::MIN, Version::MAX, None, true)
    }

    /// Returns a QR Code representing the given segments with the given
    /// encoding parameters.
    ///
    /// The smallest version within `[minversion, maxversion]` that fits the
    /// data is chosen. If `boostecl` is true, the ECC level may be raised
    /// above `ecl` when doing so doesn't require a bigger version. `mask`
    /// forces a specific mask pattern, or `None` to automatically choose the
    /// one with the lowest penalty score (lowest index wins ties).
    pub fn encode_segments_advanced(
        segs: &[Segment],
        mut ecl: CodeEcc,
        minversion: Version,
        maxversion: Version,
        mask: Option<Mask>,
        boostecl: bool,
    ) -> Result<Self, QrError> {
        assert!(minversion <= maxversion, "Invalid value");

        let (version, datausedbits) = encoder::select_version(segs, ecl, minversion, maxversion)?;

        // Raise the ECC level while the data still fits at this version, low to high.
        for &newecl in &[CodeEcc::Medium, CodeEcc::Quartile, CodeEcc::High] {
            if boostecl && datausedbits <= crate::tables::num_data_codewords(version, newecl) * 8 {
                ecl = newecl;
            }
        }

        let datacodewords = encoder::build_data_codewords(segs, ecl, version);
        Ok(QrCode::encode_codewords(version, ecl, &datacodewords, mask))
    }

    /*---- Constructor (low level) ----*/

    /// Creates a new QR Code with the given version, error correction level,
    /// data codeword bytes (already padded to the version's capacity,
    /// excluding ECC), and mask. `mask = None` automatically chooses the
    /// mask with the lowest penalty score.
    pub fn encode_codewords(ver: Version, ecl: CodeEcc, datacodewords: &[u8], mut msk: Option<Mask>) -> Self {
        let mut matrix = Matrix::new(ver);
        matrix.draw_function_patterns();
        let allcodewords = encoder::add_ecc_and_interleave(ver, ecl, datacodewords);
        matrix.draw_codewords(&allcodewords);

        if msk.is_none() {
            let mut minpenalty = i32::MAX;
            for i in 0u8..8 {
                let candidate = Mask::new(i);
                matrix.apply_mask(candidate);
                matrix.draw_format_bits(ecl, candidate);
                let penalty = matrix.penalty_score();
                if penalty < minpenalty {
                    msk = Some(candidate);
                    minpenalty = penalty;
                }
                matrix.apply_mask(candidate); // Undo; XOR is its own inverse.
            }
        }
        let msk = msk.unwrap();
        matrix.apply_mask(msk);
        matrix.draw_format_bits(ecl, msk); // Overwrite with the final choice.

        let size = matrix.size;
        let modules = matrix.finish();
        QrCode {
            version: ver,
            size,
            errorcorrectionlevel: ecl,
            mask: msk,
            modules,
        }
    }

    /*---- Public accessors ----*/

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn error_correction_level(&self) -> CodeEcc {
        self.errorcorrectionlevel
    }

    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Returns the color of the module at `(x, y)`: `true` for dark, `false`
    /// for light. Out-of-bounds coordinates return light, matching the
    /// convention used by the quiet zone.
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        (0..self.size).contains(&x) && (0..self.size).contains(&y) && self.modules[(y * self.size + x) as usize]
    }

    /// Renders this symbol as a `size + 2*border` square of booleans (`true`
    /// = dark), with `border` light modules added on all four sides as the
    /// mandatory quiet zone. Rendering code should use this rather than
    /// re-deriving the border math.
    pub fn to_matrix_with_border(&self, border: u32) -> Vec<Vec<bool>> {
        let border = border as i32;
        let out_size = self.size + border * 2;
        (0..out_size)
            .map(|y| {
                (0..out_size)
                    .map(|x| self.get_module(x - border, y - border))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_world_picks_byte_mode_version_one() {
        // 13 bytes of mixed-case/punctuation text forces byte mode; at ECL
        // Low that's 116 bits against a 152-bit version-1 capacity.
        let qr = QrCode::encode_text("Hello, world!", CodeEcc::Low).unwrap();
        assert_eq!(qr.version(), Version::new(1));
        assert_eq!(qr.size(), 21);
    }

    #[test]
    fn reencoding_same_input_is_deterministic() {
        let a = QrCode::encode_text("Hello, world! 123", CodeEcc::Medium).unwrap();
        let b = QrCode::encode_text("Hello, world! 123", CodeEcc::Medium).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn higher_ecl_never_increases_capacity_so_version_is_monotonic() {
        // A payload sized to just fit version 1 at ECL L should need a
        // bigger (or equal) version as the ECL rises, since capacity only
        // shrinks as redundancy increases.
        let text = "A".repeat(15);
        let mut last_version = Version::MIN;
        for ecl in [CodeEcc::Low, CodeEcc::Medium, CodeEcc::Quartile, CodeEcc::High] {
            let qr = QrCode::encode_text(&text, ecl).unwrap();
            assert!(qr.version() >= last_version);
            last_version = qr.version();
        }
    }

    #[test]
    fn mask_selection_is_deterministic_across_runs() {
        let qr1 = QrCode::encode_text("The quick brown fox jumps over the lazy dog", CodeEcc::Quartile).unwrap();
        let qr2 = QrCode::encode_text("The quick brown fox jumps over the lazy dog", CodeEcc::Quartile).unwrap();
        assert_eq!(qr1.mask(), qr2.mask());
    }

    #[test]
    fn quiet_zone_border_is_light() {
        let qr = QrCode::encode_text("x", CodeEcc::Low).unwrap();
        let grid = qr.to_matrix_with_border(4);
        assert_eq!(grid.len(), (qr.size() + 8) as usize);
        for row in &grid[0..4] {
            assert!(row.iter().all(|&m| !m));
        }
    }

    #[test]
    fn out_of_bounds_module_is_light() {
        let qr = QrCode::encode_text("x", CodeEcc::Low).unwrap();
        assert!(!qr.get_module(-1, -1));
        assert!(!qr.get_module(qr.size(), qr.size()));
    }

    #[test]
    fn forcing_a_mask_is_honored() {
        let segs = Segment::make_segments("3141592653589793238462643383").unwrap();
        let qr = QrCode::encode_segments_advanced(
            &segs,
            CodeEcc::High,
            Version::new(5),
            Version::new(5),
            Some(Mask::new(2)),
            false,
        )
        .unwrap();
        assert_eq!(qr.mask(), Mask::new(2));
        assert_eq!(qr.version(), Version::new(5));
    }
}
