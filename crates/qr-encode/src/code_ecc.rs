/// The error correction level used by a QR Code symbol.
///
/// Levels are ordered by increasing redundancy; a higher level tolerates
/// more damaged/misread codewords at the cost of data capacity.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum CodeEcc {
    /// The QR Code can tolerate about 7% erroneous codewords.
    Low,
    /// The QR Code can tolerate about 15% erroneous codewords.
    Medium,
    /// The QR Code can tolerate about 25% erroneous codewords.
    Quartile,
    /// The QR Code can tolerate about 30% erroneous codewords.
    High,
}

impl CodeEcc {
    /// Returns an unsigned 2-bit integer (in the range 0 to 3), used to index
    /// the static per-ECL tables.
    pub fn ordinal(self) -> usize {
        use CodeEcc::*;
        match self {
            Low => 0,
            Medium => 1,
            Quartile => 2,
            High => 3,
        }
    }

    /// Returns the 2-bit value used in the format information field. Note
    /// this differs from `ordinal()`: the standard's wire encoding of ECC
    /// levels is not in Low/Medium/Quartile/High order.
    pub fn format_bits(self) -> u8 {
        use CodeEcc::*;
        match self {
            Low => 1,
            Medium => 0,
            Quartile => 3,
            High => 2,
        }
    }

    /// Single-letter name as used in the standard (`L`, `M`, `Q`, `H`).
    pub fn letter(self) -> char {
        use CodeEcc::*;
        match self {
            Low => 'L',
            Medium => 'M',
            Quartile => 'Q',
            High => 'H',
        }
    }
}

impl std::str::FromStr for CodeEcc {
    type Err = crate::error::QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use CodeEcc::*;
        match s {
            "L" | "l" => Ok(Low),
            "M" | "m" => Ok(Medium),
            "Q" | "q" => Ok(Quartile),
            "H" | "h" => Ok(High),
            _ => Err(crate::error::QrError::InvalidEcl(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_bits_differ_from_ordinal_order() {
        assert_eq!(CodeEcc::Low.format_bits(), 1);
        assert_eq!(CodeEcc::Medium.format_bits(), 0);
        assert_eq!(CodeEcc::Quartile.format_bits(), 3);
        assert_eq!(CodeEcc::High.format_bits(), 2);
    }

    #[test]
    fn from_str_accepts_standard_letters() {
        assert_eq!("M".parse::<CodeEcc>().unwrap(), CodeEcc::Medium);
        assert_eq!("h".parse::<CodeEcc>().unwrap(), CodeEcc::High);
        assert!("X".parse::<CodeEcc>().is_err());
    }
}
