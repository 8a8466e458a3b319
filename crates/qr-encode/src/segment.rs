use crate::bit_buffer::BitBuffer;
use crate::error::QrError;
use crate::segment_mode::SegmentMode;
use crate::tables::ALPHANUMERIC_CHARSET;
use crate::version::Version;

/// A segment of character/binary data in a QR Code symbol.
///
/// Instances are immutable. The mid-level way to create a segment is to take
/// payload data and call a static factory function such as
/// [`Segment::make_numeric`]. The low-level way is to build the bit buffer
/// directly and call [`Segment::new`].
///
/// This struct imposes no length restrictions by itself; a QR Code can only
/// hold so much data at a given version and error correction level, which is
/// checked at encode time.
#[derive(Clone, PartialEq, Eq)]
pub struct Segment {
    mode: SegmentMode,
    numchars: usize,
    data: Vec<bool>,
}

impl Segment {
    /*---- Static factory functions (mid level) ----*/

    /// Returns a segment representing the given binary data encoded in byte
    /// mode. Every byte slice is acceptable.
    pub fn make_bytes(data: &[u8]) -> Self {
        let mut bb = BitBuffer(Vec::with_capacity(data.len() * 8));
        for &b in data {
            bb.append_bits(u32::from(b), 8);
        }
        Segment::new(SegmentMode::Byte, data.len(), bb.0)
    }

    /// Returns a segment representing the given string of decimal digits
    /// encoded in numeric mode.
    ///
    /// Panics if the string contains non-digit characters; callers should
    /// check [`Segment::is_numeric`] first.
    pub fn make_numeric(text: &str) -> Self {
        let mut bb = BitBuffer(Vec::with_capacity(text.len() * 3 + (text.len() + 2) / 3));
        let mut accumdata: u32 = 0;
        let mut accumcount: u8 = 0;
        for b in text.bytes() {
            assert!((b'0'..=b'9').contains(&b), "String contains non-numeric characters");
            accumdata = accumdata * 10 + u32::from(b - b'0');
            accumcount += 1;
            if accumcount == 3 {
                bb.append_bits(accumdata, 10);
                accumdata = 0;
                accumcount = 0;
            }
        }
        if accumcount > 0 {
            bb.append_bits(accumdata, accumcount * 3 + 1);
        }
        Segment::new(SegmentMode::Numeric, text.len(), bb.0)
    }

    /// Returns a segment representing the given text string encoded in
    /// alphanumeric mode: 0-9, A-Z (uppercase only), space, and `$%*+-./:`.
    ///
    /// Panics if the string contains non-encodable characters; callers
    /// should check [`Segment::is_alphanumeric`] first.
    pub fn make_alphanumeric(text: &str) -> Self {
        let mut bb = BitBuffer(Vec::with_capacity(text.len() * 5 + (text.len() + 1) / 2));
        let mut accumdata: u32 = 0;
        let mut accumcount: u32 = 0;
        for c in text.chars() {
            let i = ALPHANUMERIC_CHARSET
                .find(c)
                .expect("String contains unencodable characters in alphanumeric mode");
            accumdata = accumdata * 45 + u32::try_from(i).unwrap();
            accumcount += 1;
            if accumcount == 2 {
                bb.append_bits(accumdata, 11);
                accumdata = 0;
                accumcount = 0;
            }
        }
        if accumcount > 0 {
            bb.append_bits(accumdata, 6);
        }
        Segment::new(SegmentMode::Alphanumeric, text.len(), bb.0)
    }

    /// Classifies `text` as numeric, alphanumeric, or byte mode, following
    /// the same precedence the standard's encoders use to minimize bit
    /// length: numeric first, then alphanumeric, then byte.
    ///
    /// Byte mode maps each Unicode scalar value directly onto a single
    /// output byte (the symbol's byte-mode payload is not a UTF-8 re-encoding
    /// of `text`), so any code point above 255 is rejected with
    /// [`QrError::UnsupportedCharacter`].
    pub fn classify_mode(text: &str) -> Result<SegmentMode, QrError> {
        if Segment::is_numeric(text) {
            Ok(SegmentMode::Numeric)
        } else if Segment::is_alphanumeric(text) {
            Ok(SegmentMode::Alphanumeric)
        } else if text.chars().all(|c| (c as u32) <= 0xFF) {
            Ok(SegmentMode::Byte)
        } else {
            Err(QrError::UnsupportedCharacter)
        }
    }

    /// Returns a list of zero or one segments representing the given text
    /// string, choosing the most compact of numeric/alphanumeric/byte mode.
    ///
    /// Returns `Err` if the text contains a code point outside 0-255 (byte
    /// mode's representable range in this encoder).
    pub fn make_segments(text: &str) -> Result<Vec<Self>, QrError> {
        if text.is_empty() {
            return Ok(vec![]);
        }
        let seg = match Segment::classify_mode(text)? {
            SegmentMode::Numeric => Segment::make_numeric(text),
            SegmentMode::Alphanumeric => Segment::make_alphanumeric(text),
            SegmentMode::Byte => {
                let bytes: Vec<u8> = text.chars().map(|c| c as u32 as u8).collect();
                Segment::make_bytes(&bytes)
            }
            _ => unreachable!("classify_mode never returns Kanji or Eci"),
        };
        Ok(vec![seg])
    }

    /*---- Constructor (low level) ----*/

    /// Creates a new segment with the given attributes and data. The
    /// character count must agree with the mode and bit buffer length, but
    /// this isn't checked here.
    pub fn new(mode: SegmentMode, numchars: usize, data: Vec<bool>) -> Self {
        Self { mode, numchars, data }
    }

    /*---- Instance field getters ----*/

    pub fn mode(&self) -> SegmentMode {
        self.mode
    }

    pub fn num_chars(&self) -> usize {
        self.numchars
    }

    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /*---- Other static functions ----*/

    /// Calculates the number of bits needed to encode the given segments at
    /// the given version, including mode indicators and character count
    /// fields. `None` if a segment's character count doesn't fit its
    /// field's bit width at this version, or the total overflows `usize`.
    pub fn get_total_bits(segs: &[Self], version: Version) -> Option<usize> {
        let mut result: usize = 0;
        for seg in segs {
            let ccbits = seg.mode.num_char_count_bits(version);
            if let Some(limit) = 1usize.checked_shl(ccbits.into()) {
                if seg.numchars >= limit {
                    return None;
                }
            }
            result = result.checked_add(4 + usize::from(ccbits))?;
            result = result.checked_add(seg.data.len())?;
        }
        Some(result)
    }

    /// Tests whether `text` can be encoded as a segment in numeric mode: all
    /// characters are `0`-`9`.
    pub fn is_numeric(text: &str) -> bool {
        text.chars().all(|c| c.is_ascii_digit())
    }

    /// Tests whether `text` can be encoded as a segment in alphanumeric
    /// mode: 0-9, A-Z (uppercase only), space, `$%*+-./:`.
    pub fn is_alphanumeric(text: &str) -> bool {
        text.chars().all(|c| ALPHANUMERIC_CHARSET.contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_prefers_numeric_then_alphanumeric_then_byte() {
        assert_eq!(Segment::classify_mode("0123").unwrap(), SegmentMode::Numeric);
        assert_eq!(
            Segment::classify_mode("HELLO WORLD").unwrap(),
            SegmentMode::Alphanumeric
        );
        assert_eq!(
            Segment::classify_mode("Hello, world! 123").unwrap(),
            SegmentMode::Byte
        );
    }

    #[test]
    fn classify_rejects_codepoints_above_255() {
        assert!(matches!(
            Segment::classify_mode("héllo \u{1F600}"),
            Err(QrError::UnsupportedCharacter)
        ));
    }

    #[test]
    fn byte_segment_maps_codepoints_directly_not_as_utf8() {
        // 'é' is U+00E9, representable in a single byte, unlike its 2-byte UTF-8 encoding.
        let segs = Segment::make_segments("\u{00E9}").unwrap();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].data().len(), 8);
    }
}
