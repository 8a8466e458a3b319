/// A QR Code version number between 1 and 40 (inclusive).
///
/// The version determines the symbol's side length: `size = version * 4 + 17`,
/// ranging from 21 (version 1) to 177 (version 40).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Version(u8);

impl Version {
    /// The minimum version number supported by the QR Code Model 2 standard.
    pub const MIN: Version = Version(1);

    /// The maximum version number supported by the QR Code Model 2 standard.
    pub const MAX: Version = Version(40);

    /// Creates a version object from the given number.
    ///
    /// Panics if the number is outside the range [1, 40]. Use this only for
    /// internally-trusted values; for user-supplied overrides prefer
    /// [`Version::try_new`].
    pub fn new(ver: u8) -> Self {
        assert!(
            (Version::MIN.value()..=Version::MAX.value()).contains(&ver),
            "Version number out of range"
        );
        Self(ver)
    }

    /// Creates a version object from the given number, or `None` if it is
    /// outside the range [1, 40]. Intended for validating user-supplied
    /// version overrides at a crate boundary.
    pub fn try_new(ver: u8) -> Option<Self> {
        (Version::MIN.value()..=Version::MAX.value())
            .contains(&ver)
            .then_some(Self(ver))
    }

    /// Returns the value, which is in the range [1, 40].
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the side length of a symbol at this version, in modules.
    pub fn size(self) -> i32 {
        i32::from(self.0) * 4 + 17
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_matches_standard_formula() {
        assert_eq!(Version::new(1).size(), 21);
        assert_eq!(Version::new(40).size(), 177);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(Version::try_new(0).is_none());
        assert!(Version::try_new(41).is_none());
        assert_eq!(Version::try_new(7).map(Version::value), Some(7));
    }

    #[test]
    #[should_panic]
    fn new_panics_out_of_range() {
        Version::new(0);
    }
}
