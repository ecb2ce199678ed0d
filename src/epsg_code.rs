//! EPSG code type.

use std::fmt;
use std::num::NonZeroU32;

/// A numeric code under the EPSG authority.
///
/// Codes are always positive; `0` is reserved for "no SRS declared" in the
/// integer convention and never appears as an `EpsgCode`.
///
/// # Examples
///
/// ```
/// use srs_epsg::EpsgCode;
///
/// let code = EpsgCode::new(4326).unwrap();
/// assert_eq!(code.get(), 4326);
/// assert_eq!(code.to_string(), "EPSG:4326");
/// assert!(EpsgCode::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpsgCode(NonZeroU32);

impl EpsgCode {
    /// Creates a code from its integer value, or `None` for `0`.
    #[must_use]
    pub const fn new(code: u32) -> Option<Self> {
        match NonZeroU32::new(code) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Returns the integer value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Parses a captured code token as a signed 32-bit integer, accepting an
    /// optional leading `+`. Values above `i32::MAX` are rejected.
    pub(crate) fn parse_token(token: &str) -> Option<Self> {
        let code = token.parse::<i32>().ok()?;
        u32::try_from(code).ok().and_then(Self::new)
    }
}

impl fmt::Display for EpsgCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}

impl From<EpsgCode> for u32 {
    fn from(code: EpsgCode) -> Self {
        code.get()
    }
}

impl From<NonZeroU32> for EpsgCode {
    fn from(code: NonZeroU32) -> Self {
        Self(code)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EpsgCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.get())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EpsgCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = u32::deserialize(deserializer)?;
        Self::new(code).ok_or_else(|| serde::de::Error::custom("EPSG code must be positive"))
    }
}
