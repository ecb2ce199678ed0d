//! Classification of SRS names into their textual encodings.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{
    EPSG_GRAMMAR, EPSG_PREFIX, HTTP_GRAMMAR, HTTP_PREFIX, URN_GRAMMAR, URN_PREFIX,
};

// Each grammar is compiled once on first use and shared read-only afterwards.
static HTTP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HTTP_GRAMMAR).expect("http grammar is valid"));
static URN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URN_GRAMMAR).expect("urn grammar is valid"));
static EPSG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EPSG_GRAMMAR).expect("EPSG grammar is valid"));

/// The textual encoding of an SRS name.
///
/// # Examples
///
/// ```
/// use srs_epsg::SrsScheme;
///
/// assert_eq!(SrsScheme::classify("urn:ogc:def:crs:EPSG::4326"), Some(SrsScheme::Urn));
/// assert_eq!(SrsScheme::classify("EPSG:4326"), Some(SrsScheme::BareAuthority));
/// assert_eq!(SrsScheme::classify("epsg:4326"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SrsScheme {
    /// `http://www.opengis.net/def/crs/<authority>/0/<code>`
    HttpUri,
    /// `urn:ogc:def:crs:<authority>:<version>:<code>`
    Urn,
    /// `EPSG:<code>`
    BareAuthority,
}

impl SrsScheme {
    /// All schemes in classification order.
    pub const ALL: [Self; 3] = [Self::HttpUri, Self::Urn, Self::BareAuthority];

    /// Classifies a name by prefix. The first matching prefix wins; `None`
    /// means the name uses no known encoding.
    #[must_use]
    pub fn classify(srs_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|scheme| srs_name.starts_with(scheme.prefix()))
    }

    /// Returns the case-sensitive prefix that selects this scheme.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::HttpUri => HTTP_PREFIX,
            Self::Urn => URN_PREFIX,
            Self::BareAuthority => EPSG_PREFIX,
        }
    }

    /// Matches the whole name against this scheme's grammar, returning the
    /// authority and code tokens.
    pub(crate) fn captures(self, srs_name: &str) -> Option<(&str, &str)> {
        let regex: &Regex = match self {
            Self::HttpUri => &HTTP_REGEX,
            Self::Urn => &URN_REGEX,
            Self::BareAuthority => &EPSG_REGEX,
        };
        let caps = regex.captures(srs_name)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }
}

impl fmt::Display for SrsScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HttpUri => "http URI",
            Self::Urn => "URN",
            Self::BareAuthority => "bare authority",
        };
        write!(f, "{name}")
    }
}
