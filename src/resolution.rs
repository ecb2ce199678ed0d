//! Resolution of SRS names to EPSG codes.

use std::fmt;
use std::str::FromStr;

use crate::constants::EPSG_AUTHORITY;
use crate::epsg_code::EpsgCode;
use crate::error::{ResolveError, ResolveErrorKind};
use crate::report::MessageSink;
use crate::scheme::SrsScheme;

/// The successful outcome of resolving an SRS name.
///
/// # Examples
///
/// ```
/// use srs_epsg::{Resolution, resolve};
///
/// let resolved = resolve(Some("urn:ogc:def:crs:EPSG::4326")).unwrap();
/// assert_eq!(resolved.code().map(|c| c.get()), Some(4326));
///
/// assert_eq!(resolve(None).unwrap(), Resolution::Unspecified);
/// assert_eq!(resolve(Some("CRS:84")).unwrap(), Resolution::Unspecified);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// No SRS name was given, or it uses none of the known encodings
    Unspecified,
    /// The name references the given EPSG code
    Resolved(EpsgCode),
}

impl Resolution {
    /// Resolves a present SRS name. Equivalent to `resolve(Some(srs_name))`.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError` if:
    /// - The prefix selects a grammar but the full name does not match it
    /// - The authority is anything other than EPSG
    /// - The code is not a positive integer
    pub fn parse(srs_name: &str) -> Result<Self, ResolveError> {
        let Some(scheme) = SrsScheme::classify(srs_name) else {
            return Ok(Self::Unspecified);
        };

        let (authority, code) = scheme
            .captures(srs_name)
            .ok_or_else(|| ResolveError::new(srs_name, ResolveErrorKind::UnsupportedScheme))?;

        if !authority.eq_ignore_ascii_case(EPSG_AUTHORITY) {
            return Err(ResolveError::new(
                srs_name,
                ResolveErrorKind::UnsupportedAuthority {
                    authority: authority.to_string(),
                },
            ));
        }

        EpsgCode::parse_token(code).map(Self::Resolved).ok_or_else(|| {
            ResolveError::new(
                srs_name,
                ResolveErrorKind::MalformedCode {
                    code: code.to_string(),
                },
            )
        })
    }

    /// Returns the resolved code, if any.
    #[must_use]
    pub const fn code(self) -> Option<EpsgCode> {
        match self {
            Self::Unspecified => None,
            Self::Resolved(code) => Some(code),
        }
    }

    /// Returns the code as an integer, with `0` standing for unspecified.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        match self {
            Self::Unspecified => 0,
            Self::Resolved(code) => code.get(),
        }
    }

    /// Returns true if a code was resolved.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// Resolves an optional SRS name to an EPSG code.
///
/// An absent name, or one that starts with none of `http`, `urn` or `EPSG`,
/// resolves to [`Resolution::Unspecified`].
///
/// # Errors
///
/// Returns `ResolveError` if the name is present, uses a known encoding, and
/// cannot be reduced to an EPSG code. See [`Resolution::parse`].
///
/// # Examples
///
/// ```
/// use srs_epsg::{ResolveErrorKind, resolve};
///
/// let code = resolve(Some("http://www.opengis.net/def/crs/EPSG/0/25832")).unwrap();
/// assert_eq!(code.as_u32(), 25832);
///
/// let err = resolve(Some("http://www.opengis.net/def/crs/OGC/0/CRS84")).unwrap_err();
/// assert!(matches!(err.kind, ResolveErrorKind::UnsupportedAuthority { .. }));
/// ```
pub fn resolve(srs_name: Option<&str>) -> Result<Resolution, ResolveError> {
    srs_name.map_or(Ok(Resolution::Unspecified), Resolution::parse)
}

/// Resolves an optional SRS name, recording any failure on `sink` as a warning.
///
/// Returns the code when one was resolved, and `None` both for unspecified
/// names and for failures.
pub fn resolve_reporting(srs_name: Option<&str>, sink: &dyn MessageSink) -> Option<EpsgCode> {
    match resolve(srs_name) {
        Ok(resolution) => resolution.code(),
        Err(e) => {
            sink.warn(&e.to_string());
            None
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unspecified => write!(f, "unspecified"),
            Self::Resolved(code) => write!(f, "{code}"),
        }
    }
}

impl FromStr for Resolution {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Resolution {
    type Error = ResolveError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<EpsgCode> for Resolution {
    fn from(code: EpsgCode) -> Self {
        Self::Resolved(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ConsoleLog, LogLevel};

    fn resolved(code: u32) -> Resolution {
        Resolution::Resolved(EpsgCode::new(code).unwrap())
    }

    fn kind_of(srs_name: &str) -> ResolveErrorKind {
        Resolution::parse(srs_name).unwrap_err().kind
    }

    #[test]
    fn absent_is_unspecified() {
        assert_eq!(resolve(None), Ok(Resolution::Unspecified));
    }

    #[test]
    fn unknown_prefix_is_unspecified() {
        assert_eq!(resolve(Some("")), Ok(Resolution::Unspecified));
        assert_eq!(resolve(Some("CRS:84")), Ok(Resolution::Unspecified));
        assert_eq!(resolve(Some("epsg:4326")), Ok(Resolution::Unspecified));
    }

    #[test]
    fn resolve_bare_authority() {
        assert_eq!(resolve(Some("EPSG:4326")), Ok(resolved(4326)));
        assert_eq!(resolve(Some("EPSG:25832")), Ok(resolved(25832)));
    }

    #[test]
    fn resolve_urn() {
        assert_eq!(
            resolve(Some("urn:ogc:def:crs:EPSG::4326")),
            Ok(resolved(4326))
        );
        assert_eq!(
            resolve(Some("urn:ogc:def:crs:EPSG:6.12:3068")),
            Ok(resolved(3068))
        );
        assert_eq!(
            resolve(Some("urn:ogc:def:crs:epsg::31468")),
            Ok(resolved(31468))
        );
    }

    #[test]
    fn resolve_compound_urn_takes_first() {
        assert_eq!(
            resolve(Some(
                "urn:ogc:def:crs,crs:EPSG:6.3:4326,urn:ogc:def:crs:EPSG:6.3:5731"
            )),
            Ok(resolved(4326))
        );
    }

    #[test]
    fn resolve_http_uri() {
        assert_eq!(
            resolve(Some("http://www.opengis.net/def/crs/EPSG/0/4326")),
            Ok(resolved(4326))
        );
        assert_eq!(
            resolve(Some("http://www.opengis.net/def/crs/epsg/0/3857/")),
            Ok(resolved(3857))
        );
    }

    #[test]
    fn foreign_authority_is_rejected() {
        assert_eq!(
            kind_of("http://www.opengis.net/def/crs/OGC/0/CRS84"),
            ResolveErrorKind::UnsupportedAuthority {
                authority: "OGC".into()
            }
        );
        assert!(matches!(
            kind_of("urn:ogc:def:crs:OGC:1.3:CRS84"),
            ResolveErrorKind::UnsupportedAuthority { .. }
        ));
    }

    #[test]
    fn malformed_code_is_rejected() {
        assert_eq!(
            kind_of("EPSG:abc"),
            ResolveErrorKind::MalformedCode { code: "abc".into() }
        );
        assert!(matches!(
            kind_of("urn:ogc:def:crs:EPSG::43x6"),
            ResolveErrorKind::MalformedCode { .. }
        ));
        assert!(matches!(
            kind_of("EPSG::4326"),
            ResolveErrorKind::MalformedCode { .. }
        ));
        assert!(matches!(
            kind_of("EPSG:0"),
            ResolveErrorKind::MalformedCode { .. }
        ));
        assert!(matches!(
            kind_of("EPSG:4294967296"),
            ResolveErrorKind::MalformedCode { .. }
        ));
    }

    #[test]
    fn code_range_is_signed_32_bit() {
        assert_eq!(resolve(Some("EPSG:2147483647")), Ok(resolved(2_147_483_647)));
        assert_eq!(
            kind_of("EPSG:2147483648"),
            ResolveErrorKind::MalformedCode {
                code: "2147483648".into()
            }
        );
        assert!(matches!(
            kind_of("urn:ogc:def:crs:EPSG::4294967295"),
            ResolveErrorKind::MalformedCode { .. }
        ));
    }

    #[test]
    fn nonconforming_name_is_unsupported_scheme() {
        for name in [
            "urn:ogc:def:crs:EPSG:4326",
            "https://www.opengis.net/def/crs/EPSG/0/4326",
            "http://www.opengis.net/def/crs/EPSG/4326",
            "EPSG",
            "EPSG:",
            "EPSGX:4326",
            "EPSG:4326\r",
            "urn:ogc:def:crs:EPSG::4326,\r",
            "urn:ogc:def:crs:EPSG::4326,x\u{2028}",
            "http://www.opengis.net/def/crs/EPSG/0/4326/\u{85}",
            "http://wwwXopengis.net/def/crs/EPSG/0/4326",
        ] {
            let err = Resolution::parse(name).unwrap_err();
            assert_eq!(err.kind, ResolveErrorKind::UnsupportedScheme, "{name}");
            assert_eq!(err.input, name);
        }
    }

    #[test]
    fn integer_convention() {
        assert_eq!(Resolution::Unspecified.as_u32(), 0);
        assert_eq!(resolved(4326).as_u32(), 4326);
        assert!(!Resolution::Unspecified.is_resolved());
    }

    #[test]
    fn from_str_matches_parse() {
        let parsed: Resolution = "EPSG:2056".parse().unwrap();
        assert_eq!(parsed, resolved(2056));
        assert_eq!(Resolution::try_from("EPSG:2056").unwrap(), parsed);
        assert_eq!(parsed.to_string(), "EPSG:2056");
    }

    #[test]
    fn resolve_reporting_records_failures_as_warnings() {
        let log = ConsoleLog::with_writer(LogLevel::Info, Vec::new());

        assert_eq!(
            resolve_reporting(Some("EPSG:4326"), &log).map(EpsgCode::get),
            Some(4326)
        );
        assert_eq!(resolve_reporting(None, &log), None);
        assert_eq!(resolve_reporting(Some("EPSG:abc"), &log), None);

        assert_eq!(log.warnings(), 1);
        assert_eq!(log.errors(), 0);
        let out = String::from_utf8(log.into_writer()).unwrap();
        assert!(out.contains("WARN] Failed to interpret EPSG code."));
    }
}
