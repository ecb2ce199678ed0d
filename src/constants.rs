//! Constants for SRS name resolution.

/// Prefix selecting the OGC http URI grammar.
pub const HTTP_PREFIX: &str = "http";

/// Prefix selecting the OGC URN grammar.
pub const URN_PREFIX: &str = "urn";

/// Prefix selecting the bare `EPSG:<code>` grammar. Case-sensitive.
pub const EPSG_PREFIX: &str = "EPSG";

/// The only authority accepted, compared case-insensitively.
pub const EPSG_AUTHORITY: &str = "epsg";

/// Full-string grammar for `http://www.opengis.net/def/crs/<authority>/0/<code>[/...]`.
///
/// The dots of the host are literal. Trailing text may not contain a line
/// terminator (`\n`, `\r`, U+0085, U+2028, U+2029).
pub(crate) const HTTP_GRAMMAR: &str =
    r"^http://www\.opengis\.net/def/crs/([^/]+?)/0/([^/]+?)(?:/[^\n\r\x{85}\x{2028}\x{2029}]*)?$";

/// Full-string grammar for `urn:ogc:def:crs[,crs]:<authority>:[version]:<code>[,...]`.
/// Trailing text may not contain a line terminator.
pub(crate) const URN_GRAMMAR: &str =
    r"^urn:ogc:def:crs(?:,crs)?:([^:]+?):(?:[^:]*?):([^,]+?)(?:,[^\n\r\x{85}\x{2028}\x{2029}]*)?$";

/// Full-string grammar for `EPSG:<code>`.
pub(crate) const EPSG_GRAMMAR: &str = r"^(EPSG):([^\n\r\x{85}\x{2028}\x{2029}]+)$";
