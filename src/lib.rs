//! Resolver for EPSG codes in OGC spatial reference system names.
//!
//! Geospatial interchange formats such as `CityGML` and `GML` declare the
//! coordinate reference system of their geometries through a free-form
//! `srsName` attribute. This crate recognizes the three encodings in common
//! use and reduces them to a single EPSG code.
//!
//! # Quick Start
//!
//! ```rust
//! use srs_epsg::{Resolution, resolve};
//!
//! for name in [
//!     "EPSG:4326",
//!     "urn:ogc:def:crs:EPSG::4326",
//!     "http://www.opengis.net/def/crs/EPSG/0/4326",
//! ] {
//!     assert_eq!(resolve(Some(name)).unwrap().as_u32(), 4326);
//! }
//!
//! // Absent and unrecognized names are not errors.
//! assert_eq!(resolve(None).unwrap(), Resolution::Unspecified);
//! ```
//!
//! # Reporting Failures
//!
//! Resolution is pure. Callers that want failures logged pass a
//! [`MessageSink`] explicitly:
//!
//! ```rust
//! use srs_epsg::{ConsoleLog, LogLevel, resolve_reporting};
//!
//! let log = ConsoleLog::with_writer(LogLevel::Info, Vec::new());
//! let code = resolve_reporting(Some("urn:ogc:def:crs:OGC:1.3:CRS84"), &log);
//! assert!(code.is_none());
//! assert_eq!(log.warnings(), 1);
//! ```
//!
//! # Grammars
//!
//! | Prefix | Grammar |
//! |--------|---------|
//! | `http` | `http://www.opengis.net/def/crs/<authority>/0/<code>[/...]` |
//! | `urn`  | `urn:ogc:def:crs[,crs]:<authority>:[version]:<code>[,...]` |
//! | `EPSG` | `EPSG:<code>` |
//!
//! Prefixes are case-sensitive; the authority inside the `http` and `urn`
//! forms is matched case-insensitively and must be `EPSG`.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod epsg_code;
mod error;
pub mod prelude;
mod report;
mod resolution;
mod scheme;

pub use constants::{EPSG_AUTHORITY, EPSG_PREFIX, HTTP_PREFIX, URN_PREFIX};
pub use epsg_code::EpsgCode;
pub use error::{LogLevelError, ResolveError, ResolveErrorKind};
pub use report::{ConsoleLog, LogLevel, MessageSink, TracingSink};
pub use resolution::{Resolution, resolve, resolve_reporting};
pub use scheme::SrsScheme;
