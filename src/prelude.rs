//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use srs_epsg::prelude::*;
//!
//! let code = resolve(Some("EPSG:25832")).unwrap().code();
//! assert_eq!(code.map(EpsgCode::get), Some(25832));
//! ```

pub use crate::{
    // Resolution
    EpsgCode, Resolution, SrsScheme, resolve, resolve_reporting,
    // Reporting
    ConsoleLog, LogLevel, MessageSink, TracingSink,
    // Errors
    LogLevelError, ResolveError, ResolveErrorKind,
};
