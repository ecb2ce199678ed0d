//! Error types for SRS name resolution.

use std::fmt;

/// Error returned when a present SRS name cannot be resolved to an EPSG code.
///
/// The `Display` output is the message meant for the user-facing log, so it
/// can be forwarded to a [`MessageSink`](crate::MessageSink) as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveError {
    /// The SRS name that failed to resolve
    pub input: String,
    /// The specific error that occurred
    pub kind: ResolveErrorKind,
}

/// Specific resolution error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveErrorKind {
    /// The prefix selected a grammar but the full name does not conform to it
    UnsupportedScheme,
    /// The grammar matched but the authority is not EPSG
    UnsupportedAuthority {
        /// The authority token found in the name
        authority: String,
    },
    /// The authority is EPSG but the code token is not a positive integer
    MalformedCode {
        /// The code token found in the name
        code: String,
    },
}

impl ResolveError {
    pub(crate) fn new(input: &str, kind: ResolveErrorKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ResolveErrorKind::UnsupportedScheme => {
                write!(f, "Unsupported CRS scheme '{}'.", self.input)
            }
            ResolveErrorKind::UnsupportedAuthority { .. } => {
                write!(f, "Only EPSG is supported as CRS authority.")
            }
            ResolveErrorKind::MalformedCode { .. } => write!(f, "Failed to interpret EPSG code."),
        }
    }
}

impl std::error::Error for ResolveError {}

impl fmt::Display for ResolveErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedScheme => write!(f, "unsupported scheme"),
            Self::UnsupportedAuthority { authority } => {
                write!(f, "unsupported authority '{authority}'")
            }
            Self::MalformedCode { code } => write!(f, "malformed EPSG code '{code}'"),
        }
    }
}

/// Error for log level parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLevelError {
    /// The value that was not recognized
    pub value: String,
}

impl fmt::Display for LogLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown log level '{}'; expected one of debug, info, warn, error",
            self.value
        )
    }
}

impl std::error::Error for LogLevelError {}
