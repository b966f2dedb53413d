//! Structured description of an intercepted panic
//!
//! [`ErrorInfo`] is what a boundary hands back instead of an unwinding
//! panic. It always carries a human-readable message; the domain and code
//! are filled in when the panic payload exposes them (see [`crate::Fault`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Source position of the `panic!` that was intercepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Source file
    pub file: String,
    /// 1-based line
    pub line: u32,
    /// 1-based column
    pub column: u32,
}

impl From<&std::panic::Location<'_>> for Location {
    fn from(location: &std::panic::Location<'_>) -> Self {
        Self {
            file: location.file().to_string(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// A panic intercepted during action execution.
///
/// Constructed only on the failure path of a boundary call and owned by the
/// caller afterwards.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}{message}", tag(.domain, .code))]
pub struct ErrorInfo {
    /// Human-readable panic message
    pub message: String,

    /// Classification of the failure, when the payload carried one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Numeric code, when the payload carried one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,

    /// Where the panic was raised
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

fn tag(domain: &Option<String>, code: &Option<i64>) -> String {
    match (domain, code) {
        (Some(domain), Some(code)) => format!("[{domain}:{code}] "),
        (Some(domain), None) => format!("[{domain}] "),
        (None, Some(code)) => format!("[#{code}] "),
        (None, None) => String::new(),
    }
}

impl ErrorInfo {
    /// Create an error carrying only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            domain: None,
            code: None,
            location: None,
        }
    }

    /// Set the classification domain.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set the numeric code.
    #[must_use]
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the panic location.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Re-raise this error as a panic.
    ///
    /// The payload is the `ErrorInfo` itself, so an enclosing boundary
    /// recovers it unchanged, original location included.
    #[track_caller]
    pub fn resume(self) -> ! {
        std::panic::panic_any(self)
    }
}
