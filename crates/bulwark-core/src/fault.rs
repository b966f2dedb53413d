//! Structured panic payloads
//!
//! A plain `panic!` only carries a message. Code that wants callers of a
//! boundary to branch on a classification raises a [`Fault`] instead; the
//! boundary copies its domain and code into the resulting
//! [`ErrorInfo`](crate::ErrorInfo).

use std::fmt;

/// Panic payload carrying a domain, an optional numeric code and a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    /// Classification of the failure (for example `"storage"`)
    pub domain: String,
    /// Numeric code within the domain
    pub code: Option<i64>,
    /// Human-readable description
    pub message: String,
}

impl Fault {
    /// Create a fault without a code.
    pub fn new(domain: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            code: None,
            message: message.into(),
        }
    }

    /// Attach a numeric code.
    #[must_use]
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    /// Unwind with this fault as the panic payload.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulwark_core::{Fault, run};
    ///
    /// let err = run(|| Fault::new("storage", "disk full").with_code(28).raise()).unwrap_err();
    /// assert_eq!(err.domain.as_deref(), Some("storage"));
    /// assert_eq!(err.code, Some(28));
    /// ```
    #[track_caller]
    pub fn raise(self) -> ! {
        std::panic::panic_any(self)
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} ({}:{})", self.message, self.domain, code),
            None => write!(f, "{} ({})", self.message, self.domain),
        }
    }
}
