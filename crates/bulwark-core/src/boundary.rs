//! The exception boundary
//!
//! [`ExceptionBoundary`] runs an action on the calling thread inside
//! `catch_unwind` and converts an unwinding panic into an [`ErrorInfo`].
//! The panic never continues past the call.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::field;

use crate::config::{BoundaryConfig, ReportLevel};
use crate::hook::HookGuard;
use crate::info::{ErrorInfo, Location};
use crate::payload;

/// Runs actions and reports their panics as values.
///
/// The boundary holds only its configuration; every call is independent
/// and leaves no state behind, so one boundary can be shared freely
/// between threads.
///
/// Actions are wrapped in [`AssertUnwindSafe`]. Data an action mutated
/// before panicking may be left half-updated; the boundary does not try to
/// judge whether the failure is recoverable.
#[derive(Debug, Clone, Default)]
pub struct ExceptionBoundary {
    config: BoundaryConfig,
}

impl ExceptionBoundary {
    /// Create a boundary with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a boundary with the given configuration.
    pub fn with_config(config: BoundaryConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &BoundaryConfig {
        &self.config
    }

    /// Run `action`, returning `Err` if it panicked.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulwark_core::ExceptionBoundary;
    ///
    /// let boundary = ExceptionBoundary::new();
    /// match boundary.run(|| panic!("disk full")) {
    ///     Ok(()) => unreachable!(),
    ///     Err(err) => assert_eq!(err.message, "disk full"),
    /// }
    /// ```
    pub fn run<F>(&self, action: F) -> Result<(), ErrorInfo>
    where
        F: FnOnce(),
    {
        self.call(action)
    }

    /// Run an action that may be absent.
    ///
    /// `None` is a no-op that succeeds immediately.
    pub fn run_optional<F>(&self, action: Option<F>) -> Result<(), ErrorInfo>
    where
        F: FnOnce(),
    {
        match action {
            Some(action) => self.run(action),
            None => {
                tracing::debug!("No action supplied; nothing to run");
                Ok(())
            }
        }
    }

    /// Run an action producing a value, returning `Err` if it panicked.
    pub fn call<T, F>(&self, action: F) -> Result<T, ErrorInfo>
    where
        F: FnOnce() -> T,
    {
        let guard = HookGuard::enter(self.config.quiet, self.config.capture_location);
        let outcome = catch_unwind(AssertUnwindSafe(action));

        match outcome {
            Ok(value) => {
                tracing::trace!("Action completed");
                Ok(value)
            }
            Err(cause) => {
                let info = describe_contained(cause, guard.take_location());
                drop(guard);
                self.report(&info);
                Err(info)
            }
        }
    }

    fn report(&self, info: &ErrorInfo) {
        let domain = info.domain.as_deref().map(field::display);
        let location = info.location.as_ref().map(field::display);

        macro_rules! emit {
            ($level:ident) => {
                tracing::$level!(
                    domain,
                    code = info.code,
                    location,
                    "Intercepted panic: {}",
                    info.message
                )
            };
        }

        match self.config.report_level {
            ReportLevel::Off => {}
            ReportLevel::Error => emit!(error),
            ReportLevel::Warn => emit!(warn),
            ReportLevel::Info => emit!(info),
            ReportLevel::Debug => emit!(debug),
        }
    }
}

/// Convert the payload, including its drop, without letting a second panic out.
///
/// A payload whose `Drop` panics would otherwise unwind from the boundary
/// itself. The second payload is leaked instead of dropped.
fn describe_contained(cause: Box<dyn Any + Send>, location: Option<Location>) -> ErrorInfo {
    let fallback = location.clone();
    match catch_unwind(AssertUnwindSafe(|| payload::describe(cause, location))) {
        Ok(info) => info,
        Err(second) => {
            std::mem::forget(second);
            let info = ErrorInfo::new(payload::UNKNOWN_PAYLOAD_MESSAGE);
            match fallback {
                Some(location) => info.with_location(location),
                None => info,
            }
        }
    }
}

/// Run `action` under a default-configured boundary.
///
/// ```rust
/// assert!(bulwark_core::run(|| {}).is_ok());
/// ```
pub fn run<F>(action: F) -> Result<(), ErrorInfo>
where
    F: FnOnce(),
{
    ExceptionBoundary::new().run(action)
}
