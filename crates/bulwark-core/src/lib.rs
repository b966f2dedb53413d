//! Bulwark Core Library
//!
//! This crate provides a panic boundary: run a caller-supplied action and
//! turn any panic raised while it runs into a structured [`ErrorInfo`]
//! instead of letting it unwind into the caller.
//!
//! - Boundary execution (`run`, `run_optional`, `call`)
//! - Structured panic payloads with a domain and code ([`Fault`])
//! - Panic hook integration for quiet mode and location capture
//! - Configuration loading
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Action    │────▶│ catch_unwind│────▶│  ErrorInfo  │
//! │  (FnOnce)   │     │  + hook     │     │  (Result)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use bulwark_core::ExceptionBoundary;
//!
//! let boundary = ExceptionBoundary::new();
//!
//! let err = boundary.run(|| panic!("disk full")).unwrap_err();
//! assert_eq!(err.message, "disk full");
//!
//! assert!(boundary.run(|| {}).is_ok());
//! ```
//!
//! # Limits
//!
//! Only unwinding panics are intercepted. Builds with `panic = "abort"`,
//! a panic raised while another one is already unwinding, stack overflow
//! and signals still terminate the process.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod boundary;
pub mod config;
pub mod error;
pub mod fault;
mod hook;
pub mod info;
pub mod payload;

pub use boundary::{ExceptionBoundary, run};
pub use config::{BoundaryConfig, ReportLevel};
pub use error::{Error, Result};
pub use fault::Fault;
pub use info::{ErrorInfo, Location};
