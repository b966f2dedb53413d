//! Panic payload conversion
//!
//! `catch_unwind` hands back an opaque `Box<dyn Any + Send>`. This module
//! recognizes the payload types that actually occur and extracts the most
//! specific description available.

use std::any::Any;

use crate::fault::Fault;
use crate::info::{ErrorInfo, Location};

/// Message used when the payload has no textual form.
pub const UNKNOWN_PAYLOAD_MESSAGE: &str = "panic with a non-string payload";

/// Convert a panic payload into an [`ErrorInfo`].
///
/// Inspection order:
/// 1. [`Fault`]: message, domain and code
/// 2. [`ErrorInfo`]: returned as-is (a [`resumed`](ErrorInfo::resume) error)
/// 3. `&'static str` and `String`: the `panic!` message
/// 4. `Box<dyn Error + Send + Sync>`: its `Display` output
///
/// Anything else yields [`UNKNOWN_PAYLOAD_MESSAGE`]. `location` fills in
/// [`ErrorInfo::location`] unless the payload already carries one.
pub fn describe(payload: Box<dyn Any + Send>, location: Option<Location>) -> ErrorInfo {
    let info = match payload.downcast::<Fault>() {
        Ok(fault) => {
            let Fault {
                domain,
                code,
                message,
            } = *fault;
            let info = ErrorInfo::new(message).with_domain(domain);
            match code {
                Some(code) => info.with_code(code),
                None => info,
            }
        }
        Err(payload) => match payload.downcast::<ErrorInfo>() {
            Ok(info) => *info,
            Err(payload) => ErrorInfo::new(message_of(payload.as_ref())),
        },
    };

    match (info.location.is_none(), location) {
        (true, Some(location)) => info.with_location(location),
        _ => info,
    }
}

fn message_of(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(error) = payload.downcast_ref::<Box<dyn std::error::Error + Send + Sync>>() {
        error.to_string()
    } else {
        UNKNOWN_PAYLOAD_MESSAGE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn boxed<T: Any + Send>(value: T) -> Box<dyn Any + Send> {
        Box::new(value)
    }

    #[rstest]
    #[case(boxed("static message"), "static message")]
    #[case(boxed(String::from("owned message")), "owned message")]
    #[case(
        boxed(Box::<dyn std::error::Error + Send + Sync>::from("boxed error")),
        "boxed error"
    )]
    #[case(boxed(42_u32), UNKNOWN_PAYLOAD_MESSAGE)]
    fn test_message_payloads(#[case] payload: Box<dyn Any + Send>, #[case] expected: &str) {
        let info = describe(payload, None);
        assert_eq!(info.message, expected);
        assert_eq!(info.domain, None);
        assert_eq!(info.code, None);
    }

    #[test]
    fn test_fault_payload() {
        let info = describe(boxed(Fault::new("storage", "disk full").with_code(28)), None);
        assert_eq!(info.message, "disk full");
        assert_eq!(info.domain.as_deref(), Some("storage"));
        assert_eq!(info.code, Some(28));
    }

    #[test]
    fn test_error_info_payload_keeps_its_location() {
        let original = Location {
            file: "a.rs".to_string(),
            line: 1,
            column: 1,
        };
        let later = Location {
            file: "b.rs".to_string(),
            line: 2,
            column: 2,
        };
        let payload = boxed(ErrorInfo::new("boom").with_location(original.clone()));

        let info = describe(payload, Some(later));
        assert_eq!(info.location, Some(original));
    }

    #[test]
    fn test_location_attached_when_missing() {
        let location = Location {
            file: "c.rs".to_string(),
            line: 7,
            column: 5,
        };
        let info = describe(boxed("boom"), Some(location.clone()));
        assert_eq!(info.location, Some(location));
    }
}
