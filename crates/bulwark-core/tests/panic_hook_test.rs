//! Panic hook chaining
//!
//! The boundary hook is installed once per process and chains to the hook
//! that was active at that moment, so these checks live in their own test
//! binary with a counting hook set before any boundary runs. Everything is
//! in one test to keep the process-wide hook state ordered.

use std::sync::atomic::{AtomicUsize, Ordering};

use bulwark_core::{BoundaryConfig, ExceptionBoundary};

static REPORTED: AtomicUsize = AtomicUsize::new(0);

fn reported() -> usize {
    REPORTED.load(Ordering::SeqCst)
}

#[test]
fn test_hook_chains_to_previous_hook() {
    std::panic::set_hook(Box::new(|_| {
        REPORTED.fetch_add(1, Ordering::SeqCst);
    }));

    let quiet = ExceptionBoundary::new();
    let loud = ExceptionBoundary::with_config(BoundaryConfig::default().with_quiet(false));

    // First entry installs the boundary hook on top of the counting one.
    assert!(quiet.run(|| panic!("quiet")).is_err());
    assert_eq!(reported(), 0, "quiet boundary must not reach the previous hook");

    let unguarded = std::panic::catch_unwind(|| panic!("unguarded"));
    assert!(unguarded.is_err());
    assert_eq!(reported(), 1, "panics outside a boundary reach the previous hook");

    let err = loud.run(|| panic!("loud")).unwrap_err();
    assert_eq!(err.message, "loud");
    assert!(err.location.is_some());
    assert_eq!(reported(), 2, "non-quiet boundary forwards to the previous hook");

    assert!(quiet.run(|| panic!("quiet again")).is_err());
    assert_eq!(reported(), 2);

    let _ = std::panic::take_hook();
}
