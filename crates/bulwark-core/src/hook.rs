//! Process panic hook used by boundaries
//!
//! The hook is installed once and chains to whatever hook was active at
//! that point. It only changes behavior on threads that are currently
//! inside a boundary: there it records the panic location and, in quiet
//! mode, skips the previous hook so caught panics are not reported on
//! stderr.
//!
//! A hook set with [`std::panic::set_hook`] after installation replaces
//! this one; boundaries keep working but lose quiet mode and locations.

use std::cell::{Cell, RefCell};
use std::sync::Once;

use crate::info::Location;

static INSTALL: Once = Once::new();

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
    static QUIET: Cell<bool> = const { Cell::new(false) };
    static CAPTURE: Cell<bool> = const { Cell::new(false) };
    static LAST_LOCATION: RefCell<Option<Location>> = const { RefCell::new(None) };
}

fn install() {
    INSTALL.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if DEPTH.get() == 0 {
                previous(info);
                return;
            }
            if CAPTURE.get() {
                let location = info.location().map(Location::from);
                LAST_LOCATION.with_borrow_mut(|slot| *slot = location);
            }
            if !QUIET.get() {
                previous(info);
            }
        }));
        tracing::debug!("Installed boundary panic hook");
    });
}

/// Marks the current thread as inside a boundary until dropped.
///
/// Guards nest; dropping one restores the flags of the enclosing boundary.
pub(crate) struct HookGuard {
    outer_quiet: bool,
    outer_capture: bool,
}

impl HookGuard {
    pub(crate) fn enter(quiet: bool, capture_location: bool) -> Self {
        install();
        let guard = Self {
            outer_quiet: QUIET.replace(quiet),
            outer_capture: CAPTURE.replace(capture_location),
        };
        DEPTH.set(DEPTH.get() + 1);
        LAST_LOCATION.with_borrow_mut(|slot| *slot = None);
        guard
    }

    /// Take the location recorded by the hook since `enter`, if any.
    pub(crate) fn take_location(&self) -> Option<Location> {
        LAST_LOCATION.with_borrow_mut(Option::take)
    }
}

impl Drop for HookGuard {
    fn drop(&mut self) {
        DEPTH.set(DEPTH.get() - 1);
        QUIET.set(self.outer_quiet);
        CAPTURE.set(self.outer_capture);
        LAST_LOCATION.with_borrow_mut(|slot| *slot = None);
    }
}

#[cfg(test)]
pub(crate) fn depth() -> usize {
    DEPTH.get()
}

#[cfg(test)]
pub(crate) fn pending_location() -> Option<Location> {
    LAST_LOCATION.with_borrow(Clone::clone)
}
