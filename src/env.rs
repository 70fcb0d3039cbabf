//! Process-wide engine environment lifecycle.
//!
//! The engine requires a bring-up call before any handle work and a
//! teardown call after the last handle is gone. Both are once-per-process:
//! the window opens with [`init`], closes with [`shutdown`], and never
//! reopens. Calls outside the window fail with
//! [`FitError::Environment`] instead of corrupting engine state.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::error::{FitError, FitResult};

const UNINITIALIZED: u8 = 0;
const READY: u8 = 1;
const TERMINATED: u8 = 2;

static STATE: AtomicU8 = AtomicU8::new(UNINITIALIZED);

/// Bring the engine environment up.
///
/// Must be called exactly once per process, before the first
/// [`Pixmap`](crate::Pixmap) is created. A second call fails, whether the
/// environment is still up or already torn down.
pub fn init() -> FitResult<()> {
    match STATE.compare_exchange(UNINITIALIZED, READY, Ordering::AcqRel, Ordering::Acquire) {
        Ok(_) => {
            log::debug!("engine environment initialized");
            Ok(())
        }
        Err(READY) => Err(FitError::Environment("is already initialized")),
        Err(_) => Err(FitError::Environment("has been shut down")),
    }
}

/// Tear the engine environment down.
///
/// Must be called exactly once per process, after every handle has been
/// dropped or consumed by [`Pixmap::encode`](crate::Pixmap::encode). The
/// environment cannot be re-initialized afterwards.
pub fn shutdown() -> FitResult<()> {
    match STATE.compare_exchange(READY, TERMINATED, Ordering::AcqRel, Ordering::Acquire) {
        Ok(_) => {
            log::debug!("engine environment shut down");
            Ok(())
        }
        Err(UNINITIALIZED) => Err(FitError::Environment("is not initialized")),
        Err(_) => Err(FitError::Environment("has been shut down")),
    }
}

/// Gate for every operation that touches engine resources.
pub(crate) fn ensure_ready() -> FitResult<()> {
    match STATE.load(Ordering::Acquire) {
        READY => Ok(()),
        UNINITIALIZED => Err(FitError::Environment("is not initialized")),
        _ => Err(FitError::Environment("has been shut down")),
    }
}

// The window can only be walked forward once per process, so unit tests
// here stay inside the READY state that `test_helpers::ready_env` sets up.
// The full uninitialized -> ready -> terminated walk lives in
// tests/env_lifecycle.rs, which owns its own process.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers;

    #[test]
    fn init_is_once_only() {
        test_helpers::ready_env();
        let err = init().unwrap_err();
        assert!(matches!(err, FitError::Environment(_)));
        assert_eq!(err.to_string(), "engine environment is already initialized");
    }

    #[test]
    fn ensure_ready_passes_inside_the_window() {
        test_helpers::ready_env();
        assert!(ensure_ready().is_ok());
    }
}
