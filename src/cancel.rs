//! Cooperative cancellation for looping effects
//!
//! A single boolean flag with process-wide visibility, built on
//! `critical-section` so timer callbacks and interrupt handlers can set
//! it while the render loop polls it. `const fn new` allows placing the
//! token in a `static` shared with an ISR.

use core::cell::Cell;

use critical_section::Mutex;

/// Cancellation flag shared between a render loop and its interrupters.
///
/// Any number of actors may request cancellation; the write is
/// idempotent. The effect loop polls [`is_requested`](Self::is_requested)
/// at the top of each simulation step only — never mid-step — so a
/// request takes effect within one full step's latency. The loop resets
/// the flag on exit, making the token immediately reusable.
pub struct CancelToken {
    requested: Mutex<Cell<bool>>,
}

impl CancelToken {
    pub const fn new() -> Self {
        Self {
            requested: Mutex::new(Cell::new(false)),
        }
    }

    /// Ask the running effect to stop after its current step.
    pub fn request(&self) {
        critical_section::with(|cs| self.requested.borrow(cs).set(true));
    }

    /// Check whether cancellation has been requested.
    pub fn is_requested(&self) -> bool {
        critical_section::with(|cs| self.requested.borrow(cs).get())
    }

    /// Clear the flag so the next effect invocation starts fresh.
    pub fn reset(&self) {
        critical_section::with(|cs| self.requested.borrow(cs).set(false));
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
