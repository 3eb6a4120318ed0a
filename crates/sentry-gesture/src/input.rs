//! Button edge handling. Runs in interrupt context: a debounce check and a
//! flag set, nothing else.

use portable_atomic::{AtomicU64, Ordering};

use crate::config::DEBOUNCE_MS;
use crate::flags::{EventFlags, BUTTON_PRESSED};

const NEVER: u64 = u64::MAX;

/// Accepts an edge only if at least `window_ms` have passed since the last
/// accepted one. The first edge is always accepted.
pub struct Debouncer {
    window_ms: u64,
    last: AtomicU64,
}

impl Debouncer {
    pub const fn new(window_ms: u64) -> Self {
        Self { window_ms, last: AtomicU64::new(NEVER) }
    }

    pub fn accept(&self, now_ms: u64) -> bool {
        let last = self.last.load(Ordering::Acquire);
        let pass = last == NEVER || now_ms.saturating_sub(last) >= self.window_ms;
        if pass {
            self.last.store(now_ms, Ordering::Release);
        }
        pass
    }

    pub fn last_accepted(&self) -> Option<u64> {
        match self.last.load(Ordering::Acquire) {
            NEVER => None,
            t => Some(t),
        }
    }
}

pub struct ButtonIrq<'a> {
    debouncer: Debouncer,
    flags: &'a EventFlags,
}

impl<'a> ButtonIrq<'a> {
    pub const fn new(flags: &'a EventFlags) -> Self {
        Self::with_window(flags, DEBOUNCE_MS)
    }

    pub const fn with_window(flags: &'a EventFlags, window_ms: u64) -> Self {
        Self { debouncer: Debouncer::new(window_ms), flags }
    }

    /// Handle a rising edge at `now_ms`. Returns whether it was accepted.
    pub fn on_rising_edge(&self, now_ms: u64) -> bool {
        let accepted = self.debouncer.accept(now_ms);
        if accepted {
            self.flags.set(BUTTON_PRESSED);
        }
        accepted
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }
}
