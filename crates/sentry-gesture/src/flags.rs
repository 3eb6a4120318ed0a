//! Event flags shared between interrupt context and the foreground task.
//!
//! Bits are set from any context and consumed by a single waiter. Waiting
//! clears the bits it returns, so one `set` is observed by at most one
//! `wait_*` call.

use core::future::poll_fn;
use core::task::Poll;

use embassy_sync::waitqueue::AtomicWaker;
use portable_atomic::{AtomicU32, Ordering};

/// A valid button edge has been observed.
pub const BUTTON_PRESSED: u32 = 1 << 1;

pub struct EventFlags {
    bits: AtomicU32,
    waker: AtomicWaker,
}

impl Default for EventFlags {
    fn default() -> Self {
        Self::new()
    }
}

impl EventFlags {
    pub const fn new() -> Self {
        Self { bits: AtomicU32::new(0), waker: AtomicWaker::new() }
    }

    /// Set `mask` and wake the waiter. Safe to call from an interrupt.
    pub fn set(&self, mask: u32) {
        self.bits.fetch_or(mask, Ordering::AcqRel);
        self.waker.wake();
    }

    pub fn clear(&self, mask: u32) {
        self.bits.fetch_and(!mask, Ordering::AcqRel);
    }

    pub fn get(&self) -> u32 {
        self.bits.load(Ordering::Acquire)
    }

    /// Wait until any bit of `mask` is set, clear those bits and return
    /// which of them were set.
    pub async fn wait_any(&self, mask: u32) -> u32 {
        poll_fn(|cx| {
            self.waker.register(cx.waker());
            let prev = self.bits.fetch_and(!mask, Ordering::AcqRel);
            match prev & mask {
                0 => Poll::Pending,
                hit => Poll::Ready(hit),
            }
        })
        .await
    }

    /// Wait until every bit of `mask` is set, then clear them.
    pub async fn wait_all(&self, mask: u32) -> u32 {
        poll_fn(|cx| {
            self.waker.register(cx.waker());
            let taken =
                self.bits.fetch_update(Ordering::AcqRel, Ordering::Acquire, |b| {
                    (b & mask == mask).then_some(b & !mask)
                });
            match taken {
                Ok(_) => Poll::Ready(mask),
                Err(_) => Poll::Pending,
            }
        })
        .await
    }
}
