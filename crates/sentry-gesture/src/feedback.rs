//! Two-LED user feedback.
//!
//! | state     | green                         | red           |
//! |-----------|-------------------------------|---------------|
//! | idle      | off                           | off           |
//! | capturing | on                            | off           |
//! | accept    | 3 x (on 200 ms, off 200 ms)   | off           |
//! | reject    | off                           | on 1 s, off   |

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::config::{ACCEPT_BLINKS, ACCEPT_BLINK_MS, REJECT_MS};

pub struct Leds<G, R> {
    green: G,
    red: R,
}

impl<G: OutputPin, R: OutputPin> Leds<G, R> {
    /// Take both pins and drive them off.
    pub fn new(green: G, red: R) -> Self {
        let mut leds = Self { green, red };
        leds.idle();
        leds
    }

    // Pin errors are dropped: there is nothing useful left to signal them on.

    pub fn idle(&mut self) {
        self.green.set_low().ok();
        self.red.set_low().ok();
    }

    pub fn capturing(&mut self) {
        self.red.set_low().ok();
        self.green.set_high().ok();
    }

    pub fn capture_done(&mut self) {
        self.green.set_low().ok();
    }

    pub async fn accept(&mut self, delay: &mut impl DelayNs) {
        self.red.set_low().ok();
        for _ in 0..ACCEPT_BLINKS {
            self.green.set_high().ok();
            delay.delay_ms(ACCEPT_BLINK_MS).await;
            self.green.set_low().ok();
            delay.delay_ms(ACCEPT_BLINK_MS).await;
        }
    }

    pub async fn reject(&mut self, delay: &mut impl DelayNs) {
        self.green.set_low().ok();
        self.red.set_high().ok();
        delay.delay_ms(REJECT_MS).await;
        self.red.set_low().ok();
    }

    pub fn free(self) -> (G, R) {
        (self.green, self.red)
    }
}
