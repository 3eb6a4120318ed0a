use embassy_time::Instant;
use sentry_gesture::Clock;

/// Milliseconds since boot from the embassy time driver.
#[derive(Debug, Copy, Clone, Default)]
pub struct UptimeClock;

impl Clock for UptimeClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
