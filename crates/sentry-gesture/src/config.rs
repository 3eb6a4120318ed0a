//! Compile-time tunables and the engine configuration built from them.

/// Template capacity in samples.
pub const CAP: usize = 100;
/// Length of one capture window.
pub const GESTURE_DURATION_MS: u32 = 3000;
/// Pause after each sample within a capture.
pub const SAMPLE_INTERVAL_MS: u32 = 30;
/// Minimum similarity, exclusive, for a verification to be accepted.
pub const SIMILARITY_THRESHOLD: f32 = 0.5;
/// Minimum spacing between two accepted button edges.
pub const DEBOUNCE_MS: u64 = 200;
/// Pause after each handled press before waiting for the next one.
pub const LOOP_YIELD_MS: u32 = 100;

pub const ACCEPT_BLINKS: u8 = 3;
pub const ACCEPT_BLINK_MS: u32 = 200;
pub const REJECT_MS: u32 = 1000;

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureConfig {
    pub duration_ms: u32,
    pub sample_interval_ms: u32,
    pub threshold: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            duration_ms: GESTURE_DURATION_MS,
            sample_interval_ms: SAMPLE_INTERVAL_MS,
            threshold: SIMILARITY_THRESHOLD,
        }
    }
}
