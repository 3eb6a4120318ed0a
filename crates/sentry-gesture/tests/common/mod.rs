#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::mutex::Mutex;
use embedded_hal_async::delay::DelayNs;
use sentry_gesture::{
    AngularRate, Clock, GestureConfig, GestureEngine, Leds, RateSource, Telemetry,
};

// ---------------------------------------------------------------------------
// Virtual time
// ---------------------------------------------------------------------------

/// Nanosecond counter shared by the clock, the delay and the sample source.
#[derive(Clone, Default)]
pub struct SimTime(Rc<Cell<u64>>);

impl SimTime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ns(&self) -> u64 {
        self.0.get()
    }

    pub fn now_ms(&self) -> u64 {
        self.0.get() / 1_000_000
    }

    pub fn advance_ns(&self, ns: u64) {
        self.0.set(self.0.get() + ns);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance_ns(ms * 1_000_000);
    }
}

#[derive(Clone)]
pub struct SimClock(pub SimTime);

impl Clock for SimClock {
    fn now_ms(&self) -> u64 {
        self.0.now_ms()
    }
}

#[derive(Clone)]
pub struct SimDelay(pub SimTime);

impl DelayNs for SimDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.0.advance_ns(ns as u64);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.0.advance_ms(ms as u64);
    }
}

// ---------------------------------------------------------------------------
// Sample source
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// Serves queued samples, charging `bus_ns` of virtual time per read. Once
/// the queue is drained it keeps returning zero.
pub struct ScriptedSource {
    time: SimTime,
    queue: VecDeque<AngularRate>,
    bus_ns: u64,
    fail_after: Option<usize>,
    pub reads: usize,
}

impl ScriptedSource {
    pub fn new(time: SimTime) -> Self {
        Self { time, queue: VecDeque::new(), bus_ns: 0, fail_after: None, reads: 0 }
    }

    pub fn load(&mut self, samples: &[AngularRate]) {
        self.queue.clear();
        self.queue.extend(samples.iter().copied());
    }

    pub fn set_bus_time_ns(&mut self, ns: u64) {
        self.bus_ns = ns;
    }

    /// Fail every read after `n` more successful ones.
    pub fn fail_after(&mut self, n: usize) {
        self.fail_after = Some(self.reads + n);
    }
}

impl RateSource for ScriptedSource {
    type Error = BusFault;

    async fn sample(&mut self) -> Result<AngularRate, BusFault> {
        self.time.advance_ns(self.bus_ns);
        if self.fail_after.is_some_and(|limit| self.reads >= limit) {
            return Err(BusFault);
        }
        self.reads += 1;
        Ok(self.queue.pop_front().unwrap_or(AngularRate::ZERO))
    }
}

// ---------------------------------------------------------------------------
// LEDs
// ---------------------------------------------------------------------------

/// Output pin that records every write as `(ms, level)`.
#[derive(Clone)]
pub struct RecordingPin {
    time: SimTime,
    pub log: Rc<RefCell<Vec<(u64, bool)>>>,
}

impl RecordingPin {
    pub fn new(time: SimTime) -> Self {
        Self { time, log: Rc::default() }
    }

    pub fn level(&self) -> bool {
        self.log.borrow().last().is_some_and(|&(_, on)| on)
    }

    /// Writes that changed the level, in order.
    pub fn transitions(&self) -> Vec<(u64, bool)> {
        let mut out: Vec<(u64, bool)> = Vec::new();
        let mut level = false;
        for &(t, on) in self.log.borrow().iter() {
            if on != level {
                out.push((t, on));
                level = on;
            }
        }
        out
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

impl embedded_hal::digital::ErrorType for RecordingPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push((self.time.now_ms(), false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push((self.time.now_ms(), true));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Diagnostic sink
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingSink {
    pub bytes: Vec<u8>,
}

impl RecordingSink {
    pub fn text(&self) -> String {
        String::from_utf8(self.bytes.clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_owned).collect()
    }
}

impl embedded_io_async::ErrorType for RecordingSink {
    type Error = Infallible;
}

impl embedded_io_async::Write for RecordingSink {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Infallible> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }
}

pub type Sink = Mutex<NoopRawMutex, RecordingSink>;

pub fn sink() -> Sink {
    Mutex::new(RecordingSink::default())
}

// ---------------------------------------------------------------------------
// Engine fixture
// ---------------------------------------------------------------------------

pub type TestEngine<'a> = GestureEngine<
    'a,
    ScriptedSource,
    SimClock,
    SimDelay,
    RecordingPin,
    RecordingPin,
    NoopRawMutex,
    RecordingSink,
>;

pub struct Rig {
    pub time: SimTime,
    pub green: RecordingPin,
    pub red: RecordingPin,
}

impl Rig {
    pub fn new() -> Self {
        let time = SimTime::new();
        Self { green: RecordingPin::new(time.clone()), red: RecordingPin::new(time.clone()), time }
    }

    pub fn engine<'a>(&self, sink: &'a Sink) -> TestEngine<'a> {
        GestureEngine::new(
            ScriptedSource::new(self.time.clone()),
            SimClock(self.time.clone()),
            SimDelay(self.time.clone()),
            Leds::new(self.green.clone(), self.red.clone()),
            Telemetry::new(sink),
            GestureConfig::default(),
        )
    }
}

// ---------------------------------------------------------------------------
// Sample generators
// ---------------------------------------------------------------------------

pub fn ramp(n: usize) -> Vec<AngularRate> {
    (0..n).map(|i| AngularRate::new(i as f32 * 0.01, 0.0, 0.0)).collect()
}

pub fn constant(n: usize, rate: AngularRate) -> Vec<AngularRate> {
    vec![rate; n]
}

/// Deterministic xorshift32 noise source.
pub struct Noise(u32);

impl Noise {
    pub fn new(seed: u32) -> Self {
        Self(seed.max(1))
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }

    /// Uniform in `[-amp, amp]`.
    pub fn uniform(&mut self, amp: f32) -> f32 {
        let unit = (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32;
        (unit * 2.0 - 1.0) * amp
    }

    pub fn perturb(&mut self, samples: &[AngularRate], amp: f32) -> Vec<AngularRate> {
        samples
            .iter()
            .map(|s| {
                AngularRate::new(
                    s.x + self.uniform(amp),
                    s.y + self.uniform(amp),
                    s.z + self.uniform(amp),
                )
            })
            .collect()
    }
}

/// Mean Euclidean distance computed with the host's exact square root.
pub fn reference_mean_distance(a: &[AngularRate], b: &[AngularRate]) -> f32 {
    let m = a.len().min(b.len());
    let total: f32 = a
        .iter()
        .zip(b)
        .map(|(p, q)| {
            let (dx, dy, dz) = (p.x - q.x, p.y - q.y, p.z - q.z);
            (dx * dx + dy * dy + dz * dz).sqrt()
        })
        .sum();
    total / m as f32
}
