//! The gesture engine: one template slot, a mode flag, and the record and
//! verify procedures that drive capture, comparison and LED feedback.

use core::mem;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_io_async::Write;

use crate::capture::capture;
use crate::clock::Clock;
use crate::config::GestureConfig;
use crate::error::Error;
use crate::feedback::Leds;
use crate::gyro::RateSource;
use crate::similarity::{is_match, similarity};
use crate::telemetry::Telemetry;
use crate::template::GestureTemplate;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    #[default]
    Record,
    Verify,
}

impl Mode {
    pub const fn toggled(self) -> Self {
        match self {
            Mode::Record => Mode::Verify,
            Mode::Verify => Mode::Record,
        }
    }
}

/// Result of handling one press.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    Recorded { samples: usize },
    Granted { similarity: f32 },
    Denied { similarity: f32 },
    /// Verification requested before any template was recorded.
    NoTemplate,
    /// The sensor failed mid-capture; the stored template is unchanged.
    SensorFault,
}

pub struct GestureEngine<'a, S, C, D, G, R, M: RawMutex, W> {
    source: S,
    clock: C,
    delay: D,
    leds: Leds<G, R>,
    telemetry: Telemetry<'a, M, W>,
    config: GestureConfig,
    saved: GestureTemplate,
    /// Scratch buffer for the capture in progress.
    attempt: GestureTemplate,
    saved_present: bool,
    next_mode: Mode,
}

impl<'a, S, C, D, G, R, M, W> GestureEngine<'a, S, C, D, G, R, M, W>
where
    S: RateSource,
    C: Clock,
    D: DelayNs,
    G: OutputPin,
    R: OutputPin,
    M: RawMutex,
    W: Write,
{
    pub fn new(
        source: S,
        clock: C,
        delay: D,
        leds: Leds<G, R>,
        telemetry: Telemetry<'a, M, W>,
        config: GestureConfig,
    ) -> Self {
        Self {
            source,
            clock,
            delay,
            leds,
            telemetry,
            config,
            saved: GestureTemplate::new(),
            attempt: GestureTemplate::new(),
            saved_present: false,
            next_mode: Mode::Record,
        }
    }

    pub fn mode(&self) -> Mode {
        self.next_mode
    }

    /// Override the mode the next press runs in.
    pub fn force_mode(&mut self, mode: Mode) {
        self.next_mode = mode;
    }

    pub fn has_template(&self) -> bool {
        self.saved_present
    }

    pub fn template(&self) -> Option<&GestureTemplate> {
        self.saved_present.then_some(&self.saved)
    }

    /// The most recent verification capture, or the previous template after
    /// a recording replaced it.
    pub fn last_attempt(&self) -> &GestureTemplate {
        &self.attempt
    }

    pub fn source(&mut self) -> &mut S {
        &mut self.source
    }

    /// Run one press in the current mode, then advance the mode.
    ///
    /// A press in [`Mode::Verify`] with nothing stored falls back to
    /// [`Mode::Record`]; every other press toggles.
    pub async fn handle_press(&mut self) -> Outcome {
        let mode = self.next_mode;
        let outcome = match mode {
            Mode::Record => self.record().await,
            Mode::Verify => self.verify().await,
        };

        let outcome = outcome.unwrap_or_else(|_| {
            error!("gyroscope read failed during {}", mode);
            self.leds.idle();
            Outcome::SensorFault
        });

        self.next_mode = match outcome {
            Outcome::NoTemplate => Mode::Record,
            _ => mode.toggled(),
        };
        debug!("next mode: {}", self.next_mode);
        outcome
    }

    /// Capture a new template. The stored one is replaced only if the
    /// capture completes.
    pub async fn record(&mut self) -> Result<Outcome, Error<S::Error>> {
        self.telemetry.status("Recording gesture...").await;
        let n = self.capture_attempt().await?;

        mem::swap(&mut self.saved, &mut self.attempt);
        self.saved_present = true;
        info!("gesture recorded: {=usize} samples", n);
        self.telemetry
            .line(format_args!("Gesture recorded with {} samples", n))
            .await;
        Ok(Outcome::Recorded { samples: n })
    }

    /// Capture an attempt and compare it against the stored template.
    pub async fn verify(&mut self) -> Result<Outcome, Error<S::Error>> {
        if !self.saved_present {
            warn!("verify requested with no stored gesture");
            self.telemetry
                .status("No gesture stored! Record a gesture first.")
                .await;
            self.leds.reject(&mut self.delay).await;
            return Ok(Outcome::NoTemplate);
        }

        self.telemetry.status("Verifying gesture...").await;
        self.capture_attempt().await?;

        let s = similarity(&self.saved, &self.attempt);
        info!(
            "similarity {=f32} over {=usize}/{=usize} samples",
            s,
            self.saved.len(),
            self.attempt.len()
        );
        self.telemetry.line(format_args!("Similarity: {:.2}", s)).await;

        if is_match(s, self.config.threshold) {
            self.telemetry.status("Access granted!").await;
            self.leds.accept(&mut self.delay).await;
            Ok(Outcome::Granted { similarity: s })
        } else {
            self.telemetry.status("Access denied!").await;
            self.leds.reject(&mut self.delay).await;
            Ok(Outcome::Denied { similarity: s })
        }
    }

    async fn capture_attempt(&mut self) -> Result<usize, Error<S::Error>> {
        self.leds.capturing();
        let res = capture(
            &mut self.source,
            &self.clock,
            &mut self.delay,
            &self.config,
            &mut self.attempt,
        )
        .await;
        self.leds.capture_done();
        Ok(res?)
    }
}
