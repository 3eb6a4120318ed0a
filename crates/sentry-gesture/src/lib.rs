#![no_std]
//! Gesture capture and matching for the Embedded Sentry lock.
//!
//! A button press alternates between recording a three-second gyroscope
//! template and verifying a fresh capture against it. Verification scores
//! the two series by mean per-sample Euclidean distance and signals the
//! result on a green/red LED pair.
//!
//! Everything here is board-independent: the sensor comes in as a
//! [`RateSource`], time as a [`Clock`] and a `DelayNs`, the LEDs as
//! `OutputPin`s and the diagnostic port as an `embedded_io_async::Write`.

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod capture;
pub mod clock;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod flags;
pub mod gyro;
pub mod input;
pub mod similarity;
pub mod telemetry;
pub mod template;

pub use clock::Clock;
pub use config::*;
pub use controller::{run, serve_press, GestureHandler};
pub use engine::{GestureEngine, Mode, Outcome};
pub use error::Error;
pub use feedback::Leds;
pub use flags::{EventFlags, BUTTON_PRESSED};
pub use gyro::{GyroService, RateSource};
pub use input::{ButtonIrq, Debouncer};
pub use l3gd20::AngularRate;
pub use similarity::{is_match, similarity};
pub use telemetry::Telemetry;
pub use template::GestureTemplate;
