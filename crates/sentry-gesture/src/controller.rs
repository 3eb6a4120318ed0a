//! Foreground loop: wait for a press, dispatch it, yield, repeat.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_io_async::Write;

use crate::clock::Clock;
use crate::config::LOOP_YIELD_MS;
use crate::engine::{GestureEngine, Outcome};
use crate::flags::{EventFlags, BUTTON_PRESSED};
use crate::gyro::RateSource;

/// Whatever handles one accepted press.
#[allow(async_fn_in_trait)]
pub trait GestureHandler {
    async fn handle_press(&mut self) -> Outcome;
}

impl<S, C, D, G, R, M, W> GestureHandler for GestureEngine<'_, S, C, D, G, R, M, W>
where
    S: RateSource,
    C: Clock,
    D: DelayNs,
    G: OutputPin,
    R: OutputPin,
    M: RawMutex,
    W: Write,
{
    async fn handle_press(&mut self) -> Outcome {
        GestureEngine::handle_press(self).await
    }
}

/// Wait for one press and handle it.
pub async fn serve_press<H: GestureHandler>(flags: &EventFlags, handler: &mut H) -> Outcome {
    flags.wait_any(BUTTON_PRESSED).await;
    let outcome = handler.handle_press().await;
    match outcome {
        Outcome::Recorded { samples } => info!("recorded {=usize} samples", samples),
        Outcome::Granted { similarity } => info!("access granted ({=f32})", similarity),
        Outcome::Denied { similarity } => info!("access denied ({=f32})", similarity),
        Outcome::NoTemplate => info!("no template stored"),
        Outcome::SensorFault => warn!("press aborted by sensor fault"),
    }
    outcome
}

pub async fn run<H, D>(flags: &EventFlags, handler: &mut H, delay: &mut D) -> !
where
    H: GestureHandler,
    D: DelayNs,
{
    loop {
        serve_press(flags, handler).await;
        delay.delay_ms(LOOP_YIELD_MS).await;
    }
}
