#![no_std]
#![no_main]

use embassy_executor::Spawner;
use static_cell::StaticCell;

#[cfg(feature = "defmt")]
use defmt_rtt as _;
#[cfg(feature = "defmt")]
use panic_probe as _;
#[cfg(not(feature = "defmt"))]
use panic_reset as _;

use sentry_app::prelude::*;

static SERIAL: StaticCell<SerialSink> = StaticCell::new();

// Application main entry point. The spawner can be used to start async tasks.
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Embedded Sentry {} on {}", FW_VERSION, HW_VERSION);
    // First we initialize our board. LEDs come up off.
    let board = Disc1::default();
    let (green, red) = board.leds.configure();

    let serial = unwrap!(board.serial.configure());
    let sink: &'static SerialSink = SERIAL.init(Mutex::new(serial));
    Telemetry::new(sink)
        .line(format_args!("Embedded Sentry {} ({})", FW_VERSION, HW_VERSION))
        .await;

    let gyro = board.gyro.configure();
    let button = board.button.configure();

    spawner.must_spawn(button_task(button));
    spawner.must_spawn(gesture_task(gyro, green, red, sink));
}
