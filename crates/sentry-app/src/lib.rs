#![no_std]

// This mod MUST go first, so that the others see its macros.
pub mod fmt;

pub mod clock;
pub mod tasks;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use sentry_bsp::SerialTx;
use sentry_gesture::{ButtonIrq, EventFlags};

pub const HW_VERSION: &str = env!("HW_VERSION");
pub const FW_VERSION: &str = env!("FW_VERSION");

/// Events raised by the button task for the gesture task.
pub static FLAGS: EventFlags = EventFlags::new();
/// Debounce state of the user button. Only the button task touches it.
pub static BUTTON: ButtonIrq<'static> = ButtonIrq::new(&FLAGS);

pub type SerialMutexType = CriticalSectionRawMutex;
/// The diagnostic serial port, shared by every writer of status lines.
pub type SerialSink = Mutex<SerialMutexType, SerialTx>;

pub mod prelude {
    pub use super::{
        clock::*, debug, error, info, tasks::*, trace, unwrap, warn,
        SerialMutexType, SerialSink, BUTTON, FLAGS, FW_VERSION, HW_VERSION,
    };
    pub use embassy_executor::Spawner;
    pub use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    pub use embassy_sync::mutex::Mutex;
    pub use embassy_time::{Delay, Duration, Instant, Timer};

    pub use sentry_bsp::{
        ButtonResources, Disc1, Gyro, GyroResources, LedResources,
        SerialResources, SerialTx,
    };
    pub use sentry_gesture::{
        EventFlags, GestureConfig, GestureEngine, GyroService, Leds, Mode,
        Outcome, Telemetry,
    };
}
