use crate::prelude::*;
use embassy_stm32::gpio::Output;
use sentry_bsp::GyroSpi;

pub type AppGyro =
    GyroService<'static, GyroSpi, SerialMutexType, SerialTx>;

pub type AppEngine = GestureEngine<
    'static,
    AppGyro,
    UptimeClock,
    Delay,
    Output<'static>,
    Output<'static>,
    SerialMutexType,
    SerialTx,
>;

/// Identify and configure the gyroscope. Failures are logged and the
/// service is returned regardless.
pub async fn start_gyro(
    gyro: Gyro,
    telemetry: Telemetry<'static, SerialMutexType, SerialTx>,
) -> AppGyro {
    let mut service = GyroService::new(gyro, telemetry);
    if service.probe().await.is_err() {
        error!("gyroscope did not answer WHO_AM_I");
    }
    if service.init().await.is_err() {
        error!("gyroscope configuration failed");
    }
    service
}

/// The foreground loop: wait for a press, record or verify, yield.
#[embassy_executor::task]
pub async fn gesture_task(
    gyro: Gyro,
    green: Output<'static>,
    red: Output<'static>,
    sink: &'static SerialSink,
) {
    let telemetry = Telemetry::new(sink);
    let gyro = start_gyro(gyro, telemetry).await;

    let mut engine: AppEngine = GestureEngine::new(
        gyro,
        UptimeClock,
        Delay,
        Leds::new(green, red),
        telemetry,
        GestureConfig::default(),
    );
    info!("ready, next press: {}", engine.mode());

    sentry_gesture::run(&FLAGS, &mut engine, &mut Delay).await
}
