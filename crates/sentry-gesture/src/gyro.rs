//! Gyroscope service: one-time sensor configuration plus per-sample reads
//! that also feed the plot telemetry.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::spi::SpiDevice;
use embedded_io_async::Write;
use l3gd20::{AngularRate, Device, L3gd20};

use crate::telemetry::Telemetry;

/// Anything that yields one angular-rate sample per call.
#[allow(async_fn_in_trait)]
pub trait RateSource {
    type Error;

    async fn sample(&mut self) -> Result<AngularRate, Self::Error>;
}

pub struct GyroService<'a, SPI, M: RawMutex, W> {
    sensor: L3gd20<SPI>,
    telemetry: Telemetry<'a, M, W>,
    plot: bool,
}

impl<'a, SPI, M, W> GyroService<'a, SPI, M, W>
where
    SPI: SpiDevice,
    M: RawMutex,
    W: Write,
{
    pub fn new(sensor: L3gd20<SPI>, telemetry: Telemetry<'a, M, W>) -> Self {
        Self { sensor, telemetry, plot: true }
    }

    /// Identify the sensor. An unknown part is reported but not fatal.
    pub async fn probe(&mut self) -> Result<Option<Device>, l3gd20::Error<SPI::Error>> {
        match self.sensor.probe().await {
            Ok(device) => {
                info!("gyroscope: {}", device);
                Ok(Some(device))
            }
            Err(l3gd20::Error::UnknownDevice(id)) => {
                warn!("unexpected gyroscope WHO_AM_I: {=u8:#x}", id);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Write the control registers. Must complete before the first sample.
    pub async fn init(&mut self) -> Result<(), l3gd20::Error<SPI::Error>> {
        self.sensor.init().await?;
        debug!("gyroscope configured");
        Ok(())
    }

    /// Enable or disable the per-sample `>x_axis/>y_axis/>z_axis` lines.
    pub fn set_plot(&mut self, on: bool) {
        self.plot = on;
    }

    pub fn plot_enabled(&self) -> bool {
        self.plot
    }

    pub fn free(self) -> L3gd20<SPI> {
        self.sensor
    }
}

impl<SPI, M, W> RateSource for GyroService<'_, SPI, M, W>
where
    SPI: SpiDevice,
    M: RawMutex,
    W: Write,
{
    type Error = l3gd20::Error<SPI::Error>;

    async fn sample(&mut self) -> Result<AngularRate, Self::Error> {
        let rate = self.sensor.read_rate().await?;
        if self.plot {
            self.telemetry.plot_rate(&rate).await;
        }
        Ok(rate)
    }
}
