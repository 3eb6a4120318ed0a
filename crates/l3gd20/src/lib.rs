#![no_std]
//! Async driver for the ST L3GD20 family of 3-axis MEMS gyroscopes
//! (L3GD20, L3GD20H, I3G4250D) on a 4-wire SPI bus.
//!
//! The driver configures the sensor once through [`L3gd20::init`] and then
//! returns one angular-rate triple per [`L3gd20::read_rate`] call, converted
//! to radians per second with the sensitivity of the configured full scale.

use embedded_hal_async::spi::SpiDevice;

pub use crate::errors::Error;
pub use crate::interface::SpiInterface;
pub use crate::registers::*;

pub mod errors;
pub mod interface;
pub mod registers;

/// Raw signed counts for the three axes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawRate {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawRate {
    /// Assemble `X_L, X_H, Y_L, Y_H, Z_L, Z_H` as read from `OUT_X_L`.
    pub fn from_le_bytes(data: [u8; 6]) -> Self {
        Self {
            x: i16::from_le_bytes([data[0], data[1]]),
            y: i16::from_le_bytes([data[2], data[3]]),
            z: i16::from_le_bytes([data[4], data[5]]),
        }
    }

    pub fn scaled(&self, fs: FullScale) -> AngularRate {
        let k = fs.rad_per_lsb();
        AngularRate {
            x: self.x as f32 * k,
            y: self.y as f32 * k,
            z: self.z as f32 * k,
        }
    }
}

/// Angular rate in radians per second.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AngularRate {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AngularRate {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub odr: OutputDataRate,
    pub bandwidth: Bandwidth,
    pub full_scale: FullScale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            odr: OutputDataRate::Hz100,
            bandwidth: Bandwidth::Bw2,
            full_scale: FullScale::Dps500,
        }
    }
}

impl Config {
    /// CTRL_REG1: configured data rate and bandwidth, normal mode, X/Y/Z on.
    pub fn ctrl1(&self) -> Ctrl1 {
        Ctrl1::empty()
            .with_odr(self.odr)
            .with_bandwidth(self.bandwidth)
            .with_normal_mode()
            .with_all_axes()
    }

    /// CTRL_REG4: continuous update, little endian, configured full scale,
    /// no self test, 4-wire SPI.
    pub fn ctrl4(&self) -> Ctrl4 {
        Ctrl4::empty().with_full_scale(self.full_scale)
    }
}

pub struct L3gd20<SPI> {
    iface: SpiInterface<SPI>,
    config: Config,
}

impl<E, SPI> L3gd20<SPI>
where
    SPI: SpiDevice<Error = E>,
{
    pub fn new(spi: SPI) -> Self {
        Self::with_config(spi, Config::default())
    }

    pub fn with_config(spi: SPI, config: Config) -> Self {
        Self { iface: SpiInterface::new(spi), config }
    }

    pub async fn who_am_i(&mut self) -> Result<u8, Error<E>> {
        self.iface.read_register(Register::WHO_AM_I).await
    }

    /// Identify the part on the bus.
    pub async fn probe(&mut self) -> Result<Device, Error<E>> {
        let id = self.who_am_i().await?;
        Device::from_id(id).ok_or(Error::UnknownDevice(id))
    }

    /// Write CTRL_REG1 then CTRL_REG4.
    pub async fn init(&mut self) -> Result<(), Error<E>> {
        let ctrl1 = self.config.ctrl1();
        self.iface.write_register(Register::CTRL_REG1, ctrl1.bits()).await?;
        let ctrl4 = self.config.ctrl4();
        self.iface.write_register(Register::CTRL_REG4, ctrl4.bits()).await
    }

    pub async fn read_raw(&mut self) -> Result<RawRate, Error<E>> {
        let data = self.iface.read_burst::<6>(Register::OUT_X_L).await?;
        Ok(RawRate::from_le_bytes(data))
    }

    pub async fn read_rate(&mut self) -> Result<AngularRate, Error<E>> {
        let raw = self.read_raw().await?;
        Ok(raw.scaled(self.config.full_scale))
    }

    pub fn interface(&mut self) -> &mut SpiInterface<SPI> {
        &mut self.iface
    }

    pub fn free(self) -> SPI {
        self.iface.free()
    }
}
