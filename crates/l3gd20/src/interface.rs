//! Register-level access over a full-duplex SPI device.
//!
//! Each call issues exactly one transaction and resolves once the transfer
//! has completed, so at most one transfer is ever in flight per device.

use embedded_hal::spi::Operation;
use embedded_hal_async::spi::SpiDevice;

use crate::errors::Error;
use crate::registers::Register;

/// Set on the address byte for a read.
pub const READ: u8 = 0x80;
/// Set on the address byte to auto-increment the address across a burst.
pub const AUTO_INCREMENT: u8 = 0x40;
const ADDR_MASK: u8 = 0x3F;

pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<E, SPI> SpiInterface<SPI>
where
    SPI: SpiDevice<Error = E>,
{
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Transmit `[addr, value]` with the read and auto-increment bits clear.
    pub async fn write_register(
        &mut self,
        reg: Register,
        value: u8,
    ) -> Result<(), Error<E>> {
        self.spi
            .write(&[reg.addr() & ADDR_MASK, value])
            .await
            .map_err(Error::Spi)
    }

    /// Transmit `addr | READ | AUTO_INCREMENT` followed by `N` dummy bytes and
    /// return the `N` bytes shifted in after the address byte.
    pub async fn read_burst<const N: usize>(
        &mut self,
        reg: Register,
    ) -> Result<[u8; N], Error<E>> {
        let mut buf = [0u8; N];
        let cmd = (reg.addr() & ADDR_MASK) | READ | AUTO_INCREMENT;
        self.spi
            .transaction(&mut [Operation::Write(&[cmd]), Operation::Read(&mut buf)])
            .await
            .map_err(Error::Spi)?;
        Ok(buf)
    }

    pub async fn read_register(&mut self, reg: Register) -> Result<u8, Error<E>> {
        let [value] = self.read_burst::<1>(reg).await?;
        Ok(value)
    }

    pub fn free(self) -> SPI {
        self.spi
    }
}
