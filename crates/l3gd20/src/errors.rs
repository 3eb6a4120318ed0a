#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<SpiE> {
    Spi(SpiE),
    /// `WHO_AM_I` returned an identity outside the L3GD20 family.
    UnknownDevice(u8),
}

impl<E: core::fmt::Display> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Spi(err) => write!(f, "SPI communication error: {}", err),
            Error::UnknownDevice(id) => {
                write!(f, "Unknown gyroscope identity: 0x{:02X}", id)
            }
        }
    }
}
