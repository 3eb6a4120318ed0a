use crate::board::{
    ButtonResources, GyroResources, LedResources, SerialResources,
};
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Level, Output, Pull, Speed};
use embassy_stm32::mode::Async;
use embassy_stm32::spi::{self, Spi};
use embassy_stm32::time::Hertz;
use embassy_stm32::usart::{self, UartTx};
use embassy_time::Delay;
use embedded_hal_bus::spi::ExclusiveDevice;
use l3gd20::L3gd20;

/// SPI clock for the gyroscope.
pub const GYRO_SPI_FREQUENCY: Hertz = Hertz(1_000_000);
/// Baud rate of the diagnostic serial port.
pub const SERIAL_BAUD: u32 = 115_200;

/// The gyroscope's SPI device, chip select asserted per transaction.
pub type GyroSpi =
    ExclusiveDevice<Spi<'static, Async>, Output<'static>, Delay>;

pub type Gyro = L3gd20<GyroSpi>;

pub type SerialTx = UartTx<'static, Async>;

impl GyroResources {
    /// SPI5 in mode 3 at [`GYRO_SPI_FREQUENCY`], 8-bit frames, DMA on both
    /// directions.
    pub fn configure(self) -> Gyro {
        let mut config = spi::Config::default();
        config.frequency = GYRO_SPI_FREQUENCY;
        config.mode = spi::MODE_3;

        let bus = Spi::new(
            self.spi,
            self.sck,
            self.mosi,
            self.miso,
            self.tx_dma,
            self.rx_dma,
            config,
        );
        let cs = Output::new(self.cs, Level::High, Speed::VeryHigh);
        let device = ExclusiveDevice::new(bus, cs, Delay)
            .unwrap_or_else(|e| match e {});

        L3gd20::new(device)
    }
}

impl ButtonResources {
    /// The pull-down keeps the line low at rest so a press is one clean
    /// rising edge.
    pub fn configure(self) -> ExtiInput<'static> {
        ExtiInput::new(self.pin, self.exti, Pull::Down)
    }
}

impl LedResources {
    /// Both LEDs, initially off. Returns `(green, red)`.
    pub fn configure(self) -> (Output<'static>, Output<'static>) {
        (
            Output::new(self.green, Level::Low, Speed::Low),
            Output::new(self.red, Level::Low, Speed::Low),
        )
    }
}

impl SerialResources {
    pub fn configure(self) -> Result<SerialTx, usart::ConfigError> {
        let mut config = usart::Config::default();
        config.baudrate = SERIAL_BAUD;
        UartTx::new(self.usart, self.tx, self.tx_dma, config)
    }
}
