use embassy_stm32::peripherals::{
    DMA2_CH3, DMA2_CH4, DMA2_CH7, EXTI0, PA0, PA9, PC1, PF7, PF8, PF9, PG13,
    PG14, SPI5, USART1,
};
use embassy_stm32::rcc::{
    AHBPrescaler, APBPrescaler, Hse, HseMode, Pll, PllMul, PllPDiv,
    PllPreDiv, PllQDiv, PllSource, Sysclk,
};
use embassy_stm32::time::Hertz;
use embassy_stm32::Peri;

/// The L3GD20 on SPI5.
pub struct GyroResources {
    pub spi: Peri<'static, SPI5>,
    pub sck: Peri<'static, PF7>,
    pub miso: Peri<'static, PF8>,
    pub mosi: Peri<'static, PF9>,
    pub cs: Peri<'static, PC1>,
    pub tx_dma: Peri<'static, DMA2_CH4>,
    pub rx_dma: Peri<'static, DMA2_CH3>,
}

/// The blue user button, pulled low and driven high while pressed.
pub struct ButtonResources {
    pub pin: Peri<'static, PA0>,
    pub exti: Peri<'static, EXTI0>,
}

pub struct LedResources {
    /// LD3
    pub green: Peri<'static, PG13>,
    /// LD4
    pub red: Peri<'static, PG14>,
}

/// Transmit half of USART1, routed to the ST-LINK virtual COM port.
pub struct SerialResources {
    pub usart: Peri<'static, USART1>,
    pub tx: Peri<'static, PA9>,
    pub tx_dma: Peri<'static, DMA2_CH7>,
}

/// The peripherals of the STM32F429I-DISC1 used by the lock.
pub struct Disc1 {
    /// Peripherals for the gyroscope.
    pub gyro: GyroResources,
    /// Peripherals for the user button.
    pub button: ButtonResources,
    /// Peripherals for the status LEDs.
    pub leds: LedResources,
    /// Peripherals for the diagnostic serial port.
    pub serial: SerialResources,
}

impl Default for Disc1 {
    fn default() -> Self {
        let mut config = embassy_stm32::Config::default();
        // 8 MHz from the ST-LINK MCO, 168 MHz SYSCLK, 48 MHz PLL48CK.
        config.rcc.hse = Some(Hse {
            freq: Hertz(8_000_000),
            mode: HseMode::Bypass,
        });
        config.rcc.pll_src = PllSource::HSE;
        config.rcc.pll = Some(Pll {
            prediv: PllPreDiv::DIV4,
            mul: PllMul::MUL168,
            divp: Some(PllPDiv::DIV2),
            divq: Some(PllQDiv::DIV7),
            divr: None,
        });
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV4;
        config.rcc.apb2_pre = APBPrescaler::DIV2;
        config.rcc.sys = Sysclk::PLL1_P;
        Self::new(config)
    }
}

impl Disc1 {
    /// Create a new instance based on HAL configuration
    pub fn new(config: embassy_stm32::Config) -> Self {
        let p = embassy_stm32::init(config);

        Self {
            gyro: GyroResources {
                spi: p.SPI5,
                sck: p.PF7,
                miso: p.PF8,
                mosi: p.PF9,
                cs: p.PC1,
                tx_dma: p.DMA2_CH4,
                rx_dma: p.DMA2_CH3,
            },
            button: ButtonResources { pin: p.PA0, exti: p.EXTI0 },
            leds: LedResources { green: p.PG13, red: p.PG14 },
            serial: SerialResources {
                usart: p.USART1,
                tx: p.PA9,
                tx_dma: p.DMA2_CH7,
            },
        }
    }
}
