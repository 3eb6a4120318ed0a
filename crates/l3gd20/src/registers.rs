use bitflags::bitflags;

/// Register map of the L3GD20 family.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(non_camel_case_types)]
#[repr(u8)]
pub enum Register {
    WHO_AM_I = 0x0F,
    CTRL_REG1 = 0x20,
    CTRL_REG2 = 0x21,
    CTRL_REG3 = 0x22,
    CTRL_REG4 = 0x23,
    CTRL_REG5 = 0x24,
    OUT_TEMP = 0x26,
    STATUS_REG = 0x27,
    OUT_X_L = 0x28,
    OUT_X_H = 0x29,
    OUT_Y_L = 0x2A,
    OUT_Y_H = 0x2B,
    OUT_Z_L = 0x2C,
    OUT_Z_H = 0x2D,
}

impl Register {
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// Identity reported in `WHO_AM_I`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Device {
    L3gd20,
    L3gd20h,
    I3g4250d,
}

impl Device {
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0xD4 => Some(Self::L3gd20),
            0xD7 => Some(Self::L3gd20h),
            0xD3 => Some(Self::I3g4250d),
            _ => None,
        }
    }

    pub const fn id(self) -> u8 {
        match self {
            Self::L3gd20 => 0xD4,
            Self::L3gd20h => 0xD7,
            Self::I3g4250d => 0xD3,
        }
    }
}

/// Output data rate, `DR[1:0]` in CTRL_REG1.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputDataRate {
    #[default]
    Hz100,
    Hz200,
    Hz400,
    Hz800,
}

impl OutputDataRate {
    const fn bits(self) -> u8 {
        match self {
            Self::Hz100 => 0b00,
            Self::Hz200 => 0b01,
            Self::Hz400 => 0b10,
            Self::Hz800 => 0b11,
        }
    }

    pub const fn hz(self) -> u32 {
        match self {
            Self::Hz100 => 100,
            Self::Hz200 => 200,
            Self::Hz400 => 400,
            Self::Hz800 => 800,
        }
    }
}

/// Low-pass cutoff selection, `BW[1:0]` in CTRL_REG1. The cutoff frequency it
/// maps to depends on the selected output data rate.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bandwidth {
    Bw0,
    Bw1,
    #[default]
    Bw2,
    Bw3,
}

impl Bandwidth {
    const fn bits(self) -> u8 {
        match self {
            Self::Bw0 => 0b00,
            Self::Bw1 => 0b01,
            Self::Bw2 => 0b10,
            Self::Bw3 => 0b11,
        }
    }
}

/// Full-scale selection, `FS[1:0]` in CTRL_REG4.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FullScale {
    Dps250,
    #[default]
    Dps500,
    Dps2000,
}

impl FullScale {
    const fn bits(self) -> u8 {
        match self {
            Self::Dps250 => 0b00,
            Self::Dps500 => 0b01,
            Self::Dps2000 => 0b10,
        }
    }

    /// Sensitivity in millidegrees per second per LSB.
    pub const fn mdps_per_lsb(self) -> f32 {
        match self {
            Self::Dps250 => 8.75,
            Self::Dps500 => 17.5,
            Self::Dps2000 => 70.0,
        }
    }

    /// Sensitivity in radians per second per LSB.
    pub fn rad_per_lsb(self) -> f32 {
        self.mdps_per_lsb() * 1e-3 * (core::f32::consts::PI / 180.0)
    }
}

bitflags! {
    /// CTRL_REG1: data rate, bandwidth, power mode and axis enables.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct Ctrl1: u8 {
        const DR1 = 0b1000_0000;
        const DR0 = 0b0100_0000;
        const BW1 = 0b0010_0000;
        const BW0 = 0b0001_0000;
        /// 0: power down, 1: normal mode
        const PD  = 0b0000_1000;
        const ZEN = 0b0000_0100;
        const YEN = 0b0000_0010;
        const XEN = 0b0000_0001;
    }
}

impl Ctrl1 {
    const DR_MASK: u8 = 0b1100_0000;
    const BW_MASK: u8 = 0b0011_0000;

    pub fn with_odr(self, odr: OutputDataRate) -> Self {
        Self::from_bits_retain((self.bits() & !Self::DR_MASK) | (odr.bits() << 6))
    }

    pub fn with_bandwidth(self, bw: Bandwidth) -> Self {
        Self::from_bits_retain((self.bits() & !Self::BW_MASK) | (bw.bits() << 4))
    }

    pub fn with_normal_mode(self) -> Self {
        self | Self::PD
    }

    pub fn with_all_axes(self) -> Self {
        self | Self::XEN | Self::YEN | Self::ZEN
    }
}

bitflags! {
    /// CTRL_REG4: block data update, endianness, full scale, self test and
    /// serial interface mode.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct Ctrl4: u8 {
        const BDU = 0b1000_0000;
        /// 0: little endian (low byte at the lower address)
        const BLE = 0b0100_0000;
        const FS1 = 0b0010_0000;
        const FS0 = 0b0001_0000;
        const ST1 = 0b0000_0100;
        const ST0 = 0b0000_0010;
        /// 0: 4-wire SPI, 1: 3-wire SPI
        const SIM = 0b0000_0001;
    }
}

impl Ctrl4 {
    const FS_MASK: u8 = 0b0011_0000;

    pub fn with_full_scale(self, fs: FullScale) -> Self {
        Self::from_bits_retain((self.bits() & !Self::FS_MASK) | (fs.bits() << 4))
    }

    /// `FS = 0b11` also selects 2000 dps.
    pub fn full_scale(self) -> FullScale {
        match (self.bits() & Self::FS_MASK) >> 4 {
            0b00 => FullScale::Dps250,
            0b01 => FullScale::Dps500,
            _ => FullScale::Dps2000,
        }
    }
}
