//! Strongly typed parameter enumerations for the ADXL313 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config), the register bitfields and the driver
//! accessors. Prefer these types over raw integers to keep register values
//! valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use adxl313::params::{DataRate, Range, WakeUpRate};
//!
//! let rate = DataRate::Hz100;
//! let range = Range::G4;
//! let wake_up = WakeUpRate::Hz8;
//! assert_eq!(rate as u8, 0x0B);
//! let _ = (range, wake_up);
//! ```

use modular_bitfield::prelude::Specifier;

/// Output data rate selections encoded in `BW_RATE[3:0]`.
///
/// Codes below `0b0110` are not used by the ADXL313.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 4]
pub enum DataRate {
    /// 3.125 Hz output data rate.
    Hz3_125 = 0x6,
    /// 6.25 Hz output data rate.
    Hz6_25 = 0x7,
    /// 12.5 Hz output data rate.
    Hz12_5 = 0x8,
    /// 25 Hz output data rate.
    Hz25 = 0x9,
    /// 50 Hz output data rate.
    Hz50 = 0xA,
    /// 100 Hz output data rate.
    Hz100 = 0xB,
    /// 200 Hz output data rate.
    Hz200 = 0xC,
    /// 400 Hz output data rate.
    Hz400 = 0xD,
    /// 800 Hz output data rate.
    Hz800 = 0xE,
    /// 1600 Hz output data rate.
    Hz1600 = 0xF,
}

impl DataRate {
    /// Returns the output data rate in millihertz.
    pub const fn millihertz(self) -> u32 {
        match self {
            Self::Hz3_125 => 3_125,
            Self::Hz6_25 => 6_250,
            Self::Hz12_5 => 12_500,
            Self::Hz25 => 25_000,
            Self::Hz50 => 50_000,
            Self::Hz100 => 100_000,
            Self::Hz200 => 200_000,
            Self::Hz400 => 400_000,
            Self::Hz800 => 800_000,
            Self::Hz1600 => 1_600_000,
        }
    }

    /// Returns the output data rate in hertz.
    pub fn hz(self) -> f32 {
        self.millihertz() as f32 / 1_000.0
    }

    /// Returns `true` when reduced power operation is available at this rate.
    pub const fn supports_low_power(self) -> bool {
        matches!(
            self,
            Self::Hz12_5 | Self::Hz25 | Self::Hz50 | Self::Hz100 | Self::Hz200 | Self::Hz400
        )
    }
}

/// Measurement range selections encoded in `DATA_FORMAT[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum Range {
    /// ±0.5 g.
    G0_5 = 0b00,
    /// ±1 g.
    G1 = 0b01,
    /// ±2 g.
    G2 = 0b10,
    /// ±4 g.
    G4 = 0b11,
}

impl Range {
    /// Returns the full-scale value in milli-g.
    pub const fn full_scale_mg(self) -> u16 {
        match self {
            Self::G0_5 => 500,
            Self::G1 => 1_000,
            Self::G2 => 2_000,
            Self::G4 => 4_000,
        }
    }
}

/// Sleep-mode reading frequency encoded in `POWER_CTL[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum WakeUpRate {
    /// 8 Hz.
    Hz8 = 0b00,
    /// 4 Hz.
    Hz4 = 0b01,
    /// 2 Hz.
    Hz2 = 0b10,
    /// 1 Hz.
    Hz1 = 0b11,
}

impl WakeUpRate {
    /// Returns the reading frequency in hertz.
    pub const fn hz(self) -> u8 {
        match self {
            Self::Hz8 => 8,
            Self::Hz4 => 4,
            Self::Hz2 => 2,
            Self::Hz1 => 1,
        }
    }
}

/// Interface selection bit (`POWER_CTL[6]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum InterfaceSelect {
    /// SPI communication.
    Spi = 0,
    /// I2C communication.
    I2c = 1,
}

/// Output justification bit (`DATA_FORMAT[2]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum Justify {
    /// Right justified with sign extension.
    Right = 0,
    /// Left (MSB) justified.
    Left = 1,
}

/// SPI wire mode bit (`DATA_FORMAT[6]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum SpiWireMode {
    /// 4-wire SPI.
    FourWire = 0,
    /// 3-wire SPI.
    ThreeWire = 1,
}

/// Interrupt polarity bit (`DATA_FORMAT[5]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum InterruptPolarity {
    /// Interrupts are active high.
    ActiveHigh = 0,
    /// Interrupts are active low.
    ActiveLow = 1,
}

/// Activity/inactivity coupling bits (`ACT_INACT_CTL[7]` and `[3]`).
///
/// DC-coupled detection compares each sample against the threshold directly;
/// AC-coupled detection compares against a reference taken when detection
/// starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum Coupling {
    /// DC-coupled operation.
    Dc = 0,
    /// AC-coupled operation.
    Ac = 1,
}
