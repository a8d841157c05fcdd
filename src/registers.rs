//! Register map definitions for the ADXL313 accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{
    Coupling, DataRate, InterfaceSelect, InterruptPolarity, Justify, Range, SpiWireMode,
    WakeUpRate,
};

/// Register address of `DEVID_0`.
pub const REG_DEVID_0: u8 = 0x00;
/// Register address of `DEVID_1`.
pub const REG_DEVID_1: u8 = 0x01;
/// Register address of `PARTID`.
pub const REG_PARTID: u8 = 0x02;
/// Register address of `REVID`.
pub const REG_REVID: u8 = 0x03;
/// Register address of `XID`.
pub const REG_XID: u8 = 0x04;
/// Register address of `SOFT_RESET`.
pub const REG_SOFT_RESET: u8 = 0x18;
/// Register address of `OFSX` (3.9 mg/LSB).
pub const REG_OFSX: u8 = 0x1E;
/// Register address of `OFSY` (3.9 mg/LSB).
pub const REG_OFSY: u8 = 0x1F;
/// Register address of `OFSZ` (3.9 mg/LSB).
pub const REG_OFSZ: u8 = 0x20;
/// Register address of `THRESH_ACT` (15.625 mg/LSB).
pub const REG_THRESH_ACT: u8 = 0x24;
/// Register address of `THRESH_INACT` (15.625 mg/LSB).
pub const REG_THRESH_INACT: u8 = 0x25;
/// Register address of `TIME_INACT` (1 s/LSB).
pub const REG_TIME_INACT: u8 = 0x26;
/// Register address of `ACT_INACT_CTL`.
pub const REG_ACT_INACT_CTL: u8 = 0x27;
/// Register address of `BW_RATE`.
pub const REG_BW_RATE: u8 = 0x2C;
/// Register address of `POWER_CTL`.
pub const REG_POWER_CTL: u8 = 0x2D;
/// Register address of `INT_ENABLE`.
pub const REG_INT_ENABLE: u8 = 0x2E;
/// Register address of `INT_MAP`.
pub const REG_INT_MAP: u8 = 0x2F;
/// Register address of `INT_SOURCE`.
pub const REG_INT_SOURCE: u8 = 0x30;
/// Register address of `DATA_FORMAT`.
pub const REG_DATA_FORMAT: u8 = 0x31;
/// Register address of `DATAX0`, first of the six axis data registers.
pub const REG_DATAX0: u8 = 0x32;

/// Expected content of `DEVID_0`.
pub const EXPECTED_DEVID_0: u8 = 0xAD;
/// Expected content of `DEVID_1`.
pub const EXPECTED_DEVID_1: u8 = 0x1D;
/// Expected content of `PARTID`.
pub const EXPECTED_PART_ID: u8 = 0xCB;

/// Soft reset command value written to the `SOFT_RESET` register.
pub const RESET_COMMAND: u8 = 0x52;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Write-only register.
    WriteOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every single-address register value type.
pub trait Register {
    /// Raw storage backing the register payload.
    type Raw: Copy;
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Optional reset/default value defined by the datasheet.
    const RESET_VALUE: Option<Self::Raw>;
    /// Bits carrying a field; reserved bits are always written as zero.
    const DEFINED_BITS: Self::Raw;
}

/// Bitfield representation of the `POWER_CTL` register (address `0x2D`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerControl {
    // Sleep-mode reading frequency (bits 1:0).
    pub wake_up: WakeUpRate,
    // Sleep mode, suppresses DATA_READY (bit 2).
    pub sleep: bool,
    // Measurement mode; cleared means standby (bit 3).
    pub measure: bool,
    // Switch to sleep on inactivity when linked (bit 4).
    pub auto_sleep: bool,
    // Serial activity/inactivity link (bit 5).
    pub link: bool,
    // Interface selection (bit 6).
    pub interface: InterfaceSelect,
    #[skip]
    __: B1,
}

impl From<u8> for PowerControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<PowerControl> for u8 {
    fn from(value: PowerControl) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `DATA_FORMAT` register (address `0x31`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataFormat {
    // g-range selection (bits 1:0).
    pub range: Range,
    // Output justification (bit 2).
    pub justify: Justify,
    // Full-resolution mode (bit 3).
    pub full_resolution: bool,
    #[skip]
    __: B1,
    // Interrupt polarity (bit 5).
    pub interrupt_polarity: InterruptPolarity,
    // 3-wire/4-wire SPI selection (bit 6).
    pub spi_wire_mode: SpiWireMode,
    // Self-test force enable (bit 7).
    pub self_test: bool,
}

impl From<u8> for DataFormat {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<DataFormat> for u8 {
    fn from(value: DataFormat) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `BW_RATE` register (address `0x2C`).
///
/// Rate codes outside [`DataRate`] decode through `rate_or_err`.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandwidthRate {
    // Output data rate code (bits 3:0).
    pub rate: DataRate,
    // Reduced power operation (bit 4).
    pub low_power: bool,
    #[skip]
    __: B3,
}

impl From<u8> for BandwidthRate {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<BandwidthRate> for u8 {
    fn from(value: BandwidthRate) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `ACT_INACT_CTL` register (address `0x27`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActInactControl {
    // Z axis participates in inactivity detection (bit 0).
    pub inactivity_z: bool,
    // Y axis participates in inactivity detection (bit 1).
    pub inactivity_y: bool,
    // X axis participates in inactivity detection (bit 2).
    pub inactivity_x: bool,
    // Inactivity coupling (bit 3).
    pub inactivity_coupling: Coupling,
    // Z axis participates in activity detection (bit 4).
    pub activity_z: bool,
    // Y axis participates in activity detection (bit 5).
    pub activity_y: bool,
    // X axis participates in activity detection (bit 6).
    pub activity_x: bool,
    // Activity coupling (bit 7).
    pub activity_coupling: Coupling,
}

impl From<u8> for ActInactControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<ActInactControl> for u8 {
    fn from(value: ActInactControl) -> Self {
        value.into_bytes()[0]
    }
}

/// Interrupt bit layout shared by `INT_ENABLE` (`0x2E`), `INT_MAP` (`0x2F`)
/// and `INT_SOURCE` (`0x30`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptFlags {
    // FIFO overrun (bit 0).
    pub overrun: bool,
    // FIFO watermark (bit 1).
    pub watermark: bool,
    #[skip]
    __: B1,
    // Inactivity (bit 3).
    pub inactivity: bool,
    // Activity (bit 4).
    pub activity: bool,
    #[skip]
    __: B2,
    // Data ready (bit 7).
    pub data_ready: bool,
}

/// Bits of `INT_ENABLE`/`INT_MAP` carrying an interrupt; bits 6, 5 and 2 are unused.
pub const INTERRUPT_FLAGS_MASK: u8 = 0x9B;

impl From<u8> for InterruptFlags {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<InterruptFlags> for u8 {
    fn from(value: InterruptFlags) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for PowerControl {
    type Raw = u8;
    const ADDRESS: u8 = REG_POWER_CTL;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
    const DEFINED_BITS: Self::Raw = 0x7F;
}

impl Register for DataFormat {
    type Raw = u8;
    const ADDRESS: u8 = REG_DATA_FORMAT;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
    const DEFINED_BITS: Self::Raw = 0xEF;
}

impl Register for BandwidthRate {
    type Raw = u8;
    const ADDRESS: u8 = REG_BW_RATE;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x0A);
    const DEFINED_BITS: Self::Raw = 0x1F;
}

impl Register for ActInactControl {
    type Raw = u8;
    const ADDRESS: u8 = REG_ACT_INACT_CTL;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
    const DEFINED_BITS: Self::Raw = 0xFF;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_control_layout_matches_datasheet() {
        let power = PowerControl::new()
            .with_interface(InterfaceSelect::I2c)
            .with_link(true)
            .with_auto_sleep(false)
            .with_measure(true)
            .with_sleep(false)
            .with_wake_up(WakeUpRate::Hz1);

        assert_eq!(u8::from(power), 0b0_1_1_0_1_0_11);
        assert_eq!(PowerControl::from(0b0010_1011), power.with_interface(InterfaceSelect::Spi));
    }

    /// Bit 4 of `DATA_FORMAT` stays clear with every other field set.
    #[test]
    fn data_format_leaves_bit_four_clear() {
        let format = DataFormat::new()
            .with_self_test(true)
            .with_spi_wire_mode(SpiWireMode::ThreeWire)
            .with_interrupt_polarity(InterruptPolarity::ActiveLow)
            .with_full_resolution(true)
            .with_justify(Justify::Left)
            .with_range(Range::G4);

        assert_eq!(u8::from(format), 0b1110_1111);
    }

    #[test]
    fn bandwidth_rate_codes_are_offset() {
        let bw = BandwidthRate::new().with_rate(DataRate::Hz3_125);
        assert_eq!(u8::from(bw), 0x06);

        let bw = BandwidthRate::new()
            .with_low_power(true)
            .with_rate(DataRate::Hz1600);
        assert_eq!(u8::from(bw), 0x1F);

        let reset = BandwidthRate::from(BandwidthRate::RESET_VALUE.unwrap_or_default());
        assert_eq!(reset.rate_or_err().ok(), Some(DataRate::Hz50));
        assert!(BandwidthRate::from(0x03).rate_or_err().is_err());
    }

    #[test]
    fn act_inact_control_nibbles() {
        let ctl = ActInactControl::new()
            .with_activity_coupling(Coupling::Ac)
            .with_activity_x(true)
            .with_activity_z(true)
            .with_inactivity_coupling(Coupling::Dc)
            .with_inactivity_x(true)
            .with_inactivity_z(true);

        assert_eq!(u8::from(ctl), 0b1101_0101);
    }

    #[test]
    fn interrupt_flags_layout_matches_datasheet() {
        let flags = InterruptFlags::from(0b1000_1010);
        assert!(flags.data_ready());
        assert!(!flags.activity());
        assert!(flags.inactivity());
        assert!(flags.watermark());
        assert!(!flags.overrun());

        // Bit 4 is the activity flag.
        assert!(InterruptFlags::from(0b1001_1010).activity());

        let all = InterruptFlags::new()
            .with_data_ready(true)
            .with_activity(true)
            .with_inactivity(true)
            .with_watermark(true)
            .with_overrun(true);
        assert_eq!(u8::from(all), 0b1001_1011);
    }
}
