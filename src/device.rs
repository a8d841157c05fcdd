//! Register-level ADXL313 device driver.
//!
//! Every accessor is a stateless pass-through: one call performs the bus
//! transactions for one logical register group and returns. The device is the
//! only source of truth; no register values are cached on the host side.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{SpiBus, SpiDevice};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::bus::SpiBusInterface;
use crate::interface::spi::SpiInterface;
use crate::interface::Adxl313Interface;
use crate::params::Coupling;
use crate::registers::{
    ActInactControl,
    BandwidthRate,
    DataFormat,
    InterruptFlags,
    PowerControl,
    Register,
    RegisterAccess,
    EXPECTED_DEVID_0,
    EXPECTED_DEVID_1,
    EXPECTED_PART_ID,
    INTERRUPT_FLAGS_MASK,
    REG_DATAX0,
    REG_DEVID_0,
    REG_DEVID_1,
    REG_INT_ENABLE,
    REG_INT_MAP,
    REG_INT_SOURCE,
    REG_OFSX,
    REG_OFSY,
    REG_OFSZ,
    REG_PARTID,
    REG_REVID,
    REG_SOFT_RESET,
    REG_THRESH_ACT,
    REG_THRESH_INACT,
    REG_TIME_INACT,
    REG_XID,
    RESET_COMMAND,
};

/// Synchronous register-level driver for the ADXL313 accelerometer.
///
/// Calls are blocking and not re-entrant. Sharing the bus between threads or
/// interrupt contexts requires external serialization.
pub struct Adxl313<IFACE> {
    interface: IFACE,
}

/// Axes taking part in activity and inactivity detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisEnable {
    /// X axis.
    pub x: bool,
    /// Y axis.
    pub y: bool,
    /// Z axis.
    pub z: bool,
}

impl AxisEnable {
    /// All three axes enabled.
    pub const ALL: Self = Self {
        x: true,
        y: true,
        z: true,
    };
}

/// Decoded view of the `INT_SOURCE` register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptSource {
    /// INT_SOURCE[7] DATA_READY.
    pub data_ready: bool,
    /// INT_SOURCE[4] ACTIVITY.
    pub activity: bool,
    /// INT_SOURCE[3] INACTIVITY.
    pub inactivity: bool,
    /// INT_SOURCE[1] WATERMARK.
    pub watermark: bool,
    /// INT_SOURCE[0] OVERRUN.
    pub overrun: bool,
}

impl InterruptSource {
    /// Builds a snapshot from the raw interrupt bitfield.
    pub fn from_register(flags: InterruptFlags) -> Self {
        Self {
            data_ready: flags.data_ready(),
            activity: flags.activity(),
            inactivity: flags.inactivity(),
            watermark: flags.watermark(),
            overrun: flags.overrun(),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for InterruptSource {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "InterruptSource {{ DATA_READY: {}, ACTIVITY: {}, INACTIVITY: {}, WATERMARK: {}, OVERRUN: {} }}",
            self.data_ready,
            self.activity,
            self.inactivity,
            self.watermark,
            self.overrun
        );
    }
}

impl<IFACE> Adxl313<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    pub fn new(interface: IFACE) -> Self {
        Self { interface }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> IFACE {
        self.interface
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }
}

impl<SPI> Adxl313<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    // ==================================================================
    // == SPI Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for `SpiDevice` transports.
    pub fn new_spi(spi: SPI) -> Self {
        Self::new(SpiInterface::new(spi))
    }

    /// Releases the driver, returning the SPI device.
    pub fn release_spi(self) -> SPI {
        self.release().release()
    }
}

impl<BUS, CS> Adxl313<SpiBusInterface<BUS, CS>>
where
    BUS: SpiBus,
    CS: OutputPin,
{
    /// Convenience constructor for a raw bus with a dedicated chip-select pin.
    pub fn new_spi_bus(bus: BUS, cs: CS) -> Self {
        Self::new(SpiBusInterface::new(bus, cs))
    }

    /// Releases the driver, returning the bus and chip-select pin.
    pub fn release_spi_bus(self) -> (BUS, CS) {
        self.release().release()
    }
}

impl<IFACE, CommE> Adxl313<IFACE>
where
    IFACE: Adxl313Interface<Error = CommE>,
{
    // ==================================================================
    // == Initialization & Global Configuration ==========================
    // ==================================================================
    /// Verifies the device identity and applies `config`.
    pub fn init(&mut self, config: &Config) -> Result<(), CommE> {
        config.validate()?;
        self.check_ids()?;
        self.configure(config)
    }

    /// Applies a configuration to the device.
    ///
    /// The device is put in standby first, then `BW_RATE`, `DATA_FORMAT` and
    /// finally `POWER_CTL` are written.
    pub fn configure(&mut self, config: &Config) -> Result<(), CommE> {
        config.validate()?;
        debug!("adxl313 configure: {}", config);

        self.set_power_control(PowerControl::new())?;
        self.set_bandwidth_rate(config.bandwidth_rate())?;
        self.set_data_format(config.data_format())?;
        self.set_power_control(config.power_control())
    }

    /// Issues a soft reset.
    pub fn soft_reset(&mut self) -> Result<(), CommE> {
        self.write_register(REG_SOFT_RESET, RESET_COMMAND)
    }

    // ==================================================================
    // == Identification ================================================
    // ==================================================================
    /// Reads `DEVID_0` (expected `0xAD`).
    pub fn device_id0(&mut self) -> Result<u8, CommE> {
        self.read_id(REG_DEVID_0)
    }

    /// Reads `DEVID_1` (expected `0x1D`).
    pub fn device_id1(&mut self) -> Result<u8, CommE> {
        self.read_id(REG_DEVID_1)
    }

    /// Reads `PARTID` (expected `0xCB`).
    pub fn part_id(&mut self) -> Result<u8, CommE> {
        self.read_id(REG_PARTID)
    }

    /// Reads `REVID`.
    pub fn revision_id(&mut self) -> Result<u8, CommE> {
        self.read_id(REG_REVID)
    }

    /// Reads `XID`.
    pub fn xid(&mut self) -> Result<u8, CommE> {
        self.read_id(REG_XID)
    }

    /// Verifies the identification registers against the ADXL313 constants.
    pub fn check_ids(&mut self) -> Result<(), CommE> {
        let devid0 = self.device_id0()?;
        let devid1 = self.device_id1()?;
        let part_id = self.part_id()?;

        if devid0 != EXPECTED_DEVID_0 || devid1 != EXPECTED_DEVID_1 || part_id != EXPECTED_PART_ID {
            warn!(
                "adxl313 id mismatch: {=u8:#x} {=u8:#x} {=u8:#x}",
                devid0,
                devid1,
                part_id
            );
            return Err(Error::DeviceIdMismatch);
        }

        Ok(())
    }

    // ==================================================================
    // == Power, Format & Rate ==========================================
    // ==================================================================
    /// Reads `POWER_CTL`.
    pub fn power_control(&mut self) -> Result<PowerControl, CommE> {
        self.read_typed()
    }

    /// Writes `POWER_CTL`. Bit 7 is always written as zero.
    pub fn set_power_control(&mut self, power: PowerControl) -> Result<(), CommE> {
        self.write_typed(power)
    }

    /// Reads `DATA_FORMAT`.
    pub fn data_format(&mut self) -> Result<DataFormat, CommE> {
        self.read_typed()
    }

    /// Writes `DATA_FORMAT`. Bit 4 is always written as zero.
    pub fn set_data_format(&mut self, format: DataFormat) -> Result<(), CommE> {
        self.write_typed(format)
    }

    /// Reads `BW_RATE`.
    ///
    /// The device may report rate codes below `0x6`, which have no
    /// [`DataRate`](crate::params::DataRate) variant; `rate()` panics on
    /// those, so decode the field with `rate_or_err()`.
    pub fn bandwidth_rate(&mut self) -> Result<BandwidthRate, CommE> {
        self.read_typed()
    }

    /// Writes `BW_RATE`. Bits 7:5 are always written as zero.
    pub fn set_bandwidth_rate(&mut self, bandwidth: BandwidthRate) -> Result<(), CommE> {
        self.write_typed(bandwidth)
    }

    // ==================================================================
    // == Offsets & Acceleration ========================================
    // ==================================================================
    /// Reads the X, Y and Z offset registers (3.9 mg/LSB).
    pub fn offsets(&mut self) -> Result<[i8; 3], CommE> {
        let x = self.read_register(REG_OFSX)? as i8;
        let y = self.read_register(REG_OFSY)? as i8;
        let z = self.read_register(REG_OFSZ)? as i8;
        Ok([x, y, z])
    }

    /// Writes the X, Y and Z offset registers in that order.
    ///
    /// Stops at the first failed write; registers already written keep their
    /// new value.
    pub fn set_offsets(&mut self, x: i8, y: i8, z: i8) -> Result<(), CommE> {
        self.write_register(REG_OFSX, x as u8)?;
        self.write_register(REG_OFSY, y as u8)?;
        self.write_register(REG_OFSZ, z as u8)
    }

    /// Reads a raw acceleration triplet in a single burst.
    pub fn read_xyz_raw(&mut self) -> Result<[i16; 3], CommE> {
        self.interface
            .read_burst6(REG_DATAX0)
            .map_err(Error::Read)
    }

    /// Reads the acceleration triplet widened to `f32`.
    ///
    /// Values are raw LSB counts; no range or resolution scaling is applied.
    pub fn read_acceleration(&mut self) -> Result<[f32; 3], CommE> {
        let [x, y, z] = self.read_xyz_raw()?;
        Ok([f32::from(x), f32::from(y), f32::from(z)])
    }

    // ==================================================================
    // == Activity & Inactivity =========================================
    // ==================================================================
    /// Reads `ACT_INACT_CTL`.
    pub fn activity_inactivity_control(&mut self) -> Result<ActInactControl, CommE> {
        self.read_typed()
    }

    /// Writes `ACT_INACT_CTL`.
    ///
    /// The same axis selection is written to both the activity and the
    /// inactivity nibble; the axes cannot be chosen per direction.
    pub fn set_activity_inactivity_control(
        &mut self,
        activity: Coupling,
        inactivity: Coupling,
        axes: AxisEnable,
    ) -> Result<(), CommE> {
        let control = ActInactControl::new()
            .with_activity_coupling(activity)
            .with_activity_x(axes.x)
            .with_activity_y(axes.y)
            .with_activity_z(axes.z)
            .with_inactivity_coupling(inactivity)
            .with_inactivity_x(axes.x)
            .with_inactivity_y(axes.y)
            .with_inactivity_z(axes.z);
        self.write_typed(control)
    }

    /// Reads `THRESH_ACT` (15.625 mg/LSB).
    pub fn activity_threshold(&mut self) -> Result<u8, CommE> {
        self.read_register(REG_THRESH_ACT)
    }

    /// Writes `THRESH_ACT` (15.625 mg/LSB).
    pub fn set_activity_threshold(&mut self, threshold: u8) -> Result<(), CommE> {
        self.write_register(REG_THRESH_ACT, threshold)
    }

    /// Reads `THRESH_INACT` (15.625 mg/LSB).
    pub fn inactivity_threshold(&mut self) -> Result<u8, CommE> {
        self.read_register(REG_THRESH_INACT)
    }

    /// Writes `THRESH_INACT` (15.625 mg/LSB).
    pub fn set_inactivity_threshold(&mut self, threshold: u8) -> Result<(), CommE> {
        self.write_register(REG_THRESH_INACT, threshold)
    }

    /// Reads `TIME_INACT` (1 s/LSB).
    pub fn inactivity_time(&mut self) -> Result<u8, CommE> {
        self.read_register(REG_TIME_INACT)
    }

    /// Writes `TIME_INACT` (1 s/LSB).
    pub fn set_inactivity_time(&mut self, seconds: u8) -> Result<(), CommE> {
        self.write_register(REG_TIME_INACT, seconds)
    }

    // ==================================================================
    // == Interrupts ====================================================
    // ==================================================================
    /// Reads `INT_ENABLE`.
    pub fn interrupt_enable(&mut self) -> Result<InterruptFlags, CommE> {
        self.read_register(REG_INT_ENABLE).map(InterruptFlags::from)
    }

    /// Writes `INT_ENABLE`. Unused bits 6, 5 and 2 are always written as zero.
    pub fn set_interrupt_enable(&mut self, flags: InterruptFlags) -> Result<(), CommE> {
        self.write_register(REG_INT_ENABLE, u8::from(flags) & INTERRUPT_FLAGS_MASK)
    }

    /// Reads `INT_MAP`; set bits route the interrupt to INT2.
    pub fn interrupt_map(&mut self) -> Result<InterruptFlags, CommE> {
        self.read_register(REG_INT_MAP).map(InterruptFlags::from)
    }

    /// Writes `INT_MAP`. Unused bits 6, 5 and 2 are always written as zero.
    pub fn set_interrupt_map(&mut self, flags: InterruptFlags) -> Result<(), CommE> {
        self.write_register(REG_INT_MAP, u8::from(flags) & INTERRUPT_FLAGS_MASK)
    }

    /// Reads and decodes `INT_SOURCE`.
    pub fn interrupt_source(&mut self) -> Result<InterruptSource, CommE> {
        let flags = InterruptFlags::from(self.read_register(REG_INT_SOURCE)?);
        Ok(InterruptSource::from_register(flags))
    }

    // ==================================================================
    // == Internal Register Helpers =====================================
    // ==================================================================

    fn read_id(&mut self, register: u8) -> Result<u8, CommE> {
        self.interface
            .read_register(register)
            .map_err(Error::Identification)
    }

    fn read_register(&mut self, register: u8) -> Result<u8, CommE> {
        self.interface.read_register(register).map_err(Error::Read)
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), CommE> {
        self.interface
            .write_register(register, value)
            .map_err(Error::Write)
    }

    fn read_typed<R>(&mut self) -> Result<R, CommE>
    where
        R: Register<Raw = u8> + From<u8>,
    {
        self.read_register(R::ADDRESS).map(R::from)
    }

    fn write_typed<R>(&mut self, value: R) -> Result<(), CommE>
    where
        R: Register<Raw = u8> + Into<u8>,
    {
        debug_assert!(R::ACCESS != RegisterAccess::ReadOnly);
        self.write_register(R::ADDRESS, value.into() & R::DEFINED_BITS)
    }
}
