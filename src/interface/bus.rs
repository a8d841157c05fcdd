//! SPI interface over a raw `SpiBus` with an injected chip-select pin.
//!
//! The chip-select line is asserted for the full address and data phase of
//! every transaction and is always released before returning, including
//! when the transfer itself fails.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use super::{command_byte, Adxl313Interface};
use crate::error::TransportError;

/// `SpiBus` + `OutputPin` interface implementation for the ADXL313 driver.
pub struct SpiBusInterface<BUS, CS> {
    bus: BUS,
    cs: CS,
}

impl<BUS, CS> SpiBusInterface<BUS, CS> {
    /// Creates a new interface from a bus and the pin wired to the device's CS.
    pub const fn new(bus: BUS, cs: CS) -> Self {
        Self { bus, cs }
    }

    /// Consumes the interface and returns the bus and chip-select pin.
    pub fn release(self) -> (BUS, CS) {
        (self.bus, self.cs)
    }
}

impl<BUS, CS> SpiBusInterface<BUS, CS>
where
    BUS: SpiBus,
    CS: OutputPin,
{
    /// Runs `transfer` with chip-select asserted and releases it on every exit path.
    ///
    /// A transfer error takes precedence over a failure to release the pin.
    fn transaction<T, F>(
        &mut self,
        transfer: F,
    ) -> core::result::Result<T, TransportError<BUS::Error, CS::Error>>
    where
        F: FnOnce(&mut BUS) -> core::result::Result<T, TransportError<BUS::Error, CS::Error>>,
    {
        self.cs.set_low().map_err(TransportError::ChipSelect)?;
        let result = transfer(&mut self.bus);
        let released = self.cs.set_high().map_err(TransportError::ChipSelect);

        let value = result?;
        released?;
        Ok(value)
    }
}

impl<BUS, CS> Adxl313Interface for SpiBusInterface<BUS, CS>
where
    BUS: SpiBus,
    CS: OutputPin,
{
    type Error = TransportError<BUS::Error, CS::Error>;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        let frame = [command_byte(register, false), value];
        trace!("spi write {=u8:#x} <- {=u8:#x}", register, value);
        self.transaction(|bus| {
            bus.write(&frame).map_err(TransportError::Spi)?;
            bus.flush().map_err(TransportError::Spi)
        })
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_many(register, &mut value)?;
        Ok(value[0])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        let command = [command_byte(register, true)];
        trace!("spi read {=u8:#x} ({=usize} bytes)", register, buf.len());
        self.transaction(|bus| {
            bus.write(&command).map_err(TransportError::Transmit)?;
            bus.read(buf).map_err(TransportError::Receive)?;
            bus.flush().map_err(TransportError::Receive)
        })
    }
}
