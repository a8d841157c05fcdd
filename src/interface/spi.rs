//! SPI interface implementation built on top of `embedded-hal` `SpiDevice`.
//!
//! Chip-select is owned by the `SpiDevice` implementation, which asserts it
//! for the whole transaction and releases it afterwards.

use core::convert::Infallible;

use embedded_hal::spi::{Operation, SpiDevice};

use super::{command_byte, Adxl313Interface};
use crate::error::TransportError;

/// SPI-based interface implementation for the ADXL313 driver.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new interface from the provided SPI device abstraction.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Provides mutable access to the wrapped SPI device.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Adxl313Interface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = TransportError<SPI::Error, Infallible>;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        let frame = [command_byte(register, false), value];
        trace!("spi write {=u8:#x} <- {=u8:#x}", register, value);
        self.spi.write(&frame).map_err(TransportError::Spi)
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
        let mut operations = [Operation::Write(&command), Operation::Read(buf)];
        self.spi
            .transaction(&mut operations)
            .map_err(TransportError::Spi)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::SpiInterface;
    use crate::interface::Adxl313Interface;
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
    use std::vec;

    #[test]
    fn write_register_sends_flagged_address_and_value() {
        let expectations = [
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![0x6D, 0x08]),
            SpiTransaction::transaction_end(),
        ];
        let mut spi = SpiMock::new(&expectations);
        let mut interface = SpiInterface::new(spi.clone());

        interface.write_register(0x2D, 0x08).unwrap();
        spi.done();
    }

    #[test]
    fn read_register_sets_read_and_multi_byte_flags() {
        let expectations = [
            SpiTransaction::transaction_start(),
            SpiTransaction::write(0xC0),
            SpiTransaction::read(0xAD),
            SpiTransaction::transaction_end(),
        ];
        let mut spi = SpiMock::new(&expectations);
        let mut interface = SpiInterface::new(spi.clone());

        assert_eq!(interface.read_register(0x00).unwrap(), 0xAD);
        spi.done();
    }

    #[test]
    fn burst_read_decodes_little_endian_axes() {
        let expectations = [
            SpiTransaction::transaction_start(),
            SpiTransaction::write(0xF2),
            SpiTransaction::read_vec(vec![0x34, 0x12, 0x78, 0x56, 0xBC, 0x9A]),
            SpiTransaction::transaction_end(),
        ];
        let mut spi = SpiMock::new(&expectations);
        let mut interface = SpiInterface::new(spi.clone());

        let axes = interface.read_burst6(0x32).unwrap();
        assert_eq!(axes, [0x1234, 0x5678, 0x9ABCu16 as i16]);
        spi.done();
    }

    #[test]
    fn read_many_ignores_empty_buffer() {
        let expectations: [SpiTransaction<u8>; 0] = [];
        let mut spi = SpiMock::new(&expectations);
        let mut interface = SpiInterface::new(spi.clone());

        interface.read_many(0x32, &mut []).unwrap();
        spi.done();
    }
}
