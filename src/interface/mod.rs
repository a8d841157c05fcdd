//! Bus interface abstraction for the ADXL313 driver.
//!
//! Every register accessor in [`crate::device`] funnels through the three
//! primitives of [`Adxl313Interface`]: a single-byte write, a single-byte
//! read and a 6-byte burst read.

pub mod bus;
pub mod spi;

/// Read flag (bit 7) OR-ed into the address byte of every read.
pub const SPI_READ: u8 = 0x80;
/// Multi-byte flag (bit 6) OR-ed into the address byte of every transaction.
pub const SPI_MULTI_BYTE: u8 = 0x40;

/// Builds the command byte used to address registers over SPI.
///
/// Reads carry both the read and multi-byte flags regardless of length;
/// writes only carry the multi-byte flag.
pub const fn command_byte(register: u8, is_read: bool) -> u8 {
    if is_read {
        register | SPI_READ | SPI_MULTI_BYTE
    } else {
        register | SPI_MULTI_BYTE
    }
}

/// Abstraction over the low-level bus access required by the driver.
pub trait Adxl313Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;

    /// Reads multiple consecutive registers into the provided buffer.
    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error>;

    /// Reads six consecutive registers and decodes them as three
    /// little-endian signed words (X, Y, Z).
    fn read_burst6(&mut self, register: u8) -> core::result::Result<[i16; 3], Self::Error> {
        let mut raw = [0u8; 6];
        self.read_many(register, &mut raw)?;
        Ok(decode_axes(&raw))
    }
}

/// Decodes a 6-byte burst into X, Y, Z little-endian words.
pub fn decode_axes(raw: &[u8; 6]) -> [i16; 3] {
    [
        i16::from_le_bytes([raw[0], raw[1]]),
        i16::from_le_bytes([raw[2], raw[3]]),
        i16::from_le_bytes([raw[4], raw[5]]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_byte_sets_read_and_multi_byte_flags() {
        assert_eq!(command_byte(0x00, true), 0xC0);
        assert_eq!(command_byte(0x32, true), 0xF2);
        assert_eq!(command_byte(0x2D, false), 0x6D);
        assert_eq!(command_byte(0x1E, false), 0x5E);
    }

    #[test]
    fn burst_decoding_is_little_endian_per_axis() {
        let axes = decode_axes(&[0x34, 0x12, 0x78, 0x56, 0xBC, 0x9A]);
        assert_eq!(axes[0], 0x1234);
        assert_eq!(axes[1], 0x5678);
        assert_eq!(axes[2], 0x9ABCu16 as i16);
        assert!(axes[2] < 0);
    }
}
