//! Error handling primitives for the ADXL313 driver.

use crate::config::ConfigError;

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the register accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A register read failed on the bus.
    Read(E),
    /// A register write failed on the bus.
    Write(E),
    /// An identification register could not be read.
    ///
    /// Reported instead of [`Error::Read`] so callers can tell a missing or
    /// unresponsive device apart from a transfer glitch mid-operation.
    Identification(E),
    /// The identification registers do not hold the ADXL313 constants.
    DeviceIdMismatch,
    /// The provided configuration parameters are invalid.
    InvalidConfig(ConfigError),
}

/// Failures reported by the SPI transport implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError<S, P> {
    /// Generic SPI failure (write frames and `SpiDevice` transactions).
    Spi(S),
    /// The address byte of a read could not be shifted out.
    Transmit(S),
    /// The data phase of a read failed.
    Receive(S),
    /// The chip-select line could not be driven.
    ChipSelect(P),
}

impl<E> From<ConfigError> for Error<E> {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfig(err)
    }
}
