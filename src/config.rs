//! Configuration primitives for the ADXL313 driver.

use crate::params::{
    DataRate,
    InterfaceSelect,
    InterruptPolarity,
    Justify,
    Range,
    SpiWireMode,
    WakeUpRate,
};
use crate::registers::{BandwidthRate, DataFormat, PowerControl};

/// User-facing configuration for the ADXL313 sensor.
///
/// The driver never keeps a copy of the applied configuration; read the
/// registers back when the current device state is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Output data rate selection.
    pub rate: DataRate,
    /// Reduced power operation.
    pub low_power: bool,
    /// Measurement range.
    pub range: Range,
    /// Full-resolution output.
    pub full_resolution: bool,
    /// Output justification.
    pub justify: Justify,
    /// Interrupt pin polarity.
    pub interrupt_polarity: InterruptPolarity,
    /// 3-wire or 4-wire SPI.
    pub spi_wire_mode: SpiWireMode,
    /// Reading frequency while asleep.
    pub wake_up: WakeUpRate,
    /// Serial activity/inactivity link.
    pub link: bool,
    /// Sleep on inactivity (requires `link`).
    pub auto_sleep: bool,
    /// Leave the device measuring after configuration.
    pub measure: bool,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks whether this configuration is valid according to datasheet rules.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.low_power && !self.rate.supports_low_power() {
            return Err(ConfigError::LowPowerRateUnsupported);
        }

        if self.auto_sleep && !self.link {
            return Err(ConfigError::AutoSleepWithoutLink);
        }

        Ok(())
    }

    /// `BW_RATE` value for this configuration.
    pub fn bandwidth_rate(&self) -> BandwidthRate {
        BandwidthRate::new()
            .with_rate(self.rate)
            .with_low_power(self.low_power)
    }

    /// `DATA_FORMAT` value for this configuration (self-test off).
    pub fn data_format(&self) -> DataFormat {
        DataFormat::new()
            .with_range(self.range)
            .with_justify(self.justify)
            .with_full_resolution(self.full_resolution)
            .with_interrupt_polarity(self.interrupt_polarity)
            .with_spi_wire_mode(self.spi_wire_mode)
    }

    /// `POWER_CTL` value for this configuration (awake, SPI selected).
    pub fn power_control(&self) -> PowerControl {
        PowerControl::new()
            .with_wake_up(self.wake_up)
            .with_measure(self.measure)
            .with_auto_sleep(self.auto_sleep)
            .with_link(self.link)
            .with_interface(InterfaceSelect::Spi)
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the output data rate.
    pub fn rate(mut self, rate: DataRate) -> Self {
        self.config.rate = rate;
        self
    }

    /// Enables or disables reduced power operation.
    pub fn low_power(mut self, low_power: bool) -> Self {
        self.config.low_power = low_power;
        self
    }

    /// Overrides the measurement range.
    pub fn range(mut self, range: Range) -> Self {
        self.config.range = range;
        self
    }

    /// Enables or disables full-resolution output.
    pub fn full_resolution(mut self, full_resolution: bool) -> Self {
        self.config.full_resolution = full_resolution;
        self
    }

    /// Sets the output justification.
    pub fn justify(mut self, justify: Justify) -> Self {
        self.config.justify = justify;
        self
    }

    /// Sets the interrupt pin polarity.
    pub fn interrupt_polarity(mut self, polarity: InterruptPolarity) -> Self {
        self.config.interrupt_polarity = polarity;
        self
    }

    /// Selects 3-wire or 4-wire SPI.
    pub fn spi_wire_mode(mut self, mode: SpiWireMode) -> Self {
        self.config.spi_wire_mode = mode;
        self
    }

    /// Sets the reading frequency used while asleep.
    pub fn wake_up(mut self, wake_up: WakeUpRate) -> Self {
        self.config.wake_up = wake_up;
        self
    }

    /// Links activity and inactivity detection.
    pub fn link(mut self, link: bool) -> Self {
        self.config.link = link;
        self
    }

    /// Enables sleeping on inactivity.
    pub fn auto_sleep(mut self, auto_sleep: bool) -> Self {
        self.config.auto_sleep = auto_sleep;
        self
    }

    /// Chooses whether the device is left measuring or in standby.
    pub fn measure(mut self, measure: bool) -> Self {
        self.config.measure = measure;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rate: DataRate::Hz50,
            low_power: false,
            range: Range::G0_5,
            full_resolution: false,
            justify: Justify::Right,
            interrupt_polarity: InterruptPolarity::ActiveHigh,
            spi_wire_mode: SpiWireMode::FourWire,
            wake_up: WakeUpRate::Hz8,
            link: false,
            auto_sleep: false,
            measure: true,
        }
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Reduced power operation is only available from 12.5 Hz to 400 Hz.
    LowPowerRateUnsupported,
    /// Auto-sleep has no effect unless activity and inactivity are linked.
    AutoSleepWithoutLink,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::Register;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
        assert_eq!(Config::new().build(), Config::default());
    }

    #[test]
    fn default_rate_matches_device_reset() {
        let reset = BandwidthRate::RESET_VALUE.unwrap();
        assert_eq!(u8::from(Config::default().bandwidth_rate()), reset);
        assert_eq!(Config::default().rate, DataRate::Hz50);
    }

    #[test]
    fn low_power_rejected_outside_supported_rates() {
        let config = Config::new().rate(DataRate::Hz1600).low_power(true).build();
        assert_eq!(config.validate(), Err(ConfigError::LowPowerRateUnsupported));

        let config = Config::new().rate(DataRate::Hz400).low_power(true).build();
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn auto_sleep_requires_link() {
        let config = Config::new().auto_sleep(true).build();
        assert_eq!(config.validate(), Err(ConfigError::AutoSleepWithoutLink));

        let config = Config::new().link(true).auto_sleep(true).build();
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn register_images_follow_fields() {
        let config = Config::new()
            .rate(DataRate::Hz200)
            .low_power(true)
            .range(Range::G2)
            .full_resolution(true)
            .build();

        assert_eq!(u8::from(config.bandwidth_rate()), 0x1C);
        assert_eq!(u8::from(config.data_format()), 0b0000_1010);
        assert_eq!(u8::from(config.power_control()), 0b0000_1000);
    }
}
