use crate::executor::Executor;
use crate::hw_def::*;

use core::fmt;

use embedded_hal::digital::ErrorKind;

#[cfg(feature="defmt")]
use defmt::Format;

/// Si7021 device driver: supply control, power state and the two measurement channels
#[derive(Debug)]
pub struct Si7021<Bus, Pin> {
    pub(crate) executor: Executor<Bus>,
    pub(crate) supply: Pin,
    pub(crate) power: PowerState,
}

/// All possible errors in this crate
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Opcode is not one of the measurement commands; nothing was put on the bus
    InvalidCommand,
    /// A bus wait ran out of poll budget; the peripheral has been reset and reinitialized
    BusTimeout,
    /// Checksum received from the device did not match the data bytes
    ChecksumMismatch,
    /// Channel id is neither temperature nor humidity
    UnknownChannel,
    /// Driving the supply enable pin failed
    Pin(ErrorKind),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCommand => write!(f, "invalid measurement command"),
            Error::BusTimeout => write!(f, "bus timeout, peripheral recovered"),
            Error::ChecksumMismatch => write!(f, "checksum mismatch"),
            Error::UnknownChannel => write!(f, "unknown sensor channel"),
            Error::Pin(kind) => write!(f, "supply pin error: {kind:?}"),
        }
    }
}
impl core::error::Error for Error {}

/// What to do with the checksum byte that trails every measurement
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ChecksumPolicy {
    /// read and discard it
    #[default]
    Ignore,
    /// compare it against the CRC of the data bytes and reject the reading on mismatch
    Verify,
}

/// Executor configuration
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// failed polls one transaction may accumulate across all of its waits
    pub timeout: u32,
    /// checksum acceptance policy
    pub checksum: ChecksumPolicy,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_POLL_BUDGET,
            checksum: ChecksumPolicy::Ignore,
        }
    }
}
impl Config {
    /// Replace the poll budget
    pub const fn with_timeout(mut self, timeout: u32) -> Self {
        self.timeout = timeout;
        self
    }
    /// Replace the checksum policy
    pub const fn with_checksum(mut self, checksum: ChecksumPolicy) -> Self {
        self.checksum = checksum;
        self
    }
}

/// Logical measurement channels
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Channel {
    /// temperature in °C
    Temperature = 0,
    /// relative humidity in %RH
    Humidity = 1,
}
impl Channel {
    pub(crate) fn command(self) -> Command {
        match self {
            Channel::Temperature => Command::MeasureTemperature,
            Channel::Humidity => Command::MeasureHumidity,
        }
    }
    pub(crate) fn convert(self, code: u16) -> f32 {
        match self {
            Channel::Temperature => raw_temp_to_centigrade(code),
            Channel::Humidity => raw_rel_humid_to_percent(code),
        }
    }
}
impl TryFrom<u8> for Channel {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Channel::Temperature),
            1 => Ok(Channel::Humidity),
            _ => Err(Error::UnknownChannel),
        }
    }
}
impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Temperature => write!(f, "temperature"),
            Channel::Humidity => write!(f, "humidity"),
        }
    }
}

/// Status/configuration keys of the host sensor interface
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Query {
    /// hardware initialization request; accepted and ignored by this driver
    HwInit,
    /// sensor powered and enabled
    Active,
    /// sensor ready to be read
    Ready,
}

/// Supply state of the device
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PowerState {
    /// supply enabled and bus initialized
    On,
    /// supply disabled
    #[default]
    Off,
}
impl PowerState {
    /// Convenience check for [`PowerState::On`]
    pub fn is_on(&self) -> bool {
        *self == PowerState::On
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_ids() {
        assert_eq!(Channel::try_from(0_u8), Ok(Channel::Temperature));
        assert_eq!(Channel::try_from(1_u8), Ok(Channel::Humidity));
        assert_eq!(Channel::try_from(2_u8), Err(Error::UnknownChannel));
        assert_eq!(Channel::Humidity as u8, 1);
    }

    #[test]
    fn channels_use_distinct_conversions() {
        let code = 0x6666;
        assert_eq!(Channel::Temperature.convert(code), raw_temp_to_centigrade(code));
        assert_eq!(Channel::Humidity.convert(code), raw_rel_humid_to_percent(code));
        assert_ne!(Channel::Temperature.convert(code), Channel::Humidity.convert(code));
    }

    #[test]
    fn config_defaults_and_builders() {
        let config = Config::default();
        assert_eq!(config.timeout, DEFAULT_POLL_BUDGET);
        assert_eq!(config.checksum, ChecksumPolicy::Ignore);

        let config = config.with_timeout(8).with_checksum(ChecksumPolicy::Verify);
        assert_eq!(config, Config { timeout: 8, checksum: ChecksumPolicy::Verify });
    }

    #[test]
    fn power_starts_off() {
        assert_eq!(PowerState::default(), PowerState::Off);
        assert!(!PowerState::Off.is_on());
        assert!(PowerState::On.is_on());
    }
}
