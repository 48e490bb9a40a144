//! Capability interface a host sensor registry uses to drive sensors without knowing their type.

use crate::bus::I2cPeripheral;
use crate::hw_def::SENSOR_NAME;
use crate::types::*;

use embedded_hal::digital::OutputPin;

/// Value / status / configure interface of a host-registered sensor.
///
/// Object safe, so a registry can keep a collection of `&mut dyn Sensor`.
pub trait Sensor {
    /// Short name the registry lists the sensor under
    fn name(&self) -> &'static str;

    /// Read a channel by its numeric id
    fn value(&mut self, channel: u8) -> Result<f32, Error>;

    /// Query a status property; unsupported properties read as `false`
    fn status(&self, query: Query) -> bool;

    /// Set a configuration property; unsupported properties are accepted and ignored
    fn configure(&mut self, query: Query, enable: bool) -> Result<(), Error>;
}

impl<Bus, Pin> Sensor for Si7021<Bus, Pin>
where
    Bus: I2cPeripheral,
    Pin: OutputPin,
{
    fn name(&self) -> &'static str {
        SENSOR_NAME
    }

    fn value(&mut self, channel: u8) -> Result<f32, Error> {
        let channel = Channel::try_from(channel)?;
        self.read(channel)
    }

    fn status(&self, query: Query) -> bool {
        Si7021::status(self, query)
    }

    fn configure(&mut self, query: Query, enable: bool) -> Result<(), Error> {
        Si7021::configure(self, query, enable)
    }
}
