use crate::bus::I2cPeripheral;
use crate::executor::Executor;
use crate::fmt::trace;
use crate::types::*;

use embedded_hal::digital::{Error as _, OutputPin};

impl<Bus, Pin> Si7021<Bus, Pin>
where
    Bus: I2cPeripheral,
    Pin: OutputPin,
{
    /// Create a new Si7021 driver instance. The device starts powered off and nothing is touched
    /// until it is switched on.
    pub fn new(bus: Bus, supply: Pin, config: Config) -> Self {
        Self {
            executor: Executor::new(bus, config),
            supply,
            power: PowerState::Off,
        }
    }

    /// Measure one channel and convert it to °C or %RH.
    ///
    /// Reads are not gated on the power state: with the supply off the transaction still runs and
    /// will most likely end in [`Error::BusTimeout`].
    pub fn read(&mut self, channel: Channel) -> Result<f32, Error> {
        let code = self.executor.execute(channel.command())?;
        let value = channel.convert(code);
        trace!("si7021: {} code 0x{:x}", channel, code);
        Ok(value)
    }

    /// Temperature in degrees centigrade
    pub fn temperature(&mut self) -> Result<f32, Error> {
        self.read(Channel::Temperature)
    }

    /// Relative humidity in percent
    pub fn humidity(&mut self) -> Result<f32, Error> {
        self.read(Channel::Humidity)
    }

    /// `Active` and `Ready` report whether the device is powered; anything else is `false`
    pub fn status(&self, query: Query) -> bool {
        match query {
            Query::Active | Query::Ready => self.power.is_on(),
            Query::HwInit => false,
        }
    }

    /// Switch the device on or off through `Query::Active`; other queries are ignored.
    ///
    /// Switching on an already powered device does nothing. Switching off always drives the
    /// supply low, whatever the current state.
    pub fn configure(&mut self, query: Query, enable: bool) -> Result<(), Error> {
        match query {
            Query::Active if enable => {
                if !self.status(Query::Active) {
                    self.power_up()?;
                }
            }
            Query::Active => self.power_down()?,
            Query::HwInit | Query::Ready => {}
        }
        Ok(())
    }

    /// Current supply state
    pub fn power_state(&self) -> PowerState {
        self.power
    }

    /// Destroy the driver, returning the peripheral and the supply pin
    pub fn release(self) -> (Bus, Pin) {
        (self.executor.release(), self.supply)
    }

    fn power_up(&mut self) -> Result<(), Error> {
        self.supply.set_high().map_err(|e| Error::Pin(e.kind()))?;
        self.executor.bus_mut().init();
        self.power = PowerState::On;
        trace!("si7021: powered up");
        Ok(())
    }

    fn power_down(&mut self) -> Result<(), Error> {
        self.supply.set_low().map_err(|e| Error::Pin(e.kind()))?;
        self.power = PowerState::Off;
        trace!("si7021: powered down");
        Ok(())
    }
}
