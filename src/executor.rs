use crate::bus::{Direction, Event, I2cPeripheral};
use crate::fmt::{trace, warn};
use crate::hw_def::*;
use crate::types::*;

use crc::Crc;

const CRC: Crc<u8> = Crc::<u8>::new(&CRC_8_SI7021);

/// Marker for a wait that ran out of budget; turned into [`Error::BusTimeout`] after recovery
struct Stalled;

/// Poll budget shared by every wait of one transaction
struct Budget {
    // wide enough that `limit + 1` is reachable for any `u32` limit
    spent: u64,
    limit: u64,
}
impl Budget {
    fn new(limit: u32) -> Self {
        Self { spent: 0, limit: u64::from(limit) }
    }

    /// Busy-poll `ready` until it holds, charging each failed poll to the budget
    fn wait<P: I2cPeripheral>(&mut self, bus: &mut P, mut ready: impl FnMut(&mut P) -> bool) -> Result<(), Stalled> {
        while !ready(bus) {
            self.spent += 1;
            if self.spent > self.limit {
                return Err(Stalled);
            }
        }
        Ok(())
    }
}

/// Drives the command / repeated START / 3-byte read exchange against the sensor.
///
/// Holds no state between calls besides the peripheral itself and its configuration.
#[derive(Debug)]
pub struct Executor<Bus> {
    bus: Bus,
    config: Config,
}

impl<Bus> Executor<Bus>
where
    Bus: I2cPeripheral,
{
    /// Create a new executor owning `bus`
    pub fn new(bus: Bus, config: Config) -> Self {
        Self { bus, config }
    }

    /// Borrow the peripheral
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Mutably borrow the peripheral
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// Give the peripheral back
    pub fn release(self) -> Bus {
        self.bus
    }

    /// Validate a raw opcode and run the measurement it names.
    ///
    /// Anything other than the two measurement opcodes fails with [`Error::InvalidCommand`]
    /// before the peripheral is touched.
    pub fn execute_raw(&mut self, opcode: u8) -> Result<u16, Error> {
        let command = Command::try_from(opcode).inspect_err(|_| {
            warn!("si7021: illegal command 0x{:x}", opcode);
        })?;
        self.execute(command)
    }

    /// Run one measurement and return the raw 16-bit code.
    ///
    /// A stall anywhere in the sequence resets and reinitializes the peripheral, then fails with
    /// [`Error::BusTimeout`]. The transaction itself is not retried.
    pub fn execute(&mut self, command: Command) -> Result<u16, Error> {
        let mut budget = Budget::new(self.config.timeout);
        let [hi, lo, crc] = match self.transfer(command, &mut budget) {
            Ok(bytes) => bytes,
            Err(Stalled) => {
                warn!("si7021: {:?} stalled after {} polls, recovering bus", command, budget.spent);
                self.recover();
                return Err(Error::BusTimeout);
            }
        };
        trace!("si7021: read 0x{:x}, 0x{:x}, 0x{:x}", hi, lo, crc);

        let code = u16::from_be_bytes([hi, lo]);
        if self.config.checksum == ChecksumPolicy::Verify {
            let expected = CRC.checksum(&[hi, lo]);
            if expected != crc {
                warn!("si7021: crc check failed 0x{:x} vs 0x{:x}", expected, crc);
                return Err(Error::ChecksumMismatch);
            }
        }
        Ok(code)
    }

    /// Tear the peripheral down, reset it and bring it back up in its operating configuration
    pub fn recover(&mut self) {
        self.bus.deinit();
        self.bus.software_reset();
        self.bus.init();
    }

    fn transfer(&mut self, command: Command, budget: &mut Budget) -> Result<[u8; RESPONSE_LEN], Stalled> {
        let bus = &mut self.bus;

        budget.wait(bus, |bus| !bus.is_busy())?;

        bus.set_acknowledge(true);
        bus.generate_start();
        budget.wait(bus, |bus| bus.check_event(Event::MasterModeSelect))?;

        bus.send_7bit_address(I2C_ADDR, Direction::Transmitter);
        budget.wait(bus, |bus| bus.check_event(Event::MasterTransmitterModeSelected))?;

        bus.send_data(command.opcode());
        budget.wait(bus, |bus| bus.check_event(Event::MasterByteTransmitted))?;

        // repeated START, the bus stays ours
        bus.generate_start();
        budget.wait(bus, |bus| bus.check_event(Event::MasterModeSelect))?;

        bus.send_7bit_address(I2C_ADDR, Direction::Receiver);
        budget.wait(bus, |bus| bus.check_event(Event::MasterReceiverModeSelected))?;

        budget.wait(bus, |bus| bus.check_event(Event::MasterByteReceived))?;
        let hi = bus.receive_data();

        budget.wait(bus, |bus| bus.rx_not_empty())?;
        let lo = bus.receive_data();

        // NACK the next byte: the checksum is the last one we take
        bus.set_acknowledge(false);

        // always drained, even when the checksum is ignored, to keep the exchange aligned
        budget.wait(bus, |bus| bus.rx_not_empty())?;
        let crc = bus.receive_data();

        bus.generate_stop();
        Ok([hi, lo, crc])
    }
}
