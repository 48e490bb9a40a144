//! Register-level primitives the executor needs from the I²C peripheral.
//!
//! The trait mirrors what a master-mode peripheral exposes on small MCUs: framing conditions,
//! address and data registers, and the event/status flags the standard master sequence polls.
//! None of the methods block; waiting is done by the executor.

/// Data direction carried in the R/W bit of the address byte
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    /// master writes to the target
    Transmitter,
    /// master reads from the target
    Receiver,
}

/// Master-mode bus events reported by the peripheral
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Event {
    /// START (or repeated START) has been generated, master mode entered
    MasterModeSelect,
    /// address acknowledged, master is now transmitting
    MasterTransmitterModeSelected,
    /// address acknowledged, master is now receiving
    MasterReceiverModeSelected,
    /// a data byte has been shifted out and acknowledged
    MasterByteTransmitted,
    /// a data byte has been received
    MasterByteReceived,
}

/// Master-mode I²C peripheral
pub trait I2cPeripheral {
    /// The bus is held by a transaction (ours or someone else's)
    fn is_busy(&mut self) -> bool;

    /// Check (and clear, where the hardware does so on read) a bus event
    fn check_event(&mut self, event: Event) -> bool;

    /// Receive data register holds an unread byte
    fn rx_not_empty(&mut self) -> bool;

    /// Enable or disable ACK generation for received bytes
    fn set_acknowledge(&mut self, enable: bool);

    /// Generate a START, or a repeated START while the bus is held
    fn generate_start(&mut self);

    /// Generate a STOP condition
    fn generate_stop(&mut self);

    /// Send a 7-bit target address qualified by `direction`
    fn send_7bit_address(&mut self, address: u8, direction: Direction);

    /// Load a byte into the transmit data register
    fn send_data(&mut self, byte: u8);

    /// Read the receive data register
    fn receive_data(&mut self) -> u8;

    /// Disable the peripheral and restore its registers to reset values
    fn deinit(&mut self);

    /// Pulse the peripheral's software reset
    fn software_reset(&mut self);

    /// Bring the peripheral up in its operating configuration (clock, addressing mode, ACK)
    fn init(&mut self);
}

impl<T: I2cPeripheral + ?Sized> I2cPeripheral for &mut T {
    fn is_busy(&mut self) -> bool {
        T::is_busy(self)
    }
    fn check_event(&mut self, event: Event) -> bool {
        T::check_event(self, event)
    }
    fn rx_not_empty(&mut self) -> bool {
        T::rx_not_empty(self)
    }
    fn set_acknowledge(&mut self, enable: bool) {
        T::set_acknowledge(self, enable)
    }
    fn generate_start(&mut self) {
        T::generate_start(self)
    }
    fn generate_stop(&mut self) {
        T::generate_stop(self)
    }
    fn send_7bit_address(&mut self, address: u8, direction: Direction) {
        T::send_7bit_address(self, address, direction)
    }
    fn send_data(&mut self, byte: u8) {
        T::send_data(self, byte)
    }
    fn receive_data(&mut self) -> u8 {
        T::receive_data(self)
    }
    fn deinit(&mut self) {
        T::deinit(self)
    }
    fn software_reset(&mut self) {
        T::software_reset(self)
    }
    fn init(&mut self) {
        T::init(self)
    }
}
