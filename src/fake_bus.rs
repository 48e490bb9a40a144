extern crate std;

use crate::bus::{Direction, Event, I2cPeripheral};

use std::collections::VecDeque;
use std::vec::Vec;

/// Everything the driver did to the peripheral, in order
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Call {
    IsBusy,
    CheckEvent(Event),
    RxNotEmpty,
    SetAcknowledge(bool),
    GenerateStart,
    GenerateStop,
    SendAddress(u8, Direction),
    SendData(u8),
    ReceiveData,
    Deinit,
    SoftwareReset,
    Init,
}

/// Scripted peripheral: every awaited condition holds (optionally after a few failed polls)
/// until a configured number of successes, after which the bus hangs.
#[derive(Debug, Default)]
pub struct FakeBus {
    pub calls: Vec<Call>,
    pub received: usize,
    rx: VecDeque<u8>,
    satisfied: usize,
    stall_after: Option<usize>,
    slow: u32,
    fails_left: u32,
}

impl FakeBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the bytes the target will clock out
    pub fn responding(bytes: &[u8]) -> Self {
        let mut bus = Self::new();
        bus.rx.extend(bytes.iter().copied());
        bus
    }

    /// A bus that never goes idle
    pub fn stuck_busy() -> Self {
        Self::new().stall_after(0)
    }

    /// Hang once `satisfied` conditions have been met
    pub fn stall_after(mut self, satisfied: usize) -> Self {
        self.stall_after = Some(satisfied);
        self
    }

    /// Make every condition fail `polls` times before it holds
    pub fn slow(mut self, polls: u32) -> Self {
        self.slow = polls;
        self.fails_left = polls;
        self
    }

    pub fn unstall(&mut self) {
        self.stall_after = None;
    }

    /// Number of condition polls observed
    pub fn polls(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::IsBusy | Call::CheckEvent(_) | Call::RxNotEmpty))
            .count()
    }

    /// Number of complete deinit, reset, init sequences observed
    pub fn recoveries(&self) -> usize {
        self.calls
            .windows(3)
            .filter(|w| *w == [Call::Deinit, Call::SoftwareReset, Call::Init])
            .count()
    }

    pub fn inits(&self) -> usize {
        self.calls.iter().filter(|call| **call == Call::Init).count()
    }

    fn poll(&mut self) -> bool {
        if self.stall_after.is_some_and(|limit| self.satisfied >= limit) {
            return false;
        }
        if self.fails_left > 0 {
            self.fails_left -= 1;
            return false;
        }
        self.fails_left = self.slow;
        self.satisfied += 1;
        true
    }
}

impl I2cPeripheral for FakeBus {
    fn is_busy(&mut self) -> bool {
        self.calls.push(Call::IsBusy);
        !self.poll()
    }
    fn check_event(&mut self, event: Event) -> bool {
        self.calls.push(Call::CheckEvent(event));
        self.poll()
    }
    fn rx_not_empty(&mut self) -> bool {
        self.calls.push(Call::RxNotEmpty);
        self.poll()
    }
    fn set_acknowledge(&mut self, enable: bool) {
        self.calls.push(Call::SetAcknowledge(enable));
    }
    fn generate_start(&mut self) {
        self.calls.push(Call::GenerateStart);
    }
    fn generate_stop(&mut self) {
        self.calls.push(Call::GenerateStop);
    }
    fn send_7bit_address(&mut self, address: u8, direction: Direction) {
        self.calls.push(Call::SendAddress(address, direction));
    }
    fn send_data(&mut self, byte: u8) {
        self.calls.push(Call::SendData(byte));
    }
    fn receive_data(&mut self) -> u8 {
        self.calls.push(Call::ReceiveData);
        self.received += 1;
        self.rx.pop_front().unwrap_or(0xFF)
    }
    fn deinit(&mut self) {
        self.calls.push(Call::Deinit);
    }
    fn software_reset(&mut self) {
        self.calls.push(Call::SoftwareReset);
    }
    fn init(&mut self) {
        self.calls.push(Call::Init);
    }
}
