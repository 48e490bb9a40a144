//! This is a platform-agnostic Rust driver for the Si7021 humidity and temperature digital sensor,
//! written against the register-level primitives of a master-mode I²C peripheral and an
//! [`embedded-hal`] output pin gating the sensor's supply.
//!
//! [`embedded-hal`]: https://github.com/rust-embedded/embedded-hal/tree/master/embedded-hal
//!
//! This driver allows you to:
//! - Power the sensor up and down through its supply enable pin.
//! - Read temperature (°C) and relative humidity (%RH) in hold-master mode.
//! - Bound every bus wait with a poll budget shared by the whole transaction.
//! - Recover the bus (de-init, software reset, re-init) whenever a transaction stalls.
//! - Optionally verify the CRC-8 the sensor appends to every measurement.
//! - Register the sensor with a host through the object-safe [`Sensor`] capability trait.
//!
//! This driver does not support the following device features:
//! - No-hold master mode and polled conversion.
//! - Heater control, user register access, electronic ID and firmware revision.
//! - Interrupt driven or async bus access.
//!
//! ## Features
//!
//! - `defmt`: Enables logging using the `defmt` framework.
//! - `log`: Enables logging using the `log` framework.
//!
//! ## How a measurement runs
//!
//! [`Executor::execute`] waits for an idle bus, writes the measurement opcode, issues a repeated
//! START, reads the two data bytes MSB first, NACKs and drains the checksum byte, then issues a
//! STOP. Every wait is a busy poll; all waits of one call draw from the same budget
//! ([`Config::timeout`]). Running out of budget anywhere tears the peripheral down, resets and
//! reinitializes it, and returns [`Error::BusTimeout`]. Retrying is left to the caller.
//!
//! ## Example:
//!
//! ```ignore
//! use si7021::{Channel, Config, Query, Si7021};
//!
//! // Platform-specific
//! let bus = /* si7021::I2cPeripheral instance */;
//! let supply = /* embedded_hal::digital::OutputPin instance */;
//!
//! let mut si7021 = Si7021::new(bus, supply, Config::default());
//! si7021.configure(Query::Active, true).unwrap();
//!
//! loop {
//!     match (si7021.read(Channel::Temperature), si7021.read(Channel::Humidity)) {
//!         (Ok(t), Ok(rh)) => println!("{:0.1} °C, {:3} %RH", t, rh),
//!         // the bus has already been recovered, just try again next round
//!         (t, rh) => println!("read failed: {:?} {:?}", t.err(), rh.err()),
//!     }
//!
//!     // Platform-specific: sleep a while
//!     sleep_secs(60);
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");

mod bus;
mod device_impl;
mod executor;
#[cfg(test)]
mod fake_bus;
mod fmt;
mod hw_def;
mod sensor;
mod types;

pub use crate::{bus::*, executor::Executor, hw_def::*, sensor::Sensor, types::*};
