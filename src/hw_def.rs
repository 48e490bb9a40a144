use crc::Algorithm;

/// 7-bit bus address of the Si7021 (0x80 on the wire in write form)
pub const I2C_ADDR: u8 = 0x40;

/// Measure temperature, hold master mode
pub const MEASURE_TEMPERATURE: u8 = 0xE3;
/// Measure relative humidity, hold master mode
pub const MEASURE_HUMIDITY: u8 = 0xE5;

/// Default number of failed polls a single transaction may spend waiting on the bus
pub const DEFAULT_POLL_BUDGET: u32 = 0x1000;

/// Every measurement answers with two data bytes followed by one checksum byte
pub const RESPONSE_LEN: usize = 3;

/// Name reported through the capability interface
pub const SENSOR_NAME: &str = "si7021";

/// CRC-8 used by the device: x^8 + x^5 + x^4 + 1, zero seed, MSB first
pub const CRC_8_SI7021: Algorithm<u8> = Algorithm {
    width: 8,
    poly: 0x31,
    init: 0x00,
    refin: false,
    refout: false,
    xorout: 0x00,
    check: 0xa2,
    residue: 0x00,
};

/// Convert a raw temperature code to degrees centigrade
///
/// `T = code * 175.72 / 2^16 - 46.85`, evaluated in double precision and narrowed at the end.
/// Codes outside the sensor's range are passed through.
pub fn raw_temp_to_centigrade(code: u16) -> f32 {
    (f64::from(code) * 175.72 / 65536.0 - 46.85) as f32
}

/// Convert a raw relative humidity code to percent
///
/// `RH = code * 125 / 2^16 - 6`, evaluated in double precision. Not clamped to 0..=100.
pub fn raw_rel_humid_to_percent(code: u16) -> f32 {
    (f64::from(code) * 125.0 / 65536.0 - 6.0) as f32
}

/// Measurement commands understood by the executor
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    /// trigger a temperature conversion
    MeasureTemperature,
    /// trigger a relative humidity conversion
    MeasureHumidity,
}
impl Command {
    /// One-byte opcode sent on the bus
    pub const fn opcode(self) -> u8 {
        match self {
            Command::MeasureTemperature => MEASURE_TEMPERATURE,
            Command::MeasureHumidity => MEASURE_HUMIDITY,
        }
    }
}
impl TryFrom<u8> for Command {
    type Error = crate::types::Error;

    fn try_from(opcode: u8) -> Result<Self, Self::Error> {
        match opcode {
            MEASURE_TEMPERATURE => Ok(Command::MeasureTemperature),
            MEASURE_HUMIDITY => Ok(Command::MeasureHumidity),
            _ => Err(crate::types::Error::InvalidCommand),
        }
    }
}
