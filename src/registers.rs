use std::time::Duration;

/// 7-bit bus address of the BMP180 (and the older BMP085).
pub const DEFAULT_ADDRESS: u8 = 0x77;

// calibration EEPROM, one 16-bit big-endian word per coefficient
pub const CAL_AC1: u8 = 0xAA;
pub const CAL_AC2: u8 = 0xAC;
pub const CAL_AC3: u8 = 0xAE;
pub const CAL_AC4: u8 = 0xB0;
pub const CAL_AC5: u8 = 0xB2;
pub const CAL_AC6: u8 = 0xB4;
pub const CAL_B1: u8 = 0xB6;
pub const CAL_B2: u8 = 0xB8;
pub const CAL_MB: u8 = 0xBA;
pub const CAL_MC: u8 = 0xBC;
pub const CAL_MD: u8 = 0xBE;

pub const CONTROL: u8 = 0xF4;
/// Result register shared by temperature and pressure conversions.
pub const DATA: u8 = 0xF6;

pub const CMD_READ_TEMPERATURE: u8 = 0x2E;
pub const CMD_READ_PRESSURE: u8 = 0x34;

/// Default wait between starting a temperature conversion and reading it back. The datasheet
/// gives 4.5ms as the maximum conversion time.
pub const TEMPERATURE_CONVERSION_TIME: Duration = Duration::from_millis(5);
