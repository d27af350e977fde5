//! Driver for the Bosch BMP180 (and pin-compatible BMP085) barometric sensor.
//!
//! The sensor is reached through any [`RegisterBus`], which every `i2c::BulkTransfer` master
//! implements. Calibration is read from the sensor's EEPROM on the first measurement.
//!
//! ```text
//! let mut sensor = Bmp180::with_default_address(bus);
//! sensor.fetch()?;
//! println!("{}", sensor); // temperature 15.0°C
//! ```

mod bus;
mod calibration;
mod error;
pub mod registers;
mod sensor;

pub use bus::RegisterBus;
pub use calibration::Coefficients;
pub use error::*;
pub use sensor::Bmp180;
