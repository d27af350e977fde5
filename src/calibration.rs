use log::{debug, trace, warn};

use crate::registers::*;
use crate::{Error, RegisterBus, Result};

/// Factory calibration coefficients stored in the sensor's EEPROM. These are unique to each
/// device and only ever read once per handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coefficients {
    pub ac1: i16,
    pub ac2: i16,
    pub ac3: i16,
    pub ac4: u16,
    pub ac5: u16,
    pub ac6: u16,
    pub b1: i16,
    pub b2: i16,
    pub mb: i16,
    pub mc: i16,
    pub md: i16,
}

fn read_u16<B: RegisterBus>(bus: &mut B, address: u8, register: u8) -> Result<u16, B::Error> {
    let word = bus
        .read_word_from_register(address, register)
        .map_err(Error::Bus)?;
    trace!("calibration register {register:#04x} = {word:#06x}");
    Ok(word)
}

// the EEPROM holds two's complement words for the signed coefficients
fn read_i16<B: RegisterBus>(bus: &mut B, address: u8, register: u8) -> Result<i16, B::Error> {
    read_u16(bus, address, register).map(|word| word as i16)
}

impl Coefficients {
    /// Reads all eleven coefficients in register order. Stops at the first failed read and
    /// returns its error; nothing is returned unless every read succeeded.
    pub fn load<B: RegisterBus>(bus: &mut B, address: u8) -> Result<Self, B::Error> {
        let coefficients = Self {
            ac1: read_i16(bus, address, CAL_AC1)?,
            ac2: read_i16(bus, address, CAL_AC2)?,
            ac3: read_i16(bus, address, CAL_AC3)?,
            ac4: read_u16(bus, address, CAL_AC4)?,
            ac5: read_u16(bus, address, CAL_AC5)?,
            ac6: read_u16(bus, address, CAL_AC6)?,
            b1: read_i16(bus, address, CAL_B1)?,
            b2: read_i16(bus, address, CAL_B2)?,
            mb: read_i16(bus, address, CAL_MB)?,
            mc: read_i16(bus, address, CAL_MC)?,
            md: read_i16(bus, address, CAL_MD)?,
        };
        debug!("loaded calibration from {address:#04x}: {coefficients:?}");
        Ok(coefficients)
    }

    /// Compensates a raw temperature reading. Returns the temperature in 0.1°C steps.
    ///
    /// All arithmetic is 32-bit signed. `(UT - AC6) * AC5` can exceed `i32` for extreme inputs;
    /// it wraps the same way the vendor's reference code does.
    pub fn compensate_temperature<E>(&self, raw_temperature: u16) -> Result<i32, E> {
        let ut = i32::from(raw_temperature);
        let x1 = ut
            .wrapping_sub(i32::from(self.ac6))
            .wrapping_mul(i32::from(self.ac5))
            >> 15;
        let divisor = x1 + i32::from(self.md);
        let x2 = match (i32::from(self.mc) * 2048).checked_div(divisor) {
            Some(x2) => x2,
            None => {
                warn!("raw temperature {raw_temperature} gives X1 + MD = 0 with {self:?}");
                return Err(Error::Conversion { raw_temperature });
            }
        };
        let b5 = x1 + x2;
        Ok((b5 + 8) >> 4)
    }
}
