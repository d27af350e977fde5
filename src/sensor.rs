use std::fmt;
use std::time::Duration;

use log::{debug, trace};

use crate::registers::*;
use crate::{Coefficients, Error, RegisterBus, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Calibration {
    Uncalibrated,
    Calibrated(Coefficients),
}

/// Handle to a single BMP180. Owns the bus it talks over; use [`Bmp180::release`] to get it back.
///
/// Calibration is read lazily on the first [`Bmp180::fetch`] and kept for the lifetime of the
/// handle. The handle is not meant to be shared between threads without a lock around it.
pub struct Bmp180<B: RegisterBus> {
    bus: B,
    address: u8,
    calibration: Calibration,
    conversion_delay: Duration,
    temperature: Option<f64>,
}

impl<B: RegisterBus> Bmp180<B> {
    pub fn new(bus: B, address: u8) -> Self {
        Self {
            bus,
            address,
            calibration: Calibration::Uncalibrated,
            conversion_delay: TEMPERATURE_CONVERSION_TIME,
            temperature: None,
        }
    }

    pub fn with_default_address(bus: B) -> Self {
        Self::new(bus, DEFAULT_ADDRESS)
    }

    /// Sets how long to wait between starting a conversion and reading the result.
    /// `Duration::ZERO` reads back immediately.
    pub fn with_conversion_delay(mut self, delay: Duration) -> Self {
        self.conversion_delay = delay;
        self
    }

    /// Measures the temperature, loading calibration first if this is the first successful
    /// call. On error the previously measured temperature is kept.
    pub fn fetch(&mut self) -> Result<(), B::Error> {
        let coefficients = self.calibrate()?;

        self.bus
            .write_byte_to_register(self.address, CONTROL, CMD_READ_TEMPERATURE)
            .map_err(Error::Bus)?;
        if !self.conversion_delay.is_zero() {
            std::thread::sleep(self.conversion_delay);
        }
        let raw = self
            .bus
            .read_word_from_register(self.address, DATA)
            .map_err(Error::Bus)?;
        trace!("raw temperature {raw:#06x}");

        let tenths = coefficients.compensate_temperature(raw)?;
        let temperature = f64::from(tenths) * 0.1;
        debug!("temperature {temperature:.1}°C (raw {raw})");
        self.temperature = Some(temperature);
        Ok(())
    }

    fn calibrate(&mut self) -> Result<Coefficients, B::Error> {
        match self.calibration {
            Calibration::Calibrated(coefficients) => Ok(coefficients),
            Calibration::Uncalibrated => {
                let coefficients = Coefficients::load(&mut self.bus, self.address)?;
                self.calibration = Calibration::Calibrated(coefficients);
                Ok(coefficients)
            }
        }
    }

    pub fn is_calibrated(&self) -> bool {
        matches!(self.calibration, Calibration::Calibrated(_))
    }

    pub fn coefficients(&self) -> Option<&Coefficients> {
        match &self.calibration {
            Calibration::Calibrated(coefficients) => Some(coefficients),
            Calibration::Uncalibrated => None,
        }
    }

    /// Last successfully measured temperature in °C, with 0.1°C resolution.
    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: RegisterBus> fmt::Display for Bmp180<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.temperature {
            Some(t) => write!(f, "temperature {:.1}°C", t),
            None => write!(f, "temperature not measured"),
        }
    }
}
