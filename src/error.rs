/// Errors returned by the driver. `E` is the error type of the underlying bus.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// The bus transaction failed. The transport error is passed through untouched.
    #[error("bus communication failed: {0:?}")]
    Bus(E),

    /// The calibration data and the raw reading make the compensation divisor `X1 + MD` zero.
    #[error("cannot compensate raw temperature {raw_temperature}: calibration yields a zero divisor")]
    Conversion { raw_temperature: u16 },
}

pub type Result<T, E> = std::result::Result<T, Error<E>>;
