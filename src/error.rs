//! Error types for the strip driver.

use core::fmt;

/// Errors that can occur while updating or transmitting strip data.
#[derive(Debug)]
pub enum Error<E> {
    /// Underlying SPI bus error.
    Spi(E),

    /// LED index out of valid range (indices are 1-based, up to the strip
    /// length).
    InvalidIndex,

    /// A transmit was attempted without an open bus transaction. Call
    /// [`IcledStrip::begin_transaction`](crate::IcledStrip::begin_transaction)
    /// first.
    TransactionNotStarted,
}

// Allow ergonomic `?` propagation from raw SPI errors.
impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::Spi(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Spi(e) => write!(f, "SPI error: {:?}", e),
            Error::InvalidIndex => write!(f, "LED index out of range"),
            Error::TransactionNotStarted => write!(f, "no open bus transaction"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Spi(e) => defmt::write!(f, "SPI error: {}", e),
            Error::InvalidIndex => defmt::write!(f, "LED index out of range"),
            Error::TransactionNotStarted => defmt::write!(f, "no open bus transaction"),
        }
    }
}
