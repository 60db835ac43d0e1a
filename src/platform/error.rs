//! Platform error types
//!
//! This module defines error types for bus operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, I2cError>;

/// I2C transaction errors
///
/// Each timeout variant names the wait phase that expired, so a caller can
/// tell a stuck bus from a silent slave without re-running the transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cError {
    /// Bus stayed busy before the transfer could start
    BusBusyTimeout,
    /// Transmit register never became ready (address or data byte not accepted)
    TransmitTimeout,
    /// Register pointer write never completed before the repeated start
    TransferCompleteTimeout,
    /// Controller never asked for the next byte of a reloaded write
    ReloadTimeout,
    /// A data byte never arrived
    ReceiveTimeout,
    /// Stop condition was never detected
    StopTimeout,
    /// Address does not fit in 7 bits
    InvalidAddress,
    /// Read length outside 1..=255
    InvalidLength,
}

impl I2cError {
    /// Whether this error came from an expired wait phase
    pub fn is_timeout(&self) -> bool {
        !matches!(self, I2cError::InvalidAddress | I2cError::InvalidLength)
    }
}

impl fmt::Display for I2cError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            I2cError::BusBusyTimeout => write!(f, "I2C bus busy timeout"),
            I2cError::TransmitTimeout => write!(f, "I2C transmit timeout"),
            I2cError::TransferCompleteTimeout => write!(f, "I2C transfer complete timeout"),
            I2cError::ReloadTimeout => write!(f, "I2C reload timeout"),
            I2cError::ReceiveTimeout => write!(f, "I2C receive timeout"),
            I2cError::StopTimeout => write!(f, "I2C stop timeout"),
            I2cError::InvalidAddress => write!(f, "Invalid I2C address"),
            I2cError::InvalidLength => write!(f, "Invalid I2C transfer length"),
        }
    }
}

impl embedded_hal::i2c::Error for I2cError {
    fn kind(&self) -> embedded_hal::i2c::ErrorKind {
        use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};

        match self {
            I2cError::BusBusyTimeout | I2cError::StopTimeout => ErrorKind::Bus,
            I2cError::TransmitTimeout => ErrorKind::NoAcknowledge(NoAcknowledgeSource::Unknown),
            _ => ErrorKind::Other,
        }
    }
}
