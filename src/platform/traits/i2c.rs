//! I2C interface traits
//!
//! Two layers are defined here:
//!
//! - [`I2cController`]: the flag-level view of an I2C peripheral with
//!   hardware-managed byte counting (STM32 I2C v2 style). Board support code
//!   implements this on top of its PAC.
//! - [`RegisterAccess`]: register-level reads and writes against a 7-bit
//!   slave. [`TransactionEngine`](crate::platform::i2c::TransactionEngine)
//!   implements it on top of any `I2cController`.

use crate::platform::Result;
use bitflags::bitflags;

bitflags! {
    /// Snapshot of the controller status register
    ///
    /// Bit positions follow the STM32 I2C v2 `ISR` layout.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct I2cStatus: u32 {
        /// Transmit data register empty and ready for the next byte
        const TXIS = 1 << 1;
        /// Receive data register holds a byte
        const RXNE = 1 << 2;
        /// Stop condition detected
        const STOPF = 1 << 5;
        /// Transfer complete (soft-end mode, NBYTES transferred)
        const TC = 1 << 6;
        /// Transfer complete reload (reload mode, NBYTES transferred)
        const TCR = 1 << 7;
        /// Bus busy
        const BUSY = 1 << 15;
    }
}

/// What the controller does once the programmed byte count is transferred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EndMode {
    /// Hold the bus and raise TC; software issues a restart or stop
    SoftEnd,
    /// Generate a stop condition automatically
    AutoEnd,
    /// Raise TCR; more bytes of the same transfer follow
    Reload,
}

/// Start condition to generate when a transfer is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartMode {
    /// Continue the current transfer without a new start or stop
    NoStartStop,
    /// (Re)start with the write direction
    StartWrite,
    /// (Re)start with the read direction
    StartRead,
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I2cConfig {
    /// Tick budget for each individual wait phase
    pub timeout_ticks: u32,
}

/// Default wait budget per phase: `0x1000 * 10` ticks
pub const LONG_TIMEOUT_TICKS: u32 = 0x1000 * 10;

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            timeout_ticks: LONG_TIMEOUT_TICKS,
        }
    }
}

/// Flag-level I2C controller
///
/// # Safety Invariants
///
/// - Peripheral clock, pins and timing must be configured before use
/// - Only one owner per I2C bus instance
/// - `address` arguments are in 8-bit form (7-bit address shifted left once)
pub trait I2cController {
    /// Current status flags
    fn status(&self) -> I2cStatus;

    /// Clear the stop-detected flag
    fn clear_stop(&mut self);

    /// Program slave address, byte count, end behaviour and start condition
    ///
    /// Writing this configuration with a start mode other than
    /// [`StartMode::NoStartStop`] generates a (repeated) start on the bus.
    fn configure_transfer(&mut self, address: u8, count: u8, end: EndMode, start: StartMode);

    /// Write one byte to the transmit data register
    fn send_byte(&mut self, byte: u8);

    /// Read one byte from the receive data register
    fn receive_byte(&mut self) -> u8;
}

/// Register-level access to a 7-bit addressed slave
pub trait RegisterAccess {
    /// Read `buffer.len()` consecutive registers starting at `register`
    ///
    /// Performs a combined transaction with a repeated START:
    /// START - ADDR(W) - REG - RESTART - ADDR(R) - DATA... - STOP
    ///
    /// # Errors
    ///
    /// Returns the [`I2cError`](crate::platform::I2cError) of the first wait
    /// phase that expires. The buffer contents are unspecified on error.
    fn read_registers(&mut self, address: u8, register: u8, buffer: &mut [u8]) -> Result<()>;

    /// Write a single register
    ///
    /// START - ADDR(W) - REG - DATA - STOP, as one continuous transfer.
    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<()>;

    /// Read a single register
    fn read_register(&mut self, address: u8, register: u8) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.read_registers(address, register, &mut buf)?;
        Ok(buf[0])
    }
}

impl<T: RegisterAccess + ?Sized> RegisterAccess for &mut T {
    fn read_registers(&mut self, address: u8, register: u8, buffer: &mut [u8]) -> Result<()> {
        (**self).read_registers(address, register, buffer)
    }

    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<()> {
        (**self).write_register(address, register, value)
    }
}
