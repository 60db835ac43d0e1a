//! I2C transaction engine
//!
//! Drives an [`I2cController`] through the phase sequences needed for
//! register access on a 7-bit slave:
//!
//! ```text
//! read : wait !BUSY, START+W (1 byte, soft end), wait TXIS, REG,
//!        wait TC, RESTART+R (N bytes, auto end), N x (wait RXNE, read),
//!        wait STOPF, clear STOPF
//! write: wait !BUSY, START+W (1 byte, reload), wait TXIS, REG,
//!        wait TCR, continue (1 byte, auto end), wait TXIS, DATA,
//!        wait STOPF, clear STOPF
//! ```
//!
//! Reads change direction mid-transfer and so need a repeated start after a
//! soft end. Writes keep the pointer and data in one transfer and so use
//! reload mode before the final auto-end byte.
//!
//! Every wait phase gets its own deadline, taken from the tick source when
//! the phase begins. An expired phase aborts the call with an error naming
//! that phase. The bus is left as it is; recovery belongs to the caller.

use crate::platform::traits::{
    EndMode, I2cConfig, I2cController, I2cStatus, RegisterAccess, StartMode, TickSource,
};
use crate::platform::{I2cError, Result};

/// Register address bit requesting auto-increment for multi-byte reads
pub const AUTO_INCREMENT: u8 = 0x80;

/// Largest read the controller can count in a single transfer
pub const MAX_READ_LEN: usize = u8::MAX as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Direction {
    Read,
    Write,
}

/// Transient state of one register transfer
#[derive(Debug)]
struct BusTransfer {
    /// Slave address in 8-bit form
    address: u8,
    register: u8,
    direction: Direction,
    count: u8,
    remaining: u8,
}

impl BusTransfer {
    fn new(address: u8, register: u8, direction: Direction, count: u8) -> Self {
        Self {
            address,
            register,
            direction,
            count,
            remaining: count,
        }
    }

    /// Register byte sent in the select phase
    fn select_byte(&self) -> u8 {
        if self.direction == Direction::Read && self.count > 1 {
            self.register | AUTO_INCREMENT
        } else {
            self.register
        }
    }
}

/// Timeout-guarded register transactions over a flag-level controller
///
/// # Type Parameters
///
/// * `C` - I2C controller
/// * `T` - Tick source used for per-phase deadlines
pub struct TransactionEngine<C, T> {
    controller: C,
    ticks: T,
    config: I2cConfig,
}

impl<C: I2cController, T: TickSource> TransactionEngine<C, T> {
    /// Create a new engine owning the controller
    pub fn new(controller: C, ticks: T, config: I2cConfig) -> Self {
        Self {
            controller,
            ticks,
            config,
        }
    }

    /// Engine configuration
    pub fn config(&self) -> &I2cConfig {
        &self.config
    }

    /// Underlying controller
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Underlying controller, for bus recovery by the caller
    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    /// Tick source
    pub fn ticks(&self) -> &T {
        &self.ticks
    }

    /// Release the controller and tick source
    pub fn release(self) -> (C, T) {
        (self.controller, self.ticks)
    }

    /// Poll the status register until `ready` holds or the phase budget runs out
    fn wait_for(&self, ready: impl Fn(I2cStatus) -> bool, error: I2cError) -> Result<()> {
        let start = self.ticks.now_ticks();
        loop {
            if ready(self.controller.status()) {
                return Ok(());
            }
            if self.ticks.elapsed_since(start) >= self.config.timeout_ticks {
                crate::log_warn!("I2C wait expired: {:?}", error);
                return Err(error);
            }
        }
    }

    fn wait_flag(&self, flag: I2cStatus, error: I2cError) -> Result<()> {
        self.wait_for(|status| status.contains(flag), error)
    }

    fn wait_idle(&self) -> Result<()> {
        self.wait_for(
            |status| !status.contains(I2cStatus::BUSY),
            I2cError::BusBusyTimeout,
        )
    }

    fn finish(&mut self) -> Result<()> {
        self.wait_flag(I2cStatus::STOPF, I2cError::StopTimeout)?;
        self.controller.clear_stop();
        Ok(())
    }
}

/// Convert a 7-bit address to the 8-bit form the controller expects
fn wire_address(address: u8) -> Result<u8> {
    if address > 0x7F {
        return Err(I2cError::InvalidAddress);
    }
    Ok(address << 1)
}

impl<C: I2cController, T: TickSource> RegisterAccess for TransactionEngine<C, T> {
    fn read_registers(&mut self, address: u8, register: u8, buffer: &mut [u8]) -> Result<()> {
        let address = wire_address(address)?;
        let count = match u8::try_from(buffer.len()) {
            Ok(0) | Err(_) => return Err(I2cError::InvalidLength),
            Ok(n) => n,
        };
        let mut transfer = BusTransfer::new(address, register, Direction::Read, count);

        self.wait_idle()?;
        self.controller
            .configure_transfer(transfer.address, 1, EndMode::SoftEnd, StartMode::StartWrite);

        self.wait_flag(I2cStatus::TXIS, I2cError::TransmitTimeout)?;
        self.controller.send_byte(transfer.select_byte());

        self.wait_flag(I2cStatus::TC, I2cError::TransferCompleteTimeout)?;
        self.controller.configure_transfer(
            transfer.address,
            transfer.count,
            EndMode::AutoEnd,
            StartMode::StartRead,
        );

        while transfer.remaining > 0 {
            self.wait_flag(I2cStatus::RXNE, I2cError::ReceiveTimeout)?;
            let index = usize::from(transfer.count - transfer.remaining);
            buffer[index] = self.controller.receive_byte();
            transfer.remaining -= 1;
        }

        self.finish()?;
        crate::log_trace!(
            "I2C {:?} {:#x} reg {:#x} x{}",
            transfer.direction,
            transfer.address,
            transfer.register,
            transfer.count
        );
        Ok(())
    }

    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<()> {
        let address = wire_address(address)?;
        let transfer = BusTransfer::new(address, register, Direction::Write, 1);

        self.wait_idle()?;
        self.controller
            .configure_transfer(transfer.address, 1, EndMode::Reload, StartMode::StartWrite);

        self.wait_flag(I2cStatus::TXIS, I2cError::TransmitTimeout)?;
        self.controller.send_byte(transfer.select_byte());

        self.wait_flag(I2cStatus::TCR, I2cError::ReloadTimeout)?;
        self.controller
            .configure_transfer(transfer.address, 1, EndMode::AutoEnd, StartMode::NoStartStop);

        self.wait_flag(I2cStatus::TXIS, I2cError::TransmitTimeout)?;
        self.controller.send_byte(value);

        self.finish()?;
        crate::log_trace!(
            "I2C {:?} {:#x} reg {:#x} = {:#x}",
            transfer.direction,
            transfer.address,
            transfer.register,
            value
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{BusEvent, MockI2cController, MockTicks};

    const ADDR: u8 = 0x68;
    const WIRE: u8 = 0xD0;
    const TIMEOUT: u32 = 100;

    fn engine(bus: MockI2cController) -> TransactionEngine<MockI2cController, MockTicks> {
        TransactionEngine::new(
            bus,
            MockTicks::auto_advance(1),
            I2cConfig {
                timeout_ticks: TIMEOUT,
            },
        )
    }

    #[test]
    fn test_single_byte_read_framing() {
        let mut bus = MockI2cController::new(ADDR);
        bus.set_register(0x75, 0x68);
        let mut engine = engine(bus);

        assert_eq!(engine.read_register(ADDR, 0x75), Ok(0x68));
        assert_eq!(
            engine.controller().events(),
            &[
                BusEvent::Configure {
                    address: WIRE,
                    count: 1,
                    end: EndMode::SoftEnd,
                    start: StartMode::StartWrite
                },
                BusEvent::Send(0x75),
                BusEvent::Configure {
                    address: WIRE,
                    count: 1,
                    end: EndMode::AutoEnd,
                    start: StartMode::StartRead
                },
                BusEvent::Receive(0x68),
                BusEvent::ClearStop,
            ]
        );
    }

    #[test]
    fn test_burst_read_sets_auto_increment_and_restarts_once() {
        let mut bus = MockI2cController::new(ADDR);
        for (i, value) in [1u8, 2, 3, 4, 5, 6].iter().enumerate() {
            bus.set_register(0x3B + i as u8, *value);
        }
        let mut engine = engine(bus);

        let mut buf = [0u8; 6];
        engine.read_registers(ADDR, 0x3B, &mut buf).unwrap();

        assert_eq!(buf, [1, 2, 3, 4, 5, 6]);
        let bus = engine.controller();
        assert_eq!(bus.events()[1], BusEvent::Send(0x3B | AUTO_INCREMENT));
        assert_eq!(bus.repeated_starts(), 1);
        assert_eq!(bus.transactions(), 1);
        assert_eq!(
            bus.events()[2],
            BusEvent::Configure {
                address: WIRE,
                count: 6,
                end: EndMode::AutoEnd,
                start: StartMode::StartRead
            }
        );
    }

    #[test]
    fn test_write_framing_uses_reload_then_autoend() {
        let mut engine = engine(MockI2cController::new(ADDR));

        engine.write_register(ADDR, 0x6B, 0x01).unwrap();

        let bus = engine.controller();
        assert_eq!(bus.register(0x6B), 0x01);
        assert_eq!(
            bus.events(),
            &[
                BusEvent::Configure {
                    address: WIRE,
                    count: 1,
                    end: EndMode::Reload,
                    start: StartMode::StartWrite
                },
                BusEvent::Send(0x6B),
                BusEvent::Configure {
                    address: WIRE,
                    count: 1,
                    end: EndMode::AutoEnd,
                    start: StartMode::NoStartStop
                },
                BusEvent::Send(0x01),
                BusEvent::ClearStop,
            ]
        );
        assert_eq!(bus.repeated_starts(), 0);
    }

    #[test]
    fn test_invalid_arguments_do_not_touch_bus() {
        let mut engine = engine(MockI2cController::new(ADDR));

        let mut empty: [u8; 0] = [];
        assert_eq!(
            engine.read_registers(ADDR, 0x3B, &mut empty),
            Err(I2cError::InvalidLength)
        );
        let mut huge = [0u8; MAX_READ_LEN + 1];
        assert_eq!(
            engine.read_registers(ADDR, 0x3B, &mut huge),
            Err(I2cError::InvalidLength)
        );
        assert_eq!(
            engine.write_register(0x80, 0x6B, 0),
            Err(I2cError::InvalidAddress)
        );
        assert!(engine.controller().events().is_empty());
    }

    fn stalled_read(flag: I2cStatus) -> (I2cError, MockTicks) {
        let mut bus = MockI2cController::new(ADDR);
        bus.stall(flag, 0);
        let mut engine = engine(bus);
        let mut buf = [0u8; 2];
        let err = engine.read_registers(ADDR, 0x41, &mut buf).unwrap_err();
        (err, engine.release().1)
    }

    #[test]
    fn test_read_phase_timeouts() {
        assert_eq!(stalled_read(I2cStatus::BUSY).0, I2cError::BusBusyTimeout);
        assert_eq!(stalled_read(I2cStatus::TXIS).0, I2cError::TransmitTimeout);
        assert_eq!(
            stalled_read(I2cStatus::TC).0,
            I2cError::TransferCompleteTimeout
        );
        assert_eq!(stalled_read(I2cStatus::RXNE).0, I2cError::ReceiveTimeout);
        assert_eq!(stalled_read(I2cStatus::STOPF).0, I2cError::StopTimeout);
    }

    #[test]
    fn test_write_phase_timeouts() {
        for (flag, expected) in [
            (I2cStatus::BUSY, I2cError::BusBusyTimeout),
            (I2cStatus::TXIS, I2cError::TransmitTimeout),
            (I2cStatus::TCR, I2cError::ReloadTimeout),
            (I2cStatus::STOPF, I2cError::StopTimeout),
        ] {
            let mut bus = MockI2cController::new(ADDR);
            bus.stall(flag, 0);
            let mut engine = engine(bus);
            assert_eq!(engine.write_register(ADDR, 0x1B, 0x00), Err(expected));
        }
    }

    #[test]
    fn test_timeout_is_bounded_by_budget() {
        let (err, ticks) = stalled_read(I2cStatus::BUSY);
        assert_eq!(err, I2cError::BusBusyTimeout);

        // One read for the phase start plus one per poll until the budget expires
        assert_eq!(ticks.reads(), TIMEOUT + 1);
    }

    #[test]
    fn test_coarse_clock_with_ready_flags() {
        // Half the budget passes per tick read; ready flags are still taken
        let mut bus = MockI2cController::new(ADDR);
        bus.set_register(0x75, 0x68);
        let mut engine = TransactionEngine::new(
            bus,
            MockTicks::auto_advance(TIMEOUT / 2),
            I2cConfig {
                timeout_ticks: TIMEOUT,
            },
        );

        assert_eq!(engine.read_register(ADDR, 0x75), Ok(0x68));
    }

    #[test]
    fn test_failed_transfer_leaves_bus_for_caller() {
        let mut bus = MockI2cController::new(ADDR);
        bus.stall(I2cStatus::TXIS, 0);
        let mut engine = engine(bus);

        assert_eq!(
            engine.read_register(ADDR, 0x75),
            Err(I2cError::TransmitTimeout)
        );
        // Bus still held: the next call reports busy until the caller recovers
        assert_eq!(
            engine.read_register(ADDR, 0x75),
            Err(I2cError::BusBusyTimeout)
        );

        engine.controller_mut().clear_stalls();
        engine.controller_mut().release_bus();
        assert!(engine.read_register(ADDR, 0x75).is_ok());
    }

    #[test]
    fn test_missing_slave_times_out_on_transmit() {
        let mut engine = engine(MockI2cController::new(0x69));
        assert_eq!(
            engine.write_register(ADDR, 0x6B, 0x00),
            Err(I2cError::TransmitTimeout)
        );
    }
}
