//! Mock I2C controller for testing
//!
//! Simulates a flag-driven I2C controller wired to a single register-file
//! slave. The slave keeps a register pointer that the first written byte of
//! each write transfer loads (bit 7 masked off), and that auto-increments on
//! every data byte written or read.
//!
//! Flags can be stalled from a given transaction onward to exercise the
//! timeout path of every wait phase.

use crate::platform::traits::{EndMode, I2cController, I2cStatus, StartMode};

/// Maximum number of bus events kept in the log
pub const EVENT_CAPACITY: usize = 256;

/// Maximum number of register data writes kept in the log
pub const WRITE_CAPACITY: usize = 64;

const REGISTER_COUNT: usize = 128;

/// One interaction with the controller, for test verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    /// `configure_transfer` call
    Configure {
        address: u8,
        count: u8,
        end: EndMode,
        start: StartMode,
    },
    /// Byte written to the transmit register
    Send(u8),
    /// Byte taken from the receive register
    Receive(u8),
    /// Stop flag cleared
    ClearStop,
}

#[derive(Debug, Clone, Copy)]
struct Stall {
    flag: I2cStatus,
    from_transaction: usize,
}

/// Mock I2C controller
///
/// Records all bus events and register writes, and answers reads from an
/// internal register file.
#[derive(Debug)]
pub struct MockI2cController {
    address: u8,
    registers: [u8; REGISTER_COUNT],
    status: I2cStatus,
    pointer: u8,
    pointer_loaded: bool,
    remaining: u8,
    end: EndMode,
    transactions: usize,
    stalls: heapless::Vec<Stall, 8>,
    events: heapless::Vec<BusEvent, EVENT_CAPACITY>,
    writes: heapless::Vec<(u8, u8), WRITE_CAPACITY>,
}

impl MockI2cController {
    /// Create a controller whose slave answers at the given 7-bit address
    pub fn new(slave_address: u8) -> Self {
        Self {
            address: slave_address << 1,
            registers: [0; REGISTER_COUNT],
            status: I2cStatus::empty(),
            pointer: 0,
            pointer_loaded: false,
            remaining: 0,
            end: EndMode::AutoEnd,
            transactions: 0,
            stalls: heapless::Vec::new(),
            events: heapless::Vec::new(),
            writes: heapless::Vec::new(),
        }
    }

    /// Preset a slave register
    pub fn set_register(&mut self, register: u8, value: u8) {
        self.registers[register as usize & 0x7F] = value;
    }

    /// Preset a big-endian 16-bit value at `register` (high) and `register + 1` (low)
    pub fn set_register_i16(&mut self, register: u8, value: i16) {
        let [high, low] = value.to_be_bytes();
        self.set_register(register, high);
        self.set_register(register.wrapping_add(1), low);
    }

    /// Current value of a slave register
    pub fn register(&self, register: u8) -> u8 {
        self.registers[register as usize & 0x7F]
    }

    /// Keep `flag` from asserting in every transaction with index >= `from_transaction`
    ///
    /// Transactions are counted by write-direction start conditions, starting
    /// at 0. Stalling [`I2cStatus::BUSY`] makes the bus report busy before
    /// that transaction starts.
    pub fn stall(&mut self, flag: I2cStatus, from_transaction: usize) {
        let _ = self.stalls.push(Stall {
            flag,
            from_transaction,
        });
    }

    /// Remove all stalls
    pub fn clear_stalls(&mut self) {
        self.stalls.clear();
    }

    /// Force the bus back to idle, as a bus recovery would
    pub fn release_bus(&mut self) {
        self.status = I2cStatus::empty();
        self.remaining = 0;
    }

    /// Number of transactions started (write-direction start conditions)
    pub fn transactions(&self) -> usize {
        self.transactions
    }

    /// Get bus event log
    pub fn events(&self) -> &[BusEvent] {
        &self.events
    }

    /// Get register data writes as (register, value)
    pub fn writes(&self) -> &[(u8, u8)] {
        &self.writes
    }

    /// Clear event and write logs
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.writes.clear();
    }

    /// Number of read-direction (repeated) starts in the event log
    pub fn repeated_starts(&self) -> usize {
        self.events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    BusEvent::Configure {
                        start: StartMode::StartRead,
                        ..
                    }
                )
            })
            .count()
    }

    fn record(&mut self, event: BusEvent) {
        let _ = self.events.push(event);
    }

    fn addressed(&self, address: u8) -> bool {
        address & 0xFE == self.address
    }

    fn finish(&mut self) {
        match self.end {
            EndMode::SoftEnd => self.status.insert(I2cStatus::TC),
            EndMode::Reload => self.status.insert(I2cStatus::TCR),
            EndMode::AutoEnd => self.generate_stop(),
        }
    }

    fn generate_stop(&mut self) {
        self.status.remove(
            I2cStatus::TXIS | I2cStatus::RXNE | I2cStatus::TC | I2cStatus::TCR | I2cStatus::BUSY,
        );
        self.status.insert(I2cStatus::STOPF);
    }
}

impl I2cController for MockI2cController {
    fn status(&self) -> I2cStatus {
        let mut status = self.status;
        for stall in &self.stalls {
            if stall.flag.contains(I2cStatus::BUSY) {
                // Checked before the next transaction is configured
                if self.transactions >= stall.from_transaction {
                    status.insert(I2cStatus::BUSY);
                }
            } else if self.transactions > stall.from_transaction {
                status.remove(stall.flag);
            }
        }
        status
    }

    fn clear_stop(&mut self) {
        self.record(BusEvent::ClearStop);
        self.status.remove(I2cStatus::STOPF);
    }

    fn configure_transfer(&mut self, address: u8, count: u8, end: EndMode, start: StartMode) {
        self.record(BusEvent::Configure {
            address,
            count,
            end,
            start,
        });

        self.remaining = count;
        self.end = end;

        match start {
            StartMode::StartWrite => {
                self.transactions += 1;
                self.status.insert(I2cStatus::BUSY);
                self.status.remove(I2cStatus::TC | I2cStatus::TCR);
                self.pointer_loaded = false;
                if self.addressed(address) {
                    self.status.insert(I2cStatus::TXIS);
                }
            }
            StartMode::StartRead => {
                self.status.insert(I2cStatus::BUSY);
                self.status.remove(I2cStatus::TC | I2cStatus::TCR | I2cStatus::TXIS);
                if self.addressed(address) && count > 0 {
                    self.status.insert(I2cStatus::RXNE);
                }
            }
            StartMode::NoStartStop => {
                self.status.remove(I2cStatus::TCR);
                if count > 0 {
                    self.status.insert(I2cStatus::TXIS);
                }
            }
        }
    }

    fn send_byte(&mut self, byte: u8) {
        self.record(BusEvent::Send(byte));
        if !self.status.contains(I2cStatus::TXIS) {
            return;
        }

        if self.pointer_loaded {
            self.registers[self.pointer as usize] = byte;
            let _ = self.writes.push((self.pointer, byte));
            self.pointer = (self.pointer + 1) & 0x7F;
        } else {
            self.pointer = byte & 0x7F;
            self.pointer_loaded = true;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.status.remove(I2cStatus::TXIS);
            self.finish();
        }
    }

    fn receive_byte(&mut self) -> u8 {
        if !self.status.contains(I2cStatus::RXNE) {
            self.record(BusEvent::Receive(0));
            return 0;
        }

        let value = self.registers[self.pointer as usize];
        self.record(BusEvent::Receive(value));
        self.pointer = (self.pointer + 1) & 0x7F;

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.status.remove(I2cStatus::RXNE);
            self.finish();
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: u8 = 0x68;
    const WIRE: u8 = ADDR << 1;

    #[test]
    fn test_write_with_reload_then_autoend() {
        let mut i2c = MockI2cController::new(ADDR);
        i2c.configure_transfer(WIRE, 1, EndMode::Reload, StartMode::StartWrite);
        assert!(i2c.status().contains(I2cStatus::BUSY | I2cStatus::TXIS));

        i2c.send_byte(0x1B);
        assert!(i2c.status().contains(I2cStatus::TCR));

        i2c.configure_transfer(WIRE, 1, EndMode::AutoEnd, StartMode::NoStartStop);
        assert!(i2c.status().contains(I2cStatus::TXIS));
        i2c.send_byte(0x18);

        assert!(i2c.status().contains(I2cStatus::STOPF));
        assert!(!i2c.status().contains(I2cStatus::BUSY));
        assert_eq!(i2c.register(0x1B), 0x18);
        assert_eq!(i2c.writes(), &[(0x1B, 0x18)]);
    }

    #[test]
    fn test_burst_read_masks_auto_increment_bit() {
        let mut i2c = MockI2cController::new(ADDR);
        i2c.set_register(0x3B, 0x12);
        i2c.set_register(0x3C, 0x34);

        i2c.configure_transfer(WIRE, 1, EndMode::SoftEnd, StartMode::StartWrite);
        i2c.send_byte(0x3B | 0x80);
        assert!(i2c.status().contains(I2cStatus::TC));

        i2c.configure_transfer(WIRE | 1, 2, EndMode::AutoEnd, StartMode::StartRead);
        assert_eq!(i2c.receive_byte(), 0x12);
        assert_eq!(i2c.receive_byte(), 0x34);
        assert!(i2c.status().contains(I2cStatus::STOPF));
        assert_eq!(i2c.repeated_starts(), 1);

        i2c.clear_stop();
        assert_eq!(i2c.status(), I2cStatus::empty());
    }

    #[test]
    fn test_wrong_address_never_acknowledges() {
        let mut i2c = MockI2cController::new(ADDR);
        i2c.configure_transfer(0x3C << 1, 1, EndMode::SoftEnd, StartMode::StartWrite);
        assert!(!i2c.status().contains(I2cStatus::TXIS));
        assert!(i2c.status().contains(I2cStatus::BUSY));
    }

    #[test]
    fn test_stall_applies_from_transaction_index() {
        let mut i2c = MockI2cController::new(ADDR);
        i2c.stall(I2cStatus::TXIS, 1);

        i2c.configure_transfer(WIRE, 1, EndMode::SoftEnd, StartMode::StartWrite);
        assert!(i2c.status().contains(I2cStatus::TXIS));
        i2c.release_bus();

        i2c.configure_transfer(WIRE, 1, EndMode::SoftEnd, StartMode::StartWrite);
        assert!(!i2c.status().contains(I2cStatus::TXIS));
    }

    #[test]
    fn test_busy_stall() {
        let mut i2c = MockI2cController::new(ADDR);
        i2c.stall(I2cStatus::BUSY, 0);
        assert!(i2c.status().contains(I2cStatus::BUSY));

        i2c.clear_stalls();
        assert!(!i2c.status().contains(I2cStatus::BUSY));
    }

    #[test]
    fn test_set_register_i16_is_big_endian() {
        let mut i2c = MockI2cController::new(ADDR);
        i2c.set_register_i16(0x43, -2);
        assert_eq!(i2c.register(0x43), 0xFF);
        assert_eq!(i2c.register(0x44), 0xFE);
    }
}
