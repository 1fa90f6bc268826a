//! Testing utilities and mock implementations
//!
//! This module provides mock implementations of every collaborator the glue
//! talks to, so probe, teardown and the diagnostics can be exercised on the
//! host without hardware access.
//!
//! Mocks that mutate hardware state share an [`EventLog`], so a test can
//! assert the exact order of clock, register, firmware, pin and core calls.
//! Failing operations are never logged.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

use crate::diag::StationAddress;
use crate::driver::config::{PhyInterfaceMode, ResetTiming};
use crate::driver::platform::{
    AttributeRegistry, CoreSetup, MacCore, Platform, PlatformResources,
};
use crate::hal::clock::{CLK_MEM_NAME, CLK_TX_NAME, Clock};
use crate::hal::firmware::ScuFirmware;
use crate::hal::mdio::MdioBus;
use crate::hal::regmap::Regmap;
use crate::hal::reset::ResetLine;
use crate::internal::constants::MAC_ADDR_LEN;

// =============================================================================
// Event Log
// =============================================================================

/// A side effect observed by a mock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ClockEnable(&'static str),
    ClockDisable(&'static str),
    ClockRate(&'static str, u32),
    RegmapUpdate { offset: u32, mask: u32, value: u32 },
    FirmwareControl { resource: u32, control: u32, value: u32 },
    PinLevel(bool),
    CoreRegister,
    CoreUnregister,
    AttributeCreate(&'static str),
    AttributeRemove(&'static str),
}

/// Ordered record of side effects, shared between mocks
pub type EventLog = Rc<RefCell<Vec<Event>>>;

/// Create an empty shared log
pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

fn record(log: &EventLog, event: Event) {
    log.borrow_mut().push(event);
}

/// Error returned by every failing mock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// Mock MDIO bus for testing diagnostics without hardware
///
/// Unset registers read as 0. Registers marked unreadable fail every read.
///
/// # Example
///
/// ```ignore
/// let mdio = MockMdioBus::new();
/// mdio.set_register(0, 0x02, 0x0022);
/// mdio.set_register(0, 0x03, 0x1622);
/// assert_eq!(phy::identify(&mut mdio, 0), PHY_ID_KSZ9031);
/// ```
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Register values: (phy_addr, reg_addr) -> value
    registers: RefCell<HashMap<(u8, u8), u16>>,
    /// Registers whose reads fail
    unreadable: RefCell<HashSet<(u8, u8)>>,
    /// Record of successful writes: (phy_addr, reg_addr, value)
    write_log: RefCell<Vec<(u8, u8, u16)>>,
    /// Every write call, successful or not
    write_attempts: RefCell<usize>,
    /// Whether writes should fail
    write_failing: RefCell<bool>,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a register value
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.unreadable.borrow_mut().remove(&(phy_addr, reg_addr));
        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);
    }

    /// Make reads of a register fail
    pub fn set_unreadable(&self, phy_addr: u8, reg_addr: u8) {
        self.unreadable.borrow_mut().insert((phy_addr, reg_addr));
    }

    /// Get the current value of a register (for test verification)
    pub fn get_register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        self.registers.borrow().get(&(phy_addr, reg_addr)).copied()
    }

    /// Get all writes that have succeeded
    pub fn get_writes(&self) -> Vec<(u8, u8, u16)> {
        self.write_log.borrow().clone()
    }

    /// Number of write calls, including failed ones
    pub fn write_attempts(&self) -> usize {
        *self.write_attempts.borrow()
    }

    /// Make every write fail
    pub fn set_write_failing(&self, failing: bool) {
        *self.write_failing.borrow_mut() = failing;
    }
}

impl MdioBus for MockMdioBus {
    type Error = MockError;

    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16, MockError> {
        if self.unreadable.borrow().contains(&(phy_addr, reg_addr)) {
            return Err(MockError);
        }
        Ok(self
            .registers
            .borrow()
            .get(&(phy_addr, reg_addr))
            .copied()
            .unwrap_or(0))
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<(), MockError> {
        *self.write_attempts.borrow_mut() += 1;
        if *self.write_failing.borrow() {
            return Err(MockError);
        }

        self.write_log
            .borrow_mut()
            .push((phy_addr, reg_addr, value));
        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);
        Ok(())
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// One recorded wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayCall {
    Ns(u32),
    Us(u32),
    Ms(u32),
}

/// Mock delay for testing without actual timing
///
/// Records each wait and the unit it was requested in, so busy-wait versus
/// sleep decisions can be checked.
#[derive(Debug, Default)]
pub struct MockDelay {
    calls: Vec<DelayCall>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits requested so far
    pub fn calls(&self) -> Vec<DelayCall> {
        self.calls.clone()
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls.push(DelayCall::Ns(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.calls.push(DelayCall::Us(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls.push(DelayCall::Ms(ms));
    }
}

// =============================================================================
// Mock Reset Pin
// =============================================================================

/// Mock GPIO recording every level it is driven to
#[derive(Debug)]
pub struct MockPin {
    log: EventLog,
    failing: bool,
}

impl MockPin {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            failing: false,
        }
    }

    /// Fail every level change
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    fn drive(&mut self, high: bool) -> Result<(), ErrorKind> {
        if self.failing {
            return Err(ErrorKind::Other);
        }
        record(&self.log, Event::PinLevel(high));
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = ErrorKind;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true)
    }
}

// =============================================================================
// Mock Clock
// =============================================================================

/// Mock clock gate
#[derive(Debug)]
pub struct MockClock {
    name: &'static str,
    log: EventLog,
    fail_enable: bool,
    reject_rate: bool,
}

impl MockClock {
    pub fn new(name: &'static str, log: &EventLog) -> Self {
        Self {
            name,
            log: log.clone(),
            fail_enable: false,
            reject_rate: false,
        }
    }

    /// Fail every enable
    pub fn failing_enable(mut self) -> Self {
        self.fail_enable = true;
        self
    }

    /// Reject every rate change
    pub fn rejecting_rate(mut self) -> Self {
        self.reject_rate = true;
        self
    }
}

impl Clock for MockClock {
    type Error = MockError;

    fn enable(&mut self) -> Result<(), MockError> {
        if self.fail_enable {
            return Err(MockError);
        }
        record(&self.log, Event::ClockEnable(self.name));
        Ok(())
    }

    fn disable(&mut self) {
        record(&self.log, Event::ClockDisable(self.name));
    }

    fn set_rate(&mut self, hz: u32) -> Result<(), MockError> {
        if self.reject_rate {
            return Err(MockError);
        }
        record(&self.log, Event::ClockRate(self.name, hz));
        Ok(())
    }
}

// =============================================================================
// Mock Regmap
// =============================================================================

/// Mock shared register block
#[derive(Debug)]
pub struct MockRegmap {
    log: EventLog,
    failing: bool,
}

impl MockRegmap {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            failing: false,
        }
    }

    /// Fail every update
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }
}

impl Regmap for MockRegmap {
    type Error = MockError;

    fn update_bits(&mut self, offset: u32, mask: u32, value: u32) -> Result<(), MockError> {
        if self.failing {
            return Err(MockError);
        }
        record(&self.log, Event::RegmapUpdate { offset, mask, value });
        Ok(())
    }
}

// =============================================================================
// Mock System Controller
// =============================================================================

/// Mock system controller firmware
#[derive(Debug)]
pub struct MockFirmware {
    log: EventLog,
    failing_control: Option<u32>,
    failing_all: bool,
}

impl MockFirmware {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            failing_control: None,
            failing_all: false,
        }
    }

    /// Fail calls for one control id
    pub fn failing_control(mut self, control: u32) -> Self {
        self.failing_control = Some(control);
        self
    }

    /// Fail every call
    pub fn failing(mut self) -> Self {
        self.failing_all = true;
        self
    }
}

impl ScuFirmware for MockFirmware {
    type Error = MockError;

    fn set_control(&mut self, resource: u32, control: u32, value: u32) -> Result<(), MockError> {
        if self.failing_all || self.failing_control == Some(control) {
            return Err(MockError);
        }
        record(
            &self.log,
            Event::FirmwareControl {
                resource,
                control,
                value,
            },
        );
        Ok(())
    }
}

// =============================================================================
// Mock Station Address
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StationStep {
    Commit,
    Hardware,
}

/// Mock MAC core station address storage
#[derive(Debug)]
pub struct MockStation {
    hw: [u8; MAC_ADDR_LEN],
    committed: Vec<[u8; MAC_ADDR_LEN]>,
    steps: Vec<StationStep>,
}

impl MockStation {
    /// Start with `addr` programmed into the hardware
    pub fn new(addr: [u8; MAC_ADDR_LEN]) -> Self {
        Self {
            hw: addr,
            committed: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Addresses handed to the network stack, in order
    pub fn committed(&self) -> Vec<[u8; MAC_ADDR_LEN]> {
        self.committed.clone()
    }

    /// Address currently in the hardware filter
    pub fn hw_address(&self) -> [u8; MAC_ADDR_LEN] {
        self.hw
    }

    /// Whether every hardware write was preceded by a commit
    pub fn committed_before_hardware(&self) -> bool {
        let mut pending = false;
        for step in &self.steps {
            match step {
                StationStep::Commit => pending = true,
                StationStep::Hardware if !pending => return false,
                StationStep::Hardware => pending = false,
            }
        }
        true
    }
}

impl StationAddress for MockStation {
    fn read_hw_address(&mut self) -> [u8; MAC_ADDR_LEN] {
        self.hw
    }

    fn commit_address(&mut self, addr: &[u8; MAC_ADDR_LEN]) {
        self.committed.push(*addr);
        self.steps.push(StationStep::Commit);
    }

    fn write_hw_address(&mut self, addr: &[u8; MAC_ADDR_LEN]) {
        self.hw = *addr;
        self.steps.push(StationStep::Hardware);
    }
}

// =============================================================================
// Mock Platform
// =============================================================================

/// Mock device description
///
/// By default every handle resolves, the interface is RGMII at register
/// offset 0, and no reset line is declared. Flip the public fields to model
/// a different board.
#[derive(Debug)]
pub struct MockPlatform {
    log: EventLog,
    compatible: &'static str,
    clock_requests: usize,

    pub resources: Option<PlatformResources>,
    pub interface: PhyInterfaceMode,
    pub interface_offset: Option<u32>,
    pub rmii_refclk_ext: bool,

    pub tx_clock: bool,
    pub mem_clock: bool,
    pub regmap: bool,
    pub firmware: bool,

    pub reset_pin: bool,
    pub reset_unavailable: bool,
    pub reset_timing: ResetTiming,

    pub tx_clock_fails: bool,
    pub mem_clock_fails: bool,
    pub tx_rate_rejected: bool,
    pub regmap_fails: bool,
    pub firmware_fails: bool,
}

impl MockPlatform {
    pub fn new(compatible: &'static str, log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            compatible,
            clock_requests: 0,
            resources: Some(PlatformResources::default()),
            interface: PhyInterfaceMode::Rgmii,
            interface_offset: Some(0),
            rmii_refclk_ext: false,
            tx_clock: true,
            mem_clock: true,
            regmap: true,
            firmware: true,
            reset_pin: false,
            reset_unavailable: false,
            reset_timing: ResetTiming::new(),
            tx_clock_fails: false,
            mem_clock_fails: false,
            tx_rate_rejected: false,
            regmap_fails: false,
            firmware_fails: false,
        }
    }

    /// Number of clock lookups performed
    pub fn clock_requests(&self) -> usize {
        self.clock_requests
    }
}

impl Platform for MockPlatform {
    type Clock = MockClock;
    type Regmap = MockRegmap;
    type Firmware = MockFirmware;
    type ResetPin = MockPin;

    fn resources(&mut self) -> Option<PlatformResources> {
        self.resources
    }

    fn compatible(&self) -> &str {
        self.compatible
    }

    fn rmii_refclk_ext(&self) -> bool {
        self.rmii_refclk_ext
    }

    fn clock(&mut self, name: &'static str) -> Option<MockClock> {
        self.clock_requests += 1;
        let (present, fails) = match name {
            CLK_TX_NAME => (self.tx_clock, self.tx_clock_fails),
            CLK_MEM_NAME => (self.mem_clock, self.mem_clock_fails),
            _ => (false, false),
        };
        if !present {
            return None;
        }

        let mut clock = MockClock::new(name, &self.log);
        if fails {
            clock = clock.failing_enable();
        }
        if name == CLK_TX_NAME && self.tx_rate_rejected {
            clock = clock.rejecting_rate();
        }
        Some(clock)
    }

    fn interface_regmap(&mut self) -> Option<MockRegmap> {
        self.regmap.then(|| {
            let regmap = MockRegmap::new(&self.log);
            if self.regmap_fails {
                regmap.failing()
            } else {
                regmap
            }
        })
    }

    fn interface_offset(&self) -> Option<u32> {
        self.interface_offset
    }

    fn firmware(&mut self) -> Option<MockFirmware> {
        self.firmware.then(|| {
            let firmware = MockFirmware::new(&self.log);
            if self.firmware_fails {
                firmware.failing()
            } else {
                firmware
            }
        })
    }

    fn reset_line(&mut self) -> ResetLine<MockPin> {
        if self.reset_unavailable {
            ResetLine::Unavailable
        } else if self.reset_pin {
            ResetLine::Acquired(MockPin::new(&self.log))
        } else {
            ResetLine::Absent
        }
    }

    fn reset_timing(&self) -> ResetTiming {
        self.reset_timing
    }

    fn interface_mode(&self) -> PhyInterfaceMode {
        self.interface
    }
}

// =============================================================================
// Mock MAC Core and Attribute Registry
// =============================================================================

/// Mock MAC core driver
#[derive(Debug)]
pub struct MockCore {
    log: EventLog,
    setups: Vec<CoreSetup>,
    pub fail_register: bool,
}

impl MockCore {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            setups: Vec::new(),
            fail_register: false,
        }
    }

    /// Setup passed to the most recent successful registration
    pub fn last_setup(&self) -> Option<CoreSetup> {
        self.setups.last().copied()
    }
}

impl MacCore for MockCore {
    type Error = MockError;

    fn register(&mut self, setup: &CoreSetup) -> Result<(), MockError> {
        if self.fail_register {
            return Err(MockError);
        }
        self.setups.push(*setup);
        record(&self.log, Event::CoreRegister);
        Ok(())
    }

    fn unregister(&mut self) {
        record(&self.log, Event::CoreUnregister);
    }
}

/// Mock attribute registry
#[derive(Debug)]
pub struct MockRegistry {
    log: EventLog,
    failing: Vec<&'static str>,
}

impl MockRegistry {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            failing: Vec::new(),
        }
    }

    /// Refuse to create the named attribute
    pub fn fail_on(&mut self, name: &'static str) {
        self.failing.push(name);
    }
}

impl AttributeRegistry for MockRegistry {
    type Error = MockError;

    fn create(&mut self, name: &'static str) -> Result<(), MockError> {
        if self.failing.contains(&name) {
            return Err(MockError);
        }
        record(&self.log, Event::AttributeCreate(name));
        Ok(())
    }

    fn remove(&mut self, name: &'static str) {
        record(&self.log, Event::AttributeRemove(name));
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec;

    use super::*;

    #[test]
    fn mock_mdio_read_write() {
        let mut mdio = MockMdioBus::new();

        // Initially reads 0
        assert_eq!(mdio.read(0, 1).unwrap(), 0);

        mdio.set_register(0, 1, 0x1234);
        assert_eq!(mdio.read(0, 1).unwrap(), 0x1234);

        // Write updates the value
        mdio.write(0, 1, 0x5678).unwrap();
        assert_eq!(mdio.read(0, 1).unwrap(), 0x5678);
        assert_eq!(mdio.get_writes(), vec![(0, 1, 0x5678)]);
    }

    #[test]
    fn mock_mdio_failures() {
        let mut mdio = MockMdioBus::new();
        mdio.set_unreadable(2, 0x1d);
        assert!(mdio.read(2, 0x1d).is_err());
        assert_eq!(mdio.read(1, 0x1d).unwrap(), 0);

        mdio.set_write_failing(true);
        assert!(mdio.write(0, 0, 1).is_err());
        assert_eq!(mdio.write_attempts(), 1);
        assert!(mdio.get_writes().is_empty());
    }

    #[test]
    fn mock_delay_records_units() {
        use embedded_hal::delay::DelayNs;

        let mut delay = MockDelay::new();
        delay.delay_us(20);
        delay.delay_ms(30);

        assert_eq!(delay.calls(), vec![DelayCall::Us(20), DelayCall::Ms(30)]);
    }

    #[test]
    fn mocks_share_one_log() {
        let log = event_log();
        let mut clock = MockClock::new("tx", &log);
        let mut pin = MockPin::new(&log);

        clock.enable().unwrap();
        pin.set_low().unwrap();
        clock.disable();

        assert_eq!(
            *log.borrow(),
            vec![
                Event::ClockEnable("tx"),
                Event::PinLevel(false),
                Event::ClockDisable("tx"),
            ]
        );
    }

    #[test]
    fn mock_station_ordering() {
        let mut station = MockStation::new([0; 6]);
        assert!(station.committed_before_hardware());

        station.write_hw_address(&[1; 6]);
        assert!(!station.committed_before_hardware());
    }
}
