//! Clock Resource HAL
//!
//! The glue owns up to two clocks: an optional `mem` clock gating the MAC
//! memories and the `tx` clock driving the transmit interface. This module
//! is the only place their gates or rates are changed.

use crate::error::{ClockError, ClockResult};

/// Name of the mandatory transmit clock
pub const CLK_TX_NAME: &str = "tx";

/// Name of the memory clock required by some variants
pub const CLK_MEM_NAME: &str = "mem";

/// A gateable clock with a settable rate
pub trait Clock {
    /// Clock framework error
    type Error: core::fmt::Debug;

    /// Prepare and enable the clock
    fn enable(&mut self) -> Result<(), Self::Error>;

    /// Disable and unprepare the clock
    fn disable(&mut self);

    /// Request a new rate in Hz
    fn set_rate(&mut self, hz: u32) -> Result<(), Self::Error>;
}

/// Clock configuration state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockState {
    /// Never configured
    #[default]
    Unconfigured,
    /// All clocks enabled
    Enabled,
    /// All clocks disabled
    Disabled,
}

/// One named clock and whether this manager enabled it
#[derive(Debug)]
struct ClockSlot<C> {
    name: &'static str,
    clock: C,
    enabled: bool,
}

impl<C: Clock> ClockSlot<C> {
    const fn new(name: &'static str, clock: C) -> Self {
        Self {
            name,
            clock,
            enabled: false,
        }
    }

    fn enable(&mut self) -> bool {
        if self.enabled {
            return true;
        }
        self.enabled = self.clock.enable().is_ok();
        self.enabled
    }

    fn disable(&mut self) {
        if self.enabled {
            self.clock.disable();
            self.enabled = false;
        }
    }
}

/// Ordered clock set: mem (if present) then tx
///
/// Enabling is all-or-nothing and disabling always leaves every clock off.
#[derive(Debug)]
pub struct ClockManager<C: Clock> {
    mem: Option<ClockSlot<C>>,
    tx: ClockSlot<C>,
    state: ClockState,
    tx_rate: Option<u32>,
}

impl<C: Clock> ClockManager<C> {
    /// Create a manager for a tx clock and an optional mem clock
    pub fn new(tx: C, mem: Option<C>) -> Self {
        Self {
            mem: mem.map(|clock| ClockSlot::new(CLK_MEM_NAME, clock)),
            tx: ClockSlot::new(CLK_TX_NAME, tx),
            state: ClockState::Unconfigured,
            tx_rate: None,
        }
    }

    /// Enable or disable the clock set.
    ///
    /// Enable order is mem then tx. If tx fails the mem clock is disabled
    /// again before [`ClockError::TxClockFailed`] is returned. Disabling
    /// never fails.
    pub fn configure(&mut self, enable: bool) -> ClockResult<()> {
        if enable {
            self.enable_all()
        } else {
            self.disable_all();
            Ok(())
        }
    }

    fn enable_all(&mut self) -> ClockResult<()> {
        if let Some(mem) = self.mem.as_mut()
            && !mem.enable()
        {
            error!("{} clock enable failed", mem.name);
            return Err(ClockError::MemClockFailed);
        }

        if !self.tx.enable() {
            error!("{} clock enable failed", self.tx.name);
            if let Some(mem) = self.mem.as_mut() {
                mem.disable();
            }
            return Err(ClockError::TxClockFailed);
        }

        self.state = ClockState::Enabled;
        Ok(())
    }

    fn disable_all(&mut self) {
        self.tx.disable();
        if let Some(mem) = self.mem.as_mut() {
            mem.disable();
        }
        self.state = ClockState::Disabled;
    }

    /// Change the tx clock rate.
    ///
    /// On rejection the previous rate stays in effect.
    pub fn set_tx_rate(&mut self, hz: u32) -> ClockResult<()> {
        match self.tx.clock.set_rate(hz) {
            Ok(()) => {
                self.tx_rate = Some(hz);
                Ok(())
            }
            Err(_) => Err(ClockError::RateRejected),
        }
    }

    /// Current state
    pub fn state(&self) -> ClockState {
        self.state
    }

    /// Check if clocks are enabled
    pub fn is_enabled(&self) -> bool {
        self.state == ClockState::Enabled
    }

    /// Last tx rate accepted through [`set_tx_rate`](Self::set_tx_rate)
    pub fn tx_rate(&self) -> Option<u32> {
        self.tx_rate
    }

    /// Whether a mem clock is managed
    pub fn has_mem_clock(&self) -> bool {
        self.mem.is_some()
    }

    /// Give back the clock handles as `(tx, mem)`
    pub fn into_parts(self) -> (C, Option<C>) {
        (self.tx.clock, self.mem.map(|slot| slot.clock))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
